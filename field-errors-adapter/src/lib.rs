//! Adapter utilities for the `field-errors` crate.
//!
//! `field-errors` turns validation issues into per-field messages. Once a page renders those
//! messages, the usual next step is bringing the first one into view. This crate provides that
//! step without binding to any UI framework:
//!
//! - the host supplies the document through the [`Document`] / [`ScrollIntoView`] traits
//!   (a `web-sys` wrapper, a test double, a TUI form model, ...)
//! - the host supplies its "pending updates are flushed" signal as a future
//!
//! This crate is intentionally framework-agnostic (no DOM or wasm bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod document;
mod scroll;


pub use document::{Document, ScrollBlock, ScrollIntoView};
pub use scroll::{ERROR_SELECTOR, ErrorScroller, scroll_error_into_view};
