//! Flatten schema-validation issues into per-field error message lists.
//!
//! For the error-scroll helper (wait for a render flush, then bring the first error into view),
//! see the `field-errors-adapter` crate.
//!
//! Schema validators report failures as a list of issues, each with a path into the validated
//! value and a message. Form templates want the opposite shape: a lookup from a field name such
//! as `address.street` to the messages to show next to that field. This crate does that
//! conversion and nothing else; it does not validate anything itself.
//!
//! It is UI-agnostic and `no_std` compatible (with `alloc`).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod errors;
mod flatten;
mod issue;
mod path;


pub use errors::{FlattenedErrors, WithErrors};
pub use flatten::{Flattener, Translator, default_message, flatten_errors, flatten_errors_with};
pub use issue::{Issue, ValidationIssue};
pub use path::{PATH_SEPARATOR, PathSegment, path_key};
