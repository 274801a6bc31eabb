use alloc::borrow::Cow;
use alloc::format;
use core::future::IntoFuture;

use field_errors::FlattenedErrors;

use crate::{Document, ScrollBlock, ScrollIntoView};

/// Selector for the marker class that error wrappers carry.
pub const ERROR_SELECTOR: &str = ".error";

/// Waits for `flush`, then scrolls the first `.error` element to the center of the viewport.
///
/// `flush` is the host framework's "pending updates applied" signal (Svelte `tick()`, Vue
/// `nextTick()`, a TUI redraw, ...). It is awaited before the lookup so that error wrappers
/// rendered by the current update are already mounted.
///
/// Resolves to `true` when an element was found and scrolled, `false` otherwise. Not finding one
/// is not an error and leaves the scroll position untouched.
pub async fn scroll_error_into_view<D, F>(document: &D, flush: F) -> bool
where
    D: Document + ?Sized,
    F: IntoFuture<Output = ()>,
{
    ErrorScroller::new().scroll(document, flush).await
}

/// Configurable version of [`scroll_error_into_view`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorScroller {
    selector: Cow<'static, str>,
    block: ScrollBlock,
}

impl Default for ErrorScroller {
    fn default() -> Self {
        Self {
            selector: Cow::Borrowed(ERROR_SELECTOR),
            block: ScrollBlock::Center,
        }
    }
}

impl ErrorScroller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(mut self, selector: impl Into<Cow<'static, str>>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Targets elements carrying `class` instead of `error`.
    pub fn with_error_class(mut self, class: &str) -> Self {
        self.selector = Cow::Owned(format!(".{class}"));
        self
    }

    pub fn with_block(mut self, block: ScrollBlock) -> Self {
        self.block = block;
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn block(&self) -> ScrollBlock {
        self.block
    }

    /// Awaits `flush` once, then scrolls the first element matching the selector into view.
    pub async fn scroll<D, F>(&self, document: &D, flush: F) -> bool
    where
        D: Document + ?Sized,
        F: IntoFuture<Output = ()>,
    {
        flush.await;

        let Some(element) = document.query_selector(&self.selector) else {
            atrace!(selector = self.selector(), "no error element");
            return false;
        };
        adebug!(
            selector = self.selector(),
            block = ?self.block,
            "scrolling error element into view"
        );
        element.scroll_into_view(self.block);
        true
    }

    /// Like [`Self::scroll`], but resolves to `false` right away when `errors` is empty.
    ///
    /// In that case `flush` is dropped without being polled and the document is not queried.
    pub async fn reveal<D, F>(&self, errors: &FlattenedErrors, document: &D, flush: F) -> bool
    where
        D: Document + ?Sized,
        F: IntoFuture<Output = ()>,
    {
        if errors.is_empty() {
            atrace!("reveal: no errors");
            return false;
        }
        self.scroll(document, flush).await
    }
}
