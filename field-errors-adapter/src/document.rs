/// Vertical alignment of an element scrolled into view (the DOM `block` option).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBlock {
    Start,
    #[default]
    Center,
    End,
    Nearest,
}

/// An element that can scroll its containers so that it becomes visible.
pub trait ScrollIntoView {
    fn scroll_into_view(&self, block: ScrollBlock);
}

/// The live document an adapter renders into.
///
/// Only lookup by CSS selector is required. Implementations that do not speak full CSS may
/// support just the class form (`.name`) used by [`crate::ErrorScroller`].
pub trait Document {
    type Element: ScrollIntoView;

    /// Returns the first element matching `selector`, in document order.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
}

impl<D: Document + ?Sized> Document for &D {
    type Element = D::Element;

    fn query_selector(&self, selector: &str) -> Option<Self::Element> {
        (**self).query_selector(selector)
    }
}
