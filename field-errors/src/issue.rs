use alloc::string::String;
use alloc::vec::Vec;

use crate::{PathSegment, path_key};

/// A single field-level validation failure, as reported by a schema validator.
///
/// Implement this for your validator's issue type to flatten it without conversion. The crate
/// ships [`Issue`] for the common "path + message" shape.
pub trait ValidationIssue {
    /// Location of the failing value, from the root of the validated input.
    fn path(&self) -> &[PathSegment];
    /// Human-readable message supplied by the validator.
    fn message(&self) -> &str;
}

impl<I: ValidationIssue + ?Sized> ValidationIssue for &I {
    fn path(&self) -> &[PathSegment] {
        (**self).path()
    }

    fn message(&self) -> &str {
        (**self).message()
    }
}

/// An owned validation issue.
///
/// With `feature = "serde"`, this deserializes from a validator's JSON issue objects, e.g.
/// `{"code": "too_small", "path": ["items", 0, "qty"], "message": "Too small"}`. Fields other
/// than `path`, `message` and `code` are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Issue {
    #[cfg_attr(feature = "serde", serde(default))]
    pub path: Vec<PathSegment>,
    pub message: String,
    /// Machine-readable issue kind (e.g. `"invalid_type"`), useful for translators.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub code: Option<String>,
}

impl Issue {
    pub fn new<S: Into<PathSegment>>(
        path: impl IntoIterator<Item = S>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            message: message.into(),
            code: None,
        }
    }

    /// An issue with an empty path (filed under the `""` key).
    pub fn root(message: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// The dotted key this issue is filed under.
    pub fn key(&self) -> String {
        path_key(&self.path)
    }
}

impl ValidationIssue for Issue {
    fn path(&self) -> &[PathSegment] {
        &self.path
    }

    fn message(&self) -> &str {
        &self.message
    }
}
