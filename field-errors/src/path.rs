use alloc::string::String;
use core::fmt::{self, Write};

/// Separator placed between path segments in a dotted key.
pub const PATH_SEPARATOR: char = '.';

/// One step in a validation issue path.
///
/// Validators address object properties by name and array elements by position, so a path such
/// as `items[2].name` arrives as `[Key("items"), Index(2), Key("name")]`.
///
/// With `feature = "serde"`, a segment is (de)serialized as a bare JSON string or integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Key(k) => f.write_str(k),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(String::from(key))
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Joins path segments into a dotted key (`["address", "street"]` → `"address.street"`).
///
/// Segment contents are not inspected or escaped. An empty path yields the empty key, which is
/// where validators put form-level (non-field) issues.
pub fn path_key(path: &[PathSegment]) -> String {
    let mut key = String::new();
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            key.push(PATH_SEPARATOR);
        }
        match segment {
            PathSegment::Key(k) => key.push_str(k),
            // Writing into a `String` cannot fail.
            PathSegment::Index(idx) => {
                let _ = write!(key, "{idx}");
            }
        }
    }
    key
}
