use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

/// Validation messages grouped by dotted field path.
///
/// Messages under one key keep the order in which they were pushed. Keys iterate in sorted order,
/// so two mappings built from the same issues compare and serialize identically.
///
/// With `feature = "serde"`, this (de)serializes as a plain map, e.g.
/// `{"address.city": ["Required"], "name": ["Required"]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FlattenedErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FlattenedErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `message` to the list stored under `key`, creating the list if needed.
    pub fn push(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(key.into())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.fields.get(key).map(Vec::as_slice)
    }

    /// The first message for `key`, which is what most templates display.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key)?.first().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Number of messages across all keys.
    pub fn message_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.fields
    }
}

impl<K: Into<String>, M: Into<String>> Extend<(K, M)> for FlattenedErrors {
    fn extend<T: IntoIterator<Item = (K, M)>>(&mut self, iter: T) {
        for (key, message) in iter {
            self.push(key, message);
        }
    }
}

impl<K: Into<String>, M: Into<String>> FromIterator<(K, M)> for FlattenedErrors {
    fn from_iter<T: IntoIterator<Item = (K, M)>>(iter: T) -> Self {
        let mut errors = Self::new();
        errors.extend(iter);
        errors
    }
}

impl IntoIterator for FlattenedErrors {
    type Item = (String, Vec<String>);
    type IntoIter = btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlattenedErrors {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl From<FlattenedErrors> for BTreeMap<String, Vec<String>> {
    fn from(errors: FlattenedErrors) -> Self {
        errors.fields
    }
}

/// A form value bundled with the errors found while validating it.
///
/// With `feature = "serde"`, the value's own fields are inlined next to an `errors` field, which
/// is the shape form actions usually hand back to the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithErrors<T> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub value: T,
    #[cfg_attr(feature = "serde", serde(default))]
    pub errors: FlattenedErrors,
}

impl<T> WithErrors<T> {
    pub fn new(value: T, errors: FlattenedErrors) -> Self {
        Self { value, errors }
    }

    pub fn without_errors(value: T) -> Self {
        Self {
            value,
            errors: FlattenedErrors::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_parts(self) -> (T, FlattenedErrors) {
        (self.value, self.errors)
    }
}

impl<T> Deref for WithErrors<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for WithErrors<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}
