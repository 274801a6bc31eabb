use alloc::string::String;
use alloc::sync::Arc;

use crate::{FlattenedErrors, ValidationIssue, path_key};

/// Maps an issue to the message stored for it (e.g. a localized lookup keyed on the issue code).
pub type Translator<I> = Arc<dyn Fn(&I) -> String + Send + Sync>;

/// The default translator: the validator's own message.
pub fn default_message<I: ValidationIssue + ?Sized>(issue: &I) -> String {
    String::from(issue.message())
}

/// Flattens issues into per-field message lists, using each issue's own message.
///
/// `None` means "no issues" (e.g. the input passed validation) and yields an empty mapping.
pub fn flatten_errors<I: ValidationIssue>(issues: Option<&[I]>) -> FlattenedErrors {
    flatten_errors_with(issues, default_message::<I>)
}

/// Flattens issues into per-field message lists, storing `translate(issue)` for each issue.
///
/// Issues are visited once, in order: every issue contributes exactly one message, and messages
/// that share a key keep their input order. Nothing is deduplicated.
pub fn flatten_errors_with<I: ValidationIssue>(
    issues: Option<&[I]>,
    mut translate: impl FnMut(&I) -> String,
) -> FlattenedErrors {
    let Some(issues) = issues else {
        ftrace!("flatten_errors: no issues");
        return FlattenedErrors::new();
    };

    let mut errors = FlattenedErrors::new();
    for issue in issues {
        let key = path_key(issue.path());
        let message = translate(issue);
        ftrace!(key = key.as_str(), "flatten_errors: issue");
        errors.push(key, message);
    }

    fdebug!(issues = issues.len(), fields = errors.len(), "flatten_errors");
    errors
}

/// Reusable flattening configuration.
///
/// Cheap to clone: the translator is shared behind an `Arc`, so a form can build one `Flattener`
/// up front and hand copies to each submit handler.
pub struct Flattener<I> {
    translator: Option<Translator<I>>,
}

impl<I> Clone for Flattener<I> {
    fn clone(&self) -> Self {
        Self {
            translator: self.translator.clone(),
        }
    }
}

impl<I> Default for Flattener<I> {
    fn default() -> Self {
        Self { translator: None }
    }
}

impl<I> Flattener<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translator(
        mut self,
        translator: impl Fn(&I) -> String + Send + Sync + 'static,
    ) -> Self {
        self.translator = Some(Arc::new(translator));
        self
    }

    /// Drops a previously set translator, falling back to [`default_message`].
    pub fn without_translator(mut self) -> Self {
        self.translator = None;
        self
    }

    pub fn has_translator(&self) -> bool {
        self.translator.is_some()
    }
}

impl<I: ValidationIssue> Flattener<I> {
    pub fn flatten(&self, issues: Option<&[I]>) -> FlattenedErrors {
        match &self.translator {
            Some(translate) => flatten_errors_with(issues, |issue| translate(issue)),
            None => flatten_errors(issues),
        }
    }
}

impl<I> core::fmt::Debug for Flattener<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Flattener")
            .field("has_translator", &self.has_translator())
            .finish_non_exhaustive()
    }
}
