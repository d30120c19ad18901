//! Error types for forms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a field can fail to produce an output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Error {
    /// The field is empty and was not wrapped in `optional`.
    #[error("This field is required.")]
    RequiredFieldIsEmpty,

    /// The field parser rejected a non-empty input.
    #[error("{0}")]
    ValidationFailed(String),
}

/// Non-empty, ordered list of errors.
///
/// The first error is stored apart from the others, so a list always has
/// one to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorList {
    first: Error,
    rest: Vec<Error>,
}

impl ErrorList {
    /// Creates a list holding a single error.
    pub fn new(first: Error) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Creates a list from a first error and the ones following it.
    pub fn with_rest(first: Error, rest: Vec<Error>) -> Self {
        Self { first, rest }
    }

    /// Returns the error with display priority.
    pub fn first(&self) -> &Error {
        &self.first
    }

    /// Returns the errors after the first one.
    pub fn rest(&self) -> &[Error] {
        &self.rest
    }

    /// Returns the number of errors, always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Iterates over all errors in order.
    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// Concatenates `other` after this list. The first error stays ours.
    #[must_use]
    pub fn append(mut self, other: Self) -> Self {
        self.rest.reserve(other.len());
        self.rest.push(other.first);
        self.rest.extend(other.rest);
        self
    }

    /// Returns all errors as a flat list.
    pub fn into_vec(self) -> Vec<Error> {
        let mut errors = Vec::with_capacity(self.len());
        errors.push(self.first);
        errors.extend(self.rest);
        errors
    }
}

impl From<Error> for ErrorList {
    fn from(error: Error) -> Self {
        Self::new(error)
    }
}

impl IntoIterator for ErrorList {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl std::fmt::Display for ErrorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first)?;
        for error in &self.rest {
            write!(f, "; {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}

/// Result type alias for form outputs.
pub type Result<T> = std::result::Result<T, ErrorList>;
