//! Results of filling a form with values.

use crate::error::{Error, ErrorList, Result};

/// A single field evaluated against concrete values.
///
/// This is what `Form::custom` callers produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledField<O, F> {
    /// The renderable field.
    pub field: F,
    /// The parsed output or the reasons it could not be produced.
    pub result: Result<O>,
    /// Whether the field input is considered blank.
    pub is_empty: bool,
}

impl<O, F> FilledField<O, F> {
    /// Creates a filled field.
    pub fn new(field: F, result: Result<O>, is_empty: bool) -> Self {
        Self {
            field,
            result,
            is_empty,
        }
    }

    /// Creates a blank field failing with `RequiredFieldIsEmpty`.
    pub fn empty(field: F) -> Self {
        Self::new(field, Err(Error::RequiredFieldIsEmpty.into()), true)
    }
}

/// A form evaluated against concrete values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledForm<O, F> {
    /// Fields in rendering order, each with the error it should display.
    pub fields: Vec<(F, Option<Error>)>,
    /// The form output, available when every evaluated field is valid.
    pub result: Result<O>,
    /// Whether every contributing field is blank.
    pub is_empty: bool,
}

impl<O, F> FilledForm<O, F> {
    /// Returns the output if the form is currently valid.
    pub fn output(&self) -> Option<&O> {
        self.result.as_ref().ok()
    }

    /// Returns the accumulated errors if the form is invalid.
    pub fn errors(&self) -> Option<&ErrorList> {
        self.result.as_ref().err()
    }

    /// Returns whether the form currently produces an output.
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns the error with display priority, if any.
    pub fn first_error(&self) -> Option<&Error> {
        self.errors().map(ErrorList::first)
    }

    /// Iterates over the fields currently displaying an error.
    pub fn field_errors(&self) -> impl Iterator<Item = (&F, &Error)> {
        self.fields
            .iter()
            .filter_map(|(field, error)| error.as_ref().map(|error| (field, error)))
    }

    /// Consumes the filled form, keeping only its result.
    pub fn into_result(self) -> Result<O> {
        self.result
    }
}

impl<O, F> From<FilledField<O, F>> for FilledForm<O, F> {
    fn from(filled: FilledField<O, F>) -> Self {
        let error = filled.result.as_ref().err().map(|errors| errors.first().clone());
        Self {
            fields: vec![(filled.field, error)],
            result: filled.result,
            is_empty: filled.is_empty,
        }
    }
}
