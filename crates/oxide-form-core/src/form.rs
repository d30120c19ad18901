//! The form type, its constructors and mapping operators.

use std::sync::Arc;

use tracing::trace;

use crate::error::{Error, ErrorList};
use crate::field::{Field, FieldConfig};
use crate::filled::{FilledField, FilledForm};

type FillFn<V, O, F> = dyn Fn(&V) -> FilledForm<O, F> + Send + Sync;

/// A composable description of how to read, validate and update a typed
/// output from a values record `V`, rendering as fields of type `F`.
///
/// A form is an immutable function from values to a [`FilledForm`]. Cloning
/// is cheap and every clone can be filled from any thread.
pub struct Form<V, O, F> {
    fill: Arc<FillFn<V, O, F>>,
}

impl<V, O, F> Clone for Form<V, O, F> {
    fn clone(&self) -> Self {
        Self {
            fill: Arc::clone(&self.fill),
        }
    }
}

impl<V, O, F> std::fmt::Debug for Form<V, O, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form").finish_non_exhaustive()
    }
}

impl<V, O, F> Form<V, O, F> {
    /// Evaluates the form against `values`.
    pub fn fill(&self, values: &V) -> FilledForm<O, F> {
        let filled = self.run(values);
        trace!(
            fields = filled.fields.len(),
            valid = filled.result.is_ok(),
            empty = filled.is_empty,
            "filled form"
        );
        filled
    }

    /// Evaluates without tracing, for use by the operators.
    pub(crate) fn run(&self, values: &V) -> FilledForm<O, F> {
        (self.fill)(values)
    }
}

impl<V: 'static, O: 'static, F: 'static> Form<V, O, F> {
    /// Creates a form from a raw filling function.
    pub fn from_fn(fill: impl Fn(&V) -> FilledForm<O, F> + Send + Sync + 'static) -> Self {
        Self {
            fill: Arc::new(fill),
        }
    }

    /// A form with no fields that always produces `output`.
    pub fn succeed(output: O) -> Self
    where
        O: Clone + Send + Sync,
    {
        Self::from_fn(move |_| FilledForm {
            fields: Vec::new(),
            result: Ok(output.clone()),
            is_empty: true,
        })
    }

    /// Creates a single-field form from a caller-supplied filling function.
    ///
    /// No emptiness is enforced: `is_empty` and `result` are used as given.
    pub fn custom(fill_field: impl Fn(&V) -> FilledField<O, F> + Send + Sync + 'static) -> Self {
        Self::from_fn(move |values| fill_field(values).into())
    }

    /// Creates a single-field form.
    ///
    /// When `is_empty` holds for the current input the field fails with
    /// [`Error::RequiredFieldIsEmpty`] and the parser is not called.
    /// `build` wraps the generic [`Field`] record into the caller's field
    /// type.
    pub fn field<I, A>(
        is_empty: impl Fn(&I) -> bool + Send + Sync + 'static,
        build: impl Fn(Field<I, V, A>) -> F + Send + Sync + 'static,
        config: FieldConfig<V, I, O, A>,
    ) -> Self
    where
        V: Clone + Send + Sync,
        I: 'static,
        A: Clone + Send + Sync + 'static,
    {
        Self::custom(move |values: &V| {
            let input = (config.value)(values);
            let empty = is_empty(&input);

            let result = if empty {
                Err(Error::RequiredFieldIsEmpty.into())
            } else {
                (config.parser)(&input)
                    .map_err(|message| ErrorList::new(Error::ValidationFailed(message)))
            };

            let update = Arc::clone(&config.update);
            let bound = values.clone();
            let field = Field::new(
                input,
                move |input| update(input, &bound),
                config.attributes.clone(),
            );

            FilledField::new(build(field), result, empty)
        })
    }

    /// Picks the form to fill based on the current values.
    pub fn meta(select: impl Fn(&V) -> Self + Send + Sync + 'static) -> Self {
        Self::from_fn(move |values| select(values).run(values))
    }

    /// Transforms the output.
    #[must_use]
    pub fn map<P: 'static>(self, f: impl Fn(O) -> P + Send + Sync + 'static) -> Form<V, P, F> {
        Form::from_fn(move |values| {
            let filled = self.run(values);
            FilledForm {
                fields: filled.fields,
                result: filled.result.map(&f),
                is_empty: filled.is_empty,
            }
        })
    }

    /// Adapts the form to another values type.
    ///
    /// Update closures bound by fields inside the adapted form still
    /// return the inner values type `V`, not `U`. Map them back in the
    /// field constructor when the renderer works with `U`.
    #[must_use]
    pub fn map_values<U: 'static>(
        self,
        f: impl Fn(&U) -> V + Send + Sync + 'static,
    ) -> Form<U, O, F> {
        Form::from_fn(move |values: &U| self.run(&f(values)))
    }

    /// Transforms every field representation.
    #[must_use]
    pub fn map_field<G: 'static>(
        self,
        f: impl Fn(F) -> G + Send + Sync + 'static,
    ) -> Form<V, O, G> {
        Form::from_fn(move |values| {
            let filled = self.run(values);
            FilledForm {
                fields: filled
                    .fields
                    .into_iter()
                    .map(|(field, error)| (f(field), error))
                    .collect(),
                result: filled.result,
                is_empty: filled.is_empty,
            }
        })
    }
}
