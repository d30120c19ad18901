//! Field records and the configuration used by `Form::field`.

use std::sync::Arc;

/// Parses a raw field input into an output, or explains why it can't.
pub type Parser<I, O> = Arc<dyn Fn(&I) -> std::result::Result<O, String> + Send + Sync>;

/// Reads a field input out of a values record.
pub type Getter<V, I> = Arc<dyn Fn(&V) -> I + Send + Sync>;

/// Writes a new field input into a copy of a values record.
pub type Setter<V, I> = Arc<dyn Fn(I, &V) -> V + Send + Sync>;

/// Configuration of a single field.
pub struct FieldConfig<V, I, O, A> {
    /// Turns a non-empty input into the field output.
    pub parser: Parser<I, O>,
    /// Projects the current input out of the values record.
    pub value: Getter<V, I>,
    /// Returns the values record updated with a new input.
    pub update: Setter<V, I>,
    /// Static, render-relevant attributes. Opaque to this crate.
    pub attributes: A,
}

impl<V, I, O, A: std::fmt::Debug> std::fmt::Debug for FieldConfig<V, I, O, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldConfig")
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

impl<V, I, O, A: Clone> Clone for FieldConfig<V, I, O, A> {
    fn clone(&self) -> Self {
        Self {
            parser: Arc::clone(&self.parser),
            value: Arc::clone(&self.value),
            update: Arc::clone(&self.update),
            attributes: self.attributes.clone(),
        }
    }
}

impl<V, I, A> FieldConfig<V, I, I, A>
where
    I: Clone + 'static,
{
    /// Creates a config whose output is the raw input.
    ///
    /// Use [`FieldConfig::parser`] to validate or convert the input.
    pub fn new(
        value: impl Fn(&V) -> I + Send + Sync + 'static,
        update: impl Fn(I, &V) -> V + Send + Sync + 'static,
        attributes: A,
    ) -> Self {
        Self {
            parser: Arc::new(|input: &I| Ok::<I, String>(input.clone())),
            value: Arc::new(value),
            update: Arc::new(update),
            attributes,
        }
    }
}

impl<V, I, O, A> FieldConfig<V, I, O, A> {
    /// Replaces the parser, changing the output type.
    #[must_use]
    pub fn parser<P>(
        self,
        parser: impl Fn(&I) -> std::result::Result<P, String> + Send + Sync + 'static,
    ) -> FieldConfig<V, I, P, A> {
        FieldConfig {
            parser: Arc::new(parser),
            value: self.value,
            update: self.update,
            attributes: self.attributes,
        }
    }

    /// Replaces the attributes.
    #[must_use]
    pub fn attributes<B>(self, attributes: B) -> FieldConfig<V, I, O, B> {
        FieldConfig {
            parser: self.parser,
            value: self.value,
            update: self.update,
            attributes,
        }
    }
}

/// A field evaluated against a values record, before the caller wraps it
/// into its own field representation.
pub struct Field<I, V, A> {
    /// The current raw input.
    pub value: I,
    /// Static attributes copied from the config.
    pub attributes: A,
    update: Arc<dyn Fn(I) -> V + Send + Sync>,
}

impl<I, V, A> Field<I, V, A> {
    /// Creates a field record with an update bound to some values.
    pub fn new(
        value: I,
        update: impl Fn(I) -> V + Send + Sync + 'static,
        attributes: A,
    ) -> Self {
        Self {
            value,
            attributes,
            update: Arc::new(update),
        }
    }

    /// Returns the values the field was filled with, updated with `input`.
    pub fn update(&self, input: I) -> V {
        (self.update)(input)
    }

    /// Transforms the attributes, keeping value and update.
    #[must_use]
    pub fn map_attributes<B>(self, f: impl FnOnce(A) -> B) -> Field<I, V, B> {
        Field {
            value: self.value,
            attributes: f(self.attributes),
            update: self.update,
        }
    }
}

impl<I: Clone, V, A: Clone> Clone for Field<I, V, A> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            attributes: self.attributes.clone(),
            update: Arc::clone(&self.update),
        }
    }
}

impl<I: std::fmt::Debug, V, A: std::fmt::Debug> std::fmt::Debug for Field<I, V, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("value", &self.value)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

/// Compares value and attributes. Update closures have no identity.
impl<I: PartialEq, V, A: PartialEq> PartialEq for Field<I, V, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.attributes == other.attributes
    }
}

/// Stock emptiness predicates for common input types.
pub mod empty {
    /// Text that is empty or only whitespace.
    pub fn blank<S: AsRef<str>>(input: &S) -> bool {
        input.as_ref().trim().is_empty()
    }

    /// Text with no characters at all.
    pub fn empty_str<S: AsRef<str>>(input: &S) -> bool {
        input.as_ref().is_empty()
    }

    /// An unset optional input.
    pub fn none<T>(input: &Option<T>) -> bool {
        input.is_none()
    }

    /// Inputs that always carry a value, like checkboxes.
    pub fn never<T>(_input: &T) -> bool {
        false
    }
}
