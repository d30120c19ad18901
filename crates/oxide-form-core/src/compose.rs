//! Operators combining forms.
//!
//! `append` and `zip` evaluate both sides and accumulate every error, so a
//! user sees all problems at once. `and_then` short-circuits: the dependent
//! form does not exist until the antecedent is valid. `optional` turns an
//! untouched section into a successful `None`.

use tracing::trace;

use crate::filled::FilledForm;
use crate::form::Form;

impl<V: 'static, O: 'static, F: 'static> Form<V, O, F> {
    fn combine<A: 'static, B: 'static>(
        self,
        next: Form<V, A, F>,
        f: impl Fn(O, A) -> B + Send + Sync + 'static,
    ) -> Form<V, B, F> {
        Form::from_fn(move |values| {
            let left = self.run(values);
            let right = next.run(values);

            let result = match (left.result, right.result) {
                (Ok(output), Ok(input)) => Ok(f(output, input)),
                (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Err(errors),
                (Err(left_errors), Err(right_errors)) => Err(left_errors.append(right_errors)),
            };

            let mut fields = left.fields;
            fields.extend(right.fields);

            FilledForm {
                fields,
                result,
                is_empty: left.is_empty && right.is_empty,
            }
        })
    }

    /// Applies the function produced by this form to the output of `next`.
    ///
    /// Both forms are always filled. Fields of `self` come first, and when
    /// both fail the errors of `self` lead the combined list.
    ///
    /// ```
    /// use oxide_form_core::Form;
    ///
    /// let form: Form<(), (u8, u8), ()> = Form::succeed(|a: u8| move |b: u8| (a, b))
    ///     .append(Form::succeed(1))
    ///     .append(Form::succeed(2));
    ///
    /// assert_eq!(form.fill(&()).result, Ok((1, 2)));
    /// ```
    #[must_use]
    pub fn append<A: 'static, B: 'static>(self, next: Form<V, A, F>) -> Form<V, B, F>
    where
        O: FnOnce(A) -> B,
    {
        self.combine(next, |g, input| g(input))
    }

    /// Pairs the outputs of two forms, accumulating errors like `append`.
    #[must_use]
    pub fn zip<A: 'static>(self, next: Form<V, A, F>) -> Form<V, (O, A), F> {
        self.combine(next, |output, input| (output, input))
    }

    /// Uses the output of this form to build the form that follows.
    ///
    /// While this form is invalid the dependent form is not built, and its
    /// fields are absent from the result.
    #[must_use]
    pub fn and_then<P: 'static>(
        self,
        f: impl Fn(O) -> Form<V, P, F> + Send + Sync + 'static,
    ) -> Form<V, P, F> {
        Form::from_fn(move |values| {
            let filled = self.run(values);

            match filled.result {
                Ok(output) => {
                    let dependent = f(output).run(values);
                    let mut fields = filled.fields;
                    fields.extend(dependent.fields);

                    FilledForm {
                        fields,
                        result: dependent.result,
                        is_empty: filled.is_empty && dependent.is_empty,
                    }
                }
                Err(errors) => {
                    trace!(errors = errors.len(), "dependent form skipped");
                    FilledForm {
                        fields: filled.fields,
                        result: Err(errors),
                        is_empty: filled.is_empty,
                    }
                }
            }
        })
    }

    /// Makes the form optional.
    ///
    /// An empty form succeeds with `None` and shows no errors. A form with
    /// some input keeps its errors.
    #[must_use]
    pub fn optional(self) -> Form<V, Option<O>, F> {
        Form::from_fn(move |values| {
            let filled = self.run(values);

            match filled.result {
                Ok(output) => FilledForm {
                    fields: filled.fields,
                    result: Ok(Some(output)),
                    is_empty: filled.is_empty,
                },
                Err(errors) if filled.is_empty => {
                    trace!(errors = errors.len(), "empty optional section, errors cleared");
                    FilledForm {
                        fields: filled
                            .fields
                            .into_iter()
                            .map(|(field, _)| (field, None))
                            .collect(),
                        result: Ok(None),
                        is_empty: true,
                    }
                }
                Err(errors) => FilledForm {
                    fields: filled.fields,
                    result: Err(errors),
                    is_empty: false,
                },
            }
        })
    }
}
