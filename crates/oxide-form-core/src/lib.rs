//! # oxide-form-core
//!
//! Composable, typed form values: validation and field bookkeeping without
//! rendering.
//!
//! A [`Form`] reads fields out of a values record, validates them, and
//! combines the outputs into one typed result. Filling a form with values
//! yields a [`FilledForm`]: the fields to render, each with the error it
//! should show, and the output once everything is valid.
//!
//! This crate provides:
//! - `Form::field` and `Form::custom` to build single-field forms
//! - `append`/`zip` to accumulate forms and all of their errors
//! - `and_then` for fields that depend on earlier outputs
//! - `optional` for sections that may be left blank
//! - `Form::meta` to choose a form from the current values
//! - `map`, `map_values` and `map_field` adapters
//!
//! Concrete field kinds belong to the caller. `Form::field` hands a generic
//! [`Field`] record to a caller-supplied constructor, so the field type is
//! usually an enum of the widgets an application renders.
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_form_core::{empty, Error, Field, FieldConfig, Form};
//!
//! #[derive(Debug, Clone, Default)]
//! struct Signup {
//!     email: String,
//!     age: String,
//! }
//!
//! #[derive(Debug)]
//! struct TextField {
//!     label: &'static str,
//!     value: String,
//! }
//!
//! fn text(field: Field<String, Signup, &'static str>) -> TextField {
//!     TextField { label: field.attributes, value: field.value }
//! }
//!
//! #[derive(Debug, PartialEq)]
//! struct Account {
//!     email: String,
//!     age: u8,
//! }
//!
//! let email = Form::field(
//!     empty::blank,
//!     text,
//!     FieldConfig::new(
//!         |v: &Signup| v.email.clone(),
//!         |email, v: &Signup| Signup { email, ..v.clone() },
//!         "Email",
//!     )
//!     .parser(|input: &String| {
//!         if input.contains('@') {
//!             Ok(input.clone())
//!         } else {
//!             Err("Enter a valid email address.".to_string())
//!         }
//!     }),
//! );
//!
//! let age = Form::field(
//!     empty::blank,
//!     text,
//!     FieldConfig::new(
//!         |v: &Signup| v.age.clone(),
//!         |age, v: &Signup| Signup { age, ..v.clone() },
//!         "Age",
//!     )
//!     .parser(|input: &String| input.parse::<u8>().map_err(|_| "Enter a number.".to_string())),
//! );
//!
//! let form = Form::succeed(|email| move |age| Account { email, age })
//!     .append(email)
//!     .append(age);
//!
//! // Nothing entered: both fields report an error.
//! let filled = form.fill(&Signup::default());
//! assert_eq!(filled.fields.len(), 2);
//! assert_eq!(filled.first_error(), Some(&Error::RequiredFieldIsEmpty));
//! assert!(filled.is_empty);
//!
//! let filled = form.fill(&Signup {
//!     email: "neo@example.com".to_string(),
//!     age: "37".to_string(),
//! });
//! assert_eq!(
//!     filled.output(),
//!     Some(&Account { email: "neo@example.com".to_string(), age: 37 })
//! );
//! ```
//!
//! ## Dependent and optional fields
//!
//! ```rust
//! use oxide_form_core::{FilledField, Form};
//!
//! let count: Form<u8, u8, &str> = Form::custom(|v: &u8| FilledField::new("count", Ok(*v), false));
//!
//! // The detail field only shows up once `count` is valid.
//! let form = count.and_then(|n| {
//!     Form::custom(move |_: &u8| FilledField::new("detail", Ok(u32::from(n) * 2), false))
//! });
//! assert_eq!(form.fill(&4).result, Ok(8));
//!
//! let nickname: Form<u8, u8, &str> = Form::custom(|_: &u8| FilledField::empty("nickname"));
//! let filled = nickname.optional().fill(&0);
//! assert_eq!(filled.result, Ok(None));
//! assert_eq!(filled.fields, vec![("nickname", None)]);
//! ```

mod compose;
mod error;
mod field;
mod filled;
mod form;

pub use error::{Error, ErrorList, Result};
pub use field::{empty, Field, FieldConfig, Getter, Parser, Setter};
pub use filled::{FilledField, FilledForm};
pub use form::Form;
