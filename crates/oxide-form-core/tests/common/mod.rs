#![allow(dead_code)]

use oxide_form_core::{empty, Error, Field, FieldConfig, FilledForm, Form};
use regex::Regex;

/// Values record of a signup page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
    pub plan: String,
    pub company: String,
    pub website: String,
    pub newsletter: bool,
}

impl Signup {
    pub fn valid() -> Self {
        Self {
            name: "Neo".to_string(),
            email: "neo@example.com".to_string(),
            password: "followthewhiterabbit".to_string(),
            plan: "free".to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextAttrs {
    pub label: &'static str,
}

/// The widgets a signup page can render.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Text(Field<String, Signup, TextAttrs>),
    Checkbox(Field<bool, Signup, &'static str>),
}

impl Widget {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text(field) => field.attributes.label,
            Self::Checkbox(field) => field.attributes,
        }
    }
}

pub type SignupForm<O> = Form<Signup, O, Widget>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Free,
    Business,
}

pub fn text<O: 'static>(
    label: &'static str,
    config: FieldConfig<Signup, String, O, ()>,
) -> SignupForm<O> {
    Form::field(empty::blank, Widget::Text, config.attributes(TextAttrs { label }))
}

pub fn name_config() -> FieldConfig<Signup, String, String, ()> {
    FieldConfig::new(
        |v: &Signup| v.name.clone(),
        |name, v: &Signup| Signup { name, ..v.clone() },
        (),
    )
}

pub fn name_field() -> SignupForm<String> {
    text(
        "Name",
        name_config().parser(|input: &String| {
            if input.len() >= 3 {
                Ok(input.clone())
            } else {
                Err("too short".to_string())
            }
        }),
    )
}

pub fn email_field() -> SignupForm<String> {
    let pattern = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("valid email pattern");

    text(
        "Email",
        FieldConfig::new(
            |v: &Signup| v.email.clone(),
            |email, v: &Signup| Signup { email, ..v.clone() },
            (),
        )
        .parser(move |input: &String| {
            if pattern.is_match(input) {
                Ok(input.clone())
            } else {
                Err("Enter a valid email address.".to_string())
            }
        }),
    )
}

pub fn password_field() -> SignupForm<String> {
    text(
        "Password",
        FieldConfig::new(
            |v: &Signup| v.password.clone(),
            |password, v: &Signup| Signup { password, ..v.clone() },
            (),
        )
        .parser(|input: &String| {
            if input.len() >= 8 {
                Ok(input.clone())
            } else {
                Err("Ensure this value has at least 8 characters.".to_string())
            }
        }),
    )
}

pub fn plan_field() -> SignupForm<Plan> {
    text(
        "Plan",
        FieldConfig::new(
            |v: &Signup| v.plan.clone(),
            |plan, v: &Signup| Signup { plan, ..v.clone() },
            (),
        )
        .parser(|input: &String| match input.as_str() {
            "free" => Ok(Plan::Free),
            "business" => Ok(Plan::Business),
            other => Err(format!("unknown plan: {other}")),
        }),
    )
}

pub fn company_field() -> SignupForm<String> {
    text(
        "Company",
        FieldConfig::new(
            |v: &Signup| v.company.clone(),
            |company, v: &Signup| Signup { company, ..v.clone() },
            (),
        ),
    )
}

pub fn website_field() -> SignupForm<String> {
    text(
        "Website",
        FieldConfig::new(
            |v: &Signup| v.website.clone(),
            |website, v: &Signup| Signup { website, ..v.clone() },
            (),
        )
        .parser(|input: &String| {
            if input.starts_with("http://") || input.starts_with("https://") {
                Ok(input.clone())
            } else {
                Err("Enter a valid URL.".to_string())
            }
        }),
    )
}

pub fn newsletter_field() -> SignupForm<bool> {
    Form::field(
        empty::never,
        Widget::Checkbox,
        FieldConfig::new(
            |v: &Signup| v.newsletter,
            |newsletter, v: &Signup| Signup {
                newsletter,
                ..v.clone()
            },
            "Subscribe to the newsletter",
        ),
    )
}

/// Labels of the rendered fields, in order.
pub fn labels<O>(filled: &FilledForm<O, Widget>) -> Vec<&'static str> {
    filled.fields.iter().map(|(widget, _)| widget.label()).collect()
}

/// Label and displayed error of every rendered field, in order.
pub fn displayed<O>(filled: &FilledForm<O, Widget>) -> Vec<(&'static str, Option<Error>)> {
    filled
        .fields
        .iter()
        .map(|(widget, error)| (widget.label(), error.clone()))
        .collect()
}

pub fn failed(message: &str) -> Error {
    Error::ValidationFailed(message.to_string())
}
