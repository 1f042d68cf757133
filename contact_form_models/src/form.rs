use std::{collections::BTreeMap, str::FromStr};

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fields::{FirstName, LastName, Message};

/// The four input fields of the contact form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    /// Label under which the field is displayed. Required fields are marked
    /// with an asterisk.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name*",
            Self::LastName => "Last Name*",
            Self::Email => "Email*",
            Self::Message => "Message",
        }
    }

    /// Key under which the field is referenced in error messages.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl FromStr for Field {
    type Err = InvalidFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-name" | "firstname" | "first" => Ok(Self::FirstName),
            "last-name" | "lastname" | "last" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            _ => Err(InvalidFieldError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown field name")]
pub struct InvalidFieldError;

/// Raw values of all form fields, mutated on every change event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        *match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        } = value;
    }
}

/// A single violated field rule. The messages are user-facing and rendered
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("firstName must be at least {} characters", FirstName::MIN_CHARS)]
    FirstNameTooShort,
    #[error("firstName must be at most {} characters", FirstName::MAX_CHARS)]
    FirstNameTooLong,
    #[error("lastName is a required field")]
    LastNameRequired,
    #[error("email is a required field")]
    EmailRequired,
    #[error("email must be a valid email address")]
    EmailInvalid,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            Self::FirstNameTooShort | Self::FirstNameTooLong => Field::FirstName,
            Self::LastNameRequired => Field::LastName,
            Self::EmailRequired | Self::EmailInvalid => Field::Email,
        }
    }
}

/// Validation errors keyed by field. A field carries at most one error and
/// an absent key means the field is valid. Always recomputed in full, never
/// patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field(), error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }
}

impl FromIterator<FieldError> for FormErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::default();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

/// Typed snapshot of the form values taken at the moment of a successful
/// submit. Independent of [`FormValues`]: later edits never mutate an
/// existing snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedValues {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: EmailAddress,
    /// `None` if the message field was left blank.
    pub message: Option<Message>,
}

#[cfg(test)]
mod tests {
    use contact_form_utils::assert_matches;

    use super::*;

    #[test]
    fn parse_field() {
        for (input, expected) in [
            ("first-name", Some(Field::FirstName)),
            ("FirstName", Some(Field::FirstName)),
            ("last", Some(Field::LastName)),
            ("email", Some(Field::Email)),
            ("message", Some(Field::Message)),
            ("subject", None),
            ("", None),
        ] {
            assert_eq!(input.parse::<Field>().ok(), expected, "input: {input:?}");
        }
    }

    #[test]
    fn email_address_shape() {
        "hello@gmail.com".parse::<EmailAddress>().unwrap();
        "aldo@gmail.com".parse::<EmailAddress>().unwrap();
        assert_matches!("bobillb@".parse::<EmailAddress>(), Err(_));
        assert_matches!("@".parse::<EmailAddress>(), Err(_));
    }

    #[test]
    fn form_errors_keep_one_entry_per_field() {
        let mut errors = FormErrors::default();
        errors.insert(FieldError::EmailRequired);
        errors.insert(FieldError::EmailInvalid);
        errors.insert(FieldError::LastNameRequired);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Email), Some(FieldError::EmailInvalid));
        assert_eq!(errors.get(Field::LastName), Some(FieldError::LastNameRequired));
        assert_eq!(errors.get(Field::FirstName), None);
    }

    #[test]
    fn field_error_messages() {
        for (error, message) in [
            (
                FieldError::FirstNameTooShort,
                "firstName must be at least 5 characters",
            ),
            (
                FieldError::FirstNameTooLong,
                "firstName must be at most 20 characters",
            ),
            (FieldError::LastNameRequired, "lastName is a required field"),
            (FieldError::EmailRequired, "email is a required field"),
            (
                FieldError::EmailInvalid,
                "email must be a valid email address",
            ),
        ] {
            assert_eq!(error.to_string(), message);
        }
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut values = FormValues::default();
        for field in Field::ALL {
            values.set(field, field.key().to_owned());
        }
        assert_eq!(values.first_name, "firstName");
        assert_eq!(values.get(Field::Message), "message");
    }
}
