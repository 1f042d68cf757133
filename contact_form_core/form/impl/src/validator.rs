use contact_form_core_form_contracts::FormValidator;
use contact_form_models::{
    fields::{FirstName, FirstNameError, LastName, LastNameError, Message},
    form::{FieldError, FormErrors, FormValues, SubmittedValues},
};
use email_address::EmailAddress;

/// Validates by parsing each raw field into its typed counterpart.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidatorImpl;

impl FormValidator for FormValidatorImpl {
    fn check(&self, values: &FormValues) -> Result<SubmittedValues, FormErrors> {
        let mut errors = FormErrors::default();

        let first_name = match FirstName::try_new(values.first_name.clone()) {
            Ok(first_name) => Some(first_name),
            Err(FirstNameError::LenCharMinViolated) => {
                errors.insert(FieldError::FirstNameTooShort);
                None
            }
            Err(FirstNameError::LenCharMaxViolated) => {
                errors.insert(FieldError::FirstNameTooLong);
                None
            }
        };

        let last_name = match LastName::try_new(values.last_name.clone()) {
            Ok(last_name) => Some(last_name),
            Err(LastNameError::LenCharMinViolated) => {
                errors.insert(FieldError::LastNameRequired);
                None
            }
        };

        // An empty email is reported as missing, any other unparsable input
        // as malformed.
        let email = if values.email.is_empty() {
            errors.insert(FieldError::EmailRequired);
            None
        } else {
            match values.email.parse::<EmailAddress>() {
                Ok(email) => Some(email),
                Err(_) => {
                    errors.insert(FieldError::EmailInvalid);
                    None
                }
            }
        };

        let message = (!values.message.is_empty()).then(|| Message::from(values.message.clone()));

        match (first_name, last_name, email) {
            (Some(first_name), Some(last_name), Some(email)) => Ok(SubmittedValues {
                first_name,
                last_name,
                email,
                message,
            }),
            _ => Err(errors),
        }
    }
}
