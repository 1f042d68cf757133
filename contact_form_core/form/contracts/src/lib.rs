use contact_form_models::form::{FormErrors, FormValues, SubmittedValues};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormValidator: Send + Sync + 'static {
    /// Checks all field rules and parses the values into a typed snapshot.
    ///
    /// On failure the returned [`FormErrors`] contain exactly one entry per
    /// violated field; satisfied rules produce no entry.
    fn check(&self, values: &FormValues) -> Result<SubmittedValues, FormErrors>;

    /// Runs all field rules without producing a snapshot.
    fn validate(&self, values: &FormValues) -> FormErrors {
        self.check(values).err().unwrap_or_default()
    }
}

#[cfg(feature = "mock")]
impl MockFormValidator {
    pub fn with_check(
        mut self,
        values: FormValues,
        result: Result<SubmittedValues, FormErrors>,
    ) -> Self {
        self.expect_check()
            .once()
            .with(mockall::predicate::eq(values))
            .return_once(move |_| result);
        self
    }
}

#[derive(Debug, Error)]
pub enum FormSubmitError {
    #[error("The form contains invalid fields.")]
    Invalid(FormErrors),
}
