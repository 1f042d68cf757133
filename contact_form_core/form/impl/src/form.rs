use contact_form_core_form_contracts::{FormSubmitError, FormValidator};
use contact_form_models::form::{Field, FormErrors, FormValues, SubmittedValues};
use tracing::{debug, info, warn};

/// The contact form component: holds the current field values, the
/// validation errors recomputed on every change, and the snapshot of the
/// last successful submission.
#[derive(Debug, Clone)]
pub struct ContactForm<Validator> {
    validator: Validator,
    values: FormValues,
    errors: FormErrors,
    submitted: Option<SubmittedValues>,
    mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Editing,
    Submitted,
}

/// What the component currently displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormView<'a> {
    Editing {
        values: &'a FormValues,
        errors: &'a FormErrors,
    },
    Submitted(&'a SubmittedValues),
}

impl<Validator: FormValidator> ContactForm<Validator> {
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            values: FormValues::default(),
            errors: FormErrors::default(),
            submitted: None,
            mode: Mode::default(),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Snapshot of the last successful submission, if any.
    pub fn submitted(&self) -> Option<&SubmittedValues> {
        self.submitted.as_ref()
    }

    /// Updates a single field and recomputes all validation errors. The
    /// component returns to edit mode; an existing snapshot is retained
    /// unchanged.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value.into());
        self.errors = self.validator.check(&self.values).err().unwrap_or_default();
        self.mode = Mode::Editing;
        debug!(?field, errors = self.errors.len(), "field updated");
    }

    /// Revalidates all fields. On success the current values are snapshotted
    /// and the component switches to the submitted display mode; otherwise it
    /// stays in edit mode with all current errors attached.
    pub fn submit(&mut self) -> Result<&SubmittedValues, FormSubmitError> {
        match self.validator.check(&self.values) {
            Ok(snapshot) => {
                info!("form submitted");
                self.errors = FormErrors::default();
                self.mode = Mode::Submitted;
                Ok(self.submitted.insert(snapshot))
            }
            Err(errors) => {
                warn!(errors = errors.len(), "submission rejected");
                self.errors = errors.clone();
                Err(FormSubmitError::Invalid(errors))
            }
        }
    }

    pub fn view(&self) -> FormView<'_> {
        match (self.mode, &self.submitted) {
            (Mode::Submitted, Some(submitted)) => FormView::Submitted(submitted),
            _ => FormView::Editing {
                values: &self.values,
                errors: &self.errors,
            },
        }
    }
}
