use contact_form_models::form::{FormErrors, FormValues, SubmittedValues};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE: &str = include_str!("../templates/base.txt");

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = stringify!($ident);
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    FormTemplate("form.txt"),
    SummaryTemplate("summary.txt"),
}

/// Edit mode view: all current field values plus one line per validation
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormTemplate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub errors: Vec<String>,
}

impl FormTemplate {
    pub fn new(values: &FormValues, errors: &FormErrors) -> Self {
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            message: values.message.clone(),
            errors: errors.iter().map(|(_, error)| error.to_string()).collect(),
        }
    }
}

/// Submitted mode view: the literal submitted values. The message line is
/// omitted entirely if no message was entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryTemplate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: Option<String>,
}

impl From<&SubmittedValues> for SummaryTemplate {
    fn from(submitted: &SubmittedValues) -> Self {
        Self {
            first_name: (*submitted.first_name).clone(),
            last_name: (*submitted.last_name).clone(),
            email: submitted.email.to_string(),
            message: submitted.message.as_ref().map(|message| (**message).clone()),
        }
    }
}
