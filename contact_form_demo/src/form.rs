use std::sync::LazyLock;

use contact_form_models::form::{FormValues, SubmittedValues};

/// Valid form values without a message.
pub static BOBBY: LazyLock<FormValues> = LazyLock::new(|| FormValues {
    first_name: "bobby".into(),
    last_name: "billy".into(),
    email: "hello@gmail.com".into(),
    message: String::new(),
});

pub static BOBBY_SUBMITTED: LazyLock<SubmittedValues> = LazyLock::new(|| SubmittedValues {
    first_name: "bobby".to_owned().try_into().unwrap(),
    last_name: "billy".to_owned().try_into().unwrap(),
    email: "hello@gmail.com".parse().unwrap(),
    message: None,
});

/// Valid form values with all four fields populated.
pub static ALDOA: LazyLock<FormValues> = LazyLock::new(|| FormValues {
    first_name: "aldoa".into(),
    last_name: "gamboa".into(),
    email: "aldo@gmail.com".into(),
    message: "hellobitch".into(),
});

pub static ALDOA_SUBMITTED: LazyLock<SubmittedValues> = LazyLock::new(|| SubmittedValues {
    first_name: "aldoa".to_owned().try_into().unwrap(),
    last_name: "gamboa".to_owned().try_into().unwrap(),
    email: "aldo@gmail.com".parse().unwrap(),
    message: Some("hellobitch".to_owned().into()),
});
