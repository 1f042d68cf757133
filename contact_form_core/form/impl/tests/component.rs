//! Behavioral tests of the full component: real validator, real templates.
//! Assertions run against the rendered output, the way a user sees it.

use contact_form_core_form_impl::{ContactForm, FormValidatorImpl, FormView};
use contact_form_models::form::Field;
use contact_form_templates_contracts::{FormTemplate, SummaryTemplate, TemplateService};
use contact_form_templates_impl::TemplateServiceImpl;
use contact_form_utils::assert_matches;

type Sut = ContactForm<FormValidatorImpl>;

fn render(form: &Sut) -> String {
    let templates = TemplateServiceImpl::default();
    match form.view() {
        FormView::Editing { values, errors } => templates.render(&FormTemplate::new(values, errors)),
        FormView::Submitted(submitted) => templates.render(&SummaryTemplate::from(submitted)),
    }
    .unwrap()
}

fn error_lines(rendered: &str) -> usize {
    rendered
        .lines()
        .filter(|line| line.starts_with("Error:"))
        .count()
}

#[test]
fn renders_header_and_no_errors_initially() {
    let form = Sut::new(FormValidatorImpl);

    let rendered = render(&form);

    assert!(rendered.contains("Contact Form"));
    assert_eq!(error_lines(&rendered), 0);
}

#[test]
fn renders_one_error_for_a_short_first_name() {
    let mut form = Sut::new(FormValidatorImpl);

    form.set(Field::FirstName, "bob");

    let rendered = render(&form);
    assert_eq!(error_lines(&rendered), 1);
    assert!(rendered.contains("firstName must be at least 5 characters"));
}

#[test]
fn renders_three_errors_when_submitting_an_empty_form() {
    let mut form = Sut::new(FormValidatorImpl);

    assert_matches!(form.submit(), Err(_));

    assert_eq!(error_lines(&render(&form)), 3);
}

#[test]
fn renders_one_error_for_a_malformed_email() {
    let mut form = Sut::new(FormValidatorImpl);

    form.set(Field::FirstName, "bobby");
    form.set(Field::LastName, "gamboa");
    form.set(Field::Email, "bobillb@");

    let rendered = render(&form);
    assert_eq!(error_lines(&rendered), 1);
    assert!(rendered.contains("email must be a valid email address"));
}

#[test]
fn renders_last_name_required_when_submitted_without_one() {
    let mut form = Sut::new(FormValidatorImpl);

    form.set(Field::FirstName, "bobby");
    form.set(Field::Email, "bobillb@");
    assert_matches!(form.submit(), Err(_));

    assert!(render(&form).contains("lastName is a required field"));
}

#[test]
fn renders_submitted_values_and_omits_the_blank_message() {
    let mut form = Sut::new(FormValidatorImpl);

    form.set(Field::FirstName, "bobby");
    form.set(Field::LastName, "billy");
    form.set(Field::Email, "hello@gmail.com");
    form.submit().unwrap();

    let rendered = render(&form);
    assert!(rendered.contains("bobby"));
    assert!(rendered.contains("billy"));
    assert!(rendered.contains("hello@gmail"));
    assert!(!rendered.contains("Message"));
    assert_eq!(error_lines(&rendered), 0);
}

#[test]
fn renders_all_four_submitted_values() {
    let mut form = Sut::new(FormValidatorImpl);

    form.set(Field::FirstName, "aldoa");
    form.set(Field::LastName, "gamboa");
    form.set(Field::Email, "aldo@gmail.com");
    form.set(Field::Message, "hellobitch");
    form.submit().unwrap();

    let rendered = render(&form);
    assert!(rendered.contains("aldoa"));
    assert!(rendered.contains("gamboa"));
    assert!(rendered.contains("aldo@gmail.com"));
    assert!(rendered.contains("hellobitch"));
}

#[test]
fn editing_after_submit_keeps_the_snapshot() {
    let mut form = Sut::new(FormValidatorImpl);

    form.set(Field::FirstName, "bobby");
    form.set(Field::LastName, "billy");
    form.set(Field::Email, "hello@gmail.com");
    form.submit().unwrap();

    form.set(Field::FirstName, "aldoa");

    let submitted = form.submitted().unwrap();
    assert_eq!(*submitted.first_name, "bobby");
    assert!(render(&form).contains("First Name*: aldoa"));
}
