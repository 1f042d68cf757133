mod form;
mod validator;

pub use form::{ContactForm, FormView};
pub use validator::FormValidatorImpl;

#[cfg(test)]
mod tests;
