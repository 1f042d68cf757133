pub mod fields;
pub mod form;
