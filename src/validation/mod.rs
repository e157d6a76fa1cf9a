//! Declarative form validation.
//!
//! A [`Schema`] is a table of field name to an ordered list of rules, each
//! with the message shown when it fails. [`Schema::validate`] is a pure
//! function of the submitted values; an empty result means the form is valid.

pub mod rules;
pub mod schemas;

pub use rules::{FormValues, Rule, Schema, ValidationErrors};
pub use schemas::{login_schema, signup_schema};
