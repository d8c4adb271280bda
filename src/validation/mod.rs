//! Problem validation.
//!
//! Converts raw host input (numbers as typed into a form) into a
//! [`ProblemInstance`](crate::models::ProblemInstance), rejecting anything
//! that is not a well-formed instance. Validation is all-or-nothing.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{validate, RawCity, RawProblem};
