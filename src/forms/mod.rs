//! Form state backing the console views.

use thiserror::Error;

use crate::domain::password;

pub mod register;

/// Errors that can occur when validating form data.
///
/// The variants are mutually exclusive per submission attempt: validation
/// stops at the first failing check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please complete the form.")]
    Incomplete,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("{}", password::POLICY_MESSAGE)]
    PasswordPolicy,

    #[error("Passwords do not match")]
    PasswordMismatch,
}
