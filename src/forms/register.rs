use validator::ValidateEmail;

use crate::domain::password;
use crate::domain::types::{sanitize_person_name, sanitize_username};
use crate::domain::user::{NewUser, UserRole};
use crate::forms::FormError;

/// In-progress registration draft.
///
/// The username and name setters sanitize on every write, so the stored
/// draft never contains disallowed characters. Password fields are kept
/// verbatim; the policy is only evaluated at submission time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    username: String,
    password: String,
    confirm_password: String,
    name: String,
    surname: String,
    email: String,
    role: Option<UserRole>,
    terms_accepted: bool,
}

impl RegistrationForm {
    pub fn set_username(&mut self, value: &str) {
        self.username = sanitize_username(value);
    }

    pub fn set_name(&mut self, value: &str) {
        self.name = sanitize_person_name(value);
    }

    pub fn set_surname(&mut self, value: &str) {
        self.surname = sanitize_person_name(value);
    }

    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
    }

    pub fn set_password(&mut self, value: &str) {
        self.password = value.to_string();
    }

    pub fn set_confirm_password(&mut self, value: &str) {
        self.confirm_password = value.to_string();
    }

    pub fn set_role(&mut self, role: Option<UserRole>) {
        self.role = role;
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    /// Whether every required field is filled in, a role is selected and
    /// the terms checkbox is ticked.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
            && !self.name.is_empty()
            && !self.surname.is_empty()
            && !self.email.is_empty()
            && self.role.is_some()
            && self.terms_accepted
    }

    /// Runs the submission-time checks in order and converts the draft into
    /// the registration payload.
    ///
    /// The payload excludes the confirm-password field and the terms flag.
    pub fn validate(&self) -> Result<NewUser, FormError> {
        if !self.is_complete() {
            return Err(FormError::Incomplete);
        }
        if !self.email.validate_email() {
            return Err(FormError::InvalidEmail);
        }
        if !password::validate(&self.password) {
            return Err(FormError::PasswordPolicy);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        // is_complete already ruled out a missing role.
        let Some(role) = self.role else {
            return Err(FormError::Incomplete);
        };

        Ok(NewUser {
            username: self.username.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
            role,
        })
    }

    /// Resets the draft to its empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
