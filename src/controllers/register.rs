//! Registration flow state machine.

use std::sync::Arc;

use crate::forms::FormError;
use crate::forms::register::RegistrationForm;
use crate::gateway::{Navigator, RegistrationGateway, SessionSink};

/// Route navigated to after a confirmed registration.
pub const LANDING_ROUTE: &str = "/";

const REGISTER_FAILED_MESSAGE: &str = "Register failed. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    Editing,
    Validating,
    Submitting,
    Success,
    Failed,
}

/// Orchestrates the sign-up form: field state, client-side validation and
/// the single registration call.
///
/// Validation failures never reach the network. A server failure keeps the
/// entered draft so the user need not retype it; touching the form after a
/// failure returns the flow to `Editing`.
pub struct RegistrationFlow<G, S, N> {
    gateway: Arc<G>,
    session: Arc<S>,
    navigator: Arc<N>,
    form: RegistrationForm,
    state: FlowState,
    validated: bool,
    error: Option<String>,
    password_error: Option<String>,
    open: bool,
}

impl<G, S, N> RegistrationFlow<G, S, N>
where
    G: RegistrationGateway,
    S: SessionSink,
    N: Navigator,
{
    pub fn new(gateway: Arc<G>, session: Arc<S>, navigator: Arc<N>) -> Self {
        Self {
            gateway,
            session,
            navigator,
            form: RegistrationForm::default(),
            state: FlowState::Editing,
            validated: false,
            error: None,
            password_error: None,
            open: true,
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Mutable access to the draft; editing after a failed submission
    /// resumes the `Editing` state.
    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        if self.state == FlowState::Failed {
            self.state = FlowState::Editing;
        }
        &mut self.form
    }

    /// Validates the draft and, when it passes, performs the registration
    /// call and hands the access token to the session collaborator.
    pub async fn submit(&mut self) {
        self.state = FlowState::Validating;
        self.error = None;
        self.password_error = None;

        let new_user = match self.form.validate() {
            Ok(new_user) => new_user,
            Err(FormError::Incomplete | FormError::InvalidEmail) => {
                // Required-field marker; the form highlights what is missing.
                self.validated = true;
                self.state = FlowState::Editing;
                return;
            }
            Err(err @ FormError::PasswordPolicy) => {
                self.password_error = Some(err.to_string());
                self.state = FlowState::Editing;
                return;
            }
            Err(err @ FormError::PasswordMismatch) => {
                self.error = Some(err.to_string());
                self.state = FlowState::Editing;
                return;
            }
        };

        self.state = FlowState::Submitting;
        match self.gateway.register(&new_user).await {
            Ok(tokens) => {
                self.session.set_user_from_token(&tokens.access_token);
                self.state = FlowState::Success;
                self.close();
                self.navigator.navigate_to(LANDING_ROUTE);
            }
            Err(err) => {
                log::error!("Register failed: {err}");
                self.error = Some(REGISTER_FAILED_MESSAGE.to_string());
                self.state = FlowState::Failed;
            }
        }
    }

    /// Clears the draft and all markers and hides the form.
    pub fn close(&mut self) {
        self.form.clear();
        self.validated = false;
        self.error = None;
        self.password_error = None;
        self.open = false;
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Whether required-field feedback should be shown.
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn password_error(&self) -> Option<&str> {
        self.password_error.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
