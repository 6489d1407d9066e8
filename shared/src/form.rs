//! Create-user form state
//!
//! Owns the two text buffers, the current error text and the submitting flag.
//! A submission is split in two halves so the request itself can run on
//! whatever executor the caller uses:
//!
//! 1. [`FormState::begin_submission`] clears the error, raises the flag and
//!    hands out the request (or `None` while one is already in flight).
//! 2. [`FormState::finish_submission`] lowers the flag and applies the outcome.

use tracing::debug;
use zeroize::Zeroize;

use crate::criteria::{self, CriterionStatus};
use crate::signup::{SignupOutcome, SignupRequest};

/// State of the create-user form
#[derive(Default, Clone, PartialEq, Eq)]
pub struct FormState {
    username: String,
    password: String,
    error_message: Option<String>,
    is_submitting: bool,
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("error_message", &self.error_message)
            .field("is_submitting", &self.is_submitting)
            .finish()
    }
}

impl FormState {
    /// Empty form: no text, no error, idle
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Whether the submit control and the inputs accept interaction
    pub fn is_interactive(&self) -> bool {
        !self.is_submitting
    }

    /// Replace the username. Stored verbatim, no trimming.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Replace the password. The previous buffer is wiped.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password.zeroize();
        self.password = password.into();
    }

    /// Checklist for the current password
    pub fn criteria(&self) -> Vec<CriterionStatus> {
        criteria::evaluate(&self.password)
    }

    /// Start a submission.
    ///
    /// Returns `None` without touching any state if a request is already
    /// outstanding. The checklist is not consulted.
    pub fn begin_submission(&mut self) -> Option<SignupRequest> {
        if self.is_submitting {
            debug!("Submission ignored, a request is already in flight");
            return None;
        }

        self.error_message = None;
        self.is_submitting = true;

        Some(SignupRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Apply the outcome of the outstanding request.
    ///
    /// The submitting flag is always lowered. On success `on_created` is
    /// invoked with `true` and the error stays cleared; on failure the
    /// outcome's message replaces the error text.
    pub fn finish_submission<F>(&mut self, outcome: SignupOutcome, on_created: F)
    where
        F: FnOnce(bool),
    {
        self.is_submitting = false;

        match outcome.error_message() {
            None => on_created(true),
            Some(message) => self.error_message = Some(message.to_string()),
        }
    }
}

impl Drop for FormState {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}
