//! Signup Client Module
//!
//! Submits a new account to the challenge signup API. The request is a single
//! JSON POST with a fixed bearer token; only the response status is inspected.
//! There are no retries and no request timeout.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::constants::{
    BEARER_TOKEN, GENERIC_FAILURE_MESSAGE, NOT_AUTHENTICATED_MESSAGE,
    PASSWORD_NOT_ALLOWED_MESSAGE, SIGNUP_ENDPOINT,
};

/// JSON body of a signup request
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Outcome of a signup attempt, derived from the HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Any 2xx status
    Success,
    /// HTTP 400, the server refused the password
    InvalidPassword,
    /// HTTP 401 or 403
    Unauthorized,
    /// Any other status, or the request never produced a response
    GenericFailure,
}

impl SignupOutcome {
    /// Map a response status to an outcome
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_success() {
            SignupOutcome::Success
        } else if status == StatusCode::BAD_REQUEST {
            SignupOutcome::InvalidPassword
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            SignupOutcome::Unauthorized
        } else {
            SignupOutcome::GenericFailure
        }
    }

    /// Text shown to the user, or `None` on success
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            SignupOutcome::Success => None,
            SignupOutcome::InvalidPassword => Some(PASSWORD_NOT_ALLOWED_MESSAGE),
            SignupOutcome::Unauthorized => Some(NOT_AUTHENTICATED_MESSAGE),
            SignupOutcome::GenericFailure => Some(GENERIC_FAILURE_MESSAGE),
        }
    }
}

impl From<&SignupError> for SignupOutcome {
    fn from(error: &SignupError) -> Self {
        match error {
            SignupError::PasswordRejected => SignupOutcome::InvalidPassword,
            SignupError::NotAuthenticated(_) => SignupOutcome::Unauthorized,
            SignupError::UnexpectedStatus(_) | SignupError::Transport(_) => {
                SignupOutcome::GenericFailure
            }
        }
    }
}

/// Failure taxonomy of a signup attempt
#[derive(Error, Debug)]
pub enum SignupError {
    #[error("Password rejected by server")]
    PasswordRejected,

    #[error("Not authenticated (HTTP {0})")]
    NotAuthenticated(u16),

    #[error("Unexpected response status: HTTP {0}")]
    UnexpectedStatus(u16),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

fn user_agent() -> String {
    format!("create-user/{}", crate::VERSION)
}

/// HTTP client for the signup endpoint
#[derive(Debug, Clone)]
pub struct SignupClient {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for SignupClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupClient {
    /// Create a client targeting the challenge signup endpoint
    pub fn new() -> Self {
        Self::with_endpoint(SIGNUP_ENDPOINT)
    }

    /// Create a client targeting a different endpoint, e.g. a local mock server
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = match reqwest::Client::builder()
            .user_agent(user_agent())
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                warn!("Failed to build HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            }
        };

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the signup request and return the raw classification.
    ///
    /// `Ok(())` for any 2xx status. The response body is ignored.
    pub async fn try_create_user(&self, request: &SignupRequest) -> Result<(), SignupError> {
        debug!("Posting signup request for user '{}'", request.username);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", BEARER_TOKEN))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!("Signup endpoint responded with {}", status);

        match SignupOutcome::from_status(status) {
            SignupOutcome::Success => Ok(()),
            SignupOutcome::InvalidPassword => Err(SignupError::PasswordRejected),
            SignupOutcome::Unauthorized => Err(SignupError::NotAuthenticated(status.as_u16())),
            SignupOutcome::GenericFailure => Err(SignupError::UnexpectedStatus(status.as_u16())),
        }
    }

    /// Send the signup request and collapse every failure into an outcome
    pub async fn create_user(&self, request: &SignupRequest) -> SignupOutcome {
        match self.try_create_user(request).await {
            Ok(()) => {
                info!("User '{}' created", request.username);
                SignupOutcome::Success
            }
            Err(e) => {
                warn!("Signup for '{}' failed: {}", request.username, e);
                SignupOutcome::from(&e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        for code in [200, 201, 202, 204, 299] {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(SignupOutcome::from_status(status), SignupOutcome::Success);
        }
    }

    #[test]
    fn test_failure_statuses() {
        assert_eq!(
            SignupOutcome::from_status(StatusCode::BAD_REQUEST),
            SignupOutcome::InvalidPassword
        );
        assert_eq!(
            SignupOutcome::from_status(StatusCode::UNAUTHORIZED),
            SignupOutcome::Unauthorized
        );
        assert_eq!(
            SignupOutcome::from_status(StatusCode::FORBIDDEN),
            SignupOutcome::Unauthorized
        );

        for code in [301, 404, 409, 422, 429, 500, 503] {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(
                SignupOutcome::from_status(status),
                SignupOutcome::GenericFailure,
                "status {code}"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(SignupOutcome::Success.error_message(), None);
        assert_eq!(
            SignupOutcome::InvalidPassword.error_message(),
            Some(PASSWORD_NOT_ALLOWED_MESSAGE)
        );
        assert_eq!(
            SignupOutcome::Unauthorized.error_message(),
            Some(NOT_AUTHENTICATED_MESSAGE)
        );
        assert_eq!(
            SignupOutcome::GenericFailure.error_message(),
            Some(GENERIC_FAILURE_MESSAGE)
        );
    }

    #[test]
    fn test_error_to_outcome() {
        assert_eq!(
            SignupOutcome::from(&SignupError::PasswordRejected),
            SignupOutcome::InvalidPassword
        );
        assert_eq!(
            SignupOutcome::from(&SignupError::NotAuthenticated(403)),
            SignupOutcome::Unauthorized
        );
        assert_eq!(
            SignupOutcome::from(&SignupError::UnexpectedStatus(500)),
            SignupOutcome::GenericFailure
        );
    }

    #[test]
    fn test_request_body_shape() {
        let request = SignupRequest {
            username: " alice ".to_string(),
            password: "Secret1!".to_string(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "username": " alice ", "password": "Secret1!" })
        );
    }

    #[test]
    fn test_request_debug_redacts_password() {
        let request = SignupRequest {
            username: "alice".to_string(),
            password: "Secret1!".to_string(),
        };
        let debug = format!("{:?}", request);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("Secret1!"));
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(SignupClient::new().endpoint(), SIGNUP_ENDPOINT);
        assert_eq!(
            SignupClient::with_endpoint("http://127.0.0.1:1/signup").endpoint(),
            "http://127.0.0.1:1/signup"
        );
    }
}
