use std::fmt::Display;

use http::StatusCode;

use crate::authenticate::AuthenticationFailure;

/// Why [`AuthenticationService`](crate::extension::AuthenticationService) refused to forward a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationRejection {
    #[error("Unauthorized: {reason}")]
    Failure { reason: String, status: StatusCode },
    #[error("Authentication error: {0}")]
    Error(String),
    #[error("Authentication misconfigured: {0}")]
    Configuration(String),
}

impl AuthenticationRejection {
    /// Failure rejection whose reason carries the verifier's info, if any.
    pub fn failure<I>(reason: AuthenticationFailure<I>, status: StatusCode) -> Self
    where
        I: Display,
    {
        let reason = match reason.info() {
            Some(info) => format!("{reason}: {info}"),
            None => reason.to_string(),
        };

        Self::Failure { reason, status }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Failure { status, .. } => *status,
            Self::Error(_) | Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(feature = "axum")]
mod axum {
    use axum::response::{IntoResponse, Response};

    use super::AuthenticationRejection;

    impl IntoResponse for AuthenticationRejection {
        fn into_response(self) -> Response {
            match &self {
                AuthenticationRejection::Failure { .. } => {
                    tracing::warn!(err = %self, "Unauthorized");
                }
                AuthenticationRejection::Error(_) | AuthenticationRejection::Configuration(_) => {
                    tracing::error!(err = %self, "Authentication failed");
                }
            }

            self.status().into_response()
        }
    }

    impl From<AuthenticationRejection> for Response {
        fn from(value: AuthenticationRejection) -> Self {
            value.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_reason_includes_rejection_info() {
        let rejection = AuthenticationRejection::failure(
            AuthenticationFailure::Rejected(Some("unknown token")),
            StatusCode::UNAUTHORIZED,
        );

        assert_eq!(
            rejection,
            AuthenticationRejection::Failure {
                reason: String::from("Token rejected by verifier: unknown token"),
                status: StatusCode::UNAUTHORIZED,
            }
        );
        assert_eq!(
            rejection.to_string(),
            "Unauthorized: Token rejected by verifier: unknown token"
        );
    }

    #[test]
    fn failure_without_info_keeps_plain_reason() {
        let rejection = AuthenticationRejection::failure(
            AuthenticationFailure::<&str>::Rejected(None),
            StatusCode::UNAUTHORIZED,
        );
        assert_eq!(rejection.to_string(), "Unauthorized: Token rejected by verifier");

        let rejection = AuthenticationRejection::failure(
            AuthenticationFailure::<&str>::MissingToken,
            StatusCode::UNAUTHORIZED,
        );
        assert_eq!(rejection.to_string(), "Unauthorized: No auth token");
        assert_eq!(rejection.status(), StatusCode::UNAUTHORIZED);
    }
}
