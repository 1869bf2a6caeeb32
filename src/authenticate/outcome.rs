use http::StatusCode;

/// Why a strategy declined to authenticate a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationFailure<I> {
    #[error("No auth token")]
    MissingToken,
    #[error("Token rejected by verifier")]
    Rejected(Option<I>),
}

impl<I> AuthenticationFailure<I> {
    pub fn info(&self) -> Option<&I> {
        match self {
            Self::MissingToken => None,
            Self::Rejected(info) => info.as_ref(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError<E> {
    #[error("Verification error: {0}")]
    Verifier(#[source] E),
    #[error("Verifier panicked: {0}")]
    Panicked(String),
}

/// The single result of one authentication attempt.
#[derive(Debug)]
pub enum Outcome<U, I, E> {
    Success {
        user: U,
        info: Option<I>,
    },
    Failure {
        reason: AuthenticationFailure<I>,
        status: StatusCode,
    },
    Error(E),
}

impl<U, I, E> Outcome<U, I, E> {
    /// Failures are always reported as `401 Unauthorized`.
    pub const fn fail(reason: AuthenticationFailure<I>) -> Self {
        Self::Failure {
            reason,
            status: StatusCode::UNAUTHORIZED,
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn user(&self) -> Option<&U> {
        match self {
            Self::Success { user, .. } => Some(user),
            _ => None,
        }
    }

    /// Hands the outcome to exactly one of the reporter's operations.
    pub fn report<Rp>(self, reporter: &mut Rp)
    where
        Rp: Reporter<U, I, E> + ?Sized,
    {
        match self {
            Self::Success { user, info } => reporter.success(user, info),
            Self::Failure { reason, status } => reporter.fail(reason, status),
            Self::Error(err) => reporter.error(err),
        }
    }
}

/// Receiver of authentication outcomes on the host side.
pub trait Reporter<U, I, E> {
    fn success(&mut self, user: U, info: Option<I>);

    fn fail(&mut self, reason: AuthenticationFailure<I>, status: StatusCode);

    fn error(&mut self, err: E);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Calls {
        success: Vec<(u32, Option<&'static str>)>,
        fail: Vec<(AuthenticationFailure<&'static str>, StatusCode)>,
        error: Vec<String>,
    }

    impl Reporter<u32, &'static str, String> for Calls {
        fn success(&mut self, user: u32, info: Option<&'static str>) {
            self.success.push((user, info));
        }

        fn fail(&mut self, reason: AuthenticationFailure<&'static str>, status: StatusCode) {
            self.fail.push((reason, status));
        }

        fn error(&mut self, err: String) {
            self.error.push(err);
        }
    }

    #[test]
    fn success_is_reported_once() {
        let mut calls = Calls::default();

        Outcome::Success {
            user: 1,
            info: Some("scope"),
        }
        .report(&mut calls);

        assert_eq!(calls.success, vec![(1, Some("scope"))]);
        assert!(calls.fail.is_empty());
        assert!(calls.error.is_empty());
    }

    #[test]
    fn failure_carries_unauthorized_status() {
        let mut calls = Calls::default();

        Outcome::<u32, _, String>::fail(AuthenticationFailure::MissingToken).report(&mut calls);

        assert_eq!(
            calls.fail,
            vec![(AuthenticationFailure::MissingToken, StatusCode::UNAUTHORIZED)]
        );
        assert!(calls.success.is_empty());
        assert!(calls.error.is_empty());
    }

    #[test]
    fn error_is_reported_once() {
        let mut calls = Calls::default();

        Outcome::<u32, &'static str, _>::Error(String::from("db down")).report(&mut calls);

        assert_eq!(calls.error, vec![String::from("db down")]);
        assert!(calls.success.is_empty());
        assert!(calls.fail.is_empty());
    }

    #[test]
    fn missing_token_message() {
        assert_eq!(
            AuthenticationFailure::<()>::MissingToken.to_string(),
            "No auth token"
        );
    }
}
