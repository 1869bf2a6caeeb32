use std::future::Future;

/// Decision of a [`Verifier`] about a token it was able to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<U, I> {
    Verified { user: U, info: Option<I> },
    Rejected { info: Option<I> },
}

impl<U, I> Verdict<U, I> {
    pub const fn verified(user: U) -> Self {
        Self::Verified { user, info: None }
    }

    pub const fn verified_with(user: U, info: I) -> Self {
        Self::Verified {
            user,
            info: Some(info),
        }
    }

    pub const fn rejected() -> Self {
        Self::Rejected { info: None }
    }

    pub const fn rejected_with(info: I) -> Self {
        Self::Rejected { info: Some(info) }
    }
}

/// A found user verifies the token, nothing found rejects it.
impl<U, I> From<Option<U>> for Verdict<U, I> {
    fn from(user: Option<U>) -> Self {
        match user {
            Some(user) => Self::verified(user),
            None => Self::rejected(),
        }
    }
}

/// Checks a token extracted by a strategy.
///
/// `request` is only provided when the strategy is configured to pass the request along.
/// Errors are reported through the returned future; the strategy turns them, as well as
/// panics, into an error outcome.
pub trait Verifier<R: ?Sized> {
    type User;

    type Info;

    type Error;

    fn verify(
        &self,
        request: Option<&R>,
        token: String,
    ) -> impl Future<Output = Result<Verdict<Self::User, Self::Info>, Self::Error>> + Send;
}
