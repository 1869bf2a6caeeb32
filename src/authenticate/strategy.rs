use std::future::Future;

use super::outcome::Outcome;

/// An authentication method the host can run against a request without knowing how the
/// credential is carried or checked.
pub trait Strategy<R: ?Sized> {
    type User: Clone + Send + Sync + 'static;

    type Info;

    type Error;

    /// Raised when the strategy is wired up incorrectly. Never used for per-request outcomes.
    type ConfigurationError;

    fn name(&self) -> &str;

    fn authenticate(
        &self,
        request: &R,
    ) -> impl Future<
        Output = Result<Outcome<Self::User, Self::Info, Self::Error>, Self::ConfigurationError>,
    > + Send;
}
