use std::{
    fmt::Display,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use http::{request::Parts, Extensions, Request, StatusCode};
use tower::Service;

use crate::authenticate::{
    extract::{AuthenticationRejection, SealedAuthInfo, SealedAuthenticated},
    AuthenticationFailure, Reporter, Strategy,
};

/// Runs a [`Strategy`] for every request.
///
/// Authenticated requests reach the inner service with the user stored as
/// [`SealedAuthenticated`] in their extensions, and the verifier info, when present, as
/// [`SealedAuthInfo`]. Every other request is answered with the response built from an
/// [`AuthenticationRejection`].
#[derive(Debug, Clone)]
pub struct AuthenticationService<S, St> {
    service: S,
    strategy: St,
}

impl<S, St> AuthenticationService<S, St> {
    pub fn new(service: S, strategy: St) -> Self {
        Self { service, strategy }
    }
}

impl<S, St, B> Service<Request<B>> for AuthenticationService<S, St>
where
    St: Strategy<Parts> + Clone + Send + Sync + 'static,
    St::Info: Display + Clone + Send + Sync + 'static,
    St::Error: Display + Send,
    St::ConfigurationError: Display + Send,
    S: Service<Request<B>> + Clone + Send + 'static,
    S::Future: Send,
    S::Response: From<AuthenticationRejection>,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<S::Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let mut service = self.service.clone();
        let strategy = self.strategy.clone();

        Box::pin(async move {
            let (mut parts, body) = request.into_parts();

            let outcome = match strategy.authenticate(&parts).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    return Ok(From::from(AuthenticationRejection::Configuration(
                        err.to_string(),
                    )))
                }
            };

            let rejection = {
                let mut reporter = ExtensionsReporter::new(&mut parts.extensions);
                outcome.report(&mut reporter);

                reporter.rejection
            };

            if let Some(rejection) = rejection {
                return Ok(From::from(rejection));
            }

            tracing::debug!(strategy = strategy.name(), "Authenticated");

            service.call(Request::from_parts(parts, body)).await
        })
    }
}

/// Records a successful outcome in the request extensions, anything else as a rejection.
struct ExtensionsReporter<'a> {
    extensions: &'a mut Extensions,
    rejection: Option<AuthenticationRejection>,
}

impl<'a> ExtensionsReporter<'a> {
    fn new(extensions: &'a mut Extensions) -> Self {
        Self {
            extensions,
            rejection: None,
        }
    }
}

impl<U, I, E> Reporter<U, I, E> for ExtensionsReporter<'_>
where
    U: Clone + Send + Sync + 'static,
    I: Display + Clone + Send + Sync + 'static,
    E: Display,
{
    fn success(&mut self, user: U, info: Option<I>) {
        self.extensions.insert(SealedAuthenticated(user));

        if let Some(info) = info {
            self.extensions.insert(SealedAuthInfo(info));
        }
    }

    fn fail(&mut self, reason: AuthenticationFailure<I>, status: StatusCode) {
        self.rejection = Some(AuthenticationRejection::failure(reason, status));
    }

    fn error(&mut self, err: E) {
        self.rejection = Some(AuthenticationRejection::Error(err.to_string()));
    }
}
