use std::{any::Any, borrow::Cow, ops::Deref, panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;

use crate::{
    authenticate::{
        outcome::{AuthenticationFailure, Outcome, VerificationError},
        strategy::Strategy,
        verify::{Verdict, Verifier},
    },
    cookie::{from_cookie, CookieExtractor, CookieSource, DefaultCookieExtractor},
    error::{InvalidArgumentError, MissingCookieParserError},
};

use super::config::StrategyConfig;

pub const STRATEGY_NAME: &str = "cookie";

#[derive(Debug)]
pub struct CookieStrategyInner<V> {
    config: StrategyConfig,
    cookie_extractor: DefaultCookieExtractor,
    verifier: V,
}

impl<V> CookieStrategyInner<V> {
    fn new(config: StrategyConfig, verifier: V) -> Self {
        let cookie_extractor = from_cookie(config.cookie_name.clone(), config.signed);

        Self {
            config,
            cookie_extractor,
            verifier,
        }
    }

    pub const fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub const fn verifier(&self) -> &V {
        &self.verifier
    }
}

/// Authenticates requests with a token stored in a cookie.
///
/// The token is read from the cookie collections an upstream cookie parser stored on the
/// request and handed to the verifier, whose verdict becomes the [`Outcome`].
///
/// ```
/// use tower_cookie_strategy::authenticate::{
///     cookie::{CookieStrategy, StrategyConfig},
///     verify::{verify_fn, Verdict},
/// };
///
/// let strategy = CookieStrategy::new_with_config(
///     StrategyConfig::new().cookie_name("session").signed(true),
///     verify_fn(|token: String| async move {
///         let user = (token == "s3cr3t").then_some("admin");
///
///         Ok::<Verdict<&str, ()>, std::convert::Infallible>(user.into())
///     }),
/// );
///
/// assert_eq!(strategy.config().cookie_name, "session");
/// ```
#[derive(Debug)]
pub struct CookieStrategy<V> {
    inner: Arc<CookieStrategyInner<V>>,
}

impl<V> CookieStrategy<V> {
    pub fn new_with_defaults(verifier: V) -> Self {
        Self::new_with_config(StrategyConfig::default(), verifier)
    }

    pub fn new_with_config(config: StrategyConfig, verifier: V) -> Self {
        Self {
            inner: Arc::new(CookieStrategyInner::new(config, verifier)),
        }
    }

    pub fn builder() -> CookieStrategyBuilder<V> {
        CookieStrategyBuilder::new()
    }
}

impl<V> Clone for CookieStrategy<V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<V> Deref for CookieStrategy<V> {
    type Target = CookieStrategyInner<V>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<R, V> Strategy<R> for CookieStrategy<V>
where
    R: CookieSource + Sync + ?Sized,
    V: Verifier<R> + Send + Sync,
    V::User: Clone + Send + Sync + 'static,
    V::Info: Send,
    V::Error: Send,
{
    type User = V::User;

    type Info = V::Info;

    type Error = VerificationError<V::Error>;

    type ConfigurationError = MissingCookieParserError;

    fn name(&self) -> &str {
        STRATEGY_NAME
    }

    #[tracing::instrument(skip_all, fields(strategy = STRATEGY_NAME, cookie_name = %self.config.cookie_name))]
    async fn authenticate(
        &self,
        request: &R,
    ) -> Result<Outcome<Self::User, Self::Info, Self::Error>, Self::ConfigurationError> {
        let token = match self.cookie_extractor.extract_cookie(request)? {
            Some(token) if !token.is_empty() => token.to_owned(),
            _ => {
                tracing::debug!("No auth token");

                return Ok(Outcome::fail(AuthenticationFailure::MissingToken));
            }
        };

        let request = self.config.pass_req_to_callback.then_some(request);

        let verification = AssertUnwindSafe(async { self.verifier.verify(request, token).await })
            .catch_unwind()
            .await;

        let outcome = match verification {
            Ok(Ok(Verdict::Verified { user, info })) => Outcome::Success { user, info },
            Ok(Ok(Verdict::Rejected { info })) => {
                tracing::debug!("Token rejected");

                Outcome::fail(AuthenticationFailure::Rejected(info))
            }
            Ok(Err(err)) => {
                tracing::warn!("Verifier failed");

                Outcome::Error(VerificationError::Verifier(err))
            }
            Err(payload) => {
                let message = panic_message(payload);

                tracing::error!(%message, "Verifier panicked");

                Outcome::Error(VerificationError::Panicked(message))
            }
        };

        Ok(outcome)
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast_ref::<&'static str>() {
            Some(message) => (*message).to_owned(),
            None => String::from("Box<dyn Any>"),
        },
    }
}

#[derive(Debug)]
pub struct CookieStrategyBuilder<V> {
    config: StrategyConfig,
    verifier: Option<V>,
}

impl<V> Default for CookieStrategyBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CookieStrategyBuilder<V> {
    pub fn new() -> Self {
        Self {
            config: StrategyConfig::default(),
            verifier: None,
        }
    }

    pub fn config(mut self, config: StrategyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn cookie_name(mut self, cookie_name: impl Into<Cow<'static, str>>) -> Self {
        self.config = self.config.cookie_name(cookie_name);
        self
    }

    pub fn signed(mut self, signed: bool) -> Self {
        self.config = self.config.signed(signed);
        self
    }

    pub fn pass_req_to_callback(mut self, pass_req_to_callback: bool) -> Self {
        self.config = self.config.pass_req_to_callback(pass_req_to_callback);
        self
    }

    pub fn verifier(mut self, verifier: V) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub fn build(self) -> Result<CookieStrategy<V>, InvalidArgumentError> {
        let verifier = self
            .verifier
            .ok_or(InvalidArgumentError("cookie strategy requires a verifier"))?;

        Ok(CookieStrategy::new_with_config(self.config, verifier))
    }
}
