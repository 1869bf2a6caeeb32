use tower_layer::Layer;

use super::service::AuthenticationService;

/// Wraps services in an [`AuthenticationService`] driven by one shared strategy.
#[derive(Debug, Clone)]
pub struct AuthenticationLayer<St> {
    strategy: St,
}

impl<St> AuthenticationLayer<St> {
    pub fn new(strategy: St) -> Self {
        Self { strategy }
    }
}

impl<S, St> Layer<S> for AuthenticationLayer<St>
where
    St: Clone,
{
    type Service = AuthenticationService<S, St>;

    fn layer(&self, service: S) -> Self::Service {
        AuthenticationService::new(service, self.strategy.clone())
    }
}

/// Turns a strategy into its [`AuthenticationLayer`].
pub trait AuthenticationLayerExt: Sized {
    fn authentication_layer(self) -> AuthenticationLayer<Self>;
}

impl<T> AuthenticationLayerExt for T
where
    T: Sized + Clone,
{
    fn authentication_layer(self) -> AuthenticationLayer<Self> {
        AuthenticationLayer::new(self)
    }
}
