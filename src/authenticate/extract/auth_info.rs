/// Extract the verifier info stored by [`AuthenticationService`](crate::extension::AuthenticationService).
///
/// `None` when the verifier accepted the token without any info.
#[derive(Debug, Clone)]
pub struct AuthInfo<T>(pub Option<T>);

#[cfg(feature = "axum")]
mod axum {
    use std::convert::Infallible;

    use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

    use super::{super::sealed_auth_info::SealedAuthInfo, AuthInfo};

    #[async_trait]
    impl<T, S> FromRequestParts<S> for AuthInfo<T>
    where
        T: Clone + Send + Sync + 'static,
        S: Send + Sync,
    {
        type Rejection = Infallible;

        async fn from_request_parts(
            parts: &mut Parts,
            _state: &S,
        ) -> Result<Self, Self::Rejection> {
            let info = parts
                .extensions
                .get::<SealedAuthInfo<T>>()
                .map(|info| info.0.clone());

            Ok(AuthInfo(info))
        }
    }
}
