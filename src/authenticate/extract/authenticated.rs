/// Extract the user authenticated by [`AuthenticationService`](crate::extension::AuthenticationService).
#[derive(Debug, Clone)]
pub struct Authenticated<T>(pub T);

#[cfg(feature = "axum")]
mod axum {
    use axum::{async_trait, extract::FromRequestParts, http::request::Parts, Extension};
    use http::StatusCode;

    use super::{super::sealed_authenticated::SealedAuthenticated, Authenticated};

    #[async_trait]
    impl<T, S> FromRequestParts<S> for Authenticated<T>
    where
        T: Clone + Send + Sync + 'static,
        S: Send + Sync,
    {
        type Rejection = StatusCode;

        #[tracing::instrument(skip_all)]
        async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
            let authenticated =
                Extension::<SealedAuthenticated<T>>::from_request_parts(parts, state).await;

            match authenticated {
                Ok(Extension(SealedAuthenticated(user))) => Ok(Authenticated(user)),
                Err(_) => {
                    tracing::error!(
                        "No authenticated user on this request. Is the route behind an `AuthenticationLayer`?"
                    );

                    Err(StatusCode::INTERNAL_SERVER_ERROR)
                }
            }
        }
    }
}
