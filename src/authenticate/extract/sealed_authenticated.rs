use std::ops::Deref;

/// User stored in the request extensions after a successful authentication.
///
/// Only [`AuthenticationService`](crate::extension::AuthenticationService) constructs it, so
/// finding one in the extensions proves that the request went through a strategy and was
/// accepted. Handlers normally read it through [`Authenticated`](super::Authenticated).
#[derive(Debug, Clone)]
pub struct SealedAuthenticated<T>(pub(crate) T);

impl<T> SealedAuthenticated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for SealedAuthenticated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
