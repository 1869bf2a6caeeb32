use std::ops::Deref;

/// Verifier info attached to a successful authentication.
///
/// Stored next to [`SealedAuthenticated`](super::SealedAuthenticated) when the verifier
/// returned info with the user.
#[derive(Debug, Clone)]
pub struct SealedAuthInfo<T>(pub(crate) T);

impl<T> SealedAuthInfo<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for SealedAuthInfo<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
