use std::future::Future;

use crate::authenticate::verify::verifier::{Verdict, Verifier};

/// Verifier built from a closure receiving only the token.
#[derive(Clone)]
pub struct VerifyFn<F> {
    f: F,
}

impl<F> core::fmt::Debug for VerifyFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyFn").finish_non_exhaustive()
    }
}

pub fn verify_fn<F, Fut>(f: F) -> VerifyFn<F>
where
    F: Fn(String) -> Fut,
{
    VerifyFn { f }
}

impl<R, F, Fut, U, I, E> Verifier<R> for VerifyFn<F>
where
    R: ?Sized,
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Verdict<U, I>, E>> + Send,
{
    type User = U;

    type Info = I;

    type Error = E;

    fn verify(
        &self,
        _request: Option<&R>,
        token: String,
    ) -> impl Future<Output = Result<Verdict<U, I>, E>> + Send {
        (self.f)(token)
    }
}

/// Verifier built from a closure receiving the request as well as the token.
///
/// The request is `None` unless the strategy was configured with `pass_req_to_callback`.
#[derive(Clone)]
pub struct VerifyWithRequestFn<F> {
    f: F,
}

impl<F> core::fmt::Debug for VerifyWithRequestFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyWithRequestFn").finish_non_exhaustive()
    }
}

/// Builds a [`VerifyWithRequestFn`].
///
/// The returned future is not tied to the lifetime of the request, so it cannot borrow it.
/// Copy whatever the verifier needs out of the request before the `async move` block:
///
/// ```
/// use http::request::Parts;
/// use tower_cookie_strategy::authenticate::verify::{verify_with_request_fn, Verdict};
///
/// let verifier = verify_with_request_fn(|request: Option<&Parts>, token: String| {
///     let path = request.map(|request| request.uri.path().to_owned());
///
///     async move {
///         let admin = path.as_deref() == Some("/admin") && token == "s3cr3t";
///         let user = admin.then_some("admin");
///
///         Ok::<Verdict<&str, &str>, std::convert::Infallible>(user.into())
///     }
/// });
/// # let _ = verifier;
/// ```
pub fn verify_with_request_fn<R, F, Fut>(f: F) -> VerifyWithRequestFn<F>
where
    R: ?Sized,
    F: Fn(Option<&R>, String) -> Fut,
{
    VerifyWithRequestFn { f }
}

impl<R, F, Fut, U, I, E> Verifier<R> for VerifyWithRequestFn<F>
where
    R: ?Sized,
    F: Fn(Option<&R>, String) -> Fut,
    Fut: Future<Output = Result<Verdict<U, I>, E>> + Send,
{
    type User = U;

    type Info = I;

    type Error = E;

    fn verify(
        &self,
        request: Option<&R>,
        token: String,
    ) -> impl Future<Output = Result<Verdict<U, I>, E>> + Send {
        (self.f)(request, token)
    }
}
