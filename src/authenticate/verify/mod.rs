mod impls;
mod verifier;

pub use impls::verify_fn::{verify_fn, verify_with_request_fn, VerifyFn, VerifyWithRequestFn};
pub use verifier::{Verdict, Verifier};
