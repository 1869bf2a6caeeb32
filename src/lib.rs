#![deny(unsafe_code, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Cookie token authentication strategy built on top of [tower](https://docs.rs/tower/latest/tower/).
//!
//! A [`CookieStrategy`](authenticate::cookie::CookieStrategy) reads a token from the cookies an
//! upstream cookie parser stored on the request and lets a verifier decide who, if anyone, the
//! token belongs to. [`AuthenticationLayer`](extension::AuthenticationLayer) runs any
//! [`Strategy`](authenticate::Strategy) in front of a service.

pub mod authenticate;
pub mod cookie;
pub mod error;
pub mod extension;
