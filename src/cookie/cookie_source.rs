use http::{request::Parts, Extensions, Request};

use super::cookie_map::{CookieMap, Cookies, SignedCookies};

/// Anything that carries the cookie collections populated by an upstream cookie parser.
///
/// `None` means the collection was never populated, not that it is empty.
pub trait CookieSource {
    fn cookies(&self) -> Option<&CookieMap>;

    fn signed_cookies(&self) -> Option<&CookieMap>;
}

impl CookieSource for Extensions {
    fn cookies(&self) -> Option<&CookieMap> {
        self.get::<Cookies>().map(|cookies| &cookies.0)
    }

    fn signed_cookies(&self) -> Option<&CookieMap> {
        self.get::<SignedCookies>().map(|cookies| &cookies.0)
    }
}

impl CookieSource for Parts {
    fn cookies(&self) -> Option<&CookieMap> {
        self.extensions.cookies()
    }

    fn signed_cookies(&self) -> Option<&CookieMap> {
        self.extensions.signed_cookies()
    }
}

impl<B> CookieSource for Request<B> {
    fn cookies(&self) -> Option<&CookieMap> {
        self.extensions().cookies()
    }

    fn signed_cookies(&self) -> Option<&CookieMap> {
        self.extensions().signed_cookies()
    }
}
