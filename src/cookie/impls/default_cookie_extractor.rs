use std::borrow::Cow;

use crate::{
    cookie::{cookie_extractor::CookieExtractor, cookie_source::CookieSource},
    error::MissingCookieParserError,
};

#[derive(Debug, Clone)]
pub struct DefaultCookieExtractor {
    cookie_name: Cow<'static, str>,
    signed: bool,
}

impl DefaultCookieExtractor {
    pub fn new(cookie_name: impl Into<Cow<'static, str>>, signed: bool) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            signed,
        }
    }

    pub const fn signed(&self) -> bool {
        self.signed
    }
}

/// Builds an extractor reading `cookie_name` from the signed or the plain cookie collection.
pub fn from_cookie(
    cookie_name: impl Into<Cow<'static, str>>,
    signed: bool,
) -> DefaultCookieExtractor {
    DefaultCookieExtractor::new(cookie_name, signed)
}

impl CookieExtractor for DefaultCookieExtractor {
    type Error = MissingCookieParserError;

    #[tracing::instrument(skip_all, fields(cookie_name = %self.cookie_name, signed = self.signed))]
    fn extract_cookie<'a, R>(&self, request: &'a R) -> Result<Option<&'a str>, Self::Error>
    where
        R: CookieSource + ?Sized,
    {
        let cookies = if self.signed {
            request.signed_cookies()
        } else {
            request.cookies()
        };

        let cookies = cookies.ok_or(MissingCookieParserError::new(self.signed))?;

        Ok(cookies.get(&*self.cookie_name))
    }

    fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

#[cfg(test)]
mod tests {
    use http::Request;

    use crate::cookie::{Cookies, SignedCookies};

    use super::*;

    fn request() -> Request<()> {
        Request::builder()
            .uri("/")
            .body(())
            .expect("request is valid")
    }

    #[test]
    fn reads_plain_cookie() {
        let mut request = request();
        request
            .extensions_mut()
            .insert(Cookies::from_iter([("token", "abc123")]));

        let token = from_cookie("token", false)
            .extract_cookie(&request)
            .expect("cookie parser is installed");

        assert_eq!(token, Some("abc123"));
    }

    #[test]
    fn missing_cookie_is_not_an_error() {
        let mut request = request();
        request
            .extensions_mut()
            .insert(Cookies::from_iter([("session", "xyz")]));

        let token = from_cookie("token", false)
            .extract_cookie(&request)
            .expect("cookie parser is installed");

        assert_eq!(token, None);
    }

    #[test]
    fn signed_extractor_ignores_plain_cookies() {
        let mut request = request();
        request
            .extensions_mut()
            .insert(Cookies::from_iter([("token", "forged")]));
        request
            .extensions_mut()
            .insert(SignedCookies::from_iter([("other", "value")]));

        let token = from_cookie("token", true)
            .extract_cookie(&request)
            .expect("cookie parser is installed");

        assert_eq!(token, None);
    }

    #[test]
    fn signed_extractor_reads_signed_cookies() {
        let mut request = request();
        request
            .extensions_mut()
            .insert(SignedCookies::from_iter([("auth", "signed-value")]));

        let token = from_cookie("auth", true)
            .extract_cookie(&request)
            .expect("cookie parser is installed");

        assert_eq!(token, Some("signed-value"));
    }

    #[test]
    fn missing_collection_fails_fast() {
        let request_without_parser = request();
        let plain = from_cookie("token", false).extract_cookie(&request_without_parser);
        assert_eq!(plain, Err(MissingCookieParserError::Plain));

        let mut request = request();
        request
            .extensions_mut()
            .insert(Cookies::from_iter([("token", "abc123")]));

        let signed = from_cookie("token", true).extract_cookie(&request);
        assert_eq!(signed, Err(MissingCookieParserError::Signed));
    }
}
