use super::cookie_source::CookieSource;

pub trait CookieExtractor {
    type Error;

    /// Returns `Ok(None)` if the collection exists but holds no cookie with the configured name.
    fn extract_cookie<'a, R>(&self, request: &'a R) -> Result<Option<&'a str>, Self::Error>
    where
        R: CookieSource + ?Sized;

    fn cookie_name(&self) -> &str;
}
