/// The cookie collection a strategy was configured to read is not present on the request.
///
/// This means the cookie parsing layer was never applied upstream. It is an integration
/// defect and is surfaced as such, never as a per-request authentication failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MissingCookieParserError {
    #[error("Cookie collection not found. Maybe you forgot to install a cookie parser?")]
    Plain,
    #[error("Signed cookie collection not found. Maybe you forgot to install a cookie parser?")]
    Signed,
}

impl MissingCookieParserError {
    pub const fn new(signed: bool) -> Self {
        if signed {
            Self::Signed
        } else {
            Self::Plain
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid argument: {0}")]
pub struct InvalidArgumentError(pub &'static str);
