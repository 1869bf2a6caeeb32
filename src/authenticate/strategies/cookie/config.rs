use std::borrow::Cow;

pub const DEFAULT_COOKIE_NAME: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    #[serde(alias = "cookieName")]
    pub cookie_name: Cow<'static, str>,
    /// Read the token from the signed cookie collection instead of the plain one.
    pub signed: bool,
    /// Hand the request to the verifier together with the token.
    #[serde(alias = "passReqToCallback")]
    pub pass_req_to_callback: bool,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            cookie_name: Cow::Borrowed(DEFAULT_COOKIE_NAME),
            signed: false,
            pass_req_to_callback: false,
        }
    }
}

impl StrategyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cookie_name(mut self, cookie_name: impl Into<Cow<'static, str>>) -> Self {
        self.cookie_name = cookie_name.into();
        self
    }

    pub const fn signed(mut self, signed: bool) -> Self {
        self.signed = signed;
        self
    }

    pub const fn pass_req_to_callback(mut self, pass_req_to_callback: bool) -> Self {
        self.pass_req_to_callback = pass_req_to_callback;
        self
    }
}
