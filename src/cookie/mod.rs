mod cookie_extractor;
mod cookie_map;
mod cookie_source;
mod impls;

pub use cookie_extractor::CookieExtractor;
pub use cookie_map::{CookieMap, Cookies, SignedCookies};
pub use cookie_source::CookieSource;
pub use impls::default_cookie_extractor::{from_cookie, DefaultCookieExtractor};
