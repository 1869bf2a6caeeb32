pub mod default_cookie_extractor;
