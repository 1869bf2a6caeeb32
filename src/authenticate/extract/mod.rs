mod auth_info;
mod authenticated;
mod rejection;
mod sealed_auth_info;
mod sealed_authenticated;

pub use auth_info::AuthInfo;
pub use authenticated::Authenticated;
pub use rejection::AuthenticationRejection;
pub use sealed_auth_info::SealedAuthInfo;
pub use sealed_authenticated::SealedAuthenticated;
