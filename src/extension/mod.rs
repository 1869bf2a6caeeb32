mod layer;
mod service;

pub use layer::{AuthenticationLayer, AuthenticationLayerExt};
pub use service::AuthenticationService;
