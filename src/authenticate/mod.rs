pub mod extract;
mod outcome;
pub mod strategies;
mod strategy;
pub mod verify;

pub use outcome::{AuthenticationFailure, Outcome, Reporter, VerificationError};
pub use strategies::cookie;
pub use strategy::Strategy;
