mod config;
mod cookie_strategy;

pub use config::{StrategyConfig, DEFAULT_COOKIE_NAME};
pub use cookie_strategy::{
    CookieStrategy, CookieStrategyBuilder, CookieStrategyInner, STRATEGY_NAME,
};
