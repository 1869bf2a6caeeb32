//! Run with
//!
//! ```not_rust
//! cargo run --example cookie --features="axum"
//! ```
//!

use std::{collections::HashMap, convert::Infallible, sync::Arc};

use axum::{middleware, response::IntoResponse, routing::get, Router};
use tower_cookie_strategy::{
    authenticate::{
        cookie::CookieStrategy,
        extract::{AuthInfo, Authenticated},
        verify::{verify_fn, Verdict},
    },
    extension::AuthenticationLayerExt,
};

#[path = "../util/util.rs"]
mod util;

#[derive(Debug, Clone)]
struct User {
    name: String,
}

async fn me(
    Authenticated(user): Authenticated<User>,
    AuthInfo(info): AuthInfo<&'static str>,
) -> impl IntoResponse {
    format!("You are: {} (via {})", user.name, info.unwrap_or("unknown"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    util::init("cookie")?;

    let sessions: Arc<HashMap<String, User>> = Arc::new(
        [("token-1", "alice"), ("token-2", "bob")]
            .into_iter()
            .map(|(token, name)| {
                (
                    token.to_owned(),
                    User {
                        name: name.to_owned(),
                    },
                )
            })
            .collect(),
    );

    let strategy = CookieStrategy::new_with_defaults(verify_fn(move |token: String| {
        let verdict = match sessions.get(&token).cloned() {
            Some(user) => Verdict::verified_with(user, "session cookie"),
            None => Verdict::rejected_with("unknown session"),
        };

        async move { Ok::<_, Infallible>(verdict) }
    }));

    let app = Router::new()
        // curl -b "token=token-1" localhost:5000
        .route("/", get(me))
        // curl -b "token=wrong" localhost:5000
        .layer(strategy.authentication_layer())
        .layer(middleware::from_fn(util::parse_cookies))
        .layer(util::trace_layer());

    util::serve(app).await
}
