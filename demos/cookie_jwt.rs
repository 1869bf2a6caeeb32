//! Run with
//!
//! ```not_rust
//! cargo run --example cookie_jwt --features="axum"
//! ```
//!
//! Set `JWT_SECRET` in the environment or in a `.env` file to override the demo secret.

use std::{convert::Infallible, sync::Arc};

use anyhow::Context;
use axum::{
    middleware,
    response::{AppendHeaders, IntoResponse},
    routing::get,
    Router,
};
use http::{header::SET_COOKIE, request::Parts};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tower_cookie_strategy::{
    authenticate::{
        cookie::{CookieStrategy, StrategyConfig},
        extract::Authenticated,
        verify::{verify_with_request_fn, Verdict},
    },
    extension::AuthenticationLayerExt,
};

#[path = "../util/util.rs"]
mod util;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: u64,
}

async fn me(Authenticated(claims): Authenticated<Claims>) -> impl IntoResponse {
    format!("You are: {}", claims.sub)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    util::init("cookie_jwt")?;

    let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| String::from("demo-secret"));

    let login_token = encode(
        &Header::default(),
        &Claims {
            sub: String::from("alice"),
            exp: jsonwebtoken::get_current_timestamp() + 3600,
        },
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode demo token")?;

    let decoding_key = Arc::new(DecodingKey::from_secret(secret.as_bytes()));

    let strategy = CookieStrategy::new_with_config(
        StrategyConfig::new()
            .cookie_name("jwt")
            .pass_req_to_callback(true),
        verify_with_request_fn(move |request: Option<&Parts>, token: String| {
            let path = request.map(|request| request.uri.path().to_owned());

            let verdict = match decode::<Claims>(&token, &decoding_key, &Validation::default()) {
                Ok(data) => Verdict::verified(data.claims),
                Err(err) => Verdict::rejected_with(err.to_string()),
            };

            async move {
                tracing::debug!(?path, "Verified jwt cookie");

                Ok::<Verdict<Claims, String>, Infallible>(verdict)
            }
        }),
    );

    let protected = Router::new()
        // curl -b "jwt=<token from /login>" localhost:5000/me
        .route("/me", get(me))
        .layer(strategy.authentication_layer());

    let app = Router::new()
        // curl -i localhost:5000/login
        .route(
            "/login",
            get(move || async move {
                AppendHeaders([(SET_COOKIE, format!("jwt={login_token}; HttpOnly; Path=/"))])
            }),
        )
        .merge(protected)
        .layer(middleware::from_fn(util::parse_cookies))
        .layer(util::trace_layer());

    util::serve(app).await
}
