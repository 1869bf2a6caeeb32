use std::net::SocketAddr;

use anyhow::Context;
use axum::{extract::Request, middleware::Next, response::Response};
use cookie::Cookie;
use http::header::COOKIE;
use tokio::net::TcpListener;
use tower_cookie_strategy::cookie::Cookies;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

pub fn init(exe: &str) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var(
            "RUST_LOG",
            format!("{exe}=trace,tower_cookie_strategy=trace,tower_http=trace"),
        );
    }

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
        .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO))
}

/// Minimal stand-in for a real cookie parser: stores the plain cookies of the request.
pub async fn parse_cookies(mut request: Request, next: Next) -> Response {
    let cookies: Cookies = request
        .headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .map(|cookie| (cookie.name().to_owned(), cookie.value().to_owned()))
        .collect();

    request.extensions_mut().insert(cookies);

    next.run(request).await
}

pub async fn serve(app: axum::Router<()>) -> anyhow::Result<()> {
    let socket_addr = "127.0.0.1:5000".parse::<SocketAddr>()?;

    tracing::info!(%socket_addr, "Starting server");

    let listener = TcpListener::bind(&socket_addr)
        .await
        .context("Bind failed")?;

    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
