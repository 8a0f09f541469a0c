use std::{
    env,
    io::{self, ErrorKind},
    net::SocketAddr,
};

use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:8000";

#[tokio::main]
async fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("server=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = Router::new()
        .nest_service("/pkg", ServeDir::new("pkg"))
        .nest_service("/public", ServeDir::new("public"))
        .nest_service("/static", ServeDir::new("static"))
        .route_service("/", ServeFile::new("static/index.html"))
        .layer(TraceLayer::new_for_http());

    let addr = bind_address(env::var("COSMOGONIA_ADDR").ok())?;
    info!("serving cosmogonía on http://{addr}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|error| io::Error::new(ErrorKind::Other, error))
}

/// The address to listen on: `value` when given, otherwise [`DEFAULT_ADDR`].
fn bind_address(value: Option<String>) -> io::Result<SocketAddr> {
    value
        .as_deref()
        .unwrap_or(DEFAULT_ADDR)
        .parse()
        .map_err(|error| io::Error::new(ErrorKind::InvalidInput, error))
}
