pub mod errors;
pub mod handlers;
pub mod responses;

use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::{
    Router,
    routing::{get, post},
};
use color_eyre::eyre::{Context, Result, eyre};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use handlers::functions::{merge_crl_bundles, ordered_crl_bundles};
use handlers::health::health_check;

/// Builds the application router with tracing, CORS and body limit layers
pub fn router(config: &ServerConfig) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &'_ axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            tracing::info_span!("request", method = %request.method(), uri)
        });

    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    Router::new()
        .route("/health", get(health_check))
        .route("/functions/merge_crl_bundles", post(merge_crl_bundles))
        .route("/functions/ordered_crl_bundles", post(ordered_crl_bundles))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer)
        .layer(trace_layer)
}

pub struct Server {
    router: Router,
    listener: TcpListener,
}

impl Server {
    /// Binds the listener so the port is known before serving
    pub async fn new(config: &ServerConfig) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Binding TCP listener on {addr}"))?;

        Ok(Self {
            router: router(config),
            listener,
        })
    }

    /// Port the server is bound to, useful when configured with port 0
    pub fn port(&self) -> Result<u16> {
        Ok(self
            .listener
            .local_addr()
            .context("Getting local address")?
            .port())
    }

    pub async fn run(self) -> Result<()> {
        let addr = self
            .listener
            .local_addr()
            .context("Getting local address")?;
        tracing::info!("Server listening on http://{}", addr);

        axum::serve(self.listener, self.router)
            .await
            .map_err(|e| eyre!("Server error: {:?}", e))
    }
}
