use std::sync::Arc;

use axum::{Router, http::Method, routing::get};
use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::domain::geo::ports::RegionService;
use self::handlers::country::classify_countries;
use self::handlers::health::health_check;

pub mod errors;
pub mod handlers;
pub mod responses;

#[derive(Debug, Clone)]
pub struct ServerConfig<'a> {
    pub host: &'a str,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AppState<S: RegionService> {
    pub service: Arc<S>,
}

pub struct Server {
    router: Router,
    listener: TcpListener,
}

impl Server {
    /// Builds the router and binds the listener without accepting
    /// connections yet, so callers can read the bound port first.
    pub async fn new<S: RegionService>(service: S, config: ServerConfig<'_>) -> Result<Self> {
        let trace_layer =
            TraceLayer::new_for_http().make_span_with(|request: &'_ axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                tracing::info_span!("request", method = %request.method(), uri)
            });

        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_headers(Any)
            .allow_methods([Method::GET, Method::OPTIONS]);

        let state = AppState {
            service: Arc::new(service),
        };

        let router = Router::new()
            .route("/", get(classify_countries::<S>))
            .route("/health", get(health_check))
            .layer(cors_layer)
            .layer(trace_layer)
            .with_state(state);

        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .wrap_err_with(|| format!("Binding TCP listener on {addr}"))?;

        Ok(Self { router, listener })
    }

    /// Returns the port the server is bound to. Useful when the
    /// configured port was 0 and the OS picked one.
    pub fn port(&self) -> Result<u16> {
        let addr = self
            .listener
            .local_addr()
            .wrap_err("Getting local address")?;
        Ok(addr.port())
    }

    /// Serves requests until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let addr = self.listener.local_addr().wrap_err("Getting local address")?;
        tracing::info!("Server listening on http://{addr}");

        axum::serve(self.listener, self.router)
            .await
            .wrap_err("Running server")
    }
}
