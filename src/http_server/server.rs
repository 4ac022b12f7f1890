//! # HTTP Server
//!
//! Binds the listener and serves the company routes until shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::observability::{log_event, Event};
use crate::store::{CompanyStore, InMemoryCompanyStore};

use super::company_routes::company_routes;
use super::config::HttpServerConfig;

/// HTTP server for the phonebook API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server backed by a fresh, empty store
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryCompanyStore::new()))
    }

    /// Create a new HTTP server around an existing store
    pub fn with_store<S: CompanyStore + 'static>(config: HttpServerConfig, store: Arc<S>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    fn build_router<S: CompanyStore + 'static>(config: &HttpServerConfig, store: Arc<S>) -> Router {
        let router = company_routes(store).layer(TraceLayer::new_for_http());

        match Self::cors_layer(config) {
            Some(cors) => router.layer(cors),
            None => router,
        }
    }

    /// CORS restricted to the configured origins, or none at all
    fn cors_layer(config: &HttpServerConfig) -> Option<CorsLayer> {
        if !config.cors_enabled() {
            return None;
        }

        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        Some(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any),
        )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(event = %Event::Serving, %addr, "company API at http://{}/companies", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log_event(Event::ShutdownStart),
        Err(e) => {
            tracing::warn!(error = %e, "cannot listen for Ctrl-C, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9090);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_cors_layer_only_when_configured() {
        assert!(HttpServer::cors_layer(&HttpServerConfig::default()).is_none());

        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        assert!(HttpServer::cors_layer(&config).is_some());
    }

    #[tokio::test]
    async fn test_serve_over_tcp_and_shut_down() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let server = HttpServer::new();
        let handle = tokio::spawn(server.serve(listener, async move {
            let _ = stop_rx.await;
        }));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /companies HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();

        assert!(raw.starts_with("HTTP/1.1 200"), "unexpected response: {}", raw);
        assert!(raw.ends_with("[]"));

        stop_tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
