//! # treefs-server
//!
//! HTTP service exposing a file/folder tree that lives in a remote JSON
//! document store.
//!
//! Every request reads the whole tree from the store; every mutation writes
//! the whole tree back. See [`routes`] for the HTTP surface and
//! [`service::FileService`] for the read-modify-write cycle.
//!
//! ## Usage
//!
//! ```bash
//! # Against a json-server on localhost:3000 serving {"fileSystem": {"root": ...}}
//! treefs --store-url http://localhost:3000
//!
//! # Standalone, tree kept in memory
//! treefs --in-memory --bind 127.0.0.1:8000
//!
//! curl -X POST 'localhost:8000/files?path=' -H 'content-type: application/json' \
//!     -d '{"name": "docs", "type": "folder"}'
//! curl localhost:8000/files
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod service;

pub use config::Config;
pub use error::{ApiError, ServerError};
pub use routes::router;
pub use service::FileService;

/// Bind and serve until ctrl-c.
pub async fn serve(config: Config) -> Result<(), ServerError> {
    let service = FileService::new(config.store()?);
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    if config.in_memory {
        tracing::info!(addr = %config.bind, "serving in-memory tree");
    } else {
        tracing::info!(addr = %config.bind, store = %config.store_url, "serving tree");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
