//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use treefs_doc_store::{DocumentStore, HttpDocumentStore, InMemoryDocumentStore};

/// treefs - HTTP façade over a file tree kept in a JSON document store
#[derive(Parser, Debug, Clone)]
#[command(name = "treefs")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "TREEFS_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Base URL of the document store; the tree lives at {url}/fileSystem
    #[arg(long, env = "TREEFS_STORE_URL", default_value = "http://localhost:3000")]
    pub store_url: String,

    /// Timeout for each request to the document store
    #[arg(long, env = "TREEFS_STORE_TIMEOUT_SECS", default_value_t = 30)]
    pub store_timeout_secs: u64,

    /// Keep the tree in process instead of using --store-url
    #[arg(long)]
    pub in_memory: bool,

    /// Log filter directives (e.g. "info,treefs_server=debug")
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Config {
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }

    /// Build the document store this configuration points at.
    pub fn store(&self) -> Result<Arc<dyn DocumentStore>, treefs_doc_store::Error> {
        if self.in_memory {
            return Ok(Arc::new(InMemoryDocumentStore::default()));
        }
        Ok(Arc::new(HttpDocumentStore::new(
            &self.store_url,
            self.store_timeout(),
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treefs_tree::Tree;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["treefs"]).unwrap();
        assert_eq!(config.bind, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.store_url, "http://localhost:3000");
        assert_eq!(config.store_timeout(), Duration::from_secs(30));
        assert!(!config.in_memory);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "treefs",
            "--bind",
            "127.0.0.1:9000",
            "--store-url",
            "http://db:3000/api",
            "--store-timeout-secs",
            "5",
            "--in-memory",
        ])
        .unwrap();
        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.store_url, "http://db:3000/api");
        assert_eq!(config.store_timeout(), Duration::from_secs(5));
        assert!(config.in_memory);
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        assert!(Config::try_parse_from(["treefs", "--bind", "nowhere"]).is_err());
    }

    #[test]
    fn bad_store_url_fails_to_build() {
        let config =
            Config::try_parse_from(["treefs", "--store-url", "not a url"]).unwrap();
        assert!(config.store().is_err());
    }

    #[tokio::test]
    async fn in_memory_store_starts_with_empty_root() {
        let config = Config::try_parse_from(["treefs", "--in-memory"]).unwrap();
        let store = config.store().unwrap();
        let tree = treefs_tree::decode(store.fetch().await.unwrap()).unwrap();
        assert_eq!(tree, Tree::empty());
    }
}
