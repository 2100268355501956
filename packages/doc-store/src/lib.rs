//! # treefs-doc-store
//!
//! Clients for the document store that holds the treefs tree.
//!
//! The store keeps exactly one JSON document. It is fetched whole and
//! replaced whole; there are no partial updates.
//!
//! ## Store Types
//!
//! ### HttpDocumentStore
//!
//! Talks to a remote JSON endpoint with reqwest:
//!
//! ```ignore
//! use treefs_doc_store::{DocumentStore, HttpDocumentStore};
//!
//! let store = HttpDocumentStore::with_default_timeout("http://localhost:3000")?;
//! let mut document = store.fetch().await?;
//! // ... edit ...
//! store.replace(&document).await?;
//! ```
//!
//! ### InMemoryDocumentStore
//!
//! Keeps the document in process, for tests and standalone runs.

pub mod error;
pub mod http;
pub mod in_memory;
pub mod traits;

pub use error::{Error, Operation};
pub use http::{HttpDocumentStore, DEFAULT_TIMEOUT, DOCUMENT_KEY};
pub use in_memory::{empty_tree_document, InMemoryDocumentStore};
pub use traits::DocumentStore;
