//! Document store reached over HTTP.
//!
//! The remote side is a json-server style endpoint that keeps the document
//! under a single key:
//!
//! ```text
//! GET  {base}/fileSystem        -> whole document
//! PUT  {base}/fileSystem (body) -> replaces it
//! ```
//!
//! Anything other than `200 OK` is a store failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Operation};
use crate::traits::DocumentStore;

/// Key the document lives under on the remote store.
pub const DOCUMENT_KEY: &str = "fileSystem";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpDocumentStore {
    client: Client,
    document_url: Url,
}

impl HttpDocumentStore {
    /// Create a store client for `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let document_url = base.join(DOCUMENT_KEY)?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            document_url,
        })
    }

    /// Create with default timeout of 30 seconds.
    pub fn with_default_timeout(base_url: &str) -> Result<Self, Error> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    pub fn document_url(&self) -> &Url {
        &self.document_url
    }

    async fn check(operation: Operation, response: Response) -> Result<Response, Error> {
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::Status {
            operation,
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn fetch(&self) -> Result<Value, Error> {
        tracing::debug!(url = %self.document_url, "fetching document");
        let response = self.client.get(self.document_url.clone()).send().await?;
        let response = Self::check(Operation::Fetch, response).await?;

        let body_text = response.text().await?;
        parse_document(&body_text)
    }

    async fn replace(&self, document: &Value) -> Result<(), Error> {
        tracing::debug!(url = %self.document_url, "replacing document");
        let response = self
            .client
            .put(self.document_url.clone())
            .json(document)
            .send()
            .await?;
        Self::check(Operation::Replace, response).await?;
        Ok(())
    }
}

/// Parse a document of any nesting depth.
///
/// Every folder level adds two levels of JSON nesting, so serde_json's
/// default limit would cap trees at a few dozen folders deep. The limit is
/// lifted and the stack grows on demand instead.
pub(crate) fn parse_document(text: &str) -> Result<Value, Error> {
    let mut json = serde_json::Deserializer::from_str(text);
    json.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(value)
}
