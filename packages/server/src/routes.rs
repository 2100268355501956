//! HTTP routes.
//!
//! ```text
//! GET    /files                      -> whole tree
//! POST   /files?path=a/b             -> append body node to folder a/b
//! PUT    /files/{item_name}?path=a/b -> replace first child named item_name
//! DELETE /files/{item_name}?path=a/b -> remove first child named item_name
//! ```

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use treefs_tree::{FolderPath, Node};

use crate::error::ApiError;
use crate::service::FileService;

/// The `path` query parameter naming the target folder.
#[derive(Debug, Deserialize)]
pub struct FolderQuery {
    pub path: String,
}

impl FolderQuery {
    fn folder(&self) -> FolderPath {
        FolderPath::parse(&self.path)
    }
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

impl Message {
    fn reply(message: &'static str) -> Json<Self> {
        Json(Self { message })
    }
}

pub fn router(service: FileService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/files", get(list_files).post(create_item))
        .route("/files/{item_name}", put(update_item).delete(delete_item))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(service)
}

fn node_from_body(body: Result<Json<Value>, JsonRejection>) -> Result<Node, ApiError> {
    let Json(raw) = body?;
    Ok(Node::decode(raw)?)
}

async fn list_files(State(service): State<FileService>) -> Result<Json<Value>, ApiError> {
    Ok(Json(service.list().await?))
}

async fn create_item(
    State(service): State<FileService>,
    query: Result<Query<FolderQuery>, QueryRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Query(query) = query?;
    let item = node_from_body(body)?;
    service.create(&query.folder(), item).await?;
    Ok(Message::reply("Item created successfully"))
}

async fn update_item(
    State(service): State<FileService>,
    Path(item_name): Path<String>,
    query: Result<Query<FolderQuery>, QueryRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Query(query) = query?;
    let item = node_from_body(body)?;
    service.update(&query.folder(), &item_name, item).await?;
    Ok(Message::reply("Item updated successfully"))
}

async fn delete_item(
    State(service): State<FileService>,
    Path(item_name): Path<String>,
    query: Result<Query<FolderQuery>, QueryRejection>,
) -> Result<Json<Message>, ApiError> {
    let Query(query) = query?;
    service.remove(&query.folder(), &item_name).await?;
    Ok(Message::reply("Item deleted successfully"))
}
