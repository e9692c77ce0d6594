use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::format::document_to_json;
use crate::error::ApiResult;
use crate::server::AppState;

/// Cap on returned records when the query string omits `limit`.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Maximum records to return (default 100)
    pub limit: Option<i64>,
}

/// GET /api/list/:collection - bounded listing in natural store order
pub async fn list(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Value>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT).max(0);

    let store = state.store()?;
    let documents = store.list(&collection, limit).await?;

    let items: Vec<Value> = documents.into_iter().map(document_to_json).collect();
    Ok(Json(json!({ "items": items })))
}
