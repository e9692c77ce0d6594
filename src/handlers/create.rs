use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::api::format::json_to_document;
use crate::database::StoreError;
use crate::error::ApiResult;
use crate::schema;
use crate::server::AppState;

/// POST /api/create request body
#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    /// Target collection; registered contracts use the lowercase record type name
    pub collection: String,
    /// Record fields
    pub data: Map<String, Value>,
}

/// POST /api/create - validate against the collection's contract (when one is
/// registered) and insert. Unregistered collections accept arbitrary payloads
/// untouched.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequest>,
) -> ApiResult<Json<Value>> {
    let record = match schema::resolve(&payload.collection) {
        Some(contract) => schema::validate(contract, &payload.data)?,
        None => payload.data,
    };

    let document = json_to_document(&record)
        .map_err(|e| StoreError::Operation(format!("record is not storable: {e}")))?;

    let store = state.store()?;
    let inserted_id = store.insert(&payload.collection, document).await?;

    Ok(Json(json!({ "inserted_id": inserted_id.to_hex() })))
}
