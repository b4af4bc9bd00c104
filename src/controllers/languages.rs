use axum::Json;
use serde_json::{json, Value};

use crate::domain::languages::registry;

/// GET /api/languages - The full language registry, keyed by code
pub async fn list_languages() -> Json<Value> {
    let mut map = serde_json::Map::new();
    for entry in registry::all() {
        map.insert(entry.code.to_string(), json!(entry));
    }
    Json(Value::Object(map))
}
