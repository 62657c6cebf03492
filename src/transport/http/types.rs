use crate::app::catalog_service::CatalogService;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    /// One lock for the whole read-modify-save cycle of a request.
    pub catalog: Arc<Mutex<CatalogService>>,
}

impl AppState {
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateEstablishmentRequest {
    pub name: String,
    pub category: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct RatingRequest {
    pub author: String,
    /// Between 1 and 5 inclusive.
    pub score: f64,
}

/// A catalog item to append. `variant` is one of `dish`, `drink`, `dessert`; the remaining
/// fields are the variant's own (`name`, `price`, and `description`, `size`, `kind` where they apply).
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct AddCatalogItemRequest {
    pub variant: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub fields: Map<String, JsonValue>,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::failure(format!(
            "Invalid JSON body: {} (expected: {})",
            err, expected
        ))),
    )
}
