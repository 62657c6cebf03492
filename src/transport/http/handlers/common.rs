use crate::error::CatalogError;
use crate::transport::http::types::ApiResponse;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value as JsonValue;

pub type ApiReply = (StatusCode, Json<ApiResponse>);

pub fn status_for(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CatalogError::EstablishmentNotFound(_) | CatalogError::ItemNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        CatalogError::Duplicate(_) => StatusCode::CONFLICT,
        CatalogError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn catalog_error(err: CatalogError) -> ApiReply {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "request failed");
    }
    (status, Json(ApiResponse::failure(err.to_string())))
}

pub fn to_data<T: Serialize>(value: &T) -> Result<JsonValue, ApiReply> {
    serde_json::to_value(value).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::failure(format!("Failed to encode response: {}", e))),
        )
    })
}

pub fn respond(status: StatusCode, data: JsonValue) -> ApiReply {
    (status, Json(ApiResponse::ok(data)))
}
