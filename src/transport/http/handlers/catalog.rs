use crate::domain::{CatalogItem, VariantTag};
use crate::transport::http::handlers::common::{catalog_error, respond, to_data, ApiReply};
use crate::transport::http::types::{json_422, AddCatalogItemRequest, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    post,
    path = "/api/establishments/{name}/catalog",
    params(("name" = String, Path, description = "Establishment name (case-insensitive)")),
    request_body = AddCatalogItemRequest,
    responses(
        (status = 201, description = "Item appended to the catalog", body = ApiResponse),
        (status = 404, description = "Establishment not found", body = ApiResponse),
        (status = 422, description = "Unknown variant or invalid item fields", body = ApiResponse),
        (status = 500, description = "Registry could not be saved", body = ApiResponse)
    )
)]
pub async fn add_item_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    request: Result<Json<AddCatalogItemRequest>, JsonRejection>,
) -> Result<ApiReply, ApiReply> {
    let Json(request) = request.map_err(|e| {
        json_422(e, "{\"variant\": \"dish\"|\"drink\"|\"dessert\", \"name\": string, \"price\": number, ...}")
    })?;

    let item = request
        .variant
        .parse::<VariantTag>()
        .and_then(|tag| CatalogItem::from_record(tag, JsonValue::Object(request.fields)))
        .map_err(|e| catalog_error(e.into()))?;

    let mut catalog = state.catalog.lock().await;
    let data = to_data(&item)?;
    catalog
        .add_catalog_item(&name, item)
        .await
        .map_err(catalog_error)?;
    Ok(respond(StatusCode::CREATED, data))
}

#[utoipa::path(
    get,
    path = "/api/establishments/{name}/catalog",
    params(("name" = String, Path, description = "Establishment name (case-insensitive)")),
    responses(
        (status = 200, description = "Catalog items in insertion order", body = ApiResponse),
        (status = 404, description = "Establishment not found", body = ApiResponse)
    )
)]
pub async fn get_catalog_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiReply, ApiReply> {
    let catalog = state.catalog.lock().await;
    let items = catalog.catalog(&name).map_err(catalog_error)?;
    Ok(respond(StatusCode::OK, to_data(&items)?))
}

#[utoipa::path(
    patch,
    path = "/api/establishments/{name}/catalog/{item}/discount",
    params(
        ("name" = String, Path, description = "Establishment name (case-insensitive)"),
        ("item" = String, Path, description = "Catalog item name (case-insensitive)")
    ),
    responses(
        (status = 200, description = "Discount applied; returns the updated item", body = ApiResponse),
        (status = 404, description = "Establishment or item not found", body = ApiResponse),
        (status = 500, description = "Registry could not be saved", body = ApiResponse)
    )
)]
pub async fn apply_discount_handler(
    State(state): State<AppState>,
    Path((name, item_name)): Path<(String, String)>,
) -> Result<ApiReply, ApiReply> {
    let mut catalog = state.catalog.lock().await;
    let item = catalog
        .apply_discount(&name, &item_name)
        .await
        .map_err(catalog_error)?;
    let message = format!(
        "{}% discount applied to '{}'",
        item.variant().discount_percent(),
        item.name()
    );
    Ok(respond(
        StatusCode::OK,
        serde_json::json!({ "message": message, "item": to_data(&item)? }),
    ))
}
