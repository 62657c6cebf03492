use crate::transport::http::handlers::common::{catalog_error, respond, to_data, ApiReply};
use crate::transport::http::types::{json_422, AppState, CreateEstablishmentRequest, RatingRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/establishments",
    request_body = CreateEstablishmentRequest,
    responses(
        (status = 201, description = "Establishment registered (inactive, no ratings, empty catalog)", body = ApiResponse),
        (status = 409, description = "An establishment with this name already exists", body = ApiResponse),
        (status = 422, description = "Invalid body or empty name", body = ApiResponse),
        (status = 500, description = "Registry could not be saved", body = ApiResponse)
    )
)]
pub async fn create_establishment_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateEstablishmentRequest>, JsonRejection>,
) -> Result<ApiReply, ApiReply> {
    let Json(request) =
        request.map_err(|e| json_422(e, "{\"name\": string, \"category\": string}"))?;

    let mut catalog = state.catalog.lock().await;
    let summary = catalog
        .create_establishment(&request.name, &request.category)
        .await
        .map_err(catalog_error)?;
    Ok(respond(StatusCode::CREATED, to_data(&summary)?))
}

#[utoipa::path(
    get,
    path = "/api/establishments",
    responses((status = 200, description = "Every establishment with ratings and catalog", body = ApiResponse))
)]
pub async fn list_establishments_handler(
    State(state): State<AppState>,
) -> Result<ApiReply, ApiReply> {
    let catalog = state.catalog.lock().await;
    Ok(respond(StatusCode::OK, to_data(&catalog.establishments())?))
}

#[utoipa::path(
    get,
    path = "/api/establishments/summary",
    responses((status = 200, description = "Name, category, active flag and average rating of each establishment", body = ApiResponse))
)]
pub async fn summaries_handler(State(state): State<AppState>) -> Result<ApiReply, ApiReply> {
    let catalog = state.catalog.lock().await;
    Ok(respond(StatusCode::OK, to_data(&catalog.summaries())?))
}

#[utoipa::path(
    patch,
    path = "/api/establishments/{name}/toggle",
    params(("name" = String, Path, description = "Establishment name (case-insensitive)")),
    responses(
        (status = 200, description = "Active flag flipped", body = ApiResponse),
        (status = 404, description = "Establishment not found", body = ApiResponse),
        (status = 500, description = "Registry could not be saved", body = ApiResponse)
    )
)]
pub async fn toggle_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiReply, ApiReply> {
    let mut catalog = state.catalog.lock().await;
    let message = catalog.toggle_active(&name).await.map_err(catalog_error)?;
    let active = catalog.find(&name).map(|e| e.is_active()).unwrap_or_default();
    Ok(respond(
        StatusCode::OK,
        serde_json::json!({ "message": message, "active": active }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/establishments/{name}/ratings",
    params(("name" = String, Path, description = "Establishment name (case-insensitive)")),
    request_body = RatingRequest,
    responses(
        (status = 200, description = "Rating recorded; returns the new average", body = ApiResponse),
        (status = 404, description = "Establishment not found", body = ApiResponse),
        (status = 422, description = "Invalid body, empty author or score outside 1..=5", body = ApiResponse),
        (status = 500, description = "Registry could not be saved", body = ApiResponse)
    )
)]
pub async fn rate_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    request: Result<Json<RatingRequest>, JsonRejection>,
) -> Result<ApiReply, ApiReply> {
    let Json(request) =
        request.map_err(|e| json_422(e, "{\"author\": string, \"score\": number}"))?;

    let mut catalog = state.catalog.lock().await;
    catalog
        .add_rating(&name, &request.author, request.score)
        .await
        .map_err(catalog_error)?;
    let average = catalog.find(&name).ok().and_then(|e| e.average_rating());
    Ok(respond(
        StatusCode::OK,
        serde_json::json!({ "average_rating": average }),
    ))
}
