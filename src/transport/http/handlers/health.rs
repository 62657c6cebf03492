use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome page linking the API docs", body = String, content_type = "text/html"))
)]
pub async fn index_handler() -> Html<&'static str> {
    Html(
        "<!doctype html>\n<html><head><title>Sabor Express</title></head>\
         <body><h1>Sabor Express</h1>\
         <p>Establishment catalog API. See the <a href=\"/swagger-ui\">Swagger UI</a>.</p>\
         </body></html>",
    )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up; reports the number of establishments", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog.lock().await;
    (
        StatusCode::OK,
        Json(ApiResponse::ok(serde_json::json!({
            "status": "ok",
            "establishments": catalog.registry().len(),
        }))),
    )
}
