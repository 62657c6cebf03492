use crate::transport::http::handlers::{catalog, establishments, health};
use crate::transport::http::types::{
    AddCatalogItemRequest, ApiResponse, AppState, CreateEstablishmentRequest, RatingRequest,
};
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::index_handler,
        health::healthcheck_handler,
        establishments::create_establishment_handler,
        establishments::list_establishments_handler,
        establishments::summaries_handler,
        establishments::toggle_handler,
        establishments::rate_handler,
        catalog::add_item_handler,
        catalog::get_catalog_handler,
        catalog::apply_discount_handler
    ),
    components(schemas(
        ApiResponse,
        CreateEstablishmentRequest,
        RatingRequest,
        AddCatalogItemRequest
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/establishments",
            post(establishments::create_establishment_handler)
                .get(establishments::list_establishments_handler),
        )
        .route("/api/establishments/summary", get(establishments::summaries_handler))
        .route("/api/establishments/:name/toggle", patch(establishments::toggle_handler))
        .route("/api/establishments/:name/ratings", post(establishments::rate_handler))
        .route(
            "/api/establishments/:name/catalog",
            post(catalog::add_item_handler).get(catalog::get_catalog_handler),
        )
        .route(
            "/api/establishments/:name/catalog/:item/discount",
            patch(catalog::apply_discount_handler),
        )
        .with_state(app_state)
}

/// The full application: routes, Swagger UI, open CORS and request tracing.
pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
