use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::config;
use crate::handlers::{protected::notes, public};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Build the full HTTP router over `state`
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        // Protected
        .nest("/api/notes", note_routes(state.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(config().api.max_request_size_bytes))
                .layer(cors_layer()),
        );

    let router = if config().api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router.with_state(state)
}

fn note_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/fetchallnotes", get(notes::fetch_all_notes))
        .route("/addnote", post(notes::add_note))
        .route("/updatenote/:id", put(notes::update_note))
        .route("/deletenote/:id", delete(notes::delete_note))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

fn cors_layer() -> CorsLayer {
    let security = &config().security;

    if !security.enable_cors {
        return CorsLayer::new();
    }
    if crate::is_development!() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
