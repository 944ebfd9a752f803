//! Route configuration and setup

use crate::auth::{admin_auth_middleware, AuthState};
use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Json, Router,
};
use lumera_core::Config;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;
    let auth_state = Arc::new(AuthState {
        admin_api_key: config.admin_api_key.clone(),
    });

    // Public routes (no authentication required)
    let public_routes = public_routes();

    // Admin routes (require the admin API key)
    let admin_routes = admin_routes().layer(axum::middleware::from_fn_with_state(
        auth_state,
        admin_auth_middleware,
    ));

    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1_000)
        .max(1);

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .nest(API_PREFIX, public_routes)
        .nest(&format!("{}/admin", API_PREFIX), admin_routes)
        .with_state(state)
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::ApiDoc::openapi()) }),
        )
        .nest(
            "/docs",
            utoipa_rapidoc::RapiDoc::new("/api/openapi.json")
                .path("/docs")
                .into(),
        )
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/galleries", get(handlers::galleries::list_galleries))
        .route("/galleries/{slug}", get(handlers::galleries::get_gallery))
        .route("/categories", get(handlers::categories::list_categories))
        .route("/slider", get(handlers::slider::list_slider))
        .route("/blog", get(handlers::blog::list_posts))
        .route("/blog/{slug}", get(handlers::blog::get_post))
        .route("/portfolio", get(handlers::portfolio::list_portfolio))
        .route("/books", get(handlers::books::list_books))
        .route("/settings", get(handlers::settings::public_settings))
        .route("/contact", post(handlers::contact::submit_contact))
        .route("/assets/{id}/like", post(handlers::assets::like_asset))
}

fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Galleries
        .route(
            "/galleries",
            get(handlers::galleries::admin_list_galleries)
                .post(handlers::galleries::create_gallery),
        )
        .route(
            "/galleries/{id}",
            put(handlers::galleries::update_gallery).delete(handlers::galleries::delete_gallery),
        )
        .route(
            "/galleries/{id}/assets",
            get(handlers::galleries::admin_list_gallery_assets),
        )
        // Assets
        .route("/assets", post(handlers::assets::create_asset))
        .route(
            "/assets/{id}",
            get(handlers::assets::get_asset)
                .put(handlers::assets::update_asset)
                .delete(handlers::assets::delete_asset),
        )
        // Slider
        .route(
            "/slider",
            get(handlers::slider::admin_list_slider).post(handlers::slider::create_slider_image),
        )
        .route(
            "/slider/{id}",
            put(handlers::slider::update_slider_image)
                .delete(handlers::slider::delete_slider_image),
        )
        // Blog
        .route(
            "/blog",
            get(handlers::blog::admin_list_posts).post(handlers::blog::create_post),
        )
        .route(
            "/blog/{id}",
            put(handlers::blog::update_post).delete(handlers::blog::delete_post),
        )
        // Portfolio
        .route(
            "/portfolio",
            get(handlers::portfolio::admin_list_portfolio)
                .post(handlers::portfolio::create_portfolio_item),
        )
        .route(
            "/portfolio/{id}",
            put(handlers::portfolio::update_portfolio_item)
                .delete(handlers::portfolio::delete_portfolio_item),
        )
        // Books
        .route(
            "/books",
            get(handlers::books::admin_list_books).post(handlers::books::create_book),
        )
        .route(
            "/books/{id}",
            put(handlers::books::update_book).delete(handlers::books::delete_book),
        )
        // Contact messages
        .route("/messages", get(handlers::contact::list_messages))
        .route(
            "/messages/{id}/read",
            post(handlers::contact::mark_message_read),
        )
        // Settings
        .route(
            "/settings",
            get(handlers::settings::admin_settings).put(handlers::settings::update_settings),
        )
        // Category backfill
        .route(
            "/backfill-categories",
            post(handlers::backfill::backfill_categories),
        )
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", origin, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any)
    };

    Ok(cors)
}
