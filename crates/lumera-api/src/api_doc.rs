//! OpenAPI documentation. Served at /api/openapi.json, browsable at /docs.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use lumera_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lumera API",
        version = "0.1.0",
        description = "Photography studio site backend (v1): galleries, slider, blog, portfolio, books, contact form, site settings, and category classification. All endpoints are versioned under /api/v1/."
    ),
    paths(
        // Health
        handlers::health::health,
        // Galleries
        handlers::galleries::list_galleries,
        handlers::galleries::get_gallery,
        handlers::galleries::admin_list_galleries,
        handlers::galleries::create_gallery,
        handlers::galleries::update_gallery,
        handlers::galleries::delete_gallery,
        handlers::galleries::admin_list_gallery_assets,
        // Assets
        handlers::assets::like_asset,
        handlers::assets::create_asset,
        handlers::assets::get_asset,
        handlers::assets::update_asset,
        handlers::assets::delete_asset,
        // Categories
        handlers::categories::list_categories,
        handlers::backfill::backfill_categories,
        // Slider
        handlers::slider::list_slider,
        handlers::slider::admin_list_slider,
        handlers::slider::create_slider_image,
        handlers::slider::update_slider_image,
        handlers::slider::delete_slider_image,
        // Blog
        handlers::blog::list_posts,
        handlers::blog::get_post,
        handlers::blog::admin_list_posts,
        handlers::blog::create_post,
        handlers::blog::update_post,
        handlers::blog::delete_post,
        // Portfolio
        handlers::portfolio::list_portfolio,
        handlers::portfolio::admin_list_portfolio,
        handlers::portfolio::create_portfolio_item,
        handlers::portfolio::update_portfolio_item,
        handlers::portfolio::delete_portfolio_item,
        // Books
        handlers::books::list_books,
        handlers::books::admin_list_books,
        handlers::books::create_book,
        handlers::books::update_book,
        handlers::books::delete_book,
        // Contact
        handlers::contact::submit_contact,
        handlers::contact::list_messages,
        handlers::contact::mark_message_read,
        // Settings
        handlers::settings::public_settings,
        handlers::settings::admin_settings,
        handlers::settings::update_settings,
    ),
    components(schemas(
        error::ErrorResponse,
        models::GalleryResponse,
        models::GalleryDetailResponse,
        models::CreateGalleryRequest,
        models::UpdateGalleryRequest,
        models::MediaAssetResponse,
        models::CreateAssetRequest,
        models::UpdateAssetRequest,
        models::SliderImage,
        models::CreateSliderImageRequest,
        models::UpdateSliderImageRequest,
        models::BlogPost,
        models::BlogPostResponse,
        models::CreateBlogPostRequest,
        models::UpdateBlogPostRequest,
        models::PortfolioItemResponse,
        models::CreatePortfolioItemRequest,
        models::UpdatePortfolioItemRequest,
        models::BookResponse,
        models::CreateBookRequest,
        models::UpdateBookRequest,
        models::ContactRequest,
        models::ContactMessageResponse,
        models::UpdateSettingsRequest,
        handlers::assets::LikeResponse,
        handlers::categories::CategoryEntry,
        handlers::categories::CategoriesDebug,
        handlers::categories::CategoriesResponse,
        handlers::backfill::DryRunResponse,
        handlers::health::HealthResponse,
        lumera_classify::BackfillSummary,
        lumera_classify::BackfillRecordOutcome,
        lumera_classify::ClassificationSource,
    )),
    tags(
        (name = "galleries", description = "Public gallery endpoints"),
        (name = "assets", description = "Public asset endpoints"),
        (name = "categories", description = "Category aggregation"),
        (name = "slider", description = "Homepage slider"),
        (name = "blog", description = "Blog"),
        (name = "portfolio", description = "Portfolio"),
        (name = "books", description = "Books catalog"),
        (name = "contact", description = "Contact form"),
        (name = "settings", description = "Site settings"),
        (name = "admin", description = "Back office (requires x-admin-key)"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
