//! Domain models shared across Lumera components.

pub mod asset;
pub mod blog;
pub mod book;
pub mod contact;
pub mod gallery;
pub mod portfolio;
pub mod settings;
pub mod slider;

pub use asset::{CreateAssetRequest, MediaAsset, MediaAssetResponse, UpdateAssetRequest};
pub use blog::{BlogPost, BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest};
pub use book::{Book, BookResponse, CreateBookRequest, UpdateBookRequest};
pub use contact::{ContactMessage, ContactMessageResponse, ContactRequest};
pub use gallery::{
    CreateGalleryRequest, Gallery, GalleryDetailResponse, GalleryResponse, UpdateGalleryRequest,
};
pub use portfolio::{
    CreatePortfolioItemRequest, PortfolioItem, PortfolioItemResponse, UpdatePortfolioItemRequest,
};
pub use settings::{is_secret_key, SiteSetting, UpdateSettingsRequest, SECRET_SETTING_KEYS};
pub use slider::{CreateSliderImageRequest, SliderImage, UpdateSliderImageRequest};
