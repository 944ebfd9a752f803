//! Repository implementations, one per domain aggregate.

pub mod asset;
pub mod blog;
pub mod book;
pub mod contact;
pub mod gallery;
pub mod portfolio;
pub mod settings;
pub mod slider;

pub use asset::{AssetCategoryRow, MediaAssetRepository};
pub use blog::BlogRepository;
pub use book::BookRepository;
pub use contact::ContactRepository;
pub use gallery::GalleryRepository;
pub use portfolio::PortfolioRepository;
pub use settings::SettingsRepository;
pub use slider::SliderRepository;
