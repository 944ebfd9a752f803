//! HTTP request handlers

pub mod assets;
pub mod backfill;
pub mod blog;
pub mod books;
pub mod categories;
pub mod contact;
pub mod galleries;
pub mod health;
pub mod portfolio;
pub mod settings;
pub mod slider;
