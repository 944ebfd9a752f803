//! API-wide constants

/// Prefix for all API routes
pub const API_PREFIX: &str = "/api/v1";

/// Header carrying the admin API key
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";
