use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// Setting keys whose values are never returned on the public endpoint.
pub const SECRET_SETTING_KEYS: &[&str] = &["ai_api_key", "smtp_password"];

/// A single key/value site setting. Provider selection and API keys for the
/// AI classifier live here alongside general site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct SiteSetting {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Admin settings upsert payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    pub settings: HashMap<String, String>,
}

/// True if the given setting key holds secret material.
pub fn is_secret_key(key: &str) -> bool {
    SECRET_SETTING_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_secret_key() {
        assert!(is_secret_key("ai_api_key"));
        assert!(is_secret_key("smtp_password"));
        assert!(!is_secret_key("ai_provider"));
        assert!(!is_secret_key("site_title"));
    }
}
