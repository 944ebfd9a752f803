//! Configuration module
//!
//! Typed application configuration loaded from environment variables,
//! including database, server, AI classification, and SMTP settings.

use std::env;

const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const CLASSIFY_TIMEOUT_SECS: u64 = 30;
const MIN_ADMIN_KEY_LEN: usize = 16;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    // Admin back office
    pub admin_api_key: String,
    // AI classification environment defaults (persisted settings take precedence)
    pub ai_provider: Option<String>,
    pub ai_api_key: Option<String>,
    pub ai_model: Option<String>,
    pub ai_endpoint: Option<String>,
    pub classify_timeout_seconds: u64,
    // Contact form notifications
    pub email_notifications_enabled: bool,
    pub contact_notify_email: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_from: Option<String>,
    pub smtp_tls: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            admin_api_key: env::var("ADMIN_API_KEY")
                .map_err(|_| anyhow::anyhow!("ADMIN_API_KEY must be set for the back office"))?,
            ai_provider: env::var("AI_PROVIDER").ok(),
            ai_api_key: env::var("AI_API_KEY").ok(),
            ai_model: env::var("AI_MODEL").ok(),
            ai_endpoint: env::var("AI_ENDPOINT").ok(),
            classify_timeout_seconds: env::var("CLASSIFY_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CLASSIFY_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CLASSIFY_TIMEOUT_SECS),
            email_notifications_enabled: env::var("EMAIL_NOTIFICATIONS_ENABLED")
                .unwrap_or_else(|_| "false".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(false),
            contact_notify_email: env::var("CONTACT_NOTIFY_EMAIL").ok(),
            smtp_host: env::var("SMTP_HOST").ok(),
            smtp_port: env::var("SMTP_PORT").ok().and_then(|s| s.parse().ok()),
            smtp_user: env::var("SMTP_USER").ok(),
            smtp_password: env::var("SMTP_PASSWORD").ok(),
            smtp_from: env::var("SMTP_FROM").ok(),
            smtp_tls: env::var("SMTP_TLS")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(true),
        };

        Ok(config)
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.admin_api_key.len() < MIN_ADMIN_KEY_LEN {
            return Err(anyhow::anyhow!(
                "ADMIN_API_KEY must be at least {} characters",
                MIN_ADMIN_KEY_LEN
            ));
        }

        if self.database_url.trim().is_empty() {
            return Err(anyhow::anyhow!("DATABASE_URL cannot be empty"));
        }

        if self.email_notifications_enabled
            && (self.smtp_host.is_none()
                || self.smtp_from.is_none()
                || self.contact_notify_email.is_none())
        {
            return Err(anyhow::anyhow!(
                "EMAIL_NOTIFICATIONS_ENABLED requires SMTP_HOST, SMTP_FROM and CONTACT_NOTIFY_EMAIL"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server_port: 4000,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            database_url: "postgresql://localhost/lumera".to_string(),
            db_max_connections: 20,
            db_timeout_seconds: 30,
            admin_api_key: "test-admin-key-0123456789".to_string(),
            ai_provider: None,
            ai_api_key: None,
            ai_model: None,
            ai_endpoint: None,
            classify_timeout_seconds: 30,
            email_notifications_enabled: false,
            contact_notify_email: None,
            smtp_host: None,
            smtp_port: None,
            smtp_user: None,
            smtp_password: None,
            smtp_from: None,
            smtp_tls: true,
        }
    }

    #[test]
    fn test_validate_accepts_development_wildcard_cors() {
        let config = base_config();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_wildcard_cors_in_production() {
        let mut config = base_config();
        config.environment = "production".to_string();
        assert!(config.validate().is_err());

        config.cors_origins = vec!["https://studio.example.com".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_admin_key() {
        let mut config = base_config();
        config.admin_api_key = "short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_email_requires_smtp_settings() {
        let mut config = base_config();
        config.email_notifications_enabled = true;
        assert!(config.validate().is_err());

        config.smtp_host = Some("smtp.example.com".to_string());
        config.smtp_from = Some("noreply@example.com".to_string());
        config.contact_notify_email = Some("studio@example.com".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let mut config = base_config();
        assert!(!config.is_production());
        config.environment = "PROD".to_string();
        assert!(config.is_production());
    }
}
