use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// Contact form submission stored for the back office
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactMessageResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Public contact form payload
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "Subject must be at most 255 characters"))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "Message must be between 1 and 5000 characters"))]
    pub body: String,
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(message: ContactMessage) -> Self {
        ContactMessageResponse {
            id: message.id,
            name: message.name,
            email: message.email,
            subject: message.subject,
            body: message.body,
            read: message.read,
            created_at: message.created_at,
        }
    }
}
