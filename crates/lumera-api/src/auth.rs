//! Admin API key authentication middleware.
//!
//! The back office is protected by a single admin key supplied in the
//! `x-admin-key` header and compared in constant time.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use lumera_core::AppError;
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::constants::ADMIN_KEY_HEADER;
use crate::error::HttpAppError;

#[derive(Clone)]
pub struct AuthState {
    pub admin_api_key: String,
}

fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

pub async fn admin_auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    request: Request,
    next: Next,
) -> Response {
    let provided = match request
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
    {
        Some(key) => key,
        None => {
            return HttpAppError(AppError::Unauthorized(format!(
                "Missing {} header",
                ADMIN_KEY_HEADER
            )))
            .into_response();
        }
    };

    if !secure_compare(provided, &auth_state.admin_api_key) {
        tracing::debug!("Admin key mismatch");
        return HttpAppError(AppError::Unauthorized("Invalid admin API key".to_string()))
            .into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_compare() {
        assert!(secure_compare("key-123", "key-123"));
        assert!(!secure_compare("key-123", "key-124"));
        assert!(!secure_compare("key-123", "key-12"));
        assert!(!secure_compare("", "key"));
        assert!(secure_compare("", ""));
    }
}
