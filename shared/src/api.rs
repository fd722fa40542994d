use serde::{Deserialize, Serialize};

use crate::models::UserProfile;

// ============================================================================
// Endpoints
// ============================================================================

/// Session-check endpoint, relative to the backend base URL.
pub const ME_PATH: &str = "/api/me";

/// Logout endpoint, relative to the backend base URL.
pub const LOGOUT_PATH: &str = "/logout";

/// Query parameter the backend sets when redirecting back to the status page.
pub const STATUS_PARAM: &str = "status";

/// Value of [`STATUS_PARAM`] that marks a login the user aborted.
pub const STATUS_CANCELLED: &str = "cancelled";

/// Query parameter carrying the provider's error code on cancellation.
pub const REASON_PARAM: &str = "reason";

/// Join a backend base URL and an endpoint path without doubling the slash.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

// ============================================================================
// Response bodies
// ============================================================================

/// Body of a successful `GET /api/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: UserProfile,
}

/// Body of a successful `POST /logout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub ok: bool,
    #[serde(default)]
    pub msg: Option<String>,
}

/// Error body the backend returns with non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        assert_eq!(
            endpoint("http://localhost:5000", ME_PATH),
            "http://localhost:5000/api/me"
        );
        assert_eq!(
            endpoint("http://localhost:5000/", LOGOUT_PATH),
            "http://localhost:5000/logout"
        );
    }

    #[test]
    fn test_me_response_ignores_token_claims() {
        let json = r#"{"user":{"sub":"42","name":"Ada Lovelace","email":"ada@example.com","picture":null,"exp":1700000000}}"#;
        let parsed: MeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.user.sub, "42");
        assert_eq!(parsed.user.picture, None);
    }

    #[test]
    fn test_error_response_detail_is_optional() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"error":"unauthenticated"}"#).unwrap();
        assert_eq!(parsed.error, "unauthenticated");
        assert!(parsed.detail.is_none());

        let parsed: ErrorResponse =
            serde_json::from_str(r#"{"error":"invalid token","detail":"Signature has expired"}"#)
                .unwrap();
        assert_eq!(parsed.detail.as_deref(), Some("Signature has expired"));
    }

    #[test]
    fn test_logout_response() {
        let parsed: LogoutResponse =
            serde_json::from_str(r#"{"ok":true,"msg":"logged out"}"#).unwrap();
        assert!(parsed.ok);
        assert_eq!(parsed.msg.as_deref(), Some("logged out"));
    }
}
