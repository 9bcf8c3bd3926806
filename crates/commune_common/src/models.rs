// --- File: crates/commune_common/src/models.rs ---

// Data structures shared between the feature crates and the app shell.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One named block of a workout, e.g. "Warm-up", with its line items in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSection {
    pub title: String,
    pub items: Vec<String>,
}

/// The workout scheduled for one calendar day.
///
/// Supplied by a workout source keyed by `YYYY-MM-DD`; never mutated by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub sections: Vec<WorkoutSection>,
}

/// The signed-in user's profile as served by the backend `/me` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub account_status: String,
    pub first_login_at: Option<String>,
    pub last_login_at: Option<String>,
    pub onboarding_completed_at: Option<String>,
    pub units: String,
}

/// The identity attached to a session by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

/// An authenticated session.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub user: AuthUser,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

/// Email/password login input, already trimmed and validated.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account creation input, already trimmed and validated.
#[derive(Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_profile_uses_camel_case() {
        let json = r#"{
            "id": "u-1",
            "email": "jane.doe@example.com",
            "fullName": "Jane Doe",
            "phone": null,
            "role": "member",
            "accountStatus": "active",
            "firstLoginAt": "2024-01-02T10:00:00Z",
            "lastLoginAt": null,
            "onboardingCompletedAt": null,
            "units": "imperial"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.full_name, "Jane Doe");
        assert_eq!(profile.account_status, "active");
        assert!(profile.phone.is_none());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials {
            email: "a@b.co".to_string(),
            password: "hunter22".to_string(),
        };
        let rendered = format!("{:?}", credentials);
        assert!(!rendered.contains("hunter22"));
        assert!(rendered.contains("a@b.co"));
    }
}
