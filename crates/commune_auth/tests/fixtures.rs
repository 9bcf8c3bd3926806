//! Test fixtures for the hosted auth provider tests

use commune_auth::SupabaseAuthProvider;
use commune_config::{ApiConfig, AuthConfig, AuthProviderKind};
use serde_json::{json, Value};

pub const ANON_KEY: &str = "anon-test-key";

/// Provider pointed at a mock server
pub fn create_provider(base_url: &str) -> SupabaseAuthProvider {
    let auth = AuthConfig {
        provider: AuthProviderKind::Supabase,
        url: Some(base_url.to_string()),
        anon_key: Some(ANON_KEY.to_string()),
    };
    SupabaseAuthProvider::from_config(&auth, &ApiConfig::default()).expect("provider")
}

/// A password-grant token response
pub fn token_json(access_token: &str, expires_in: i64) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "bearer",
        "expires_in": expires_in,
        "refresh_token": "refresh-1",
        "user": {
            "id": "0b6d1c1e-7e1a-4d2f-a1a5-9f6f1c2d3e4f",
            "email": "jane@box.fit",
            "aud": "authenticated"
        }
    })
}
