mod fixtures;

use commune_auth::{
    login_error_message, signup_error_message, validate_login, AuthError, SupabaseAuthProvider,
};
use commune_common::models::SignupRequest;
use commune_common::services::AuthProvider;
use commune_config::{ApiConfig, AuthConfig};
use serde_json::json;
use wiremock::matchers::{bearer_token, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fixtures::{create_provider, token_json, ANON_KEY};

fn signup_request() -> SignupRequest {
    SignupRequest {
        full_name: "Jane Doe".to_string(),
        email: "jane@box.fit".to_string(),
        password: "secret1".to_string(),
    }
}

#[tokio::test]
async fn test_login_exchanges_password_for_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", ANON_KEY))
        .and(body_partial_json(json!({ "email": "jane@box.fit" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json("access-1", 3600)))
        .expect(1)
        .mount(&server)
        .await;

    let provider = create_provider(&server.uri());
    let credentials = validate_login("jane@box.fit", "secret1").unwrap();
    let session = provider.login(credentials).await.unwrap();

    assert_eq!(session.access_token, "access-1");
    assert_eq!(session.refresh_token.as_deref(), Some("refresh-1"));
    assert_eq!(session.user.email.as_deref(), Some("jane@box.fit"));
    assert!(session.expires_at.is_some());

    let restored = provider.restore_session().await.unwrap();
    assert_eq!(restored, Some(session));
}

#[tokio::test]
async fn test_login_rejection_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let provider = create_provider(&server.uri());
    let credentials = validate_login("jane@box.fit", "wrong").unwrap();
    let err = provider.login(credentials).await.unwrap_err();

    assert!(matches!(err, AuthError::Rejected { status: 400, .. }));
    assert_eq!(login_error_message(&err), "Invalid email or password");
}

#[tokio::test]
async fn test_signup_without_session_awaits_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(body_partial_json(json!({ "data": { "full_name": "Jane Doe" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "0b6d1c1e-7e1a-4d2f-a1a5-9f6f1c2d3e4f",
            "email": "jane@box.fit",
            "confirmation_sent_at": "2024-04-03T06:00:00Z"
        })))
        .mount(&server)
        .await;

    let provider = create_provider(&server.uri());
    assert_eq!(provider.signup(signup_request()).await.unwrap(), None);
    assert_eq!(provider.restore_session().await.unwrap(), None);
}

#[tokio::test]
async fn test_signup_with_session_signs_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json("access-2", 3600)))
        .mount(&server)
        .await;

    let provider = create_provider(&server.uri());
    let session = provider.signup(signup_request()).await.unwrap().unwrap();
    assert_eq!(session.access_token, "access-2");
}

#[tokio::test]
async fn test_signup_duplicate_account_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "msg": "User already registered" })),
        )
        .mount(&server)
        .await;

    let provider = create_provider(&server.uri());
    let err = provider.signup(signup_request()).await.unwrap_err();

    assert_eq!(
        signup_error_message(&err),
        "An account with this email already exists. Please sign in instead."
    );
}

#[tokio::test]
async fn test_logout_revokes_token_and_forgets_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json("access-3", 3600)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(bearer_token("access-3"))
        .and(header("apikey", ANON_KEY))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let provider = create_provider(&server.uri());
    let session = provider
        .login(validate_login("jane@box.fit", "secret1").unwrap())
        .await
        .unwrap();

    provider.logout(&session).await.unwrap();
    assert_eq!(provider.restore_session().await.unwrap(), None);
}

#[tokio::test]
async fn test_expired_session_is_not_restored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json("access-4", -10)))
        .mount(&server)
        .await;

    let provider = create_provider(&server.uri());
    provider
        .login(validate_login("jane@box.fit", "secret1").unwrap())
        .await
        .unwrap();

    assert_eq!(provider.restore_session().await.unwrap(), None);
}

#[test]
fn test_from_config_requires_url_and_key() {
    let missing_url = AuthConfig {
        anon_key: Some(ANON_KEY.to_string()),
        ..AuthConfig::default()
    };
    assert!(matches!(
        SupabaseAuthProvider::from_config(&missing_url, &ApiConfig::default()),
        Err(AuthError::NotConfigured(what)) if what == "auth.url"
    ));

    let missing_key = AuthConfig {
        url: Some("https://auth.example".to_string()),
        ..AuthConfig::default()
    };
    assert!(matches!(
        SupabaseAuthProvider::from_config(&missing_key, &ApiConfig::default()),
        Err(AuthError::NotConfigured(what)) if what == "auth.anon_key"
    ));
}
