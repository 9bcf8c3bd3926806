mod fixtures;

use commune_common::services::WorkoutSource;
use commune_config::ApiConfig;
use commune_workouts::{RemoteWorkoutSource, WorkoutError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn source_for(server: &MockServer) -> RemoteWorkoutSource {
    let config = ApiConfig {
        base_url: Some(format!("{}/", server.uri())),
        timeout_secs: 5,
    };
    RemoteWorkoutSource::from_config(&config).expect("configured source")
}

#[tokio::test]
async fn test_lookup_returns_scheduled_workout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workouts/2024-04-03"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::workout_json()))
        .expect(1)
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    let record = source.lookup("2024-04-03").await.unwrap();

    assert_eq!(record, Some(fixtures::workout_record()));
}

#[tokio::test]
async fn test_lookup_not_found_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workouts/2024-04-04"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no workout"))
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    assert_eq!(source.lookup("2024-04-04").await.unwrap(), None);
}

#[tokio::test]
async fn test_lookup_server_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workouts/2024-04-05"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    let err = source.lookup("2024-04-05").await.unwrap_err();

    match err {
        WorkoutError::Status(failure) => {
            assert_eq!(failure.status, 500);
            assert_eq!(failure.body, "database down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workouts/2024-04-06"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    assert!(matches!(
        source.lookup("2024-04-06").await,
        Err(WorkoutError::Parse(_))
    ));
}

#[tokio::test]
async fn test_invalid_key_never_hits_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    assert!(matches!(
        source.lookup("2024-02-30").await,
        Err(WorkoutError::InvalidDate(_))
    ));
}

#[test]
fn test_from_config_requires_base_url() {
    let config = ApiConfig {
        base_url: None,
        timeout_secs: 5,
    };
    assert!(matches!(
        RemoteWorkoutSource::from_config(&config),
        Err(WorkoutError::NotConfigured)
    ));
}
