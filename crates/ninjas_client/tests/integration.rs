use ninjas_client::http_client::ReqwestNinjasClient;
use ninjas_client::{NinjasClient, NinjasError};
use secrecy::SecretString;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestNinjasClient {
    ReqwestNinjasClient::new(
        &server.uri(),
        SecretString::new("tok".into()),
        Duration::from_secs(5),
    )
    .expect("client")
}

#[tokio::test]
async fn fetch_calories_sends_key_and_params_and_takes_first() {
    let server = MockServer::start().await;
    let body = serde_json::json!([
        {"name": "Running, 5 mph", "calories_per_hour": 606, "duration_minutes": 30, "total_calories": 303},
        {"name": "Running, 6 mph", "calories_per_hour": 700, "duration_minutes": 30, "total_calories": 350}
    ]);
    Mock::given(method("GET"))
        .and(path("/v1/caloriesburned"))
        .and(header("X-Api-Key", "tok"))
        .and(query_param("activity", "running"))
        .and(query_param("weight", "80"))
        .and(query_param("duration", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let est = client_for(&server)
        .fetch_calories("running", Some(80), Some(30))
        .await
        .expect("calories")
        .expect("first entry");
    assert_eq!(est.name, "Running, 5 mph");
    assert_eq!(est.total_calories, 303.0);
    assert_eq!(est.duration_minutes, 30);
}

#[tokio::test]
async fn fetch_calories_omits_absent_optional_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/caloriesburned"))
        .and(query_param("activity", "yoga"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let res = client_for(&server)
        .fetch_calories("yoga", None, None)
        .await
        .expect("ok");
    assert!(res.is_none());

    let received = server.received_requests().await.unwrap();
    let query = received[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("weight"));
    assert!(!query.contains("duration"));
}

#[tokio::test]
async fn fetch_calories_non_success_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/caloriesburned"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid API Key."))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_calories("running", None, Some(60))
        .await
        .expect_err("status error");
    match err {
        NinjasError::Status { status, ref body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "Invalid API Key.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_remote_unavailable());
}

#[tokio::test]
async fn fetch_exercise_info_uses_name_param() {
    let server = MockServer::start().await;
    let body = serde_json::json!([{
        "name": "Rowing",
        "type": "cardio",
        "muscle": "lats",
        "equipment": "machine",
        "difficulty": "intermediate",
        "instructions": "Pull."
    }]);
    Mock::given(method("GET"))
        .and(path("/v1/exercises"))
        .and(header("X-Api-Key", "tok"))
        .and(query_param("name", "rowing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let info = client_for(&server)
        .fetch_exercise_info("rowing")
        .await
        .expect("exercise")
        .expect("first entry");
    assert_eq!(info.exercise_type.as_deref(), Some("cardio"));
    assert_eq!(info.muscle.as_deref(), Some("lats"));
}

#[tokio::test]
async fn fetch_exercise_info_empty_list_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/exercises"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let info = client_for(&server)
        .fetch_exercise_info("dancing")
        .await
        .expect("ok");
    assert!(info.is_none());
}

#[tokio::test]
async fn slow_response_times_out_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/exercises"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = ReqwestNinjasClient::new(
        &server.uri(),
        SecretString::new("tok".into()),
        Duration::from_millis(50),
    )
    .expect("client");
    let err = client
        .fetch_exercise_info("running")
        .await
        .expect_err("timeout");
    assert!(matches!(err, NinjasError::Http(_)));
    assert!(err.is_remote_unavailable());
}
