//! HTTP client tests against a local stub of the comparison service.

use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use inspector_client::{HttpComparisonClient, Inspector};
use inspector_core::{ComparisonService, InspectorError, NewComparison, SubmitState};
use serde_json::{json, Value};

fn record() -> Value {
    json!({
        "id": 1,
        "model_a": "gpt-4",
        "prompt_a": "hello",
        "model_b": "gpt-3.5-turbo",
        "prompt_b": "hello",
        "output_a": "Hi there",
        "output_b": "Hello",
        "similarity_score": 0.42,
        "created_at": "2024-01-01T00:00:00Z"
    })
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn healthy_service() -> Router {
    Router::new()
        .route("/", get(|| async { Json(json!({"message": "Hello World"})) }))
        .route(
            "/api/comparisons/",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["model_a"], "gpt-4");
                assert_eq!(body["prompt_b"], "hello");
                Json(record())
            })
            .get(|| async { Json(json!([record()])) }),
        )
        .route(
            "/api/comparisons/{id}",
            get(|Path(id): Path<i64>| async move {
                if id == 1 {
                    Ok(Json(record()))
                } else {
                    Err(StatusCode::NOT_FOUND)
                }
            }),
        )
}

fn broken_service() -> Router {
    Router::new().route(
        "/api/comparisons/",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR })
            .get(|| async { (StatusCode::OK, "not json") }),
    )
}

#[tokio::test]
async fn create_list_and_get_round_trip() {
    let base = serve(healthy_service()).await;
    let client = HttpComparisonClient::new(&base);

    client.ping().await.unwrap();

    let created = client
        .create(&NewComparison::new("gpt-4", "hello", "gpt-3.5-turbo", "hello"))
        .await
        .unwrap();
    assert_eq!(created.output_a, "Hi there");
    assert_eq!(created.similarity_score, Some(0.42));

    let listed = client.list().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    assert_eq!(client.get(1).await.unwrap(), created);
    let missing = client.get(2).await.unwrap_err();
    assert_eq!(missing, InspectorError::from_status(404, "Not Found"));
}

#[tokio::test]
async fn server_error_uses_status_text() {
    let base = serve(broken_service()).await;
    let client = HttpComparisonClient::new(&base);

    let err = client
        .create(&NewComparison::new("gpt-4", "hello", "gpt-3.5-turbo", "hello"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Error: Internal Server Error");
}

#[tokio::test]
async fn malformed_list_is_a_decode_error() {
    let base = serve(broken_service()).await;
    let client = HttpComparisonClient::new(&base);

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, InspectorError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = HttpComparisonClient::new(&base).list().await.unwrap_err();
    assert!(matches!(err, InspectorError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn end_to_end_submit_then_refresh() {
    let base = serve(healthy_service()).await;
    let mut inspector = Inspector::new(HttpComparisonClient::new(&base));

    let form = inspector.form_mut();
    form.model_a = "gpt-4".into();
    form.prompt_a = "hello".into();
    form.model_b = "gpt-3.5-turbo".into();
    form.prompt_b = "hello".into();

    let state = inspector.submit().await.clone();
    let SubmitState::Success(result) = state else {
        panic!("expected success, got {:?}", state);
    };
    assert_eq!(result.output_a, "Hi there");
    assert_eq!(result.output_b, "Hello");
    assert_eq!(
        inspector_core::format::similarity_label(result.similarity_score),
        "42.00%"
    );
    assert_eq!(inspector.history().entries().len(), 1);
}
