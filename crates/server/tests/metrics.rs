//! Counter checks live in their own test binary: the counters are process
//! globals and other router tests would move them concurrently.

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::observability::{
    init_metrics, LOOKUPS_TOTAL, LOOKUP_MISSES_TOTAL, MESSAGES_CREATED_TOTAL, STORAGE_ERRORS_TOTAL,
};
use server::{routes, AppState};

fn app_for(path: &Path) -> Router {
    routes::build_router(AppState::from_file(path), CorsLayer::very_permissive())
}

async fn status_of(app: Router, req: Request<Body>) -> anyhow::Result<StatusCode> {
    Ok(app.oneshot(req).await?.status())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn create(content: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/messages")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::json!({ "content": content }).to_string()))
        .unwrap()
}

struct Counters {
    created: u64,
    lookups: u64,
    misses: u64,
    storage_errors: u64,
}

fn snapshot() -> Counters {
    Counters {
        created: MESSAGES_CREATED_TOTAL.get(),
        lookups: LOOKUPS_TOTAL.get(),
        misses: LOOKUP_MISSES_TOTAL.get(),
        storage_errors: STORAGE_ERRORS_TOTAL.get(),
    }
}

#[tokio::test]
async fn handlers_move_the_expected_counters() -> anyhow::Result<()> {
    init_metrics();
    let path = std::env::temp_dir().join(format!("metrics_messages_{}.json", Uuid::new_v4()));
    tokio::fs::write(&path, r#"{"5":{"id":"5","content":"a"}}"#).await?;
    let missing = std::env::temp_dir().join(format!("metrics_missing_{}.json", Uuid::new_v4()));

    let before = snapshot();

    assert_eq!(status_of(app_for(&path), create("counted")).await?, StatusCode::CREATED);
    assert_eq!(status_of(app_for(&path), get("/messages/5")).await?, StatusCode::OK);
    assert_eq!(status_of(app_for(&path), get("/messages/not-there")).await?, StatusCode::NOT_FOUND);
    assert_eq!(status_of(app_for(&missing), get("/messages")).await?, StatusCode::INTERNAL_SERVER_ERROR);
    // rejected bodies touch no counter
    let bad = Request::builder()
        .method("POST")
        .uri("/messages")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"content":1}"#))
        .unwrap();
    assert_eq!(status_of(app_for(&path), bad).await?, StatusCode::BAD_REQUEST);

    let after = snapshot();
    assert_eq!(after.created - before.created, 1);
    assert_eq!(after.lookups - before.lookups, 2);
    assert_eq!(after.misses - before.misses, 1);
    assert_eq!(after.storage_errors - before.storage_errors, 1);

    // the same values are exposed through /metrics
    let res = app_for(&path).oneshot(get("/metrics")).await?;
    let text = String::from_utf8(axum::body::to_bytes(res.into_body(), usize::MAX).await?.to_vec())?;
    assert!(text.contains(&format!("message_store_messages_created_total {}", after.created)));
    assert!(text.contains(&format!("message_store_lookup_misses_total {}", after.misses)));

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}
