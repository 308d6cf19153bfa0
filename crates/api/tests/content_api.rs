//! HTTP-level integration tests for file content upload and download.
//!
//! Content requests are scoped by `project_id` and `owning_user_id` query
//! parameters; a file is only reachable under the triple that owns it.

mod common;

use axum::http::{header, StatusCode};
use common::{body_bytes, body_json, get, post_json, put_bytes};
use sqlx::MySqlPool;

async fn seed_file(app: axum::Router, owner: i64, is_directory: bool) -> (i64, i64) {
    let project = body_json(
        post_json(
            app.clone(),
            "/api/v1/projects",
            serde_json::json!({"owning_user_id": owner, "project_name": "Content"}),
        )
        .await,
    )
    .await;
    let project_id = project["project_id"].as_i64().unwrap();

    let file = body_json(
        post_json(
            app,
            "/api/v1/files",
            serde_json::json!({
                "project_id": project_id,
                "file_name": "payload.bin",
                "is_directory": is_directory,
            }),
        )
        .await,
    )
    .await;
    let file_id = file["file_id"].as_i64().unwrap();

    (project_id, file_id)
}

fn content_uri(file_id: i64, project_id: i64, owner: i64) -> String {
    format!("/api/v1/files/{file_id}/content?project_id={project_id}&owning_user_id={owner}")
}

// ---------------------------------------------------------------------------
// Upload / download round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_upload_then_download_round_trips_bytes(pool: MySqlPool) {
    let (app, _blobs) = common::build_test_app(pool);
    let (project_id, file_id) = seed_file(app.clone(), 1, false).await;

    let payload = vec![0u8, 159, 146, 150, 255, 0, 13, 10];
    let response = put_bytes(
        app.clone(),
        &content_uri(file_id, project_id, 1),
        payload.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &content_uri(file_id, project_id, 1)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/octet-stream"
    );
    assert_eq!(body_bytes(response).await.as_ref(), payload.as_slice());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_second_upload_replaces_content(pool: MySqlPool) {
    let (app, _blobs) = common::build_test_app(pool);
    let (project_id, file_id) = seed_file(app.clone(), 1, false).await;

    put_bytes(
        app.clone(),
        &content_uri(file_id, project_id, 1),
        b"first".to_vec(),
    )
    .await;
    put_bytes(
        app.clone(),
        &content_uri(file_id, project_id, 1),
        b"second".to_vec(),
    )
    .await;

    let response = get(app, &content_uri(file_id, project_id, 1)).await;
    assert_eq!(body_bytes(response).await.as_ref(), b"second");
}

// ---------------------------------------------------------------------------
// Missing content and scope mismatches
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_download_before_upload_returns_404(pool: MySqlPool) {
    let (app, _blobs) = common::build_test_app(pool);
    let (project_id, file_id) = seed_file(app.clone(), 1, false).await;

    let response = get(app, &content_uri(file_id, project_id, 1)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_wrong_owner_cannot_reach_content(pool: MySqlPool) {
    let (app, _blobs) = common::build_test_app(pool);
    let (project_id, file_id) = seed_file(app.clone(), 1, false).await;

    put_bytes(
        app.clone(),
        &content_uri(file_id, project_id, 1),
        b"secret".to_vec(),
    )
    .await;

    let response = get(app, &content_uri(file_id, project_id, 2)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_wrong_project_cannot_reach_content(pool: MySqlPool) {
    let (app, _blobs) = common::build_test_app(pool);
    let (project_id, file_id) = seed_file(app.clone(), 1, false).await;

    let other = body_json(
        post_json(
            app.clone(),
            "/api/v1/projects",
            serde_json::json!({"owning_user_id": 1, "project_name": "Other"}),
        )
        .await,
    )
    .await;
    let other_id = other["project_id"].as_i64().unwrap();
    assert_ne!(other_id, project_id);

    let response = put_bytes(
        app,
        &content_uri(file_id, other_id, 1),
        b"misdirected".to_vec(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Directories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_upload_to_directory_returns_400(pool: MySqlPool) {
    let (app, _blobs) = common::build_test_app(pool);
    let (project_id, dir_id) = seed_file(app.clone(), 1, true).await;

    let response = put_bytes(
        app,
        &content_uri(dir_id, project_id, 1),
        b"contents".to_vec(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
