use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use toolhub_client::config::ClientConfig;
use toolhub_client::{FileSelection, SelectedFile, WorkflowError, WorkflowPhase, create_workflow};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ZIP_BYTES: &[u8] = b"PK\x03\x04known-archive-content";

fn one_file_selection() -> FileSelection {
    FileSelection::new(vec![SelectedFile {
        name: "photo.png".to_string(),
        bytes: Bytes::from_static(b"photo-bytes"),
    }])
}

fn test_config(base_url: String, dir: &TempDir) -> ClientConfig {
    ClientConfig {
        base_url,
        output_dir: dir.path().to_path_buf(),
        download_filename: "processed_images.zip".to_string(),
    }
}

#[tokio::test]
async fn success_saves_archive_under_fixed_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/images/process"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(ZIP_BYTES))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let workflow = create_workflow(&test_config(format!("{}/api/images", server.uri()), &dir));

    let report = workflow.run(one_file_selection()).await.unwrap();

    assert_eq!(report.path, dir.path().join("processed_images.zip"));
    assert_eq!(report.archive_bytes, ZIP_BYTES.len());
    assert_eq!(std::fs::read(&report.path).unwrap(), ZIP_BYTES);
    assert_eq!(workflow.phase(), WorkflowPhase::Idle);
}

#[tokio::test]
async fn server_error_carries_status_and_triggers_no_download() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/images/process"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let workflow = create_workflow(&test_config(format!("{}/api/images", server.uri()), &dir));

    let err = workflow.run(one_file_selection()).await.unwrap_err();
    match err {
        WorkflowError::Server { status } => assert_eq!(status.as_u16(), 500),
        other => panic!("expected Server error, got {other:?}"),
    }

    assert!(!dir.path().join("processed_images.zip").exists());
    assert_eq!(workflow.phase(), WorkflowPhase::Idle);
}

#[tokio::test]
async fn unreachable_backend_fails_with_transport_error() {
    // Port 1 has no listener; the connection is refused before any response.
    let dir = tempfile::tempdir().unwrap();
    let workflow = create_workflow(&test_config(
        "http://127.0.0.1:1/api/images".to_string(),
        &dir,
    ));

    let err = workflow.run(one_file_selection()).await.unwrap_err();
    assert!(matches!(err, WorkflowError::Transport(_)));

    assert!(!dir.path().join("processed_images.zip").exists());
    assert_eq!(workflow.phase(), WorkflowPhase::Idle);
}

#[tokio::test]
async fn empty_response_body_fails_materialization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/images/process"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let workflow = create_workflow(&test_config(format!("{}/api/images", server.uri()), &dir));

    let err = workflow.run(one_file_selection()).await.unwrap_err();
    assert!(matches!(err, WorkflowError::Materialization(_)));

    assert!(!dir.path().join("processed_images.zip").exists());
    assert_eq!(workflow.phase(), WorkflowPhase::Idle);
}

#[tokio::test]
async fn overlapping_run_is_rejected_as_busy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/images/process"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(ZIP_BYTES)
                .set_delay(Duration::from_millis(500)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let workflow = Arc::new(create_workflow(&test_config(
        format!("{}/api/images", server.uri()),
        &dir,
    )));

    let in_flight = workflow.clone();
    let first = tokio::spawn(async move { in_flight.run(one_file_selection()).await });

    // Give the first run time to reach its suspension point.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let second = workflow.run(one_file_selection()).await;
    assert!(matches!(second, Err(WorkflowError::Busy)));

    let report = first.await.unwrap().unwrap();
    assert_eq!(std::fs::read(&report.path).unwrap(), ZIP_BYTES);
    assert_eq!(workflow.phase(), WorkflowPhase::Idle);
}
