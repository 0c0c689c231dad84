use std::fs::File;
use std::io::Write;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{setup_test_client, with_auth, HASH};
use plagtracker_client::{Document, PlagtrackerError, MAX_DOCUMENT_SIZE};

fn form_pairs(body: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

#[tokio::test]
async fn test_submit_file() {
    let mock_server = MockServer::start().await;

    with_auth(Mock::given(method("POST")).and(path("/api/v1/file")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "OK",
            "data": HASH
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("essay.txt");
    std::fs::write(&file_path, "hello world").unwrap();

    let client = setup_test_client(&mock_server.uri());
    let response = client.texts().submit_file(&file_path).await.unwrap();
    assert_eq!(response.data().map(String::as_str), Some(HASH));

    let requests = mock_server
        .received_requests()
        .await
        .expect("failed to read recorded requests");
    assert_eq!(requests.len(), 1);
    assert_eq!(
        form_pairs(&requests[0].body),
        vec![
            ("file[name]".to_string(), "essay.txt".to_string()),
            ("file[data]".to_string(), "aGVsbG8gd29ybGQ=".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_submit_document_from_memory() {
    let mock_server = MockServer::start().await;

    with_auth(Mock::given(method("POST")).and(path("/api/v1/file")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "OK",
            "data": HASH
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Bytes whose base64 form contains '+', '/' and '='.
    let contents = vec![0xfb, 0xff, 0xbf, 0x00];
    let document = Document::new("scan.rtf", contents).unwrap();

    let client = setup_test_client(&mock_server.uri());
    client.texts().submit_document(&document).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        form_pairs(&requests[0].body),
        vec![
            ("file[name]".to_string(), "scan.rtf".to_string()),
            ("file[data]".to_string(), "+/+/AA==".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_disallowed_extension_rejected_before_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("essay.pdf");
    std::fs::write(&file_path, "%PDF-1.4").unwrap();

    let client = setup_test_client(&mock_server.uri());
    match client.texts().submit_file(&file_path).await {
        Err(PlagtrackerError::UnsupportedFileType { extension }) => assert_eq!(extension, "pdf"),
        other => panic!("Expected UnsupportedFileType, got {other:?}"),
    }
}

#[tokio::test]
async fn test_oversized_file_rejected_before_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("huge.txt");
    let file = File::create(&file_path).unwrap();
    file.set_len(MAX_DOCUMENT_SIZE + 1).unwrap();

    let client = setup_test_client(&mock_server.uri());
    match client.texts().submit_file(&file_path).await {
        Err(PlagtrackerError::FileTooLarge { size, max }) => {
            assert_eq!(size, MAX_DOCUMENT_SIZE + 1);
            assert_eq!(max, MAX_DOCUMENT_SIZE);
        }
        other => panic!("Expected FileTooLarge, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("missing.docx");

    match Document::from_path(&file_path).await {
        Err(PlagtrackerError::Io { path, .. }) => assert_eq!(path, file_path),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_from_path_uses_base_name() {
    let mut file = tempfile::Builder::new()
        .prefix("report")
        .suffix(".HTML")
        .tempfile()
        .unwrap();
    file.write_all(b"<p>text</p>").unwrap();

    let document = Document::from_path(file.path()).await.unwrap();
    let expected = file.path().file_name().unwrap().to_str().unwrap();

    assert_eq!(document.file_name(), expected);
    assert_eq!(document.contents(), b"<p>text</p>");
}
