use chirp::{Client, Config, Credentials, Error};
use mockito::Matcher;
use std::io::Write;

fn client_for(server: &mockito::ServerGuard) -> Client {
    let config = Config::new("http".to_string(), server.host_with_port());
    Client::with_config(config).authenticate(Credentials::new(
        "consumer_key".to_string(),
        "consumer_secret".to_string(),
        "access_token".to_string(),
        "access_token_secret".to_string(),
    ))
}

fn temp_photo(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents).expect("write temp file");
    file
}

#[test]
fn test_update_with_media_sends_multipart() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/statuses/update_with_media.json")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        // One file part named "photo" carrying the file bytes, one text
        // part carrying the status caption.
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("(?s)name=\"photo\"".to_string()),
            Matcher::Regex("(?s)filename=".to_string()),
            Matcher::Regex("(?s)fake image bytes".to_string()),
            Matcher::Regex("(?s)name=\"status\"\r\n\r\ncaption".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"id": 99, "text": "caption"}"#)
        .create();

    let file = temp_photo(b"fake image bytes");
    let client = client_for(&server);

    let status = client
        .update_with_media("caption", file.path().to_str().unwrap())
        .expect("update_with_media failed");

    assert_eq!(status.id, 99);
    mock.assert();
}

#[test]
fn test_update_profile_image_uses_image_field() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/account/update_profile_image.json")
        .match_body(Matcher::Regex("(?s)name=\"image\"".to_string()))
        .with_status(200)
        .with_body(r#"{"id": 1, "screen_name": "me"}"#)
        .create();

    let file = temp_photo(b"new avatar");
    let client = client_for(&server);

    let user = client
        .update_profile_image(file.path().to_str().unwrap())
        .expect("update_profile_image failed");

    assert_eq!(user.screen_name, "me");
    mock.assert();
}

#[test]
fn test_missing_file_fails_before_network() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/statuses/update_with_media.json")
        .expect(0)
        .create();

    let client = client_for(&server);
    let err = client
        .update_with_media("caption", "/nonexistent/photo.png")
        .unwrap_err();

    assert!(matches!(err, Error::Upload(_)));
    mock.assert();
}

#[test]
fn test_upload_error_envelope() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/statuses/update_with_media.json")
        .with_status(403)
        .with_body(r#"{"request": "/statuses/update_with_media.json", "error": "photo too large"}"#)
        .create();

    let file = temp_photo(b"way too big, allegedly");
    let client = client_for(&server);

    let err = client
        .update_with_media("caption", file.path().to_str().unwrap())
        .unwrap_err();

    match err {
        Error::Service { status, message, .. } => {
            assert_eq!(status, 403);
            assert!(message.contains("photo too large"));
        }
        other => panic!("expected Error::Service, got {:?}", other),
    }
}
