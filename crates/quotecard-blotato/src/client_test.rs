use super::*;

fn test_client(base_url: &str) -> BlotatoClient {
    BlotatoClient::with_base_url("test-key", "acct-1", 30, base_url)
        .expect("client construction should not fail")
}

#[test]
fn posts_url_appends_to_versioned_base() {
    let client = test_client("https://backend.blotato.com/v2");
    assert_eq!(
        client.posts_url.as_str(),
        "https://backend.blotato.com/v2/posts"
    );
}

#[test]
fn posts_url_tolerates_trailing_slash() {
    let client = test_client("https://backend.blotato.com/v2/");
    assert_eq!(
        client.posts_url.as_str(),
        "https://backend.blotato.com/v2/posts"
    );
}

#[test]
fn with_base_url_rejects_garbage() {
    let result = BlotatoClient::with_base_url("k", "a", 30, "not a url");
    assert!(
        matches!(result, Err(BlotatoError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn attach_media_always_declines_local_files() {
    let client = test_client("https://backend.blotato.com/v2");

    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("card.jpg");
    std::fs::write(&image, vec![0u8; 128]).unwrap();
    assert!(client.attach_media(&image).is_none());

    // A path that does not exist still degrades to no media.
    assert!(client.attach_media(Path::new("/no/such/file.jpg")).is_none());
}

#[test]
fn auth_error_message_never_contains_the_key() {
    let err = BlotatoError::Auth {
        account_id: "acct-1".to_owned(),
        api_key_len: "super-secret-key".len(),
        body: "{\"error\":\"unauthorized\"}".to_owned(),
    };
    let message = err.to_string();
    assert!(!message.contains("super-secret-key"), "message: {message}");
    assert!(message.contains("acct-1"));
    assert!(message.contains("16"), "should report the key length");
    assert!(message.contains("unauthorized"));
}
