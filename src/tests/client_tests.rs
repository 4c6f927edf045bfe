use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::client::api_client::error_message;

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let client = ApiClient::new("http://localhost:5000/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:5000");
}

#[test]
fn test_error_message_prefers_server_message() {
    let body = r#"{"message": "Ticket not found"}"#;
    assert_eq!(
        error_message(StatusCode::NOT_FOUND, body),
        "Ticket not found"
    );
}

#[test]
fn test_error_message_falls_back_to_status() {
    assert_eq!(
        error_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>"),
        "HTTP error: 500 Internal Server Error"
    );
    assert_eq!(
        error_message(StatusCode::BAD_REQUEST, r#"{"detail": "no message field"}"#),
        "HTTP error: 400 Bad Request"
    );
}
