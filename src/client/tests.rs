//! Transport tests against a mocked backend.

use super::*;
use mockito::Matcher;

fn client_for(url: &str) -> SupportClient {
    let config = ClientConfig::new(Url::parse(url).unwrap());
    SupportClient::new(config).unwrap()
}

#[test]
fn endpoint_appends_the_fixed_path() {
    let client = client_for("http://127.0.0.1:8000");
    assert_eq!(
        client.endpoint().as_str(),
        "http://127.0.0.1:8000/api/chat/support"
    );
}

#[test]
fn endpoint_keeps_a_base_path_prefix() {
    let client = client_for("http://127.0.0.1:8000/staging/");
    assert_eq!(
        client.endpoint().as_str(),
        "http://127.0.0.1:8000/staging/api/chat/support"
    );
}

#[tokio::test]
async fn send_posts_message_and_session_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat/support")
        .match_body(Matcher::Json(serde_json::json!({
            "message": "Where is my ticket?",
            "session_id": "chat_0_fixedtest",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response":"Check your email for the QR code."}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let reply = client
        .send(
            "Where is my ticket?",
            &SessionId::new("chat_0_fixedtest"),
        )
        .await
        .unwrap();

    assert_eq!(reply, "Check your email for the QR code.");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_maps_to_remote_rejection() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/chat/support")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client
        .send("Refund please", &SessionId::new("chat_0_fixedtest"))
        .await
        .unwrap_err();

    match err {
        SendError::RemoteRejection { status } => assert_eq!(status.as_u16(), 500),
        other => panic!("expected RemoteRejection, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_maps_to_transport_failure() {
    // Grab a port, then free it so the connect is refused.
    let server = mockito::Server::new_async().await;
    let url = server.url();
    drop(server);

    let client = client_for(&url);
    let err = client
        .send("Help", &SessionId::new("chat_0_fixedtest"))
        .await
        .unwrap_err();

    assert!(matches!(err, SendError::TransportFailure(_)));
}

#[tokio::test]
async fn unparseable_success_body_maps_to_transport_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/chat/support")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client
        .send("Help", &SessionId::new("chat_0_fixedtest"))
        .await
        .unwrap_err();

    assert!(matches!(err, SendError::TransportFailure(_)));
}

#[test]
fn from_env_requires_a_base_url() {
    // Process env is shared; serialize the tests that touch it.
    let _guard = tests_env_lock().lock().unwrap();
    std::env::remove_var("SUPPORT_BACKEND_URL");
    assert!(matches!(
        ClientConfig::from_env(),
        Err(ConfigError::MissingBaseUrl)
    ));
}

#[test]
fn from_env_reads_url_and_timeout() {
    let _guard = tests_env_lock().lock().unwrap();
    std::env::set_var("SUPPORT_BACKEND_URL", " http://localhost:8000 ");
    std::env::set_var("SUPPORT_REQUEST_TIMEOUT_SECS", "5");
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
    assert_eq!(config.request_timeout, Duration::from_secs(5));
    std::env::remove_var("SUPPORT_BACKEND_URL");
    std::env::remove_var("SUPPORT_REQUEST_TIMEOUT_SECS");
}

fn tests_env_lock() -> &'static std::sync::Mutex<()> {
    static LOCK: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();
    LOCK.get_or_init(|| std::sync::Mutex::new(()))
}
