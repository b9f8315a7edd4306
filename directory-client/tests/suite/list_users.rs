#![expect(clippy::expect_used)]

use std::time::Duration;

use admin_directory_client::ClientOptions;
use admin_directory_client::DirectoryClient;
use admin_directory_client::DirectoryError;
use admin_directory_client::DirectorySource;
use admin_directory_client::DirectoryUser;
use pretty_assertions::assert_eq;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;

async fn client_for(server: &MockServer) -> DirectoryClient {
    DirectoryClient::new(ClientOptions {
        url: format!("{}/users", server.uri()),
        timeout: Duration::from_secs(2),
    })
    .expect("client")
}

#[tokio::test]
async fn maps_upstream_users_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[
                {"id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz",
                 "company": {"name": "Romaguera-Crona", "catchPhrase": "x"}},
                {"id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv"}
            ]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let users = client_for(&server)
        .await
        .list_users()
        .await
        .expect("list users");

    assert_eq!(
        users,
        vec![
            DirectoryUser {
                name: "Leanne Graham".to_string(),
                email: "Sincere@april.biz".to_string(),
                company: "Romaguera-Crona".to_string(),
            },
            DirectoryUser {
                name: "Ervin Howell".to_string(),
                email: "Shanna@melissa.tv".to_string(),
                company: String::new(),
            },
        ]
    );
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .list_users()
        .await
        .expect_err("503 must fail");

    match &err {
        DirectoryError::Status { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.summary(), "HTTP 503");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"users\": []}"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .list_users()
        .await
        .expect_err("object body must fail");

    assert!(matches!(err, DirectoryError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_directory_is_a_transport_error() {
    let server = MockServer::start().await;
    let url = format!("{}/users", server.uri());
    drop(server);

    let client = DirectoryClient::new(ClientOptions {
        url,
        timeout: Duration::from_secs(2),
    })
    .expect("client");
    let err = client.list_users().await.expect_err("closed port must fail");

    assert!(matches!(err, DirectoryError::Transport(_)), "got {err:?}");
}
