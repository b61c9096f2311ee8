mod common;

use axum::http::{Method, StatusCode};
use common::TestServer;
use mqx::client::MessageClient;
use mqx::messages::query_messages::QueryMessages;
use serde_json::json;

#[tokio::test]
async fn message_should_be_sent() {
    let server = TestServer::start().await;
    server.respond_with(StatusCode::OK, json!({"messageId": "0a1b"}));
    let client = server.client();

    client
        .send_message("orders", "T1", "K1", "hello")
        .await
        .unwrap();

    let request = server.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/api/topics/orders/messages");
    assert_eq!(
        request.body,
        Some(json!({"tag": "T1", "key": "K1", "body": "hello"}))
    );
}

#[tokio::test]
async fn query_should_send_page_without_missing_filters() {
    let server = TestServer::start().await;
    server.respond_with(StatusCode::OK, json!({"messages": [], "total": 0}));
    let client = server.client();

    let messages = client
        .query_messages(&QueryMessages::new("orders", 0, 1, 20))
        .await
        .unwrap();

    assert!(messages.is_empty());
    let request = server.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/messages");
    assert_eq!(
        request.query.as_deref(),
        Some("pageNo=1&pageSize=20&topic=orders&partition=0")
    );
}

#[tokio::test]
async fn query_should_send_combined_filters() {
    let server = TestServer::start().await;
    let client = server.client();

    let query = QueryMessages::new("orders", 3, 2, 50)
        .with_message_id("0a1b")
        .with_tag("T1");
    client.query_messages(&query).await.unwrap();

    assert_eq!(
        server.last_request().query.as_deref(),
        Some("pageNo=2&pageSize=50&topic=orders&partition=3&messageId=0a1b&tag=T1")
    );
}

#[tokio::test]
async fn queried_messages_should_be_returned_with_total() {
    let server = TestServer::start().await;
    server.respond_with(
        StatusCode::OK,
        json!({
            "messages": [
                {"messageId": "m-1", "tag": "T1", "key": "K1", "body": "hello", "bornTime": "2024-03-01T10:15:30Z"},
                {"messageId": "m-2", "tag": "T1", "key": "K2", "body": "world", "bornTime": "2024-03-01T10:15:31Z"}
            ],
            "total": 42
        }),
    );
    let client = server.client();
    let query = QueryMessages::new("orders", 0, 1, 2).with_tag("T1");

    let page = client.query_messages_page(&query).await.unwrap();
    assert_eq!(page.total, 42);
    assert_eq!(page.messages.len(), 2);
    assert_eq!(page.messages[0].message_id, "m-1");
    assert_eq!(page.messages[1].body, "world");

    let messages = client.query_messages(&query).await.unwrap();
    assert_eq!(messages, page.messages);
}

#[tokio::test]
async fn page_without_total_should_count_returned_messages() {
    let server = TestServer::start().await;
    server.respond_with(
        StatusCode::OK,
        json!({
            "messages": [
                {"messageId": "m-1", "tag": "", "key": "", "body": "hello", "bornTime": "2024-03-01T10:15:30Z"}
            ]
        }),
    );
    let client = server.client();

    let page = client
        .query_messages_page(&QueryMessages::new("orders", 0, 1, 20))
        .await
        .unwrap();

    assert_eq!(page.total, 1);
}
