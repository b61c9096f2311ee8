mod common;

use axum::http::StatusCode;
use common::TestServer;
use mqx::client::{
    ConsumerGroupClient, ConsumerOffsetClient, MessageClient, PartitionClient, TopicClient,
};
use mqx::error::MqxError;
use mqx::http::client::HttpClient;
use mqx::messages::query_messages::QueryMessages;
use serde_json::json;
use tokio::net::TcpListener;

const OPERATIONS: usize = 10;

/// Invokes every operation of the client once, dropping the payloads.
async fn invoke_all(client: &HttpClient) -> Vec<(&'static str, Result<(), MqxError>)> {
    let query = QueryMessages::new("orders", 0, 1, 20);
    vec![
        ("get_topics", client.get_topics().await.map(|_| ())),
        ("create_topic", client.create_topic("orders", 4, 7).await),
        ("update_topic", client.update_topic("orders", 4, 14).await),
        ("delete_topic", client.delete_topic("orders").await),
        (
            "send_message",
            client.send_message("orders", "T1", "K1", "hello").await,
        ),
        (
            "get_consumer_groups",
            client.get_consumer_groups("orders").await.map(|_| ()),
        ),
        (
            "get_partitions",
            client.get_partitions("orders").await.map(|_| ()),
        ),
        (
            "get_consumer_offsets",
            client
                .get_consumer_offsets("orders", "billing")
                .await
                .map(|_| ()),
        ),
        (
            "query_messages",
            client.query_messages(&query).await.map(|_| ()),
        ),
        (
            "query_messages_page",
            client.query_messages_page(&query).await.map(|_| ()),
        ),
    ]
}

#[tokio::test]
async fn every_operation_should_fail_with_broker_error_despite_payload() {
    let server = TestServer::start().await;
    server.respond_with(
        StatusCode::OK,
        json!({
            "error": "broker unavailable",
            "topics": [{"topic": "orders", "partitionNum": 1, "retentionDays": 1, "messageTotal": 0}],
            "consumerGroups": [],
            "partitions": [],
            "offsets": [],
            "messages": []
        }),
    );
    let client = server.client();

    let results = invoke_all(&client).await;

    assert_eq!(results.len(), OPERATIONS);
    for (operation, result) in results {
        match result {
            Err(MqxError::Backend(message)) => {
                assert_eq!(message, "broker unavailable", "operation: {operation}")
            }
            other => panic!("operation: {operation} returned: {other:?}"),
        }
    }
    assert_eq!(server.requests().len(), OPERATIONS);
}

#[tokio::test]
async fn every_operation_should_fail_with_broker_error_on_any_status() {
    let server = TestServer::start().await;
    server.respond_with(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "database is locked"}),
    );
    let client = server.client();

    for (operation, result) in invoke_all(&client).await {
        let error = result.expect_err(operation);
        assert_eq!(error.to_string(), "database is locked", "operation: {operation}");
    }
}

#[tokio::test]
async fn every_operation_should_succeed_on_empty_payload() {
    let server = TestServer::start().await;
    server.respond_with(
        StatusCode::OK,
        json!({
            "error": "",
            "topics": [],
            "consumerGroups": [],
            "partitions": [],
            "offsets": [],
            "messages": []
        }),
    );
    let client = server.client();

    for (operation, result) in invoke_all(&client).await {
        assert!(result.is_ok(), "operation: {operation} returned: {result:?}");
    }

    assert!(client.get_topics().await.unwrap().is_empty());
    assert!(client.get_consumer_groups("orders").await.unwrap().is_empty());
    assert!(client.get_partitions("orders").await.unwrap().is_empty());
    assert!(client
        .get_consumer_offsets("orders", "billing")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn null_payload_should_be_empty() {
    let server = TestServer::start().await;
    server.respond_with(
        StatusCode::OK,
        json!({"topics": null, "consumerGroups": null, "partitions": null, "offsets": null, "messages": null}),
    );
    let client = server.client();

    for (operation, result) in invoke_all(&client).await {
        assert!(result.is_ok(), "operation: {operation} returned: {result:?}");
    }
    assert!(client.get_topics().await.unwrap().is_empty());
}

#[tokio::test]
async fn non_json_response_should_be_invalid_response() {
    let server = TestServer::start().await;
    server.respond_with_raw(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>");
    let client = server.client();

    for (operation, result) in invoke_all(&client).await {
        match result {
            Err(MqxError::InvalidResponse(status)) => {
                assert_eq!(status, StatusCode::BAD_GATEWAY, "operation: {operation}")
            }
            other => panic!("operation: {operation} returned: {other:?}"),
        }
    }
}

#[tokio::test]
async fn unreachable_broker_should_fail_with_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    let client = HttpClient::new(&format!("http://{address}")).unwrap();

    let error = client.get_topics().await.unwrap_err();

    assert!(!error.is_backend());
    assert!(matches!(error, MqxError::RequestMiddlewareError(_)));
}
