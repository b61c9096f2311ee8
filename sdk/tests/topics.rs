mod common;

use axum::http::{Method, StatusCode};
use common::TestServer;
use mqx::client::TopicClient;
use mqx::models::topic::Topic;
use serde_json::json;

#[tokio::test]
async fn topics_should_be_listed() {
    let server = TestServer::start().await;
    server.respond_with(
        StatusCode::OK,
        json!({
            "topics": [
                {"topic": "orders", "partitionNum": 4, "retentionDays": 7, "messageTotal": 120},
                {"topic": "audit", "partitionNum": 1, "retentionDays": 30, "messageTotal": 0}
            ],
            "total": 2
        }),
    );
    let client = server.client();

    let topics = client.get_topics().await.unwrap();

    assert_eq!(
        topics,
        vec![
            Topic {
                topic: "orders".to_string(),
                partition_num: 4,
                retention_days: 7,
                message_total: 120,
            },
            Topic {
                topic: "audit".to_string(),
                partition_num: 1,
                retention_days: 30,
                message_total: 0,
            },
        ]
    );
    let request = server.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/topics");
    assert!(request.query.is_none());
}

#[tokio::test]
async fn topic_should_be_created_and_updated() {
    let server = TestServer::start().await;
    server.respond_with(StatusCode::OK, json!({"message": "Topic created successfully"}));
    let client = server.client();

    client.create_topic("orders", 4, 7).await.unwrap();
    client.update_topic("orders", 4, 14).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 2);

    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/api/topics");
    assert_eq!(
        requests[0].body,
        Some(json!({"topic": "orders", "partitionNum": 4, "retentionDays": 7}))
    );

    assert_eq!(requests[1].method, Method::PUT);
    assert_eq!(requests[1].path, "/api/topics/orders");
    assert_eq!(
        requests[1].body,
        Some(json!({"partitionNum": 4, "retentionDays": 14}))
    );
}

#[tokio::test]
async fn topic_should_be_deleted() {
    let server = TestServer::start().await;
    server.respond_with(StatusCode::OK, json!({"message": "Topic deleted successfully"}));
    let client = server.client();

    client.delete_topic("orders").await.unwrap();

    let request = server.last_request();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(request.path, "/api/topics/orders");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn existing_topic_should_fail_with_broker_message() {
    let server = TestServer::start().await;
    server.respond_with(StatusCode::OK, json!({"error": "topic orders already exists"}));
    let client = server.client();

    let error = client.create_topic("orders", 4, 7).await.unwrap_err();

    assert!(error.is_backend());
    assert_eq!(error.to_string(), "topic orders already exists");
}

#[tokio::test]
async fn topic_name_should_be_sent_as_single_path_segment() {
    let server = TestServer::start().await;
    let client = server.client();

    client.delete_topic("team/orders v2").await.unwrap();

    assert_eq!(server.last_request().path, "/api/topics/team%2Forders%20v2");
}
