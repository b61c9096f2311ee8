mod common;

use axum::http::{Method, StatusCode};
use common::TestServer;
use mqx::client::{ConsumerGroupClient, ConsumerOffsetClient, PartitionClient};
use serde_json::json;

#[tokio::test]
async fn consumer_groups_should_be_listed() {
    let server = TestServer::start().await;
    server.respond_with(
        StatusCode::OK,
        json!({
            "consumerGroups": [
                {"group": "billing", "delay": 17, "clientCount": 2},
                {"group": "shipping", "delay": 0, "clientCount": 0}
            ]
        }),
    );
    let client = server.client();

    let groups = client.get_consumer_groups("orders").await.unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].group, "billing");
    assert_eq!(groups[0].client_count, 2);
    assert_eq!(groups[0].delay, 17);
    assert_eq!(groups[1].client_count, 0);
    let request = server.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/topics/orders/consumer-groups");
}

#[tokio::test]
async fn partitions_should_be_listed() {
    let server = TestServer::start().await;
    server.respond_with(
        StatusCode::OK,
        json!({
            "partitions": [
                {"partition": 0, "stat": {"maxOffset": 99, "minOffset": 0, "total": 100}},
                {"partition": 1, "stat": {"maxOffset": 80, "minOffset": 40, "total": 30}}
            ]
        }),
    );
    let client = server.client();

    let partitions = client.get_partitions("orders").await.unwrap();

    assert_eq!(partitions.len(), 2);
    assert_eq!(partitions[0].partition, 0);
    assert_eq!(partitions[0].trimmed(), 0);
    assert_eq!(partitions[1].min_offset(), 40);
    assert_eq!(partitions[1].max_offset(), 80);
    assert_eq!(partitions[1].trimmed(), 11);
    assert_eq!(server.last_request().path, "/api/topics/orders/partitions");
}

#[tokio::test]
async fn consumer_offsets_should_keep_bounds_per_entry() {
    let server = TestServer::start().await;
    server.respond_with(
        StatusCode::OK,
        json!({
            "offsets": [
                {"partition": 0, "offset": 50, "instanceId": "i-1", "hostname": "node-a", "active": true, "maxOffset": 99, "minOffset": 0},
                {"partition": 1, "offset": 5, "instanceId": "i-2", "hostname": "node-b", "active": false, "maxOffset": 80, "minOffset": 40},
                {"partition": 1, "offset": 60, "instanceId": "i-3", "hostname": "node-c", "active": true, "maxOffset": 80, "minOffset": 40}
            ]
        }),
    );
    let client = server.client();

    let offsets = client
        .get_consumer_offsets("orders", "billing")
        .await
        .unwrap();

    assert_eq!(offsets.len(), 3);
    let pairs = offsets
        .iter()
        .map(|offset| (offset.partition, offset.instance_id.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(pairs, vec![(0, "i-1"), (1, "i-2"), (1, "i-3")]);

    assert_eq!((offsets[0].min_offset, offsets[0].max_offset), (0, 99));
    assert_eq!((offsets[1].min_offset, offsets[1].max_offset), (40, 80));
    assert!(offsets[1].is_behind_retention());
    assert!(!offsets[1].active);
    assert!(offsets[2].is_within_range());
    assert_eq!(offsets[2].lag(), 20);

    let request = server.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(
        request.path,
        "/api/topics/orders/consumer-groups/billing/offsets"
    );
}
