use crate::client::PartitionClient;
use crate::error::MqxError;
use crate::http::client::HttpClient;
use crate::http::envelope::Envelope;
use crate::http::{HttpTransport, API, TOPICS};
use crate::models::partition::Partition;
use async_trait::async_trait;

#[async_trait]
impl PartitionClient for HttpClient {
    async fn get_partitions(&self, topic: &str) -> Result<Vec<Partition>, MqxError> {
        get_partitions(self, topic).await
    }
}

async fn get_partitions<T: HttpTransport>(
    transport: &T,
    topic: &str,
) -> Result<Vec<Partition>, MqxError> {
    let response = transport.get(&[API, TOPICS, topic, "partitions"]).await?;
    let partitions = Envelope::from_response(response)
        .await?
        .take("partitions")?;
    Ok(partitions)
}
