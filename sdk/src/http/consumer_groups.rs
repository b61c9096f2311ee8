use crate::client::ConsumerGroupClient;
use crate::error::MqxError;
use crate::http::client::HttpClient;
use crate::http::envelope::Envelope;
use crate::http::{HttpTransport, API, TOPICS};
use crate::models::consumer_group::ConsumerGroup;
use async_trait::async_trait;

pub(crate) const CONSUMER_GROUPS: &str = "consumer-groups";

#[async_trait]
impl ConsumerGroupClient for HttpClient {
    async fn get_consumer_groups(&self, topic: &str) -> Result<Vec<ConsumerGroup>, MqxError> {
        get_consumer_groups(self, topic).await
    }
}

async fn get_consumer_groups<T: HttpTransport>(
    transport: &T,
    topic: &str,
) -> Result<Vec<ConsumerGroup>, MqxError> {
    let response = transport.get(&[API, TOPICS, topic, CONSUMER_GROUPS]).await?;
    let consumer_groups = Envelope::from_response(response)
        .await?
        .take("consumerGroups")?;
    Ok(consumer_groups)
}
