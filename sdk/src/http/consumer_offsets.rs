use crate::client::ConsumerOffsetClient;
use crate::error::MqxError;
use crate::http::client::HttpClient;
use crate::http::consumer_groups::CONSUMER_GROUPS;
use crate::http::envelope::Envelope;
use crate::http::{HttpTransport, API, TOPICS};
use crate::models::consumer_offset::ConsumerOffset;
use async_trait::async_trait;

#[async_trait]
impl ConsumerOffsetClient for HttpClient {
    async fn get_consumer_offsets(
        &self,
        topic: &str,
        group: &str,
    ) -> Result<Vec<ConsumerOffset>, MqxError> {
        get_consumer_offsets(self, topic, group).await
    }
}

async fn get_consumer_offsets<T: HttpTransport>(
    transport: &T,
    topic: &str,
    group: &str,
) -> Result<Vec<ConsumerOffset>, MqxError> {
    let response = transport
        .get(&[API, TOPICS, topic, CONSUMER_GROUPS, group, "offsets"])
        .await?;
    let offsets = Envelope::from_response(response).await?.take("offsets")?;
    Ok(offsets)
}
