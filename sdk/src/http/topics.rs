use crate::client::TopicClient;
use crate::error::MqxError;
use crate::http::client::HttpClient;
use crate::http::envelope::Envelope;
use crate::http::{HttpTransport, API, TOPICS};
use crate::models::topic::Topic;
use crate::topics::create_topic::CreateTopic;
use crate::topics::update_topic::UpdateTopic;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl TopicClient for HttpClient {
    async fn get_topics(&self) -> Result<Vec<Topic>, MqxError> {
        get_topics(self).await
    }

    async fn create_topic(
        &self,
        topic: &str,
        partition_num: u32,
        retention_days: u32,
    ) -> Result<(), MqxError> {
        create_topic(
            self,
            &CreateTopic {
                topic: topic.to_string(),
                partition_num,
                retention_days,
            },
        )
        .await
    }

    async fn update_topic(
        &self,
        topic: &str,
        partition_num: u32,
        retention_days: u32,
    ) -> Result<(), MqxError> {
        update_topic(
            self,
            &UpdateTopic {
                topic: topic.to_string(),
                partition_num,
                retention_days,
            },
        )
        .await
    }

    async fn delete_topic(&self, topic: &str) -> Result<(), MqxError> {
        delete_topic(self, topic).await
    }
}

async fn get_topics<T: HttpTransport>(transport: &T) -> Result<Vec<Topic>, MqxError> {
    let response = transport.get(&[API, TOPICS]).await?;
    let topics = Envelope::from_response(response).await?.take("topics")?;
    Ok(topics)
}

async fn create_topic<T: HttpTransport>(
    transport: &T,
    command: &CreateTopic,
) -> Result<(), MqxError> {
    let response = transport.post(&[API, TOPICS], command).await?;
    Envelope::from_response(response).await?;
    debug!("Created topic: {command}");
    Ok(())
}

async fn update_topic<T: HttpTransport>(
    transport: &T,
    command: &UpdateTopic,
) -> Result<(), MqxError> {
    let response = transport
        .put(&[API, TOPICS, command.topic.as_str()], command)
        .await?;
    Envelope::from_response(response).await?;
    debug!("Updated topic: {command}");
    Ok(())
}

async fn delete_topic<T: HttpTransport>(transport: &T, topic: &str) -> Result<(), MqxError> {
    let response = transport.delete(&[API, TOPICS, topic]).await?;
    Envelope::from_response(response).await?;
    debug!("Deleted topic: {topic}");
    Ok(())
}
