use crate::client::MessageClient;
use crate::error::MqxError;
use crate::http::client::HttpClient;
use crate::http::envelope::Envelope;
use crate::http::{HttpTransport, API, TOPICS};
use crate::messages::query_messages::QueryMessages;
use crate::messages::send_message::SendMessage;
use crate::models::message::{Message, MessagesPage};
use async_trait::async_trait;
use tracing::{debug, trace};

#[async_trait]
impl MessageClient for HttpClient {
    async fn send_message(
        &self,
        topic: &str,
        tag: &str,
        key: &str,
        body: &str,
    ) -> Result<(), MqxError> {
        send_message(
            self,
            &SendMessage {
                topic: topic.to_string(),
                tag: tag.to_string(),
                key: key.to_string(),
                body: body.to_string(),
            },
        )
        .await
    }

    async fn query_messages(&self, query: &QueryMessages) -> Result<Vec<Message>, MqxError> {
        let mut envelope = query_messages(self, query).await?;
        envelope.take("messages")
    }

    async fn query_messages_page(&self, query: &QueryMessages) -> Result<MessagesPage, MqxError> {
        let mut envelope = query_messages(self, query).await?;
        let messages: Vec<Message> = envelope.take("messages")?;
        let total = envelope
            .take::<Option<u64>>("total")?
            .unwrap_or(messages.len() as u64);
        Ok(MessagesPage { total, messages })
    }
}

async fn send_message<T: HttpTransport>(
    transport: &T,
    command: &SendMessage,
) -> Result<(), MqxError> {
    let response = transport
        .post(&[API, TOPICS, command.topic.as_str(), "messages"], command)
        .await?;
    Envelope::from_response(response).await?;
    debug!("Sent message to topic: {}", command.topic);
    Ok(())
}

async fn query_messages<T: HttpTransport>(
    transport: &T,
    query: &QueryMessages,
) -> Result<Envelope, MqxError> {
    trace!("Querying messages: {query}");
    let response = transport.get_with_query(&[API, "messages"], query).await?;
    Envelope::from_response(response).await
}
