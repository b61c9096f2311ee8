use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::messages::send_message::SendMessage;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct SendMessageCmd {
    send_message: SendMessage,
}

impl SendMessageCmd {
    pub fn new(topic: String, tag: String, key: String, body: String) -> Self {
        Self {
            send_message: SendMessage {
                topic,
                tag,
                key,
                body,
            },
        }
    }
}

#[async_trait]
impl CliCommand for SendMessageCmd {
    fn explain(&self) -> String {
        format!(
            "send message with tag: {}, key: {} to topic: {}",
            self.send_message.tag, self.send_message.key, self.send_message.topic
        )
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        client
            .send_message(
                &self.send_message.topic,
                &self.send_message.tag,
                &self.send_message.key,
                &self.send_message.body,
            )
            .await
            .with_context(|| {
                format!(
                    "Problem sending message to topic: {}",
                    self.send_message.topic
                )
            })?;

        event!(target: PRINT_TARGET, Level::INFO,
            "Message with tag: {}, key: {} sent to topic: {}",
            self.send_message.tag,
            self.send_message.key,
            self.send_message.topic,
        );

        Ok(())
    }
}
