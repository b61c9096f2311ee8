use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct DeleteTopicCmd {
    topic: String,
}

impl DeleteTopicCmd {
    pub fn new(topic: String) -> Self {
        Self { topic }
    }
}

#[async_trait]
impl CliCommand for DeleteTopicCmd {
    fn explain(&self) -> String {
        format!("delete topic with name: {}", self.topic)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        client
            .delete_topic(&self.topic)
            .await
            .with_context(|| format!("Problem deleting topic with name: {}", self.topic))?;

        event!(target: PRINT_TARGET, Level::INFO, "Topic with name: {} deleted", self.topic);

        Ok(())
    }
}
