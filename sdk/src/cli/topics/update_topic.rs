use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::topics::update_topic::UpdateTopic;
use anyhow::Context;
use async_trait::async_trait;
use core::fmt;
use tracing::{event, Level};

pub struct UpdateTopicCmd {
    update_topic: UpdateTopic,
}

impl UpdateTopicCmd {
    pub fn new(topic: String, partition_num: u32, retention_days: u32) -> Self {
        Self {
            update_topic: UpdateTopic {
                topic,
                partition_num,
                retention_days,
            },
        }
    }
}

#[async_trait]
impl CliCommand for UpdateTopicCmd {
    fn explain(&self) -> String {
        format!("{}", self)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        client
            .update_topic(
                &self.update_topic.topic,
                self.update_topic.partition_num,
                self.update_topic.retention_days,
            )
            .await
            .with_context(|| {
                format!(
                    "Problem updating topic with name: {}",
                    self.update_topic.topic
                )
            })?;

        event!(target: PRINT_TARGET, Level::INFO,
            "Topic with name: {} updated with partitions: {}, retention days: {}",
            self.update_topic.topic,
            self.update_topic.partition_num,
            self.update_topic.retention_days,
        );

        Ok(())
    }
}

impl fmt::Display for UpdateTopicCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> std::fmt::Result {
        let topic = &self.update_topic.topic;
        let partition_num = self.update_topic.partition_num;
        let retention_days = self.update_topic.retention_days;

        write!(
            f,
            "update topic with name: {topic}, partitions: {partition_num}, retention days: {retention_days}",
        )
    }
}
