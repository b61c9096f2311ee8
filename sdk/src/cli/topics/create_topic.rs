use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::topics::create_topic::CreateTopic;
use anyhow::Context;
use async_trait::async_trait;
use core::fmt;
use tracing::{event, Level};

pub struct CreateTopicCmd {
    create_topic: CreateTopic,
}

impl CreateTopicCmd {
    pub fn new(topic: String, partition_num: u32, retention_days: u32) -> Self {
        Self {
            create_topic: CreateTopic {
                topic,
                partition_num,
                retention_days,
            },
        }
    }
}

#[async_trait]
impl CliCommand for CreateTopicCmd {
    fn explain(&self) -> String {
        format!("{}", self)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        client
            .create_topic(
                &self.create_topic.topic,
                self.create_topic.partition_num,
                self.create_topic.retention_days,
            )
            .await
            .with_context(|| {
                format!(
                    "Problem creating topic (name: {}, partitions: {}, retention days: {})",
                    self.create_topic.topic,
                    self.create_topic.partition_num,
                    self.create_topic.retention_days
                )
            })?;

        event!(target: PRINT_TARGET, Level::INFO,
            "Topic with name: {}, partitions: {}, retention days: {} created",
            self.create_topic.topic,
            self.create_topic.partition_num,
            self.create_topic.retention_days,
        );

        Ok(())
    }
}

impl fmt::Display for CreateTopicCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> std::fmt::Result {
        let topic = &self.create_topic.topic;
        let partition_num = self.create_topic.partition_num;
        let retention_days = self.create_topic.retention_days;

        write!(
            f,
            "create topic with name: {topic}, partitions: {partition_num}, retention days: {retention_days}",
        )
    }
}
