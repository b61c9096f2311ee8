use crate::cli::ListOutput;
use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::models::consumer_offset::ConsumerOffset;
use anyhow::Context;
use async_trait::async_trait;
use comfy_table::Table;
use tracing::{event, Level};

pub struct GetConsumerOffsetsCmd {
    topic: String,
    group: String,
    output: ListOutput,
}

impl GetConsumerOffsetsCmd {
    pub fn new(topic: String, group: String, output: ListOutput) -> Self {
        Self {
            topic,
            group,
            output,
        }
    }
}

fn status(offset: &ConsumerOffset) -> &'static str {
    if offset.is_behind_retention() {
        "behind retention"
    } else if offset.is_within_range() {
        "ok"
    } else {
        "ahead of max"
    }
}

#[async_trait]
impl CliCommand for GetConsumerOffsetsCmd {
    fn explain(&self) -> String {
        format!(
            "list offsets of consumer group: {} for topic: {} in {} mode",
            self.group,
            self.topic,
            self.output.as_str()
        )
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let offsets = client
            .get_consumer_offsets(&self.topic, &self.group)
            .await
            .with_context(|| {
                format!(
                    "Problem getting offsets of consumer group: {} for topic: {}",
                    self.group, self.topic
                )
            })?;

        if offsets.is_empty() {
            event!(target: PRINT_TARGET, Level::INFO, "No consumer offsets found!");
            return Ok(());
        }

        match self.output {
            ListOutput::Table => {
                let mut table = Table::new();

                table.set_header(vec![
                    "Partition",
                    "Offset",
                    "Min offset",
                    "Max offset",
                    "Lag",
                    "Instance ID",
                    "Hostname",
                    "Active",
                    "Status",
                ]);

                offsets.iter().for_each(|offset| {
                    table.add_row(vec![
                        format!("{}", offset.partition),
                        format!("{}", offset.offset),
                        format!("{}", offset.min_offset),
                        format!("{}", offset.max_offset),
                        format!("{}", offset.lag()),
                        offset.instance_id.clone(),
                        offset.hostname.clone(),
                        format!("{}", offset.active),
                        status(offset).to_string(),
                    ]);
                });

                event!(target: PRINT_TARGET, Level::INFO, "{table}");
            }
            ListOutput::List => {
                offsets.iter().for_each(|offset| {
                    event!(target: PRINT_TARGET, Level::INFO,
                        "{}|{}|{}|{}|{}|{}|{}|{}",
                        offset.partition,
                        offset.offset,
                        offset.min_offset,
                        offset.max_offset,
                        offset.instance_id,
                        offset.hostname,
                        offset.active,
                        status(offset)
                    );
                });
            }
        }

        Ok(())
    }
}
