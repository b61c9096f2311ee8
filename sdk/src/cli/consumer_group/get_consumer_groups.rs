use crate::cli::ListOutput;
use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use anyhow::Context;
use async_trait::async_trait;
use comfy_table::Table;
use tracing::{event, Level};

pub struct GetConsumerGroupsCmd {
    topic: String,
    output: ListOutput,
}

impl GetConsumerGroupsCmd {
    pub fn new(topic: String, output: ListOutput) -> Self {
        Self { topic, output }
    }
}

#[async_trait]
impl CliCommand for GetConsumerGroupsCmd {
    fn explain(&self) -> String {
        format!(
            "list consumer groups for topic: {} in {} mode",
            self.topic,
            self.output.as_str()
        )
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let consumer_groups = client
            .get_consumer_groups(&self.topic)
            .await
            .with_context(|| format!("Problem getting consumer groups for topic: {}", self.topic))?;

        if consumer_groups.is_empty() {
            event!(target: PRINT_TARGET, Level::INFO, "No consumer groups found!");
            return Ok(());
        }

        match self.output {
            ListOutput::Table => {
                let mut table = Table::new();

                table.set_header(vec!["Consumer group", "Clients", "Delay"]);

                consumer_groups.iter().for_each(|group| {
                    table.add_row(vec![
                        group.group.clone(),
                        format!("{}", group.client_count),
                        format!("{}", group.delay),
                    ]);
                });

                event!(target: PRINT_TARGET, Level::INFO, "{table}");
            }
            ListOutput::List => {
                consumer_groups.iter().for_each(|group| {
                    event!(target: PRINT_TARGET, Level::INFO,
                        "{}|{}|{}",
                        group.group,
                        group.client_count,
                        group.delay
                    );
                });
            }
        }

        Ok(())
    }
}
