use crate::cli::ListOutput;
use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use anyhow::Context;
use async_trait::async_trait;
use comfy_table::Table;
use tracing::{event, Level};

pub struct GetTopicsCmd {
    output: ListOutput,
}

impl GetTopicsCmd {
    pub fn new(output: ListOutput) -> Self {
        GetTopicsCmd { output }
    }
}

impl Default for GetTopicsCmd {
    fn default() -> Self {
        GetTopicsCmd {
            output: ListOutput::Table,
        }
    }
}

#[async_trait]
impl CliCommand for GetTopicsCmd {
    fn explain(&self) -> String {
        format!("list topics in {} mode", self.output.as_str())
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let topics = client
            .get_topics()
            .await
            .with_context(|| String::from("Problem getting list of topics"))?;

        if topics.is_empty() {
            event!(target: PRINT_TARGET, Level::INFO, "No topics found!");
            return Ok(());
        }

        match self.output {
            ListOutput::Table => {
                let mut table = Table::new();

                table.set_header(vec!["Topic", "Partitions", "Retention (days)", "Messages"]);

                topics.iter().for_each(|topic| {
                    table.add_row(vec![
                        topic.topic.clone(),
                        format!("{}", topic.partition_num),
                        format!("{}", topic.retention_days),
                        format!("{}", topic.message_total),
                    ]);
                });

                event!(target: PRINT_TARGET, Level::INFO, "{table}");
            }
            ListOutput::List => {
                topics.iter().for_each(|topic| {
                    event!(target: PRINT_TARGET, Level::INFO,
                        "{}|{}|{}|{}",
                        topic.topic,
                        topic.partition_num,
                        topic.retention_days,
                        topic.message_total
                    );
                });
            }
        }

        Ok(())
    }
}
