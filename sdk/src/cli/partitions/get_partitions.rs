use crate::cli::ListOutput;
use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use anyhow::Context;
use async_trait::async_trait;
use comfy_table::Table;
use tracing::{event, Level};

pub struct GetPartitionsCmd {
    topic: String,
    output: ListOutput,
}

impl GetPartitionsCmd {
    pub fn new(topic: String, output: ListOutput) -> Self {
        Self { topic, output }
    }
}

#[async_trait]
impl CliCommand for GetPartitionsCmd {
    fn explain(&self) -> String {
        format!(
            "list partitions of topic: {} in {} mode",
            self.topic,
            self.output.as_str()
        )
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let partitions = client
            .get_partitions(&self.topic)
            .await
            .with_context(|| format!("Problem getting partitions of topic: {}", self.topic))?;

        if partitions.is_empty() {
            event!(target: PRINT_TARGET, Level::INFO, "No partitions found!");
            return Ok(());
        }

        match self.output {
            ListOutput::Table => {
                let mut table = Table::new();

                table.set_header(vec![
                    "Partition",
                    "Min offset",
                    "Max offset",
                    "Messages",
                    "Trimmed",
                ]);

                partitions.iter().for_each(|partition| {
                    table.add_row(vec![
                        format!("{}", partition.partition),
                        format!("{}", partition.min_offset()),
                        format!("{}", partition.max_offset()),
                        format!("{}", partition.stat.total),
                        format!("{}", partition.trimmed()),
                    ]);
                });

                event!(target: PRINT_TARGET, Level::INFO, "{table}");
            }
            ListOutput::List => {
                partitions.iter().for_each(|partition| {
                    event!(target: PRINT_TARGET, Level::INFO,
                        "{}|{}|{}|{}",
                        partition.partition,
                        partition.min_offset(),
                        partition.max_offset(),
                        partition.stat.total
                    );
                });
            }
        }

        Ok(())
    }
}
