use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use anyhow::Context;
use async_trait::async_trait;
use comfy_table::Table;
use tracing::{event, Level};

/// Detail view of a single topic: its settings, partitions and consumer groups.
pub struct GetTopicCmd {
    topic: String,
}

impl GetTopicCmd {
    pub fn new(topic: String) -> Self {
        Self { topic }
    }
}

#[async_trait]
impl CliCommand for GetTopicCmd {
    fn explain(&self) -> String {
        format!("get topic with name: {}", self.topic)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        // Dependent reads are issued one after another.
        let topics = client
            .get_topics()
            .await
            .with_context(|| String::from("Problem getting list of topics"))?;
        let Some(topic) = topics.into_iter().find(|topic| topic.topic == self.topic) else {
            event!(target: PRINT_TARGET, Level::INFO, "Topic with name: {} not found!", self.topic);
            return Ok(());
        };

        let partitions = client
            .get_partitions(&self.topic)
            .await
            .with_context(|| format!("Problem getting partitions of topic: {}", self.topic))?;
        let consumer_groups = client
            .get_consumer_groups(&self.topic)
            .await
            .with_context(|| format!("Problem getting consumer groups of topic: {}", self.topic))?;

        let mut table = Table::new();
        table.set_header(vec!["Property", "Value"]);
        table.add_row(vec!["Topic", topic.topic.as_str()]);
        table.add_row(vec!["Partitions", format!("{}", topic.partition_num).as_str()]);
        table.add_row(vec![
            "Retention (days)",
            format!("{}", topic.retention_days).as_str(),
        ]);
        table.add_row(vec!["Messages", format!("{}", topic.message_total).as_str()]);
        event!(target: PRINT_TARGET, Level::INFO, "{table}");

        let mut table = Table::new();
        table.set_header(vec!["Partition", "Min offset", "Max offset", "Messages"]);
        partitions.iter().for_each(|partition| {
            table.add_row(vec![
                format!("{}", partition.partition),
                format!("{}", partition.min_offset()),
                format!("{}", partition.max_offset()),
                format!("{}", partition.stat.total),
            ]);
        });
        event!(target: PRINT_TARGET, Level::INFO, "{table}");

        if consumer_groups.is_empty() {
            event!(target: PRINT_TARGET, Level::INFO, "No consumer groups found!");
            return Ok(());
        }

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

        Ok(())
    }
}
