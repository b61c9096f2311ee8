use crate::cli::ListOutput;
use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::messages::query_messages::QueryMessages;
use anyhow::Context;
use async_trait::async_trait;
use comfy_table::Table;
use tracing::{event, Level};

pub struct QueryMessagesCmd {
    query: QueryMessages,
    output: ListOutput,
}

impl QueryMessagesCmd {
    pub fn new(query: QueryMessages, output: ListOutput) -> Self {
        Self { query, output }
    }
}

#[async_trait]
impl CliCommand for QueryMessagesCmd {
    fn explain(&self) -> String {
        let mut filters = Vec::new();
        if let Some(message_id) = &self.query.message_id {
            filters.push(format!("message ID: {message_id}"));
        }
        if let Some(tag) = &self.query.tag {
            filters.push(format!("tag: {tag}"));
        }
        let filters = match filters.is_empty() {
            true => String::new(),
            false => format!(" filtered by {}", filters.join(", ")),
        };

        format!(
            "query page {} of {} messages from partition {} of topic: {}{filters} in {} mode",
            self.query.page_no,
            self.query.page_size,
            self.query.partition,
            self.query.topic,
            self.output.as_str()
        )
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let page = client
            .query_messages_page(&self.query)
            .await
            .with_context(|| format!("Problem querying messages of topic: {}", self.query.topic))?;

        if page.messages.is_empty() {
            event!(target: PRINT_TARGET, Level::INFO, "No messages found!");
            return Ok(());
        }

        match self.output {
            ListOutput::Table => {
                let mut table = Table::new();

                table.set_header(vec!["Message ID", "Born time", "Tag", "Key", "Body"]);

                page.messages.iter().for_each(|message| {
                    table.add_row(vec![
                        message.message_id.clone(),
                        message.born_time.to_rfc3339(),
                        message.tag.clone(),
                        message.key.clone(),
                        message.body.clone(),
                    ]);
                });

                event!(target: PRINT_TARGET, Level::INFO, "{table}");
                event!(target: PRINT_TARGET, Level::INFO,
                    "Showing {} of {} messages",
                    page.messages.len(),
                    page.total
                );
            }
            ListOutput::List => {
                page.messages.iter().for_each(|message| {
                    event!(target: PRINT_TARGET, Level::INFO,
                        "{}|{}|{}|{}|{}",
                        message.message_id,
                        message.born_time.to_rfc3339(),
                        message.tag,
                        message.key,
                        message.body
                    );
                });
            }
        }

        Ok(())
    }
}
