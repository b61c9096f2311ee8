mod args;
mod error;
mod logging;

use crate::args::{
    consumer_group::ConsumerGroupAction, message::MessageAction, partition::PartitionAction,
    topic::TopicAction, Command, MqxConsoleArgs,
};
use crate::error::MqxCmdError;
use crate::logging::Logging;
use clap::Parser;
use mqx::cli::{
    consumer_group::get_consumer_groups::GetConsumerGroupsCmd,
    consumer_offset::get_consumer_offsets::GetConsumerOffsetsCmd,
    message::{query_messages::QueryMessagesCmd, send_message::SendMessageCmd},
    partitions::get_partitions::GetPartitionsCmd,
    topics::{
        create_topic::CreateTopicCmd, delete_topic::DeleteTopicCmd, get_topic::GetTopicCmd,
        get_topics::GetTopicsCmd, update_topic::UpdateTopicCmd,
    },
};
use mqx::cli_command::{CliCommand, PRINT_TARGET};
use mqx::http::client::HttpClient;
use mqx::http::config::HttpClientConfig;
use mqx::messages::query_messages::QueryMessages;
use std::sync::Arc;
use tracing::{event, Level};

fn get_command(command: &Command) -> Box<dyn CliCommand> {
    match command {
        Command::Topic(command) => match command {
            TopicAction::Create(args) => Box::new(CreateTopicCmd::new(
                args.topic.clone(),
                args.partition_num,
                args.retention_days,
            )),
            TopicAction::Delete(args) => Box::new(DeleteTopicCmd::new(args.topic.clone())),
            TopicAction::Update(args) => Box::new(UpdateTopicCmd::new(
                args.topic.clone(),
                args.partition_num,
                args.retention_days,
            )),
            TopicAction::Get(args) => Box::new(GetTopicCmd::new(args.topic.clone())),
            TopicAction::List(args) => Box::new(GetTopicsCmd::new(args.list_mode.into())),
        },
        Command::Partition(command) => match command {
            PartitionAction::List(args) => Box::new(GetPartitionsCmd::new(
                args.topic.clone(),
                args.list_mode.into(),
            )),
        },
        Command::ConsumerGroup(command) => match command {
            ConsumerGroupAction::List(args) => Box::new(GetConsumerGroupsCmd::new(
                args.topic.clone(),
                args.list_mode.into(),
            )),
            ConsumerGroupAction::Offsets(args) => Box::new(GetConsumerOffsetsCmd::new(
                args.topic.clone(),
                args.group.clone(),
                args.list_mode.into(),
            )),
        },
        Command::Message(command) => match command {
            MessageAction::Send(args) => Box::new(SendMessageCmd::new(
                args.topic.clone(),
                args.tag.clone(),
                args.key.clone(),
                args.body.clone(),
            )),
            MessageAction::Query(args) => {
                let mut query =
                    QueryMessages::new(&args.topic, args.partition, args.page_no, args.page_size);
                query.message_id = args.message_id.clone();
                query.tag = args.tag.clone();
                Box::new(QueryMessagesCmd::new(query, args.list_mode.into()))
            }
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), MqxCmdError> {
    let args = MqxConsoleArgs::parse();

    if let Some(generator) = args.cli.generator {
        args.generate_completion(generator);
        return Ok(());
    }

    let Some(command) = &args.command else {
        MqxConsoleArgs::print_overview()?;
        return Ok(());
    };

    let mut logging = Logging::new();
    logging.init(args.cli.quiet, &args.cli.debug)?;

    let mut command = get_command(command);
    let client = HttpClient::create(Arc::new(HttpClientConfig::from(&args.mqx)))?;

    if command.use_tracing() {
        event!(target: PRINT_TARGET, Level::INFO, "Executing {}", command.explain());
    }
    command.execute_cmd(&client).await?;

    Ok(())
}
