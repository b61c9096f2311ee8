pub(crate) mod common;
pub(crate) mod consumer_group;
pub(crate) mod message;
pub(crate) mod partition;
pub(crate) mod topic;

use crate::args::{
    consumer_group::ConsumerGroupAction, message::MessageAction, partition::PartitionAction,
    topic::TopicAction,
};
use clap::{Args, CommandFactory};
use clap::{Parser, Subcommand};
use clap_complete::{generate, Generator, Shell};
use mqx::http::config::HttpClientConfig;
use std::path::PathBuf;
use std::time::Duration;

static CARGO_BIN_NAME: &str = env!("CARGO_BIN_NAME");

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct MqxConsoleArgs {
    #[clap(flatten, verbatim_doc_comment)]
    pub(crate) mqx: MqxArgs,

    #[clap(flatten, verbatim_doc_comment)]
    pub(crate) cli: CliOptions,

    #[clap(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct MqxArgs {
    /// The URL of the mqx management API
    #[arg(long, env = "MQX_API_URL", default_value = "http://127.0.0.1:8080")]
    pub(crate) api_url: String,

    /// Number of retries for transient transport failures
    #[arg(long, env = "MQX_HTTP_RETRIES", default_value_t = 0)]
    pub(crate) http_retries: u32,

    /// Timeout of a single request in human-readable format like 5s or 1min
    #[arg(long, value_parser = humantime::parse_duration)]
    pub(crate) http_timeout: Option<Duration>,
}

impl From<&MqxArgs> for HttpClientConfig {
    fn from(args: &MqxArgs) -> Self {
        HttpClientConfig {
            api_url: args.api_url.clone(),
            retries: args.http_retries,
            timeout: args.http_timeout,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub(crate) struct CliOptions {
    /// Quiet mode (disabled stdout printing)
    #[clap(short, long, default_value_t = false)]
    pub(crate) quiet: bool,

    /// Debug mode (verbose printing to given file)
    #[clap(short, long)]
    pub(crate) debug: Option<PathBuf>,

    /// Shell completion generator for mqx command
    ///
    /// Option prints shell completion code on standard output for selected shell.
    /// Redirect standard output to file and follow and use selected shell means
    /// to enable completion for mqx command.
    /// Option cannot be combined with other options.
    ///
    /// Example:
    ///  source <(mqx --generate bash)
    #[clap(verbatim_doc_comment)]
    #[clap(long = "generate", value_enum)]
    pub(crate) generator: Option<Shell>,
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Command {
    /// topic operations
    #[command(subcommand, visible_alias = "t")]
    Topic(TopicAction),
    /// partition operations
    #[command(subcommand, visible_alias = "p")]
    Partition(PartitionAction),
    /// consumer group operations
    #[command(subcommand, visible_alias = "g")]
    ConsumerGroup(ConsumerGroupAction),
    /// message operations
    #[command(subcommand, visible_alias = "m")]
    Message(MessageAction),
}

impl MqxConsoleArgs {
    pub(crate) fn generate_completion<G: Generator>(&self, generator: G) {
        generate(
            generator,
            &mut MqxConsoleArgs::command(),
            CARGO_BIN_NAME,
            &mut std::io::stdout(),
        );
    }

    pub(crate) fn print_overview() -> std::io::Result<()> {
        MqxConsoleArgs::command().print_help()?;
        println!();
        println!("Run '{CARGO_BIN_NAME} COMMAND --help' for more information on a command.");
        Ok(())
    }
}
