use crate::args::common::ListMode;
use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum MessageAction {
    /// Send a message to given topic
    ///
    /// Examples
    ///  mqx message send orders hello
    ///  mqx message send --tag T1 --key K1 orders "long message with spaces"
    #[clap(verbatim_doc_comment, visible_alias = "s")]
    Send(SendMessageArgs),
    /// Query one page of messages from given topic partition
    ///
    /// Message ID and tag filters can be combined, a filter which is not
    /// given puts no constraint on that field.
    ///
    /// Examples
    ///  mqx message query orders 0
    ///  mqx message query --page-no 2 --page-size 50 orders 1
    ///  mqx message query --tag T1 orders 0
    ///  mqx message query --message-id 0a1b --tag T1 orders 0
    #[clap(verbatim_doc_comment, visible_alias = "q")]
    Query(QueryMessagesArgs),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct SendMessageArgs {
    /// Topic to which the message is sent
    pub(crate) topic: String,
    /// Message body
    pub(crate) body: String,
    /// Message tag
    #[clap(short, long, default_value = "")]
    pub(crate) tag: String,
    /// Message key
    #[clap(short, long, default_value = "")]
    pub(crate) key: String,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct QueryMessagesArgs {
    /// Topic from which messages are queried
    pub(crate) topic: String,
    /// Partition from which messages are queried
    pub(crate) partition: u32,
    /// Page number, starting from 1
    #[clap(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) page_no: u32,
    /// Number of messages on a page
    #[clap(short = 's', long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) page_size: u32,
    /// Only return the message with given ID
    #[clap(short, long)]
    pub(crate) message_id: Option<String>,
    /// Only return messages with given tag
    #[clap(short, long)]
    pub(crate) tag: Option<String>,
    /// List mode (table or list)
    #[clap(short, long, value_enum, default_value_t = ListMode::Table)]
    pub(crate) list_mode: ListMode,
}
