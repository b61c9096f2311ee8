use crate::args::common::ListMode;
use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum TopicAction {
    /// Create topic with given name, number of partitions and retention in days
    ///
    /// Examples
    ///  mqx topic create orders 4 7
    ///  mqx topic create audit 1 30
    #[clap(verbatim_doc_comment, visible_alias = "c")]
    Create(TopicCreateArgs),
    /// Delete topic with given name
    ///
    /// All partitions and messages of the topic are removed as well.
    ///
    /// Examples
    ///  mqx topic delete orders
    #[clap(verbatim_doc_comment, visible_alias = "d")]
    Delete(TopicDeleteArgs),
    /// Update number of partitions and retention in days for topic with given name
    ///
    /// Both values are sent, they replace the current settings of the topic.
    ///
    /// Examples
    ///  mqx topic update orders 4 14
    #[clap(verbatim_doc_comment, visible_alias = "u")]
    Update(TopicUpdateArgs),
    /// Get topic detail for given topic name
    ///
    /// Shows topic settings, its partitions with offset ranges and the consumer groups.
    ///
    /// Examples
    ///  mqx topic get orders
    #[clap(verbatim_doc_comment, visible_alias = "g")]
    Get(TopicGetArgs),
    /// List all topics
    ///
    /// Examples
    ///  mqx topic list
    ///  mqx topic list --list-mode list
    #[clap(verbatim_doc_comment, visible_alias = "l")]
    List(TopicListArgs),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct TopicCreateArgs {
    /// Name of the topic
    pub(crate) topic: String,
    /// Number of partitions inside the topic
    pub(crate) partition_num: u32,
    /// Message retention in days
    pub(crate) retention_days: u32,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct TopicDeleteArgs {
    /// Name of the topic to delete
    pub(crate) topic: String,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct TopicUpdateArgs {
    /// Name of the topic to update
    pub(crate) topic: String,
    /// New number of partitions inside the topic
    pub(crate) partition_num: u32,
    /// New message retention in days
    pub(crate) retention_days: u32,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct TopicGetArgs {
    /// Name of the topic to show
    pub(crate) topic: String,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct TopicListArgs {
    /// List mode (table or list)
    #[clap(short, long, value_enum, default_value_t = ListMode::Table)]
    pub(crate) list_mode: ListMode,
}
