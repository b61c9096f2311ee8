use crate::args::common::ListMode;
use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum ConsumerGroupAction {
    /// List consumer groups of given topic
    ///
    /// Delay of every group is reported by the broker as is.
    ///
    /// Examples
    ///  mqx consumer-group list orders
    #[clap(verbatim_doc_comment, visible_alias = "l")]
    List(ConsumerGroupListArgs),
    /// List committed offsets of given consumer group on given topic
    ///
    /// One row is printed per partition and consumer instance, together with
    /// the offset range of the partition. Offsets behind the minimum offset
    /// mean messages were removed by retention before being consumed.
    ///
    /// Examples
    ///  mqx consumer-group offsets orders billing
    #[clap(verbatim_doc_comment, visible_alias = "o")]
    Offsets(ConsumerGroupOffsetsArgs),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct ConsumerGroupListArgs {
    /// Topic consumed by the groups
    pub(crate) topic: String,
    /// List mode (table or list)
    #[clap(short, long, value_enum, default_value_t = ListMode::Table)]
    pub(crate) list_mode: ListMode,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct ConsumerGroupOffsetsArgs {
    /// Topic consumed by the group
    pub(crate) topic: String,
    /// Name of the consumer group
    pub(crate) group: String,
    /// List mode (table or list)
    #[clap(short, long, value_enum, default_value_t = ListMode::Table)]
    pub(crate) list_mode: ListMode,
}
