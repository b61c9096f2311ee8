use crate::args::common::ListMode;
use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum PartitionAction {
    /// List partitions of given topic with their offset ranges
    ///
    /// Examples
    ///  mqx partition list orders
    #[clap(verbatim_doc_comment, visible_alias = "l")]
    List(PartitionListArgs),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct PartitionListArgs {
    /// Topic to list partitions for
    pub(crate) topic: String,
    /// List mode (table or list)
    #[clap(short, long, value_enum, default_value_t = ListMode::Table)]
    pub(crate) list_mode: ListMode,
}
