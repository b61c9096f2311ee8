pub mod consumer_group;
pub mod consumer_offset;
pub mod message;
pub mod partitions;
pub mod topics;

/// How list-like command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutput {
    Table,
    List,
}

impl ListOutput {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListOutput::Table => "table",
            ListOutput::List => "list",
        }
    }
}
