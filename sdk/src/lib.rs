#[cfg(feature = "mqx-cli")]
pub mod cli;
#[cfg(feature = "mqx-cli")]
pub mod cli_command;
pub mod client;
pub mod error;
pub mod http;
pub mod messages;
pub mod models;
pub mod topics;
