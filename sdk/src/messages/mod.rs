pub mod query_messages;
pub mod send_message;
