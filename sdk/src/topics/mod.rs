pub mod create_topic;
pub mod update_topic;
