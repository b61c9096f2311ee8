pub mod get_consumer_groups;
