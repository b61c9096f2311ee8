pub mod get_consumer_offsets;
