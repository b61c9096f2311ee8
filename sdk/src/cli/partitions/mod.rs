pub mod get_partitions;
