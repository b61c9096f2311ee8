use crate::error::MqxError;
use crate::messages::query_messages::QueryMessages;
use crate::models::consumer_group::ConsumerGroup;
use crate::models::consumer_offset::ConsumerOffset;
use crate::models::message::{Message, MessagesPage};
use crate::models::partition::Partition;
use crate::models::topic::Topic;
use async_trait::async_trait;
use std::fmt::Debug;

/// The client trait which is the main interface to the broker management API.
/// It consists of multiple modules, each of them responsible for a different part of the API.
/// Every operation is a single, independent round trip: nothing is cached between calls.
#[async_trait]
pub trait Client:
    TopicClient
    + PartitionClient
    + ConsumerGroupClient
    + ConsumerOffsetClient
    + MessageClient
    + Debug
    + Sync
    + Send
{
}

/// This trait defines the methods to interact with the topic module.
#[async_trait]
pub trait TopicClient {
    /// Get the snapshot of all the topics.
    async fn get_topics(&self) -> Result<Vec<Topic>, MqxError>;
    /// Create a new topic with the given name, number of partitions and retention.
    ///
    /// Whether an existing name is rejected is decided by the broker.
    async fn create_topic(
        &self,
        topic: &str,
        partition_num: u32,
        retention_days: u32,
    ) -> Result<(), MqxError>;
    /// Replace the number of partitions and retention of the topic.
    async fn update_topic(
        &self,
        topic: &str,
        partition_num: u32,
        retention_days: u32,
    ) -> Result<(), MqxError>;
    /// Delete the topic together with its partitions and messages.
    async fn delete_topic(&self, topic: &str) -> Result<(), MqxError>;
}

/// This trait defines the methods to interact with the partition module.
#[async_trait]
pub trait PartitionClient {
    /// Get the partitions of the topic with their offset windows.
    async fn get_partitions(&self, topic: &str) -> Result<Vec<Partition>, MqxError>;
}

/// This trait defines the methods to interact with the consumer group module.
#[async_trait]
pub trait ConsumerGroupClient {
    /// Get the consumer groups consuming the topic.
    async fn get_consumer_groups(&self, topic: &str) -> Result<Vec<ConsumerGroup>, MqxError>;
}

/// This trait defines the methods to interact with the consumer offset module.
#[async_trait]
pub trait ConsumerOffsetClient {
    /// Get the committed offsets of the consumer group, one entry per partition and instance.
    async fn get_consumer_offsets(
        &self,
        topic: &str,
        group: &str,
    ) -> Result<Vec<ConsumerOffset>, MqxError>;
}

/// This trait defines the methods to interact with the messaging module.
#[async_trait]
pub trait MessageClient {
    /// Send a single message to the topic. The broker-assigned identifier is not returned.
    async fn send_message(
        &self,
        topic: &str,
        tag: &str,
        key: &str,
        body: &str,
    ) -> Result<(), MqxError>;
    /// Query a page of messages from the topic partition.
    async fn query_messages(&self, query: &QueryMessages) -> Result<Vec<Message>, MqxError>;
    /// Query a page of messages along with the number of messages matching the query.
    async fn query_messages_page(&self, query: &QueryMessages) -> Result<MessagesPage, MqxError>;
}
