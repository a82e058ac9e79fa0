pub mod jawnzback_kafka;
pub mod publish_query;
