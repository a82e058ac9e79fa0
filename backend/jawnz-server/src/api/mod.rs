pub mod alert_headers;
pub mod comment_entities;
pub mod error;
pub mod jawnzback_kafka;
pub mod pagination;
