mod alert_headers;
mod error;
mod pagination;
