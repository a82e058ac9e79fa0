#![allow(dead_code)]

mod test_db;

pub use test_db::{create_test_pool, sample_entity};
