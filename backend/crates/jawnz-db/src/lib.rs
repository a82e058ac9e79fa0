pub mod connection;
pub mod error;
pub mod page;
pub mod repositories;


pub use connection::{open_pool, run_migrations};
pub use error::{DbError, Result};
pub use page::{Page, PageRequest, Sort, SortDirection, SortField};
pub use repositories::comment_entity_repository::CommentEntityRepository;
