pub mod comment_entities;
