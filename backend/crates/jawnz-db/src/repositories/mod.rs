pub mod comment_entity_repository;
