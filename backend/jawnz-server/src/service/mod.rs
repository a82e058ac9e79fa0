pub mod comment_entity_service;
