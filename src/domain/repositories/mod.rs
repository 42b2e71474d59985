pub mod event_repository;
pub mod user_repository;
