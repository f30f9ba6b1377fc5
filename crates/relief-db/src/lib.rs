pub mod config;
pub mod database;
pub mod document_repository;
pub mod user_repository;

pub use config::DatabaseConfig;
pub use database::Database;
pub use document_repository::DocumentRepository;
pub use user_repository::UserRepository;
