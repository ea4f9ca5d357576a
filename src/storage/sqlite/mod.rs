mod connection;
mod seen_repository;

pub use connection::SqliteStorage;
pub use seen_repository::SqliteSeenRepository;
