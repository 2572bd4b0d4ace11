//! Database connection management and repository implementations.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::MySqlUserRepository;
