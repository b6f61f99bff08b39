// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema migrations
// - Database utilities

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, default_database_path, get_connection, ConnectionPool, PooledConn,
};

pub use migrations::{get_database_stats, initialize_database, DatabaseStats};
