//! Módulo de base de datos
//!
//! Maneja la conexión y las transacciones con PostgreSQL

pub mod connection;
pub mod transaction;

pub use connection::DatabaseConnection;
pub use transaction::in_transaction;
