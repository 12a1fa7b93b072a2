//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed adapters using Diesel.
//!
//! Adapters convert between domain types and storage rows. They contain no
//! business logic.

pub mod persistence;
