//! Infrastructure Layer
//!
//! Store implementations: PostgreSQL for deployments, in-memory for tests.

pub mod memory;
pub mod postgres;

pub use memory::{MemoryCredentialStore, MemorySessionStore};
pub use postgres::{PgCredentialStore, PgSessionStore};
