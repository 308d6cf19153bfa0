//! Shared domain types and helpers with zero internal dependencies, used by
//! the database, storage, and API layers.

pub mod error;
pub mod pagination;
pub mod types;
