//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async persistence
//! methods that accept `&MySqlPool` as the first argument. Domain data stays
//! in the entity types; repositories own all SQL.

pub mod project_file_repo;
pub mod project_repo;

pub use project_file_repo::ProjectFileRepo;
pub use project_repo::ProjectRepo;
