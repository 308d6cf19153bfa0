//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A fields snapshot struct plus a change-tracking entity wrapper
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - A sort-field enum constraining ORDER BY identifiers to an allow-list

pub mod project;
pub mod project_file;
