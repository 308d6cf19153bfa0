//! Request handlers for the project and file resources.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `depot_db` (and the
//! object store in `depot_storage`) and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod file_content;
pub mod project;
pub mod project_file;
