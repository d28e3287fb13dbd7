//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` DTO for inserts or full replacements
//! - For list entities, an update DTO (all `Option` fields) for patches

pub mod contact;
pub mod portfolio;
pub mod profile;
pub mod service;
pub mod setting;
pub mod video_file;
