//! Domain types and rules shared by the database and API crates.

pub mod error;
pub mod fields;
pub mod inquiry;
pub mod types;
pub mod validation;
pub mod video;
