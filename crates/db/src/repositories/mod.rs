//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod contact_repo;
pub mod portfolio_repo;
pub mod profile_repo;
pub mod service_repo;
pub mod setting_repo;
pub mod video_file_repo;

pub use contact_repo::ContactRepo;
pub use portfolio_repo::PortfolioRepo;
pub use profile_repo::ProfileRepo;
pub use service_repo::ServiceRepo;
pub use setting_repo::SettingRepo;
pub use video_file_repo::VideoFileRepo;
