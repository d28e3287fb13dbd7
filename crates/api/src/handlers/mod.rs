pub mod auth;
pub mod contacts;
pub mod inquiry;
pub mod portfolio;
pub mod profile;
pub mod services;
pub mod settings;
pub mod videos;
