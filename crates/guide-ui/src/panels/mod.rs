pub mod navbar;
pub mod footer;
pub mod home;
pub mod heroes;
pub mod attributes;
pub mod roles;
pub mod assistant;
pub mod settings;
