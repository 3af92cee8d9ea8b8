pub mod notification;
pub mod repository;
pub mod secret;
pub mod types;
