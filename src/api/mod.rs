pub mod auth;
pub mod error;
pub mod home;
pub mod server;
pub mod templates;
