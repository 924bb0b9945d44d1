pub mod auth;
pub mod config;

pub use auth::{AuthError, AuthResult, AuthService};
pub use config::Settings;
