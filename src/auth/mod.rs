pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{AuthError, AuthResult};
pub use ports::{CredentialHasher, TokenIssuer, UserStore};
pub use service::AuthService;
