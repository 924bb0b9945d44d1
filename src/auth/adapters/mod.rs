pub mod argon;
pub mod jwt;
pub mod memory;

pub use argon::Argon2Hasher;
pub use jwt::JwtIssuer;
pub use memory::InMemoryUserStore;
