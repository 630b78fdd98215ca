pub mod auth;

pub use auth::{optional_jwt_auth, AuthUser};
