//! Token issuance and validation

mod jwt;

pub use jwt::{AccessToken, Claims, JwtService};
