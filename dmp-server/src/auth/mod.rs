//! Authentication: JWT issuance/validation, password hashing and the
//! request extractor that turns a Bearer token into a [`CurrentUser`].

pub mod extractor;
pub mod jwt;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtError, JwtService};
