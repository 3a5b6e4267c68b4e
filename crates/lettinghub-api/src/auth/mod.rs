//! Bearer-token validation.
//!
//! Tokens are issued by the external user service; this module only
//! verifies the signature and expiry, then trusts the asserted role.

pub mod claims;
pub mod decoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
