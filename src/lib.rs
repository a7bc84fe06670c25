//! Compact JWT (JWS) signing and verification.
//!
//! This crate provides:
//! - [`sign`] / [`verify`] / [`decode`] over arbitrary JSON payloads
//! - the nine standard algorithms (HS256/384/512, RS256/384/512,
//!   ES256/384/512), a closed set with no `none`
//! - `nbf`/`exp` time claim validation
//! - constant-time HMAC comparison; RSA/ECDSA checked through the
//!   primitive's own verify routine
//!
//! Tokens use the standard JWS compact serialization (three base64url
//! segments joined by `.`) and interoperate with other JWT
//! implementations. Key material is supplied per call; there is no key
//! storage, rotation or revocation here.

mod algorithm;
mod algorithms;
mod claims;
mod encoding;
mod error;
mod header;
mod options;
mod token;

pub use algorithm::{Algorithm, DEFAULT_ALGORITHM};
pub use claims::Claims;
pub use error::{JwtError, JwtResult};
pub use header::{Header, TOKEN_TYPE};
pub use options::{SignOptions, VerifyOptions};
pub use token::{decode, sign, verify};
