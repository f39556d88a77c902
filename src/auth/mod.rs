//! Authentication module
//!
//! Supports: Basic, Bearer, and the legacy AMS scheme (Base64 `user:pass`
//! credentials sent under a `Bearer` label). The upstream service predates
//! standard Basic handling and expects the legacy shape verbatim, so the
//! scheme is modeled explicitly rather than corrected in transit.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
