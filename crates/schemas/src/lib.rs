//! Data-transfer shapes for AuthHub.
//!
//! This crate defines the wire-level types other subsystems integrate
//! against. It deliberately contains no behavior: token issuance and
//! validation live elsewhere.

pub mod tokens;

pub use tokens::{TokenPayload, Tokens};
