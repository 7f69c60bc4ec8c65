//! Authentication token transfer shapes.
//!
//! This module contains the types exchanged with clients during an
//! authentication flow. Field names are part of the wire contract and
//! must stay stable.

use serde::{Deserialize, Serialize};

/// The pair of bearer tokens returned by an authentication exchange.
///
/// Both values are opaque to clients; their claims are only visible after
/// validation decodes them into a [`TokenPayload`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Decoded claims of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Subject identifier.
    pub id: String,
    pub username: String,
    /// Role encoded as its integer code.
    pub role_value: i32,
    /// Expiry timestamp, seconds since the Unix epoch.
    pub exp: i64,
}
