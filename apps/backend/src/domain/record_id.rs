//! Record identifiers.
//!
//! Every stored record is keyed by an opaque 24-character lowercase hex
//! token generated in the application from 12 random bytes. Inbound ids
//! (path parameters, reference lists) must pass the shape check before they
//! are used as storage keys; existence is a separate, per-operation concern.

use std::fmt;

use rand::RngCore;

/// Number of characters in a well-formed record id.
pub const RECORD_ID_LEN: usize = 24;

/// An opaque, fixed-shape token uniquely naming one stored record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh id from 12 random bytes, hex-encoded.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 12];
        rand::rng().fill_bytes(&mut bytes);
        let token: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        Self(token)
    }

    /// Validate the shape of a candidate id: exactly 24 hex characters.
    pub fn is_valid(candidate: &str) -> bool {
        candidate.len() == RECORD_ID_LEN && candidate.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Parse a candidate id, returning `None` when the shape check fails.
    pub fn parse(candidate: &str) -> Option<Self> {
        if Self::is_valid(candidate) {
            Some(Self(candidate.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
