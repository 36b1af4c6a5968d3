//! Stable hashing of serializable payloads.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::GsmError;
use crate::serde::to_canonical_json_bytes;

/// Computes a stable hexadecimal SHA-256 hash of the canonical JSON encoding.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, GsmError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}

