//! Keypair file loading.
//!
//! Keypair files are UTF-8 JSON arrays of integers holding the raw ed25519
//! secret key followed by the public key, the format the Solana CLI writes.

use std::fs;
use std::path::Path;

use solana_sdk::signature::Keypair;

use crate::error::MinterError;

/// Secret plus public key, 32 bytes each.
pub const KEYPAIR_LENGTH: usize = 64;

/// Reads a signing keypair from the JSON byte-array file at `path`.
///
/// Re-reads from disk on every call. A wrong-length array is rejected
/// outright rather than truncated or padded, and the public key half must
/// match the secret key.
pub fn load_keypair(path: impl AsRef<Path>) -> Result<Keypair, MinterError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| MinterError::KeypairFile {
        path: path.into(),
        source,
    })?;
    let bytes: Vec<u8> = serde_json::from_str(&raw).map_err(|source| MinterError::KeypairFormat {
        path: path.into(),
        source,
    })?;
    if bytes.len() != KEYPAIR_LENGTH {
        return Err(MinterError::KeypairLength {
            path: path.into(),
            len: bytes.len(),
        });
    }
    Keypair::try_from(bytes.as_slice()).map_err(|_| MinterError::InvalidKeypair {
        path: path.into(),
    })
}
