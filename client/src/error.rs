//! Badge minter client errors

use std::path::PathBuf;

use thiserror::Error;

use crate::keypair::KEYPAIR_LENGTH;

/// Errors surfaced by the badge minter. None of them are retried or
/// translated; every failure terminates the workflow.
#[derive(Debug, Error)]
pub enum MinterError {
    /// Keypair file could not be read
    #[error("failed to read keypair file {}: {source}", .path.display())]
    KeypairFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Keypair file is not a JSON byte array
    #[error("keypair file {} is not a JSON byte array: {source}", .path.display())]
    KeypairFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Keypair file holds the wrong number of bytes
    #[error(
        "keypair file {} holds {len} bytes, expected {KEYPAIR_LENGTH}",
        .path.display()
    )]
    KeypairLength { path: PathBuf, len: usize },
    /// Secret and public key halves disagree
    #[error("keypair file {} holds an inconsistent keypair", .path.display())]
    InvalidKeypair { path: PathBuf },
    /// RPC failure: blockhash fetch, submission, or confirmation
    #[error("rpc error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),
}
