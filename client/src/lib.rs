//! Badge Minter Client
//!
//! This crate mints a token "badge" through the deployed MySol Badges
//! on-chain program: it loads signing keypairs from JSON files, derives the
//! user's associated token account for a freshly generated mint, and submits
//! one transaction to a devnet cluster for confirmation.

pub mod error;
pub mod keypair;
pub mod minter;

// Re-export commonly used items for convenience
pub use error::MinterError;
pub use keypair::{load_keypair, KEYPAIR_LENGTH};
pub use minter::{mint_badge_instruction, Minter, PROGRAM_KEYPAIR_PATH};

/// Convenience re-exports from solana crates
pub use solana_sdk::instruction::{AccountMeta, Instruction};
pub use solana_sdk::pubkey::Pubkey;
