//! Mints one badge on devnet for the configured user keypair.

use badge_minter_client::{load_keypair, Minter, MinterError};
use env_logger::Env;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;

const DEVNET_URL: &str = "https://api.devnet.solana.com";
const AUTHORITY_KEYPAIR_PATH: &str = "configs/keypairs/u1.json";
const USER_KEYPAIR_PATH: &str = "configs/keypairs/u2.json";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), MinterError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let authority = load_keypair(AUTHORITY_KEYPAIR_PATH)?;
    let user = load_keypair(USER_KEYPAIR_PATH)?;

    let client =
        RpcClient::new_with_commitment(DEVNET_URL.to_string(), CommitmentConfig::confirmed());
    let minter = Minter::new(client)?;
    minter.mint(&authority, &user).await?;

    Ok(())
}
