//! Badge mint workflow.

use std::path::Path;

use log::info;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    sysvar,
    transaction::Transaction,
};
use solana_system_interface::program as system_program;
use spl_associated_token_account::get_associated_token_address;

use crate::error::MinterError;
use crate::keypair::load_keypair;

/// Deployment keypair of the on-chain badge program, at its fixed location
/// relative to the program's build output.
pub const PROGRAM_KEYPAIR_PATH: &str = "dist/program/mint-keypair.json";

/// Owns the RPC connection and the badge program's identity, and submits
/// mint transactions. Construction is the only setup step; there is no
/// further state to track between calls.
pub struct Minter {
    client: RpcClient,
    program_id: Pubkey,
}

impl Minter {
    /// Builds a minter whose program identity comes from the deployment
    /// keypair at [`PROGRAM_KEYPAIR_PATH`].
    pub fn new(client: RpcClient) -> Result<Self, MinterError> {
        Self::with_program_keypair(client, PROGRAM_KEYPAIR_PATH)
    }

    /// Same as [`Minter::new`] but with the deployment keypair path supplied
    /// by the caller.
    pub fn with_program_keypair(
        client: RpcClient,
        path: impl AsRef<Path>,
    ) -> Result<Self, MinterError> {
        let program_keypair = load_keypair(path)?;
        let program_id = program_keypair.pubkey();

        info!("===> Create Minter");
        info!("URL : {}", client.url());
        info!("Program : {program_id}");

        Ok(Self { client, program_id })
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    /// Mints one badge into `user`'s associated token account and returns
    /// the signature once the cluster confirms the transaction.
    ///
    /// A fresh random keypair identifies the new mint account on every call;
    /// no local uniqueness check is performed. Any RPC, signature, or
    /// on-chain rejection propagates unchanged.
    pub async fn mint(
        &self,
        authority: &Keypair,
        user: &Keypair,
    ) -> Result<Signature, MinterError> {
        info!("===> Setup");
        info!("Auth : {}", authority.pubkey());
        info!("User : {}", user.pubkey());

        info!("===> Create Mint Account");
        let mint = Keypair::new();
        info!("Mint Account : {}", mint.pubkey());

        info!("===> Get Token Address");
        let token_address = get_associated_token_address(&user.pubkey(), &mint.pubkey());
        info!("Token Address : {token_address}");

        info!("===> Create Transaction Instruction");
        let instruction = mint_badge_instruction(
            &self.program_id,
            &mint.pubkey(),
            &token_address,
            &user.pubkey(),
        );

        info!("===> Send Transaction");
        let blockhash = self.client.get_latest_blockhash().await?;
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&user.pubkey()),
            &[user, &mint],
            blockhash,
        );
        let signature = self.client.send_and_confirm_transaction(&transaction).await?;
        info!("Signature : {signature}");

        Ok(signature)
    }
}

/// Builds the mint instruction: no data payload, accounts interpreted
/// positionally by the badge program. The seven entries must stay in this
/// exact order.
pub fn mint_badge_instruction(
    program_id: &Pubkey,
    mint: &Pubkey,
    token_address: &Pubkey,
    mint_authority: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            // Mint account
            AccountMeta::new(*mint, true),
            // Token account
            AccountMeta::new(*token_address, false),
            // Mint authority
            AccountMeta::new_readonly(*mint_authority, true),
            // Rent sysvar
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            // System program
            AccountMeta::new_readonly(system_program::id(), false),
            // SPL Token program
            AccountMeta::new_readonly(spl_token::id(), false),
            // SPL Associated Token Account program
            AccountMeta::new_readonly(spl_associated_token_account::id(), false),
        ],
        data: vec![],
    }
}
