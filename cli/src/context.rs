use std::{path::PathBuf, rc::Rc, sync::Arc};

use anyhow::Result;
use log::info;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, pubkey::Pubkey, signature::read_keypair_file,
};

use crate::{
    drift_client::{DriftClient, DriftEnv},
    error::CliError,
    provider::TransactionProvider,
    vault_client::VaultClient,
    wallet::{is_ledger_uri, KeypairWallet, LedgerWallet, Wallet},
};

/// Everything needed to stand up the clients for a command
#[derive(Debug, Clone)]
pub struct ContextConfig {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    /// Keypair path or `usb://ledger` URI
    pub keypair: String,
    pub env: DriftEnv,
    pub vault_program_id: Pubkey,
}

pub struct CommandContext {
    pub drift_client: Rc<DriftClient>,
    pub vault_client: VaultClient,
}

impl CommandContext {
    pub async fn build(config: &ContextConfig, need_to_sign: bool) -> Result<Self> {
        let wallet = resolve_wallet(&config.keypair, need_to_sign)?;

        let rpc_client = Arc::new(RpcClient::new_with_commitment(
            config.rpc_url.clone(),
            config.commitment,
        ));

        let mut drift_client = DriftClient::new(
            rpc_client.clone(),
            wallet.clone(),
            config.env,
            config.commitment,
        );
        if need_to_sign {
            info!("Signing wallet address: {}", drift_client.authority());
        }
        drift_client.subscribe().await?;
        let drift_client = Rc::new(drift_client);

        let provider = TransactionProvider::new(rpc_client, wallet);
        let vault_client = VaultClient::new(
            drift_client.clone(),
            config.vault_program_id,
            provider,
            true,
        );

        Ok(Self {
            drift_client,
            vault_client,
        })
    }
}

/// Picks the signer for a command. Commands that never sign get a throwaway keypair
/// and never touch the keypair file or a device.
pub fn resolve_wallet(
    keypair_source: &str,
    need_to_sign: bool,
) -> Result<Rc<dyn Wallet>, CliError> {
    if !need_to_sign {
        return Ok(Rc::new(KeypairWallet::ephemeral()));
    }

    if is_ledger_uri(keypair_source) {
        return Ok(Rc::new(LedgerWallet::from_uri(keypair_source, true)?));
    }

    let keypair =
        read_keypair_file(expand_tilde(keypair_source)).map_err(|e| CliError::InvalidKeypair {
            path: keypair_source.to_string(),
            reason: e.to_string(),
        })?;

    Ok(Rc::new(KeypairWallet::new(keypair)))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };
    match (rest, home::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
