use std::{fmt, rc::Rc, sync::Arc};

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use drift_vaults_core::constants::{DRIFT_PROGRAM_ID, DRIFT_STATE_SEED};
use log::{debug, info};
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};

use crate::{provider::send_config, wallet::Wallet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DriftEnv {
    MainnetBeta,
    Devnet,
}

impl fmt::Display for DriftEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MainnetBeta => write!(f, "mainnet-beta"),
            Self::Devnet => write!(f, "devnet"),
        }
    }
}

/// Client for the drift program the vaults trade through
pub struct DriftClient {
    rpc_client: Arc<RpcClient>,
    wallet: Rc<dyn Wallet>,
    env: DriftEnv,
    program_id: Pubkey,
    send_config: RpcSendTransactionConfig,
    subscribed_slot: Option<u64>,
}

impl DriftClient {
    pub fn new(
        rpc_client: Arc<RpcClient>,
        wallet: Rc<dyn Wallet>,
        env: DriftEnv,
        commitment: CommitmentConfig,
    ) -> Self {
        Self {
            rpc_client,
            wallet,
            env,
            program_id: DRIFT_PROGRAM_ID,
            send_config: send_config(commitment),
            subscribed_slot: None,
        }
    }

    pub fn state_address(&self) -> Pubkey {
        Pubkey::find_program_address(&[DRIFT_STATE_SEED], &self.program_id).0
    }

    /// Loads the drift state account. Commands must not use the client before this succeeds.
    pub async fn subscribe(&mut self) -> Result<()> {
        let state = self.state_address();
        debug!(
            "Subscribing to drift ({}) state {} with {:?}",
            self.env, state, self.send_config
        );

        let response = self
            .rpc_client
            .get_account_with_commitment(&state, self.rpc_client.commitment())
            .await?;

        if response.value.is_none() {
            return Err(anyhow!("Drift state account {} not found", state));
        }

        self.subscribed_slot = Some(response.context.slot);
        info!("Subscribed to drift state at slot {}", response.context.slot);
        Ok(())
    }

    pub const fn is_subscribed(&self) -> bool {
        self.subscribed_slot.is_some()
    }

    pub const fn subscribed_slot(&self) -> Option<u64> {
        self.subscribed_slot
    }

    pub fn authority(&self) -> Pubkey {
        self.wallet.pubkey()
    }

    pub const fn env(&self) -> DriftEnv {
        self.env
    }

    pub const fn program_id(&self) -> &Pubkey {
        &self.program_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::KeypairWallet;

    #[test]
    fn test_new_client_is_not_subscribed() {
        let rpc_client = Arc::new(RpcClient::new("http://localhost:8899".to_string()));
        let wallet: Rc<dyn Wallet> = Rc::new(KeypairWallet::ephemeral());
        let client = DriftClient::new(
            rpc_client,
            wallet.clone(),
            DriftEnv::Devnet,
            CommitmentConfig::confirmed(),
        );

        assert!(!client.is_subscribed());
        assert_eq!(client.authority(), wallet.pubkey());
        assert_eq!(
            client.state_address(),
            Pubkey::find_program_address(&[b"drift_state"], &DRIFT_PROGRAM_ID).0
        );
        assert_eq!(client.env().to_string(), "devnet");
    }
}
