use std::{rc::Rc, sync::Arc};

use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::wallet::Wallet;

/// Connection, signer and send options shared by every client a command builds.
/// Passed explicitly to whoever needs it.
pub struct TransactionProvider {
    rpc_client: Arc<RpcClient>,
    wallet: Rc<dyn Wallet>,
    send_config: RpcSendTransactionConfig,
}

impl TransactionProvider {
    pub fn new(rpc_client: Arc<RpcClient>, wallet: Rc<dyn Wallet>) -> Self {
        let send_config = send_config(rpc_client.commitment());
        Self {
            rpc_client,
            wallet,
            send_config,
        }
    }

    pub fn rpc_client(&self) -> &RpcClient {
        &self.rpc_client
    }

    pub fn wallet(&self) -> &dyn Wallet {
        self.wallet.as_ref()
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.rpc_client.commitment()
    }

    pub const fn send_config(&self) -> &RpcSendTransactionConfig {
        &self.send_config
    }
}

/// Preflight always runs, at the same commitment the connection reads with
pub fn send_config(commitment: CommitmentConfig) -> RpcSendTransactionConfig {
    RpcSendTransactionConfig {
        skip_preflight: false,
        preflight_commitment: Some(commitment.commitment),
        ..RpcSendTransactionConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::commitment_config::CommitmentLevel;

    use super::*;
    use crate::wallet::KeypairWallet;

    #[test]
    fn test_send_config_uses_connection_commitment() {
        let rpc_client = Arc::new(RpcClient::new_with_commitment(
            "http://localhost:8899".to_string(),
            CommitmentConfig::finalized(),
        ));
        let wallet: Rc<dyn Wallet> = Rc::new(KeypairWallet::ephemeral());
        let provider = TransactionProvider::new(rpc_client, wallet.clone());

        assert!(!provider.send_config().skip_preflight);
        assert_eq!(
            provider.send_config().preflight_commitment,
            Some(CommitmentLevel::Finalized)
        );
        assert_eq!(provider.commitment(), CommitmentConfig::finalized());
        assert_eq!(provider.wallet().pubkey(), wallet.pubkey());
    }
}
