use std::rc::Rc;

use anyhow::{anyhow, Result};
use drift_vaults_core::{
    constants::DISCRIMINATOR_LEN,
    discriminators::AccountDeserialize,
    name::encode_name,
    pda::get_vault_address,
    vault::Vault,
    vault_depositor::VaultDepositor,
};
use log::warn;
use solana_account_decoder::UiAccountEncoding;
use solana_client::{
    rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig},
    rpc_filter::{Memcmp, MemcmpEncodedBytes, RpcFilterType},
};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{account::Account, pubkey::Pubkey};

use crate::{drift_client::DriftClient, provider::TransactionProvider};

/// Client for the vault program
pub struct VaultClient {
    drift_client: Rc<DriftClient>,
    program_id: Pubkey,
    provider: TransactionProvider,
    cli_mode: bool,
}

impl VaultClient {
    pub fn new(
        drift_client: Rc<DriftClient>,
        program_id: Pubkey,
        provider: TransactionProvider,
        cli_mode: bool,
    ) -> Self {
        Self {
            drift_client,
            program_id,
            provider,
            cli_mode,
        }
    }

    pub const fn provider(&self) -> &TransactionProvider {
        &self.provider
    }

    pub const fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    fn rpc_client(&self) -> Result<&RpcClient> {
        if !self.drift_client.is_subscribed() {
            return Err(anyhow!("Drift client is not subscribed"));
        }
        Ok(self.provider.rpc_client())
    }

    pub async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>> {
        let account = self
            .rpc_client()?
            .get_account_with_commitment(address, self.provider.commitment())
            .await?;

        Ok(account.value)
    }

    async fn get_record<T: AccountDeserialize>(&self, address: &Pubkey) -> Result<T> {
        let account = self
            .get_account(address)
            .await?
            .ok_or_else(|| anyhow!("{} account {} not found", T::ACCOUNT_NAME, address))?;

        if account.owner != self.program_id {
            return Err(anyhow!(
                "{} account {} is owned by {}, expected {}",
                T::ACCOUNT_NAME,
                address,
                account.owner,
                self.program_id
            ));
        }

        Ok(T::try_from_account_data(&account.data)?)
    }

    pub async fn get_vault(&self, vault: &Pubkey) -> Result<Vault> {
        self.get_record(vault).await
    }

    pub async fn get_vault_depositor(&self, vault_depositor: &Pubkey) -> Result<VaultDepositor> {
        self.get_record(vault_depositor).await
    }

    pub fn get_vault_address_from_name(&self, name: &str) -> Result<Pubkey> {
        Ok(get_vault_address(&self.program_id, &encode_name(name)?)?)
    }

    pub async fn get_all_vaults(&self) -> Result<Vec<(Pubkey, Vault)>> {
        self.get_all_records(vec![]).await
    }

    pub async fn get_all_vault_depositors(
        &self,
        vault: &Pubkey,
    ) -> Result<Vec<(Pubkey, VaultDepositor)>> {
        // `vault` is the first field after the discriminator
        let vault_filter = RpcFilterType::Memcmp(Memcmp::new(
            DISCRIMINATOR_LEN,                                  // offset
            MemcmpEncodedBytes::Bytes(vault.to_bytes().into()), // encoded bytes
        ));

        self.get_all_records(vec![vault_filter]).await
    }

    async fn get_all_records<T: AccountDeserialize>(
        &self,
        mut filters: Vec<RpcFilterType>,
    ) -> Result<Vec<(Pubkey, T)>> {
        let discriminator_filter = RpcFilterType::Memcmp(Memcmp::new(
            0,
            MemcmpEncodedBytes::Bytes(T::discriminator().to_vec()),
        ));
        filters.insert(0, discriminator_filter);

        let config = RpcProgramAccountsConfig {
            filters: Some(filters),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                data_slice: None,
                commitment: Some(self.provider.commitment()),
                min_context_slot: None,
            },
            with_context: Some(false),
        };

        let results = self
            .rpc_client()?
            .get_program_accounts_with_config(&self.program_id, config)
            .await?;

        let records = results
            .iter()
            .filter_map(
                |(address, account)| match T::try_from_account_data(&account.data) {
                    Ok(record) => Some((*address, record)),
                    Err(e) => {
                        if self.cli_mode {
                            warn!("Skipping {} {}: {}", T::ACCOUNT_NAME, address, e);
                        }
                        None
                    }
                },
            )
            .collect();

        Ok(records)
    }
}
