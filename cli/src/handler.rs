use std::str::FromStr;

use anyhow::{anyhow, Result};
use drift_vaults_core::{
    name::encode_name,
    pda::{get_vault_address, get_vault_depositor_address},
};
use log::info;
use solana_sdk::{
    commitment_config::CommitmentConfig, native_token::lamports_to_sol, pubkey::Pubkey,
};

use crate::{
    args::{Args, ProgramCommand},
    context::{CommandContext, ContextConfig},
    printer::{print_vault, print_vault_depositor},
    wallet::sign_offchain_message,
};

pub struct CliHandler {
    pub config: ContextConfig,
    pub verbose: bool,
}

impl CliHandler {
    pub fn from_args(args: &Args) -> Result<Self> {
        let commitment = CommitmentConfig::from_str(&args.commitment)?;
        let vault_program_id = Pubkey::from_str(&args.vault_program_id)?;

        Ok(Self {
            config: ContextConfig {
                rpc_url: args.url.clone(),
                commitment,
                keypair: args.keypair.clone(),
                env: args.env,
                vault_program_id,
            },
            verbose: args.verbose,
        })
    }

    pub const fn vault_program_id(&self) -> &Pubkey {
        &self.config.vault_program_id
    }

    pub async fn command_context(&self, need_to_sign: bool) -> Result<CommandContext> {
        let context = CommandContext::build(&self.config, need_to_sign).await?;

        if self.verbose {
            info!(
                "Drift {} program {} subscribed at slot {:?}, vault program {}",
                context.drift_client.env(),
                context.drift_client.program_id(),
                context.drift_client.subscribed_slot(),
                context.vault_client.program_id()
            );
            let send_config = context.vault_client.provider().send_config();
            info!(
                "Preflight {:?}, skip preflight {}",
                send_config.preflight_commitment, send_config.skip_preflight
            );
        }

        Ok(context)
    }

    pub async fn handle(&self, action: ProgramCommand) -> Result<()> {
        if action.is_offline() {
            return self.handle_offline(action);
        }

        let context = self.command_context(action.needs_to_sign()).await?;
        self.handle_with_context(&context, action).await
    }

    fn handle_offline(&self, action: ProgramCommand) -> Result<()> {
        match action {
            ProgramCommand::DeriveVaultAddress { name } => {
                let vault = get_vault_address(self.vault_program_id(), &encode_name(&name)?)?;
                info!("Vault address for \"{}\": {}", name, vault);
                Ok(())
            }
            ProgramCommand::DeriveVaultDepositorAddress { vault_address } => {
                let vault = Pubkey::from_str(&vault_address)?;
                let vault_depositor = get_vault_depositor_address(self.vault_program_id(), &vault)?;
                info!("Vault depositor address for {}: {}", vault, vault_depositor);
                Ok(())
            }
            _ => Err(anyhow!("Command requires a connection")),
        }
    }

    async fn handle_with_context(
        &self,
        context: &CommandContext,
        action: ProgramCommand,
    ) -> Result<()> {
        let vault_client = &context.vault_client;

        match action {
            // Getters
            ProgramCommand::ViewVault {
                vault_address,
                name,
            } => {
                let vault_address = match (vault_address, name) {
                    (Some(vault_address), _) => Pubkey::from_str(&vault_address)?,
                    (None, Some(name)) => vault_client.get_vault_address_from_name(&name)?,
                    (None, None) => return Err(anyhow!("No vault address or name")),
                };

                let vault = vault_client.get_vault(&vault_address).await?;
                print_vault(&vault)?;
                Ok(())
            }
            ProgramCommand::ViewVaultDepositor {
                vault_depositor_address,
            } => {
                let vault_depositor_address = Pubkey::from_str(&vault_depositor_address)?;
                let vault_depositor = vault_client
                    .get_vault_depositor(&vault_depositor_address)
                    .await?;
                print_vault_depositor(&vault_depositor)?;
                Ok(())
            }
            ProgramCommand::ListVaults => {
                let vaults = vault_client.get_all_vaults().await?;
                for (address, vault) in vaults.iter() {
                    info!(
                        "{} {:<32} manager {} total shares {}",
                        address,
                        vault.name(),
                        vault.manager,
                        vault.total_shares
                    );
                }
                info!("Total vaults: {}", vaults.len());
                Ok(())
            }
            ProgramCommand::ListVaultDepositors { vault_address } => {
                let vault = Pubkey::from_str(&vault_address)?;
                let vault_depositors = vault_client.get_all_vault_depositors(&vault).await?;
                for (address, vault_depositor) in vault_depositors.iter() {
                    info!(
                        "{} authority {} shares {}",
                        address, vault_depositor.authority, vault_depositor.vault_shares
                    );
                }
                info!("Total vault depositors: {}", vault_depositors.len());
                Ok(())
            }

            // Signer
            ProgramCommand::Whoami => {
                let provider = vault_client.provider();
                let pubkey = provider.wallet().pubkey();
                let balance = provider.rpc_client().get_balance(&pubkey).await?;
                info!("Signer:  {}", pubkey);
                info!("Balance: {} SOL", lamports_to_sol(balance));
                Ok(())
            }
            ProgramCommand::SignMessage { message } => {
                let provider = vault_client.provider();
                let (_, signature) = sign_offchain_message(provider.wallet(), &message)?;
                info!("Signer:    {}", provider.wallet().pubkey());
                info!("Signature: {}", signature);
                Ok(())
            }

            ProgramCommand::DeriveVaultAddress { .. }
            | ProgramCommand::DeriveVaultDepositorAddress { .. } => self.handle_offline(action),
        }
    }
}
