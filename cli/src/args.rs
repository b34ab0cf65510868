use std::fmt;

use clap::{Parser, Subcommand};

use crate::drift_client::DriftEnv;

#[derive(Parser)]
#[command(author, version, about = "A CLI for inspecting Drift vaults", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: ProgramCommand,

    #[arg(
        long,
        global = true,
        env = "RPC_URL",
        default_value = "https://api.mainnet-beta.solana.com",
        help = "RPC URL to use"
    )]
    pub url: String,

    #[arg(
        long,
        global = true,
        env = "COMMITMENT",
        default_value = "confirmed",
        help = "Commitment level"
    )]
    pub commitment: String,

    #[arg(
        long,
        global = true,
        env = "KEYPAIR_PATH",
        default_value = "~/.config/solana/id.json",
        help = "Keypair path or usb://ledger URI"
    )]
    pub keypair: String,

    #[arg(
        long,
        global = true,
        env = "DRIFT_ENV",
        value_enum,
        default_value_t = DriftEnv::MainnetBeta,
        help = "Drift environment"
    )]
    pub env: DriftEnv,

    #[arg(
        long,
        global = true,
        env = "VAULT_PROGRAM_ID",
        default_value_t = drift_vaults_core::id().to_string(),
        help = "Vault program ID"
    )]
    pub vault_program_id: String,

    #[arg(long, global = true, help = "Verbose mode")]
    pub verbose: bool,

    #[arg(long, global = true, hide = true)]
    pub markdown_help: bool,
}

#[derive(Subcommand)]
pub enum ProgramCommand {
    /// Getters
    ViewVault {
        #[arg(
            long,
            conflicts_with = "name",
            required_unless_present = "name",
            help = "Vault Account Address"
        )]
        vault_address: Option<String>,
        #[arg(long, help = "Vault name, used to derive the vault address")]
        name: Option<String>,
    },
    ViewVaultDepositor {
        #[arg(long, help = "Vault Depositor Account Address")]
        vault_depositor_address: String,
    },
    ListVaults,
    ListVaultDepositors {
        #[arg(long, env = "VAULT", help = "Vault Account Address")]
        vault_address: String,
    },

    /// Addresses
    DeriveVaultAddress {
        #[arg(long, help = "Vault name")]
        name: String,
    },
    DeriveVaultDepositorAddress {
        #[arg(long, env = "VAULT", help = "Vault Account Address")]
        vault_address: String,
    },

    /// Signer
    Whoami,
    SignMessage {
        #[arg(long, help = "Message to sign")]
        message: String,
    },
}

impl ProgramCommand {
    /// Commands answered from seeds alone, without a connection
    pub const fn is_offline(&self) -> bool {
        matches!(
            self,
            Self::DeriveVaultAddress { .. } | Self::DeriveVaultDepositorAddress { .. }
        )
    }

    pub const fn needs_to_sign(&self) -> bool {
        matches!(self, Self::Whoami | Self::SignMessage { .. })
    }
}

#[rustfmt::skip]
impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nDrift Vaults CLI Configuration")?;
        writeln!(f, "══════════════════════════════")?;

        writeln!(f, "\nNetwork Settings:")?;
        writeln!(f, "  • RPC URL:     {}", self.url)?;
        writeln!(f, "  • Commitment:  {}", self.commitment)?;
        writeln!(f, "  • Drift Env:   {}", self.env)?;

        writeln!(f, "\nProgram IDs:")?;
        writeln!(f, "  • Vault:       {}", self.vault_program_id)?;

        writeln!(f, "\nSolana Settings:")?;
        writeln!(f, "  • Keypair:     {}", self.keypair)?;

        writeln!(f, "\nAdditional Settings:")?;
        writeln!(f, "  • Verbose Mode:  {}", if self.verbose { "Enabled" } else { "Disabled" })?;

        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["drift-vaults-cli", "list-vaults"]).unwrap();

        assert_eq!(args.commitment, "confirmed");
        assert_eq!(args.env, DriftEnv::MainnetBeta);
        assert_eq!(args.vault_program_id, drift_vaults_core::id().to_string());
        assert!(matches!(args.command, ProgramCommand::ListVaults));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "drift-vaults-cli",
            "whoami",
            "--keypair",
            "usb://ledger",
            "--url",
            "http://localhost:8899",
            "--commitment",
            "finalized",
            "--env",
            "devnet",
        ])
        .unwrap();

        assert_eq!(args.keypair, "usb://ledger");
        assert_eq!(args.url, "http://localhost:8899");
        assert_eq!(args.commitment, "finalized");
        assert_eq!(args.env, DriftEnv::Devnet);
        assert!(args.command.needs_to_sign());
    }

    #[test]
    fn test_view_vault_requires_address_or_name() {
        assert!(Args::try_parse_from(["drift-vaults-cli", "view-vault"]).is_err());
        assert!(Args::try_parse_from([
            "drift-vaults-cli",
            "view-vault",
            "--vault-address",
            "11111111111111111111111111111111",
            "--name",
            "alpha",
        ])
        .is_err());

        let args =
            Args::try_parse_from(["drift-vaults-cli", "view-vault", "--name", "alpha"]).unwrap();
        assert!(!args.command.needs_to_sign());
        assert!(!args.command.is_offline());
    }

    #[test]
    fn test_derive_commands_are_offline() {
        let args =
            Args::try_parse_from(["drift-vaults-cli", "derive-vault-address", "--name", "alpha"])
                .unwrap();
        assert!(args.command.is_offline());
        assert!(!args.command.needs_to_sign());
    }
}
