use drift_vaults_core::error::VaultError;
use thiserror::Error;

use crate::wallet::WalletError;

/// Exit code used when the CLI cannot continue without a valid signer
pub const INVALID_KEYPAIR_EXIT_CODE: i32 = 1;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Need to provide a valid keypair: {path}: {reason}")]
    InvalidKeypair { path: String, reason: String },
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),
    #[error(transparent)]
    Vault(#[from] VaultError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// The process exit code for errors that terminate the CLI directly
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::InvalidKeypair { .. } => Some(INVALID_KEYPAIR_EXIT_CODE),
            _ => None,
        }
    }
}

/// Exit code for a top-level error that ends the process with a plain diagnostic
pub fn fatal_exit_code(err: &anyhow::Error) -> Option<i32> {
    err.downcast_ref::<CliError>().and_then(CliError::exit_code)
}
