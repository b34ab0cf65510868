use solana_remote_wallet::{
    locator::Locator, remote_keypair::generate_remote_keypair, remote_keypair::RemoteKeypair,
    remote_wallet::maybe_wallet_manager,
};
use solana_sdk::{
    derivation_path::DerivationPath,
    offchain_message::OffchainMessage,
    pubkey::Pubkey,
    sanitize::SanitizeError,
    signature::{Keypair, Signature},
    signer::{Signer, SignerError},
};
use thiserror::Error;

pub const LEDGER_URI_PREFIX: &str = "usb://ledger";

#[derive(Debug, Error)]
pub enum WalletError {
    #[error(transparent)]
    Signer(#[from] SignerError),
    #[error("{0}")]
    Ledger(String),
    #[error("Invalid off-chain message: {0}")]
    OffchainMessage(#[from] SanitizeError),
}

/// The capability a CLI command needs from its signer
pub trait Wallet {
    fn pubkey(&self) -> Pubkey;

    fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError>;
}

pub fn is_ledger_uri(keypair_source: &str) -> bool {
    keypair_source.starts_with(LEDGER_URI_PREFIX)
}

/// Signs `message` wrapped in the off-chain message envelope. Ledger devices only accept
/// arbitrary text in this form; raw bytes are parsed as a transaction message.
pub fn sign_offchain_message(
    wallet: &dyn Wallet,
    message: &str,
) -> Result<(OffchainMessage, Signature), WalletError> {
    let offchain_message = OffchainMessage::new(0, message.as_bytes())?;
    let signature = wallet.sign_message(&offchain_message.serialize()?)?;
    Ok((offchain_message, signature))
}

/// Wallet backed by an in-memory keypair, loaded from a file or generated
pub struct KeypairWallet(Keypair);

impl KeypairWallet {
    pub const fn new(keypair: Keypair) -> Self {
        Self(keypair)
    }

    /// Throwaway signer for commands that never sign
    pub fn ephemeral() -> Self {
        Self(Keypair::new())
    }
}

impl Wallet for KeypairWallet {
    fn pubkey(&self) -> Pubkey {
        self.0.pubkey()
    }

    fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError> {
        Ok(self.0.try_sign_message(message)?)
    }
}

/// Wallet whose key never leaves a Ledger device
pub struct LedgerWallet(RemoteKeypair);

impl LedgerWallet {
    /// Resolves `usb://ledger[/<pubkey>][?key=<account>[/<change>]]`. Blocks while the
    /// device is queried and, with `confirm_key`, until the user approves on the device.
    pub fn from_uri(uri: &str, confirm_key: bool) -> Result<Self, WalletError> {
        let (locator_path, key) = match uri.split_once("?key=") {
            Some((path, key)) => (path, Some(key)),
            None => (uri, None),
        };

        let locator =
            Locator::new_from_path(locator_path).map_err(|e| WalletError::Ledger(e.to_string()))?;
        let derivation_path = key
            .map(DerivationPath::from_key_str)
            .transpose()
            .map_err(|e| WalletError::Ledger(e.to_string()))?
            .unwrap_or_default();

        let wallet_manager = maybe_wallet_manager()
            .map_err(|e| WalletError::Ledger(e.to_string()))?
            .ok_or_else(|| WalletError::Ledger("No hardware wallet found".to_string()))?;

        let keypair = generate_remote_keypair(
            locator,
            derivation_path,
            &wallet_manager,
            confirm_key,
            "keypair",
        )
        .map_err(|e| WalletError::Ledger(e.to_string()))?;

        Ok(Self(keypair))
    }
}

impl Wallet for LedgerWallet {
    fn pubkey(&self) -> Pubkey {
        self.0.pubkey
    }

    fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError> {
        Ok(self.0.try_sign_message(message)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ledger_uri() {
        assert!(is_ledger_uri("usb://ledger"));
        assert!(is_ledger_uri("usb://ledger?key=0/0"));
        assert!(!is_ledger_uri("~/.config/solana/id.json"));
        assert!(!is_ledger_uri("usb://trezor"));
    }

    #[test]
    fn test_keypair_wallet_signs() {
        let keypair = Keypair::new();
        let pubkey = keypair.pubkey();
        let wallet = KeypairWallet::new(keypair);

        assert_eq!(wallet.pubkey(), pubkey);

        let message = b"drift vaults";
        let signature = wallet.sign_message(message).unwrap();
        assert!(signature.verify(pubkey.as_ref(), message));
    }

    #[test]
    fn test_sign_offchain_message() {
        let wallet = KeypairWallet::ephemeral();

        let (offchain_message, signature) = sign_offchain_message(&wallet, "hello").unwrap();
        assert_eq!(offchain_message.get_message().as_slice(), b"hello");
        assert!(offchain_message
            .verify(&wallet.pubkey(), &signature)
            .unwrap());

        // the signed bytes carry the 0xff signing domain prefix, never the raw text
        let serialized = offchain_message.serialize().unwrap();
        assert_eq!(serialized[0], 0xff);
        assert!(!signature.verify(wallet.pubkey().as_ref(), b"hello"));
    }

    #[test]
    fn test_ephemeral_wallets_are_unique() {
        assert_ne!(
            KeypairWallet::ephemeral().pubkey(),
            KeypairWallet::ephemeral().pubkey()
        );
    }
}
