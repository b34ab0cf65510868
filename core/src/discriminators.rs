use bytemuck::Pod;
use solana_program::hash::hash;

use crate::{constants::DISCRIMINATOR_LEN, error::VaultError};

/// Account discriminator: the first 8 bytes of `sha256("account:<name>")`
pub fn account_discriminator(account_name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let digest = hash(format!("account:{}", account_name).as_bytes()).to_bytes();
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    discriminator
}

/// Implemented by every account record the vault program owns
pub trait Discriminator {
    const ACCOUNT_NAME: &'static str;

    fn discriminator() -> [u8; DISCRIMINATOR_LEN] {
        account_discriminator(Self::ACCOUNT_NAME)
    }
}

/// Copies a record out of raw account data after checking its discriminator.
/// Trailing bytes past the record are ignored.
pub trait AccountDeserialize: Pod + Discriminator {
    fn try_from_account_data(data: &[u8]) -> Result<Self, VaultError> {
        let expected = DISCRIMINATOR_LEN + std::mem::size_of::<Self>();
        if data.len() < expected {
            return Err(VaultError::AccountDataTooSmall {
                expected,
                actual: data.len(),
            });
        }
        if data[..DISCRIMINATOR_LEN] != Self::discriminator() {
            return Err(VaultError::InvalidDiscriminator);
        }

        bytemuck::try_pod_read_unaligned(&data[DISCRIMINATOR_LEN..expected])
            .map_err(|_| VaultError::AccountDataTooSmall {
                expected,
                actual: data.len(),
            })
    }
}

impl<T: Pod + Discriminator> AccountDeserialize for T {}

/// Lays a record out the way the program stores it, discriminator first
#[cfg(test)]
pub(crate) fn to_account_data<T: Pod + Discriminator>(record: &T) -> Vec<u8> {
    let mut data = T::discriminator().to_vec();
    data.extend_from_slice(bytemuck::bytes_of(record));
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminators_are_distinct() {
        assert_ne!(
            account_discriminator("Vault"),
            account_discriminator("VaultDepositor")
        );
    }

    #[test]
    fn test_discriminator_is_stable() {
        assert_eq!(
            account_discriminator("Vault"),
            account_discriminator("Vault")
        );
    }

    #[test]
    fn test_account_data_starts_with_discriminator() {
        #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
        #[repr(C)]
        struct Record {
            value: u64,
        }
        impl Discriminator for Record {
            const ACCOUNT_NAME: &'static str = "Record";
        }

        let data = to_account_data(&Record { value: 7 });
        assert_eq!(data[..DISCRIMINATOR_LEN], account_discriminator("Record"));
        assert_eq!(Record::try_from_account_data(&data).unwrap().value, 7);
    }
}
