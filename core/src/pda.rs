//! Program derived addresses owned by the vault program

use solana_program::pubkey::Pubkey;

use crate::{
    constants::{NAME_LEN, VAULT_DEPOSITOR_SEED, VAULT_SEED},
    error::VaultError,
};

pub fn vault_seeds(encoded_name: &[u8; NAME_LEN]) -> Vec<Vec<u8>> {
    vec![VAULT_SEED.to_vec(), encoded_name.to_vec()]
}

pub fn vault_depositor_seeds(vault: &Pubkey) -> Vec<Vec<u8>> {
    vec![VAULT_DEPOSITOR_SEED.to_vec(), vault.to_bytes().to_vec()]
}

fn try_find_program_address(
    program_id: &Pubkey,
    seeds: Vec<Vec<u8>>,
) -> Result<(Pubkey, u8, Vec<Vec<u8>>), VaultError> {
    let seeds_iter: Vec<_> = seeds.iter().map(|s| s.as_slice()).collect();
    let (pda, bump) = Pubkey::try_find_program_address(&seeds_iter, program_id)
        .ok_or(VaultError::NoViableBump)?;
    Ok((pda, bump, seeds))
}

pub fn find_vault_address(
    program_id: &Pubkey,
    encoded_name: &[u8; NAME_LEN],
) -> Result<(Pubkey, u8, Vec<Vec<u8>>), VaultError> {
    try_find_program_address(program_id, vault_seeds(encoded_name))
}

pub fn find_vault_depositor_address(
    program_id: &Pubkey,
    vault: &Pubkey,
) -> Result<(Pubkey, u8, Vec<Vec<u8>>), VaultError> {
    try_find_program_address(program_id, vault_depositor_seeds(vault))
}

/// Vault address for an already encoded name, see [`crate::name::encode_name`]
pub fn get_vault_address(
    program_id: &Pubkey,
    encoded_name: &[u8; NAME_LEN],
) -> Result<Pubkey, VaultError> {
    Ok(find_vault_address(program_id, encoded_name)?.0)
}

pub fn get_vault_depositor_address(
    program_id: &Pubkey,
    vault: &Pubkey,
) -> Result<Pubkey, VaultError> {
    Ok(find_vault_depositor_address(program_id, vault)?.0)
}
