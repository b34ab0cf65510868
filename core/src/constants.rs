use solana_program::{pubkey, pubkey::Pubkey};

pub const VAULT_SEED: &[u8] = b"vault";
pub const VAULT_DEPOSITOR_SEED: &[u8] = b"vault_depositor";

/// Size of an encoded vault name
pub const NAME_LEN: usize = 32;

/// Byte length of the account discriminator prefixed to every program account
pub const DISCRIMINATOR_LEN: usize = 8;

pub const DRIFT_PROGRAM_ID: Pubkey = pubkey!("dRiftyHA39MWEi3m9aunc5MzRF1JYuBsbn6VPcn33UH");
pub const DRIFT_STATE_SEED: &[u8] = b"drift_state";
