use bytemuck::{Pod, Zeroable};
use solana_program::pubkey::Pubkey;

use crate::{discriminators::Discriminator, withdraw_request::WithdrawRequest};

/// Per-depositor share accounting for a single vault
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
#[repr(C)]
pub struct VaultDepositor {
    /// The vault deposited into
    pub vault: Pubkey,
    /// The vault depositor account's pubkey. It is a pda of vault
    pub pubkey: Pubkey,
    /// The authority is the address w permission to deposit/withdraw
    pub authority: Pubkey,
    /// Share of vault owned by this depositor
    pub vault_shares: u128,
    pub last_withdraw_request: WithdrawRequest,
    /// Creation ts of vault depositor
    pub last_valid_ts: i64,
    pub net_deposits: i64,
    pub total_deposits: u64,
    pub total_withdraws: u64,
    /// The total profit share paid to the manager
    pub cumulative_profit_share_amount: i64,
    /// The exponent for vault_shares decimal places
    pub vault_shares_base: u32,
    padding1: u32,
    reserved: [u64; 8],
}

impl Discriminator for VaultDepositor {
    const ACCOUNT_NAME: &'static str = "VaultDepositor";
}
