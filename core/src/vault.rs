use bytemuck::{Pod, Zeroable};
use solana_program::pubkey::Pubkey;

use crate::{
    constants::NAME_LEN, discriminators::Discriminator, error::VaultError, name::decode_name,
    withdraw_request::WithdrawRequest,
};

/// A pooled vault managed by a single manager and trading through a drift user
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
#[repr(C)]
pub struct Vault {
    /// The name of the vault, space padded
    pub name: [u8; NAME_LEN],
    /// The vault's pubkey. It is a pda of name and also used as the authority for drift user
    pub pubkey: Pubkey,
    /// The manager of the vault. Has the ability to update configs and take fees
    pub manager: Pubkey,
    /// The vault's token account
    pub token_account: Pubkey,
    /// The drift user stats account for the vault
    pub user_stats: Pubkey,
    /// The drift user account for the vault
    pub user: Pubkey,
    /// The vault's designated delegate for drift user
    pub delegate: Pubkey,
    /// The delegate handling liquidation for depositor
    pub liquidation_delegate: Pubkey,
    /// The sum of all shares held by the users (vault depositors)
    pub user_shares: u128,
    /// The sum of all shares: deposits from users, manager deposits, manager profit/fee,
    /// and protocol profit/fee
    pub total_shares: u128,
    pub last_fee_update_ts: i64,
    pub liquidation_start_ts: i64,
    /// Seconds a depositor must wait after requesting a withdrawal
    pub redeem_period: i64,
    pub total_withdraw_requested: u64,
    /// Max token capacity, 0 is unlimited
    pub max_tokens: u64,
    /// Annualized fee the manager charges on assets
    pub management_fee: i64,
    pub init_ts: i64,
    pub net_deposits: i64,
    pub manager_net_deposits: i64,
    pub total_deposits: u64,
    pub total_withdraws: u64,
    pub manager_total_deposits: u64,
    pub manager_total_withdraws: u64,
    pub manager_total_fee: i64,
    pub manager_total_profit_share: u64,
    pub min_deposit_amount: u64,
    pub last_manager_withdraw_request: WithdrawRequest,
    /// Exponent applied to share counts after rebases
    pub shares_base: u32,
    /// Percentage of gains the manager keeps, in PERCENTAGE_PRECISION
    pub profit_share: u32,
    pub hurdle_rate: u32,
    /// The spot market index the vault deposits into/withdraws from
    pub spot_market_index: u16,
    pub bump: u8,
    permissioned: u8,
    reserved: [u64; 8],
}

impl Discriminator for Vault {
    const ACCOUNT_NAME: &'static str = "Vault";
}

impl Vault {
    pub fn name(&self) -> String {
        decode_name(&self.name)
    }

    pub const fn permissioned(&self) -> bool {
        self.permissioned != 0
    }

    #[cfg(test)]
    pub fn set_permissioned(&mut self, permissioned: bool) {
        self.permissioned = u8::from(permissioned);
    }

    /// Shares owned by the manager (and protocol)
    pub fn manager_shares(&self) -> Result<u128, VaultError> {
        self.total_shares
            .checked_sub(self.user_shares)
            .ok_or(VaultError::ArithmeticUnderflow)
    }

    /// Fraction of all shares owned by the manager. A vault with no shares issued reports 0.
    pub fn manager_share_fraction(&self) -> Result<f64, VaultError> {
        let manager_shares = self.manager_shares()?;
        if self.total_shares == 0 {
            return Ok(0.0);
        }
        Ok(manager_shares as f64 / self.total_shares as f64)
    }
}
