use std::{
    fmt,
    io::{self, Write},
};

use drift_vaults_core::{vault::Vault, vault_depositor::VaultDepositor};

use crate::error::CliError;

/// Manager ownership derived from a vault's share counts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManagerShareSummary {
    pub manager_shares: u128,
    /// `manager_shares / total_shares`, 0 when no shares are issued
    pub manager_share_fraction: f64,
}

impl ManagerShareSummary {
    pub fn from_vault(vault: &Vault) -> Result<Self, CliError> {
        Ok(Self {
            manager_shares: vault.manager_shares()?,
            manager_share_fraction: vault.manager_share_fraction()?,
        })
    }

    pub fn manager_share_pct(&self) -> String {
        format!("{:.4}%", self.manager_share_fraction * 100.0)
    }
}

impl fmt::Display for ManagerShareSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.manager_shares, self.manager_share_pct())
    }
}

#[rustfmt::skip]
pub fn write_vault<W: Write>(out: &mut W, vault: &Vault) -> Result<ManagerShareSummary, CliError> {
    let summary = ManagerShareSummary::from_vault(vault)?;

    writeln!(out, "vault: {}", vault.name())?;
    writeln!(out, "pubkey:                  {}", vault.pubkey)?;
    writeln!(out, "manager:                 {}", vault.manager)?;
    writeln!(out, "token_account:           {}", vault.token_account)?;
    writeln!(out, "user_stats:              {}", vault.user_stats)?;
    writeln!(out, "user:                    {}", vault.user)?;
    writeln!(out, "delegate:                {}", vault.delegate)?;
    writeln!(out, "liquidation_delegate:    {}", vault.liquidation_delegate)?;
    writeln!(out, "user_shares:             {}", vault.user_shares)?;
    writeln!(out, "total_shares:            {}", vault.total_shares)?;
    writeln!(out, "  [manager_shares]:      {}", summary)?;
    writeln!(out, "last_fee_update_ts:      {}", vault.last_fee_update_ts)?;
    writeln!(out, "liquidation_start_ts:    {}", vault.liquidation_start_ts)?;
    writeln!(out, "redeem_period:           {}", vault.redeem_period)?;
    writeln!(out, "total_withdraw_requested: {}", vault.total_withdraw_requested)?;
    writeln!(out, "max_tokens:              {}", vault.max_tokens)?;
    writeln!(out, "shares_base:             {}", vault.shares_base)?;
    writeln!(out, "management_fee:          {}", vault.management_fee)?;
    writeln!(out, "init_ts:                 {}", vault.init_ts)?;
    writeln!(out, "net_deposits:            {}", vault.net_deposits)?;
    writeln!(out, "manager_net_deposits:    {}", vault.manager_net_deposits)?;
    writeln!(out, "total_deposits:          {}", vault.total_deposits)?;
    writeln!(out, "total_withdraws:         {}", vault.total_withdraws)?;
    writeln!(out, "manager_total_deposits:  {}", vault.manager_total_deposits)?;
    writeln!(out, "manager_total_withdraws: {}", vault.manager_total_withdraws)?;
    writeln!(out, "manager_total_fee:       {}", vault.manager_total_fee)?;
    writeln!(out, "manager_total_profit_share: {}", vault.manager_total_profit_share)?;
    writeln!(out, "last_manager_withdraw_request:")?;
    writeln!(out, "  shares: {}", vault.last_manager_withdraw_request.shares)?;
    writeln!(out, "  value:  {}", vault.last_manager_withdraw_request.value)?;
    writeln!(out, "  ts:     {}", vault.last_manager_withdraw_request.ts)?;
    writeln!(out, "min_deposit_amount:      {}", vault.min_deposit_amount)?;
    writeln!(out, "profit_share:            {}", vault.profit_share)?;
    writeln!(out, "hurdle_rate:             {}", vault.hurdle_rate)?;
    writeln!(out, "spot_market_index:       {}", vault.spot_market_index)?;
    writeln!(out, "permissioned:            {}", vault.permissioned())?;

    Ok(summary)
}

#[rustfmt::skip]
pub fn write_vault_depositor<W: Write>(out: &mut W, vault_depositor: &VaultDepositor) -> io::Result<()> {
    writeln!(out, "vault:                          {}", vault_depositor.vault)?;
    writeln!(out, "pubkey:                         {}", vault_depositor.pubkey)?;
    writeln!(out, "authority:                      {}", vault_depositor.authority)?;
    writeln!(out, "vault_shares:                   {}", vault_depositor.vault_shares)?;
    writeln!(out, "last_withdraw_request.shares:   {}", vault_depositor.last_withdraw_request.shares)?;
    writeln!(out, "last_withdraw_request.value:    {}", vault_depositor.last_withdraw_request.value)?;
    writeln!(out, "last_withdraw_request.ts:       {}", vault_depositor.last_withdraw_request.ts)?;
    writeln!(out, "last_valid_ts:                  {}", vault_depositor.last_valid_ts)?;
    writeln!(out, "net_deposits:                   {}", vault_depositor.net_deposits)?;
    writeln!(out, "total_deposits:                 {}", vault_depositor.total_deposits)?;
    writeln!(out, "total_withdraws:                {}", vault_depositor.total_withdraws)?;
    writeln!(out, "cumulative_profit_share_amount: {}", vault_depositor.cumulative_profit_share_amount)?;
    writeln!(out, "vault_shares_base:              {}", vault_depositor.vault_shares_base)?;

    Ok(())
}

pub fn print_vault(vault: &Vault) -> Result<ManagerShareSummary, CliError> {
    write_vault(&mut io::stdout().lock(), vault)
}

pub fn print_vault_depositor(vault_depositor: &VaultDepositor) -> Result<(), CliError> {
    Ok(write_vault_depositor(
        &mut io::stdout().lock(),
        vault_depositor,
    )?)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use drift_vaults_core::{error::VaultError, name::encode_name};
    use solana_sdk::pubkey::Pubkey;

    use super::*;

    fn sample_vault(total_shares: u128, user_shares: u128) -> Vault {
        let mut vault: Vault = bytemuck::Zeroable::zeroed();
        vault.name = encode_name("test vault").unwrap();
        vault.pubkey = Pubkey::new_unique();
        vault.total_shares = total_shares;
        vault.user_shares = user_shares;
        vault.spot_market_index = 1;
        vault
    }

    fn render_vault(vault: &Vault) -> (String, ManagerShareSummary) {
        let mut out = Vec::new();
        let summary = write_vault(&mut out, vault).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_write_vault_manager_shares() {
        let vault = sample_vault(1000, 400);
        let (output, summary) = render_vault(&vault);

        assert_eq!(summary.manager_shares, 600);
        assert_eq!(summary.manager_share_pct(), "60.0000%");
        assert!(output.contains("  [manager_shares]:      600 (60.0000%)\n"));
    }

    #[test]
    fn test_write_vault_no_shares_issued() {
        let vault = sample_vault(0, 0);
        let (output, summary) = render_vault(&vault);

        assert_eq!(summary.manager_shares, 0);
        assert_eq!(summary.manager_share_pct(), "0.0000%");
        assert!(!output.contains("NaN"));
    }

    #[test]
    fn test_write_vault_field_order() {
        let vault = sample_vault(10, 5);
        let (output, _) = render_vault(&vault);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "vault: test vault");
        assert_eq!(lines[1], format!("pubkey:                  {}", vault.pubkey));
        assert!(lines[9].starts_with("total_shares:"));
        assert!(lines[10].starts_with("  [manager_shares]:"));
        assert_eq!(lines[27], "last_manager_withdraw_request:");
        assert_eq!(lines.last(), Some(&"permissioned:            false"));
        assert_eq!(lines.len(), 36);
    }

    #[test]
    fn test_write_vault_corrupt_shares() {
        let vault = sample_vault(1, 2);
        let mut out = Vec::new();

        assert_matches!(
            write_vault(&mut out, &vault),
            Err(CliError::Vault(VaultError::ArithmeticUnderflow))
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_vault_depositor() {
        let mut vault_depositor: VaultDepositor = bytemuck::Zeroable::zeroed();
        vault_depositor.vault = Pubkey::new_unique();
        vault_depositor.vault_shares = 123;
        vault_depositor.last_withdraw_request.value = 77;

        let mut out = Vec::new();
        write_vault_depositor(&mut out, &vault_depositor).unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(
            lines[0],
            format!("vault:                          {}", vault_depositor.vault)
        );
        assert_eq!(lines[3], "vault_shares:                   123");
        assert_eq!(lines[5], "last_withdraw_request.value:    77");
        assert_eq!(lines[12], "vault_shares_base:              0");
    }
}
