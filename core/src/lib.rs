pub mod constants;
pub mod discriminators;
pub mod error;
pub mod name;
pub mod pda;
pub mod vault;
pub mod vault_depositor;
pub mod withdraw_request;

solana_program::declare_id!("vAuLTsyrvSfZRuRB3XgvkPwNGgYSs9YRYymVebLKoxR");
