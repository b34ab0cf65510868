pub mod args;
pub mod context;
pub mod drift_client;
pub mod error;
pub mod handler;
pub mod log;
pub mod printer;
pub mod provider;
pub mod vault_client;
pub mod wallet;
