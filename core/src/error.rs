use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VaultError {
    #[error("Name ({0}) longer than 32 bytes")]
    NameTooLong(String),
    #[error("Unable to find a viable program address bump seed")]
    NoViableBump,
    #[error("Underflow")]
    ArithmeticUnderflow,
    #[error("Account data too small: expected at least {expected} bytes, got {actual}")]
    AccountDataTooSmall { expected: usize, actual: usize },
    #[error("Invalid account discriminator")]
    InvalidDiscriminator,
}
