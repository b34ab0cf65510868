use bytemuck::{Pod, Zeroable};

/// A pending, time-stamped request to redeem shares
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct WithdrawRequest {
    /// Shares requested to withdraw
    pub shares: u128,
    /// Value of the shares at the time of the request
    pub value: u64,
    /// Request timestamp
    pub ts: i64,
}

