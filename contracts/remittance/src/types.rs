use soroban_sdk::{contracttype, Address, BytesN};

/// Storage keys for the contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Owner and pause flag (instance storage).
    Access,
    /// Upper bound on the deadline offset a depositor may request (instance storage).
    MaxDeltaBlocks,
    /// Asset contract through which value is locked and paid out (instance storage).
    Token,
    /// Sum of the amounts of all live payments (instance storage).
    TotalLocked,
    /// Payment locked under a commitment key (persistent storage).
    Payment(BytesN<32>),
    /// Marks a commitment key whose payment has been redeemed (persistent storage).
    Spent(BytesN<32>),
}

/// A locked deposit, present from `send_funds` until it is withdrawn or claimed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentRecord {
    pub source: Address,
    pub amount: i128,
    /// Last ledger sequence at which the recipient may still withdraw.
    pub expiry_height: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessState {
    pub owner: Address,
    pub paused: bool,
}
