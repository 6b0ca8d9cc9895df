use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol};

pub const CREATED: Symbol = symbol_short!("created");
pub const PAUSED: Symbol = symbol_short!("paused");
pub const UNPAUSED: Symbol = symbol_short!("unpaused");
pub const DEPOSIT: Symbol = symbol_short!("deposit");
pub const WITHDRAW: Symbol = symbol_short!("withdraw");
pub const CLAIM: Symbol = symbol_short!("claim");
pub const OWNERSHIP: Symbol = symbol_short!("ownership");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Created {
    pub owner: Address,
    pub token: Address,
    pub max_delta_blocks: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GateToggled {
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentDeposited {
    pub source: Address,
    pub amount: i128,
    pub expiry_height: u32,
    pub commitment: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentWithdrawn {
    pub recipient: Address,
    pub amount: i128,
    pub commitment: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentClaimed {
    pub source: Address,
    pub amount: i128,
    pub commitment: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_created(env: &Env, event: Created) {
    env.events().publish((CREATED,), event);
}

pub fn emit_gate_toggled(env: &Env, paused: bool, event: GateToggled) {
    let topic = if paused { PAUSED } else { UNPAUSED };
    env.events().publish((topic,), event);
}

// Payment events carry the commitment as the second topic so indexers can
// follow a single payment without decoding the data.
pub fn emit_deposited(env: &Env, event: PaymentDeposited) {
    env.events()
        .publish((DEPOSIT, event.commitment.clone()), event);
}

pub fn emit_withdrawn(env: &Env, event: PaymentWithdrawn) {
    env.events()
        .publish((WITHDRAW, event.commitment.clone()), event);
}

pub fn emit_claimed(env: &Env, event: PaymentClaimed) {
    env.events()
        .publish((CLAIM, event.commitment.clone()), event);
}

pub fn emit_ownership_transferred(env: &Env, event: OwnershipTransferred) {
    env.events().publish((OWNERSHIP,), event);
}
