use soroban_sdk::{Address, BytesN, Env};

use crate::types::{AccessState, DataKey, PaymentRecord};

/// Bump amount for storage entries (roughly 30 days in ledgers).
pub(crate) const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
pub(crate) const LEDGER_THRESHOLD: u32 = 259_200;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
}

// =============================================================================
// Access
// =============================================================================

pub fn get_access(env: &Env) -> AccessState {
    env.storage()
        .instance()
        .get(&DataKey::Access)
        .expect("access state not set")
}

pub fn set_access(env: &Env, access: &AccessState) {
    env.storage().instance().set(&DataKey::Access, access);
}

// =============================================================================
// Configuration
// =============================================================================

pub fn get_max_delta_blocks(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::MaxDeltaBlocks)
        .expect("max_delta_blocks not set")
}

pub fn set_max_delta_blocks(env: &Env, max_delta_blocks: u32) {
    env.storage()
        .instance()
        .set(&DataKey::MaxDeltaBlocks, &max_delta_blocks);
}

pub fn get_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .expect("token address not set")
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

// =============================================================================
// Total locked
// =============================================================================

pub fn get_total_locked(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalLocked)
        .unwrap_or(0)
}

pub fn set_total_locked(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalLocked, &total);
}

// =============================================================================
// Payments
// =============================================================================

pub fn has_payment(env: &Env, commitment: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Payment(commitment.clone()))
}

pub fn get_payment(env: &Env, commitment: &BytesN<32>) -> Option<PaymentRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Payment(commitment.clone()))
}

pub fn set_payment(env: &Env, commitment: &BytesN<32>, record: &PaymentRecord) {
    let key = DataKey::Payment(commitment.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
}

/// Bump whichever entry holds `commitment`: the live payment or, once
/// redeemed, its spent marker. Returns false when neither exists.
pub fn extend_commitment(env: &Env, commitment: &BytesN<32>) -> bool {
    let key = if has_payment(env, commitment) {
        DataKey::Payment(commitment.clone())
    } else if is_spent(env, commitment) {
        DataKey::Spent(commitment.clone())
    } else {
        return false;
    };
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
    true
}

/// Delete a redeemed payment and retire its key for good.
pub fn retire_payment(env: &Env, commitment: &BytesN<32>) {
    env.storage()
        .persistent()
        .remove(&DataKey::Payment(commitment.clone()));

    let spent = DataKey::Spent(commitment.clone());
    env.storage().persistent().set(&spent, &true);
    env.storage()
        .persistent()
        .extend_ttl(&spent, LEDGER_THRESHOLD, LEDGER_BUMP);
}

pub fn is_spent(env: &Env, commitment: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Spent(commitment.clone()))
}
