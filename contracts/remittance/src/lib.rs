//! Hash-locked remittance escrow for Stellar.
//!
//! A source locks funds under a commitment `hash(secret_digest, recipient)`.
//! The recipient redeems them by presenting `secret_digest` at or before the
//! expiry ledger; after expiry only the source can take them back. An owner
//! can pause every value-moving entry point.

#![no_std]
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token::TokenClient, Address, BytesN, Env,
};

mod access;
mod commitment;
mod error;
mod events;
mod storage;
mod types;

pub use error::{Error, ErrorKind};
pub use events::{
    Created, GateToggled, OwnershipTransferred, PaymentClaimed, PaymentDeposited,
    PaymentWithdrawn,
};
pub use types::{AccessState, PaymentRecord};


#[contract]
pub struct Remittance;

#[contractimpl]
impl Remittance {
    /// Configure the contract.
    ///
    /// `token` is the asset contract value moves through (the native asset's
    /// Stellar Asset Contract in production). `max_delta_blocks` bounds the
    /// deadline offset a depositor may request and cannot change afterwards.
    pub fn __constructor(env: Env, owner: Address, token: Address, max_delta_blocks: u32) {
        if max_delta_blocks == 0 {
            panic_with_error!(&env, Error::InvalidMaxDeltaBlocks);
        }
        storage::set_access(
            &env,
            &AccessState {
                owner: owner.clone(),
                paused: false,
            },
        );
        storage::set_token(&env, &token);
        storage::set_max_delta_blocks(&env, max_delta_blocks);
        storage::set_total_locked(&env, 0);
        storage::extend_instance(&env);

        events::emit_created(
            &env,
            Created {
                owner,
                token,
                max_delta_blocks,
            },
        );
    }

    /// Commitment key for a secret digest and the recipient allowed to redeem it.
    pub fn hash(env: Env, secret_digest: BytesN<32>, recipient: Address) -> BytesN<32> {
        commitment::commitment_key(&env, &secret_digest, &recipient)
    }

    /// Lock `amount` from `source` under `commitment` for `delta_blocks` ledgers.
    ///
    /// The recipient can withdraw up to and including ledger
    /// `current + delta_blocks`; the source can claim from the ledger after.
    pub fn send_funds(
        env: Env,
        source: Address,
        commitment: BytesN<32>,
        delta_blocks: u32,
        amount: i128,
    ) -> Result<PaymentRecord, Error> {
        access::require_active(&env)?;
        source.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if commitment::is_zero(&commitment) {
            return Err(Error::ZeroCommitment);
        }
        if delta_blocks == 0 || delta_blocks > storage::get_max_delta_blocks(&env) {
            return Err(Error::InvalidDeltaBlocks);
        }
        // A key is single-use: live or already redeemed, it cannot be locked again.
        if storage::has_payment(&env, &commitment) || storage::is_spent(&env, &commitment) {
            return Err(Error::CommitmentInUse);
        }

        let expiry_height = env
            .ledger()
            .sequence()
            .checked_add(delta_blocks)
            .ok_or(Error::InvalidDeltaBlocks)?;

        let record = PaymentRecord {
            source: source.clone(),
            amount,
            expiry_height,
        };
        storage::set_payment(&env, &commitment, &record);
        storage::set_total_locked(&env, storage::get_total_locked(&env) + amount);
        storage::extend_instance(&env);

        transfer(&env, &source, &env.current_contract_address(), amount)?;

        log!(&env, "payment locked", commitment, amount, expiry_height);
        events::emit_deposited(
            &env,
            PaymentDeposited {
                source,
                amount,
                expiry_height,
                commitment,
            },
        );

        Ok(record)
    }

    /// Redeem the payment locked for `recipient` under `secret_digest`.
    ///
    /// Returns the amount paid out.
    pub fn withdraw(env: Env, recipient: Address, secret_digest: BytesN<32>) -> Result<i128, Error> {
        access::require_active(&env)?;
        recipient.require_auth();

        if commitment::is_zero(&secret_digest) {
            return Err(Error::ZeroSecret);
        }

        let key = commitment::commitment_key(&env, &secret_digest, &recipient);
        let record = storage::get_payment(&env, &key).ok_or(Error::PaymentNotFound)?;

        if env.ledger().sequence() > record.expiry_height {
            return Err(Error::PaymentExpired);
        }

        release(&env, &key, &record, &recipient)?;

        log!(&env, "payment withdrawn", key, record.amount);
        events::emit_withdrawn(
            &env,
            PaymentWithdrawn {
                recipient,
                amount: record.amount,
                commitment: key,
            },
        );

        Ok(record.amount)
    }

    /// Refund an expired payment to its source.
    ///
    /// Returns the amount refunded.
    pub fn claim(env: Env, source: Address, commitment: BytesN<32>) -> Result<i128, Error> {
        access::require_active(&env)?;
        source.require_auth();

        if commitment::is_zero(&commitment) {
            return Err(Error::ZeroCommitment);
        }

        let record = storage::get_payment(&env, &commitment).ok_or(Error::PaymentNotFound)?;

        if record.source != source {
            return Err(Error::NotSource);
        }
        if env.ledger().sequence() <= record.expiry_height {
            return Err(Error::PaymentNotExpired);
        }

        release(&env, &commitment, &record, &source)?;

        log!(&env, "payment claimed", commitment, record.amount);
        events::emit_claimed(
            &env,
            PaymentClaimed {
                source,
                amount: record.amount,
                commitment,
            },
        );

        Ok(record.amount)
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        access::set_paused(&env, &caller, true)?;
        storage::extend_instance(&env);

        log!(&env, "contract paused", caller);
        events::emit_gate_toggled(&env, true, GateToggled { owner: caller });
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        access::set_paused(&env, &caller, false)?;
        storage::extend_instance(&env);

        log!(&env, "contract unpaused", caller);
        events::emit_gate_toggled(&env, false, GateToggled { owner: caller });
        Ok(())
    }

    /// Hand the owner role to `new_owner`. Owner-only.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        let previous_owner = access::transfer_ownership(&env, &caller, &new_owner)?;
        storage::extend_instance(&env);

        log!(&env, "ownership transferred", previous_owner, new_owner);
        events::emit_ownership_transferred(
            &env,
            OwnershipTransferred {
                previous_owner,
                new_owner,
            },
        );
        Ok(())
    }

    /// Keep the storage entry for `commitment` from being archived.
    ///
    /// Bumps the live payment, or the spent marker of a redeemed one so the
    /// key keeps being refused by `send_funds`. Touches no value, so it stays
    /// available while the contract is paused.
    pub fn extend_payment_ttl(env: Env, commitment: BytesN<32>) -> Result<(), Error> {
        if !storage::extend_commitment(&env, &commitment) {
            return Err(Error::PaymentNotFound);
        }
        Ok(())
    }

    pub fn max_delta_blocks(env: Env) -> u32 {
        storage::get_max_delta_blocks(&env)
    }

    /// The payment locked under `commitment`, if it has not been redeemed.
    pub fn payments(env: Env, commitment: BytesN<32>) -> Option<PaymentRecord> {
        storage::get_payment(&env, &commitment)
    }

    pub fn owner(env: Env) -> Address {
        storage::get_access(&env).owner
    }

    pub fn is_paused(env: Env) -> bool {
        storage::get_access(&env).paused
    }

    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }

    /// Sum of all live payments, i.e. what the contract holds for depositors.
    pub fn total_locked(env: Env) -> i128 {
        storage::get_total_locked(&env)
    }
}

/// Retire the record, then pay it out.
///
/// The record is gone before the token contract is called, so a re-entrant
/// call finds nothing to redeem. If the payout fails the error aborts the
/// invocation and the host restores the record.
fn release(
    env: &Env,
    commitment: &BytesN<32>,
    record: &PaymentRecord,
    to: &Address,
) -> Result<(), Error> {
    storage::retire_payment(env, commitment);
    storage::set_total_locked(env, storage::get_total_locked(env) - record.amount);
    storage::extend_instance(env);

    transfer(env, &env.current_contract_address(), to, record.amount)
}

fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let token_client = TokenClient::new(env, &storage::get_token(env));
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}
