use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Derive the commitment key a payment is locked under.
///
/// The key is `keccak256(secret_digest || xdr(recipient))`. The recipient is
/// public, so the key is only as hard to forge as `secret_digest` is to guess.
pub fn commitment_key(env: &Env, secret_digest: &BytesN<32>, recipient: &Address) -> BytesN<32> {
    let mut preimage = Bytes::from_array(env, &secret_digest.to_array());
    preimage.append(&recipient.clone().to_xdr(env));
    env.crypto().keccak256(&preimage).into()
}

pub fn is_zero(value: &BytesN<32>) -> bool {
    value.to_array() == [0u8; 32]
}
