use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

/// Hashes a claim-set leaf
///
/// Leaf encoding is the wire contract with the off-chain tree builder and
/// the published claim artifact: SHA-256 over
/// `index_le(8) || account(32) || amount_le(8)`. Bit-for-bit compatibility
/// with the builder is required; this is not a free design choice.
pub fn hash_leaf(index: u64, account: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[
        &index.to_le_bytes(),
        &account.to_bytes(),
        &amount.to_le_bytes(),
    ])
    .to_bytes()
}

/// Verifies a merkle inclusion proof
///
/// Recomputes the path from `leaf` to the root, combining each pair in
/// sorted order (smaller hash on the left) so proofs carry no position
/// bits. Returns true only if the recomputed root matches exactly.
pub fn verify(proof: Vec<[u8; 32]>, root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed_hash = leaf;
    for proof_element in proof.into_iter() {
        if computed_hash <= proof_element {
            computed_hash = hashv(&[&computed_hash, &proof_element]).to_bytes();
        } else {
            computed_hash = hashv(&[&proof_element, &computed_hash]).to_bytes();
        }
    }
    computed_hash == root
}
