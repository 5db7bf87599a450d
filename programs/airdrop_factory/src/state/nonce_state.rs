use anchor_lang::prelude::*;

/**
 * Nonce state account
 *
 * Tracks the distributor counter for each owner, enabling automatic nonce
 * assignment when a new distributor is initialized.
 *
 * Derivation: ["owner_nonce", owner]
 *
 * Lifecycle:
 * 1. Created on the owner's first distributor (init_if_needed)
 * 2. Incremented with each new distributor
 * 3. Persistent across campaigns
 */
#[account]
#[derive(Default, Debug)]
pub struct NonceState {
    /// Increments with each distributor initialization
    /// - Ensures unique addresses for each owner's distributors
    pub nonce: u32,
}

impl NonceState {
    pub const LEN: usize = 8 + std::mem::size_of::<NonceState>();
}
