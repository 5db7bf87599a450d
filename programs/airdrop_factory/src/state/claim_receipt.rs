use anchor_lang::prelude::*;

/**
 * Per-index claim receipt
 *
 * The per-leaf claimed record: the PDA-per-index equivalent of a claimed
 * bitmap. Standard instances flip `claimed` exactly once; LinearVesting
 * instances accumulate `claimed_amount` monotonically up to the leaf total
 * and set `claimed` once it is reached.
 *
 * Derivation: ["claim", airdrop_key, index_le]
 *
 * Lifecycle:
 * 1. Created on first claim for the index (init_if_needed)
 * 2. Updated by each subsequent vesting claim
 * 3. Never closed: closing would reset the record and re-enable the claim
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimReceipt {
    /// Terminal flag: the index is fully claimed
    /// - Monotonic false -> true, never reset
    pub claimed: bool,

    /// Cumulative amount paid out for the index
    /// - Monotonic non-decreasing, bounded by the leaf amount
    pub claimed_amount: u64,
}

impl ClaimReceipt {
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimReceipt>();
}
