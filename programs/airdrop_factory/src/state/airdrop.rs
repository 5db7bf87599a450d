use anchor_lang::prelude::*;

use crate::error::AirdropFactoryError;
use crate::state::AirdropKind;

/**
 * Airdrop instance account
 *
 * One PDA per deployment, created through the factory. The derivation from
 * (template_name, salt) is the deterministic-address scheme: the address
 * is computable off-chain before the deployment transaction, and a second
 * deployment with the same pair fails because the account already exists.
 *
 * Derivation: ["airdrop", template_name, salt]
 *
 * Lifecycle:
 * 1. Created and fully configured by deploy_airdrop (merkle root, token,
 *    vesting schedule are immutable afterwards; no setters exist)
 * 2. Mutated only by claim (claim totals, collected fees)
 * 3. Never closed; only logically drained
 */
#[account]
#[derive(Default, Debug)]
pub struct Airdrop {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Claim policy, copied from the template at deployment
    pub kind: AirdropKind,

    /// Template this instance was deployed from (also a PDA seed)
    pub template_name: [u8; 32],

    /// Deployment salt (also a PDA seed)
    pub salt: [u8; 32],

    /// Owner of the instance
    /// - May withdraw the vault balance and collected claim fees
    pub owner: Pubkey,

    /// Token mint being distributed
    pub token_mint: Pubkey,

    /// Token vault holding the distributable balance
    /// - Authority is this PDA
    /// - Derived from: ["vault", airdrop_key]
    pub token_vault: Pubkey,

    /// Merkle root committing to the full {index, account, amount} set
    /// - Immutable after deployment
    pub merkle_root: [u8; 32],

    /// Vesting start (deployment timestamp); LinearVesting only, 0 otherwise
    pub vesting_start: i64,

    /// Vesting duration in seconds; LinearVesting only, 0 otherwise
    pub vesting_duration: i64,

    /// Distributor credited on every successful claim
    /// - Pubkey::default() when no distributor is wired
    pub distributor: Pubkey,

    /// Exact lamport fee required per claim, copied from the template
    pub claim_fee: u64,

    /// Score credited per claimed token in basis points, copied from the
    /// template
    pub score_ratio_bps: u16,

    /// Total tokens paid out across all claims
    pub total_claimed: u64,

    /// Lamports accrued from the owner half of claim fees
    pub collected_claim_fee: u64,
}

impl Airdrop {
    pub const LEN: usize = 8 + std::mem::size_of::<Airdrop>();

    /// Whether a distributor is wired to this instance
    pub fn has_distributor(&self) -> bool {
        self.distributor != Pubkey::default()
    }

    /// Amount of a leaf's total that has vested at `now`
    ///
    /// Linear release: total * min(now - vesting_start, duration) / duration,
    /// clamped to [0, total]. Monotonic in `now`; equals `total` once the
    /// schedule has fully elapsed. Standard instances vest everything
    /// immediately.
    pub fn vested_amount(&self, total: u64, now: i64) -> Result<u64> {
        match self.kind {
            AirdropKind::Standard => Ok(total),
            AirdropKind::LinearVesting => {
                if now <= self.vesting_start {
                    return Ok(0);
                }
                let elapsed = now - self.vesting_start;
                if elapsed >= self.vesting_duration {
                    return Ok(total);
                }
                let vested = (total as u128)
                    .checked_mul(elapsed as u128)
                    .ok_or(AirdropFactoryError::ArithmeticOverflow)?
                    / self.vesting_duration as u128;
                Ok(vested as u64)
            }
        }
    }
}
