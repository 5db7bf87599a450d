use anchor_lang::prelude::*;

/**
 * Factory configuration account
 *
 * Singleton PDA that anchors the template registry and names the owner
 * allowed to mutate it.
 *
 * Derivation: ["factory"]
 */
#[account]
#[derive(Default, Debug)]
pub struct Factory {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Owner of the factory
    /// - Only this key may add or remove templates
    pub owner: Pubkey,
}

impl Factory {
    pub const LEN: usize = 8 + std::mem::size_of::<Factory>();
}

/**
 * Fee pool account
 *
 * Singleton PDA that custodies protocol fees as lamports held on the PDA
 * itself: the full registration fee of every deployment plus half of every
 * claim fee. Releasable only by its owner.
 *
 * Derivation: ["fee_pool"]
 */
#[account]
#[derive(Default, Debug)]
pub struct FeePool {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Owner of the fee pool
    /// - Only this key may release collected fees
    pub owner: Pubkey,

    /// Lamports collected and not yet released
    /// - Tracked separately from the account balance so the rent-exempt
    ///   reserve is never swept
    pub total_collected: u64,
}

impl FeePool {
    pub const LEN: usize = 8 + std::mem::size_of::<FeePool>();
}

/// Claim policy implemented by a template
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AirdropKind {
    /// One-shot claim: each leaf index pays out exactly once, in full
    #[default]
    Standard,
    /// Linear time-vesting: each leaf releases continuously over a fixed
    /// duration starting at deployment
    LinearVesting,
}

/**
 * Template registry entry
 *
 * One PDA per 32-byte template name. An entry is zeroed on removal rather
 * than closed, so a name can be re-registered after removal but never
 * while live.
 *
 * Derivation: ["template", name]
 */
#[account]
#[derive(Default, Debug)]
pub struct Template {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// 32-byte template name (registry key)
    pub name: [u8; 32],

    /// Claim policy deployed instances will enforce
    pub kind: AirdropKind,

    /// Exact lamport fee required to deploy from this template
    /// - Forwarded to the fee pool on deployment
    pub registration_fee: u64,

    /// Exact lamport fee required for every claim on deployed instances
    /// - Split half to the fee pool, half retained by the instance owner
    pub claim_fee: u64,

    /// Score credited per claimed token, in basis points
    pub score_ratio_bps: u16,

    /// Whether the entry is live
    /// - false after removal (or for a defensively-removed name that was
    ///   never registered)
    pub registered: bool,
}

impl Template {
    pub const LEN: usize = 8 + std::mem::size_of::<Template>();

    /// Resets the entry to the unregistered state
    pub fn clear(&mut self) {
        let bump = self.bump;
        let name = self.name;
        *self = Template::default();
        self.bump = bump;
        self.name = name;
    }
}
