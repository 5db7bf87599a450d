use anchor_lang::prelude::*;

/// Which side of the cross-chain pair a distributor plays
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistributorRole {
    /// Accrues scores from claims and dispatches them cross-chain
    #[default]
    Sender,
    /// Accrues scores from inbound messages and redeems them for tokens
    Receiver,
}

/**
 * Distributor configuration account
 *
 * One per campaign, sender or receiver role. Both roles keep an
 * independent score ledger (ScoreState PDAs); the role gates which
 * operations are available on top of it.
 *
 * Derivation: ["distributor", owner, nonce_le]
 * - Nonce is auto-assigned from the owner's NonceState counter
 */
#[account]
#[derive(Default, Debug)]
pub struct Distributor {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Nonce number for this distributor
    /// - Allows multiple distributors for the same owner
    pub nonce: u32,

    /// Sender or Receiver
    pub role: DistributorRole,

    /// Owner of the distributor
    /// - Controls allowlists, token binding, rescue and withdrawal
    pub owner: Pubkey,

    /// Signer the transport uses to deliver inbound messages
    /// - The trust anchor for receive_score; the transport verifies
    ///   message authenticity before invoking us
    pub transport_authority: Pubkey,

    /// Account the transport's send fee is paid to
    pub transport_fee_collector: Pubkey,

    /// Reward token mint (receiver side)
    /// - Pubkey::default() until set_reward_token; bound exactly once
    pub reward_token_mint: Pubkey,

    /// Reward vault holding the redeemable balance
    /// - Created together with the token binding
    /// - Derived from: ["reward_vault", distributor_key]
    pub reward_vault: Pubkey,

    /// Counter for outbound message PDA derivation
    /// - Incremented on every send; each message gets a fresh address
    pub outbound_nonce: u64,
}

impl Distributor {
    pub const LEN: usize = 8 + std::mem::size_of::<Distributor>();

    pub fn reward_token_is_set(&self) -> bool {
        self.reward_token_mint != Pubkey::default()
    }
}

/**
 * Score ledger entry
 *
 * Map entry `account -> score` for one distributor. Increases only via a
 * claim credit or an owner rescue; decreases only by a successful send
 * (sender) or a reward payout (receiver), by exactly the amount moved.
 *
 * Derivation: ["score", distributor_key, account]
 */
#[account]
#[derive(Default, Debug)]
pub struct ScoreState {
    /// Current score balance for the account
    pub amount: u64,
}

impl ScoreState {
    pub const LEN: usize = 8 + std::mem::size_of::<ScoreState>();
}

/**
 * Allowlist lane
 *
 * One PDA per (distributor, chain, counterparty). Senders key lanes by
 * destination chain and destination receiver; receivers by source chain
 * and source sender. A lane that does not exist, or exists with
 * `allowed == false`, rejects traffic: fail closed.
 *
 * The `fee` field is the owner-maintained quote of the transport fee for
 * the lane, the stand-in for the transport's getFee.
 *
 * Derivation: ["allowlist", distributor_key, chain_le, counterparty]
 */
#[account]
#[derive(Default, Debug)]
pub struct AllowlistLane {
    /// Whether traffic on this lane is permitted
    pub allowed: bool,

    /// Exact transport fee required for a send on this lane
    pub fee: u64,
}

impl AllowlistLane {
    pub const LEN: usize = 8 + std::mem::size_of::<AllowlistLane>();
}
