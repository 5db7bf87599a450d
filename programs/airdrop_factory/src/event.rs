use anchor_lang::prelude::*;

use crate::state::{AirdropKind, DistributorRole};

/// Event emitted when the factory and fee pool are initialized
#[event]
pub struct FactoryInitialized {
    /// The factory config account public key
    pub factory: Pubkey,
    /// Owner of the factory (controls the template registry)
    pub owner: Pubkey,
    /// The fee pool account public key
    pub fee_pool: Pubkey,
    /// Owner of the fee pool (may release collected fees)
    pub fee_pool_owner: Pubkey,
}

/// Event emitted when a template is registered
#[event]
pub struct TemplateAdded {
    /// 32-byte template name
    pub name: [u8; 32],
    /// Claim policy implemented by the template
    pub kind: AirdropKind,
    /// Exact lamport fee required to deploy from this template
    pub registration_fee: u64,
    /// Exact lamport fee required per claim
    pub claim_fee: u64,
    /// Score credited per claimed token, in basis points
    pub score_ratio_bps: u16,
}

/// Event emitted when a template is removed (entry zeroed)
#[event]
pub struct TemplateRemoved {
    /// 32-byte template name
    pub name: [u8; 32],
}

/// Event emitted when a new airdrop instance is deployed
///
/// This is the discovery channel: callers learn the instance address here
/// without recomputing the PDA derivation.
#[event]
pub struct AirdropDeployed {
    /// Template the instance was deployed from
    pub template_name: [u8; 32],
    /// Salt used for address derivation
    pub salt: [u8; 32],
    /// The new airdrop instance account public key
    pub airdrop: Pubkey,
    /// Owner of the instance
    pub owner: Pubkey,
    /// Token mint being distributed
    pub token_mint: Pubkey,
    /// Merkle root committing to the claim set
    pub merkle_root: [u8; 32],
    /// Tokens deposited into the vault at deployment
    pub deposit_amount: u64,
    /// Registration fee forwarded to the fee pool
    pub registration_fee: u64,
}

/// Event emitted when tokens are claimed from an airdrop
#[event]
pub struct TokensClaimed {
    /// The airdrop instance public key
    pub airdrop: Pubkey,
    /// Leaf index that was claimed
    pub index: u64,
    /// Recipient of the tokens (the leaf account, not the payer)
    pub account: Pubkey,
    /// Amount paid out in this transaction
    pub amount_claimed: u64,
    /// Leaf total for this index
    pub leaf_amount: u64,
    /// Total paid out by the airdrop across all claims
    pub total_claimed: u64,
    /// Score credited to the distributor ledger, zero if none configured
    pub score_credited: u64,
}

/// Event emitted when an airdrop vault is topped up after deployment
#[event]
pub struct TokensDeposited {
    /// The airdrop instance public key
    pub airdrop: Pubkey,
    /// Account that funded the vault
    pub depositor: Pubkey,
    /// Amount of tokens deposited
    pub amount: u64,
}

/// Event emitted when the airdrop owner sweeps the vault
#[event]
pub struct DepositWithdrawn {
    /// The airdrop instance public key
    pub airdrop: Pubkey,
    /// Owner who withdrew
    pub owner: Pubkey,
    /// Amount of tokens withdrawn
    pub amount: u64,
}

/// Event emitted when the airdrop owner collects accrued claim fees
#[event]
pub struct ClaimFeeWithdrawn {
    /// The airdrop instance public key
    pub airdrop: Pubkey,
    /// Owner who withdrew
    pub owner: Pubkey,
    /// Lamports withdrawn
    pub amount: u64,
}

/// Event emitted when the fee pool owner releases collected fees
#[event]
pub struct FeePoolWithdrawn {
    /// The fee pool account public key
    pub fee_pool: Pubkey,
    /// Owner who released the fees
    pub owner: Pubkey,
    /// Lamports released
    pub amount: u64,
}

/// Event emitted when a distributor (sender or receiver) is initialized
#[event]
pub struct DistributorInitialized {
    /// The distributor config account public key
    pub distributor: Pubkey,
    /// Nonce of the distributor
    pub nonce: u32,
    /// Sender or Receiver
    pub role: DistributorRole,
    /// Owner of the distributor
    pub owner: Pubkey,
    /// Signer trusted to deliver inbound transport messages
    pub transport_authority: Pubkey,
}

/// Event emitted when an allowlist lane is toggled
#[event]
pub struct AllowlistUpdated {
    /// The distributor config account public key
    pub distributor: Pubkey,
    /// Chain id of the lane
    pub chain: u64,
    /// Counterparty address on that chain
    pub counterparty: Pubkey,
    /// New allowlist state
    pub allowed: bool,
    /// Quoted transport fee for the lane
    pub fee: u64,
}

/// Event emitted when a score is credited to a distributor ledger
#[event]
pub struct ScoreAdded {
    /// The distributor config account public key
    pub distributor: Pubkey,
    /// Account whose score increased
    pub account: Pubkey,
    /// Score credited
    pub amount: u64,
    /// New ledger balance for the account
    pub new_score: u64,
}

/// Event emitted when a score is dispatched cross-chain
#[event]
pub struct ScoreSent {
    /// The sender distributor public key
    pub distributor: Pubkey,
    /// The outbound message account (the message id)
    pub message: Pubkey,
    /// Destination chain id
    pub dest_chain: u64,
    /// Receiver address on the destination chain
    pub dest_receiver: Pubkey,
    /// Account whose score was sent
    pub account: Pubkey,
    /// Exact score amount carried by the message
    pub amount: u64,
    /// Whether the destination should pay out immediately on delivery
    pub redeem_locally: bool,
    /// Transport fee collected
    pub fee_paid: u64,
}

/// Event emitted when an inbound score message is delivered
#[event]
pub struct ScoreReceived {
    /// The receiver distributor public key
    pub distributor: Pubkey,
    /// Source chain id
    pub source_chain: u64,
    /// Sender address on the source chain
    pub source_sender: Pubkey,
    /// Account credited
    pub account: Pubkey,
    /// Score accrued from the message
    pub amount: u64,
    /// Whether an immediate payout was attempted
    pub redeemed_locally: bool,
}

/// Event emitted when a reward payout happens (claim or local redemption)
#[event]
pub struct RewardPaid {
    /// The receiver distributor public key
    pub distributor: Pubkey,
    /// Account paid
    pub account: Pubkey,
    /// Tokens transferred; may be less than the score when the vault is
    /// under-funded (deliberate partial fill)
    pub amount_paid: u64,
    /// Score remaining after the payout
    pub remaining_score: u64,
}

/// Event emitted when the owner manually credits a score
#[event]
pub struct ScoreRescued {
    /// The distributor config account public key
    pub distributor: Pubkey,
    /// Account credited
    pub account: Pubkey,
    /// Score credited
    pub amount: u64,
}

/// Event emitted when the receiver's reward token is bound
#[event]
pub struct RewardTokenSet {
    /// The distributor config account public key
    pub distributor: Pubkey,
    /// The one-time bound reward token mint
    pub token_mint: Pubkey,
    /// The reward vault created for it
    pub reward_vault: Pubkey,
}

/// Event emitted when the owner sweeps the reward vault
#[event]
pub struct RewardTokenWithdrawn {
    /// The distributor config account public key
    pub distributor: Pubkey,
    /// Owner who withdrew
    pub owner: Pubkey,
    /// Amount of tokens withdrawn
    pub amount: u64,
}
