use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines the constant values used throughout the airdrop
 * factory program: PDA seeds and the fixed denominator for fee/score
 * arithmetic. Protocol fee amounts are NOT constants here; they are
 * per-template parameters set by the factory owner at registration time.
 */

#[constant]
/// ===== ARITHMETIC CONSTANTS =====

/// Denominator for basis-point ratios
/// - `score_ratio_bps` on a template is expressed out of this value
/// - e.g. score_ratio_bps = 100 credits 1 score per 100 tokens claimed
pub const BPS_DENOMINATOR: u64 = 10_000;

/// ===== PDA SEED CONSTANTS =====

/// Seed for the singleton factory config PDA
/// - Used in: ["factory"]
pub const FACTORY_SEED: &str = "factory";

/// Seed for the singleton fee pool PDA
/// - Used in: ["fee_pool"]
/// - Custodies registration fees and the pool half of claim fees
pub const FEE_POOL_SEED: &str = "fee_pool";

/// Seed for template registry entry PDA derivation
/// - Used in: ["template", name]
/// - One entry per 32-byte template name
pub const TEMPLATE_SEED: &str = "template";

/// Seed for airdrop instance PDA derivation
/// - Used in: ["airdrop", template_name, salt]
/// - Deterministic: the address is computable before deployment, and the
///   same (template_name, salt) pair can never deploy twice
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for airdrop token vault PDA derivation
/// - Used in: ["vault", airdrop_key]
/// - Vault authority is the airdrop PDA itself
pub const VAULT_SEED: &str = "vault";

/// Seed for per-index claim receipt PDA derivation
/// - Used in: ["claim", airdrop_key, index_le]
/// - The per-leaf claimed flag; never closed, never reset
pub const CLAIM_SEED: &str = "claim";

/// Seed for owner nonce PDA derivation
/// - Used in: ["owner_nonce", owner]
/// - Auto-assigns nonces for an owner's distributors
pub const OWNER_NONCE_SEED: &str = "owner_nonce";

/// Seed for distributor config PDA derivation
/// - Used in: ["distributor", owner, nonce_le]
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for score ledger entry PDA derivation
/// - Used in: ["score", distributor_key, account]
pub const SCORE_SEED: &str = "score";

/// Seed for allowlist lane PDA derivation
/// - Used in: ["allowlist", distributor_key, chain_le, counterparty]
/// - A missing lane means not allowlisted (fail closed)
pub const ALLOWLIST_SEED: &str = "allowlist";

/// Seed for outbound message PDA derivation
/// - Used in: ["outbox", distributor_key, nonce_le]
/// - The cross-chain transport picks messages up from these accounts
pub const OUTBOX_SEED: &str = "outbox";

/// Seed for inbound message receipt PDA derivation
/// - Used in: ["inbox", distributor_key, chain_le, sender, nonce_le]
/// - Creation fails on redelivery, giving replay protection
pub const INBOX_SEED: &str = "inbox";

/// Seed for distributor reward vault PDA derivation
/// - Used in: ["reward_vault", distributor_key]
pub const REWARD_VAULT_SEED: &str = "reward_vault";
