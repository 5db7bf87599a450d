use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::{AirdropKind, DistributorRole};

/**
 * Airdrop Factory Program
 *
 * A Solana program for deploying merkle-verified token airdrops from a
 * shared template registry, with optional linear vesting and cross-chain
 * reward-score accrual.
 *
 * Key Features:
 * - Template registry: named claim policies with per-template fee and
 *   score parameters, managed by the factory owner
 * - Deterministic deployment: instance addresses derive from
 *   (template_name, salt), so they are computable before the transaction
 *   and a pair can never deploy twice
 * - Merkle tree-based claim verification over (index, account, amount)
 *   leaves, with permissionless claim relaying
 * - Two claim policies: one-shot Standard and LinearVesting with
 *   continuous release
 * - Fee plumbing: exact-match registration and claim fees, claim fees
 *   split between a protocol fee pool and the instance owner
 * - Score distribution: claims credit a per-account score ledger; a
 *   sender distributor dispatches scores over a generic cross-chain
 *   transport and a receiver redeems them for tokens, with deliberate
 *   partial fills when under-funded
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Factory + FeePool PDAs: singleton registry anchor and fee custody
 * - Template PDAs: one registry entry per name, zeroed on removal
 * - Airdrop PDAs: per-deployment state with a token vault
 * - ClaimReceipt PDAs: per-leaf-index claim record (the claimed bitmap)
 * - Distributor PDAs: sender/receiver score campaigns with per-account
 *   ScoreState PDAs, allowlist lanes, and outbox/inbox message PDAs
 *
 * Workflow:
 * 1. Factory owner registers templates with their fee parameters
 * 2. Issuers deploy airdrop instances (optionally depositing tokens and
 *    wiring a distributor) for an exact registration fee
 * 3. Users (or relayers) claim with merkle proofs and the exact claim
 *    fee; claims atomically credit the wired distributor's score ledger
 * 4. Scores travel cross-chain: send zeroes the local ledger and creates
 *    an outbox message; the transport delivers it to the receiver, which
 *    accrues it exactly once and pays out on claim (or immediately, for
 *    redeem-locally messages)
 * 5. Owners withdraw vault remainders and collected fees at any time
 */
#[program]
pub mod airdrop_factory {
    use super::*;

    /**
     * Initializes the factory and the fee pool singletons
     *
     * The signer becomes the factory owner; the supplied fee authority
     * becomes the fee pool owner.
     *
     * Access Control: first caller (the PDAs can only be created once)
     */
    pub fn initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
        handle_initialize_factory(ctx)
    }

    /**
     * Registers a template under a 32-byte name
     *
     * A live name cannot be re-registered; after removal the name is free
     * again. Fee and score parameters are fixed per template.
     *
     * Access Control: factory owner only
     */
    pub fn add_template(
        ctx: Context<AddTemplate>,
        name: [u8; 32],
        kind: AirdropKind,
        registration_fee: u64,
        claim_fee: u64,
        score_ratio_bps: u16,
    ) -> Result<()> {
        handle_add_template(ctx, name, kind, registration_fee, claim_fee, score_ratio_bps)
    }

    /**
     * Removes a template, zeroing its registry entry
     *
     * Idempotent: removing a name that is not registered is a no-op, so
     * operators can defensively remove names that were never added.
     *
     * Access Control: factory owner only
     */
    pub fn remove_template(ctx: Context<RemoveTemplate>, name: [u8; 32]) -> Result<()> {
        handle_remove_template(ctx, name)
    }

    /**
     * Deploys an airdrop instance from a registered template
     *
     * The instance address derives deterministically from
     * (template_name, salt). Collects the exact registration fee into the
     * fee pool and optionally pulls an initial deposit into the fresh
     * vault. Emits AirdropDeployed, the discovery event for the address.
     *
     * Access Control: anyone
     */
    #[allow(clippy::too_many_arguments)]
    pub fn deploy_airdrop(
        ctx: Context<DeployAirdrop>,
        template_name: [u8; 32],
        salt: [u8; 32],
        merkle_root: [u8; 32],
        vesting_duration: i64,
        deposit_amount: u64,
        registration_fee: u64,
        distributor: Pubkey,
    ) -> Result<()> {
        handle_deploy_airdrop(
            ctx,
            template_name,
            salt,
            merkle_root,
            vesting_duration,
            deposit_amount,
            registration_fee,
            distributor,
        )
    }

    /**
     * Claims tokens with merkle proof verification
     *
     * The (index, account, amount) leaf is caller-supplied and validated
     * by the proof alone; the payout goes to `account` regardless of who
     * pays, so relaying is permissionless. Standard instances pay the
     * full leaf once; LinearVesting instances pay the newly vested slice.
     * Credits the wired distributor's score ledger atomically.
     *
     * Access Control: any payer with a valid merkle proof
     */
    pub fn claim(
        ctx: Context<Claim>,
        index: u64,
        amount: u64,
        proof: Vec<[u8; 32]>,
        claim_fee: u64,
    ) -> Result<()> {
        handle_claim(ctx, index, amount, proof, claim_fee)
    }

    /**
     * Tops up an airdrop vault after deployment
     *
     * Anyone may fund an instance; an under-funded instance rejects
     * claims until its vault covers them.
     *
     * Access Control: anyone
     */
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        handle_deposit(ctx, amount)
    }

    /**
     * Withdraws the remaining vault balance to the airdrop owner
     *
     * Access Control: airdrop owner only
     */
    pub fn withdraw_deposited_token(ctx: Context<WithdrawDepositedToken>) -> Result<()> {
        handle_withdraw_deposited_token(ctx)
    }

    /**
     * Collects the claim fees accrued on the airdrop instance
     *
     * Access Control: airdrop owner only
     */
    pub fn withdraw_claim_fee(ctx: Context<WithdrawClaimFee>) -> Result<()> {
        handle_withdraw_claim_fee(ctx)
    }

    /**
     * Releases the fee pool balance to the fee pool owner
     *
     * Access Control: fee pool owner only
     */
    pub fn withdraw_fee_pool(ctx: Context<WithdrawFeePool>) -> Result<()> {
        handle_withdraw_fee_pool(ctx)
    }

    /**
     * Initializes a sender- or receiver-role distributor
     *
     * Nonce numbers are auto-assigned per owner, so one owner can run any
     * number of campaigns.
     *
     * Access Control: the signer becomes the owner
     */
    pub fn initialize_distributor(
        ctx: Context<InitializeDistributor>,
        role: DistributorRole,
    ) -> Result<()> {
        handle_initialize_distributor(ctx, role)
    }

    /**
     * Allowlists (or revokes) a destination lane for a sender
     *
     * Also records the owner's quote of the transport fee for the lane.
     * Lanes are fail-closed: anything not explicitly allowed is denied.
     *
     * Access Control: distributor owner only
     */
    pub fn set_allowlist_destination_chain_sender(
        ctx: Context<SetAllowlist>,
        chain: u64,
        counterparty: Pubkey,
        allowed: bool,
        fee: u64,
    ) -> Result<()> {
        handle_set_allowlist_destination_chain_sender(ctx, chain, counterparty, allowed, fee)
    }

    /**
     * Allowlists (or revokes) a source lane for a receiver
     *
     * Access Control: distributor owner only
     */
    pub fn set_allowlist_source_chain_sender(
        ctx: Context<SetAllowlist>,
        chain: u64,
        counterparty: Pubkey,
        allowed: bool,
        fee: u64,
    ) -> Result<()> {
        handle_set_allowlist_source_chain_sender(ctx, chain, counterparty, allowed, fee)
    }

    /**
     * Dispatches an account's full score cross-chain, fee in lamports
     *
     * Zeroes the local score before the message is created; the message
     * carries exactly the pre-call amount.
     *
     * Access Control: permissionless trigger
     */
    pub fn send_score_pay_native(
        ctx: Context<SendScorePayNative>,
        dest_chain: u64,
        dest_receiver: Pubkey,
        redeem_locally: bool,
        fee: u64,
    ) -> Result<()> {
        handle_send_score_pay_native(ctx, dest_chain, dest_receiver, redeem_locally, fee)
    }

    /**
     * Dispatches an account's full score cross-chain, fee in an SPL token
     *
     * Access Control: permissionless trigger
     */
    pub fn send_score_pay_token(
        ctx: Context<SendScorePayToken>,
        dest_chain: u64,
        dest_receiver: Pubkey,
        redeem_locally: bool,
        fee: u64,
    ) -> Result<()> {
        handle_send_score_pay_token(ctx, dest_chain, dest_receiver, redeem_locally, fee)
    }

    /**
     * Delivers an inbound score message from the transport
     *
     * Gated on the configured transport-authority signer, the source-lane
     * allowlist, and a fresh replay receipt. Accrues the payload amount
     * and, for redeem-locally messages, pays out immediately.
     *
     * Access Control: transport authority only
     */
    pub fn receive_score(
        ctx: Context<ReceiveScore>,
        source_chain: u64,
        source_sender: Pubkey,
        message_nonce: u64,
        payload: Vec<u8>,
    ) -> Result<()> {
        handle_receive_score(ctx, source_chain, source_sender, message_nonce, payload)
    }

    /**
     * Redeems an account's accrued score for reward tokens
     *
     * Pays min(score, vault balance): an under-funded receiver partially
     * fills and keeps the shortfall on the ledger.
     *
     * Access Control: permissionless trigger
     */
    pub fn claim_score(ctx: Context<ClaimScore>) -> Result<()> {
        handle_claim_score(ctx)
    }

    /**
     * Binds the receiver's reward token, exactly once
     *
     * Access Control: distributor owner only
     */
    pub fn set_reward_token(ctx: Context<SetRewardToken>) -> Result<()> {
        handle_set_reward_token(ctx)
    }

    /**
     * Credits a score directly, outside the claim pipeline
     *
     * Access Control: distributor owner only
     */
    pub fn rescue_score(ctx: Context<RescueScore>, amount: u64) -> Result<()> {
        handle_rescue_score(ctx, amount)
    }

    /**
     * Sweeps reward tokens out of the receiver's vault
     *
     * Access Control: distributor owner only
     */
    pub fn withdraw_reward_token(ctx: Context<WithdrawRewardToken>, amount: u64) -> Result<()> {
        handle_withdraw_reward_token(ctx, amount)
    }
}
