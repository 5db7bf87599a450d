use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::instructions::claim_score::pay_reward;
use crate::state::*;

/**
 * Account context for delivering an inbound score message
 *
 * The transport endpoint, having verified message authenticity on its own
 * side, delivers the opaque payload here. Three gates apply before any
 * state changes: the delivery must be signed by the configured transport
 * authority, the (source_chain, source_sender) lane must be allowlisted,
 * and the inbound receipt PDA must be fresh (its creation fails on
 * redelivery, turning the transport's at-least-once into exactly-once
 * accrual).
 *
 * If the payload asks for local redemption, the payout happens in the same
 * transaction, with no separate claim from the user; the reward accounts
 * must then be supplied.
 *
 * Access Control: transport authority only
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(source_chain: u64, source_sender: Pubkey, message_nonce: u64)]
pub struct ReceiveScore<'info> {
    /// The receiver distributor
    #[account(
        constraint = distributor.role == DistributorRole::Receiver @ AirdropFactoryError::WrongDistributorRole
    )]
    pub distributor: Account<'info, Distributor>,

    /// Allowlist lane for (source_chain, source_sender)
    /// - A lane that was never created fails account resolution: fail closed
    /// - Derived from: ["allowlist", distributor_key, chain_le, counterparty]
    #[account(
        seeds = [
            ALLOWLIST_SEED.as_bytes(),
            distributor.key().as_ref(),
            source_chain.to_le_bytes().as_ref(),
            source_sender.as_ref()
        ],
        bump
    )]
    pub lane: Account<'info, AllowlistLane>,

    /// Replay receipt for this exact message identity
    /// - init fails on a second delivery of the same message
    /// - Derived from: ["inbox", distributor_key, chain_le, sender, nonce_le]
    #[account(
        init,
        payer = transport_authority,
        space = InboundReceipt::LEN,
        seeds = [
            INBOX_SEED.as_bytes(),
            distributor.key().as_ref(),
            source_chain.to_le_bytes().as_ref(),
            source_sender.as_ref(),
            message_nonce.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub inbound_receipt: Account<'info, InboundReceipt>,

    /// Account named in the payload
    /// CHECK: must match the decoded payload account
    pub account: AccountInfo<'info>,

    /// Score ledger entry credited by the message
    /// - Derived from: ["score", distributor_key, account]
    #[account(
        init_if_needed,
        payer = transport_authority,
        space = ScoreState::LEN,
        seeds = [SCORE_SEED.as_bytes(), distributor.key().as_ref(), account.key().as_ref()],
        bump
    )]
    pub score_state: Account<'info, ScoreState>,

    /// The transport endpoint delivering the message
    #[account(
        mut,
        constraint = transport_authority.key() == distributor.transport_authority @ AirdropFactoryError::OnlyTransportAuthority
    )]
    pub transport_authority: Signer<'info>,

    /// Reward vault; required when the payload asks for local redemption
    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub reward_vault: Option<InterfaceAccount<'info, TokenAccount>>,

    /// The account's token account for local redemption
    #[account(
        mut,
        token::mint = distributor.reward_token_mint,
        token::authority = account,
        token::token_program = token_program,
    )]
    pub recipient_token_account: Option<InterfaceAccount<'info, TokenAccount>>,

    /// The reward token mint for transfer_checked validation
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.reward_token_mint @ AirdropFactoryError::TokenMintMismatch
    )]
    pub token_mint: Option<InterfaceAccount<'info, Mint>>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program, used only for the local-redemption payout
    pub token_program: Option<Interface<'info, TokenInterface>>,
}

/**
 * Delivers an inbound score-transfer message
 *
 * @param source_chain - Chain id the message originates from
 * @param source_sender - Sender distributor address on that chain
 * @param message_nonce - Sequence number assigned by the source outbox
 * @param payload - Opaque transport bytes; must decode to a ScorePayload
 */
pub fn handle_receive_score(
    ctx: Context<ReceiveScore>,
    source_chain: u64,
    source_sender: Pubkey,
    message_nonce: u64,
    payload: Vec<u8>,
) -> Result<()> {
    // ===== VALIDATION PHASE =====

    require!(
        ctx.accounts.lane.allowed,
        AirdropFactoryError::SourceChainSenderNotAllowlisted
    );

    let decoded = ScorePayload::decode(&payload)?;
    require_keys_eq!(
        decoded.account,
        ctx.accounts.account.key(),
        AirdropFactoryError::InvalidScorePayload
    );

    // ===== EFFECTS PHASE (State Updates) =====

    let inbound_receipt = &mut ctx.accounts.inbound_receipt;
    inbound_receipt.source_chain = source_chain;
    inbound_receipt.source_sender = source_sender;
    inbound_receipt.nonce = message_nonce;
    inbound_receipt.amount = decoded.amount;

    let score_state = &mut ctx.accounts.score_state;
    score_state.amount = score_state
        .amount
        .checked_add(decoded.amount)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?;

    emit_cpi!(ScoreReceived {
        distributor: ctx.accounts.distributor.key(),
        source_chain,
        source_sender,
        account: decoded.account,
        amount: decoded.amount,
        redeemed_locally: decoded.redeem_locally,
    });

    // ===== INTERACTIONS PHASE (optional local redemption) =====

    if decoded.redeem_locally {
        require!(
            ctx.accounts.distributor.reward_token_is_set(),
            AirdropFactoryError::RewardTokenNotSet
        );
        let reward_vault = ctx
            .accounts
            .reward_vault
            .as_ref()
            .ok_or(AirdropFactoryError::RewardAccountsMissing)?;
        let recipient_token_account = ctx
            .accounts
            .recipient_token_account
            .as_ref()
            .ok_or(AirdropFactoryError::RewardAccountsMissing)?;
        let token_mint = ctx
            .accounts
            .token_mint
            .as_ref()
            .ok_or(AirdropFactoryError::RewardAccountsMissing)?;
        let token_program = ctx
            .accounts
            .token_program
            .as_ref()
            .ok_or(AirdropFactoryError::RewardAccountsMissing)?;

        let (paid, remaining) = pay_reward(
            &ctx.accounts.distributor,
            &mut ctx.accounts.score_state,
            reward_vault,
            recipient_token_account,
            token_mint,
            token_program,
        )?;

        emit_cpi!(RewardPaid {
            distributor: ctx.accounts.distributor.key(),
            account: decoded.account,
            amount_paid: paid,
            remaining_score: remaining,
        });
    }

    Ok(())
}
