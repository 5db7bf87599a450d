use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{transfer_lamports, transfer_token};

/**
 * Account context for dispatching a score cross-chain, transport fee paid
 * in lamports
 *
 * The send is the sender-side half of the cross-chain consistency
 * contract: the account's local score is zeroed BEFORE the message is
 * created, and the message carries exactly the pre-call score. Delivery
 * may be delayed or retried by the transport; neither can double-spend,
 * because the sender ledger was already debited.
 *
 * Access Control: permissionless trigger; the score can only travel to its
 * own account, so a third party paying the fee is harmless
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(dest_chain: u64, dest_receiver: Pubkey)]
pub struct SendScorePayNative<'info> {
    /// The sender distributor
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// Score ledger entry being sent
    /// - Derived from: ["score", distributor_key, account]
    #[account(
        mut,
        seeds = [SCORE_SEED.as_bytes(), distributor.key().as_ref(), account.key().as_ref()],
        bump
    )]
    pub score_state: Account<'info, ScoreState>,

    /// Allowlist lane for (dest_chain, dest_receiver)
    /// - A lane that was never created fails account resolution: fail closed
    /// - Derived from: ["allowlist", distributor_key, chain_le, counterparty]
    #[account(
        seeds = [
            ALLOWLIST_SEED.as_bytes(),
            distributor.key().as_ref(),
            dest_chain.to_le_bytes().as_ref(),
            dest_receiver.as_ref()
        ],
        bump
    )]
    pub lane: Account<'info, AllowlistLane>,

    /// The outbound message (PDA), picked up by the transport
    /// - Derived from: ["outbox", distributor_key, nonce_le]
    #[account(
        init,
        payer = payer,
        space = OutboundMessage::LEN,
        seeds = [
            OUTBOX_SEED.as_bytes(),
            distributor.key().as_ref(),
            (distributor.outbound_nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub outbound_message: Account<'info, OutboundMessage>,

    /// Account whose score is being sent
    /// CHECK: only used as a ledger key; funds never flow to it here
    pub account: AccountInfo<'info>,

    /// The transport's fee collector
    /// CHECK: validated against the distributor configuration
    #[account(
        mut,
        constraint = fee_collector.key() == distributor.transport_fee_collector @ AirdropFactoryError::DistributorMismatch
    )]
    pub fee_collector: AccountInfo<'info>,

    /// The caller paying the transport fee and the message rent
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation and fee transfer
    pub system_program: Program<'info, System>,
}

/**
 * Account context for dispatching a score cross-chain, transport fee paid
 * in an SPL token
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(dest_chain: u64, dest_receiver: Pubkey)]
pub struct SendScorePayToken<'info> {
    /// The sender distributor
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// Score ledger entry being sent
    #[account(
        mut,
        seeds = [SCORE_SEED.as_bytes(), distributor.key().as_ref(), account.key().as_ref()],
        bump
    )]
    pub score_state: Account<'info, ScoreState>,

    /// Allowlist lane for (dest_chain, dest_receiver)
    #[account(
        seeds = [
            ALLOWLIST_SEED.as_bytes(),
            distributor.key().as_ref(),
            dest_chain.to_le_bytes().as_ref(),
            dest_receiver.as_ref()
        ],
        bump
    )]
    pub lane: Account<'info, AllowlistLane>,

    /// The outbound message (PDA)
    #[account(
        init,
        payer = payer,
        space = OutboundMessage::LEN,
        seeds = [
            OUTBOX_SEED.as_bytes(),
            distributor.key().as_ref(),
            (distributor.outbound_nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub outbound_message: Account<'info, OutboundMessage>,

    /// Account whose score is being sent
    /// CHECK: only used as a ledger key
    pub account: AccountInfo<'info>,

    /// Mint the transport fee is denominated in
    #[account(
        token::token_program = token_program,
    )]
    pub fee_token_mint: InterfaceAccount<'info, Mint>,

    /// Payer's token account the fee is pulled from
    #[account(
        mut,
        token::mint = fee_token_mint,
        token::authority = payer,
        token::token_program = token_program,
    )]
    pub payer_fee_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The transport fee collector's token account
    #[account(
        mut,
        token::mint = fee_token_mint,
        token::token_program = token_program,
        constraint = collector_fee_token_account.owner == distributor.transport_fee_collector @ AirdropFactoryError::DistributorMismatch
    )]
    pub collector_fee_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The caller paying the transport fee and the message rent
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Shared validation + ledger debit + message construction
///
/// The score is zeroed before the message exists, so a delayed or retried
/// delivery can never double-spend the sender ledger. Keep this order.
#[allow(clippy::too_many_arguments)]
fn prepare_send(
    distributor: &mut Account<Distributor>,
    score_state: &mut Account<ScoreState>,
    lane: &Account<AllowlistLane>,
    outbound_message: &mut Account<OutboundMessage>,
    account: Pubkey,
    dest_chain: u64,
    dest_receiver: Pubkey,
    redeem_locally: bool,
    fee: u64,
) -> Result<u64> {
    require!(
        distributor.role == DistributorRole::Sender,
        AirdropFactoryError::WrongDistributorRole
    );
    require!(
        score_state.amount > 0,
        AirdropFactoryError::NotEligibleForReward
    );
    require!(
        lane.allowed,
        AirdropFactoryError::DestinationChainSenderNotAllowlisted
    );
    // A fee mismatch fails the whole call; there is no partial send
    require!(fee == lane.fee, AirdropFactoryError::IncorrectAmount);

    let amount = score_state.amount;
    score_state.amount = 0;

    let nonce = distributor
        .outbound_nonce
        .checked_add(1)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
    distributor.outbound_nonce = nonce;

    outbound_message.sender = distributor.key();
    outbound_message.nonce = nonce;
    outbound_message.dest_chain = dest_chain;
    outbound_message.dest_receiver = dest_receiver;
    outbound_message.payload = ScorePayload {
        account,
        amount,
        redeem_locally,
    };
    outbound_message.fee_paid = fee;

    Ok(amount)
}

pub fn handle_send_score_pay_native(
    ctx: Context<SendScorePayNative>,
    dest_chain: u64,
    dest_receiver: Pubkey,
    redeem_locally: bool,
    fee: u64,
) -> Result<()> {
    let amount = prepare_send(
        &mut ctx.accounts.distributor,
        &mut ctx.accounts.score_state,
        &ctx.accounts.lane,
        &mut ctx.accounts.outbound_message,
        ctx.accounts.account.key(),
        dest_chain,
        dest_receiver,
        redeem_locally,
        fee,
    )?;

    transfer_lamports(
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.fee_collector.to_account_info(),
        fee,
    )?;

    emit_cpi!(ScoreSent {
        distributor: ctx.accounts.distributor.key(),
        message: ctx.accounts.outbound_message.key(),
        dest_chain,
        dest_receiver,
        account: ctx.accounts.account.key(),
        amount,
        redeem_locally,
        fee_paid: fee,
    });

    Ok(())
}

pub fn handle_send_score_pay_token(
    ctx: Context<SendScorePayToken>,
    dest_chain: u64,
    dest_receiver: Pubkey,
    redeem_locally: bool,
    fee: u64,
) -> Result<()> {
    let amount = prepare_send(
        &mut ctx.accounts.distributor,
        &mut ctx.accounts.score_state,
        &ctx.accounts.lane,
        &mut ctx.accounts.outbound_message,
        ctx.accounts.account.key(),
        dest_chain,
        dest_receiver,
        redeem_locally,
        fee,
    )?;

    if fee > 0 {
        transfer_token(
            ctx.accounts.payer.to_account_info(),
            ctx.accounts.payer_fee_token_account.to_account_info(),
            ctx.accounts.collector_fee_token_account.to_account_info(),
            ctx.accounts.fee_token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            fee,
            ctx.accounts.fee_token_mint.decimals,
            None, // payer-signed transfer
        )?;
    }

    emit_cpi!(ScoreSent {
        distributor: ctx.accounts.distributor.key(),
        message: ctx.accounts.outbound_message.key(),
        dest_chain,
        dest_receiver,
        account: ctx.accounts.account.key(),
        amount,
        redeem_locally,
        fee_paid: fee,
    });

    Ok(())
}
