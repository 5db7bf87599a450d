use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{payout_amount, transfer_token};

/**
 * Account context for redeeming an accrued score for tokens
 *
 * Pays out min(score, reward vault balance): an under-funded receiver pays
 * what it can and leaves the shortfall on the ledger for a later claim
 * after top-up. The partial fill is a success path, not an error.
 *
 * Access Control: permissionless trigger; the payout always goes to the
 * score's own account
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimScore<'info> {
    /// The receiver distributor
    #[account(
        constraint = distributor.role == DistributorRole::Receiver @ AirdropFactoryError::WrongDistributorRole,
        constraint = distributor.reward_token_is_set() @ AirdropFactoryError::RewardTokenNotSet
    )]
    pub distributor: Account<'info, Distributor>,

    /// Score ledger entry being redeemed
    /// - Derived from: ["score", distributor_key, account]
    #[account(
        mut,
        seeds = [SCORE_SEED.as_bytes(), distributor.key().as_ref(), account.key().as_ref()],
        bump
    )]
    pub score_state: Account<'info, ScoreState>,

    /// Account whose score is being redeemed; does not need to sign
    /// CHECK: payout goes to this account's token account only
    pub account: AccountInfo<'info>,

    /// Reward vault holding the redeemable balance
    /// - Derived from: ["reward_vault", distributor_key]
    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    /// The account's token account, receives the payout
    #[account(
        mut,
        token::mint = distributor.reward_token_mint,
        token::authority = account,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The reward token mint for transfer_checked validation
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.reward_token_mint @ AirdropFactoryError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Debits the ledger and moves tokens out of the reward vault
///
/// Returns (amount paid, score remaining). Shared by claim_score and the
/// local-redemption path of receive_score. The ledger is debited before
/// the transfer.
pub(crate) fn pay_reward<'info>(
    distributor: &Account<'info, Distributor>,
    score_state: &mut Account<'info, ScoreState>,
    reward_vault: &InterfaceAccount<'info, TokenAccount>,
    recipient_token_account: &InterfaceAccount<'info, TokenAccount>,
    token_mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
) -> Result<(u64, u64)> {
    let paid = payout_amount(score_state.amount, reward_vault.amount);
    let remaining = score_state
        .amount
        .checked_sub(paid)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
    score_state.amount = remaining;

    if paid > 0 {
        let owner_key = distributor.owner;
        let nonce_bytes = distributor.nonce.to_le_bytes();
        let seeds = &[
            DISTRIBUTOR_SEED.as_bytes(),
            owner_key.as_ref(),
            nonce_bytes.as_ref(),
            &[distributor.bump],
        ];
        let signer = &[&seeds[..]];

        transfer_token(
            distributor.to_account_info(),
            reward_vault.to_account_info(),
            recipient_token_account.to_account_info(),
            token_mint.to_account_info(),
            token_program.to_account_info(),
            paid,
            token_mint.decimals,
            Some(signer),
        )?;
    }

    Ok((paid, remaining))
}

pub fn handle_claim_score(ctx: Context<ClaimScore>) -> Result<()> {
    require!(
        ctx.accounts.score_state.amount > 0,
        AirdropFactoryError::NotEligibleForReward
    );

    let (paid, remaining) = pay_reward(
        &ctx.accounts.distributor,
        &mut ctx.accounts.score_state,
        &ctx.accounts.reward_vault,
        &ctx.accounts.recipient_token_account,
        &ctx.accounts.token_mint,
        &ctx.accounts.token_program,
    )?;

    emit_cpi!(RewardPaid {
        distributor: ctx.accounts.distributor.key(),
        account: ctx.accounts.account.key(),
        amount_paid: paid,
        remaining_score: remaining,
    });

    Ok(())
}
