use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for sweeping the reward vault
 *
 * Owner sweep of part or all of the reward vault balance, to any token
 * account of the owner's choosing.
 *
 * Access Control: distributor owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawRewardToken<'info> {
    /// The receiver distributor
    #[account(
        constraint = distributor.owner == owner.key() @ AirdropFactoryError::OnlyOwner,
        constraint = distributor.reward_token_is_set() @ AirdropFactoryError::RewardTokenNotSet
    )]
    pub distributor: Account<'info, Distributor>,

    /// Reward vault being swept
    /// - Derived from: ["reward_vault", distributor_key]
    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    /// Destination token account
    #[account(
        mut,
        token::mint = distributor.reward_token_mint,
        token::token_program = token_program,
    )]
    pub destination_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The reward token mint for transfer_checked validation
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.reward_token_mint @ AirdropFactoryError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The distributor owner
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_withdraw_reward_token(ctx: Context<WithdrawRewardToken>, amount: u64) -> Result<()> {
    require!(
        amount > 0 && amount <= ctx.accounts.reward_vault.amount,
        AirdropFactoryError::InvalidAmount
    );

    let distributor = &ctx.accounts.distributor;
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
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.destination_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(RewardTokenWithdrawn {
        distributor: distributor.key(),
        owner: ctx.accounts.owner.key(),
        amount,
    });

    Ok(())
}
