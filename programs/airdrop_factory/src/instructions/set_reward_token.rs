use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for binding the receiver's reward token
 *
 * One-time operation: the redemption token is fixed for the distributor's
 * lifetime once chosen. Creates the reward vault alongside the binding.
 *
 * Access Control: distributor owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetRewardToken<'info> {
    /// The receiver distributor
    #[account(
        mut,
        constraint = distributor.owner == owner.key() @ AirdropFactoryError::OnlyOwner,
        constraint = distributor.role == DistributorRole::Receiver @ AirdropFactoryError::WrongDistributorRole
    )]
    pub distributor: Account<'info, Distributor>,

    /// Reward vault for the bound token (PDA)
    /// - Authority is the distributor PDA
    /// - Derived from: ["reward_vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [REWARD_VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    /// The reward token mint
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The distributor owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

pub fn handle_set_reward_token(ctx: Context<SetRewardToken>) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    require!(
        !distributor.reward_token_is_set(),
        AirdropFactoryError::TokenAlreadySet
    );

    distributor.reward_token_mint = ctx.accounts.token_mint.key();
    distributor.reward_vault = ctx.accounts.reward_vault.key();

    emit_cpi!(RewardTokenSet {
        distributor: distributor.key(),
        token_mint: ctx.accounts.token_mint.key(),
        reward_vault: ctx.accounts.reward_vault.key(),
    });

    Ok(())
}
