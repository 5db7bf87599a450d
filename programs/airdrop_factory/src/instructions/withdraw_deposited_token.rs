use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for withdrawing the deposited tokens
 *
 * Sweeps the instance vault's entire remaining balance to the owner.
 * Idempotent: a second call finds an empty vault and moves nothing. The
 * vault and the instance stay open; airdrops are never destroyed, only
 * drained.
 *
 * Access Control: airdrop owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawDepositedToken<'info> {
    /// The airdrop instance to withdraw from
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault holding the remaining balance
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account receiving the sweep
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for transfer_checked validation
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropFactoryError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The airdrop owner
    #[account(
        constraint = owner.key() == airdrop.owner @ AirdropFactoryError::OnlyOwner
    )]
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_withdraw_deposited_token(ctx: Context<WithdrawDepositedToken>) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;
    let remaining_balance = ctx.accounts.token_vault.amount;

    if remaining_balance > 0 {
        let seeds = &[
            AIRDROP_SEED.as_bytes(),
            airdrop.template_name.as_ref(),
            airdrop.salt.as_ref(),
            &[airdrop.bump],
        ];
        let signer = &[&seeds[..]];

        transfer_token(
            ctx.accounts.airdrop.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.owner_token_account.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            remaining_balance,
            ctx.accounts.token_mint.decimals,
            Some(signer),
        )?;
    }

    emit_cpi!(DepositWithdrawn {
        airdrop: airdrop.key(),
        owner: ctx.accounts.owner.key(),
        amount: remaining_balance,
    });

    Ok(())
}
