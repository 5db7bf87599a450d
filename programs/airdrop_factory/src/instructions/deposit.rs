use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for topping up an airdrop vault
 *
 * Moves tokens from the depositor into the instance vault after
 * deployment. Anyone may fund an airdrop; an under-funded instance
 * rejects claims with AmountNotEnough until topped up.
 *
 * Access Control: any depositor
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The airdrop instance being funded
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault receiving the deposit
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Depositor's token account the funds are pulled from
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = depositor,
        token::token_program = token_program,
    )]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for transfer_checked validation
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropFactoryError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The depositor authorizing the pull
    pub depositor: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, AirdropFactoryError::InvalidAmount);

    transfer_token(
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.depositor_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        None, // depositor-signed transfer
    )?;

    emit_cpi!(TokensDeposited {
        airdrop: ctx.accounts.airdrop.key(),
        depositor: ctx.accounts.depositor.key(),
        amount,
    });

    Ok(())
}
