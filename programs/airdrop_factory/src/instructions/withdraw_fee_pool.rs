use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::debit_lamports;

/**
 * Account context for releasing the fee pool balance
 *
 * Releases everything the pool has collected (registration fees plus the
 * pool half of claim fees) to the pool owner and resets the accumulator.
 * The rent reserve stays on the account. Idempotent: a second call moves
 * zero.
 *
 * Access Control: fee pool owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawFeePool<'info> {
    /// The fee pool account
    #[account(
        mut,
        seeds = [FEE_POOL_SEED.as_bytes()],
        bump = fee_pool.bump,
        constraint = fee_pool.owner == owner.key() @ AirdropFactoryError::OnlyOwner
    )]
    pub fee_pool: Account<'info, FeePool>,

    /// The fee pool owner, receives the lamports
    #[account(mut)]
    pub owner: Signer<'info>,
}

pub fn handle_withdraw_fee_pool(ctx: Context<WithdrawFeePool>) -> Result<()> {
    let amount = ctx.accounts.fee_pool.total_collected;
    ctx.accounts.fee_pool.total_collected = 0;

    debit_lamports(
        &ctx.accounts.fee_pool.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    emit_cpi!(FeePoolWithdrawn {
        fee_pool: ctx.accounts.fee_pool.key(),
        owner: ctx.accounts.owner.key(),
        amount,
    });

    Ok(())
}
