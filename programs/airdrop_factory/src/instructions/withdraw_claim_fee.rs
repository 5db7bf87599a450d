use anchor_lang::prelude::*;

use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::debit_lamports;

/**
 * Account context for collecting accrued claim fees
 *
 * Moves the instance's `collected_claim_fee` lamports off the airdrop PDA
 * to the owner and resets the accumulator. Idempotent: a second call moves
 * zero. The fees sit on top of the PDA's rent reserve, which is never
 * touched.
 *
 * Access Control: airdrop owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawClaimFee<'info> {
    /// The airdrop instance holding the accrued fees
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// The airdrop owner, receives the lamports
    #[account(
        mut,
        constraint = owner.key() == airdrop.owner @ AirdropFactoryError::OnlyOwner
    )]
    pub owner: Signer<'info>,
}

pub fn handle_withdraw_claim_fee(ctx: Context<WithdrawClaimFee>) -> Result<()> {
    let amount = ctx.accounts.airdrop.collected_claim_fee;
    ctx.accounts.airdrop.collected_claim_fee = 0;

    debit_lamports(
        &ctx.accounts.airdrop.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    emit_cpi!(ClaimFeeWithdrawn {
        airdrop: ctx.accounts.airdrop.key(),
        owner: ctx.accounts.owner.key(),
        amount,
    });

    Ok(())
}
