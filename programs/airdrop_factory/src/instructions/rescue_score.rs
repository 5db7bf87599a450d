use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for a manual score correction
 *
 * Direct owner credit outside the claim pipeline, for operational
 * corrections (a lost message, a mis-sized credit). Works on either role.
 *
 * Access Control: distributor owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct RescueScore<'info> {
    /// The distributor whose ledger is being corrected
    #[account(
        constraint = distributor.owner == owner.key() @ AirdropFactoryError::OnlyOwner
    )]
    pub distributor: Account<'info, Distributor>,

    /// Account credited
    /// CHECK: only used as a ledger key
    pub account: AccountInfo<'info>,

    /// Score ledger entry
    /// - Derived from: ["score", distributor_key, account]
    #[account(
        init_if_needed,
        payer = owner,
        space = ScoreState::LEN,
        seeds = [SCORE_SEED.as_bytes(), distributor.key().as_ref(), account.key().as_ref()],
        bump
    )]
    pub score_state: Account<'info, ScoreState>,

    /// The distributor owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_rescue_score(ctx: Context<RescueScore>, amount: u64) -> Result<()> {
    require!(amount > 0, AirdropFactoryError::InvalidAmount);

    let score_state = &mut ctx.accounts.score_state;
    score_state.amount = score_state
        .amount
        .checked_add(amount)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?;

    emit_cpi!(ScoreRescued {
        distributor: ctx.accounts.distributor.key(),
        account: ctx.accounts.account.key(),
        amount,
    });

    Ok(())
}
