use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for initializing the factory
 *
 * Creates the two singletons the rest of the program hangs off:
 * - the factory config, which anchors the template registry
 * - the fee pool, which custodies protocol fees
 *
 * The transaction signer becomes the factory owner; a separately supplied
 * fee authority becomes the fee pool owner, so fee custody can be split
 * from registry control.
 *
 * Access Control: first caller wins; the PDAs can only be created once
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    /// The factory config account (PDA)
    /// - Derived from: ["factory"]
    #[account(
        init,
        payer = authority,
        space = Factory::LEN,
        seeds = [FACTORY_SEED.as_bytes()],
        bump
    )]
    pub factory: Account<'info, Factory>,

    /// The fee pool account (PDA)
    /// - Lamport fees accrue on this account on top of its rent reserve
    /// - Derived from: ["fee_pool"]
    #[account(
        init,
        payer = authority,
        space = FeePool::LEN,
        seeds = [FEE_POOL_SEED.as_bytes()],
        bump
    )]
    pub fee_pool: Account<'info, FeePool>,

    /// The signer initializing the factory; becomes the factory owner
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The account that will own the fee pool
    /// CHECK: validated by storing its key in the fee pool state
    pub fee_authority: AccountInfo<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
    require!(
        ctx.accounts.fee_authority.key() != Pubkey::default(),
        AirdropFactoryError::InvalidOwner
    );

    let factory = &mut ctx.accounts.factory;
    factory.bump = ctx.bumps.factory;
    factory.owner = ctx.accounts.authority.key();

    let fee_pool = &mut ctx.accounts.fee_pool;
    fee_pool.bump = ctx.bumps.fee_pool;
    fee_pool.owner = ctx.accounts.fee_authority.key();
    fee_pool.total_collected = 0;

    emit_cpi!(FactoryInitialized {
        factory: factory.key(),
        owner: factory.owner,
        fee_pool: fee_pool.key(),
        fee_pool_owner: fee_pool.owner,
    });

    Ok(())
}
