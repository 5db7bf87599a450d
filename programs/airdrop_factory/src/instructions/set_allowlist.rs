use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for toggling an allowlist lane
 *
 * One shared context serves both named operations: senders allowlist
 * (destination chain, destination receiver) lanes, receivers allowlist
 * (source chain, source sender) lanes. The lane also carries the owner's
 * quote of the transport fee for a send on it.
 *
 * Lanes default to absent, and absent means denied: fail closed.
 *
 * Access Control: distributor owner only
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(chain: u64, counterparty: Pubkey)]
pub struct SetAllowlist<'info> {
    /// The distributor whose allowlist is being edited
    #[account(
        constraint = distributor.owner == owner.key() @ AirdropFactoryError::OnlyOwner
    )]
    pub distributor: Account<'info, Distributor>,

    /// The allowlist lane (PDA)
    /// - Derived from: ["allowlist", distributor_key, chain_le, counterparty]
    #[account(
        init_if_needed,
        payer = owner,
        space = AllowlistLane::LEN,
        seeds = [
            ALLOWLIST_SEED.as_bytes(),
            distributor.key().as_ref(),
            chain.to_le_bytes().as_ref(),
            counterparty.as_ref()
        ],
        bump
    )]
    pub lane: Account<'info, AllowlistLane>,

    /// The distributor owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

fn update_lane(
    ctx: Context<SetAllowlist>,
    chain: u64,
    counterparty: Pubkey,
    allowed: bool,
    fee: u64,
    required_role: DistributorRole,
) -> Result<()> {
    require!(
        ctx.accounts.distributor.role == required_role,
        AirdropFactoryError::WrongDistributorRole
    );

    let lane = &mut ctx.accounts.lane;
    lane.allowed = allowed;
    lane.fee = fee;

    emit_cpi!(AllowlistUpdated {
        distributor: ctx.accounts.distributor.key(),
        chain,
        counterparty,
        allowed,
        fee,
    });

    Ok(())
}

/// Sender side: permits (or revokes) sends to `counterparty` on `chain`
pub fn handle_set_allowlist_destination_chain_sender(
    ctx: Context<SetAllowlist>,
    chain: u64,
    counterparty: Pubkey,
    allowed: bool,
    fee: u64,
) -> Result<()> {
    update_lane(ctx, chain, counterparty, allowed, fee, DistributorRole::Sender)
}

/// Receiver side: permits (or revokes) deliveries from `counterparty` on
/// `chain`
pub fn handle_set_allowlist_source_chain_sender(
    ctx: Context<SetAllowlist>,
    chain: u64,
    counterparty: Pubkey,
    allowed: bool,
    fee: u64,
) -> Result<()> {
    update_lane(ctx, chain, counterparty, allowed, fee, DistributorRole::Receiver)
}
