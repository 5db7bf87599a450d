use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for initializing a distributor
 *
 * Creates a sender- or receiver-role distributor with automatic nonce
 * management: an owner-specific counter assigns the next nonce, so one
 * owner can run any number of campaigns without choosing addresses.
 *
 * Access Control: owner only (the signer becomes the owner)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeDistributor<'info> {
    /// Nonce state account (PDA) tracking this owner's counter
    /// - Derived from: ["owner_nonce", owner]
    #[account(
        init_if_needed,
        payer = owner,
        space = NonceState::LEN,
        seeds = [OWNER_NONCE_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub owner_nonce: Account<'info, NonceState>,

    /// The distributor config account (PDA)
    /// - Derived from: ["distributor", owner, current_nonce]
    /// - Nonce is automatically determined from owner_nonce.nonce + 1
    #[account(
        init,
        payer = owner,
        space = Distributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            owner.key().as_ref(),
            (owner_nonce.nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    /// The owner of the distributor
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Signer the transport will use to deliver inbound messages
    /// CHECK: validated by storing its key in the distributor state
    pub transport_authority: AccountInfo<'info>,

    /// Account the transport's send fee is paid to
    /// CHECK: validated by storing its key in the distributor state
    pub transport_fee_collector: AccountInfo<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize_distributor(
    ctx: Context<InitializeDistributor>,
    role: DistributorRole,
) -> Result<()> {
    require!(
        ctx.accounts.transport_authority.key() != Pubkey::default(),
        AirdropFactoryError::InvalidOwner
    );

    let owner_nonce = &mut ctx.accounts.owner_nonce;
    let distributor = &mut ctx.accounts.distributor;

    let current_nonce = owner_nonce
        .nonce
        .checked_add(1)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
    owner_nonce.nonce = current_nonce;

    distributor.bump = ctx.bumps.distributor;
    distributor.nonce = current_nonce;
    distributor.role = role;
    distributor.owner = ctx.accounts.owner.key();
    distributor.transport_authority = ctx.accounts.transport_authority.key();
    distributor.transport_fee_collector = ctx.accounts.transport_fee_collector.key();
    // reward_token_mint, reward_vault and outbound_nonce start unset/zero

    emit_cpi!(DistributorInitialized {
        distributor: distributor.key(),
        nonce: current_nonce,
        role,
        owner: ctx.accounts.owner.key(),
        transport_authority: ctx.accounts.transport_authority.key(),
    });

    Ok(())
}
