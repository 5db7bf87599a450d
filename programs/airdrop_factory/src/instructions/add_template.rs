use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for registering a template
 *
 * Registers a named claim policy plus its protocol parameters. A live name
 * cannot be re-registered; after removal (which zeroes the entry) the name
 * becomes available again, reusing the same PDA.
 *
 * Access Control: factory owner only
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(name: [u8; 32])]
pub struct AddTemplate<'info> {
    /// The factory config account
    #[account(
        seeds = [FACTORY_SEED.as_bytes()],
        bump = factory.bump,
        constraint = factory.owner == authority.key() @ AirdropFactoryError::OnlyFactoryOwner
    )]
    pub factory: Account<'info, Factory>,

    /// The template registry entry (PDA)
    /// - init_if_needed so a zeroed (removed) entry can be re-registered
    /// - Derived from: ["template", name]
    #[account(
        init_if_needed,
        payer = authority,
        space = Template::LEN,
        seeds = [TEMPLATE_SEED.as_bytes(), name.as_ref()],
        bump
    )]
    pub template: Account<'info, Template>,

    /// The factory owner
    #[account(mut)]
    pub authority: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_add_template(
    ctx: Context<AddTemplate>,
    name: [u8; 32],
    kind: AirdropKind,
    registration_fee: u64,
    claim_fee: u64,
    score_ratio_bps: u16,
) -> Result<()> {
    require!(name != [0; 32], AirdropFactoryError::TemplateNameEmpty);

    let template = &mut ctx.accounts.template;
    require!(
        !template.registered,
        AirdropFactoryError::TemplateAlreadyRegistered
    );

    template.bump = ctx.bumps.template;
    template.name = name;
    template.kind = kind;
    template.registration_fee = registration_fee;
    template.claim_fee = claim_fee;
    template.score_ratio_bps = score_ratio_bps;
    template.registered = true;

    emit_cpi!(TemplateAdded {
        name,
        kind,
        registration_fee,
        claim_fee,
        score_ratio_bps,
    });

    Ok(())
}
