use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for removing a template
 *
 * Zeroes the registry entry instead of closing it, freeing the name for
 * re-registration. Removal is idempotent: removing a name that is not
 * registered is a no-op, never an error, so operators can defensively
 * remove names that may never have been added.
 *
 * Access Control: factory owner only
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(name: [u8; 32])]
pub struct RemoveTemplate<'info> {
    /// The factory config account
    #[account(
        seeds = [FACTORY_SEED.as_bytes()],
        bump = factory.bump,
        constraint = factory.owner == authority.key() @ AirdropFactoryError::OnlyFactoryOwner
    )]
    pub factory: Account<'info, Factory>,

    /// The template registry entry (PDA)
    /// - init_if_needed keeps removal of a never-registered name a no-op
    ///   instead of an account-not-found failure
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

pub fn handle_remove_template(ctx: Context<RemoveTemplate>, name: [u8; 32]) -> Result<()> {
    let template = &mut ctx.accounts.template;

    // Idempotent: nothing to do for an entry that is not live
    if !template.registered {
        template.bump = ctx.bumps.template;
        template.name = name;
        return Ok(());
    }

    template.clear();

    emit_cpi!(TemplateRemoved { name });

    Ok(())
}
