use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{transfer_lamports, transfer_token};

/**
 * Account context for deploying an airdrop instance from a template
 *
 * The instance PDA is derived from (template_name, salt): its address is
 * computable before the transaction is sent, and deploying the same pair
 * twice fails at account creation because the address is already occupied.
 * That is the whole replay/duplicate protection; no extra bookkeeping.
 *
 * The exact registration fee is forwarded to the fee pool, and an optional
 * initial deposit is pulled from the deployer's token account into the
 * fresh vault within the same transaction.
 *
 * Access Control: anyone may deploy from a registered template
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(template_name: [u8; 32], salt: [u8; 32])]
pub struct DeployAirdrop<'info> {
    /// The factory config account
    #[account(
        seeds = [FACTORY_SEED.as_bytes()],
        bump = factory.bump
    )]
    pub factory: Account<'info, Factory>,

    /// The template registry entry to deploy from
    /// - Must be live; a zeroed (removed) entry fails with TemplateNotFound
    /// - Derived from: ["template", template_name]
    #[account(
        seeds = [TEMPLATE_SEED.as_bytes(), template_name.as_ref()],
        bump = template.bump
    )]
    pub template: Account<'info, Template>,

    /// The fee pool receiving the registration fee
    #[account(
        mut,
        seeds = [FEE_POOL_SEED.as_bytes()],
        bump = fee_pool.bump
    )]
    pub fee_pool: Account<'info, FeePool>,

    /// The new airdrop instance (PDA)
    /// - Derived from: ["airdrop", template_name, salt]
    /// - init fails if the (template_name, salt) pair was already deployed
    #[account(
        init,
        payer = deployer,
        space = Airdrop::LEN,
        seeds = [AIRDROP_SEED.as_bytes(), template_name.as_ref(), salt.as_ref()],
        bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault for the instance (PDA)
    /// - Authority is the airdrop PDA
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump,
        payer = deployer,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint being distributed
    /// - Supports both SPL Token and Token 2022
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Deployer's token account for the optional initial deposit
    /// - The deployer's signature on the transaction authorizes the pull
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = deployer,
        token::token_program = token_program,
    )]
    pub deployer_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The account that will own the new instance
    /// CHECK: validated by storing its key in the airdrop state
    pub owner: AccountInfo<'info>,

    /// The deployer paying rent, fees and the deposit
    #[account(mut)]
    pub deployer: Signer<'info>,

    /// System program for account creation and fee transfer
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Deploys a new airdrop instance
 *
 * @param template_name - Registry name of the template to instantiate
 * @param salt - Caller-chosen salt for deterministic address derivation
 * @param merkle_root - Commitment to the full {index, account, amount} set
 * @param vesting_duration - Seconds of linear release; must be 0 for
 *                           Standard templates and > 0 for LinearVesting
 * @param deposit_amount - Tokens pulled into the vault at deployment
 * @param registration_fee - Must equal the template's fee exactly
 * @param distributor - Distributor credited on claims; default() for none
 */
pub fn handle_deploy_airdrop(
    ctx: Context<DeployAirdrop>,
    template_name: [u8; 32],
    salt: [u8; 32],
    merkle_root: [u8; 32],
    vesting_duration: i64,
    deposit_amount: u64,
    registration_fee: u64,
    distributor: Pubkey,
) -> Result<()> {
    let template = &ctx.accounts.template;

    // ===== VALIDATION PHASE =====

    require!(template.registered, AirdropFactoryError::TemplateNotFound);

    // The fee check belongs to the template, not the factory: each template
    // carries its own exact price
    require!(
        registration_fee == template.registration_fee,
        AirdropFactoryError::IncorrectAmount
    );

    require!(
        ctx.accounts.owner.key() != Pubkey::default(),
        AirdropFactoryError::InvalidOwner
    );

    let now = Clock::get()?.unix_timestamp;
    let vesting_start = match template.kind {
        AirdropKind::Standard => {
            require!(
                vesting_duration == 0,
                AirdropFactoryError::InvalidVestingDuration
            );
            0
        }
        AirdropKind::LinearVesting => {
            require!(
                vesting_duration > 0,
                AirdropFactoryError::InvalidVestingDuration
            );
            now
        }
    };

    // ===== EFFECTS PHASE (State Updates) =====

    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.bump = ctx.bumps.airdrop;
    airdrop.kind = template.kind;
    airdrop.template_name = template_name;
    airdrop.salt = salt;
    airdrop.owner = ctx.accounts.owner.key();
    airdrop.token_mint = ctx.accounts.token_mint.key();
    airdrop.token_vault = ctx.accounts.token_vault.key();
    airdrop.merkle_root = merkle_root;
    airdrop.vesting_start = vesting_start;
    airdrop.vesting_duration = vesting_duration;
    airdrop.distributor = distributor;
    airdrop.claim_fee = template.claim_fee;
    airdrop.score_ratio_bps = template.score_ratio_bps;
    // total_claimed and collected_claim_fee start at zero

    let fee_pool = &mut ctx.accounts.fee_pool;
    fee_pool.total_collected = fee_pool
        .total_collected
        .checked_add(registration_fee)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?;

    // ===== INTERACTIONS PHASE =====

    transfer_lamports(
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.deployer.to_account_info(),
        ctx.accounts.fee_pool.to_account_info(),
        registration_fee,
    )?;

    if deposit_amount > 0 {
        transfer_token(
            ctx.accounts.deployer.to_account_info(),
            ctx.accounts.deployer_token_account.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            deposit_amount,
            ctx.accounts.token_mint.decimals,
            None, // deployer-signed transfer
        )?;
    }

    // Emit event for off-chain discovery of the instance address
    emit_cpi!(AirdropDeployed {
        template_name,
        salt,
        airdrop: ctx.accounts.airdrop.key(),
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        merkle_root,
        deposit_amount,
        registration_fee,
    });

    Ok(())
}
