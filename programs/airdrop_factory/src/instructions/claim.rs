use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{derived_score, hash_leaf, split_claim_fee, transfer_lamports, transfer_token, verify};

/**
 * Account context for claiming from an airdrop instance
 *
 * The leaf (index, account, amount) is caller-supplied and validated only
 * by the merkle proof; `account` does not sign. Anyone may relay a claim —
 * the payout always lands in `account`'s token account, never the payer's,
 * so permissionless relaying is safe.
 *
 * When the instance was deployed with a distributor, the distributor and
 * score ledger accounts must be passed along: the claim credits the score
 * in the same transaction as the token transfer.
 *
 * Access Control: any payer with a valid merkle proof
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct Claim<'info> {
    /// The airdrop instance being claimed from
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// Per-index claim receipt
    /// - Created on first claim for the index; never closed
    /// - Derived from: ["claim", airdrop_key, index_le]
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimReceipt::LEN,
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), index.to_le_bytes().as_ref()],
        bump
    )]
    pub claim_receipt: Account<'info, ClaimReceipt>,

    /// Token vault holding the distributable balance
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The leaf account the tokens belong to; does not need to sign
    /// CHECK: validated as part of the merkle leaf
    pub account: AccountInfo<'info>,

    /// The leaf account's token account, receives the payout
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = account,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for transfer_checked validation
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropFactoryError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The fee pool receiving its half of the claim fee
    #[account(
        mut,
        seeds = [FEE_POOL_SEED.as_bytes()],
        bump = fee_pool.bump
    )]
    pub fee_pool: Account<'info, FeePool>,

    /// The relayer paying the claim fee and the receipt rent
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Distributor credited on this claim
    /// - Required exactly when the airdrop was deployed with one
    pub distributor: Option<Account<'info, Distributor>>,

    /// Score ledger entry for (distributor, account)
    /// - Derived from: ["score", airdrop.distributor, account]
    #[account(
        init_if_needed,
        payer = payer,
        space = ScoreState::LEN,
        seeds = [SCORE_SEED.as_bytes(), airdrop.distributor.as_ref(), account.key().as_ref()],
        bump
    )]
    pub score_state: Option<Account<'info, ScoreState>>,

    /// System program for account creation and fee transfer
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim under either claim policy
 *
 * @param index - Leaf index in the claim set
 * @param amount - Leaf total for the index
 * @param proof - Sibling hashes from the leaf up to the merkle root
 * @param claim_fee - Lamports offered; must equal the instance fee exactly
 *
 * Precondition checks run in a fixed order, each with its own error:
 * 1. receipt not terminal            -> AlreadyClaimed
 * 2. exact fee                       -> IncorrectAmount
 * 3. merkle proof                    -> InvalidProof
 * 4. vested delta > 0 (vesting only) -> NothingToClaim
 * 5. vault covers the payout         -> AmountNotEnough
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    index: u64,
    amount: u64,
    proof: Vec<[u8; 32]>,
    claim_fee: u64,
) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;
    let claim_receipt = &mut ctx.accounts.claim_receipt;

    // ===== VALIDATION PHASE =====

    // (1) Terminal state: the index has been fully claimed
    require!(!claim_receipt.claimed, AirdropFactoryError::AlreadyClaimed);

    // (2) Exact-match fee; any over- or under-payment is rejected
    require!(
        claim_fee == airdrop.claim_fee,
        AirdropFactoryError::IncorrectAmount
    );

    // (3) Merkle inclusion of the caller-supplied leaf
    let leaf = hash_leaf(index, &ctx.accounts.account.key(), amount);
    require!(
        verify(proof, airdrop.merkle_root, leaf),
        AirdropFactoryError::InvalidProof
    );

    // (4) How much is payable right now: the full leaf for Standard, the
    // newly vested slice for LinearVesting. A zero delta is the transient
    // nothing-accrued-yet state, distinct from the terminal AlreadyClaimed.
    let now = Clock::get()?.unix_timestamp;
    let vested = airdrop.vested_amount(amount, now)?;
    let pending_amount = vested
        .checked_sub(claim_receipt.claimed_amount)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
    require!(pending_amount > 0, AirdropFactoryError::NothingToClaim);

    // (5) Vault must cover the payout
    require!(
        ctx.accounts.token_vault.amount >= pending_amount,
        AirdropFactoryError::AmountNotEnough
    );

    // ===== EFFECTS PHASE (State Updates) =====

    // Mark the claim before any transfer (CEI ordering)
    let new_claimed_amount = claim_receipt
        .claimed_amount
        .checked_add(pending_amount)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
    claim_receipt.claimed_amount = new_claimed_amount;
    claim_receipt.claimed = new_claimed_amount == amount;

    let new_total_claimed = airdrop
        .total_claimed
        .checked_add(pending_amount)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
    airdrop.total_claimed = new_total_claimed;

    // Fee split: rounded-down half to the pool, remainder to the instance
    let (pool_half, owner_half) = split_claim_fee(claim_fee);
    ctx.accounts.fee_pool.total_collected = ctx
        .accounts
        .fee_pool
        .total_collected
        .checked_add(pool_half)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
    airdrop.collected_claim_fee = airdrop
        .collected_claim_fee
        .checked_add(owner_half)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?;

    // Distributor credit, atomic with the claim. Only airdrop accounts
    // created through deploy_airdrop exist under this program, so passing
    // the airdrop account is itself the deployed-by-factory check.
    let mut score_credited = 0u64;
    if airdrop.has_distributor() {
        let distributor = ctx
            .accounts
            .distributor
            .as_ref()
            .ok_or(AirdropFactoryError::DistributorAccountMissing)?;
        require_keys_eq!(
            distributor.key(),
            airdrop.distributor,
            AirdropFactoryError::DistributorMismatch
        );
        let score_state = ctx
            .accounts
            .score_state
            .as_mut()
            .ok_or(AirdropFactoryError::DistributorAccountMissing)?;

        score_credited = derived_score(pending_amount, airdrop.score_ratio_bps)?;
        if score_credited > 0 {
            let new_score = score_state
                .amount
                .checked_add(score_credited)
                .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
            score_state.amount = new_score;

            emit_cpi!(ScoreAdded {
                distributor: distributor.key(),
                account: ctx.accounts.account.key(),
                amount: score_credited,
                new_score,
            });
        }
    }

    // Prepare immutable copies for PDA signing
    let template_name = airdrop.template_name;
    let salt = airdrop.salt;
    let airdrop_bump = airdrop.bump;
    let airdrop_key = airdrop.key();

    // ===== INTERACTIONS PHASE =====

    // Claim fee from the payer: half to the pool, half to the instance
    transfer_lamports(
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.fee_pool.to_account_info(),
        pool_half,
    )?;
    transfer_lamports(
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.airdrop.to_account_info(),
        owner_half,
    )?;

    // Token payout from vault to the leaf account
    let seeds = &[
        AIRDROP_SEED.as_bytes(),
        template_name.as_ref(),
        salt.as_ref(),
        &[airdrop_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.airdrop.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        pending_amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(TokensClaimed {
        airdrop: airdrop_key,
        index,
        account: ctx.accounts.account.key(),
        amount_claimed: pending_amount,
        leaf_amount: amount,
        total_claimed: new_total_claimed,
        score_credited,
    });

    Ok(())
}
