use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::BPS_DENOMINATOR;
use crate::error::AirdropFactoryError;

/// Transfers lamports from a system-owned signer to any account
///
/// Recipients may be program-owned PDAs; the system program only restricts
/// the funding side.
pub fn transfer_lamports<'a>(
    system_program: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    transfer(
        CpiContext::new(system_program, Transfer { from, to }),
        amount,
    )
}

/// Moves lamports off a program-owned account by direct balance edit
///
/// Only valid for accounts owned by this program; callers must leave the
/// rent-exempt reserve intact (fee accumulators are tracked on top of it).
pub fn debit_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let from_balance = from.lamports();
    let new_from = from_balance
        .checked_sub(amount)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
    let new_to = to
        .lamports()
        .checked_add(amount)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
    **from.try_borrow_mut_lamports()? = new_from;
    **to.try_borrow_mut_lamports()? = new_to;
    Ok(())
}

/// Splits a claim fee into (fee pool half, instance owner half)
///
/// The pool gets the rounded-down half; the instance keeps the remainder,
/// so the two halves always sum to the exact fee.
pub fn split_claim_fee(fee: u64) -> (u64, u64) {
    let pool_half = fee / 2;
    (pool_half, fee - pool_half)
}

/// Score credited for a claimed token amount at a basis-point ratio
pub fn derived_score(amount: u64, ratio_bps: u16) -> Result<u64> {
    let score = (amount as u128)
        .checked_mul(ratio_bps as u128)
        .ok_or(AirdropFactoryError::ArithmeticOverflow)?
        / BPS_DENOMINATOR as u128;
    u64::try_from(score).map_err(|_| AirdropFactoryError::ArithmeticOverflow.into())
}

/// Reward actually payable right now: the partial-fill rule
///
/// An under-funded vault pays what it can; the shortfall stays on the
/// score ledger for a later claim.
pub fn payout_amount(score: u64, vault_balance: u64) -> u64 {
    score.min(vault_balance)
}
