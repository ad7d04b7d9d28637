use crate::constants::{REGISTRY_SEED, USER_PROOF_SEED};
use crate::state::{ProofStatus, Registry, UserProof};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct VerifyProof<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    #[account(seeds = [USER_PROOF_SEED, user.key().as_ref()], bump = user_proof.bump)]
    pub user_proof: Account<'info, UserProof>,

    /// CHECK: identity whose reputation is being queried. Anyone may read
    /// anyone else's verification status, so this account need not sign.
    pub user: UncheckedAccount<'info>,
}

/// Read-only view: a user is verified when their current aggregate
/// clears the registry's minimum and their proof window hasn't lapsed.
/// Performs no writes.
pub fn verify_proof_handler(ctx: Context<VerifyProof>) -> Result<ProofStatus> {
    let now = Clock::get()?.unix_timestamp;
    let user_proof = &ctx.accounts.user_proof;
    let registry = &ctx.accounts.registry;

    let is_verified =
        user_proof.aggregated_score >= registry.min_score && user_proof.valid_until_ts > now;

    Ok(ProofStatus {
        is_verified,
        aggregated_score: user_proof.aggregated_score,
        verified_at: if is_verified { user_proof.last_update_ts } else { 0 },
    })
}
