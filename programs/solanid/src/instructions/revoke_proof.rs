use crate::constants::{IDENTITY_NULLIFIER_SEED, INDIVIDUAL_PROOF_SEED, REGISTRY_SEED, USER_PROOF_SEED};
use crate::errors::SolanIdError;
use crate::events::{IdentityTombstoned, ProofRevoked};
use crate::scoring::aggregate_score;
use crate::state::{IdentityNullifier, IndividualProof, Registry, Source, UserProof};
use crate::state_machine::check_revocable;
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(source: Source)]
pub struct RevokeProof<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    // Revoking the same source twice closes `individual_proof` on the
    // first call, so a second attempt would otherwise fail while Anchor
    // tries to load that now-closed account, before ever reaching a
    // `ProofAlreadyRevoked` check on it. Read the active flag cached on
    // `user_proof` instead — an account that is always open — so the
    // correct error surfaces before `individual_proof` is touched at all.
    #[account(
        mut,
        seeds = [USER_PROOF_SEED, user.key().as_ref()],
        bump = user_proof.bump,
        constraint = check_revocable(user_proof.source_active[source as usize]).is_ok()
            @ SolanIdError::ProofAlreadyRevoked,
    )]
    pub user_proof: Account<'info, UserProof>,

    #[account(
        mut,
        close = user,
        seeds = [INDIVIDUAL_PROOF_SEED, user.key().as_ref(), &[source as u8]],
        bump = individual_proof.bump,
    )]
    pub individual_proof: Account<'info, IndividualProof>,

    #[account(
        mut,
        seeds = [IDENTITY_NULLIFIER_SEED, individual_proof.nullifier.as_ref()],
        bump = identity_nullifier.bump,
        constraint = identity_nullifier.bound_user == user.key() @ SolanIdError::InvalidIdentityNullifier,
    )]
    pub identity_nullifier: Account<'info, IdentityNullifier>,
}

/// Permanently revokes one source's proof for the calling user. A
/// mismatched signer can never name the right `user_proof` or
/// `individual_proof` PDAs — both are seeded off `user.key()` — so
/// attempting to revoke someone else's proof fails `ConstraintSeeds`
/// before the handler body ever runs.
///
/// Closes the `IndividualProof`, recomputes the aggregate, and tombstones
/// the bound identity nullifier so it can never be reused by anyone.
pub fn revoke_proof_handler(ctx: Context<RevokeProof>, source: Source) -> Result<()> {
    let registry = &ctx.accounts.registry;
    let user_proof = &mut ctx.accounts.user_proof;
    let source_idx = source.index();

    user_proof.source_active[source_idx] = false;
    user_proof.source_weighted_scores[source_idx] = 0;
    let active_source_count = user_proof
        .active_source_count
        .checked_sub(1)
        .ok_or(SolanIdError::Overflow)?;
    user_proof.active_source_count = active_source_count;

    user_proof.aggregated_score = aggregate_score(
        &user_proof.active_weighted_scores(),
        active_source_count,
        registry.diversity_bonus_pct,
    )?;

    if active_source_count == 0 {
        let registry_mut = &mut ctx.accounts.registry;
        registry_mut.total_verified_users = registry_mut
            .total_verified_users
            .checked_sub(1)
            .ok_or(SolanIdError::Overflow)?;
    }

    let identity_nullifier = &mut ctx.accounts.identity_nullifier;
    identity_nullifier.is_permanently_revoked = true;

    msg!(
        "SolanID proof revoked: user={:?} source={:?}",
        user_proof.user,
        source
    );

    emit!(ProofRevoked {
        user: user_proof.user,
        source,
        aggregated_score: user_proof.aggregated_score,
        active_source_count,
    });

    emit!(IdentityTombstoned {
        nullifier: ctx.accounts.individual_proof.nullifier,
        bound_user: identity_nullifier.bound_user,
    });

    Ok(())
}
