use crate::constants::{
    ATTESTATION_NONCE_SEED, IDENTITY_NULLIFIER_SEED, INDIVIDUAL_PROOF_SEED, REGISTRY_SEED,
    SCORING_CONFIG_SEED, USER_PROOF_SEED,
};
use crate::errors::SolanIdError;
use crate::events::ProofSubmitted;
use crate::scoring::{aggregate_score, weighted_score};
use crate::source::validate_source_payload;
use crate::state::{
    AttestationNonce, IdentityNullifier, IndividualProof, Registry, ScoringConfig, Source,
    SourceProofData, UserProof,
};
use crate::state_machine::{
    check_cooldown_elapsed, check_nonce_unused, check_not_expired, check_nullifier_claim,
    check_timestamp_not_future,
};
use crate::verifier::{build_attestation_message, verify_preceding_attestation, AttestationMessageInput};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, ID as INSTRUCTIONS_SYSVAR_ID,
};

#[derive(Accounts)]
#[instruction(
    proof_hash: [u8; 32],
    source: Source,
    nullifier: [u8; 32],
    nonce: u64,
    payload: SourceProofData,
    base_score: u64,
    timestamp: i64
)]
pub struct SubmitProof<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(mut, seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    #[account(seeds = [SCORING_CONFIG_SEED], bump = scoring_config.bump)]
    pub scoring_config: Account<'info, ScoringConfig>,

    #[account(
        init_if_needed,
        payer = user,
        space = UserProof::LEN,
        seeds = [USER_PROOF_SEED, user.key().as_ref()],
        bump,
    )]
    pub user_proof: Account<'info, UserProof>,

    #[account(
        init_if_needed,
        payer = user,
        space = IndividualProof::LEN,
        seeds = [INDIVIDUAL_PROOF_SEED, user.key().as_ref(), &[source as u8]],
        bump,
    )]
    pub individual_proof: Account<'info, IndividualProof>,

    #[account(
        init_if_needed,
        payer = user,
        space = IdentityNullifier::LEN,
        seeds = [IDENTITY_NULLIFIER_SEED, nullifier.as_ref()],
        bump,
    )]
    pub identity_nullifier: Account<'info, IdentityNullifier>,

    #[account(
        init_if_needed,
        payer = user,
        space = AttestationNonce::LEN,
        seeds = [ATTESTATION_NONCE_SEED, registry.key().as_ref(), &nonce.to_le_bytes()],
        bump,
    )]
    pub attestation_nonce: Account<'info, AttestationNonce>,

    /// CHECK: address-constrained to the instructions sysvar; read-only
    /// introspection target for the attestation verifier.
    #[account(address = INSTRUCTIONS_SYSVAR_ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn submit_proof_handler(
    ctx: Context<SubmitProof>,
    proof_hash: [u8; 32],
    source: Source,
    nullifier: [u8; 32],
    nonce: u64,
    payload: SourceProofData,
    base_score: u64,
    timestamp: i64,
) -> Result<()> {
    let user_key = ctx.accounts.user.key();
    let registry_key = ctx.accounts.registry.key();
    let verifier_key = ctx.accounts.registry.verifier_key;
    let proof_ttl_secs = ctx.accounts.registry.proof_ttl_secs;
    let cooldown_secs = ctx.accounts.registry.cooldown_secs;
    let diversity_bonus_pct = ctx.accounts.registry.diversity_bonus_pct;

    // 1. Attestation verifier.
    let current_index = load_current_index_checked(&ctx.accounts.instructions_sysvar)?;
    let expected_message = build_attestation_message(&AttestationMessageInput {
        program_id: &crate::ID,
        registry: &registry_key,
        user: &user_key,
        source,
        identity_nullifier: nullifier,
        nonce,
        base_score,
        timestamp,
        proof_hash,
    });
    verify_preceding_attestation(
        &ctx.accounts.instructions_sysvar,
        current_index,
        &verifier_key,
        &expected_message,
    )?;

    // 2. Source-payload validator.
    validate_source_payload(source, &payload, &nullifier)?;

    // 3-4. Timestamp bounds.
    let now = Clock::get()?.unix_timestamp;
    check_timestamp_not_future(timestamp, now)?;
    check_not_expired(timestamp, now, proof_ttl_secs)?;

    // 5-6. Identity nullifier tombstone / duplicate-claim checks.
    let identity_nullifier = &mut ctx.accounts.identity_nullifier;
    let nullifier_is_new = identity_nullifier.bound_user == Pubkey::default();
    check_nullifier_claim(
        !nullifier_is_new,
        identity_nullifier.is_permanently_revoked,
        identity_nullifier.bound_user,
        user_key,
    )?;
    if nullifier_is_new {
        identity_nullifier.bound_user = user_key;
        identity_nullifier.is_permanently_revoked = false;
        identity_nullifier.bump = ctx.bumps.identity_nullifier;
    }

    // 7. Anti-replay nonce.
    let attestation_nonce = &mut ctx.accounts.attestation_nonce;
    check_nonce_unused(attestation_nonce.is_used)?;
    attestation_nonce.is_used = true;
    attestation_nonce.bump = ctx.bumps.attestation_nonce;

    // 8. Cooldown and score effects, all on `user_proof`.
    let weight = ctx.accounts.scoring_config.weights[source.index()];
    let new_weighted = weighted_score(base_score, weight)?;

    let user_proof = &mut ctx.accounts.user_proof;
    let user_proof_exists = user_proof.user != Pubkey::default();
    check_cooldown_elapsed(user_proof_exists, cooldown_secs, now, user_proof.last_update_ts)?;
    if !user_proof_exists {
        user_proof.user = user_key;
        user_proof.bump = ctx.bumps.user_proof;
    }

    let source_idx = source.index();
    let crossed_zero_to_one = !user_proof.source_active[source_idx];
    user_proof.source_weighted_scores[source_idx] = new_weighted;
    user_proof.source_active[source_idx] = true;
    user_proof.source_timestamps[source_idx] = timestamp;
    if crossed_zero_to_one {
        user_proof.active_source_count = user_proof
            .active_source_count
            .checked_add(1)
            .ok_or(SolanIdError::Overflow)?;
    }

    user_proof.aggregated_score = aggregate_score(
        &user_proof.active_weighted_scores(),
        user_proof.active_source_count,
        diversity_bonus_pct,
    )?;
    user_proof.last_update_ts = now;
    user_proof.valid_until_ts = now.checked_add(proof_ttl_secs).ok_or(SolanIdError::Overflow)?;

    let aggregated_score = user_proof.aggregated_score;
    let active_source_count = user_proof.active_source_count;
    let valid_until_ts = user_proof.valid_until_ts;

    // --- Individual-proof record. ---
    let individual_proof = &mut ctx.accounts.individual_proof;
    individual_proof.user = user_key;
    individual_proof.source = source;
    individual_proof.proof_hash = proof_hash;
    individual_proof.nullifier = nullifier;
    individual_proof.weighted_score = new_weighted;
    individual_proof.timestamp = timestamp;
    individual_proof.is_revoked = false;
    individual_proof.bump = ctx.bumps.individual_proof;

    if crossed_zero_to_one && active_source_count == 1 {
        ctx.accounts.registry.total_verified_users = ctx
            .accounts
            .registry
            .total_verified_users
            .checked_add(1)
            .ok_or(SolanIdError::Overflow)?;
    }

    msg!(
        "SolanID proof submitted: user={:?} source={:?} aggregated={}",
        user_key,
        source,
        aggregated_score
    );

    emit!(ProofSubmitted {
        user: user_key,
        source,
        weighted_score: new_weighted,
        aggregated_score,
        active_source_count,
        valid_until_ts,
    });

    Ok(())
}
