#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

mod addresses;
mod constants;
mod errors;
mod events;
mod instructions;
mod scoring;
mod source;
mod state;
mod state_machine;
mod verifier;

pub use addresses::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "solanid",
    project_url: "https://solanid.io",
    contacts: "email:security@solanid.io",
    policy: "https://github.com/solanid/solanid/blob/main/SECURITY.md",
    source_code: "https://github.com/solanid/solanid"
}

#[program]
pub mod solanid {
    use super::*;

    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        min_score: u64,
        cooldown_secs: i64,
        diversity_bonus_pct: u64,
        proof_ttl_secs: i64,
        verifier_key: Pubkey,
    ) -> Result<()> {
        initialize_registry_handler(
            ctx,
            min_score,
            cooldown_secs,
            diversity_bonus_pct,
            proof_ttl_secs,
            verifier_key,
        )
    }

    pub fn initialize_scoring_config(ctx: Context<InitializeScoringConfig>) -> Result<()> {
        initialize_scoring_config_handler(ctx)
    }

    pub fn submit_proof(
        ctx: Context<SubmitProof>,
        proof_hash: [u8; 32],
        source: Source,
        nullifier: [u8; 32],
        nonce: u64,
        payload: SourceProofData,
        base_score: u64,
        timestamp: i64,
    ) -> Result<()> {
        submit_proof_handler(
            ctx,
            proof_hash,
            source,
            nullifier,
            nonce,
            payload,
            base_score,
            timestamp,
        )
    }

    pub fn verify_proof(ctx: Context<VerifyProof>) -> Result<ProofStatus> {
        verify_proof_handler(ctx)
    }

    pub fn revoke_proof(ctx: Context<RevokeProof>, source: Source) -> Result<()> {
        revoke_proof_handler(ctx, source)
    }

    pub fn update_min_score(ctx: Context<UpdateMinScore>, min_score: u64) -> Result<()> {
        update_min_score_handler(ctx, min_score)
    }

    pub fn update_scoring_config(
        ctx: Context<UpdateScoringConfig>,
        source: Source,
        weight: u16,
    ) -> Result<()> {
        update_scoring_config_handler(ctx, source, weight)
    }

    pub fn update_registry_config(
        ctx: Context<UpdateRegistryConfig>,
        cooldown_secs: i64,
        diversity_bonus_pct: u64,
        proof_ttl_secs: i64,
    ) -> Result<()> {
        update_registry_config_handler(ctx, cooldown_secs, diversity_bonus_pct, proof_ttl_secs)
    }

    pub fn initiate_verifier_rotation(
        ctx: Context<InitiateVerifierRotation>,
        new_key: Pubkey,
        delay_secs: i64,
    ) -> Result<()> {
        initiate_verifier_rotation_handler(ctx, new_key, delay_secs)
    }

    pub fn finalize_verifier_rotation(ctx: Context<FinalizeVerifierRotation>) -> Result<()> {
        finalize_verifier_rotation_handler(ctx)
    }
}
