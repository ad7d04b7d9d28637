use crate::state::Source;
use anchor_lang::prelude::*;

#[event]
pub struct ProofSubmitted {
    pub user: Pubkey,
    pub source: Source,
    pub weighted_score: u64,
    pub aggregated_score: u64,
    pub active_source_count: u8,
    pub valid_until_ts: i64,
}

#[event]
pub struct ProofRevoked {
    pub user: Pubkey,
    pub source: Source,
    pub aggregated_score: u64,
    pub active_source_count: u8,
}

#[event]
pub struct IdentityTombstoned {
    pub nullifier: [u8; 32],
    pub bound_user: Pubkey,
}

#[event]
pub struct VerifierRotationInitiated {
    pub new_key: Pubkey,
    pub ready_at: i64,
}

#[event]
pub struct VerifierRotationFinalized {
    pub verifier_key: Pubkey,
}

#[event]
pub struct RegistryConfigUpdated {
    pub cooldown_secs: i64,
    pub diversity_bonus_pct: u64,
    pub proof_ttl_secs: i64,
}

#[event]
pub struct ScoringConfigUpdated {
    pub source: Source,
    pub weight: u16,
}

#[event]
pub struct MinScoreUpdated {
    pub min_score: u64,
}
