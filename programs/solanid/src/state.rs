use crate::constants::NUM_SOURCES;
use anchor_lang::prelude::*;

/// Closed set of identity providers SolanID knows about. Discriminants are
/// stable wire values and double as indices into `ScoringConfig::weights`
/// and `UserProof`'s per-source recency table.
///
/// `BrightId`, `Lens`, `Twitter`, `Google` and `Discord` are reserved: they
/// occupy a weight slot and a discriminant but have no [`SourceProofData`]
/// variant yet, so any submit naming them fails `SourcePayloadMismatch`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Source {
    Reclaim = 0,
    GitcoinPassport = 1,
    WorldId = 2,
    BrightId = 3,
    Lens = 4,
    Twitter = 5,
    Google = 6,
    Discord = 7,
}

impl Source {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Tagged union of per-provider proof payloads. The active variant must
/// match the caller-declared [`Source`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub enum SourceProofData {
    Reclaim {
        identity_hash: [u8; 32],
        issued_at: i64,
    },
    GitcoinPassport {
        did_hash: [u8; 32],
    },
    WorldId {
        nullifier_hash: [u8; 32],
    },
}

/// Singleton registry of program-wide configuration and the verifier-key
/// rotation protocol. Seeds: `("registry")`.
#[account]
pub struct Registry {
    pub admin: Pubkey,
    pub verifier_key: Pubkey,
    pub min_score: u64,
    pub cooldown_secs: i64,
    pub diversity_bonus_pct: u64,
    pub proof_ttl_secs: i64,
    pub total_verified_users: u64,
    pub pending_rotation: Option<PendingRotation>,
    pub bump: u8,
}

impl Registry {
    pub const LEN: usize = 8 // discriminator
        + 32 // admin
        + 32 // verifier_key
        + 8  // min_score
        + 8  // cooldown_secs
        + 8  // diversity_bonus_pct
        + 8  // proof_ttl_secs
        + 8  // total_verified_users
        + 1 + PendingRotation::LEN // pending_rotation Option
        + 1; // bump
}

/// A verifier-key rotation that has been initiated but not yet finalized.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct PendingRotation {
    pub new_key: Pubkey,
    pub ready_at: i64,
}

impl PendingRotation {
    pub const LEN: usize = 32 + 8;
}

/// Singleton per-source weight table. Seeds: `("scoring_config")`.
#[account]
pub struct ScoringConfig {
    pub admin: Pubkey,
    pub weights: [u16; NUM_SOURCES],
    pub bump: u8,
}

impl ScoringConfig {
    pub const LEN: usize = 8 + 32 + (2 * NUM_SOURCES) + 1;
}

/// Aggregated, per-user reputation record. Seeds: `("user_proof", user)`.
///
/// A Solana program cannot enumerate PDAs it was not handed as accounts,
/// so the per-source weighted scores behind the aggregate are cached
/// here rather than re-read from every `IndividualProof` account on each
/// submit/revoke.
#[account]
pub struct UserProof {
    pub user: Pubkey,
    pub aggregated_score: u64,
    pub active_source_count: u8,
    pub last_update_ts: i64,
    pub valid_until_ts: i64,
    /// Cached weighted score per source index, `0` when inactive.
    pub source_weighted_scores: [u64; NUM_SOURCES],
    /// Whether each source index currently holds a non-revoked proof.
    pub source_active: [bool; NUM_SOURCES],
    /// Timestamp of the most recent accepted submit per source index,
    /// `0` if that source has never been submitted.
    pub source_timestamps: [i64; NUM_SOURCES],
    pub bump: u8,
}

impl UserProof {
    pub const LEN: usize = 8
        + 32 // user
        + 8  // aggregated_score
        + 1  // active_source_count
        + 8  // last_update_ts
        + 8  // valid_until_ts
        + (8 * NUM_SOURCES) // source_weighted_scores
        + NUM_SOURCES // source_active
        + (8 * NUM_SOURCES) // source_timestamps
        + 1; // bump

    /// Weighted scores of every currently-active source, for feeding into
    /// [`crate::scoring::aggregate_score`].
    pub fn active_weighted_scores(&self) -> Vec<u64> {
        self.source_weighted_scores
            .iter()
            .zip(self.source_active.iter())
            .filter_map(|(score, active)| active.then_some(*score))
            .collect()
    }
}

/// Read-only view returned by `verify_proof`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProofStatus {
    pub is_verified: bool,
    pub aggregated_score: u64,
    pub verified_at: i64,
}

/// One provider's proof for one user. Seeds:
/// `("individual_proof", user, source_idx)`.
///
/// Carries its own `nullifier` so `revoke_proof` (which only takes
/// `source` as an argument) can re-derive the matching
/// `IdentityNullifier` PDA's seeds without the caller having to resupply
/// the 32-byte value.
#[account]
pub struct IndividualProof {
    pub user: Pubkey,
    pub source: Source,
    pub proof_hash: [u8; 32],
    pub nullifier: [u8; 32],
    pub weighted_score: u64,
    pub timestamp: i64,
    pub is_revoked: bool,
    pub bump: u8,
}

impl IndividualProof {
    pub const LEN: usize = 8
        + 32 // user
        + 1  // source (enum discriminant)
        + 32 // proof_hash
        + 32 // nullifier
        + 8  // weighted_score
        + 8  // timestamp
        + 1  // is_revoked
        + 1; // bump
}

/// Global tombstone record for a real-world identity. Seeds:
/// `("identity_nullifier", nullifier32)`. Never deleted once created.
#[account]
pub struct IdentityNullifier {
    pub bound_user: Pubkey,
    pub is_permanently_revoked: bool,
    pub bump: u8,
}

impl IdentityNullifier {
    pub const LEN: usize = 8 + 32 + 1 + 1;
}

/// Existence-only anti-replay marker. Seeds:
/// `("attestation_nonce", registry, nonce_le8)`.
///
/// `is_used` lets `submit_proof` distinguish "freshly created by this
/// call" from "already consumed by an earlier call" under
/// `init_if_needed`, which loads rather than rejects an existing account.
#[account]
pub struct AttestationNonce {
    pub is_used: bool,
    pub bump: u8,
}

impl AttestationNonce {
    pub const LEN: usize = 8 + 1 + 1;
}
