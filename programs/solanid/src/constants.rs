//! Seed tags, numeric limits and wire-format constants shared across modules.

/// PDA seed for the singleton [`crate::state::Registry`] account.
pub const REGISTRY_SEED: &[u8] = b"registry";
/// PDA seed for the singleton [`crate::state::ScoringConfig`] account.
pub const SCORING_CONFIG_SEED: &[u8] = b"scoring_config";
/// PDA seed for a [`crate::state::UserProof`] account.
pub const USER_PROOF_SEED: &[u8] = b"user_proof";
/// PDA seed for an [`crate::state::IndividualProof`] account.
pub const INDIVIDUAL_PROOF_SEED: &[u8] = b"individual_proof";
/// PDA seed for an [`crate::state::IdentityNullifier`] account.
pub const IDENTITY_NULLIFIER_SEED: &[u8] = b"identity_nullifier";
/// PDA seed for an [`crate::state::AttestationNonce`] account.
pub const ATTESTATION_NONCE_SEED: &[u8] = b"attestation_nonce";

/// Number of source slots in `ScoringConfig::weights` / `UserProof`'s
/// per-source recency table (one per [`crate::state::Source`] discriminant).
pub const NUM_SOURCES: usize = 8;

/// Default weight applied to a source absent an explicit admin override.
pub const DEFAULT_WEIGHT: u16 = 100;

/// Literal ASCII domain tag opening the canonical attestation message.
pub const ATTESTATION_DOMAIN_TAG: [u8; 4] = *b"sid1";

/// Total length in bytes of the canonical attestation message.
pub const ATTESTATION_MESSAGE_LEN: usize = 189;

/// `Ed25519SigVerify111111111111111111111111111`, the native program that
/// verifies the signature the attestation verifier reads back out of the
/// instructions sysvar.
pub const ED25519_PROGRAM_ID: anchor_lang::solana_program::pubkey::Pubkey =
    anchor_lang::solana_program::pubkey!("Ed25519SigVerify111111111111111111111111111");

/// Byte width of one entry in the Ed25519 native program's offsets table
/// (7 little-endian `u16` fields).
pub const ED25519_OFFSETS_ENTRY_LEN: usize = 14;
