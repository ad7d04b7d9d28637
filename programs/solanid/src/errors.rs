use anchor_lang::prelude::*;

/// Every variant name and `#[msg]` string here is part of the stable
/// client-facing ABI — do not rename without a version bump.
#[error_code]
pub enum SolanIdError {
    // --- Input validation (caller bug): no retry, surface to user. ---
    #[msg("Submitted proof timestamp is in the future.")]
    InvalidTimestamp,
    #[msg("Submitted source and proof_data variant do not match.")]
    SourcePayloadMismatch,
    #[msg("Source proof payload failed an integrity check.")]
    InvalidSourceProofData,
    #[msg("Preceding instruction is not a valid Ed25519 signature-verification instruction.")]
    InvalidAttestationInstruction,
    #[msg("Attestation signer or signed message does not match the expected digest.")]
    InvalidAttestationMessage,
    #[msg("Caller-provided identity_nullifier does not match the payload-derived nullifier.")]
    InvalidIdentityNullifier,
    #[msg("Admin configuration value is out of range.")]
    InvalidConfig,

    // --- Policy (business rule): surface. ---
    #[msg("Proof timestamp is older than the configured TTL.")]
    ProofExpired,
    #[msg("Cooldown period has not yet elapsed since the last update.")]
    CooldownPeriodActive,
    #[msg("This identity nullifier has been permanently revoked.")]
    IdentityRevokedPermanent,
    #[msg("This identity nullifier is already bound to a different user.")]
    DuplicateIdentityClaim,
    #[msg("This attestation nonce has already been used.")]
    AttestationNonceAlreadyUsed,
    #[msg("This proof has already been revoked.")]
    ProofAlreadyRevoked,

    // --- Authorization. ---
    #[msg("Signer is not authorized to perform this action.")]
    Unauthorized,
    #[msg("Account does not satisfy the required seed constraints.")]
    ConstraintSeeds,

    // --- Invariant breach (arithmetic). ---
    #[msg("Arithmetic overflow while computing a score.")]
    Overflow,

    // --- Rotation state: surface, expected during admin flow. ---
    #[msg("No verifier rotation is pending.")]
    NoVerifierRotationPending,
    #[msg("The pending verifier rotation's delay has not yet elapsed.")]
    VerifierRotationNotReady,
}
