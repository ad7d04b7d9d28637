//! Source-payload validation.

use crate::errors::SolanIdError;
use crate::state::{Source, SourceProofData};
use anchor_lang::prelude::*;

/// Returns the 32-byte identity nullifier the payload itself commits to,
/// after checking that `proof_data`'s active variant matches `source` and
/// that any payload-specific integrity constraint holds.
///
/// Reserved sources (`BrightId`, `Lens`, `Twitter`, `Google`, `Discord`)
/// have no corresponding `SourceProofData` variant and always fall
/// through to `SourcePayloadMismatch` until a payload variant is wired
/// up for them.
pub fn payload_nullifier(source: Source, proof_data: &SourceProofData) -> Result<[u8; 32]> {
    match (source, proof_data) {
        (Source::Reclaim, SourceProofData::Reclaim { identity_hash, issued_at }) => {
            require!(*issued_at > 0, SolanIdError::InvalidSourceProofData);
            Ok(*identity_hash)
        }
        (Source::GitcoinPassport, SourceProofData::GitcoinPassport { did_hash }) => Ok(*did_hash),
        (Source::WorldId, SourceProofData::WorldId { nullifier_hash }) => Ok(*nullifier_hash),
        _ => Err(SolanIdError::SourcePayloadMismatch.into()),
    }
}

/// Validates that the caller-provided `identity_nullifier` matches the one
/// derived from the payload itself.
pub fn validate_source_payload(
    source: Source,
    proof_data: &SourceProofData,
    claimed_nullifier: &[u8; 32],
) -> Result<()> {
    let derived = payload_nullifier(source, proof_data)?;
    require!(
        &derived == claimed_nullifier,
        SolanIdError::InvalidIdentityNullifier
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reclaim_matches_and_checks_issued_at() {
        let hash = [7u8; 32];
        let data = SourceProofData::Reclaim {
            identity_hash: hash,
            issued_at: 1_000,
        };
        assert!(validate_source_payload(Source::Reclaim, &data, &hash).is_ok());
    }

    #[test]
    fn reclaim_rejects_zero_issued_at() {
        let hash = [7u8; 32];
        let data = SourceProofData::Reclaim {
            identity_hash: hash,
            issued_at: 0,
        };
        assert!(validate_source_payload(Source::Reclaim, &data, &hash).is_err());
    }

    #[test]
    fn mismatched_source_and_payload_fails() {
        let data = SourceProofData::WorldId {
            nullifier_hash: [1u8; 32],
        };
        assert!(validate_source_payload(Source::Reclaim, &data, &[1u8; 32]).is_err());
    }

    #[test]
    fn reserved_sources_always_mismatch() {
        let data = SourceProofData::WorldId {
            nullifier_hash: [1u8; 32],
        };
        for reserved in [
            Source::BrightId,
            Source::Lens,
            Source::Twitter,
            Source::Google,
            Source::Discord,
        ] {
            assert!(validate_source_payload(reserved, &data, &[1u8; 32]).is_err());
        }
    }

    #[test]
    fn caller_nullifier_must_match_payload_nullifier() {
        let data = SourceProofData::GitcoinPassport {
            did_hash: [9u8; 32],
        };
        assert!(validate_source_payload(Source::GitcoinPassport, &data, &[8u8; 32]).is_err());
    }
}
