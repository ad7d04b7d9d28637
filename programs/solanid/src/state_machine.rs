//! Pure precondition checks for the proof state machine.
//!
//! Factored out of the `submit_proof` / `revoke_proof` Anchor handlers so
//! the ordered precondition chain can be unit-tested against plain values
//! without a live validator, the way `scoring.rs` and `source.rs` are.

use crate::errors::SolanIdError;
use anchor_lang::prelude::*;

/// A proof cannot be dated in the future.
pub fn check_timestamp_not_future(timestamp: i64, now: i64) -> Result<()> {
    require!(timestamp <= now, SolanIdError::InvalidTimestamp);
    Ok(())
}

/// Precondition 4: a proof older than the configured TTL is expired.
pub fn check_not_expired(timestamp: i64, now: i64, ttl_secs: i64) -> Result<()> {
    let age = now.checked_sub(timestamp).ok_or(SolanIdError::Overflow)?;
    require!(age <= ttl_secs, SolanIdError::ProofExpired);
    Ok(())
}

/// Preconditions 5-6: an already-bound identity nullifier must not be
/// tombstoned, and if bound it must be bound to the submitting user.
pub fn check_nullifier_claim(
    nullifier_exists: bool,
    is_permanently_revoked: bool,
    bound_user: Pubkey,
    user: Pubkey,
) -> Result<()> {
    if !nullifier_exists {
        return Ok(());
    }
    require!(
        !is_permanently_revoked,
        SolanIdError::IdentityRevokedPermanent
    );
    require!(bound_user == user, SolanIdError::DuplicateIdentityClaim);
    Ok(())
}

/// Precondition 7: the attestation nonce must not have been consumed by
/// an earlier submit.
pub fn check_nonce_unused(is_used: bool) -> Result<()> {
    require!(!is_used, SolanIdError::AttestationNonceAlreadyUsed);
    Ok(())
}

/// Precondition 8: when an existing `UserProof` is being refreshed and a
/// cooldown is configured, enough time must have elapsed since the last
/// update.
pub fn check_cooldown_elapsed(
    user_proof_exists: bool,
    cooldown_secs: i64,
    now: i64,
    last_update_ts: i64,
) -> Result<()> {
    if !user_proof_exists || cooldown_secs <= 0 {
        return Ok(());
    }
    let since_last = now
        .checked_sub(last_update_ts)
        .ok_or(SolanIdError::Overflow)?;
    require!(since_last >= cooldown_secs, SolanIdError::CooldownPeriodActive);
    Ok(())
}

/// `revoke_proof`'s sole precondition: the targeted source must currently
/// be active (not already revoked).
pub fn check_revocable(source_active: bool) -> Result<()> {
    require!(source_active, SolanIdError::ProofAlreadyRevoked);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn future_timestamp_rejected() {
        assert!(check_timestamp_not_future(2_000, 1_000).is_err());
        assert!(check_timestamp_not_future(1_000, 1_000).is_ok());
    }

    #[test]
    fn ttl_expiry_scenario() {
        // ttl=1s, submit at t=0 is fresh at now=0; stale at now=3 (>2.2s slept).
        assert!(check_not_expired(0, 0, 1).is_ok());
        assert!(check_not_expired(0, 3, 1).is_err());
    }

    #[test]
    fn fresh_nullifier_always_passes() {
        let user = Pubkey::new_unique();
        assert!(check_nullifier_claim(false, true, Pubkey::default(), user).is_ok());
    }

    #[test]
    fn tombstoned_nullifier_rejected_even_for_owner() {
        let user = Pubkey::new_unique();
        assert!(check_nullifier_claim(true, true, user, user).is_err());
    }

    #[test]
    fn duplicate_identity_across_wallets_scenario() {
        // WorldId nullifier bound to user A; user B's submit must fail.
        let user_a = Pubkey::new_unique();
        let user_b = Pubkey::new_unique();
        assert!(check_nullifier_claim(true, false, user_a, user_a).is_ok());
        assert!(check_nullifier_claim(true, false, user_a, user_b).is_err());
    }

    #[test]
    fn nonce_replay_rejected() {
        assert!(check_nonce_unused(false).is_ok());
        assert!(check_nonce_unused(true).is_err());
    }

    #[test]
    fn cooldown_gates_only_existing_users() {
        assert!(check_cooldown_elapsed(false, 60, 0, 0).is_ok());
        assert!(check_cooldown_elapsed(true, 0, 1_000, 0).is_ok());
        assert!(check_cooldown_elapsed(true, 60, 30, 0).is_err());
        assert!(check_cooldown_elapsed(true, 60, 60, 0).is_ok());
    }

    #[test]
    fn revoke_requires_active_source() {
        assert!(check_revocable(true).is_ok());
        assert!(check_revocable(false).is_err());
    }
}
