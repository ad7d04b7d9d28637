//! Deterministic address derivation for every seeded account kind the
//! program owns.
//!
//! Each function is a plain `find_program_address` wrapper taking the
//! logical entity's variable components in seed order. Anchor's
//! `seeds = [...]` constraints on each instruction's account struct are
//! the actual enforcement; these functions exist so off-program callers
//! (and these unit tests) can recompute the same addresses.

use crate::constants::{
    ATTESTATION_NONCE_SEED, IDENTITY_NULLIFIER_SEED, INDIVIDUAL_PROOF_SEED, REGISTRY_SEED,
    SCORING_CONFIG_SEED, USER_PROOF_SEED,
};
use anchor_lang::prelude::*;

pub fn registry_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY_SEED], program_id)
}

pub fn scoring_config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SCORING_CONFIG_SEED], program_id)
}

pub fn user_proof_address(user: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_PROOF_SEED, user.as_ref()], program_id)
}

pub fn individual_proof_address(
    user: &Pubkey,
    source_idx: u8,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[INDIVIDUAL_PROOF_SEED, user.as_ref(), &[source_idx]],
        program_id,
    )
}

pub fn identity_nullifier_address(nullifier: &[u8; 32], program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[IDENTITY_NULLIFIER_SEED, nullifier.as_ref()], program_id)
}

pub fn attestation_nonce_address(
    registry: &Pubkey,
    nonce: u64,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            ATTESTATION_NONCE_SEED,
            registry.as_ref(),
            &nonce.to_le_bytes(),
        ],
        program_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program_id() -> Pubkey {
        Pubkey::new_unique()
    }

    #[test]
    fn registry_address_is_deterministic() {
        let pid = program_id();
        assert_eq!(registry_address(&pid), registry_address(&pid));
    }

    #[test]
    fn user_proof_address_differs_by_user() {
        let pid = program_id();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert_ne!(user_proof_address(&a, &pid).0, user_proof_address(&b, &pid).0);
    }

    #[test]
    fn individual_proof_address_differs_by_source() {
        let pid = program_id();
        let user = Pubkey::new_unique();
        let a = individual_proof_address(&user, 0, &pid).0;
        let b = individual_proof_address(&user, 1, &pid).0;
        assert_ne!(a, b);
    }

    #[test]
    fn attestation_nonce_address_differs_by_nonce() {
        let pid = program_id();
        let registry = Pubkey::new_unique();
        let a = attestation_nonce_address(&registry, 1, &pid).0;
        let b = attestation_nonce_address(&registry, 2, &pid).0;
        assert_ne!(a, b);
    }

    #[test]
    fn identity_nullifier_address_differs_by_nullifier() {
        let pid = program_id();
        let a = identity_nullifier_address(&[1u8; 32], &pid).0;
        let b = identity_nullifier_address(&[2u8; 32], &pid).0;
        assert_ne!(a, b);
    }
}
