//! Reads the Ed25519 signature-verification instruction that must
//! immediately precede `submit_proof` in the same transaction, via the
//! instructions sysvar's introspection facility, and checks it signs the
//! canonical attestation digest with the registry's current verifier key.
//!
//! Parsing follows the Ed25519 native program's offsets-table layout.
//! Only the single signature at `submit_index - 1` is read; there is no
//! need to scan the rest of the transaction for other Ed25519
//! instructions.

use crate::constants::{
    ATTESTATION_DOMAIN_TAG, ATTESTATION_MESSAGE_LEN, ED25519_OFFSETS_ENTRY_LEN, ED25519_PROGRAM_ID,
};
use crate::errors::SolanIdError;
use crate::state::Source;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::load_instruction_at_checked;

/// The arguments needed to reconstruct the exact bytes a caller's verifier
/// must have signed.
pub struct AttestationMessageInput<'a> {
    pub program_id: &'a Pubkey,
    pub registry: &'a Pubkey,
    pub user: &'a Pubkey,
    pub source: Source,
    pub identity_nullifier: [u8; 32],
    pub nonce: u64,
    pub base_score: u64,
    pub timestamp: i64,
    pub proof_hash: [u8; 32],
}

/// Builds the canonical little-endian attestation message.
pub fn build_attestation_message(input: &AttestationMessageInput) -> [u8; ATTESTATION_MESSAGE_LEN] {
    let mut msg = [0u8; ATTESTATION_MESSAGE_LEN];
    let mut offset = 0usize;

    msg[offset..offset + 4].copy_from_slice(&ATTESTATION_DOMAIN_TAG);
    offset += 4;
    msg[offset..offset + 32].copy_from_slice(input.program_id.as_ref());
    offset += 32;
    msg[offset..offset + 32].copy_from_slice(input.registry.as_ref());
    offset += 32;
    msg[offset..offset + 32].copy_from_slice(input.user.as_ref());
    offset += 32;
    msg[offset] = input.source.index() as u8;
    offset += 1;
    msg[offset..offset + 32].copy_from_slice(&input.identity_nullifier);
    offset += 32;
    msg[offset..offset + 8].copy_from_slice(&input.nonce.to_le_bytes());
    offset += 8;
    msg[offset..offset + 8].copy_from_slice(&input.base_score.to_le_bytes());
    offset += 8;
    msg[offset..offset + 8].copy_from_slice(&input.timestamp.to_le_bytes());
    offset += 8;
    msg[offset..offset + 32].copy_from_slice(&input.proof_hash);
    offset += 32;

    debug_assert_eq!(offset, ATTESTATION_MESSAGE_LEN);
    msg
}

/// One parsed Ed25519 signature-verification entry.
struct ParsedSignature {
    pubkey: Pubkey,
    message: Vec<u8>,
}

/// Parses the single expected signature out of an Ed25519 native program
/// instruction's data. Anchor (and the Ed25519 program itself) guarantee
/// the signature was checked against the message at submission time — the
/// program only needs to read the already-verified pubkey/message back out.
fn parse_single_ed25519_signature(data: &[u8]) -> Result<ParsedSignature> {
    require!(data.len() >= 2, SolanIdError::InvalidAttestationInstruction);

    let num_signatures = data[0] as usize;
    require!(
        num_signatures == 1,
        SolanIdError::InvalidAttestationInstruction
    );

    let offsets_start = 2;
    require!(
        data.len() >= offsets_start + ED25519_OFFSETS_ENTRY_LEN,
        SolanIdError::InvalidAttestationInstruction
    );

    let read_u16 = |pos: usize| -> Result<usize> {
        Ok(u16::from_le_bytes(
            data.get(pos..pos + 2)
                .ok_or(SolanIdError::InvalidAttestationInstruction)?
                .try_into()
                .map_err(|_| SolanIdError::InvalidAttestationInstruction)?,
        ) as usize)
    };

    let sig_offset = read_u16(offsets_start)?;
    let pubkey_offset = read_u16(offsets_start + 4)?;
    let msg_offset = read_u16(offsets_start + 8)?;
    let msg_size = read_u16(offsets_start + 10)?;

    require!(
        data.len() >= pubkey_offset + 32,
        SolanIdError::InvalidAttestationInstruction
    );
    let pubkey = Pubkey::new_from_array(
        data[pubkey_offset..pubkey_offset + 32]
            .try_into()
            .map_err(|_| SolanIdError::InvalidAttestationInstruction)?,
    );

    require!(
        data.len() >= sig_offset + 64,
        SolanIdError::InvalidAttestationInstruction
    );
    // Signature bytes themselves are not needed: the Ed25519 native program
    // already rejected the transaction if the signature didn't verify.

    require!(
        data.len() >= msg_offset + msg_size,
        SolanIdError::InvalidAttestationInstruction
    );
    let message = data[msg_offset..msg_offset + msg_size].to_vec();

    Ok(ParsedSignature { pubkey, message })
}

/// Reads the instruction immediately preceding `submit_index` from the
/// instructions sysvar, checks it is an Ed25519 signature-verification
/// instruction signed by `expected_signer` over `expected_message`.
pub fn verify_preceding_attestation(
    instructions_sysvar: &AccountInfo,
    submit_index: u16,
    expected_signer: &Pubkey,
    expected_message: &[u8],
) -> Result<()> {
    require!(submit_index > 0, SolanIdError::InvalidAttestationInstruction);

    let preceding = load_instruction_at_checked(submit_index as usize - 1, instructions_sysvar)
        .map_err(|_| SolanIdError::InvalidAttestationInstruction)?;

    require!(
        preceding.program_id == ED25519_PROGRAM_ID,
        SolanIdError::InvalidAttestationInstruction
    );

    let parsed = parse_single_ed25519_signature(&preceding.data)?;

    require!(
        &parsed.pubkey == expected_signer,
        SolanIdError::InvalidAttestationMessage
    );
    require!(
        parsed.message == expected_message,
        SolanIdError::InvalidAttestationMessage
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input(program_id: Pubkey, registry: Pubkey, user: Pubkey) -> AttestationMessageInput<'static> {
        // leaked to satisfy the 'static bound cheaply in tests only
        let program_id: &'static Pubkey = Box::leak(Box::new(program_id));
        let registry: &'static Pubkey = Box::leak(Box::new(registry));
        let user: &'static Pubkey = Box::leak(Box::new(user));
        AttestationMessageInput {
            program_id,
            registry,
            user,
            source: Source::Reclaim,
            identity_nullifier: [3u8; 32],
            nonce: 42,
            base_score: 150,
            timestamp: 1_700_000_000,
            proof_hash: [9u8; 32],
        }
    }

    #[test]
    fn message_is_exactly_189_bytes() {
        let input = sample_input(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let msg = build_attestation_message(&input);
        assert_eq!(msg.len(), ATTESTATION_MESSAGE_LEN);
        assert_eq!(&msg[0..4], b"sid1");
    }

    #[test]
    fn message_changes_with_nonce() {
        let mut input = sample_input(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let a = build_attestation_message(&input);
        input.nonce = 43;
        let b = build_attestation_message(&input);
        assert_ne!(a, b);
    }

    #[test]
    fn message_encodes_source_index() {
        let mut input = sample_input(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        input.source = Source::WorldId;
        let msg = build_attestation_message(&input);
        assert_eq!(msg[100], Source::WorldId.index() as u8);
    }

    fn build_ed25519_instruction_data(pubkey: &Pubkey, message: &[u8]) -> Vec<u8> {
        let sig = [0u8; 64];
        let num_signatures = 1u8;
        let padding = 0u8;
        let offsets_start = 2usize;
        let sig_offset = offsets_start + ED25519_OFFSETS_ENTRY_LEN;
        let pubkey_offset = sig_offset + sig.len();
        let msg_offset = pubkey_offset + 32;

        let mut data = Vec::new();
        data.push(num_signatures);
        data.push(padding);

        // offsets entry: signature_offset, signature_ix_index,
        // public_key_offset, public_key_ix_index, message_data_offset,
        // message_data_size, message_ix_index (all u16 LE).
        data.extend_from_slice(&(sig_offset as u16).to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&(pubkey_offset as u16).to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&(msg_offset as u16).to_le_bytes());
        data.extend_from_slice(&(message.len() as u16).to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());

        data.extend_from_slice(&sig);
        data.extend_from_slice(pubkey.as_ref());
        data.extend_from_slice(message);
        data
    }

    #[test]
    fn parses_single_signature_roundtrip() {
        let pubkey = Pubkey::new_unique();
        let message = b"hello attestation".to_vec();
        let data = build_ed25519_instruction_data(&pubkey, &message);

        let parsed = parse_single_ed25519_signature(&data).unwrap();
        assert_eq!(parsed.pubkey, pubkey);
        assert_eq!(parsed.message, message);
    }

    #[test]
    fn rejects_zero_signatures() {
        let data = vec![0u8, 0u8];
        assert!(parse_single_ed25519_signature(&data).is_err());
    }

    #[test]
    fn rejects_truncated_data() {
        let data = vec![1u8, 0u8, 1, 2, 3];
        assert!(parse_single_ed25519_signature(&data).is_err());
    }
}
