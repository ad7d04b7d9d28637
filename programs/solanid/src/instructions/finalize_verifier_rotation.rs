use crate::constants::REGISTRY_SEED;
use crate::errors::SolanIdError;
use crate::events::VerifierRotationFinalized;
use crate::state::Registry;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct FinalizeVerifierRotation<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = admin @ SolanIdError::Unauthorized,
    )]
    pub registry: Account<'info, Registry>,
}

pub fn finalize_verifier_rotation_handler(ctx: Context<FinalizeVerifierRotation>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let registry = &mut ctx.accounts.registry;

    let pending = registry
        .pending_rotation
        .ok_or(SolanIdError::NoVerifierRotationPending)?;
    require!(now >= pending.ready_at, SolanIdError::VerifierRotationNotReady);

    registry.verifier_key = pending.new_key;
    registry.pending_rotation = None;

    msg!("SolanID verifier key rotated to {:?}", registry.verifier_key);
    emit!(VerifierRotationFinalized {
        verifier_key: registry.verifier_key,
    });
    Ok(())
}
