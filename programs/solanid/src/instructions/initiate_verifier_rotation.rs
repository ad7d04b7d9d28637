use crate::constants::REGISTRY_SEED;
use crate::errors::SolanIdError;
use crate::events::VerifierRotationInitiated;
use crate::state::{PendingRotation, Registry};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitiateVerifierRotation<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = admin @ SolanIdError::Unauthorized,
    )]
    pub registry: Account<'info, Registry>,
}

pub fn initiate_verifier_rotation_handler(
    ctx: Context<InitiateVerifierRotation>,
    new_key: Pubkey,
    delay_secs: i64,
) -> Result<()> {
    require!(new_key != Pubkey::default(), SolanIdError::InvalidConfig);
    require!(delay_secs > 0, SolanIdError::InvalidConfig);

    let now = Clock::get()?.unix_timestamp;
    let ready_at = now.checked_add(delay_secs).ok_or(SolanIdError::Overflow)?;

    let registry = &mut ctx.accounts.registry;
    registry.pending_rotation = Some(PendingRotation { new_key, ready_at });

    msg!(
        "SolanID verifier rotation initiated: new_key={:?} ready_at={}",
        new_key,
        ready_at
    );
    emit!(VerifierRotationInitiated { new_key, ready_at });
    Ok(())
}
