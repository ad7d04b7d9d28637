use crate::constants::REGISTRY_SEED;
use crate::errors::SolanIdError;
use crate::events::RegistryConfigUpdated;
use crate::state::Registry;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateRegistryConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = admin @ SolanIdError::Unauthorized,
    )]
    pub registry: Account<'info, Registry>,
}

/// Updates the registry's cooldown, diversity bonus and proof-ttl policy
/// knobs. Does not touch `min_score` or `verifier_key`, which have their
/// own dedicated instructions.
pub fn update_registry_config_handler(
    ctx: Context<UpdateRegistryConfig>,
    cooldown_secs: i64,
    diversity_bonus_pct: u64,
    proof_ttl_secs: i64,
) -> Result<()> {
    require!(diversity_bonus_pct <= 100, SolanIdError::InvalidConfig);
    require!(proof_ttl_secs > 0, SolanIdError::InvalidConfig);

    let registry = &mut ctx.accounts.registry;
    registry.cooldown_secs = cooldown_secs;
    registry.diversity_bonus_pct = diversity_bonus_pct;
    registry.proof_ttl_secs = proof_ttl_secs;

    msg!("SolanID registry config updated");
    emit!(RegistryConfigUpdated {
        cooldown_secs,
        diversity_bonus_pct,
        proof_ttl_secs,
    });
    Ok(())
}
