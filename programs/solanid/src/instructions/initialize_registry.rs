use crate::constants::REGISTRY_SEED;
use crate::errors::SolanIdError;
use crate::state::Registry;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = Registry::LEN,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

/// Creates the singleton [`Registry`] account. Rejects a second call at
/// the Anchor `init` layer (`AccountAlreadyInitialized`) — there is no
/// re-initialization path.
pub fn initialize_registry_handler(
    ctx: Context<InitializeRegistry>,
    min_score: u64,
    cooldown_secs: i64,
    diversity_bonus_pct: u64,
    proof_ttl_secs: i64,
    verifier_key: Pubkey,
) -> Result<()> {
    require!(diversity_bonus_pct <= 100, SolanIdError::InvalidConfig);
    require!(proof_ttl_secs > 0, SolanIdError::InvalidConfig);

    let registry = &mut ctx.accounts.registry;
    registry.admin = ctx.accounts.admin.key();
    registry.verifier_key = verifier_key;
    registry.min_score = min_score;
    registry.cooldown_secs = cooldown_secs;
    registry.diversity_bonus_pct = diversity_bonus_pct;
    registry.proof_ttl_secs = proof_ttl_secs;
    registry.total_verified_users = 0;
    registry.pending_rotation = None;
    registry.bump = ctx.bumps.registry;

    msg!("SolanID registry initialized with admin {:?}", registry.admin);
    Ok(())
}
