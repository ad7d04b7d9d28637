use crate::constants::REGISTRY_SEED;
use crate::errors::SolanIdError;
use crate::events::MinScoreUpdated;
use crate::state::Registry;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateMinScore<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = admin @ SolanIdError::Unauthorized,
    )]
    pub registry: Account<'info, Registry>,
}

pub fn update_min_score_handler(ctx: Context<UpdateMinScore>, min_score: u64) -> Result<()> {
    ctx.accounts.registry.min_score = min_score;

    msg!("SolanID min_score updated to {}", min_score);
    emit!(MinScoreUpdated { min_score });
    Ok(())
}
