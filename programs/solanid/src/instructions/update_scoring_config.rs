use crate::constants::SCORING_CONFIG_SEED;
use crate::errors::SolanIdError;
use crate::events::ScoringConfigUpdated;
use crate::state::{ScoringConfig, Source};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateScoringConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SCORING_CONFIG_SEED],
        bump = scoring_config.bump,
        has_one = admin @ SolanIdError::Unauthorized,
    )]
    pub scoring_config: Account<'info, ScoringConfig>,
}

/// Re-weights a single source. Weights are a percentage multiplier on
/// `base_score`, expressed in hundredths (100 = 1.0x).
pub fn update_scoring_config_handler(
    ctx: Context<UpdateScoringConfig>,
    source: Source,
    weight: u16,
) -> Result<()> {
    ctx.accounts.scoring_config.weights[source.index()] = weight;

    msg!("SolanID weight updated: source={:?} weight={}", source, weight);
    emit!(ScoringConfigUpdated { source, weight });
    Ok(())
}
