use crate::constants::{DEFAULT_WEIGHT, NUM_SOURCES, SCORING_CONFIG_SEED};
use crate::state::ScoringConfig;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeScoringConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ScoringConfig::LEN,
        seeds = [SCORING_CONFIG_SEED],
        bump,
    )]
    pub scoring_config: Account<'info, ScoringConfig>,

    pub system_program: Program<'info, System>,
}

/// Creates the singleton [`ScoringConfig`] account with every source
/// defaulted to a 100 (1.0x) weight.
pub fn initialize_scoring_config_handler(ctx: Context<InitializeScoringConfig>) -> Result<()> {
    let scoring_config = &mut ctx.accounts.scoring_config;
    scoring_config.admin = ctx.accounts.admin.key();
    scoring_config.weights = [DEFAULT_WEIGHT; NUM_SOURCES];
    scoring_config.bump = ctx.bumps.scoring_config;

    msg!("SolanID scoring config initialized");
    Ok(())
}
