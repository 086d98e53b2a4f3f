use anchor_lang::prelude::*;

use crate::constants::SEED_CONFIG;
use crate::error::SegmenterRegistryError;
use crate::state::{Config, Registry};

/// Initialize the config singleton (once)
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        payer = admin,
        space = Config::SIZE,
        seeds = [SEED_CONFIG],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// The admin for the deployment
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Create an empty registry (permissionless)
#[derive(Accounts)]
pub struct CreateRegistry<'info> {
    #[account(init, payer = payer, space = Registry::LEN)]
    pub registry: AccountLoader<'info, Registry>,

    /// Pays for the registry account
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Add or remove a segmenter (admin only)
#[derive(Accounts)]
pub struct UpdateRegistry<'info> {
    #[account(mut)]
    pub registry: AccountLoader<'info, Registry>,

    #[account(
        seeds = [SEED_CONFIG],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Compared against config.admin in the instruction
    #[account(signer @ SegmenterRegistryError::Unauthorized)]
    pub admin: UncheckedAccount<'info>,
}

/// Appoint a new admin (admin only)
#[derive(Accounts)]
pub struct ChangeAdmin<'info> {
    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Compared against config.admin in the instruction
    #[account(signer @ SegmenterRegistryError::Unauthorized)]
    pub admin: UncheckedAccount<'info>,
}
