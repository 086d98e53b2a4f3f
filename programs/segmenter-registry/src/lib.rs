use anchor_lang::prelude::*;

declare_id!("SRegZsVZDDqwc7W5iMUSsmKNnXzgfczKzFpimRp5iWw");

pub mod auth;
pub mod constants;
pub mod contexts;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod verify;

// Re-export all contexts at crate root for Anchor macro
pub use contexts::*;
pub use events::*;
pub use state::*;

pub use error::SegmenterRegistryError;
pub use verify::{
    is_invoked_by_segmenter, verify_origin, Origin, VerifyOriginResult, ORIGIN_VERIFYING_REGISTRY,
};

#[program]
pub mod segmenter_registry {
    use super::*;

    /// Initializes the deployment with the signer as admin
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Creates a new, empty registry (anyone may call)
    pub fn create_registry(ctx: Context<CreateRegistry>) -> Result<()> {
        instructions::create_registry(ctx)
    }

    /// Allows the admin to add a new segmenter to a registry
    pub fn add_segmenter(ctx: Context<UpdateRegistry>, new_segmenter: Pubkey) -> Result<()> {
        instructions::add_segmenter(ctx, new_segmenter)
    }

    /// Allows the admin to remove an existing segmenter from a registry
    pub fn remove_segmenter(ctx: Context<UpdateRegistry>, key: Pubkey) -> Result<()> {
        instructions::remove_segmenter(ctx, key)
    }

    /// Allows the admin to appoint a new admin
    pub fn change_admin(ctx: Context<ChangeAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::change_admin(ctx, new_admin)
    }
}
