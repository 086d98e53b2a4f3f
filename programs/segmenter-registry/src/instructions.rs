use anchor_lang::prelude::*;

use crate::auth::authorize;
use crate::contexts::*;
use crate::error::SegmenterRegistryError;
use crate::events::*;
use crate::state::Registry;

/// Set the deployment admin to the signer.
///
/// The config PDA is created on first use; any later call finds an admin
/// already set and is rejected.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require!(
        !config.is_initialized(),
        SegmenterRegistryError::AlreadyInitialized
    );

    let admin = ctx.accounts.admin.key();
    config.admin = admin;

    emit!(ConfigInitialized { admin });

    msg!("Config initialized: admin={}", admin);
    Ok(())
}

pub fn create_registry(ctx: Context<CreateRegistry>) -> Result<()> {
    *ctx.accounts.registry.load_init()? = Registry::new();

    let registry = ctx.accounts.registry.key();
    let payer = ctx.accounts.payer.key();

    emit!(RegistryCreated { registry, payer });

    msg!("Registry {} created by {}", registry, payer);
    Ok(())
}

pub fn add_segmenter(ctx: Context<UpdateRegistry>, new_segmenter: Pubkey) -> Result<()> {
    authorize(
        ctx.accounts.admin.key,
        ctx.accounts.admin.is_signer,
        &ctx.accounts.config,
    )?;

    let registry_key = ctx.accounts.registry.key();
    let mut registry = ctx.accounts.registry.load_mut()?;
    registry.add(new_segmenter)?;
    let count = registry.count() as u8;

    emit!(SegmenterAdded {
        registry: registry_key,
        segmenter: new_segmenter,
        count,
    });

    msg!(
        "Segmenter {} added to registry {} ({} registered)",
        new_segmenter,
        registry_key,
        count
    );
    Ok(())
}

pub fn remove_segmenter(ctx: Context<UpdateRegistry>, key: Pubkey) -> Result<()> {
    authorize(
        ctx.accounts.admin.key,
        ctx.accounts.admin.is_signer,
        &ctx.accounts.config,
    )?;

    let registry_key = ctx.accounts.registry.key();
    let mut registry = ctx.accounts.registry.load_mut()?;
    registry.remove(key)?;
    let count = registry.count() as u8;

    emit!(SegmenterRemoved {
        registry: registry_key,
        segmenter: key,
        count,
    });

    msg!(
        "Segmenter {} removed from registry {} ({} registered)",
        key,
        registry_key,
        count
    );
    Ok(())
}

pub fn change_admin(ctx: Context<ChangeAdmin>, new_admin: Pubkey) -> Result<()> {
    authorize(
        ctx.accounts.admin.key,
        ctx.accounts.admin.is_signer,
        &ctx.accounts.config,
    )?;
    require_keys_neq!(
        new_admin,
        Pubkey::default(),
        SegmenterRegistryError::InvalidAdmin
    );

    let config = &mut ctx.accounts.config;
    let old_admin = config.admin;
    config.admin = new_admin;

    emit!(AdminChanged {
        old_admin,
        new_admin,
    });

    msg!("Admin changed from {} to {}", old_admin, new_admin);
    Ok(())
}
