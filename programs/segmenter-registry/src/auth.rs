use anchor_lang::prelude::*;

use crate::error::SegmenterRegistryError;
use crate::state::Config;

/// Admin check shared by every instruction that mutates config or registry
/// state. The claimed admin must both match `config.admin` and have signed
/// the transaction.
pub fn authorize(claimed_admin: &Pubkey, is_signer: bool, config: &Config) -> Result<()> {
    require!(is_signer, SegmenterRegistryError::Unauthorized);
    require_keys_eq!(
        *claimed_admin,
        config.admin,
        SegmenterRegistryError::Unauthorized
    );
    Ok(())
}
