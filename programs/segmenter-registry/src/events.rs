use anchor_lang::prelude::*;

/// Emitted when the config singleton is initialized
#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
}

/// Emitted when a new (empty) registry account is created
#[event]
pub struct RegistryCreated {
    pub registry: Pubkey,
    pub payer: Pubkey,
}

/// Emitted when a segmenter is added to a registry
#[event]
pub struct SegmenterAdded {
    pub registry: Pubkey,
    pub segmenter: Pubkey,
    /// Registered segmenters after the add
    pub count: u8,
}

/// Emitted when a segmenter is removed from a registry
#[event]
pub struct SegmenterRemoved {
    pub registry: Pubkey,
    pub segmenter: Pubkey,
    /// Registered segmenters after the removal
    pub count: u8,
}

/// Emitted when admin authority is handed over
#[event]
pub struct AdminChanged {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
