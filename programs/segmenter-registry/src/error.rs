use anchor_lang::prelude::*;

/// On-chain codes are the discriminant plus Anchor's 6000 offset (15000..)
#[error_code]
pub enum SegmenterRegistryError {
    // ========== Registry Errors (9000-9049) ==========
    #[msg("The registry is at capacity")]
    CapacityExceeded = 9000,
    #[msg("Segmenter already exists in the registry")]
    AlreadyRegistered = 9001,
    #[msg("The admin specified is not authorized to invoke this instruction")]
    Unauthorized = 9002,
    #[msg("Segmenter is not registered in the registry")]
    NotRegistered = 9003,
    #[msg("Config already initialized")]
    AlreadyInitialized = 9004,

    // ========== Input Errors (9050-9099) ==========
    #[msg("The default pubkey cannot be registered as a segmenter")]
    InvalidSegmenter = 9050,
    #[msg("The default pubkey cannot be appointed admin")]
    InvalidAdmin = 9051,
}
