//! PDA seeds and sizing constants for the segmenter registry.
//!
//! Shared by the Anchor account contexts and by off-chain callers that
//! derive addresses themselves.

/// Config PDA seed
/// PDA: ["config"]
pub const SEED_CONFIG: &[u8] = b"config";

/// Number of segmenter slots in every registry account
pub const MAX_SEGMENTERS: usize = 64;
