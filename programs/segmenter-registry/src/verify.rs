//! Helpers for programs that gate behaviour on a registered segmenter.
//!
//! Depend on this crate with the `cpi` feature and pass the registry and the
//! (signing) segmenter account through to these functions.

use anchor_lang::prelude::*;

use crate::state::Registry;

/// Identifies the application or frontend an invocation came from
pub type Origin = u16;

/// Origin when the application or frontend is unknown or could not be verified
pub const UNKNOWN_ORIGIN: Origin = 0;

/// The registry whose segmenters are trusted to vouch for an invocation's origin
pub const ORIGIN_VERIFYING_REGISTRY: Pubkey =
    pubkey!("Reg1Y127DNKYUTf3LinfEs3oiSiywJsyAobJMjqYqDE");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOriginResult {
    /// The invocation was signed by a segmenter
    InvokedBySegmenter(Origin),
    /// The invocation was not signed by a segmenter
    NotInvokedBySegmenter,
}

/// True iff `segmenter` signed and is registered in `registry`.
///
/// `registry` must be a Registry account owned by this program; anything
/// else (wrong owner, wrong discriminator, short data) yields `false`.
pub fn is_invoked_by_segmenter(registry: &AccountInfo<'_>, segmenter: &AccountInfo<'_>) -> bool {
    if registry.owner != &crate::ID {
        return false;
    }
    if !segmenter.is_signer {
        return false;
    }

    let Ok(data) = registry.try_borrow_data() else {
        return false;
    };
    if !data.starts_with(Registry::DISCRIMINATOR) {
        return false;
    }
    let Some(body) = data.get(Registry::DISCRIMINATOR.len()..Registry::LEN) else {
        return false;
    };
    let Ok(state) = bytemuck::try_from_bytes::<Registry>(body) else {
        return false;
    };

    state.segmenters().contains(segmenter.key)
}

/// Like [`is_invoked_by_segmenter`], but also decides how far to trust the
/// caller's `claimed_origin`. Only segmenters of [`ORIGIN_VERIFYING_REGISTRY`]
/// may vouch for an origin; any other registry yields [`UNKNOWN_ORIGIN`].
pub fn verify_origin(
    claimed_origin: Origin,
    registry: &AccountInfo<'_>,
    segmenter: &AccountInfo<'_>,
) -> VerifyOriginResult {
    if !is_invoked_by_segmenter(registry, segmenter) {
        return VerifyOriginResult::NotInvokedBySegmenter;
    }

    if registry.key != &ORIGIN_VERIFYING_REGISTRY {
        return VerifyOriginResult::InvokedBySegmenter(UNKNOWN_ORIGIN);
    }

    VerifyOriginResult::InvokedBySegmenter(claimed_origin)
}
