use anchor_lang::prelude::*;

use crate::constants::{MAX_SEGMENTERS, SEED_CONFIG};
use crate::error::SegmenterRegistryError;

/// Global config for the deployment
/// Seeds: ["config"]
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// The account allowed to modify Registry accounts and appoint a new admin
    pub admin: Pubkey,
}

impl Config {
    /// 8 (discriminator) + 32 (admin)
    pub const SIZE: usize = 8 + 32;

    /// A freshly created config has not had its admin set yet
    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }
}

/// Derive the config PDA for `program_id`.
///
/// Recomputed wherever it is needed; the on-chain contexts check the same
/// seeds against the account the caller supplied.
pub fn find_config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_CONFIG], program_id)
}

// ============================================================================
// Registry - fixed-capacity segmenter set
// ============================================================================
//
// Registered keys always occupy a contiguous prefix of `registered_segmenters`
// in insertion order. Every slot after the prefix holds `Pubkey::default()`.
// Size: 8 + 2048 bytes, allocated once at creation.

/// The set of segmenters authorized by one registry
#[account(zero_copy)]
pub struct Registry {
    pub registered_segmenters: [Pubkey; MAX_SEGMENTERS],
}

impl Registry {
    /// 8 (discriminator) + 64 * 32 (registered_segmenters)
    pub const LEN: usize = 8 + std::mem::size_of::<Self>();

    /// The empty-slot marker
    pub const SENTINEL: Pubkey = Pubkey::new_from_array([0u8; 32]);

    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            registered_segmenters: [Self::SENTINEL; MAX_SEGMENTERS],
        }
    }

    /// Number of registered segmenters
    pub fn count(&self) -> usize {
        self.registered_segmenters
            .iter()
            .position(|item| item == &Self::SENTINEL)
            .unwrap_or(MAX_SEGMENTERS)
    }

    /// The registered prefix, in insertion order
    pub fn segmenters(&self) -> &[Pubkey] {
        &self.registered_segmenters[..self.count()]
    }

    pub fn is_full(&self) -> bool {
        self.count() == MAX_SEGMENTERS
    }

    pub fn contains(&self, key: &Pubkey) -> bool {
        self.registered_segmenters.contains(key)
    }

    /// Place `key` in the first empty slot.
    pub fn add(&mut self, key: Pubkey) -> Result<()> {
        require_keys_neq!(key, Self::SENTINEL, SegmenterRegistryError::InvalidSegmenter);
        require!(
            !self.contains(&key),
            SegmenterRegistryError::AlreadyRegistered
        );

        let Some(insert_idx) = self
            .registered_segmenters
            .iter()
            .position(|item| item == &Self::SENTINEL)
        else {
            return err!(SegmenterRegistryError::CapacityExceeded);
        };

        self.registered_segmenters[insert_idx] = key;
        Ok(())
    }

    /// Remove `key` and shift every later entry one slot down so the
    /// registered prefix stays contiguous and keeps its relative order.
    pub fn remove(&mut self, key: Pubkey) -> Result<()> {
        require_keys_neq!(key, Self::SENTINEL, SegmenterRegistryError::InvalidSegmenter);

        let Some(idx) = self
            .registered_segmenters
            .iter()
            .position(|item| item == &key)
        else {
            return err!(SegmenterRegistryError::NotRegistered);
        };

        self.registered_segmenters.copy_within(idx + 1.., idx);
        self.registered_segmenters[MAX_SEGMENTERS - 1] = Self::SENTINEL;
        Ok(())
    }

    /// Membership in the form external tooling compares against: registered
    /// keys sorted by byte value, padded with the sentinel to full capacity.
    pub fn sorted_padded(&self) -> [Pubkey; MAX_SEGMENTERS] {
        let mut out = self.registered_segmenters;
        out[..self.count()].sort_unstable();
        out
    }
}

/// Sort `keys` by byte value and pad with the sentinel to `MAX_SEGMENTERS`.
///
/// `None` if `keys` cannot fit in a registry.
pub fn sorted_padded(keys: &[Pubkey]) -> Option<[Pubkey; MAX_SEGMENTERS]> {
    let mut out = [Registry::SENTINEL; MAX_SEGMENTERS];
    let prefix = out.get_mut(..keys.len())?;
    prefix.copy_from_slice(keys);
    prefix.sort_unstable();
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> Vec<Pubkey> {
        (0..n).map(|_| Pubkey::new_unique()).collect()
    }

    fn assert_error(result: Result<()>, expected: SegmenterRegistryError) {
        assert_eq!(result.unwrap_err(), Error::from(expected));
    }

    #[test]
    fn test_config_size() {
        assert_eq!(Config::SIZE, 40);
        assert_eq!(Config::SIZE, Config::DISCRIMINATOR.len() + Config::INIT_SPACE);
    }

    #[test]
    fn test_registry_size() {
        assert_eq!(Registry::LEN, 8 + 64 * 32);
    }

    #[test]
    fn test_config_address_is_deterministic() {
        let (address, bump) = find_config_address(&crate::ID);
        assert_eq!(find_config_address(&crate::ID), (address, bump));
        assert_eq!(
            Pubkey::create_program_address(&[SEED_CONFIG, &[bump]], &crate::ID).unwrap(),
            address
        );
        assert_ne!(find_config_address(&Pubkey::new_unique()).0, address);
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert_eq!(registry.count(), 0);
        assert!(registry.segmenters().is_empty());
        assert!(registry
            .registered_segmenters
            .iter()
            .all(|k| *k == Registry::SENTINEL));
    }

    #[test]
    fn test_add_then_remove() {
        let mut registry = Registry::new();
        let key = Pubkey::new_unique();

        registry.add(key).unwrap();
        assert!(registry.contains(&key));
        assert_eq!(registry.count(), 1);

        registry.remove(key).unwrap();
        assert!(!registry.contains(&key));
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_add_duplicate() {
        let mut registry = Registry::new();
        let key = Pubkey::new_unique();

        registry.add(key).unwrap();
        assert_error(registry.add(key), SegmenterRegistryError::AlreadyRegistered);
        assert_eq!(registry.segmenters(), &[key]);
    }

    #[test]
    fn test_remove_missing() {
        let mut registry = Registry::new();
        registry.add(Pubkey::new_unique()).unwrap();
        let before = registry.registered_segmenters;

        assert_error(
            registry.remove(Pubkey::new_unique()),
            SegmenterRegistryError::NotRegistered,
        );
        assert_eq!(registry.registered_segmenters, before);
    }

    #[test]
    fn test_sentinel_rejected() {
        let mut registry = Registry::new();
        assert_error(
            registry.add(Registry::SENTINEL),
            SegmenterRegistryError::InvalidSegmenter,
        );
        assert_error(
            registry.remove(Registry::SENTINEL),
            SegmenterRegistryError::InvalidSegmenter,
        );
    }

    #[test]
    fn test_capacity() {
        let mut registry = Registry::new();
        let all = keys(MAX_SEGMENTERS);
        for key in &all {
            registry.add(*key).unwrap();
        }
        assert!(registry.is_full());
        assert_eq!(registry.segmenters(), all.as_slice());

        let before = registry.registered_segmenters;
        assert_error(
            registry.add(Pubkey::new_unique()),
            SegmenterRegistryError::CapacityExceeded,
        );
        assert_eq!(registry.registered_segmenters, before);

        // A present key on a full registry is still a duplicate
        assert_error(registry.add(all[10]), SegmenterRegistryError::AlreadyRegistered);
    }

    #[test]
    fn test_remove_from_full_registry() {
        let mut registry = Registry::new();
        let all = keys(MAX_SEGMENTERS);
        for key in &all {
            registry.add(*key).unwrap();
        }

        registry.remove(all[0]).unwrap();
        assert_eq!(registry.segmenters(), &all[1..]);
        assert_eq!(registry.registered_segmenters[MAX_SEGMENTERS - 1], Registry::SENTINEL);

        registry.remove(all[MAX_SEGMENTERS - 1]).unwrap();
        assert_eq!(registry.segmenters(), &all[1..MAX_SEGMENTERS - 1]);
    }

    #[test]
    fn test_remove_compacts_in_order() {
        let mut registry = Registry::new();
        let s = keys(4);
        for key in &s {
            registry.add(*key).unwrap();
        }

        registry.remove(s[1]).unwrap();
        assert_eq!(registry.segmenters(), &[s[0], s[2], s[3]]);

        registry.remove(s[3]).unwrap();
        assert_eq!(registry.segmenters(), &[s[0], s[2]]);
        assert!(registry.registered_segmenters[2..]
            .iter()
            .all(|k| *k == Registry::SENTINEL));

        assert_eq!(registry.sorted_padded(), sorted_padded(&[s[0], s[2]]).unwrap());
    }

    #[test]
    fn test_readd_goes_to_end() {
        let mut registry = Registry::new();
        let s = keys(3);
        for key in &s {
            registry.add(*key).unwrap();
        }

        registry.remove(s[0]).unwrap();
        registry.add(s[0]).unwrap();
        assert_eq!(registry.segmenters(), &[s[1], s[2], s[0]]);
    }

    #[test]
    fn test_sorted_padded() {
        let a = Pubkey::new_from_array([3; 32]);
        let b = Pubkey::new_from_array([1; 32]);
        let c = Pubkey::new_from_array([2; 32]);

        let padded = sorted_padded(&[a, b, c]).unwrap();
        assert_eq!(&padded[..3], &[b, c, a]);
        assert!(padded[3..].iter().all(|k| *k == Registry::SENTINEL));
        assert_eq!(sorted_padded(&[]), Some([Registry::SENTINEL; MAX_SEGMENTERS]));
    }

    #[test]
    fn test_sorted_padded_over_capacity() {
        let full = keys(MAX_SEGMENTERS);
        let padded = sorted_padded(&full).unwrap();
        assert!(padded.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(sorted_padded(&keys(MAX_SEGMENTERS + 1)), None);
    }

    #[test]
    fn test_registry_sorted_padded_matches_free_fn() {
        let mut registry = Registry::new();
        let s = keys(5);
        for key in &s {
            registry.add(*key).unwrap();
        }
        assert_eq!(Some(registry.sorted_padded()), sorted_padded(&s));
    }

    #[test]
    fn test_config_initialized_flag() {
        let mut config = Config {
            admin: Pubkey::default(),
        };
        assert!(!config.is_initialized());

        config.admin = Pubkey::new_unique();
        assert!(config.is_initialized());
    }
}
