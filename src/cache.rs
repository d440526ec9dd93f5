// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoization of solved unit-frame corner curves.
//!
//! Solved curves depend only on a handful of numbers, and an interactive
//! caller asks for the same few combinations over and over. Keys are the
//! parameters rounded to a fixed grid so that values differing only in the
//! last bits share an entry. Entries are never evicted or changed once
//! inserted; two threads missing on the same key both solve, and the first
//! insert wins.
//!
//! Without the `std` feature there is no process-wide storage and every
//! lookup solves directly.

// Keys are only stored with `std`.
#![cfg_attr(not(feature = "std"), allow(dead_code))]

use crate::g3::G3HalfCorner;
use crate::{solver, ContourError, CubicBez, G2Config};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Grid step of the quantized keys.
const KEY_QUANTUM: f64 = 1e-12;

/// The cache key of a [`G2Config`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct BaseCornerKey([i64; 4]);

impl BaseCornerKey {
    pub(crate) fn new(config: &G2Config) -> BaseCornerKey {
        BaseCornerKey([
            quantize(config.extended_fraction),
            quantize(config.arc_fraction),
            quantize(config.bezier_curvature_scale),
            quantize(config.arc_curvature_scale),
        ])
    }
}

/// The cache key of a G3 half corner, its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct G3Key(i64);

impl G3Key {
    pub(crate) fn new(extended_fraction: f64) -> G3Key {
        G3Key(quantize(extended_fraction))
    }
}

/// Round to the key grid.
///
/// Values beyond the `i64` range saturate and NaN maps to zero; such
/// parameters are outside the supported domain anyway.
#[allow(clippy::cast_possible_truncation)]
fn quantize(value: f64) -> i64 {
    (value / KEY_QUANTUM).round() as i64
}

/// The unit-frame half-corner Bézier for `config`, solved at most once per
/// key.
pub(crate) fn base_corner(config: &G2Config) -> Result<CubicBez, ContourError> {
    #[cfg(feature = "std")]
    {
        store::base_corners().get_or_solve(BaseCornerKey::new(config), || {
            solver::base_corner_bezier(config)
        })
    }
    #[cfg(not(feature = "std"))]
    {
        solver::base_corner_bezier(config)
    }
}

/// The unit-frame G3 half corner for `extended_fraction`, solved at most
/// once per key.
pub(crate) fn g3_half_corner(extended_fraction: f64) -> Result<G3HalfCorner, ContourError> {
    #[cfg(feature = "std")]
    {
        store::g3_half_corners().get_or_solve(G3Key::new(extended_fraction), || {
            G3HalfCorner::solve(extended_fraction)
        })
    }
    #[cfg(not(feature = "std"))]
    {
        G3HalfCorner::solve(extended_fraction)
    }
}

#[cfg(feature = "std")]
mod store {
    use std::collections::HashMap;
    use std::hash::Hash;
    use std::sync::{OnceLock, PoisonError, RwLock};

    use super::{BaseCornerKey, G3Key};
    use crate::g3::G3HalfCorner;
    use crate::{ContourError, CubicBez};

    /// Arena of solved values with an index from key to slot.
    #[derive(Debug)]
    pub(super) struct Memo<K, V> {
        index: HashMap<K, usize>,
        arena: Vec<V>,
    }

    impl<K: Copy + Eq + Hash, V: Clone> Memo<K, V> {
        fn new() -> Self {
            Memo {
                index: HashMap::new(),
                arena: Vec::new(),
            }
        }

        fn get(&self, key: &K) -> Option<V> {
            self.index.get(key).map(|&slot| self.arena[slot].clone())
        }

        /// Insert unless present; either way return the stored value.
        fn insert(&mut self, key: K, value: V) -> V {
            if let Some(existing) = self.get(&key) {
                return existing;
            }
            self.index.insert(key, self.arena.len());
            self.arena.push(value.clone());
            value
        }
    }

    /// A memo shared by every caller in the process.
    #[derive(Debug)]
    pub(super) struct SharedMemo<K, V>(RwLock<Memo<K, V>>);

    impl<K: Copy + Eq + Hash + core::fmt::Debug, V: Clone> SharedMemo<K, V> {
        fn new() -> Self {
            SharedMemo(RwLock::new(Memo::new()))
        }

        pub(super) fn get_or_solve(
            &self,
            key: K,
            solve: impl FnOnce() -> Result<V, ContourError>,
        ) -> Result<V, ContourError> {
            // A panic while holding the lock cannot leave a half-written
            // entry behind, so a poisoned lock is still usable.
            if let Some(value) = self
                .0
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(&key)
            {
                return Ok(value);
            }
            log::trace!("solving corner curve for {key:?}");
            let value = solve()?;
            Ok(self
                .0
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key, value))
        }
    }

    pub(super) fn base_corners() -> &'static SharedMemo<BaseCornerKey, CubicBez> {
        static BASE_CORNERS: OnceLock<SharedMemo<BaseCornerKey, CubicBez>> = OnceLock::new();
        BASE_CORNERS.get_or_init(SharedMemo::new)
    }

    pub(super) fn g3_half_corners() -> &'static SharedMemo<G3Key, G3HalfCorner> {
        static G3_HALF_CORNERS: OnceLock<SharedMemo<G3Key, G3HalfCorner>> = OnceLock::new();
        G3_HALF_CORNERS.get_or_init(SharedMemo::new)
    }
}
