// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::Polynomial;
use crate::traits::{FloatCoefficient, MakeCoefficient};
use num_traits::Zero;
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::trace;

/// Cache key over a float evaluation point.
///
/// Floats are not `Ord`; incomparable points (NaN) collapse into a single
/// slot instead of poisoning the map ordering.
#[derive(Clone, Copy, Debug)]
struct CachePoint<T>(T);

impl<T: PartialOrd> PartialEq for CachePoint<T> {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl<T: PartialOrd> Eq for CachePoint<T> {}

impl<T: PartialOrd> PartialOrd for CachePoint<T> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl<T: PartialOrd> Ord for CachePoint<T> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.0.partial_cmp(&rhs.0).unwrap_or(Ordering::Equal)
    }
}

/// Memoized antiderivative values keyed by evaluation point.
///
/// Cleared under the write lock whenever a coefficient changes; an entry is
/// only ever consistent with the coefficients that existed when it was
/// inserted. Hits take the read lock only.
pub(crate) struct IntegralCache<T> {
    entries: RwLock<BTreeMap<CachePoint<T>, T>>,
}

impl<T> Default for IntegralCache<T> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<T: Clone> Clone for IntegralCache<T> {
    fn clone(&self) -> Self {
        Self {
            entries: RwLock::new(self.entries.read().clone()),
        }
    }
}

impl<T> IntegralCache<T> {
    pub(crate) fn clear(&self) {
        self.entries.write().clear();
    }
}

impl<T: FloatCoefficient> IntegralCache<T> {
    fn lookup(&self, point: T) -> Option<T> {
        self.entries.read().get(&CachePoint(point)).copied()
    }

    fn insert(&self, point: T, value: T) {
        self.entries.write().insert(CachePoint(point), value);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.read().len()
    }
}

impl<T: FloatCoefficient> Polynomial<T> {
    /// Definite integral over `[a, b]`, computed as `F(b) - F(a)` where
    /// `F(n) = Σ coefficient[i] * pow(n, i + 1) / (i + 1)`.
    ///
    /// The two endpoint evaluations run as a bounded fork-join pair; the
    /// caller blocks until both complete. A panic in either task resurfaces
    /// here. Both tasks share the memo cache, so repeated integrals with a
    /// common bound skip recomputation until the next coefficient mutation.
    /// With `a == b` the endpoints may race to compute the same entry; the
    /// later insert overwrites the earlier one with an equal value.
    pub fn integral(&self, a: T, b: T) -> T {
        let (upper, lower) = rayon::join(
            || self.antiderivative_at(b),
            || self.antiderivative_at(a),
        );
        upper - lower
    }

    fn antiderivative_at(&self, point: T) -> T {
        if let Some(value) = self.integral_cache.lookup(point) {
            trace!(point = ?point, "integral cache hit");
            return value;
        }
        trace!(point = ?point, "integral cache miss");
        let mut value = T::zero();
        for (power, coefficient) in self.iter().enumerate() {
            let raised = power as i32 + 1;
            value = value + *coefficient * point.powi(raised) / T::make_coefficient(power + 1);
        }
        self.integral_cache.insert(point, value);
        value
    }
}
