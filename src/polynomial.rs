// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::traits::{Coefficient, Derivative, MakeCoefficient, PolynomialEval};
use num_traits::Zero;
use self::integral::IntegralCache;
use std::fmt;
use std::slice;
use std::vec;
use thiserror::Error;

mod integral;
mod ops;
#[cfg(test)]
mod proptests;

/// A single-variable polynomial with dense coefficient storage.
///
/// the term at exponent `n` is `self.coefficients()[n] * pow(x, n)`
///
/// # Invariants
///
/// `self.coefficients().len() >= 1`: the constant term always exists, so a
/// default polynomial is `[0]` rather than empty. The highest stored exponent
/// is authoritative even when the value there is zero; no trailing-zero
/// trimming is ever performed, and `degree()` reports the highest
/// materialized slot rather than the mathematical degree.
pub struct Polynomial<T> {
    coefficients: Vec<T>,
    integral_cache: IntegralCache<T>,
}

/// Lookup past the highest materialized exponent.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("no coefficient at exponent {exponent}: highest exponent is {degree}")]
pub struct CoefficientOutOfRange {
    pub exponent: usize,
    pub degree: usize,
}

impl<T: Coefficient> Default for Polynomial<T> {
    fn default() -> Self {
        Self {
            coefficients: vec![T::zero()],
            integral_cache: IntegralCache::default(),
        }
    }
}

impl<T: Coefficient> Clone for Polynomial<T> {
    fn clone(&self) -> Self {
        Self {
            coefficients: self.coefficients.clone(),
            integral_cache: self.integral_cache.clone(),
        }
    }
}

// the memo cache never takes part in equality or debug output
impl<T: PartialEq> PartialEq for Polynomial<T> {
    fn eq(&self, rhs: &Self) -> bool {
        self.coefficients == rhs.coefficients
    }
}

impl<T: fmt::Debug> fmt::Debug for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("coefficients", &self.coefficients)
            .finish()
    }
}

impl<T: Coefficient> From<Vec<T>> for Polynomial<T> {
    fn from(coefficients: Vec<T>) -> Self {
        let mut retval = Self::new();
        retval.set_coefficient_range(coefficients, 0);
        retval
    }
}

impl<T: Coefficient> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut retval = Self::new();
        retval.set_coefficient_range(iter, 0);
        retval
    }
}

impl<T: Coefficient> Polynomial<T> {
    /// the degree-0 zero polynomial
    pub fn new() -> Self {
        Default::default()
    }

    /// a single term `value * pow(x, exponent)`, zero everywhere below
    pub fn from_term(value: T, exponent: usize) -> Self {
        let mut retval = Self::new();
        retval.set_coefficient(value, exponent);
        retval
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    pub fn iter(&self) -> slice::Iter<T> {
        self.coefficients.iter()
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        // storage always holds at least the constant term
        false
    }

    /// highest materialized exponent; a zero leading coefficient still counts
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficient(&self, exponent: usize) -> Result<T, CoefficientOutOfRange> {
        self.coefficients
            .get(exponent)
            .cloned()
            .ok_or(CoefficientOutOfRange {
                exponent,
                degree: self.degree(),
            })
    }

    /// Sets the coefficient at `exponent`, zero-filling any exponents
    /// materialized on the way up.
    ///
    /// Invalidation is conservative: the integral cache is cleared even when
    /// the written value equals the stored one.
    pub fn set_coefficient(&mut self, value: T, exponent: usize) {
        self.integral_cache.clear();
        if exponent < self.coefficients.len() {
            self.coefficients[exponent] = value;
        } else {
            self.coefficients.resize(exponent, T::zero());
            self.coefficients.push(value);
        }
    }

    /// Assigns `values` to consecutive exponents `offset, offset + 1, …` in
    /// iteration order.
    pub fn set_coefficient_range<I: IntoIterator<Item = T>>(&mut self, values: I, offset: usize) {
        for (i, value) in values.into_iter().enumerate() {
            self.set_coefficient(value, offset + i);
        }
    }

    /// multiplies every coefficient by `scalar` in place
    pub fn scale(&mut self, scalar: T) {
        self.integral_cache.clear();
        for coefficient in self.coefficients.iter_mut() {
            *coefficient *= scalar.clone();
        }
    }

    /// In-place multiplication by the monomial `(x - root)`; the degree grows
    /// by exactly one.
    ///
    /// Single descending pass: each coefficient is first lifted one exponent
    /// up (added to the already-updated value there, or pushed when that slot
    /// does not exist yet), then replaced by `-(root * old_value)`.
    pub fn add_root(&mut self, root: T) {
        self.integral_cache.clear();
        let start = self.degree();
        for i in (0..=start).rev() {
            let coefficient = self.coefficients[i].clone();
            if i == start {
                self.coefficients.push(coefficient.clone());
            } else {
                let lifted = self.coefficients[i + 1].clone() + coefficient.clone();
                self.coefficients[i + 1] = lifted;
            }
            self.coefficients[i] = -(root.clone() * coefficient);
        }
    }

    /// applies `add_root` for each root in order
    pub fn add_roots<I: IntoIterator<Item = T>>(&mut self, roots: I) {
        for root in roots {
            self.add_root(root);
        }
    }

    /// Horner evaluation of `Σ coefficient[i] * pow(x, i)`; pure, no cache
    /// interaction.
    pub fn value_at(&self, x: &T) -> T {
        let mut iter = self.iter().rev();
        let mut retval = match iter.next() {
            Some(leading) => leading.clone(),
            None => return T::zero(),
        };
        for coefficient in iter {
            retval *= x.clone();
            retval += coefficient.clone();
        }
        retval
    }
}

impl<T: Coefficient> PolynomialEval<T> for Polynomial<T> {
    fn eval(self, x: &T) -> T {
        self.value_at(x)
    }
}

impl<'a, T: Coefficient> PolynomialEval<T> for &'a Polynomial<T> {
    fn eval(self, x: &T) -> T {
        self.value_at(x)
    }
}

impl<'a, T: Coefficient> PolynomialEval<T> for &'a mut Polynomial<T> {
    fn eval(self, x: &T) -> T {
        self.value_at(x)
    }
}

impl<'a, T: Coefficient + MakeCoefficient<usize>> Derivative for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn derivative(self) -> Polynomial<T> {
        if self.len() == 1 {
            return Polynomial::new();
        }
        self.iter()
            .enumerate()
            .skip(1)
            .map(|(power, coefficient)| coefficient.clone() * T::make_coefficient(power))
            .collect()
    }
}

impl<T: Coefficient + MakeCoefficient<usize>> Derivative for Polynomial<T> {
    type Output = Polynomial<T>;
    fn derivative(self) -> Polynomial<T> {
        (&self).derivative()
    }
}

impl<T> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P(x) = ")?;
        for (power, coefficient) in self.coefficients.iter().enumerate().rev() {
            write!(f, "{}", coefficient)?;
            match power {
                0 => {}
                1 => write!(f, "x + ")?,
                _ => write!(f, "x^{} + ", power)?,
            }
        }
        Ok(())
    }
}
