// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::integral::IntegralCache;
use crate::polynomial::Polynomial;
use crate::traits::Coefficient;
use num_traits::{One, Zero};
use std::ops::{Mul, MulAssign};

impl<'a, 'b, T: Coefficient> Mul<&'b Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &'b Polynomial<T>) -> Polynomial<T> {
        // full convolution; the result keeps every slot, including a zero
        // leading coefficient, so the length is always degree_l + degree_r + 1
        let mut coefficients = vec![T::zero(); self.degree() + rhs.degree() + 1];
        for (l_power, l_coefficient) in self.iter().enumerate() {
            for (r_power, r_coefficient) in rhs.iter().enumerate() {
                coefficients[l_power + r_power] += l_coefficient.clone() * r_coefficient.clone();
            }
        }
        Polynomial {
            coefficients,
            integral_cache: IntegralCache::default(),
        }
    }
}

impl<'a, T: Coefficient> Mul<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self * &rhs
    }
}

impl<'a, T: Coefficient> Mul<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        &self * rhs
    }
}

impl<T: Coefficient> Mul for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self * &rhs
    }
}

impl<T: Coefficient> MulAssign for Polynomial<T> {
    fn mul_assign(&mut self, rhs: Polynomial<T>) {
        // replaces storage and cache wholesale
        *self = &*self * &rhs;
    }
}

impl<'a, T: Coefficient> MulAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &'a Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<T: Coefficient> One for Polynomial<T> {
    fn one() -> Self {
        Polynomial::from_term(T::one(), 0)
    }
    fn is_one(&self) -> bool {
        match self.coefficients() {
            [coefficient] => coefficient.is_one(),
            _ => false,
        }
    }
}
