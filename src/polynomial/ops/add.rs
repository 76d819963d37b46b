// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::Polynomial;
use crate::traits::Coefficient;
use num_traits::Zero;
use std::ops::{Add, AddAssign};

impl<'a, T: Coefficient> AddAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &'a Polynomial<T>) {
        self.integral_cache.clear();
        // exponents present only on the right are implicit zeros on the left
        if rhs.len() > self.len() {
            self.coefficients.resize(rhs.len(), T::zero());
        }
        for (lhs, rhs) in self.coefficients.iter_mut().zip(rhs.iter()) {
            *lhs += rhs.clone();
        }
    }
}

impl<T: Coefficient> AddAssign for Polynomial<T> {
    fn add_assign(&mut self, rhs: Polynomial<T>) {
        *self += &rhs;
    }
}

impl<T: Coefficient> Add for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(mut self, rhs: Polynomial<T>) -> Polynomial<T> {
        self += &rhs;
        self
    }
}

impl<'a, T: Coefficient> Add<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(mut self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        self += rhs;
        self
    }
}

impl<'a, T: Coefficient> Add<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, mut rhs: Polynomial<T>) -> Polynomial<T> {
        rhs += self;
        rhs
    }
}

impl<'a, 'b, T: Coefficient> Add<&'b Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: &'b Polynomial<T>) -> Polynomial<T> {
        self.clone() + rhs
    }
}

impl<T: Coefficient> Zero for Polynomial<T> {
    fn zero() -> Self {
        Self::new()
    }
    fn set_zero(&mut self) {
        self.integral_cache.clear();
        self.coefficients.clear();
        self.coefficients.push(T::zero());
    }
    fn is_zero(&self) -> bool {
        // test in reverse order since the high coefficient is usually non-zero
        self.iter().rev().all(Zero::is_zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::ops::util::tests::check_binary_op;

    fn check_add(lhs: Polynomial<i32>, rhs: Polynomial<i32>, expected: &Polynomial<i32>) {
        check_binary_op(
            lhs,
            rhs,
            expected,
            |l, r| *l += r,
            |l, r| *l += r,
            |l, r| l + r,
            |l, r| l + r,
            |l, r| l + r,
            |l, r| l + r,
        );
    }

    #[test]
    fn test_add() {
        check_add(
            vec![5, -1, 4, 2].into(),
            vec![-3, 6, -2, 5, 3].into(),
            &vec![2, 5, 2, 7, 3].into(),
        );
        // the shorter right side leaves the high exponents of the left alone
        check_add(
            vec![1, 2, 3].into(),
            vec![1].into(),
            &vec![2, 2, 3].into(),
        );
    }

    #[test]
    fn test_add_keeps_cancelled_leading_slot() {
        check_add(
            vec![1, 2, 3, 4, -1].into(),
            vec![5, 6, 7, 8, 1].into(),
            &vec![6, 8, 10, 12, 0].into(),
        );
    }

    #[test]
    fn test_zero() {
        let zero = Polynomial::<i32>::zero();
        assert_eq!(zero.coefficients(), [0]);
        assert!(zero.is_zero());
        assert!(Polynomial::from(vec![0, 0, 0]).is_zero());
        assert!(!Polynomial::from(vec![0, 0, 1]).is_zero());
        let poly = Polynomial::from(vec![1, 2]) + Polynomial::zero();
        assert_eq!(poly.coefficients(), [1, 2]);
    }
}
