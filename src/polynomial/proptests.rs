// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use super::Polynomial;
use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

fn coefficients() -> impl Strategy<Value = Vec<i64>> {
    prop_vec(-100i64..=100, 1..8)
}

proptest! {
    #[test]
    fn degree_tracks_storage(values in coefficients(), exponent in 0usize..12) {
        let mut poly = Polynomial::from(values.clone());
        prop_assert_eq!(poly.degree() + 1, poly.coefficients().len());
        poly.set_coefficient(7, exponent);
        prop_assert_eq!(poly.degree() + 1, poly.coefficients().len());
        prop_assert!(poly.coefficients().len() >= values.len().max(exponent + 1));
    }

    #[test]
    fn added_root_evaluates_to_zero(values in coefficients(), root in -20i64..=20) {
        let mut poly = Polynomial::from(values);
        let degree_before = poly.degree();
        poly.add_root(root);
        prop_assert_eq!(poly.degree(), degree_before + 1);
        prop_assert_eq!(poly.value_at(&root), 0);
    }

    #[test]
    fn addition_is_pointwise(lhs in coefficients(), rhs in coefficients()) {
        let sum = Polynomial::from(lhs.clone()) + Polynomial::from(rhs.clone());
        prop_assert_eq!(sum.coefficients().len(), lhs.len().max(rhs.len()));
        for (exponent, value) in sum.iter().enumerate() {
            let expected = lhs.get(exponent).copied().unwrap_or(0)
                + rhs.get(exponent).copied().unwrap_or(0);
            prop_assert_eq!(*value, expected);
        }
    }

    #[test]
    fn multiplication_degree_is_additive(lhs in coefficients(), rhs in coefficients()) {
        let product = Polynomial::from(lhs.clone()) * Polynomial::from(rhs.clone());
        prop_assert_eq!(product.degree(), lhs.len() - 1 + rhs.len() - 1);
    }

    #[test]
    fn evaluation_distributes_over_addition(
        lhs in coefficients(),
        rhs in coefficients(),
        x in -5i64..=5,
    ) {
        let l = Polynomial::from(lhs);
        let r = Polynomial::from(rhs);
        let sum = &l + &r;
        prop_assert_eq!(sum.value_at(&x), l.value_at(&x) + r.value_at(&x));
    }

    #[test]
    fn scaling_is_pointwise(values in coefficients(), scalar in -10i64..=10) {
        let mut poly = Polynomial::from(values.clone());
        poly.scale(scalar);
        for (exponent, value) in values.iter().enumerate() {
            prop_assert_eq!(poly.coefficient(exponent), Ok(value * scalar));
        }
    }
}
