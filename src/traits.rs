// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_traits::{Float, NumAssign};
use std::fmt;
use std::ops::Neg;

/// Bounds every polynomial coefficient type must satisfy.
///
/// Covers the signed primitive integers and the primitive floats. `Send` and
/// `Sync` are required so a shared polynomial can be read from the concurrent
/// integral endpoint tasks.
pub trait Coefficient:
    NumAssign + Neg<Output = Self> + Clone + fmt::Debug + Send + Sync
{
}

impl<T> Coefficient for T where
    T: NumAssign + Neg<Output = Self> + Clone + fmt::Debug + Send + Sync
{
}

/// Produces the coefficient equal to `v`, used to scale terms by their
/// exponent in derivative and antiderivative computation.
pub trait MakeCoefficient<V> {
    fn make_coefficient(v: V) -> Self;
}

macro_rules! impl_make_coefficient {
    ($($t:ty),*) => {
        $(
            impl MakeCoefficient<usize> for $t {
                fn make_coefficient(v: usize) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_make_coefficient!(i8, i16, i32, i64, i128, isize, f32, f64);

/// Coefficient types for which the definite integral is defined.
///
/// Antiderivative terms divide by `exponent + 1`, so integer coefficient
/// types are rejected at the type level: a polynomial over an integer type
/// simply has no integral operation to call.
pub trait FloatCoefficient: Coefficient + Float + MakeCoefficient<usize> {}

impl<T: Coefficient + Float + MakeCoefficient<usize>> FloatCoefficient for T {}

pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}

pub trait Derivative {
    type Output;
    fn derivative(self) -> Self::Output;
}
