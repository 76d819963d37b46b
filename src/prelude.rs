// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    polynomial::{CoefficientOutOfRange, Polynomial},
    traits::{Derivative as _, PolynomialEval as _},
};
pub use num_traits::{One as _, Zero as _};
