// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Cost Numeric Bound
//!
//! Ingredient costs and budgets are non-negative integers. `CostNumeric`
//! collects the bounds every component needs on the cost type into a single
//! alias so generic signatures stay short. Any unsigned primitive integer
//! qualifies.
//!
//! Anything compared against a budget is summed with `checked_sum`: a total
//! that does not fit `T` is larger than every budget, so it never fits.
//! `saturating_sum` is only used where a clamped total is harmless, such as
//! value-per-cost ratios.

use num_traits::{PrimInt, Unsigned};
use std::hash::Hash;

/// A trait alias for unsigned integer types usable as ingredient costs.
pub trait CostNumeric:
    PrimInt + Unsigned + std::fmt::Debug + std::fmt::Display + Hash + Send + Sync
{
}

impl<T> CostNumeric for T where
    T: PrimInt + Unsigned + std::fmt::Debug + std::fmt::Display + Hash + Send + Sync
{
}

/// Sums costs, clamping at `T::max_value()` instead of overflowing.
#[inline]
pub fn saturating_sum<T, I>(costs: I) -> T
where
    T: CostNumeric,
    I: IntoIterator<Item = T>,
{
    costs
        .into_iter()
        .fold(T::zero(), |acc, cost| acc.saturating_add(cost))
}

/// Sums costs, returning `None` if the total does not fit `T`.
#[inline]
pub fn checked_sum<T, I>(costs: I) -> Option<T>
where
    T: CostNumeric,
    I: IntoIterator<Item = T>,
{
    costs
        .into_iter()
        .try_fold(T::zero(), |acc, cost| acc.checked_add(&cost))
}

/// Converts a cost into `f64` for ratio computations.
#[inline]
pub fn cost_to_f64<T>(cost: T) -> f64
where
    T: CostNumeric,
{
    cost.to_f64().unwrap_or(f64::MAX)
}
