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

use barback_model::num::CostNumeric;
use fixedbitset::FixedBitSet;

/// The raw result of a strategy.
///
/// `cocktails` is only set by strategies whose objective already decides
/// which cocktails are realizable; the solver derives it for the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    ingredients: FixedBitSet,
    total_cost: T,
    cocktails: Option<FixedBitSet>,
    evaluations: u64,
}

impl<T> Selection<T>
where
    T: CostNumeric,
{
    /// Creates a selection from the chosen ingredients and their total cost.
    #[inline]
    pub fn new(ingredients: FixedBitSet, total_cost: T) -> Self {
        Self {
            ingredients,
            total_cost,
            cocktails: None,
            evaluations: 0,
        }
    }

    /// Attaches the set of realizable cocktails.
    #[inline]
    pub fn with_cocktails(mut self, cocktails: FixedBitSet) -> Self {
        self.cocktails = Some(cocktails);
        self
    }

    /// Records how many candidates the strategy evaluated.
    #[inline]
    pub fn with_evaluations(mut self, evaluations: u64) -> Self {
        self.evaluations = evaluations;
        self
    }

    /// Returns the chosen ingredients.
    #[inline]
    pub fn ingredients(&self) -> &FixedBitSet {
        &self.ingredients
    }

    /// Returns the total cost of the chosen ingredients.
    #[inline]
    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// Returns the realizable cocktails, if the strategy determined them.
    #[inline]
    pub fn cocktails(&self) -> Option<&FixedBitSet> {
        self.cocktails.as_ref()
    }

    /// Returns the number of evaluated candidates.
    #[inline]
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Returns the number of chosen ingredients.
    #[inline]
    pub fn num_ingredients(&self) -> usize {
        self.ingredients.count_ones(..)
    }
}

impl<T> std::fmt::Display for Selection<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Selection(ingredients: {}, total_cost: {}, evaluations: {})",
            self.num_ingredients(),
            self.total_cost,
            self.evaluations
        )
    }
}
