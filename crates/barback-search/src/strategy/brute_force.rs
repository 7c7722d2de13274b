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

//! Exhaustive include/exclude search.
//!
//! Enumerates every affordable subset of the ingredient universe and keeps
//! the one that makes the most cocktails. The search is a depth-first walk
//! with an explicit LIFO stack of steps instead of recursion: at depth `i` the
//! walk decides on ingredient `i`, explores the *exclude* branch first and
//! the *include* branch afterwards, and only when the ingredient still fits
//! the budget.
//!
//! # Tie-break
//!
//! The incumbent is replaced only by a strictly larger cocktail count. Since
//! excluded branches are visited before included ones, a tie is always won
//! by the subset found first, which is the one that excluded the earliest
//! differing ingredient.
//!
//! The running time is exponential in the number of ingredients; an optional
//! limit rejects large instances before any work is done.

use crate::{
    error::SolveError,
    feasibility::realizable_cocktails,
    selection::Selection,
    strategy::{Strategy, StrategyContext},
};
use barback_model::{catalog::Catalog, index::IngredientIndex, num::CostNumeric};
use fixedbitset::FixedBitSet;

/// Exact search for the maximum number of realizable cocktails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BruteForceStrategy {
    max_ingredients: Option<usize>,
}

impl BruteForceStrategy {
    /// Creates a strategy without an instance size limit.
    #[inline]
    pub fn new() -> Self {
        Self {
            max_ingredients: None,
        }
    }

    /// Creates a strategy that refuses catalogs with more than
    /// `max_ingredients` ingredients.
    #[inline]
    pub fn with_limit(max_ingredients: usize) -> Self {
        Self {
            max_ingredients: Some(max_ingredients),
        }
    }

    #[inline]
    pub fn max_ingredients(&self) -> Option<usize> {
        self.max_ingredients
    }

    /// Searches the whole include/exclude tree of `catalog` under `budget`.
    pub fn search<T>(&self, catalog: &Catalog<T>, budget: T) -> Result<Selection<T>, SolveError>
    where
        T: CostNumeric,
    {
        let num_ingredients = catalog.num_ingredients();
        match self.max_ingredients {
            Some(limit) if num_ingredients > limit => {
                return Err(SolveError::InstanceTooLarge {
                    ingredients: num_ingredients,
                    limit,
                });
            }
            _ => {}
        }

        let mut walk = Walk::new(catalog, budget);
        walk.run();

        let Incumbent {
            ingredients,
            total_cost,
            cocktails,
            count,
        } = walk.incumbent;

        log::debug!(
            "brute force evaluated {} subsets; best makes {} cocktails for {} (budget {})",
            walk.leaves,
            count,
            total_cost,
            budget
        );

        Ok(Selection::new(ingredients, total_cost)
            .with_cocktails(cocktails)
            .with_evaluations(walk.leaves))
    }
}

impl<T> Strategy<T> for BruteForceStrategy
where
    T: CostNumeric,
{
    fn name(&self) -> &str {
        "BruteForce"
    }

    fn select(&self, context: &StrategyContext<'_, T>) -> Result<Selection<T>, SolveError> {
        self.search(context.catalog(), context.budget())
    }
}

/// A pending unit of work on the search stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step<T> {
    /// Decide on the ingredient at `depth`, or evaluate a leaf when every
    /// ingredient has been decided.
    Expand { depth: usize, cost: T },
    /// Add the ingredient at `depth` and continue below it.
    Include { depth: usize, cost: T },
    /// Remove the ingredient again once its subtree is exhausted.
    Undo { ingredient: usize },
}

/// The best leaf seen so far.
#[derive(Debug, Clone)]
struct Incumbent<T> {
    ingredients: FixedBitSet,
    total_cost: T,
    cocktails: FixedBitSet,
    count: usize,
}

struct Walk<'a, T> {
    catalog: &'a Catalog<T>,
    budget: T,
    stack: Vec<Step<T>>,
    selected: FixedBitSet,
    incumbent: Incumbent<T>,
    leaves: u64,
}

impl<'a, T> Walk<'a, T>
where
    T: CostNumeric,
{
    fn new(catalog: &'a Catalog<T>, budget: T) -> Self {
        // The empty selection is always affordable and is the first leaf the
        // walk reaches, so it is a valid starting incumbent.
        let empty = catalog.empty_ingredient_set();
        let cocktails = realizable_cocktails(catalog, &empty);
        let count = cocktails.count_ones(..);

        Self {
            catalog,
            budget,
            stack: Vec::with_capacity(2 * catalog.num_ingredients() + 1),
            selected: empty.clone(),
            incumbent: Incumbent {
                ingredients: empty,
                total_cost: T::zero(),
                cocktails,
                count,
            },
            leaves: 0,
        }
    }

    fn run(&mut self) {
        let n = self.catalog.num_ingredients();
        self.stack.push(Step::Expand {
            depth: 0,
            cost: T::zero(),
        });

        while let Some(step) = self.stack.pop() {
            match step {
                Step::Expand { depth, cost } if depth == n => self.evaluate_leaf(cost),
                Step::Expand { depth, cost } => {
                    let price = self.catalog.ingredient_cost(IngredientIndex::new(depth));
                    // LIFO: the exclude branch is pushed last so it runs first.
                    // A total that overflows `T` exceeds every budget.
                    match cost.checked_add(&price) {
                        Some(with) if with <= self.budget => {
                            self.stack.push(Step::Include { depth, cost: with });
                        }
                        _ => {}
                    }
                    self.stack.push(Step::Expand {
                        depth: depth + 1,
                        cost,
                    });
                }
                Step::Include { depth, cost } => {
                    self.selected.insert(depth);
                    self.stack.push(Step::Undo { ingredient: depth });
                    self.stack.push(Step::Expand {
                        depth: depth + 1,
                        cost,
                    });
                }
                Step::Undo { ingredient } => self.selected.set(ingredient, false),
            }
        }

        debug_assert!(
            self.selected.is_clear(),
            "brute force walk finished with {} ingredients still selected",
            self.selected.count_ones(..)
        );
    }

    fn evaluate_leaf(&mut self, cost: T) {
        self.leaves += 1;

        let cocktails = realizable_cocktails(self.catalog, &self.selected);
        let count = cocktails.count_ones(..);
        if improves(count, self.incumbent.count) {
            self.incumbent = Incumbent {
                ingredients: self.selected.clone(),
                total_cost: cost,
                cocktails,
                count,
            };
        }
    }
}

/// A later leaf replaces the incumbent only when it is strictly better.
#[inline]
fn improves(candidate: usize, incumbent: usize) -> bool {
    candidate > incumbent
}
