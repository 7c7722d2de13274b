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

//! Dynamic programming (0/1 knapsack) on ingredient values.
//!
//! Every ingredient of the universe is an item with its cost as weight and its
//! value (the number of distinct cocktails using it) as profit; the budget is
//! the capacity. The strategy maximizes the sum of ingredient values, which is
//! a proxy for, not the same as, the number of realizable cocktails.
//!
//! # Table
//!
//! The classic tabulation is indexed by (items processed, cost limit
//! `0..=budget`). Only the previous row of best values is needed to compute
//! the next one, so values are kept in two rolling rows. To recover the chosen
//! set, a `FixedBitSet` with one bit per (item, cost limit) cell records
//! whether the item was taken in that cell. Walking the bits backwards from
//! (all items, budget) reproduces exactly the set a list-carrying table would
//! hold in its final cell.
//!
//! # Tie-break
//!
//! When taking an item yields the same value as leaving it, the item is
//! taken (`with >= without`). This applies to zero-value ingredients too: they
//! are bought whenever they fit without displacing value. The rule is kept
//! as-is so results are reproducible.
//!
//! Time and bookkeeping space are both `O(n * budget)`. Tables with more than
//! [`MAX_TABLE_CELLS`] cells are refused with [`SolveError::BudgetTooLarge`]
//! rather than allocated.

use crate::{
    error::SolveError,
    selection::Selection,
    strategy::{Strategy, StrategyContext},
    valuation::IngredientValues,
};
use barback_model::{catalog::Catalog, index::IngredientIndex, num::CostNumeric};
use fixedbitset::FixedBitSet;

/// Largest (item, cost limit) table the strategy builds: 32 Mi cells, which
/// is 4 MiB of decision bits and at most 512 MiB of rolling rows.
pub const MAX_TABLE_CELLS: usize = 1 << 25;

/// Exact 0/1 knapsack over ingredient values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DynamicProgrammingStrategy;

impl DynamicProgrammingStrategy {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs the knapsack over explicit ingredient values.
    pub fn select_by_value<T>(
        catalog: &Catalog<T>,
        budget: T,
        values: &IngredientValues,
    ) -> Result<Selection<T>, SolveError>
    where
        T: CostNumeric,
    {
        let too_large = || SolveError::BudgetTooLarge(budget.to_string());
        let num_items = catalog.num_ingredients();
        if num_items == 0 {
            return Ok(Selection::new(catalog.empty_ingredient_set(), T::zero()));
        }

        let width = budget
            .to_usize()
            .and_then(|b| b.checked_add(1))
            .filter(|&w| w <= MAX_TABLE_CELLS)
            .ok_or_else(too_large)?;
        let cells = num_items
            .checked_mul(width)
            .filter(|&c| c <= MAX_TABLE_CELLS)
            .ok_or_else(too_large)?;

        let mut previous = Self::zeroed_row(width).ok_or_else(too_large)?;
        let mut current = Self::zeroed_row(width).ok_or_else(too_large)?;
        let mut taken = FixedBitSet::with_capacity(cells);

        for item in catalog.ingredient_indices() {
            let row = item.get() * width;
            let value = values.get(item);
            // A cost beyond `usize` never fits any cost limit.
            let cost = catalog.ingredient_cost(item).to_usize();

            for limit in 0..width {
                let without = previous[limit];
                current[limit] = match cost {
                    Some(cost) if cost <= limit => {
                        let with = previous[limit - cost] + value;
                        if with >= without {
                            taken.insert(row + limit);
                            with
                        } else {
                            without
                        }
                    }
                    _ => without,
                };
            }

            std::mem::swap(&mut previous, &mut current);
        }

        let (selected, total_cost) = Self::reconstruct(catalog, &taken, width);

        log::debug!(
            "dynamic programming reached value {} with {} ingredients for {} (budget {})",
            previous[width - 1],
            selected.count_ones(..),
            total_cost,
            budget
        );

        debug_assert!(
            total_cost <= budget,
            "dynamic programming selected ingredients costing {} over budget {}",
            total_cost,
            budget
        );

        Ok(Selection::new(selected, total_cost).with_evaluations(cells as u64))
    }

    fn zeroed_row(width: usize) -> Option<Vec<u64>> {
        let mut row = Vec::new();
        row.try_reserve_exact(width).ok()?;
        row.resize(width, 0);
        Some(row)
    }

    /// Walks the decision bits back from (all items, budget) and returns the
    /// taken set with its cost.
    fn reconstruct<T>(catalog: &Catalog<T>, taken: &FixedBitSet, width: usize) -> (FixedBitSet, T)
    where
        T: CostNumeric,
    {
        let mut selected = catalog.empty_ingredient_set();
        let mut total_cost = T::zero();
        let mut limit = width - 1;

        for item in catalog.ingredient_indices().rev() {
            if taken.contains(item.get() * width + limit) {
                selected.insert(item.get());
                // Taken cells always have `cost <= limit`, so the running
                // total stays within the budget.
                limit -= Self::cost_as_usize(catalog, item);
                total_cost = total_cost + catalog.ingredient_cost(item);
            }
        }

        (selected, total_cost)
    }

    #[inline]
    fn cost_as_usize<T>(catalog: &Catalog<T>, item: IngredientIndex) -> usize
    where
        T: CostNumeric,
    {
        catalog.ingredient_cost(item).to_usize().unwrap_or(usize::MAX)
    }
}

impl<T> Strategy<T> for DynamicProgrammingStrategy
where
    T: CostNumeric,
{
    fn name(&self) -> &str {
        "DynamicProgramming"
    }

    fn select(&self, context: &StrategyContext<'_, T>) -> Result<Selection<T>, SolveError> {
        Self::select_by_value(
            context.catalog(),
            context.budget(),
            context.ingredient_values(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures, valuation::ingredient_values};

    fn run(catalog: &Catalog<u32>, budget: u32) -> Selection<u32> {
        DynamicProgrammingStrategy::new()
            .select(&StrategyContext::new(catalog, budget))
            .unwrap()
    }

    #[test]
    fn test_scenario_budget_50() {
        let catalog = fixtures::bar();
        let selection = run(&catalog, 50);
        assert_eq!(
            fixtures::ingredient_names(&catalog, &selection),
            vec!["lemon juice", "vodka"]
        );
        assert_eq!(selection.total_cost(), 32);
    }

    #[test]
    fn test_budget_zero_selects_nothing() {
        let catalog = fixtures::bar();
        let selection = run(&catalog, 0);
        assert_eq!(selection.num_ingredients(), 0);
        assert_eq!(selection.total_cost(), 0);
    }

    #[test]
    fn test_empty_universe() {
        let catalog =
            Catalog::<u32>::from_maps(Vec::<(&str, u32)>::new(), Vec::<(&str, Vec<&str>)>::new())
                .unwrap();
        let selection = run(&catalog, 25);
        assert_eq!(selection.num_ingredients(), 0);
        assert_eq!(selection.total_cost(), 0);
    }

    #[test]
    fn test_ties_favour_inclusion() {
        // `gin` and `rum` have equal value and cost; only one fits. Processing
        // `rum` second, `with >= without` swaps it in.
        let catalog = Catalog::<u32>::from_maps(
            [("gin", 10), ("rum", 10)],
            [("Gin Shot", vec!["gin"]), ("Rum Shot", vec!["rum"])],
        )
        .unwrap();
        let selection = run(&catalog, 15);
        assert_eq!(
            fixtures::ingredient_names(&catalog, &selection),
            vec!["rum"]
        );
    }

    #[test]
    fn test_zero_value_ingredients_are_taken_when_free_of_loss() {
        let catalog = Catalog::<u32>::from_maps(
            [("gin", 10), ("olive", 2)],
            [("Gin Shot", vec!["gin"])],
        )
        .unwrap();
        assert_eq!(run(&catalog, 12).num_ingredients(), 2);
        assert_eq!(
            fixtures::ingredient_names(&catalog, &run(&catalog, 11)),
            vec!["gin"]
        );
    }

    #[test]
    fn test_prefers_value_over_greedy_ratio() {
        // Greedy by ratio takes `a` (3/4) and then cannot afford `b` or `c`;
        // the knapsack takes `b` + `c` for value 4.
        let catalog = Catalog::<u32>::from_maps(
            [("a", 4), ("b", 3), ("c", 3)],
            [
                ("A1", vec!["a"]),
                ("A2", vec!["a"]),
                ("A3", vec!["a"]),
                ("B1", vec!["b"]),
                ("B2", vec!["b"]),
                ("C1", vec!["c"]),
                ("C2", vec!["c"]),
            ],
        )
        .unwrap();
        let selection = run(&catalog, 6);
        assert_eq!(
            fixtures::ingredient_names(&catalog, &selection),
            vec!["b", "c"]
        );
    }

    #[test]
    fn test_optimal_value_sum_on_random_instances() {
        for seed in 0..25 {
            let catalog = fixtures::random_catalog(seed, 9, 7);
            let values = ingredient_values(&catalog);
            for budget in [0, 3, 11, 24, 50] {
                let selection = run(&catalog, budget);
                assert!(selection.total_cost() <= budget);
                assert_eq!(
                    fixtures::value_sum(&values, selection.ingredients()),
                    fixtures::best_value_sum(&catalog, budget),
                    "seed {seed}, budget {budget}"
                );
            }
        }
    }

    #[test]
    fn test_budget_beyond_table_width_is_an_error() {
        let catalog =
            Catalog::<u64>::from_maps([("gin", 1u64)], [("Gin Shot", vec!["gin"])]).unwrap();
        let res =
            DynamicProgrammingStrategy::new().select(&StrategyContext::new(&catalog, u64::MAX));
        // `u64::MAX + 1` cells do not fit a `usize` on any supported target.
        assert!(matches!(res, Err(SolveError::BudgetTooLarge(_))));
    }

    #[test]
    fn test_budget_above_table_limit_is_refused_before_allocating() {
        let catalog =
            Catalog::<u64>::from_maps([("gin", 1u64)], [("Gin Shot", vec!["gin"])]).unwrap();
        let res =
            DynamicProgrammingStrategy::new().select(&StrategyContext::new(&catalog, 1u64 << 42));
        assert!(matches!(res, Err(SolveError::BudgetTooLarge(_))));
    }

    #[test]
    fn test_table_limit_counts_every_item_row() {
        // Each row alone fits, all rows together do not.
        let budget = (MAX_TABLE_CELLS / 2) as u64;
        let catalog = Catalog::<u64>::from_maps(
            [("gin", 1u64), ("rum", 1), ("tonic", 1)],
            [("Gin Tonic", vec!["gin", "tonic"]), ("Rum Shot", vec!["rum"])],
        )
        .unwrap();
        let res = DynamicProgrammingStrategy::new().select(&StrategyContext::new(&catalog, budget));
        assert!(matches!(res, Err(SolveError::BudgetTooLarge(_))));
    }

    #[test]
    fn test_empty_universe_ignores_budget_size() {
        let catalog =
            Catalog::<u64>::from_maps(Vec::<(&str, u64)>::new(), Vec::<(&str, Vec<&str>)>::new())
                .unwrap();
        let selection = DynamicProgrammingStrategy::new()
            .select(&StrategyContext::new(&catalog, 1u64 << 42))
            .unwrap();
        assert_eq!(selection.num_ingredients(), 0);
        assert_eq!(selection.total_cost(), 0);
    }
}
