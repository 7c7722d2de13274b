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

//! Greedy selection by value/cost ratio.
//!
//! Ingredients are visited once, from the highest ratio to the lowest, and an
//! ingredient is bought whenever it still fits the remaining budget. There is
//! no backtracking: an ingredient skipped because it was too expensive at that
//! point is never reconsidered, even if a later purchase would have left room
//! for it. Ingredients that no recipe uses have ratio zero and come last, but
//! they are still bought if they fit.
//!
//! The cost is dominated by the sort that produced the ratio ranking,
//! `O(n log n)` for `n` ingredients.

use crate::{
    error::SolveError,
    selection::Selection,
    strategy::{Strategy, StrategyContext},
};
use barback_model::{catalog::Catalog, index::IngredientIndex, num::CostNumeric};

/// Buys ingredients in descending ratio order while they fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs the greedy pass over an explicit ranking.
    ///
    /// `ratios` must be sorted by descending ratio.
    pub fn select_by_ratio<T>(
        catalog: &Catalog<T>,
        budget: T,
        ratios: &[(IngredientIndex, f64)],
    ) -> Selection<T>
    where
        T: CostNumeric,
    {
        let mut selected = catalog.empty_ingredient_set();
        let mut total_cost = T::zero();

        for &(ingredient, _) in ratios {
            let cost = catalog.ingredient_cost(ingredient);
            // `total_cost <= budget` holds throughout, so the subtraction cannot underflow.
            if cost <= budget - total_cost {
                selected.insert(ingredient.get());
                total_cost = total_cost + cost;
            }
        }

        log::debug!(
            "greedy selected {} of {} ingredients for {} (budget {})",
            selected.count_ones(..),
            ratios.len(),
            total_cost,
            budget
        );

        Selection::new(selected, total_cost).with_evaluations(ratios.len() as u64)
    }
}

impl<T> Strategy<T> for GreedyStrategy
where
    T: CostNumeric,
{
    fn name(&self) -> &str {
        "Greedy"
    }

    fn select(&self, context: &StrategyContext<'_, T>) -> Result<Selection<T>, SolveError> {
        let ratios = context.ingredient_ratios()?;
        Ok(Self::select_by_ratio(
            context.catalog(),
            context.budget(),
            ratios,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_scenario_budget_50() {
        let catalog = fixtures::bar();
        let selection = GreedyStrategy::new()
            .select(&StrategyContext::new(&catalog, 50))
            .unwrap();
        assert_eq!(
            fixtures::ingredient_names(&catalog, &selection),
            vec!["lemon juice", "vodka"]
        );
        assert_eq!(selection.total_cost(), 32);
        assert!(selection.cocktails().is_none());
    }

    #[test]
    fn test_budget_zero_selects_nothing() {
        let catalog = fixtures::bar();
        let selection = GreedyStrategy::new()
            .select(&StrategyContext::new(&catalog, 0))
            .unwrap();
        assert_eq!(selection.num_ingredients(), 0);
        assert_eq!(selection.total_cost(), 0);
    }

    #[test]
    fn test_skipped_ingredient_is_never_revisited() {
        // Ranking: a (ratio 1.0, cost 6), b (0.5, cost 6), c (0.25, cost 4).
        // With budget 10, `a` fits, `b` no longer does, `c` does. The pass
        // never returns to `b`.
        let catalog = Catalog::<u32>::from_maps(
            [("a", 6), ("b", 6), ("c", 4)],
            [
                ("A1", vec!["a"]),
                ("A2", vec!["a"]),
                ("A3", vec!["a"]),
                ("A4", vec!["a"]),
                ("A5", vec!["a"]),
                ("A6", vec!["a"]),
                ("B1", vec!["b"]),
                ("B2", vec!["b"]),
                ("B3", vec!["b"]),
                ("C1", vec!["c"]),
            ],
        )
        .unwrap();
        let selection = GreedyStrategy::new()
            .select(&StrategyContext::new(&catalog, 10))
            .unwrap();
        assert_eq!(
            fixtures::ingredient_names(&catalog, &selection),
            vec!["a", "c"]
        );
        assert_eq!(selection.total_cost(), 10);
    }

    #[test]
    fn test_unused_ingredients_are_bought_if_they_fit() {
        let catalog = Catalog::<u32>::from_maps(
            [("gin", 5), ("olive", 1)],
            [("Gin Shot", vec!["gin"])],
        )
        .unwrap();
        let selection = GreedyStrategy::new()
            .select(&StrategyContext::new(&catalog, 6))
            .unwrap();
        assert_eq!(selection.num_ingredients(), 2);
    }

    #[test]
    fn test_zero_cost_used_ingredient_fails() {
        let catalog =
            Catalog::<u32>::from_maps([("water", 0)], [("Water", vec!["water"])]).unwrap();
        let res = GreedyStrategy::new().select(&StrategyContext::new(&catalog, 6));
        assert!(matches!(res, Err(SolveError::ZeroIngredientCost { .. })));
    }

    #[test]
    fn test_never_exceeds_budget_on_random_instances() {
        for seed in 0..20 {
            let catalog = fixtures::random_catalog(seed, 10, 8);
            for budget in [0, 5, 17, 40, 100] {
                let selection = GreedyStrategy::new()
                    .select(&StrategyContext::new(&catalog, budget))
                    .unwrap();
                assert!(selection.total_cost() <= budget);
                assert_eq!(
                    catalog.cost_of(selection.ingredients()),
                    Some(selection.total_cost())
                );
            }
        }
    }
}
