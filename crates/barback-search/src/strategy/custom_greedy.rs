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

//! Recipe-level greedy.
//!
//! Where `greedy` ranks single ingredients, this strategy buys whole
//! cocktails. It keeps a working list of pending cocktails, each with the
//! ingredients it still lacks and what those would cost, and repeatedly
//! takes the cheapest one:
//!
//! - if it does not fit the remaining budget, it is dropped for good;
//! - otherwise its missing ingredients are bought and every other pending
//!   cocktail is discounted by what was just bought. Cocktails left with
//!   nothing missing are complete and leave the list.
//!
//! Ties on cost go to the cocktail listed first. Costs are tracked on the
//! distinct required ingredients, so a recipe that lists an ingredient twice
//! pays for it once.

use crate::{
    error::SolveError,
    selection::Selection,
    strategy::{Strategy, StrategyContext},
};
use barback_model::{
    catalog::Catalog,
    index::{CocktailIndex, IngredientIndex},
    num::{CostNumeric, checked_sum},
};
use fixedbitset::FixedBitSet;
use smallvec::SmallVec;

/// Greedy over whole cocktails by cheapest remaining cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomGreedyStrategy;

/// A cocktail that is neither complete nor dropped yet.
///
/// `cost` is `None` when the missing ingredients cost more than `T` can hold;
/// such a cocktail never fits a budget.
#[derive(Debug, Clone)]
struct PendingCocktail<T> {
    cocktail: CocktailIndex,
    remaining: SmallVec<[IngredientIndex; 8]>,
    cost: Option<T>,
}

impl<T> PendingCocktail<T>
where
    T: CostNumeric,
{
    fn new(catalog: &Catalog<T>, cocktail: CocktailIndex) -> Self {
        let remaining: SmallVec<[IngredientIndex; 8]> =
            catalog.required_ingredients(cocktail).iter().copied().collect();
        let cost = Self::remaining_cost(catalog, &remaining);
        Self {
            cocktail,
            remaining,
            cost,
        }
    }

    #[inline]
    fn remaining_cost(catalog: &Catalog<T>, remaining: &[IngredientIndex]) -> Option<T> {
        checked_sum(remaining.iter().map(|&i| catalog.ingredient_cost(i)))
    }

    /// Orders by cost; cocktails too expensive to price come last.
    #[inline]
    fn sort_key(&self) -> (bool, T) {
        match self.cost {
            Some(cost) => (false, cost),
            None => (true, T::max_value()),
        }
    }

    /// Drops the ingredients in `bought` and reprices the rest. Returns
    /// `true` if nothing is missing anymore.
    fn strike(&mut self, catalog: &Catalog<T>, bought: &[IngredientIndex]) -> bool {
        let before = self.remaining.len();
        self.remaining.retain(|ingredient| !bought.contains(ingredient));
        if self.remaining.len() != before {
            self.cost = Self::remaining_cost(catalog, &self.remaining);
        }
        self.remaining.is_empty()
    }
}

impl CustomGreedyStrategy {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn select_by_cocktail<T>(catalog: &Catalog<T>, budget: T) -> Selection<T>
    where
        T: CostNumeric,
    {
        let mut pending: Vec<PendingCocktail<T>> = catalog
            .cocktail_indices()
            .map(|cocktail| PendingCocktail::new(catalog, cocktail))
            .collect();

        let mut selected: FixedBitSet = catalog.empty_ingredient_set();
        let mut total_cost = T::zero();
        let mut picks = 0u64;
        let mut dropped = 0usize;

        // `min_by_key` returns the first of several minima, and removals keep
        // the list in cocktail order.
        while let Some(position) = pending
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| p.sort_key())
            .map(|(position, _)| position)
        {
            picks += 1;
            let candidate = pending.remove(position);

            let left = budget - total_cost;
            let cost = match candidate.cost {
                Some(cost) if cost <= left => cost,
                _ => {
                    log::trace!(
                        "custom greedy drops cocktail {} costing {:?} with {} left",
                        candidate.cocktail,
                        candidate.cost,
                        left
                    );
                    dropped += 1;
                    continue;
                }
            };

            for ingredient in &candidate.remaining {
                selected.insert(ingredient.get());
            }
            // `cost <= budget - total_cost`, so this cannot overflow.
            total_cost = total_cost + cost;

            pending.retain_mut(|other| !other.strike(catalog, &candidate.remaining));
        }

        log::debug!(
            "custom greedy selected {} ingredients for {} (budget {}), dropped {} cocktails",
            selected.count_ones(..),
            total_cost,
            budget,
            dropped
        );

        debug_assert_eq!(
            Some(total_cost),
            catalog.cost_of(&selected),
            "custom greedy tracked a total cost that differs from the selected ingredients"
        );

        Selection::new(selected, total_cost).with_evaluations(picks)
    }
}

impl<T> Strategy<T> for CustomGreedyStrategy
where
    T: CostNumeric,
{
    fn name(&self) -> &str {
        "CustomGreedy"
    }

    fn select(&self, context: &StrategyContext<'_, T>) -> Result<Selection<T>, SolveError> {
        Ok(Self::select_by_cocktail(context.catalog(), context.budget()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{feasibility::realizable_cocktails, fixtures};

    fn run(catalog: &Catalog<u32>, budget: u32) -> Selection<u32> {
        CustomGreedyStrategy::new()
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
        // Bloody Mary is bought, Screwdriver completes with it, Gin Fizz is dropped.
        assert_eq!(selection.evaluations(), 2);
    }

    #[test]
    fn test_budget_zero_selects_nothing() {
        let catalog = fixtures::bar();
        let selection = run(&catalog, 0);
        assert_eq!(selection.num_ingredients(), 0);
        assert_eq!(selection.total_cost(), 0);
        assert_eq!(selection.evaluations(), 3);
    }

    #[test]
    fn test_shared_ingredients_discount_pending_cocktails() {
        // `Collins` alone costs 12 and is never the cheapest, but after
        // `Sour` (10) is bought it only lacks soda (2).
        let catalog = Catalog::<u32>::from_maps(
            [("gin", 9), ("lemon", 1), ("soda", 2), ("rum", 11)],
            [
                ("Collins", vec!["gin", "lemon", "soda"]),
                ("Sour", vec!["gin", "lemon"]),
                ("Rum Shot", vec!["rum"]),
            ],
        )
        .unwrap();
        let selection = run(&catalog, 13);
        assert_eq!(
            fixtures::ingredient_names(&catalog, &selection),
            vec!["gin", "lemon", "soda"]
        );
        assert_eq!(selection.total_cost(), 12);
    }

    #[test]
    fn test_ties_go_to_the_first_listed_cocktail() {
        let catalog = Catalog::<u32>::from_maps(
            [("gin", 5), ("rum", 5)],
            [("Rum Shot", vec!["rum"]), ("Gin Shot", vec!["gin"])],
        )
        .unwrap();
        let selection = run(&catalog, 7);
        assert_eq!(
            fixtures::ingredient_names(&catalog, &selection),
            vec!["rum"]
        );
    }

    #[test]
    fn test_unaffordable_cocktail_is_dropped() {
        // `Big` (8) no longer fits once `Small` and `Mid` are bought.
        let catalog = Catalog::<u32>::from_maps(
            [("a", 3), ("b", 8), ("c", 4)],
            [("Small", vec!["a"]), ("Big", vec!["b"]), ("Mid", vec!["c"])],
        )
        .unwrap();
        let selection = run(&catalog, 8);
        assert_eq!(
            fixtures::ingredient_names(&catalog, &selection),
            vec!["a", "c"]
        );
        assert_eq!(selection.total_cost(), 7);
    }

    #[test]
    fn test_repeated_recipe_entry_is_paid_once() {
        let catalog = Catalog::<u32>::from_maps(
            [("gin", 6)],
            [("Double Gin", vec!["gin", "gin"])],
        )
        .unwrap();
        let selection = run(&catalog, 6);
        assert_eq!(
            fixtures::ingredient_names(&catalog, &selection),
            vec!["gin"]
        );
        assert_eq!(selection.total_cost(), 6);
    }

    #[test]
    fn test_cocktail_costing_more_than_the_cost_type_is_dropped() {
        // 200 + 100 does not fit a `u8`; only the single-ingredient cocktail
        // can be bought.
        let catalog = Catalog::<u8>::from_maps(
            [("a", 200), ("b", 100)],
            [("AB", vec!["a", "b"]), ("B", vec!["b"])],
        )
        .unwrap();
        let selection = CustomGreedyStrategy::new()
            .select(&StrategyContext::new(&catalog, u8::MAX))
            .unwrap();
        let bought: Vec<usize> = selection.ingredients().ones().collect();
        assert_eq!(bought, vec![1]);
        assert_eq!(selection.total_cost(), 100);
    }

    #[test]
    fn test_overflowing_cocktail_alone_buys_nothing() {
        let catalog =
            Catalog::<u8>::from_maps([("a", 200), ("b", 100)], [("AB", vec!["a", "b"])]).unwrap();
        let selection = CustomGreedyStrategy::new()
            .select(&StrategyContext::new(&catalog, u8::MAX))
            .unwrap();
        assert_eq!(selection.num_ingredients(), 0);
        assert_eq!(selection.total_cost(), 0);
    }

    #[test]
    fn test_every_bought_ingredient_completes_a_cocktail() {
        for seed in 0..20 {
            let catalog = fixtures::random_catalog(seed, 10, 8);
            for budget in [0, 6, 19, 35, 80] {
                let selection = run(&catalog, budget);
                assert!(selection.total_cost() <= budget);
                assert_eq!(
                    catalog.cost_of(selection.ingredients()),
                    Some(selection.total_cost())
                );

                let made = realizable_cocktails(&catalog, selection.ingredients());
                for ingredient in selection.ingredients().ones() {
                    let used = made.ones().any(|c| {
                        catalog
                            .required_ingredients(CocktailIndex::new(c))
                            .contains(&IngredientIndex::new(ingredient))
                    });
                    assert!(
                        used,
                        "seed {seed}, budget {budget}: ingredient {ingredient} is unused"
                    );
                }
            }
        }
    }
}
