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

//! Shared test instances and exhaustive reference solvers.

use crate::{feasibility::realizable_cocktails, selection::Selection, valuation::ingredient_values};
use barback_model::{catalog::Catalog, index::IngredientIndex};
use fixedbitset::FixedBitSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `{gin: 34, lemon juice: 2, vodka: 30}` with three cocktails.
pub fn bar() -> Catalog<u32> {
    Catalog::from_maps(
        [("gin", 34), ("lemon juice", 2), ("vodka", 30)],
        [
            ("Bloody Mary", vec!["vodka", "lemon juice"]),
            ("Gin Fizz", vec!["gin", "lemon juice"]),
            ("Screwdriver", vec!["vodka", "lemon juice"]),
        ],
    )
    .expect("consistent dataset")
}

/// Sorted names of the selected ingredients.
pub fn ingredient_names(catalog: &Catalog<u32>, selection: &Selection<u32>) -> Vec<String> {
    let mut names: Vec<String> = selection
        .ingredients()
        .ones()
        .map(|i| catalog.ingredient_name(IngredientIndex::new(i)).to_owned())
        .collect();
    names.sort();
    names
}

/// A random catalog with costs in `1..=20` and recipes of one to four
/// entries; recipes may list an ingredient twice.
pub fn random_catalog(seed: u64, num_ingredients: usize, num_cocktails: usize) -> Catalog<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let ingredients: Vec<(String, u32)> = (0..num_ingredients)
        .map(|i| (format!("ingredient-{i}"), rng.random_range(1..=20)))
        .collect();

    let cocktails: Vec<(String, Vec<String>)> = (0..num_cocktails)
        .map(|c| {
            let len = rng.random_range(1..=4);
            let recipe = (0..len)
                .map(|_| format!("ingredient-{}", rng.random_range(0..num_ingredients)))
                .collect();
            (format!("cocktail-{c}"), recipe)
        })
        .collect();

    Catalog::from_maps(ingredients, cocktails)
        .expect("generated recipes only use known ingredients")
}

/// Iterates every subset of the ingredient universe that fits the budget.
fn affordable_subsets(
    catalog: &Catalog<u32>,
    budget: u32,
) -> impl Iterator<Item = FixedBitSet> + '_ {
    let n = catalog.num_ingredients();
    assert!(n <= 16, "exhaustive reference is limited to 16 ingredients");
    (0u32..(1 << n)).filter_map(move |mask| {
        let mut set = catalog.empty_ingredient_set();
        for i in 0..n {
            if mask & (1 << i) != 0 {
                set.insert(i);
            }
        }
        matches!(catalog.cost_of(&set), Some(cost) if cost <= budget).then_some(set)
    })
}

/// The best sum of ingredient values within the budget.
pub fn best_value_sum(catalog: &Catalog<u32>, budget: u32) -> u64 {
    let values = ingredient_values(catalog);
    affordable_subsets(catalog, budget)
        .map(|set| value_sum(&values, &set))
        .max()
        .unwrap_or(0)
}

/// The best number of realizable cocktails within the budget.
pub fn best_cocktail_count(catalog: &Catalog<u32>, budget: u32) -> usize {
    affordable_subsets(catalog, budget)
        .map(|set| realizable_cocktails(catalog, &set).count_ones(..))
        .max()
        .unwrap_or(0)
}

/// The sum of ingredient values of a set.
pub fn value_sum(values: &crate::valuation::IngredientValues, set: &FixedBitSet) -> u64 {
    set.ones().map(|i| values.get(IngredientIndex::new(i))).sum()
}
