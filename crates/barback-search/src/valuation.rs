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

//! # Valuation
//!
//! Ingredients carry a cost but no value of their own. Their value is derived
//! from the recipes: an ingredient is worth the number of distinct cocktails
//! that use it. From value and cost follow the value/cost ratios that drive
//! the greedy strategy, and the per-cocktail cost/value/ratio triples.
//!
//! ## Ordering
//!
//! Rankings are sorted by descending score with `sort::sort_ranking`. Equal
//! scores keep their first-encounter order. Callers must not rely on the
//! relative order of equal scores; the scores themselves are exact.
//!
//! ## Zero costs
//!
//! A ratio with a zero cost is undefined. Instead of producing infinity the
//! functions here fail with `SolveError::ZeroIngredientCost` or
//! `SolveError::ZeroCocktailCost`. A zero-cost item whose value is also zero
//! gets a ratio of `0.0`.

use crate::{
    error::SolveError,
    sort::{Ranking, sort_ranking},
};
use barback_model::{
    catalog::Catalog,
    index::{CocktailIndex, IngredientIndex},
    num::{CostNumeric, cost_to_f64, saturating_sum},
};

/// Ingredient values: a dense lookup plus a descending ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientValues {
    /// `values[i]` is the value of ingredient `i`, zero if no recipe uses it.
    values: Vec<u64>,
    /// Ingredients used by at least one recipe, by descending value.
    ranking: Ranking<IngredientIndex, u64>,
}

impl IngredientValues {
    /// Returns the value of an ingredient, zero if no recipe uses it.
    #[inline]
    pub fn get(&self, ingredient: IngredientIndex) -> u64 {
        self.values.get(ingredient.get()).copied().unwrap_or(0)
    }

    /// Returns the ingredients used by at least one recipe, by descending value.
    #[inline]
    pub fn ranking(&self) -> &[(IngredientIndex, u64)] {
        &self.ranking
    }

    /// Returns the dense value table indexed by `IngredientIndex`.
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }

    /// Returns the number of ingredients used by at least one recipe.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    /// Returns `true` if no recipe uses any ingredient.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

/// The cost, value and ratio of one cocktail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CocktailValuation<T> {
    pub cocktail: CocktailIndex,
    /// Sum of the listed ingredient costs, per occurrence, clamped at
    /// `T::max_value()`. Only used for ranking.
    pub cost: T,
    /// Sum of the listed ingredient values, per occurrence.
    pub value: u64,
    /// `value / cost`.
    pub ratio: f64,
}

/// Counts, for every ingredient, the distinct cocktails that use it.
///
/// A cocktail that lists an ingredient twice still counts once.
pub fn ingredient_values<T>(catalog: &Catalog<T>) -> IngredientValues
where
    T: CostNumeric,
{
    let mut values = vec![0u64; catalog.num_ingredients()];
    let mut encountered = Vec::new();

    for cocktail in catalog.cocktail_indices() {
        for &ingredient in catalog.required_ingredients(cocktail) {
            let value = &mut values[ingredient.get()];
            if *value == 0 {
                encountered.push(ingredient);
            }
            *value += 1;
        }
    }

    let mut ranking: Ranking<IngredientIndex, u64> = encountered
        .into_iter()
        .map(|ingredient| (ingredient, values[ingredient.get()]))
        .collect();
    sort_ranking(&mut ranking);

    IngredientValues { values, ranking }
}

/// Computes `value / cost` for every ingredient of the universe, by descending ratio.
pub fn ingredient_ratios<T>(
    catalog: &Catalog<T>,
    values: &IngredientValues,
) -> Result<Ranking<IngredientIndex, f64>, SolveError>
where
    T: CostNumeric,
{
    let mut ratios = Ranking::with_capacity(catalog.num_ingredients());

    for ingredient in catalog.ingredient_indices() {
        let value = values.get(ingredient);
        let cost = catalog.ingredient_cost(ingredient);
        let ratio = value_per_cost(value, cost).ok_or_else(|| SolveError::ZeroIngredientCost {
            ingredient: catalog.ingredient_name(ingredient).to_owned(),
            value,
        })?;
        ratios.push((ingredient, ratio));
    }

    sort_ranking(&mut ratios);
    Ok(ratios)
}

/// Computes the cost, value and ratio of every cocktail, in cocktail order.
///
/// Both sums run over the recipe as listed, so an ingredient listed twice
/// contributes twice.
pub fn cocktail_valuations<T>(
    catalog: &Catalog<T>,
    values: &IngredientValues,
) -> Result<Vec<CocktailValuation<T>>, SolveError>
where
    T: CostNumeric,
{
    catalog
        .cocktail_indices()
        .map(|cocktail| {
            let recipe = catalog.recipe(cocktail);
            let cost = saturating_sum(recipe.iter().map(|&i| catalog.ingredient_cost(i)));
            let value = recipe.iter().map(|&i| values.get(i)).sum::<u64>();
            let ratio = value_per_cost(value, cost).ok_or_else(|| SolveError::ZeroCocktailCost {
                cocktail: catalog.cocktail_name(cocktail).to_owned(),
                value,
            })?;

            Ok(CocktailValuation {
                cocktail,
                cost,
                value,
                ratio,
            })
        })
        .collect()
}

/// `value / cost`, or `None` when the cost is zero and the value is not.
#[inline]
fn value_per_cost<T>(value: u64, cost: T) -> Option<f64>
where
    T: CostNumeric,
{
    if cost.is_zero() {
        return (value == 0).then_some(0.0);
    }
    Some(value as f64 / cost_to_f64(cost))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> Catalog<u32> {
        Catalog::from_maps(
            [("gin", 34), ("lemon juice", 2), ("vodka", 30)],
            [
                ("Bloody Mary", vec!["vodka", "lemon juice"]),
                ("Gin Fizz", vec!["gin", "lemon juice"]),
                ("Screwdriver", vec!["vodka", "lemon juice"]),
            ],
        )
        .unwrap()
    }

    fn names<T: CostNumeric, V: Copy>(
        catalog: &Catalog<T>,
        ranking: &[(IngredientIndex, V)],
    ) -> Vec<(String, V)> {
        ranking
            .iter()
            .map(|&(i, v)| (catalog.ingredient_name(i).to_owned(), v))
            .collect()
    }

    #[test]
    fn test_ingredient_values() {
        let catalog = bar();
        let values = ingredient_values(&catalog);
        assert_eq!(
            names(&catalog, values.ranking()),
            vec![
                ("lemon juice".to_string(), 3),
                ("vodka".to_string(), 2),
                ("gin".to_string(), 1)
            ]
        );
        assert_eq!(values.as_slice(), &[1, 3, 2]);
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_values_count_distinct_cocktails() {
        let catalog = Catalog::<u32>::from_maps(
            [("rum", 20), ("lime", 3), ("mint", 1)],
            [
                ("Daiquiri", vec!["rum", "lime", "rum"]),
                ("Mojito", vec!["rum", "mint", "lime"]),
            ],
        )
        .unwrap();
        let values = ingredient_values(&catalog);
        assert_eq!(values.get(IngredientIndex::new(0)), 2);
        assert_eq!(values.get(IngredientIndex::new(1)), 2);
        assert_eq!(values.get(IngredientIndex::new(2)), 1);
    }

    #[test]
    fn test_values_equal_scores_are_exact() {
        // Order among equal values is not part of the contract; the values are.
        let catalog = Catalog::<u32>::from_maps(
            [("a", 1), ("b", 1), ("c", 1)],
            [("X", vec!["c", "a"]), ("Y", vec!["b"])],
        )
        .unwrap();
        let values = ingredient_values(&catalog);
        assert!(values.ranking().iter().all(|&(_, v)| v == 1));
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_unused_ingredients_have_no_value() {
        let catalog = Catalog::<u32>::from_maps(
            [("gin", 34), ("olive", 1)],
            [("Gin Shot", vec!["gin"])],
        )
        .unwrap();
        let values = ingredient_values(&catalog);
        assert_eq!(values.get(IngredientIndex::new(1)), 0);
        assert_eq!(values.len(), 1);
        assert!(!values.is_empty());
    }

    #[test]
    fn test_ingredient_ratios_cover_the_universe() {
        let catalog = Catalog::<u32>::from_maps(
            [("gin", 34), ("lemon juice", 2), ("vodka", 30), ("olive", 5)],
            [
                ("Bloody Mary", vec!["vodka", "lemon juice"]),
                ("Gin Fizz", vec!["gin", "lemon juice"]),
                ("Screwdriver", vec!["vodka", "lemon juice"]),
            ],
        )
        .unwrap();
        let values = ingredient_values(&catalog);
        let ratios = ingredient_ratios(&catalog, &values).unwrap();
        let ordered: Vec<_> = names(&catalog, &ratios)
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(ordered, vec!["lemon juice", "vodka", "gin", "olive"]);
        assert_eq!(ratios[0].1, 1.5);
        assert_eq!(ratios[3].1, 0.0);
    }

    #[test]
    fn test_zero_cost_used_ingredient_is_an_error() {
        let catalog =
            Catalog::<u32>::from_maps([("water", 0)], [("Water", vec!["water"])]).unwrap();
        let values = ingredient_values(&catalog);
        assert_eq!(
            ingredient_ratios(&catalog, &values),
            Err(SolveError::ZeroIngredientCost {
                ingredient: "water".to_string(),
                value: 1
            })
        );
    }

    #[test]
    fn test_zero_cost_unused_ingredient_has_zero_ratio() {
        let catalog =
            Catalog::<u32>::from_maps([("water", 0)], Vec::<(&str, Vec<&str>)>::new()).unwrap();
        let values = ingredient_values(&catalog);
        let ratios = ingredient_ratios(&catalog, &values).unwrap();
        assert_eq!(ratios, vec![(IngredientIndex::new(0), 0.0)]);
    }

    #[test]
    fn test_cocktail_valuations() {
        let catalog = bar();
        let values = ingredient_values(&catalog);
        let valuations = cocktail_valuations(&catalog, &values).unwrap();

        assert_eq!(valuations.len(), 3);
        let gin_fizz = valuations[1];
        assert_eq!(gin_fizz.cocktail, CocktailIndex::new(1));
        assert_eq!(gin_fizz.cost, 36);
        assert_eq!(gin_fizz.value, 4);
        assert_eq!(gin_fizz.ratio, 4.0 / 36.0);
        assert_eq!(valuations[0].cost, 32);
        assert_eq!(valuations[0].value, 5);
    }

    #[test]
    fn test_cocktail_valuations_count_listed_duplicates() {
        let catalog = Catalog::<u32>::from_maps(
            [("rum", 20), ("lime", 3)],
            [("Daiquiri", vec!["rum", "lime", "rum"])],
        )
        .unwrap();
        let values = ingredient_values(&catalog);
        let valuations = cocktail_valuations(&catalog, &values).unwrap();
        assert_eq!(valuations[0].cost, 43);
        assert_eq!(valuations[0].value, 3);
    }

    #[test]
    fn test_zero_cost_cocktail_is_an_error() {
        let catalog =
            Catalog::<u32>::from_maps([("water", 0)], [("Water", vec!["water"])]).unwrap();
        let values = ingredient_values(&catalog);
        assert!(matches!(
            cocktail_valuations(&catalog, &values),
            Err(SolveError::ZeroCocktailCost { .. })
        ));
    }
}
