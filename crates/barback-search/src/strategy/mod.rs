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

//! Selection strategies.
//!
//! Every strategy turns a `StrategyContext` (catalog + budget + lazily shared
//! valuations) into a `Selection`. They differ in objective and cost:
//!
//! - `greedy`: one pass over ingredients by descending value/cost ratio.
//! - `dp`: exact 0/1 knapsack on ingredient values, `O(n * budget)`.
//! - `brute_force`: exhaustive search on the number of realizable cocktails, `O(2^n)`.
//! - `custom_greedy`: commits whole cocktails, cheapest remaining cost first.
//!
//! Strategies only read the context, so one context can be shared between
//! threads that run different strategies on the same instance.

pub mod brute_force;
pub mod custom_greedy;
pub mod dp;
pub mod greedy;

use crate::{
    error::SolveError,
    selection::Selection,
    sort::Ranking,
    valuation::{IngredientValues, ingredient_ratios, ingredient_values},
};
use barback_model::{catalog::Catalog, index::IngredientIndex, num::CostNumeric};
use std::{str::FromStr, sync::OnceLock};

/// A strategy that selects ingredients within a budget.
pub trait Strategy<T>: Send + Sync
where
    T: CostNumeric,
{
    /// Returns the name of the strategy.
    fn name(&self) -> &str;

    /// Selects ingredients for the catalog and budget held by `context`.
    ///
    /// The returned selection never costs more than the budget.
    fn select(&self, context: &StrategyContext<'_, T>) -> Result<Selection<T>, SolveError>;
}

impl<T> std::fmt::Debug for dyn Strategy<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Strategy {{ name: {} }}", self.name())
    }
}

impl<T> std::fmt::Display for dyn Strategy<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Strategy: {}", self.name())
    }
}

/// The input of a strategy.
///
/// Valuations are computed on first use and then shared by every strategy
/// that reads the same context.
pub struct StrategyContext<'a, T> {
    catalog: &'a Catalog<T>,
    budget: T,
    values: OnceLock<IngredientValues>,
    ratios: OnceLock<Result<Ranking<IngredientIndex, f64>, SolveError>>,
}

impl<'a, T> StrategyContext<'a, T>
where
    T: CostNumeric,
{
    #[inline]
    pub fn new(catalog: &'a Catalog<T>, budget: T) -> Self {
        Self {
            catalog,
            budget,
            values: OnceLock::new(),
            ratios: OnceLock::new(),
        }
    }

    #[inline]
    pub fn catalog(&self) -> &'a Catalog<T> {
        self.catalog
    }

    #[inline]
    pub fn budget(&self) -> T {
        self.budget
    }

    /// Returns the ingredient values, computing them on first use.
    #[inline]
    pub fn ingredient_values(&self) -> &IngredientValues {
        self.values.get_or_init(|| ingredient_values(self.catalog))
    }

    /// Returns the ingredient ratios by descending ratio, computing them on first use.
    pub fn ingredient_ratios(&self) -> Result<&[(IngredientIndex, f64)], SolveError> {
        let ratios = self
            .ratios
            .get_or_init(|| ingredient_ratios(self.catalog, self.ingredient_values()));
        match ratios {
            Ok(ratios) => Ok(ratios.as_slice()),
            Err(err) => Err(err.clone()),
        }
    }
}

impl<T> std::fmt::Debug for StrategyContext<'_, T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyContext")
            .field("catalog", &self.catalog)
            .field("budget", &self.budget)
            .finish()
    }
}

impl<T> std::fmt::Display for StrategyContext<'_, T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StrategyContext(catalog: {}, budget: {})",
            self.catalog, self.budget
        )
    }
}

/// Identifies one of the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrategyKind {
    Greedy,
    DynamicProgramming,
    BruteForce,
    CustomGreedy,
}

impl StrategyKind {
    /// All built-in strategies.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Greedy,
        StrategyKind::DynamicProgramming,
        StrategyKind::BruteForce,
        StrategyKind::CustomGreedy,
    ];

    /// Returns the canonical identifier accepted by `FromStr`.
    #[inline]
    pub const fn id(self) -> &'static str {
        match self {
            StrategyKind::Greedy => "greedy",
            StrategyKind::DynamicProgramming => "dynamicProgramming",
            StrategyKind::BruteForce => "bruteForce",
            StrategyKind::CustomGreedy => "customGreedy",
        }
    }

    /// Returns `true` if the strategy is optimal for its own objective.
    #[inline]
    pub const fn is_exact(self) -> bool {
        matches!(
            self,
            StrategyKind::DynamicProgramming | StrategyKind::BruteForce
        )
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StrategyKind {
    type Err = SolveError;

    /// Accepts the canonical identifiers plus the spelled-out names
    /// (`"dynamic programming"`, `"brute force"`, `"custom greedy"`) and `"dp"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(StrategyKind::Greedy),
            "dynamicProgramming" | "dynamic programming" | "dp" => {
                Ok(StrategyKind::DynamicProgramming)
            }
            "bruteForce" | "brute force" => Ok(StrategyKind::BruteForce),
            "customGreedy" | "custom greedy" => Ok(StrategyKind::CustomGreedy),
            other => Err(SolveError::UnknownStrategy(other.to_owned())),
        }
    }
}
