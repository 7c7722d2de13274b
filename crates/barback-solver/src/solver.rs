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

//! # Solver Façade
//!
//! Runs a strategy against a `Catalog` and turns its raw `Selection` into a
//! complete `Solution`: realizable cocktails are derived when the strategy
//! did not report them, both excluded lists are computed, and indices are
//! resolved back to names. A catalog without cocktails always yields the
//! empty solution, whatever the strategy.
//!
//! ## Highlights
//!
//! - Single solves:
//!   - `Solver::solve(kind, catalog, budget)` returns a `SolverOutcome<T>`
//!     with the solution and `SolveStatistics`.
//!   - `solve(strategy_id, budget, costs, recipes)` builds the catalog from
//!     plain mappings and returns only the `Solution`.
//! - Portfolio execution:
//!   - `Solver::solve_portfolio` runs several strategies concurrently, one
//!     scoped thread each, sharing one `StrategyContext` so valuations are
//!     computed once.
//!   - Results come back in request order; the best solution makes the most
//!     cocktails, ties going to the lower cost and then to the earlier request.
//! - Builder pattern:
//!   - `SolverBuilder` configures the brute force instance size limit.
//!
//! ## Usage
//!
//! ```rust
//! use barback_model::catalog::Catalog;
//! use barback_search::strategy::StrategyKind;
//! use barback_solver::solver::SolverBuilder;
//!
//! let catalog = Catalog::<u32>::from_maps(
//!     [("gin", 34), ("lemon juice", 2), ("vodka", 30)],
//!     [
//!         ("Gin Fizz", vec!["gin", "lemon juice"]),
//!         ("Screwdriver", vec!["vodka", "lemon juice"]),
//!     ],
//! )
//! .expect("consistent dataset");
//!
//! let solver = SolverBuilder::new().with_brute_force_limit(20).build();
//! let outcome = solver
//!     .solve(StrategyKind::BruteForce, &catalog, 40)
//!     .expect("solvable");
//!
//! assert_eq!(outcome.solution().total_value(), 1);
//! println!("{}", outcome);
//! ```

use crate::stats::{SolveStatistics, SolveStatisticsBuilder};
use barback_model::{
    catalog::Catalog,
    index::{CocktailIndexTag, IngredientIndexTag},
    num::CostNumeric,
    solution::Solution,
};
use barback_search::{
    error::SolveError,
    feasibility::{realizable_cocktails, set_complement},
    selection::Selection,
    strategy::{
        Strategy, StrategyContext, StrategyKind, brute_force::BruteForceStrategy,
        custom_greedy::CustomGreedyStrategy, dp::DynamicProgrammingStrategy,
        greedy::GreedyStrategy,
    },
};
use fixedbitset::FixedBitSet;

/// A solution together with the statistics of the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<T> {
    solution: Solution<T>,
    statistics: SolveStatistics,
}

impl<T> SolverOutcome<T>
where
    T: CostNumeric,
{
    #[inline]
    pub fn new(solution: Solution<T>, statistics: SolveStatistics) -> Self {
        Self {
            solution,
            statistics,
        }
    }

    #[inline]
    pub fn solution(&self) -> &Solution<T> {
        &self.solution
    }

    #[inline]
    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }

    #[inline]
    pub fn into_solution(self) -> Solution<T> {
        self.solution
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.solution)?;
        write!(f, "{}", self.statistics)
    }
}

/// The results of a portfolio run, one per requested strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioOutcome<T> {
    results: Vec<(StrategyKind, Result<SolverOutcome<T>, SolveError>)>,
    best: Option<usize>,
}

impl<T> PortfolioOutcome<T>
where
    T: CostNumeric,
{
    fn new(results: Vec<(StrategyKind, Result<SolverOutcome<T>, SolveError>)>) -> Self {
        let best = results
            .iter()
            .enumerate()
            .filter_map(|(i, (_, result))| result.as_ref().ok().map(|o| (i, o.solution())))
            .min_by(|(_, a), (_, b)| {
                b.total_value()
                    .cmp(&a.total_value())
                    .then_with(|| a.total_cost().cmp(&b.total_cost()))
            })
            .map(|(i, _)| i);

        Self { results, best }
    }

    /// Returns all results in request order.
    #[inline]
    pub fn results(&self) -> &[(StrategyKind, Result<SolverOutcome<T>, SolveError>)] {
        &self.results
    }

    /// Returns the result for `kind`, if it was requested.
    #[inline]
    pub fn result(&self, kind: StrategyKind) -> Option<&Result<SolverOutcome<T>, SolveError>> {
        self.results
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, result)| result)
    }

    /// Returns the position of the best successful result.
    #[inline]
    pub fn best_index(&self) -> Option<usize> {
        self.best
    }

    /// Returns the strategy and outcome of the best successful result.
    pub fn best(&self) -> Option<(StrategyKind, &SolverOutcome<T>)> {
        let (kind, result) = &self.results[self.best?];
        result.as_ref().ok().map(|outcome| (*kind, outcome))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T> std::fmt::Display for PortfolioOutcome<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Portfolio Summary")?;
        for (i, (kind, result)) in self.results.iter().enumerate() {
            let marker = if Some(i) == self.best { "*" } else { " " };
            match result {
                Ok(outcome) => writeln!(
                    f,
                    "{} {:<20} value {:>4}  cost {:>8}  evaluations {:>10}",
                    marker,
                    kind.id(),
                    outcome.solution().total_value(),
                    outcome.solution().total_cost(),
                    outcome.statistics().evaluations
                )?,
                Err(err) => writeln!(f, "{} {:<20} failed: {}", marker, kind.id(), err)?,
            }
        }
        Ok(())
    }
}

/// Runs strategies against catalogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Solver {
    brute_force_limit: Option<usize>,
}

impl Solver {
    /// Creates a solver without a brute force size limit.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn brute_force_limit(&self) -> Option<usize> {
        self.brute_force_limit
    }

    /// Runs one strategy and assembles the full solution.
    pub fn solve<T>(
        &self,
        kind: StrategyKind,
        catalog: &Catalog<T>,
        budget: T,
    ) -> Result<SolverOutcome<T>, SolveError>
    where
        T: CostNumeric,
    {
        let context = StrategyContext::new(catalog, budget);
        self.solve_with_context(kind, &context)
    }

    /// Runs every strategy in `kinds` concurrently on the same catalog.
    ///
    /// A failing strategy does not affect the others; its error is reported
    /// in its slot. Panics inside a strategy are propagated to the caller.
    pub fn solve_portfolio<T>(
        &self,
        catalog: &Catalog<T>,
        budget: T,
        kinds: &[StrategyKind],
    ) -> PortfolioOutcome<T>
    where
        T: CostNumeric,
    {
        let context = StrategyContext::new(catalog, budget);
        let context = &context;

        let mut results = Vec::with_capacity(kinds.len());

        std::thread::scope(|scope| {
            let handles: Vec<_> = kinds
                .iter()
                .map(|&kind| (kind, scope.spawn(move || self.solve_with_context(kind, context))))
                .collect();

            for (kind, handle) in handles {
                match handle.join() {
                    Ok(result) => results.push((kind, result)),
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
        });

        let outcome = PortfolioOutcome::new(results);
        match outcome.best() {
            Some((kind, best)) => log::info!(
                "portfolio of {} strategies finished; {} wins with {} cocktails for {}",
                outcome.len(),
                kind,
                best.solution().total_value(),
                best.solution().total_cost()
            ),
            None => log::info!(
                "portfolio of {} strategies finished without a solution",
                outcome.len()
            ),
        }
        outcome
    }

    fn solve_with_context<T>(
        &self,
        kind: StrategyKind,
        context: &StrategyContext<'_, T>,
    ) -> Result<SolverOutcome<T>, SolveError>
    where
        T: CostNumeric,
    {
        let brute_force = match self.brute_force_limit {
            Some(limit) => BruteForceStrategy::with_limit(limit),
            None => BruteForceStrategy::new(),
        };
        let strategy: &dyn Strategy<T> = match kind {
            StrategyKind::Greedy => &GreedyStrategy,
            StrategyKind::DynamicProgramming => &DynamicProgrammingStrategy,
            StrategyKind::BruteForce => &brute_force,
            StrategyKind::CustomGreedy => &CustomGreedyStrategy,
        };

        let start_time = std::time::Instant::now();
        let catalog = context.catalog();
        // Without cocktails no ingredient is worth buying.
        let selection = if catalog.num_cocktails() == 0 {
            Selection::new(catalog.empty_ingredient_set(), T::zero())
                .with_cocktails(catalog.empty_cocktail_set())
        } else {
            strategy.select(context)?
        };
        let solution = assemble_solution(catalog, &selection);

        let statistics = SolveStatisticsBuilder::new()
            .strategy(strategy.name())
            .evaluations(selection.evaluations())
            .solve_duration(start_time.elapsed())
            .build();

        log::info!(
            "{} selected {} ingredients for {} of budget {}, making {} of {} cocktails",
            strategy.name(),
            solution.ingredients().len(),
            solution.total_cost(),
            context.budget(),
            solution.total_value(),
            context.catalog().num_cocktails()
        );

        Ok(SolverOutcome::new(solution, statistics))
    }
}

/// Builder for `Solver`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverBuilder {
    brute_force_limit: Option<usize>,
}

impl SolverBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects brute force runs on catalogs with more than `limit`
    /// ingredients.
    #[inline]
    pub fn with_brute_force_limit(mut self, limit: usize) -> Self {
        self.brute_force_limit = Some(limit);
        self
    }

    #[inline]
    pub fn build(self) -> Solver {
        Solver {
            brute_force_limit: self.brute_force_limit,
        }
    }
}

/// Parses `strategy_id`, builds a catalog from the two mappings and solves.
///
/// The mappings' iteration order becomes the universe order, which decides
/// ties inside the strategies.
///
/// # Errors
///
/// - `SolveError::UnknownStrategy` if `strategy_id` names no strategy.
/// - `SolveError::MissingIngredientCost` if a recipe uses an ingredient that
///   has no cost.
/// - Any error the strategy itself reports.
pub fn solve<T, I, N, C, M, R, S>(
    strategy_id: &str,
    budget: T,
    ingredient_costs: I,
    cocktail_recipes: C,
) -> Result<Solution<T>, SolveError>
where
    T: CostNumeric,
    I: IntoIterator<Item = (N, T)>,
    N: Into<String>,
    C: IntoIterator<Item = (M, R)>,
    M: Into<String>,
    R: IntoIterator<Item = S>,
    S: Into<String>,
{
    let kind: StrategyKind = strategy_id.parse()?;
    let catalog = Catalog::from_maps(ingredient_costs, cocktail_recipes)?;
    Ok(Solver::new().solve(kind, &catalog, budget)?.into_solution())
}

fn assemble_solution<T>(catalog: &Catalog<T>, selection: &Selection<T>) -> Solution<T>
where
    T: CostNumeric,
{
    let derived: FixedBitSet;
    let cocktails = match selection.cocktails() {
        Some(cocktails) => cocktails,
        None => {
            derived = realizable_cocktails(catalog, selection.ingredients());
            &derived
        }
    };

    let ingredient_names = |set: &FixedBitSet| -> Vec<String> {
        set.ones()
            .map(|i| catalog.ingredient_name(i.into()).to_owned())
            .collect()
    };
    let cocktail_names = |set: &FixedBitSet| -> Vec<String> {
        set.ones()
            .map(|i| catalog.cocktail_name(i.into()).to_owned())
            .collect()
    };

    let excluded_ingredients =
        set_complement::<IngredientIndexTag>(catalog.num_ingredients(), selection.ingredients())
            .into_iter()
            .map(|i| catalog.ingredient_name(i).to_owned())
            .collect();
    let excluded_cocktails = set_complement::<CocktailIndexTag>(catalog.num_cocktails(), cocktails)
        .into_iter()
        .map(|c| catalog.cocktail_name(c).to_owned())
        .collect();

    Solution::new(
        ingredient_names(selection.ingredients()),
        selection.total_cost(),
        cocktail_names(cocktails),
        excluded_ingredients,
        excluded_cocktails,
    )
}
