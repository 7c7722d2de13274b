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

use std::time::Duration;

/// Statistics collected during a single strategy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStatistics {
    /// Name of the strategy that produced the solution.
    pub strategy: String,
    /// Number of candidates the strategy evaluated. What counts as a
    /// candidate depends on the strategy: ranked ingredients for greedy,
    /// table cells for dynamic programming, leaves for brute force and picks
    /// for custom greedy.
    pub evaluations: u64,
    /// Wall-clock duration of the strategy run, solution assembly included.
    pub solve_duration: Duration,
}

impl std::fmt::Display for SolveStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solve Statistics:")?;
        writeln!(f, "  Strategy: {}", self.strategy)?;
        writeln!(f, "  Candidate Evaluations: {}", self.evaluations)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SolveStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStatisticsBuilder {
    strategy: String,
    evaluations: u64,
    solve_duration: Duration,
}

impl Default for SolveStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveStatisticsBuilder {
    /// Creates a new `SolveStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            strategy: String::new(),
            evaluations: 0,
            solve_duration: Duration::ZERO,
        }
    }

    /// Sets the strategy name.
    #[inline]
    pub fn strategy<S>(mut self, strategy: S) -> Self
    where
        S: Into<String>,
    {
        self.strategy = strategy.into();
        self
    }

    /// Sets the number of evaluated candidates.
    #[inline]
    pub fn evaluations(mut self, evaluations: u64) -> Self {
        self.evaluations = evaluations;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SolveStatistics` instance.
    #[inline]
    pub fn build(self) -> SolveStatistics {
        SolveStatistics {
            strategy: self.strategy,
            evaluations: self.evaluations,
            solve_duration: self.solve_duration,
        }
    }
}
