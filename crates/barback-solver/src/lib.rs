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

//! # Barback Solver
//!
//! High-level entry points for choosing which ingredients to stock under a
//! budget. This crate ties the catalog, the strategies and the feasibility
//! derivation together and always hands back a fully populated `Solution`.
//!
//! ## Modules
//!
//! - `solver`: the `Solver` façade with its builder, single-strategy solves,
//!   portfolio (run several strategies at once) solves, and the `solve`
//!   function that works directly on name/cost and name/recipe mappings.
//! - `stats`: per-run statistics.
//!
//! ## Usage
//!
//! ```rust
//! use barback_solver::solve;
//!
//! let solution = solve(
//!     "dynamicProgramming",
//!     50u32,
//!     [("gin", 34), ("lemon juice", 2), ("vodka", 30)],
//!     [
//!         ("Bloody Mary", vec!["vodka", "lemon juice"]),
//!         ("Gin Fizz", vec!["gin", "lemon juice"]),
//!         ("Screwdriver", vec!["vodka", "lemon juice"]),
//!     ],
//! )
//! .expect("valid dataset");
//!
//! assert_eq!(solution.ingredients(), ["lemon juice", "vodka"]);
//! assert_eq!(solution.cocktails(), ["Bloody Mary", "Screwdriver"]);
//! assert_eq!(solution.total_cost(), 32);
//! ```

pub mod solver;
pub mod stats;

pub use solver::solve;
