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

//! Barback-Search: valuation and selection strategies
//!
//! Given a `barback_model::catalog::Catalog` and a budget, choose which
//! ingredients to buy so that as many cocktails as possible can be mixed.
//! The crate separates the shared building blocks from the strategies that
//! use them, so strategies can be swapped without touching the valuation or
//! feasibility logic.
//!
//! Core flow
//! - Build a `strategy::StrategyContext` from a catalog and a budget.
//! - Pick a `strategy::Strategy` (greedy, DP, brute force, custom greedy).
//! - Call `select`; the returned `selection::Selection` holds the chosen
//!   ingredients and, when the strategy knows them, the realizable cocktails.
//!
//! Optimality
//! - `dp` is optimal for the sum of ingredient values within the budget.
//! - `brute_force` is optimal for the number of realizable cocktails.
//! - `greedy` and `custom_greedy` are approximations.
//!
//! Module map
//! - `error`: the `SolveError` type shared by all strategies.
//! - `sort`: the one descending sort used for every ranking.
//! - `valuation`: ingredient values, ratios and per-cocktail valuations.
//! - `feasibility`: realizable cocktails and set complements.
//! - `selection`: the raw strategy result.
//! - `strategy`: the strategy trait, identifiers and implementations.

pub mod error;
pub mod feasibility;
pub mod selection;
pub mod sort;
pub mod strategy;
pub mod valuation;

#[cfg(test)]
mod fixtures;
