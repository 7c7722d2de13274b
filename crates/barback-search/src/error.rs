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

use barback_model::catalog::CatalogError;
use thiserror::Error;

/// The error type for a solve call. A failed call never returns a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A recipe references an ingredient that has no cost.
    #[error("cost not found for ingredient '{ingredient}' used by cocktail '{cocktail}'")]
    MissingIngredientCost { cocktail: String, ingredient: String },
    /// The strategy identifier does not name a known strategy.
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),
    /// An ingredient used by some cocktail costs nothing, so its ratio is undefined.
    #[error("ingredient '{ingredient}' has zero cost but is used by {value} cocktail(s)")]
    ZeroIngredientCost { ingredient: String, value: u64 },
    /// A cocktail with a positive value costs nothing, so its ratio is undefined.
    #[error("cocktail '{cocktail}' has zero cost but a value of {value}")]
    ZeroCocktailCost { cocktail: String, value: u64 },
    /// The instance exceeds the configured brute force limit.
    #[error("instance has {ingredients} ingredients but brute force is limited to {limit}")]
    InstanceTooLarge { ingredients: usize, limit: usize },
    /// The budget does not fit a dynamic programming table.
    #[error("budget {0} is too large for a dynamic programming table")]
    BudgetTooLarge(String),
    /// Any other catalog inconsistency.
    #[error(transparent)]
    Catalog(CatalogError),
}

impl From<CatalogError> for SolveError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MissingIngredientCost {
                cocktail,
                ingredient,
            } => Self::MissingIngredientCost {
                cocktail,
                ingredient,
            },
            other => Self::Catalog(other),
        }
    }
}
