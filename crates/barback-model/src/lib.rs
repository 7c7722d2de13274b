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

//! # Barback Model
//!
//! **The domain model for the Barback cocktail bar selection solver.**
//!
//! This crate defines the data structures that describe a bar: which
//! ingredients can be bought and at what cost, and which cocktails need which
//! ingredients. It is the interchange layer between dataset sources and the
//! selection strategies in `barback_search`.
//!
//! ## Architecture
//!
//! * **`index`**: Strongly-typed wrappers (`IngredientIndex`, `CocktailIndex`) so that
//!   ingredient and cocktail positions can never be mixed up.
//! * **`num`**: The `CostNumeric` bound for cost types and saturating cost sums.
//! * **`catalog`**: The immutable `Catalog` and its `CatalogBuilder`, which resolves
//!   recipe entries to ingredient indices and rejects recipes that reference unknown ingredients.
//! * **`loading`**: A loader for the two-column text datasets (`ingredients.txt`, `cocktails.txt`).
//! * **`solution`**: The solution record handed to presenters.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types.
//! 2.  **Stable Enumeration**: Both universes keep insertion order, which every
//!     tie-break in the solver relies on.
//! 3.  **Fail-Fast**: An inconsistent dataset is rejected when the catalog is built,
//!     never halfway through a solve.

pub mod catalog;
pub mod index;
pub mod loading;
pub mod num;
pub mod solution;
