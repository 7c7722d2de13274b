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

//! # Typed Catalog Indices
//!
//! Ingredients and cocktails are both addressed by dense positions into the
//! catalog. `TypedIndex<T>` wraps that `usize` with a phantom tag so an
//! `IngredientIndex` cannot be passed where a `CocktailIndex` is expected.
//! The wrapper is `#[repr(transparent)]` and compiles down to a plain `usize`.
//!
//! ```rust
//! use barback_model::index::IngredientIndex;
//!
//! let gin = IngredientIndex::new(0);
//! assert_eq!(gin.get(), 0);
//! assert_eq!(format!("{}", gin), "IngredientIndex(0)");
//! ```

/// Names an index space for `Debug` and `Display` output.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A dense position tagged with the index space it belongs to.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new index from a raw position.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the raw position.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.index
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline(always)]
    fn from(index: TypedIndex<T>) -> Self {
        index.index
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

/// A tag type for ingredient indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct IngredientIndexTag;

impl TypedIndexTag for IngredientIndexTag {
    const NAME: &'static str = "IngredientIndex";
}

/// A typed index for ingredients.
pub type IngredientIndex = TypedIndex<IngredientIndexTag>;

/// A tag type for cocktail indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CocktailIndexTag;

impl TypedIndexTag for CocktailIndexTag {
    const NAME: &'static str = "CocktailIndex";
}

/// A typed index for cocktails.
pub type CocktailIndex = TypedIndex<CocktailIndexTag>;
