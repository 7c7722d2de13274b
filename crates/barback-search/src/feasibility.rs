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

//! Feasibility derivation.
//!
//! A cocktail is *realizable* when every ingredient its recipe requires is in
//! the selection. Containment is checked on the required set, so a recipe
//! that lists an ingredient twice needs it only once: the recipe contributes
//! no new element to the selection.

use barback_model::{
    catalog::Catalog,
    index::{CocktailIndex, TypedIndex},
    num::CostNumeric,
};
use fixedbitset::FixedBitSet;

/// Returns `true` if every ingredient `cocktail` requires is in `selected`.
#[inline]
pub fn is_realizable<T>(
    catalog: &Catalog<T>,
    cocktail: CocktailIndex,
    selected: &FixedBitSet,
) -> bool
where
    T: CostNumeric,
{
    catalog
        .required_ingredients(cocktail)
        .iter()
        .all(|ingredient| selected.contains(ingredient.get()))
}

/// Returns the set of cocktails that can be made from `selected`.
pub fn realizable_cocktails<T>(catalog: &Catalog<T>, selected: &FixedBitSet) -> FixedBitSet
where
    T: CostNumeric,
{
    let mut cocktails = catalog.empty_cocktail_set();
    for cocktail in catalog.cocktail_indices() {
        if is_realizable(catalog, cocktail, selected) {
            cocktails.insert(cocktail.get());
        }
    }
    cocktails
}

/// Returns the elements of `0..universe_len` that are not in `subset`, in
/// universe order.
#[inline]
pub fn set_complement<K>(universe_len: usize, subset: &FixedBitSet) -> Vec<TypedIndex<K>> {
    (0..universe_len)
        .filter(|&i| !subset.contains(i))
        .map(TypedIndex::new)
        .collect()
}
