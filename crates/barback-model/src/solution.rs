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

use crate::num::CostNumeric;

/// The final answer of a solve call.
///
/// Ingredient names are sorted lexicographically. Cocktail names and both
/// excluded lists follow the enumeration order of their universe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<T> {
    /// The selected ingredients.
    ingredients: Vec<String>,
    /// The total cost of the selected ingredients.
    total_cost: T,
    /// The cocktails that can be made from the selected ingredients.
    cocktails: Vec<String>,
    /// The ingredients that were not selected.
    excluded_ingredients: Vec<String>,
    /// The cocktails that cannot be made.
    excluded_cocktails: Vec<String>,
}

impl<T> Solution<T>
where
    T: CostNumeric,
{
    /// Constructs a new `Solution`.
    ///
    /// `ingredients` is sorted here; the other lists are taken as given.
    pub fn new(
        mut ingredients: Vec<String>,
        total_cost: T,
        cocktails: Vec<String>,
        excluded_ingredients: Vec<String>,
        excluded_cocktails: Vec<String>,
    ) -> Self {
        ingredients.sort_unstable();

        debug_assert!(
            ingredients.iter().all(|i| !excluded_ingredients.contains(i)),
            "called `Solution::new` with an ingredient that is both selected and excluded"
        );
        debug_assert!(
            cocktails.iter().all(|c| !excluded_cocktails.contains(c)),
            "called `Solution::new` with a cocktail that is both realizable and excluded"
        );

        Self {
            ingredients,
            total_cost,
            cocktails,
            excluded_ingredients,
            excluded_cocktails,
        }
    }

    /// Returns the selected ingredients, sorted by name.
    #[inline]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Returns the total cost of the selected ingredients.
    #[inline]
    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// Returns the realizable cocktails.
    #[inline]
    pub fn cocktails(&self) -> &[String] {
        &self.cocktails
    }

    /// Returns the number of realizable cocktails.
    #[inline]
    pub fn total_value(&self) -> usize {
        self.cocktails.len()
    }

    /// Returns the ingredients that were not selected.
    #[inline]
    pub fn excluded_ingredients(&self) -> &[String] {
        &self.excluded_ingredients
    }

    /// Returns the cocktails that cannot be made.
    #[inline]
    pub fn excluded_cocktails(&self) -> &[String] {
        &self.excluded_cocktails
    }

    /// Returns `true` if no ingredient was selected and no cocktail can be
    /// made. A cocktail with an empty recipe is made from nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.cocktails.is_empty()
    }
}

impl<T> std::fmt::Display for Solution<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution Summary")?;
        writeln!(f, "   Total Cost: {}", self.total_cost)?;
        writeln!(f, "   Total Value: {}", self.total_value())?;
        writeln!(f)?;
        writeln!(f, "   Ingredients: {}", NameList(&self.ingredients))?;
        writeln!(f, "   Cocktails: {}", NameList(&self.cocktails))?;
        writeln!(
            f,
            "   Excluded Ingredients: {}",
            NameList(&self.excluded_ingredients)
        )?;
        writeln!(
            f,
            "   Excluded Cocktails: {}",
            NameList(&self.excluded_cocktails)
        )
    }
}

/// Comma separated names, or `(none)`.
struct NameList<'a>(&'a [String]);

impl std::fmt::Display for NameList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(none)");
        }
        write!(f, "{}", self.0.join(", "))
    }
}
