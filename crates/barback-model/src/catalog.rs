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

//! # Ingredient and Cocktail Catalog
//!
//! A `Catalog` is the immutable problem instance every strategy reads: the
//! ingredient universe with one cost per ingredient, and the cocktail universe
//! with one recipe per cocktail. Both universes keep insertion order, which is
//! the enumeration order used for tie-breaks and for excluded sets.
//!
//! Recipes are stored twice. The *literal* recipe keeps the listing exactly as
//! given, duplicates included, for computations defined per occurrence. The
//! *required* set drops repeated entries (first occurrence wins) and is what
//! feasibility is decided on.
//!
//! Catalogs are assembled with `CatalogBuilder`. Building fails on the first
//! recipe entry that names an ingredient without a cost, so a solve never
//! starts on an inconsistent dataset.
//!
//! ```rust
//! use barback_model::catalog::CatalogBuilder;
//!
//! let mut builder = CatalogBuilder::<u32>::new();
//! builder.add_ingredient("vodka", 30).add_ingredient("lemon juice", 2);
//! builder.add_cocktail("Screwdriver", ["vodka", "lemon juice"]);
//! let catalog = builder.build().expect("consistent dataset");
//!
//! assert_eq!(catalog.num_ingredients(), 2);
//! assert_eq!(catalog.num_cocktails(), 1);
//! ```

use crate::{
    index::{CocktailIndex, IngredientIndex},
    num::{CostNumeric, checked_sum},
};
use fixedbitset::FixedBitSet;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use thiserror::Error;

/// An insertion-ordered set of names; the position of a name is its index.
pub type NameSet = IndexSet<String, FxBuildHasher>;

/// A recipe as a list of ingredient indices. Most recipes are short.
pub type Recipe = SmallVec<[IngredientIndex; 8]>;

/// The error type for catalog construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A recipe references an ingredient that has no cost.
    #[error("cost not found for ingredient '{ingredient}' used by cocktail '{cocktail}'")]
    MissingIngredientCost { cocktail: String, ingredient: String },
    /// The same ingredient name was added twice.
    #[error("ingredient '{0}' is defined more than once")]
    DuplicateIngredient(String),
    /// The same cocktail name was added twice.
    #[error("cocktail '{0}' is defined more than once")]
    DuplicateCocktail(String),
}

/// The immutable problem instance.
#[derive(Clone, PartialEq, Eq)]
pub struct Catalog<T> {
    ingredient_names: NameSet,
    ingredient_costs: Vec<T>,
    cocktail_names: NameSet,
    recipes: Vec<Recipe>,
    required: Vec<Recipe>,
}

impl<T> Catalog<T>
where
    T: CostNumeric,
{
    /// Builds a catalog from a cost mapping and a recipe mapping.
    ///
    /// Iteration order of the inputs becomes the universe order.
    pub fn from_maps<I, N, C, M, R, S>(
        ingredient_costs: I,
        cocktail_recipes: C,
    ) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        C: IntoIterator<Item = (M, R)>,
        M: Into<String>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = CatalogBuilder::new();
        for (name, cost) in ingredient_costs {
            builder.add_ingredient(name, cost);
        }
        for (name, recipe) in cocktail_recipes {
            builder.add_cocktail(name, recipe);
        }
        builder.build()
    }

    /// Returns the number of ingredients in the universe.
    #[inline]
    pub fn num_ingredients(&self) -> usize {
        self.ingredient_names.len()
    }

    /// Returns the number of cocktails in the universe.
    #[inline]
    pub fn num_cocktails(&self) -> usize {
        self.cocktail_names.len()
    }

    /// Returns `true` if there are neither ingredients nor cocktails.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_ingredients() == 0 && self.num_cocktails() == 0
    }

    /// Iterates the ingredient universe in enumeration order.
    #[inline]
    pub fn ingredient_indices(&self) -> impl DoubleEndedIterator<Item = IngredientIndex> + use<T> {
        (0..self.num_ingredients()).map(IngredientIndex::new)
    }

    /// Iterates the cocktail universe in enumeration order.
    #[inline]
    pub fn cocktail_indices(&self) -> impl DoubleEndedIterator<Item = CocktailIndex> + use<T> {
        (0..self.num_cocktails()).map(CocktailIndex::new)
    }

    /// Returns the name of an ingredient.
    ///
    /// # Panics
    ///
    /// Panics if `ingredient` is out of bounds.
    #[inline]
    pub fn ingredient_name(&self, ingredient: IngredientIndex) -> &str {
        match self.ingredient_names.get_index(ingredient.get()) {
            Some(name) => name,
            None => panic!(
                "called `Catalog::ingredient_name` with ingredient index out of bounds: the len is {} but the index is {}",
                self.num_ingredients(),
                ingredient.get()
            ),
        }
    }

    /// Returns the name of a cocktail.
    ///
    /// # Panics
    ///
    /// Panics if `cocktail` is out of bounds.
    #[inline]
    pub fn cocktail_name(&self, cocktail: CocktailIndex) -> &str {
        match self.cocktail_names.get_index(cocktail.get()) {
            Some(name) => name,
            None => panic!(
                "called `Catalog::cocktail_name` with cocktail index out of bounds: the len is {} but the index is {}",
                self.num_cocktails(),
                cocktail.get()
            ),
        }
    }

    /// Looks up an ingredient by name.
    #[inline]
    pub fn ingredient_index(&self, name: &str) -> Option<IngredientIndex> {
        self.ingredient_names
            .get_index_of(name)
            .map(IngredientIndex::new)
    }

    /// Looks up a cocktail by name.
    #[inline]
    pub fn cocktail_index(&self, name: &str) -> Option<CocktailIndex> {
        self.cocktail_names.get_index_of(name).map(CocktailIndex::new)
    }

    /// Returns the cost of an ingredient.
    #[inline]
    pub fn ingredient_cost(&self, ingredient: IngredientIndex) -> T {
        debug_assert!(
            ingredient.get() < self.num_ingredients(),
            "called `Catalog::ingredient_cost` with ingredient index out of bounds: the len is {} but the index is {}",
            self.num_ingredients(),
            ingredient.get()
        );

        self.ingredient_costs[ingredient.get()]
    }

    /// Returns all ingredient costs, indexed by `IngredientIndex`.
    #[inline]
    pub fn ingredient_costs(&self) -> &[T] {
        &self.ingredient_costs
    }

    /// Returns the recipe of a cocktail exactly as listed, duplicates included.
    #[inline]
    pub fn recipe(&self, cocktail: CocktailIndex) -> &[IngredientIndex] {
        debug_assert!(
            cocktail.get() < self.num_cocktails(),
            "called `Catalog::recipe` with cocktail index out of bounds: the len is {} but the index is {}",
            self.num_cocktails(),
            cocktail.get()
        );

        &self.recipes[cocktail.get()]
    }

    /// Returns the distinct ingredients a cocktail requires, in first-occurrence order.
    #[inline]
    pub fn required_ingredients(&self, cocktail: CocktailIndex) -> &[IngredientIndex] {
        debug_assert!(
            cocktail.get() < self.num_cocktails(),
            "called `Catalog::required_ingredients` with cocktail index out of bounds: the len is {} but the index is {}",
            self.num_cocktails(),
            cocktail.get()
        );

        &self.required[cocktail.get()]
    }

    /// Returns the total cost of a set of ingredients, or `None` if the total
    /// does not fit `T`.
    #[inline]
    pub fn cost_of(&self, ingredients: &FixedBitSet) -> Option<T> {
        checked_sum(
            ingredients
                .ones()
                .map(|i| self.ingredient_cost(IngredientIndex::new(i))),
        )
    }

    /// Returns an empty ingredient set sized for this catalog.
    #[inline]
    pub fn empty_ingredient_set(&self) -> FixedBitSet {
        FixedBitSet::with_capacity(self.num_ingredients())
    }

    /// Returns an empty cocktail set sized for this catalog.
    #[inline]
    pub fn empty_cocktail_set(&self) -> FixedBitSet {
        FixedBitSet::with_capacity(self.num_cocktails())
    }
}

impl<T> std::fmt::Debug for Catalog<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("ingredient_names", &self.ingredient_names)
            .field("ingredient_costs", &self.ingredient_costs)
            .field("cocktail_names", &self.cocktail_names)
            .field("recipes", &self.recipes)
            .finish()
    }
}

impl<T> std::fmt::Display for Catalog<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Catalog(ingredients: {}, cocktails: {})",
            self.num_ingredients(),
            self.num_cocktails()
        )
    }
}

/// Collects ingredients and cocktails by name and resolves them into a `Catalog`.
#[derive(Debug, Clone)]
pub struct CatalogBuilder<T> {
    ingredient_names: NameSet,
    ingredient_costs: Vec<T>,
    cocktail_names: NameSet,
    listings: Vec<Vec<String>>,
    duplicate: Option<CatalogError>,
}

impl<T> Default for CatalogBuilder<T>
where
    T: CostNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CatalogBuilder<T>
where
    T: CostNumeric,
{
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self {
            ingredient_names: NameSet::default(),
            ingredient_costs: Vec::new(),
            cocktail_names: NameSet::default(),
            listings: Vec::new(),
            duplicate: None,
        }
    }

    /// Returns the number of ingredients added so far.
    #[inline]
    pub fn num_ingredients(&self) -> usize {
        self.ingredient_names.len()
    }

    /// Returns the number of cocktails added so far.
    #[inline]
    pub fn num_cocktails(&self) -> usize {
        self.cocktail_names.len()
    }

    /// Adds an ingredient with its cost.
    ///
    /// A repeated name is reported by `build`.
    pub fn add_ingredient<N>(&mut self, name: N, cost: T) -> &mut Self
    where
        N: Into<String>,
    {
        let name = name.into();
        if self.ingredient_names.contains(&name) {
            self.duplicate
                .get_or_insert(CatalogError::DuplicateIngredient(name));
            return self;
        }
        self.ingredient_names.insert(name);
        self.ingredient_costs.push(cost);
        self
    }

    /// Adds a cocktail with the ingredients its recipe lists.
    ///
    /// A repeated name is reported by `build`.
    pub fn add_cocktail<N, R, S>(&mut self, name: N, recipe: R) -> &mut Self
    where
        N: Into<String>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if self.cocktail_names.contains(&name) {
            self.duplicate
                .get_or_insert(CatalogError::DuplicateCocktail(name));
            return self;
        }
        self.cocktail_names.insert(name);
        self.listings
            .push(recipe.into_iter().map(Into::into).collect());
        self
    }

    /// Resolves every recipe entry and builds the catalog.
    ///
    /// Fails on the first duplicate name, or on the first recipe entry (in
    /// cocktail order, then recipe order) whose ingredient has no cost.
    pub fn build(self) -> Result<Catalog<T>, CatalogError> {
        if let Some(err) = self.duplicate {
            return Err(err);
        }

        let mut recipes = Vec::with_capacity(self.listings.len());
        let mut required = Vec::with_capacity(self.listings.len());

        for (position, listing) in self.listings.into_iter().enumerate() {
            let mut recipe = Recipe::with_capacity(listing.len());
            let mut distinct = Recipe::with_capacity(listing.len());

            for ingredient in listing {
                let Some(index) = self.ingredient_names.get_index_of(&ingredient) else {
                    let cocktail = self
                        .cocktail_names
                        .get_index(position)
                        .cloned()
                        .unwrap_or_default();
                    return Err(CatalogError::MissingIngredientCost {
                        cocktail,
                        ingredient,
                    });
                };
                let index = IngredientIndex::new(index);
                recipe.push(index);
                if !distinct.contains(&index) {
                    distinct.push(index);
                }
            }

            recipes.push(recipe);
            required.push(distinct);
        }

        log::debug!(
            "built catalog with {} ingredients and {} cocktails",
            self.ingredient_names.len(),
            self.cocktail_names.len()
        );

        Ok(Catalog {
            ingredient_names: self.ingredient_names,
            ingredient_costs: self.ingredient_costs,
            cocktail_names: self.cocktail_names,
            recipes,
            required,
        })
    }
}
