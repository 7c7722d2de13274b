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

//! Dataset loader for bar instances.
//!
//! A bar is described by two plain-text tables. `ingredients.txt` holds one
//! ingredient per line with its cost, `cocktails.txt` holds one cocktail per
//! line with a comma-separated list of the ingredients it needs:
//!
//! ```raw
//! gin            34
//! lemon juice    2
//! ```
//!
//! ```raw
//! Gin Fizz       gin,lemon juice
//! ```
//!
//! Columns are separated by a tab or by a run of two or more spaces, so single
//! spaces inside names survive. Both columns are trimmed. Lines may end in
//! `\n` or `\r\n`; blank lines are ignored and any columns past the second
//! are ignored too. Errors carry
//! the source name and the 1-based line number of the offending line.
//!
//! The loader only parses. Consistency between the two tables (every recipe
//! entry must have a cost) is checked by `CatalogBuilder::build`, whose error
//! is passed through unchanged.

use crate::{
    catalog::{Catalog, CatalogBuilder, CatalogError},
    num::CostNumeric,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

/// The error type for the dataset loading process.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A source could not be opened or read.
    #[error("I/O error while reading '{path}': {error}")]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
    /// A line does not have the two expected columns.
    #[error("{file}:{line}: expected two columns separated by a tab or two spaces")]
    MalformedLine { file: String, line: usize },
    /// A cost column could not be parsed into the cost type.
    #[error("{file}:{line}: could not parse token '{token}' as type {type_name}")]
    Parse {
        file: String,
        line: usize,
        token: String,
        type_name: &'static str,
    },
    /// The two tables are inconsistent.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A configurable loader for bar datasets.
///
/// # Configuration
/// * `ingredients_file`: file name of the cost table inside a dataset directory.
/// * `cocktails_file`: file name of the recipe table inside a dataset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLoader<T> {
    ingredients_file: String,
    cocktails_file: String,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Default for DatasetLoader<T> {
    fn default() -> Self {
        Self {
            ingredients_file: "ingredients.txt".to_string(),
            cocktails_file: "cocktails.txt".to_string(),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> DatasetLoader<T>
where
    T: CostNumeric + FromStr,
{
    /// Creates a new `DatasetLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file name of the cost table used by `from_dir`.
    #[inline]
    pub fn ingredients_file<S: Into<String>>(mut self, name: S) -> Self {
        self.ingredients_file = name.into();
        self
    }

    /// Sets the file name of the recipe table used by `from_dir`.
    #[inline]
    pub fn cocktails_file<S: Into<String>>(mut self, name: S) -> Self {
        self.cocktails_file = name.into();
        self
    }

    /// Loads the dataset stored in `dir`.
    pub fn from_dir<P: AsRef<Path>>(&self, dir: P) -> Result<Catalog<T>, LoadError> {
        let dir = dir.as_ref();
        let ingredients_path = dir.join(&self.ingredients_file);
        let cocktails_path = dir.join(&self.cocktails_file);

        let ingredients = open(&ingredients_path)?;
        let cocktails = open(&cocktails_path)?;

        let catalog = self.load(
            ingredients,
            &ingredients_path.display().to_string(),
            cocktails,
            &cocktails_path.display().to_string(),
        )?;

        log::info!("loaded dataset from '{}': {}", dir.display(), catalog);
        Ok(catalog)
    }

    /// Loads a dataset from two generic readers.
    #[inline]
    pub fn from_readers<I, C>(&self, ingredients: I, cocktails: C) -> Result<Catalog<T>, LoadError>
    where
        I: Read,
        C: Read,
    {
        self.load(
            BufReader::new(ingredients),
            &self.ingredients_file,
            BufReader::new(cocktails),
            &self.cocktails_file,
        )
    }

    /// Loads a dataset from two string slices.
    #[inline]
    pub fn from_strs(&self, ingredients: &str, cocktails: &str) -> Result<Catalog<T>, LoadError> {
        self.from_readers(ingredients.as_bytes(), cocktails.as_bytes())
    }

    fn load<I, C>(
        &self,
        ingredients: I,
        ingredients_name: &str,
        cocktails: C,
        cocktails_name: &str,
    ) -> Result<Catalog<T>, LoadError>
    where
        I: BufRead,
        C: BufRead,
    {
        let mut builder = CatalogBuilder::new();

        for row in Rows::new(ingredients, ingredients_name) {
            let row = row?;
            let cost = row.value.parse::<T>().map_err(|_| LoadError::Parse {
                file: ingredients_name.to_owned(),
                line: row.line,
                token: row.value.clone(),
                type_name: std::any::type_name::<T>(),
            })?;
            builder.add_ingredient(row.key, cost);
        }

        for row in Rows::new(cocktails, cocktails_name) {
            let row = row?;
            let recipe = row
                .value
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty());
            builder.add_cocktail(row.key, recipe);
        }

        Ok(builder.build()?)
    }
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|error| LoadError::Io {
            path: path.to_path_buf(),
            error,
        })
}

/// One non-blank line split into its first two columns.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    line: usize,
    key: String,
    value: String,
}

/// Iterates the two-column rows of a source, skipping blank lines.
struct Rows<'a, R> {
    rdr: R,
    name: &'a str,
    line: usize,
    buf: String,
}

impl<'a, R: BufRead> Rows<'a, R> {
    #[inline]
    fn new(rdr: R, name: &'a str) -> Self {
        Self {
            rdr,
            name,
            line: 0,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for Rows<'_, R> {
    type Item = Result<Row, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.rdr.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(error) => {
                    return Some(Err(LoadError::Io {
                        path: PathBuf::from(self.name),
                        error,
                    }));
                }
            }
            self.line += 1;

            let text = self.buf.trim_end_matches(['\r', '\n']);
            if text.trim().is_empty() {
                continue;
            }

            let mut columns = split_columns(text);
            return Some(match (columns.next(), columns.next()) {
                (Some(key), Some(value)) => Ok(Row {
                    line: self.line,
                    key: key.trim().to_owned(),
                    value: value.trim().to_owned(),
                }),
                _ => Err(LoadError::MalformedLine {
                    file: self.name.to_owned(),
                    line: self.line,
                }),
            });
        }
    }
}

/// Splits a line at tabs and at runs of two or more spaces.
fn split_columns(line: &str) -> impl Iterator<Item = &str> {
    let bytes = line.as_bytes();
    let mut start = 0;
    let mut pos = 0;
    std::iter::from_fn(move || {
        if start > bytes.len() {
            return None;
        }
        while pos < bytes.len() {
            let run = match bytes[pos] {
                b'\t' => 1,
                b' ' if bytes.get(pos + 1) == Some(&b' ') => bytes[pos..]
                    .iter()
                    .take_while(|&&b| b == b' ')
                    .count(),
                _ => 0,
            };
            if run > 0 {
                let column = &line[start..pos];
                pos += run;
                start = pos;
                return Some(column);
            }
            pos += 1;
        }
        let column = &line[start..];
        start = bytes.len() + 1;
        Some(column)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{CocktailIndex, IngredientIndex};

    const INGREDIENTS: &str = "gin\t34\r\nlemon juice\t2\r\nvodka\t30\r\n";
    const COCKTAILS: &str =
        "Bloody Mary\tvodka,lemon juice\r\nGin Fizz\tgin,lemon juice\r\nScrewdriver\tvodka,lemon juice\r\n";

    #[test]
    fn test_loads_and_maps_correctly() {
        let catalog = DatasetLoader::<u32>::new()
            .from_strs(INGREDIENTS, COCKTAILS)
            .expect("Failed to load");

        assert_eq!(catalog.num_ingredients(), 3);
        assert_eq!(catalog.num_cocktails(), 3);
        assert_eq!(catalog.ingredient_name(IngredientIndex::new(1)), "lemon juice");
        assert_eq!(catalog.ingredient_costs(), &[34, 2, 30]);
        assert_eq!(
            catalog.recipe(CocktailIndex::new(1)),
            &[IngredientIndex::new(0), IngredientIndex::new(1)]
        );
    }

    #[test]
    fn test_space_runs_are_column_separators() {
        let ingredients = "lemon juice    2\ngin  34\n\n";
        let cocktails = "Gin Fizz      gin, lemon juice\n";
        let catalog = DatasetLoader::<u64>::new()
            .from_strs(ingredients, cocktails)
            .expect("Failed to load");

        assert_eq!(catalog.ingredient_index("lemon juice"), Some(IngredientIndex::new(0)));
        assert_eq!(catalog.ingredient_cost(IngredientIndex::new(1)), 34);
        assert_eq!(catalog.cocktail_index("Gin Fizz"), Some(CocktailIndex::new(0)));
        assert_eq!(catalog.required_ingredients(CocktailIndex::new(0)).len(), 2);
    }

    #[test]
    fn test_split_columns() {
        assert_eq!(split_columns("a b\tc").collect::<Vec<_>>(), vec!["a b", "c"]);
        assert_eq!(split_columns("a   b  c").collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(split_columns("solo").collect::<Vec<_>>(), vec!["solo"]);
        assert_eq!(split_columns("a\t\tb").collect::<Vec<_>>(), vec!["a", "", "b"]);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let res = DatasetLoader::<u32>::new().from_strs("gin\t34\nvodka\n", "");
        match res {
            Err(LoadError::MalformedLine { file, line }) => {
                assert_eq!(file, "ingredients.txt");
                assert_eq!(line, 2);
            }
            other => panic!("Expected MalformedLine, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_structure() {
        let res = DatasetLoader::<u32>::new().from_strs("gin\tcheap\n", "");
        match res {
            Err(LoadError::Parse {
                line,
                token,
                type_name,
                ..
            }) => {
                assert_eq!(line, 1);
                assert_eq!(token, "cheap");
                assert!(type_name.contains("u32"));
            }
            other => panic!("Expected Parse error with context, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_cost_is_passed_through() {
        let res = DatasetLoader::<u32>::new().from_strs("gin\t34\n", "Gin Fizz\tgin,soda\n");
        assert!(matches!(
            res,
            Err(LoadError::Catalog(CatalogError::MissingIngredientCost { .. }))
        ));
    }

    #[test]
    fn test_from_dir_reports_missing_file() {
        let dir = std::env::temp_dir().join("barback-loader-missing-dir");
        let res = DatasetLoader::<u32>::new().from_dir(&dir);
        match res {
            Err(LoadError::Io { path, .. }) => assert!(path.ends_with("ingredients.txt")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_dir_with_custom_file_names() {
        let dir = std::env::temp_dir().join(format!("barback-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("costs.tsv"), INGREDIENTS).unwrap();
        std::fs::write(dir.join("recipes.tsv"), COCKTAILS).unwrap();

        let catalog = DatasetLoader::<u32>::new()
            .ingredients_file("costs.tsv")
            .cocktails_file("recipes.tsv")
            .from_dir(&dir)
            .expect("Failed to load");
        assert_eq!(catalog.num_cocktails(), 3);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
