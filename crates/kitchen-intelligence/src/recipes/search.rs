// ABOUTME: Recipe query engine applying text search, multi-criterion filters and sort order
// ABOUTME: Pure function over a catalog snapshot; no I/O and no shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Query Engine
//!
//! Dimensions are AND-combined; membership within a set dimension is OR.
//! An empty set never constrains its dimension. Ranges are inclusive and are
//! not validated, so a range with `min > max` simply matches nothing.
//!
//! Text and ingredient matching is case-insensitive (Unicode lowercase).
//! Results are stable-sorted by the requested key with the recipe id as the
//! final tie-break, so identical inputs always produce identical output.

use super::models::{Difficulty, Recipe};
use kitchen_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Inclusive numeric range used for time and servings filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusiveRange {
    /// Lower bound (inclusive)
    pub min: u32,
    /// Upper bound (inclusive)
    pub max: u32,
}

impl InclusiveRange {
    /// Create a range; `min > max` is accepted and matches nothing
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Range accepting every value
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: 0,
            max: u32::MAX,
        }
    }

    /// Range `0..=max`
    #[must_use]
    pub const fn at_most(max: u32) -> Self {
        Self { min: 0, max }
    }

    /// Range `min..=u32::MAX`
    #[must_use]
    pub const fn at_least(min: u32) -> Self {
        Self { min, max: u32::MAX }
    }

    /// Inclusive membership test
    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether this range accepts every value
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min == 0 && self.max == u32::MAX
    }
}

impl Default for InclusiveRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Sort key applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Ascending by lowercased name
    #[default]
    Name,
    /// Ascending by prep + cook time
    CookingTime,
    /// Ascending from easy to hard
    Difficulty,
    /// Highest rated first, unrated last
    Rating,
    /// Newest first
    DateAdded,
}

impl SortOption {
    /// String label used by the CLI
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CookingTime => "cooking_time",
            Self::Difficulty => "difficulty",
            Self::Rating => "rating",
            Self::DateAdded => "date_added",
        }
    }
}

impl FromStr for SortOption {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "name" => Ok(Self::Name),
            "cooking_time" | "time" => Ok(Self::CookingTime),
            "difficulty" => Ok(Self::Difficulty),
            "rating" => Ok(Self::Rating),
            "date_added" | "date" | "newest" => Ok(Self::DateAdded),
            other => Err(AppError::invalid_input(format!(
                "Unknown sort option '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarative search criteria; every field defaults to "unconstrained"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchFilters {
    /// Recipe must belong to at least one of these categories
    pub categories: BTreeSet<String>,
    /// Recipe difficulty must be one of these
    pub difficulty: BTreeSet<Difficulty>,
    /// Allowed prep + cook time in minutes
    pub cooking_time: InclusiveRange,
    /// Allowed servings
    pub servings: InclusiveRange,
    /// Each entry must appear in some ingredient name
    pub ingredients: BTreeSet<String>,
    /// No entry may appear in any ingredient name
    pub exclude_ingredients: BTreeSet<String>,
    /// If set, must equal the recipe's vegetarian flag
    pub is_vegetarian: Option<bool>,
    /// If set, must equal the recipe's vegan flag
    pub is_vegan: Option<bool>,
    /// If set, must equal the recipe's gluten-free flag
    pub is_gluten_free: Option<bool>,
    /// Sort order of the result
    pub sort_by: SortOption,
}

impl SearchFilters {
    /// Restrict to a category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    /// Allow a difficulty level
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty.insert(difficulty);
        self
    }

    /// Restrict total cooking time
    #[must_use]
    pub const fn with_cooking_time(mut self, range: InclusiveRange) -> Self {
        self.cooking_time = range;
        self
    }

    /// Restrict servings
    #[must_use]
    pub const fn with_servings(mut self, range: InclusiveRange) -> Self {
        self.servings = range;
        self
    }

    /// Require an ingredient
    #[must_use]
    pub fn requiring(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.insert(ingredient.into());
        self
    }

    /// Exclude an ingredient
    #[must_use]
    pub fn excluding(mut self, ingredient: impl Into<String>) -> Self {
        self.exclude_ingredients.insert(ingredient.into());
        self
    }

    /// Constrain the vegetarian flag
    #[must_use]
    pub const fn vegetarian(mut self, value: bool) -> Self {
        self.is_vegetarian = Some(value);
        self
    }

    /// Constrain the vegan flag
    #[must_use]
    pub const fn vegan(mut self, value: bool) -> Self {
        self.is_vegan = Some(value);
        self
    }

    /// Constrain the gluten-free flag
    #[must_use]
    pub const fn gluten_free(mut self, value: bool) -> Self {
        self.is_gluten_free = Some(value);
        self
    }

    /// Set the sort order
    #[must_use]
    pub const fn sorted_by(mut self, sort_by: SortOption) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// True when no dimension constrains the result (sort order is ignored)
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.categories.is_empty()
            && self.difficulty.is_empty()
            && self.cooking_time.is_unbounded()
            && self.servings.is_unbounded()
            && self.ingredients.is_empty()
            && self.exclude_ingredients.is_empty()
            && self.is_vegetarian.is_none()
            && self.is_vegan.is_none()
            && self.is_gluten_free.is_none()
    }
}

/// Filters with their needles lowercased once per search
struct PreparedQuery<'a> {
    text: String,
    required: Vec<String>,
    excluded: Vec<String>,
    filters: &'a SearchFilters,
}

impl<'a> PreparedQuery<'a> {
    fn new(query: &str, filters: &'a SearchFilters) -> Self {
        Self {
            text: query.to_lowercase(),
            required: filters.ingredients.iter().map(|i| i.to_lowercase()).collect(),
            excluded: filters
                .exclude_ingredients
                .iter()
                .map(|i| i.to_lowercase())
                .collect(),
            filters,
        }
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        let ingredient_names: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|i| i.name.to_lowercase())
            .collect();

        self.matches_text(recipe, &ingredient_names)
            && self.matches_sets(recipe)
            && self.filters.cooking_time.contains(recipe.total_time_mins())
            && self.filters.servings.contains(recipe.servings)
            && self.matches_ingredients(&ingredient_names)
            && self.matches_dietary(recipe)
    }

    fn matches_text(&self, recipe: &Recipe, ingredient_names: &[String]) -> bool {
        self.text.is_empty()
            || recipe.name.to_lowercase().contains(&self.text)
            || recipe.description.to_lowercase().contains(&self.text)
            || ingredient_names.iter().any(|name| name.contains(&self.text))
    }

    fn matches_sets(&self, recipe: &Recipe) -> bool {
        let categories_ok = self.filters.categories.is_empty()
            || recipe
                .categories
                .iter()
                .any(|c| self.filters.categories.contains(c));
        let difficulty_ok = self.filters.difficulty.is_empty()
            || self.filters.difficulty.contains(&recipe.difficulty);
        categories_ok && difficulty_ok
    }

    fn matches_ingredients(&self, ingredient_names: &[String]) -> bool {
        let has = |needle: &String| ingredient_names.iter().any(|name| name.contains(needle));
        self.required.iter().all(has) && !self.excluded.iter().any(has)
    }

    fn matches_dietary(&self, recipe: &Recipe) -> bool {
        let check = |wanted: Option<bool>, actual: bool| wanted.is_none_or(|w| w == actual);
        check(self.filters.is_vegetarian, recipe.is_vegetarian)
            && check(self.filters.is_vegan, recipe.is_vegan)
            && check(self.filters.is_gluten_free, recipe.is_gluten_free)
    }
}

/// Recipe query engine
pub struct RecipeQueryEngine;

impl RecipeQueryEngine {
    /// Filter and sort `catalog`
    ///
    /// Pure and deterministic: the same catalog snapshot, query and filters
    /// always yield the same sequence.
    #[must_use]
    pub fn search(catalog: &[Recipe], query: &str, filters: &SearchFilters) -> Vec<Recipe> {
        let prepared = PreparedQuery::new(query, filters);
        let mut results: Vec<Recipe> = catalog
            .iter()
            .filter(|recipe| prepared.matches(recipe))
            .cloned()
            .collect();

        Self::sort(&mut results, filters.sort_by);

        debug!(
            catalog_size = catalog.len(),
            matched = results.len(),
            sort_by = %filters.sort_by,
            "Recipe search completed"
        );

        results
    }

    /// Whether a single recipe passes `query` and `filters`
    #[must_use]
    pub fn matches(recipe: &Recipe, query: &str, filters: &SearchFilters) -> bool {
        PreparedQuery::new(query, filters).matches(recipe)
    }

    /// Stable sort by `sort_by`, ties broken by ascending id
    pub fn sort(recipes: &mut [Recipe], sort_by: SortOption) {
        recipes.sort_by(|a, b| Self::compare(a, b, sort_by).then_with(|| a.id.cmp(&b.id)));
    }

    fn compare(a: &Recipe, b: &Recipe, sort_by: SortOption) -> Ordering {
        match sort_by {
            SortOption::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOption::CookingTime => a.total_time_mins().cmp(&b.total_time_mins()),
            SortOption::Difficulty => a.difficulty.cmp(&b.difficulty),
            SortOption::Rating => match (a.rating, b.rating) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortOption::DateAdded => b.created_at.cmp(&a.created_at),
        }
    }
}
