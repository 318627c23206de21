// ABOUTME: Data models for the recipe catalog and weekly meal plans
// ABOUTME: Defines Recipe, RecipeIngredient, Difficulty, MealType, DayOfWeek, MealPlan and preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use kitchen_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Recipe difficulty, ordered from easiest to hardest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Simple recipes, basic techniques
    #[default]
    Easy,
    /// Moderate complexity
    Medium,
    /// Advanced techniques or long preparation
    Hard,
}

impl Difficulty {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "facil" | "fácil" => Ok(Self::Easy),
            "medium" | "media" | "intermedia" => Ok(Self::Medium),
            "hard" | "dificil" | "difícil" => Ok(Self::Hard),
            other => Err(AppError::invalid_input(format!(
                "Unknown difficulty '{other}' (expected easy, medium or hard)"
            ))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between-meal snack
    Snack,
}

impl MealType {
    /// All meal types in slot order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "desayuno" => Ok(Self::Breakfast),
            "lunch" | "almuerzo" => Ok(Self::Lunch),
            "dinner" | "cena" => Ok(Self::Dinner),
            "snack" | "merienda" => Ok(Self::Snack),
            other => Err(AppError::invalid_input(format!(
                "Unknown meal type '{other}' (expected breakfast, lunch, dinner or snack)"
            ))),
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day of the week, ordered Monday first
///
/// `chrono::Weekday` has no ordering, and meal plans need a stable day order
/// for storage and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl DayOfWeek {
    /// All days, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Days elapsed since Monday (Monday = 0)
    #[must_use]
    pub const fn days_from_monday(&self) -> u32 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }

    /// Calendar date of this day in the week starting at `week_start`
    #[must_use]
    pub fn date_in_week(&self, week_start: NaiveDate) -> NaiveDate {
        week_start_for(week_start) + Duration::days(i64::from(self.days_from_monday()))
    }

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" | "lunes" => Ok(Self::Monday),
            "tuesday" | "tue" | "martes" => Ok(Self::Tuesday),
            "wednesday" | "wed" | "miercoles" | "miércoles" => Ok(Self::Wednesday),
            "thursday" | "thu" | "jueves" => Ok(Self::Thursday),
            "friday" | "fri" | "viernes" => Ok(Self::Friday),
            "saturday" | "sat" | "sabado" | "sábado" => Ok(Self::Saturday),
            "sunday" | "sun" | "domingo" => Ok(Self::Sunday),
            other => Err(AppError::invalid_input(format!(
                "Unknown day of week '{other}'"
            ))),
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monday of the week containing `date`
#[must_use]
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Dietary restriction a meal plan must respect
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// No gluten-containing ingredients
    GlutenFree,
    /// No dairy products
    DairyFree,
    /// No nuts
    NutFree,
}

impl DietaryRestriction {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::GlutenFree => "gluten_free",
            Self::DairyFree => "dairy_free",
            Self::NutFree => "nut_free",
        }
    }
}

impl FromStr for DietaryRestriction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "vegetarian" | "vegetariano" => Ok(Self::Vegetarian),
            "vegan" | "vegano" => Ok(Self::Vegan),
            "gluten_free" | "sin_gluten" => Ok(Self::GlutenFree),
            "dairy_free" | "sin_lactosa" => Ok(Self::DairyFree),
            "nut_free" | "sin_frutos_secos" => Ok(Self::NutFree),
            other => Err(AppError::invalid_input(format!(
                "Unknown dietary restriction '{other}'"
            ))),
        }
    }
}

/// Single ingredient in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Human-readable ingredient name
    pub name: String,
    /// Amount in the specified unit
    pub amount: f64,
    /// Free-text measurement unit (g, ml, cup, unidades, ...)
    pub unit: String,
    /// Optional preparation notes (diced, minced, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RecipeIngredient {
    /// Create a new ingredient
    #[must_use]
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
            notes: None,
        }
    }

    /// Add preparation notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl fmt::Display for RecipeIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount.fract().abs() < f64::EPSILON {
            write!(f, "{:.0} {} {}", self.amount, self.unit, self.name)?;
        } else {
            write!(f, "{} {} {}", self.amount, self.unit, self.name)?;
        }
        if let Some(notes) = &self.notes {
            write!(f, " ({notes})")?;
        }
        Ok(())
    }
}

/// A complete recipe with ingredients and instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Recipe description
    #[serde(default)]
    pub description: String,
    /// List of ingredients
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    /// Cooking instructions (ordered steps)
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time_mins: u32,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time_mins: u32,
    /// Number of servings this recipe makes
    pub servings: u32,
    /// Difficulty level
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Cuisine tag (Mediterranean, Mexican, ...)
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Meal the recipe is intended for
    #[serde(default)]
    pub meal_type: Option<MealType>,
    /// Category ids the recipe belongs to
    #[serde(default)]
    pub categories: BTreeSet<String>,
    /// No meat or fish
    #[serde(default)]
    pub is_vegetarian: bool,
    /// No animal products
    #[serde(default)]
    pub is_vegan: bool,
    /// No gluten
    #[serde(default)]
    pub is_gluten_free: bool,
    /// No dairy
    #[serde(default)]
    pub is_dairy_free: bool,
    /// No nuts
    #[serde(default)]
    pub is_nut_free: bool,
    /// Average rating (0.0 - 5.0), if rated
    #[serde(default)]
    pub rating: Option<f32>,
    /// Marked as favorite by the user
    #[serde(default)]
    pub is_favorite: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Last time the recipe was shown to the user
    #[serde(default)]
    pub last_shown_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Create a new recipe with a generated id
    #[must_use]
    pub fn new(name: impl Into<String>, servings: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            prep_time_mins: 0,
            cook_time_mins: 0,
            servings,
            difficulty: Difficulty::default(),
            cuisine: None,
            meal_type: None,
            categories: BTreeSet::new(),
            is_vegetarian: false,
            is_vegan: false,
            is_gluten_free: false,
            is_dairy_free: false,
            is_nut_free: false,
            rating: None,
            is_favorite: false,
            created_at: now,
            updated_at: now,
            last_shown_at: None,
        }
    }

    /// Replace the generated id
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Add a description
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set preparation time
    #[must_use]
    pub const fn with_prep_time(mut self, mins: u32) -> Self {
        self.prep_time_mins = mins;
        self
    }

    /// Set cooking time
    #[must_use]
    pub const fn with_cook_time(mut self, mins: u32) -> Self {
        self.cook_time_mins = mins;
        self
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add an instruction step
    #[must_use]
    pub fn with_instruction(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    /// Set difficulty
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Add a category id
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    /// Set cuisine tag
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Set intended meal type
    #[must_use]
    pub const fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }

    /// Set rating
    #[must_use]
    pub const fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set creation timestamp
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Mark the recipe as satisfying a dietary restriction
    #[must_use]
    pub const fn with_restriction(mut self, restriction: DietaryRestriction) -> Self {
        match restriction {
            DietaryRestriction::Vegetarian => self.is_vegetarian = true,
            DietaryRestriction::Vegan => self.is_vegan = true,
            DietaryRestriction::GlutenFree => self.is_gluten_free = true,
            DietaryRestriction::DairyFree => self.is_dairy_free = true,
            DietaryRestriction::NutFree => self.is_nut_free = true,
        }
        self
    }

    /// Whether the recipe satisfies the given dietary restriction
    #[must_use]
    pub const fn satisfies(&self, restriction: DietaryRestriction) -> bool {
        match restriction {
            DietaryRestriction::Vegetarian => self.is_vegetarian,
            DietaryRestriction::Vegan => self.is_vegan,
            DietaryRestriction::GlutenFree => self.is_gluten_free,
            DietaryRestriction::DairyFree => self.is_dairy_free,
            DietaryRestriction::NutFree => self.is_nut_free,
        }
    }

    /// Get total time (prep + cook)
    #[must_use]
    pub const fn total_time_mins(&self) -> u32 {
        self.prep_time_mins.saturating_add(self.cook_time_mins)
    }
}

/// One recipe assigned to a meal slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMeal {
    /// Unique id of this planned entry
    pub id: Uuid,
    /// Referenced recipe
    pub recipe_id: String,
    /// Recipe name at planning time
    pub recipe_name: String,
    /// Slot the meal fills
    pub meal_type: MealType,
    /// Servings override
    pub servings: u32,
    /// Free-text note
    #[serde(default)]
    pub notes: String,
}

impl PlannedMeal {
    /// Plan `recipe` for `meal_type` with the given servings
    #[must_use]
    pub fn new(recipe: &Recipe, meal_type: MealType, servings: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            meal_type,
            servings,
            notes: String::new(),
        }
    }

    /// Attach a note
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Weekly meal plan keyed by its Monday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Unique plan id
    pub id: Uuid,
    /// Monday of the planned week
    pub week_start: NaiveDate,
    /// Planned meals per day; a missing day has no meals
    #[serde(default)]
    pub meals: BTreeMap<DayOfWeek, Vec<PlannedMeal>>,
    /// Free-text note for the week
    #[serde(default)]
    pub notes: String,
}

impl MealPlan {
    /// Create an empty plan for the week containing `date`
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            week_start: week_start_for(date),
            meals: BTreeMap::new(),
            notes: String::new(),
        }
    }

    /// Meals planned for `day`, in insertion order
    #[must_use]
    pub fn meals_for(&self, day: DayOfWeek) -> &[PlannedMeal] {
        match self.meals.get(&day) {
            Some(meals) => meals,
            None => &[],
        }
    }

    /// Append a meal to `day`
    pub fn add_meal(&mut self, day: DayOfWeek, meal: PlannedMeal) {
        self.meals.entry(day).or_default().push(meal);
    }

    /// Remove the meal with `meal_id` from `day`
    ///
    /// Returns `false` when no such meal exists. Days left without meals are
    /// dropped from the map.
    pub fn remove_meal(&mut self, day: DayOfWeek, meal_id: Uuid) -> bool {
        let Some(day_meals) = self.meals.get_mut(&day) else {
            return false;
        };
        let before = day_meals.len();
        day_meals.retain(|meal| meal.id != meal_id);
        let removed = day_meals.len() != before;
        if day_meals.is_empty() {
            self.meals.remove(&day);
        }
        removed
    }

    /// Total number of planned meals across the week
    #[must_use]
    pub fn meal_count(&self) -> usize {
        self.meals.values().map(Vec::len).sum()
    }

    /// Whether any meal in the plan references `recipe_id`
    #[must_use]
    pub fn contains_recipe(&self, recipe_id: &str) -> bool {
        self.meals
            .values()
            .flatten()
            .any(|meal| meal.recipe_id == recipe_id)
    }
}

/// Preferences driving automatic meal-plan generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealPlanPreferences {
    /// Servings assigned to generated meals
    pub default_servings: u32,
    /// Active meal slots per day; a missing day has no slots
    pub meal_types_per_day: BTreeMap<DayOfWeek, BTreeSet<MealType>>,
    /// Recipe ids never to plan
    pub excluded_recipes: BTreeSet<String>,
    /// If non-empty, planned recipes must belong to one of these categories
    pub preferred_categories: BTreeSet<String>,
    /// Restrictions every planned recipe must satisfy
    pub dietary_restrictions: BTreeSet<DietaryRestriction>,
}

impl MealPlanPreferences {
    /// Replace the active slots for `day`
    #[must_use]
    pub fn with_meal_types(mut self, day: DayOfWeek, meal_types: &[MealType]) -> Self {
        self.meal_types_per_day
            .insert(day, meal_types.iter().copied().collect());
        self
    }

    /// Add a dietary restriction
    #[must_use]
    pub fn with_restriction(mut self, restriction: DietaryRestriction) -> Self {
        self.dietary_restrictions.insert(restriction);
        self
    }

    /// Exclude a recipe id from generation
    #[must_use]
    pub fn excluding(mut self, recipe_id: impl Into<String>) -> Self {
        self.excluded_recipes.insert(recipe_id.into());
        self
    }

    /// Prefer a category
    #[must_use]
    pub fn preferring(mut self, category: impl Into<String>) -> Self {
        self.preferred_categories.insert(category.into());
        self
    }

    /// Number of (day, meal type) slots the generator will try to fill
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.meal_types_per_day.values().map(BTreeSet::len).sum()
    }
}

impl Default for MealPlanPreferences {
    fn default() -> Self {
        let daily: BTreeSet<MealType> = [MealType::Breakfast, MealType::Lunch, MealType::Dinner]
            .into_iter()
            .collect();
        Self {
            default_servings: 4,
            meal_types_per_day: DayOfWeek::ALL
                .into_iter()
                .map(|day| (day, daily.clone()))
                .collect(),
            excluded_recipes: BTreeSet::new(),
            preferred_categories: BTreeSet::new(),
            dietary_restrictions: BTreeSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-01-08 is a Wednesday
        assert_eq!(week_start_for(date(2025, 1, 8)), date(2025, 1, 6));
        assert_eq!(week_start_for(date(2025, 1, 6)), date(2025, 1, 6));
        // Sunday belongs to the week that started six days earlier
        assert_eq!(week_start_for(date(2025, 1, 12)), date(2025, 1, 6));
    }

    #[test]
    fn test_day_date_in_week() {
        assert_eq!(
            DayOfWeek::Friday.date_in_week(date(2025, 1, 6)),
            date(2025, 1, 10)
        );
        assert_eq!(
            DayOfWeek::from(date(2025, 1, 10).weekday()),
            DayOfWeek::Friday
        );
    }

    #[test]
    fn test_total_time_adds_prep_and_cook() {
        let recipe = Recipe::new("Pasta", 2)
            .with_prep_time(10)
            .with_cook_time(20);
        assert_eq!(recipe.total_time_mins(), 30);

        let huge = Recipe::new("Stock", 10)
            .with_prep_time(u32::MAX)
            .with_cook_time(5);
        assert_eq!(huge.total_time_mins(), u32::MAX);
    }

    #[test]
    fn test_restrictions_are_independent() {
        let recipe = Recipe::new("Salad", 2).with_restriction(DietaryRestriction::Vegan);
        assert!(recipe.satisfies(DietaryRestriction::Vegan));
        assert!(!recipe.satisfies(DietaryRestriction::Vegetarian));
    }

    #[test]
    fn test_missing_day_is_empty() {
        let plan = MealPlan::new(date(2025, 1, 6));
        assert!(plan.meals_for(DayOfWeek::Monday).is_empty());
        assert_eq!(plan.meal_count(), 0);
    }

    #[test]
    fn test_add_and_remove_meal() {
        let recipe = Recipe::new("Arroz", 4).with_id("2");
        let mut plan = MealPlan::new(date(2025, 1, 6));
        let meal = PlannedMeal::new(&recipe, MealType::Lunch, 4);
        let meal_id = meal.id;

        plan.add_meal(DayOfWeek::Tuesday, meal);
        assert_eq!(plan.meals_for(DayOfWeek::Tuesday).len(), 1);
        assert!(plan.contains_recipe("2"));

        assert!(!plan.remove_meal(DayOfWeek::Monday, meal_id));
        assert!(plan.remove_meal(DayOfWeek::Tuesday, meal_id));
        assert!(!plan.meals.contains_key(&DayOfWeek::Tuesday));
        assert!(!plan.remove_meal(DayOfWeek::Tuesday, meal_id));
    }

    #[test]
    fn test_default_preferences() {
        let prefs = MealPlanPreferences::default();
        assert_eq!(prefs.default_servings, 4);
        assert_eq!(prefs.slot_count(), 21);
        assert!(!prefs.meal_types_per_day[&DayOfWeek::Sunday].contains(&MealType::Snack));
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("cena".parse::<MealType>().unwrap(), MealType::Dinner);
        assert_eq!(
            "gluten-free".parse::<DietaryRestriction>().unwrap(),
            DietaryRestriction::GlutenFree
        );
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_plan_serializes_days_as_keys() {
        let recipe = Recipe::new("Pizza", 2);
        let mut plan = MealPlan::new(date(2025, 1, 6));
        plan.add_meal(DayOfWeek::Sunday, PlannedMeal::new(&recipe, MealType::Dinner, 2));

        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"sunday\""));
        let back: MealPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_ingredient_display() {
        assert_eq!(
            RecipeIngredient::new("pasta", 200.0, "g").to_string(),
            "200 g pasta"
        );
        assert_eq!(
            RecipeIngredient::new("sal", 0.5, "cucharadita")
                .with_notes("al gusto")
                .to_string(),
            "0.5 cucharadita sal (al gusto)"
        );
    }
}
