// ABOUTME: Criterion benchmarks for recipe search and meal-plan generation
// ABOUTME: Measures filtering, sorting and weekly generation over synthetic catalogs of growing size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recipe query engine and meal-plan generator.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate, Utc};
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use kitchen_assistant::recipes::{
    DietaryRestriction, Difficulty, InclusiveRange, MealPlanGenerator, MealPlanPreferences,
    Recipe, RecipeIngredient, RecipeQueryEngine, SearchFilters, SeededPicker, SortOption,
};

const CATALOG_SIZES: [usize; 3] = [100, 1_000, 5_000];

const INGREDIENTS: [&str; 8] = [
    "tomate", "cebolla", "ajo", "arroz", "patata", "huevo", "pimiento", "queso",
];

const CATEGORIES: [&str; 5] = ["pasta", "arroces", "sopas", "carnes", "postres"];

/// Deterministic synthetic catalog
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
fn generate_catalog(count: usize) -> Vec<Recipe> {
    let base_date = Utc::now();
    (0..count)
        .map(|index| {
            let difficulty = match index % 3 {
                0 => Difficulty::Easy,
                1 => Difficulty::Medium,
                _ => Difficulty::Hard,
            };
            let mut recipe = Recipe::new(format!("Receta {index}"), 1 + (index % 8) as u32)
                .with_id(format!("bench_recipe_{index:05}"))
                .with_description(format!("Plato de prueba con {}", INGREDIENTS[index % 8]))
                .with_prep_time(5 + ((index * 7) % 30) as u32)
                .with_cook_time(((index * 13) % 90) as u32)
                .with_difficulty(difficulty)
                .with_category(CATEGORIES[index % 5])
                .with_ingredient(RecipeIngredient::new(INGREDIENTS[index % 8], 100.0, "g"))
                .with_ingredient(RecipeIngredient::new(
                    INGREDIENTS[(index / 8) % 8],
                    1.0,
                    "unidad",
                ))
                .with_created_at(base_date - Duration::minutes(index as i64));
            if index % 2 == 0 {
                recipe = recipe.with_restriction(DietaryRestriction::Vegetarian);
            }
            if index % 4 != 3 {
                recipe = recipe.with_rating(((index * 3) % 50) as f32 / 10.0);
            }
            recipe
        })
        .collect()
}

fn bench_recipe_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("recipe_search");

    let filters = SearchFilters::default()
        .with_cooking_time(InclusiveRange::new(20, 60))
        .requiring("tomate")
        .excluding("queso")
        .vegetarian(true)
        .sorted_by(SortOption::Rating);

    for count in CATALOG_SIZES {
        let catalog = generate_catalog(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("text_only", count), &catalog, |b, catalog| {
            b.iter(|| {
                RecipeQueryEngine::search(
                    black_box(catalog),
                    black_box("tomate"),
                    black_box(&SearchFilters::default()),
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("filtered", count), &catalog, |b, catalog| {
            b.iter(|| {
                RecipeQueryEngine::search(black_box(catalog), black_box(""), black_box(&filters))
            });
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("recipe_sort");
    let catalog = generate_catalog(1_000);

    for sort_by in [SortOption::Name, SortOption::CookingTime, SortOption::Rating] {
        group.bench_function(sort_by.as_str(), |b| {
            b.iter_batched(
                || catalog.clone(),
                |mut recipes| RecipeQueryEngine::sort(black_box(&mut recipes), sort_by),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_plan_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("meal_plan_generation");
    let week = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap_or_default();
    let prefs = MealPlanPreferences::default()
        .with_restriction(DietaryRestriction::Vegetarian)
        .preferring("pasta")
        .preferring("sopas");

    for count in CATALOG_SIZES {
        let catalog = generate_catalog(count);
        group.bench_with_input(BenchmarkId::new("week", count), &catalog, |b, catalog| {
            b.iter(|| {
                MealPlanGenerator::new(SeededPicker::new(42)).generate(
                    black_box(catalog),
                    black_box(&prefs),
                    None,
                    week,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recipe_search, bench_sort, bench_plan_generation);
criterion_main!(benches);
