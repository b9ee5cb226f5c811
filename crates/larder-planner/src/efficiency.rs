//! Meal plan efficiency scoring.
//!
//! Expands a plan with leftovers, then grades the result on three
//! 0-100 metrics: how many ingredients are shared across recipes, how
//! much of the plan runs on leftovers, and how well it covers pantry
//! items that are about to expire. Actionable recommendations accompany
//! the scores.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use larder_core::defaults::{
    DIVISIBLE_USE_TARGET, EXPIRING_COVERAGE_TARGET, LEFTOVER_UTILIZATION_TARGET,
    SHARED_INGREDIENT_TARGET, WHOLE_UNIT,
};
use larder_core::{FreshnessStatus, Ingredient, MealPlan, StoredFood};

use crate::freshness::calculate_freshness_at;
use crate::leftovers::plan_leftovers;

/// The three plan-level efficiency metrics, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EfficiencyScores {
    /// Share of ingredient occurrences whose name appears in more than
    /// one occurrence across the plan.
    pub ingredient_usage: u8,
    /// Share of meals that are leftover meals, after expansion.
    pub leftover_utilization: u8,
    /// Share of soon-to-expire pantry items the plan actually uses.
    /// 100 when nothing is about to expire.
    pub expiration_optimization: u8,
}

/// Outcome of scoring a plan: the leftover-expanded plan itself, its
/// scores, and any recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OptimizationReport {
    pub meal_plan: MealPlan,
    pub efficiency: EfficiencyScores,
    /// Expiration warnings first, then threshold advice in metric order.
    pub recommendations: Vec<String>,
}

/// Score a meal plan against the pantry using the real clock.
pub fn optimize_plan(plan: &MealPlan, pantry: &[StoredFood]) -> OptimizationReport {
    optimize_plan_at(plan, pantry, Utc::now())
}

/// Score a meal plan against the pantry at an explicit reference
/// instant.
///
/// The plan is first expanded with [`plan_leftovers`]; all metrics are
/// computed over the expanded plan. Ingredient sharing compares names
/// exactly, while pantry lookups are case-insensitive.
pub fn optimize_plan_at(
    plan: &MealPlan,
    pantry: &[StoredFood],
    now: DateTime<Utc>,
) -> OptimizationReport {
    let optimized = plan_leftovers(plan);
    let mut recommendations = Vec::new();

    let mut usage: HashMap<String, u32> = HashMap::new();
    let mut total_ingredients = 0u32;

    for meal in &optimized.meals {
        if let Some(recipe) = &meal.recipe {
            for ingredient in &recipe.ingredients {
                total_ingredients += 1;
                *usage.entry(ingredient.name.clone()).or_insert(0) += 1;

                let pantry_item = pantry
                    .iter()
                    .find(|item| item.name.to_lowercase() == ingredient.name.to_lowercase());
                if let Some(item) = pantry_item {
                    let freshness = calculate_freshness_at(item, now);
                    if freshness.status == FreshnessStatus::UseSoon {
                        recommendations.push(format!(
                            "Use {} soon (expires in {} days)",
                            item.name, freshness.days_until_expiration
                        ));
                    }
                }
            }
        }
    }

    let shared_names = usage.values().filter(|&&count| count > 1).count();
    let ingredient_usage = if total_ingredients == 0 {
        0.0
    } else {
        shared_names as f64 / total_ingredients as f64
    };

    let leftover_meals = optimized.meals.iter().filter(|m| m.is_leftover).count();
    let leftover_utilization = if optimized.meals.is_empty() {
        0.0
    } else {
        leftover_meals as f64 / optimized.meals.len() as f64
    };

    let expiring: Vec<&StoredFood> = pantry
        .iter()
        .filter(|item| calculate_freshness_at(item, now).status == FreshnessStatus::UseSoon)
        .collect();
    let expiration_optimization = if expiring.is_empty() {
        1.0
    } else {
        let covered = expiring
            .iter()
            .filter(|item| plan_uses_ingredient(&optimized, &item.name))
            .count();
        covered as f64 / expiring.len() as f64
    };

    if ingredient_usage < SHARED_INGREDIENT_TARGET {
        recommendations.push(
            "Consider recipes that share more common ingredients to improve efficiency"
                .to_string(),
        );
    }
    if leftover_utilization < LEFTOVER_UTILIZATION_TARGET {
        recommendations.push("Try planning more meals using leftovers to reduce waste".to_string());
    }
    if expiration_optimization < EXPIRING_COVERAGE_TARGET {
        recommendations.push(
            "Some ingredients will expire soon. Consider adjusting meal plan to use them"
                .to_string(),
        );
    }

    debug!(
        meal_count = optimized.meals.len(),
        total_ingredients,
        expiring_items = expiring.len(),
        recommendation_count = recommendations.len(),
        "meal plan efficiency scored"
    );

    OptimizationReport {
        meal_plan: optimized,
        efficiency: EfficiencyScores {
            ingredient_usage: to_score(ingredient_usage),
            leftover_utilization: to_score(leftover_utilization),
            expiration_optimization: to_score(expiration_optimization),
        },
        recommendations,
    }
}

/// How efficiently a recipe's ingredient quantities would be consumed
/// by `planned_uses` plannings, on a 0-100 scale.
///
/// Items bought whole must be used in whole units, so their full
/// quantity counts toward the target; divisible items only need
/// [`DIVISIBLE_USE_TARGET`] of their quantity consumed to score fully.
pub fn ingredient_efficiency(ingredients: &[Ingredient], planned_uses: f64) -> u8 {
    if ingredients.is_empty() {
        return 0;
    }

    let total: f64 = ingredients
        .iter()
        .map(|ingredient| {
            let target = if ingredient.unit == WHOLE_UNIT {
                1.0
            } else {
                DIVISIBLE_USE_TARGET
            };
            (planned_uses / (ingredient.quantity * target)).min(1.0)
        })
        .sum();

    to_score(total / ingredients.len() as f64)
}

fn plan_uses_ingredient(plan: &MealPlan, name: &str) -> bool {
    let needle = name.to_lowercase();
    plan.meals.iter().any(|meal| {
        meal.recipe.as_ref().map_or(false, |recipe| {
            recipe
                .ingredients
                .iter()
                .any(|ingredient| ingredient.name.to_lowercase() == needle)
        })
    })
}

/// Convert a ratio in 0.0..=1.0 to the rounded 0-100 scale.
fn to_score(ratio: f64) -> u8 {
    (ratio * 100.0).round() as u8
}
