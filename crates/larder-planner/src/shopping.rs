//! Shopping list aggregation.
//!
//! Collapses every recipe referenced by a meal plan into one shopping
//! list, merging ingredients by lowercased name. Each distinct recipe
//! contributes its quantities exactly once no matter how many meals
//! reference it.

use std::collections::HashMap;

use tracing::debug;

use larder_core::defaults::UNCATEGORIZED;
use larder_core::{
    DateRange, MealPlan, RawUnitSum, Recipe, ShoppingList, ShoppingListItem, UnitReconciler,
};

/// Running totals for one merged ingredient.
struct IngredientTotal {
    quantity: f64,
    unit: String,
    category: String,
    recipe_titles: Vec<String>,
    recipe_ids: Vec<String>,
}

/// Aggregate a meal plan's recipes into a shopping list, summing
/// quantities as-is and letting the most recent occurrence decide the
/// unit.
pub fn build_shopping_list(plan: &MealPlan, catalog: &[Recipe]) -> ShoppingList {
    build_shopping_list_with(plan, catalog, &RawUnitSum)
}

/// Aggregate a meal plan's recipes into a shopping list with an
/// explicit unit reconciliation strategy.
///
/// Recipe ids are taken from the plan's meals in first-appearance
/// order, deduplicated, and resolved against `catalog`; ids the catalog
/// does not know are skipped. Items appear in the order their
/// ingredient names were first seen.
pub fn build_shopping_list_with(
    plan: &MealPlan,
    catalog: &[Recipe],
    reconciler: &dyn UnitReconciler,
) -> ShoppingList {
    let mut recipe_ids: Vec<&str> = Vec::new();
    for meal in &plan.meals {
        if let Some(recipe) = &meal.recipe {
            if !recipe_ids.contains(&recipe.id.as_str()) {
                recipe_ids.push(recipe.id.as_str());
            }
        }
    }

    let mut totals: HashMap<String, IngredientTotal> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    let mut resolved = 0usize;

    for id in &recipe_ids {
        if let Some(recipe) = catalog.iter().find(|r| r.id == *id) {
            resolved += 1;
            for ingredient in &recipe.ingredients {
                let key = ingredient.name.to_lowercase();
                let entry = totals.entry(key.clone()).or_insert_with(|| {
                    order.push(key.clone());
                    IngredientTotal {
                        quantity: 0.0,
                        unit: ingredient.unit.clone(),
                        category: UNCATEGORIZED.to_string(),
                        recipe_titles: Vec::new(),
                        recipe_ids: Vec::new(),
                    }
                });

                let (quantity, unit) = reconciler.reconcile(
                    entry.quantity,
                    &entry.unit,
                    ingredient.quantity,
                    &ingredient.unit,
                );
                entry.quantity = quantity;
                entry.unit = unit;

                // Last known category wins over the fallback
                if let Some(category) = &ingredient.category {
                    entry.category = category.clone();
                }
                if !entry.recipe_titles.contains(&recipe.title) {
                    entry.recipe_titles.push(recipe.title.clone());
                    entry.recipe_ids.push(recipe.id.clone());
                }
            }
        }
    }

    let mut items = Vec::with_capacity(order.len());
    for name in order {
        if let Some(total) = totals.remove(&name) {
            items.push(ShoppingListItem {
                name,
                quantity: total.quantity,
                unit: total.unit,
                category: total.category,
                checked: false,
                recipe: total.recipe_titles.join(", "),
                recipe_id: total.recipe_ids.first().cloned().unwrap_or_default(),
            });
        }
    }

    debug!(
        referenced_recipes = recipe_ids.len(),
        resolved_recipes = resolved,
        item_count = items.len(),
        "shopping list aggregated"
    );

    ShoppingList {
        title: format!("Shopping List for {}", plan.title),
        meal_plan_id: plan.id.clone(),
        date_range: DateRange {
            start: plan.start_date,
            end: plan.end_date,
        },
        items,
    }
}
