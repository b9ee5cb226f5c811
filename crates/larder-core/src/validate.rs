//! Boundary validation for data-model invariants.
//!
//! The planner functions assume well-formed inputs and never fail; the
//! application layer runs these checks once, at the point data enters
//! the system (after deserialization, before planning). Violations are
//! caller contract bugs, not recoverable runtime conditions.

use crate::error::{Error, Result};
use crate::models::{MealPlan, Recipe};

/// Validate a recipe against the data-model invariants.
///
/// Checks: servings >= 1, every ingredient named, every ingredient
/// quantity strictly positive.
pub fn validate_recipe(recipe: &Recipe) -> Result<()> {
    if recipe.servings == 0 {
        return Err(Error::InvalidRecipe(format!(
            "recipe {} has zero servings",
            recipe.id
        )));
    }

    for ingredient in &recipe.ingredients {
        if ingredient.name.trim().is_empty() {
            return Err(Error::InvalidRecipe(format!(
                "recipe {} has an unnamed ingredient",
                recipe.id
            )));
        }
        if ingredient.quantity <= 0.0 {
            return Err(Error::InvalidRecipe(format!(
                "ingredient {} of recipe {} has non-positive quantity {}",
                ingredient.name, recipe.id, ingredient.quantity
            )));
        }
    }

    Ok(())
}

/// Validate a meal plan against the data-model invariants.
///
/// Checks: the date window is ordered, every meal date falls within it,
/// and every leftover meal references an existing original with at
/// least as many servings. Embedded recipes are validated too.
pub fn validate_meal_plan(plan: &MealPlan) -> Result<()> {
    if plan.start_date > plan.end_date {
        return Err(Error::InvalidPlan(format!(
            "plan {} starts after it ends",
            plan.id
        )));
    }

    for meal in &plan.meals {
        if meal.date < plan.start_date || meal.date > plan.end_date {
            return Err(Error::InvalidPlan(format!(
                "meal {} dated {} outside plan window {}..{}",
                meal.id, meal.date, plan.start_date, plan.end_date
            )));
        }

        if let Some(recipe) = &meal.recipe {
            validate_recipe(recipe)?;
        }

        if meal.is_leftover {
            let original_id = meal.original_meal_id.as_deref().ok_or_else(|| {
                Error::InvalidPlan(format!(
                    "leftover meal {} has no original meal reference",
                    meal.id
                ))
            })?;

            let original = plan
                .meals
                .iter()
                .find(|m| m.id == original_id)
                .ok_or_else(|| {
                    Error::InvalidPlan(format!(
                        "leftover meal {} references missing meal {}",
                        meal.id, original_id
                    ))
                })?;

            if meal.servings > original.servings {
                return Err(Error::InvalidPlan(format!(
                    "leftover meal {} has {} servings, more than original {}'s {}",
                    meal.id, meal.servings, original.id, original.servings
                )));
            }
        }
    }

    Ok(())
}
