//! Leftover planning.
//!
//! Estimates how many servings of a cooked recipe survive the first
//! sitting, how long they keep, and expands a meal plan so every
//! eligible cooked meal is followed by a planned leftover meal the
//! next day.

use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use larder_core::defaults::{
    DEFAULT_LEFTOVER_SHELF_DAYS, LEFTOVER_DATE_OFFSET_DAYS, LEFTOVER_MEAL_ID_SUFFIX,
    LEFTOVER_PORTION_DIVISOR,
};
use larder_core::{MealPlan, PlannedMeal, Recipe};

/// First run of digits in a storage note, e.g. the 3 in
/// "Keeps refrigerated for up to 3 days".
static DAY_COUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Expected leftovers from cooking a recipe at a given serving count.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LeftoverSuggestion {
    /// Servings left after the first sitting.
    pub remaining_servings: u32,
    /// Recipe-authored ideas for repurposing the leftovers.
    pub suggested_uses: Vec<String>,
    /// How many days the leftovers keep.
    pub days_good_for: i64,
}

/// Estimate the leftovers produced by cooking `recipe` for
/// `original_servings` people.
///
/// Half the servings (rounded down) are assumed to remain. Shelf life
/// comes from the first number in the recipe's storage notes, falling
/// back to [`DEFAULT_LEFTOVER_SHELF_DAYS`] when the notes are absent or
/// give no number.
pub fn suggest_leftovers(recipe: &Recipe, original_servings: u32) -> LeftoverSuggestion {
    let remaining_servings = original_servings / LEFTOVER_PORTION_DIVISOR;

    let days_good_for = recipe
        .leftovers_storage_info
        .as_deref()
        .and_then(|info| DAY_COUNT.find(info))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(DEFAULT_LEFTOVER_SHELF_DAYS);

    LeftoverSuggestion {
        remaining_servings,
        suggested_uses: recipe.stretched_meal_suggestions.clone().unwrap_or_default(),
        days_good_for,
    }
}

/// Suggest ways to stretch a recipe into more servings, keyed off its
/// tags. Unrecognized recipes get a generic pair of suggestions.
pub fn suggest_stretched_meals(recipe: &Recipe) -> Vec<String> {
    let tags: Vec<String> = recipe.tags.iter().map(|t| t.to_lowercase()).collect();
    let mut suggestions = Vec::new();

    if tags.iter().any(|t| t == "pasta") {
        suggestions.push("Add more vegetables and stretch the sauce".to_string());
        suggestions.push("Turn into a baked pasta dish with added cheese".to_string());
    }
    if tags.iter().any(|t| t == "meat") {
        suggestions.push("Add beans or lentils to stretch the protein".to_string());
        suggestions.push("Turn into sandwiches or wraps".to_string());
    }
    if tags.iter().any(|t| t == "soup" || t == "stew") {
        suggestions.push("Add more broth and vegetables".to_string());
        suggestions.push("Serve over rice or noodles".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push("Serve with a side salad to make it a bigger meal".to_string());
        suggestions.push("Add rice or pasta as a side dish".to_string());
    }

    suggestions
}

/// Expand a meal plan with a leftover meal the day after each cooked
/// meal that yields at least one remaining serving.
///
/// Meals already marked as leftovers and meals without an embedded
/// recipe are left alone, so leftovers never chain off other leftovers.
/// The returned plan's meals are sorted by date; meals sharing a date
/// keep their relative order.
pub fn plan_leftovers(plan: &MealPlan) -> MealPlan {
    let mut meals = plan.meals.clone();

    for meal in &plan.meals {
        if meal.is_leftover {
            continue;
        }
        if let Some(recipe) = &meal.recipe {
            let suggestion = suggest_leftovers(recipe, meal.servings);
            if suggestion.remaining_servings == 0 {
                continue;
            }

            meals.push(PlannedMeal {
                id: format!("{}{}", meal.id, LEFTOVER_MEAL_ID_SUFFIX),
                date: meal.date + Duration::days(LEFTOVER_DATE_OFFSET_DAYS),
                meal_type: meal.meal_type,
                recipe: meal.recipe.clone(),
                servings: suggestion.remaining_servings,
                is_leftover: true,
                original_meal_id: Some(meal.id.clone()),
                notes: Some(leftover_notes(recipe)),
            });
        }
    }

    let synthesized = meals.len() - plan.meals.len();
    meals.sort_by_key(|m| m.date);

    debug!(
        source_meals = plan.meals.len(),
        synthesized_leftovers = synthesized,
        "leftover planning complete"
    );

    MealPlan {
        id: plan.id.clone(),
        title: plan.title.clone(),
        start_date: plan.start_date,
        end_date: plan.end_date,
        meals,
    }
}

fn leftover_notes(recipe: &Recipe) -> String {
    match &recipe.reheating_instructions {
        Some(reheat) => format!("Leftover meal from {}. {}", recipe.title, reheat),
        None => format!("Leftover meal from {}.", recipe.title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use larder_core::MealType;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, 18, 0, 0).unwrap()
    }

    fn chili() -> Recipe {
        Recipe::new("r1", "Chili Con Carne", 4)
            .with_leftovers_storage_info("Store covered in the fridge for up to 3 days")
            .with_reheating_instructions("Reheat thoroughly until steaming")
            .with_stretched_meal_suggestions(vec!["Turn into pasta bake".to_string()])
    }

    fn cooked_meal(id: &str, d: u32, servings: u32) -> PlannedMeal {
        PlannedMeal {
            id: id.to_string(),
            date: day(d),
            meal_type: MealType::Dinner,
            recipe: Some(chili()),
            servings,
            is_leftover: false,
            original_meal_id: None,
            notes: None,
        }
    }

    fn plan_with(meals: Vec<PlannedMeal>) -> MealPlan {
        MealPlan {
            id: "plan-1".to_string(),
            title: "Week of March 9".to_string(),
            start_date: day(9),
            end_date: day(15),
            meals,
        }
    }

    #[test]
    fn test_remaining_servings_halve_rounding_down() {
        let recipe = chili();
        assert_eq!(suggest_leftovers(&recipe, 4).remaining_servings, 2);
        assert_eq!(suggest_leftovers(&recipe, 5).remaining_servings, 2);
        assert_eq!(suggest_leftovers(&recipe, 1).remaining_servings, 0);
        assert_eq!(suggest_leftovers(&recipe, 0).remaining_servings, 0);
    }

    #[test]
    fn test_days_good_for_parses_first_number() {
        let recipe = chili();
        assert_eq!(suggest_leftovers(&recipe, 4).days_good_for, 3);

        let recipe = Recipe::new("r2", "Soup", 4)
            .with_leftovers_storage_info("Good for 2 to 4 days refrigerated");
        assert_eq!(suggest_leftovers(&recipe, 4).days_good_for, 2);
    }

    #[test]
    fn test_days_good_for_defaults_without_a_number() {
        let no_info = Recipe::new("r2", "Soup", 4);
        assert_eq!(
            suggest_leftovers(&no_info, 4).days_good_for,
            DEFAULT_LEFTOVER_SHELF_DAYS
        );

        let no_number = Recipe::new("r3", "Stew", 4)
            .with_leftovers_storage_info("Keeps well refrigerated");
        assert_eq!(
            suggest_leftovers(&no_number, 4).days_good_for,
            DEFAULT_LEFTOVER_SHELF_DAYS
        );
    }

    #[test]
    fn test_suggested_uses_come_from_the_recipe() {
        let suggestion = suggest_leftovers(&chili(), 4);
        assert_eq!(suggestion.suggested_uses, vec!["Turn into pasta bake"]);

        let plain = Recipe::new("r2", "Soup", 4);
        assert!(suggest_leftovers(&plain, 4).suggested_uses.is_empty());
    }

    #[test]
    fn test_stretched_meals_by_tag() {
        let pasta = Recipe::new("r1", "Carbonara", 2).with_tags(vec!["Pasta".to_string()]);
        assert_eq!(
            suggest_stretched_meals(&pasta),
            vec![
                "Add more vegetables and stretch the sauce",
                "Turn into a baked pasta dish with added cheese"
            ]
        );

        let stew = Recipe::new("r2", "Beef Stew", 4)
            .with_tags(vec!["meat".to_string(), "stew".to_string()]);
        assert_eq!(
            suggest_stretched_meals(&stew),
            vec![
                "Add beans or lentils to stretch the protein",
                "Turn into sandwiches or wraps",
                "Add more broth and vegetables",
                "Serve over rice or noodles"
            ]
        );
    }

    #[test]
    fn test_stretched_meals_generic_fallback() {
        let salad = Recipe::new("r1", "Caesar Salad", 2).with_tags(vec!["salad".to_string()]);
        assert_eq!(
            suggest_stretched_meals(&salad),
            vec![
                "Serve with a side salad to make it a bigger meal",
                "Add rice or pasta as a side dish"
            ]
        );
    }

    #[test]
    fn test_plan_leftovers_synthesizes_next_day_meal() {
        let plan = plan_with(vec![cooked_meal("m1", 10, 4)]);
        let expanded = plan_leftovers(&plan);

        assert_eq!(expanded.meals.len(), 2);

        let leftover = expanded
            .meals
            .iter()
            .find(|m| m.is_leftover)
            .expect("leftover meal synthesized");
        assert_eq!(leftover.id, "m1-leftover");
        assert_eq!(leftover.date, day(11));
        assert_eq!(leftover.meal_type, MealType::Dinner);
        assert_eq!(leftover.servings, 2);
        assert_eq!(leftover.original_meal_id.as_deref(), Some("m1"));
        assert_eq!(
            leftover.notes.as_deref(),
            Some("Leftover meal from Chili Con Carne. Reheat thoroughly until steaming")
        );
        assert!(leftover.recipe.is_some());
    }

    #[test]
    fn test_notes_without_reheating_instructions() {
        let mut meal = cooked_meal("m1", 10, 4);
        meal.recipe = Some(Recipe::new("r9", "Fruit Salad", 4));
        let expanded = plan_leftovers(&plan_with(vec![meal]));

        let leftover = expanded.meals.iter().find(|m| m.is_leftover).unwrap();
        assert_eq!(leftover.notes.as_deref(), Some("Leftover meal from Fruit Salad."));
    }

    #[test]
    fn test_originals_are_preserved_unchanged() {
        let plan = plan_with(vec![cooked_meal("m1", 10, 4)]);
        let expanded = plan_leftovers(&plan);

        let original = expanded.meals.iter().find(|m| m.id == "m1").unwrap();
        assert_eq!(original.servings, 4);
        assert!(!original.is_leftover);
        assert!(original.notes.is_none());
        assert_eq!(expanded.id, "plan-1");
        assert_eq!(expanded.start_date, day(9));
        assert_eq!(expanded.end_date, day(15));
    }

    #[test]
    fn test_leftover_meals_do_not_chain() {
        let plan = plan_with(vec![cooked_meal("m1", 10, 4)]);
        let once = plan_leftovers(&plan);
        let twice = plan_leftovers(&once);

        // Synthesized leftovers are never treated as cookable meals
        assert!(twice.meals.iter().all(|m| !m.id.ends_with("-leftover-leftover")));
        assert!(twice
            .meals
            .iter()
            .all(|m| m.original_meal_id.as_deref() != Some("m1-leftover")));
    }

    #[test]
    fn test_small_meals_and_recipeless_meals_skipped() {
        let single = cooked_meal("m1", 10, 1);
        let mut no_recipe = cooked_meal("m2", 11, 4);
        no_recipe.recipe = None;

        let expanded = plan_leftovers(&plan_with(vec![single, no_recipe]));
        assert_eq!(expanded.meals.len(), 2);
        assert!(expanded.meals.iter().all(|m| !m.is_leftover));
    }

    #[test]
    fn test_meals_sorted_by_date_after_expansion() {
        let plan = plan_with(vec![cooked_meal("m2", 12, 4), cooked_meal("m1", 10, 4)]);
        let expanded = plan_leftovers(&plan);

        let ids: Vec<&str> = expanded.meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m1-leftover", "m2", "m2-leftover"]);
    }

    #[test]
    fn test_same_date_meals_keep_relative_order() {
        let mut breakfast = cooked_meal("m-a", 10, 1);
        breakfast.meal_type = MealType::Breakfast;
        breakfast.recipe = None;
        let mut dinner = cooked_meal("m-b", 10, 1);
        dinner.recipe = None;

        let expanded = plan_leftovers(&plan_with(vec![breakfast, dinner]));
        let ids: Vec<&str> = expanded.meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m-a", "m-b"]);
    }
}
