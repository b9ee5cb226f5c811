//! # larder-planner
//!
//! Meal-plan optimization engine for larder.
//!
//! This crate provides:
//! - Pantry freshness evaluation with quick-use suggestions
//! - Leftover estimation and next-day leftover meal synthesis
//! - Plan-level efficiency scoring with actionable recommendations
//! - Shopping list aggregation across a plan's recipes
//!
//! Every function is a pure transformation over plan and pantry data;
//! persistence and scheduling live elsewhere.
//!
//! ## Example
//!
//! ```
//! use larder_core::Recipe;
//! use larder_planner::suggest_leftovers;
//!
//! let recipe = Recipe::new("r1", "Weeknight Chili", 4)
//!     .with_leftovers_storage_info("Keeps refrigerated for up to 3 days")
//!     .with_stretched_meal_suggestions(vec!["Serve over rice".to_string()]);
//!
//! let suggestion = suggest_leftovers(&recipe, recipe.servings);
//! assert_eq!(suggestion.remaining_servings, 2);
//! assert_eq!(suggestion.days_good_for, 3);
//! assert_eq!(suggestion.suggested_uses, vec!["Serve over rice"]);
//! ```

pub mod efficiency;
pub mod freshness;
pub mod leftovers;
pub mod shopping;

// Re-export core types
pub use larder_core::*;

// Re-export planner entry points
pub use efficiency::{
    ingredient_efficiency, optimize_plan, optimize_plan_at, EfficiencyScores, OptimizationReport,
};
pub use freshness::{
    calculate_freshness, calculate_freshness_at, quick_use_suggestions, FoodFreshness,
};
pub use leftovers::{
    plan_leftovers, suggest_leftovers, suggest_stretched_meals, LeftoverSuggestion,
};
pub use shopping::{build_shopping_list, build_shopping_list_with};
