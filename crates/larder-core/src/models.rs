//! Core data models for larder.
//!
//! These types are shared across all larder crates and represent the
//! domain entities the planner operates on. They are constructed by the
//! application layer, passed into the planner by reference, and never
//! mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// RECIPE TYPES
// =============================================================================

/// A single ingredient line of a recipe.
///
/// Aggregation identity is the lower-cased `name`; `quantity` is summed
/// without unit conversion (see `UnitReconciler` in `traits`).
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A recipe as loaded from the catalog. Read-only for the planner.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Portions the recipe yields as written. Always >= 1.
    pub servings: u32,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Free text containing an integer day count, e.g.
    /// "Store covered in the fridge for up to 3 days".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leftovers_storage_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reheating_instructions: Option<String>,
    /// Ways to stretch reserved portions into further meals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stretched_meal_suggestions: Option<Vec<String>>,
}

impl Recipe {
    /// Create a minimal recipe. Optional fields are filled via the
    /// `with_*` builders below.
    pub fn new(id: impl Into<String>, title: impl Into<String>, servings: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            servings,
            prep_time_minutes: 0,
            cook_time_minutes: 0,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            tags: Vec::new(),
            leftovers_storage_info: None,
            reheating_instructions: None,
            stretched_meal_suggestions: None,
        }
    }

    /// Set the ingredient list.
    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// Set the tag list.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the leftover storage description.
    pub fn with_leftovers_storage_info(mut self, info: impl Into<String>) -> Self {
        self.leftovers_storage_info = Some(info.into());
        self
    }

    /// Set the reheating instructions.
    pub fn with_reheating_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.reheating_instructions = Some(instructions.into());
        self
    }

    /// Set the stretched-meal suggestions.
    pub fn with_stretched_meal_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.stretched_meal_suggestions = Some(suggestions);
        self
    }
}

// =============================================================================
// PANTRY TYPES
// =============================================================================

/// A pantry item being tracked for freshness.
///
/// `expiration_date` is the sole driver of freshness classification;
/// `purchase_date` is carried for display by the application layer.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StoredFood {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub expiration_date: DateTime<Utc>,
    pub purchase_date: DateTime<Utc>,
    pub is_leftover: bool,
}

/// Shelf-life classification derived from days until expiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FreshnessStatus {
    /// More than two days of shelf life remain.
    Fresh,
    /// One or two days remain; quick-use suggestions apply.
    UseSoon,
    /// Expiration date has passed (or is today).
    Expired,
}

impl std::fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fresh => write!(f, "fresh"),
            Self::UseSoon => write!(f, "use-soon"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

impl std::str::FromStr for FreshnessStatus {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fresh" => Ok(Self::Fresh),
            "use-soon" => Ok(Self::UseSoon),
            "expired" => Ok(Self::Expired),
            _ => Err(format!("Invalid freshness status: {}", s)),
        }
    }
}

// =============================================================================
// MEAL PLAN TYPES
// =============================================================================

/// Slot a planned meal occupies within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breakfast => write!(f, "breakfast"),
            Self::Lunch => write!(f, "lunch"),
            Self::Dinner => write!(f, "dinner"),
            Self::Snack => write!(f, "snack"),
        }
    }
}

impl std::str::FromStr for MealType {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => Err(format!("Invalid meal type: {}", s)),
        }
    }
}

/// One scheduled meal within a plan.
///
/// Invariant: when `is_leftover` is true, `original_meal_id` references
/// the meal this one derives from and `servings` does not exceed the
/// original's. Enforced by `validate::validate_meal_plan`, not here.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlannedMeal {
    pub id: String,
    pub date: DateTime<Utc>,
    pub meal_type: MealType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
    pub servings: u32,
    pub is_leftover: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_meal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A dated collection of planned meals.
///
/// Invariant: every meal's `date` lies within `[start_date, end_date]`.
/// Leftover synthesis can place meals one day past `end_date`; callers
/// filter those if they care (see the planner crate docs).
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MealPlan {
    pub id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub meals: Vec<PlannedMeal>,
}

// =============================================================================
// SHOPPING LIST TYPES
// =============================================================================

/// Inclusive date window copied from the source meal plan.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// One aggregated ingredient on a shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShoppingListItem {
    /// Lower-cased ingredient name (aggregation key).
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: String,
    pub checked: bool,
    /// Comma-joined titles of the recipes needing this ingredient.
    pub recipe: String,
    /// Id of the first recipe that contributed this ingredient.
    pub recipe_id: String,
}

/// Generated shopping list for a meal plan. Never user-edited by this
/// core; the application layer owns check-off state after generation.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShoppingList {
    pub title: String,
    pub meal_plan_id: String,
    pub date_range: DateRange,
    pub items: Vec<ShoppingListItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_freshness_status_display() {
        assert_eq!(FreshnessStatus::Fresh.to_string(), "fresh");
        assert_eq!(FreshnessStatus::UseSoon.to_string(), "use-soon");
        assert_eq!(FreshnessStatus::Expired.to_string(), "expired");
    }

    #[test]
    fn test_freshness_status_from_str() {
        assert_eq!(
            FreshnessStatus::from_str("use-soon"),
            Ok(FreshnessStatus::UseSoon)
        );
        assert_eq!(
            FreshnessStatus::from_str("FRESH"),
            Ok(FreshnessStatus::Fresh)
        );
        assert!(FreshnessStatus::from_str("stale").is_err());
    }

    #[test]
    fn test_freshness_status_serde_wire_values() {
        let json = serde_json::to_string(&FreshnessStatus::UseSoon).unwrap();
        assert_eq!(json, "\"use-soon\"");

        let parsed: FreshnessStatus = serde_json::from_str("\"expired\"").unwrap();
        assert_eq!(parsed, FreshnessStatus::Expired);
    }

    #[test]
    fn test_meal_type_display_round_trip() {
        for meal_type in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            let parsed = MealType::from_str(&meal_type.to_string()).unwrap();
            assert_eq!(parsed, meal_type);
        }
    }

    #[test]
    fn test_meal_type_serde_wire_values() {
        let json = serde_json::to_string(&MealType::Dinner).unwrap();
        assert_eq!(json, "\"dinner\"");
    }

    #[test]
    fn test_recipe_builder() {
        let recipe = Recipe::new("r1", "Bolognese", 4)
            .with_tags(vec!["pasta".to_string()])
            .with_leftovers_storage_info("Keeps for 3 days refrigerated")
            .with_reheating_instructions("Reheat on the stove over low heat")
            .with_stretched_meal_suggestions(vec!["Turn into pasta bake".to_string()]);

        assert_eq!(recipe.id, "r1");
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.tags, vec!["pasta"]);
        assert!(recipe.leftovers_storage_info.is_some());
        assert!(recipe.reheating_instructions.is_some());
        assert_eq!(
            recipe.stretched_meal_suggestions,
            Some(vec!["Turn into pasta bake".to_string()])
        );
    }

    #[test]
    fn test_recipe_optional_fields_skipped_in_json() {
        let recipe = Recipe::new("r1", "Plain Rice", 2);
        let json = serde_json::to_string(&recipe).unwrap();

        assert!(!json.contains("leftovers_storage_info"));
        assert!(!json.contains("reheating_instructions"));
        assert!(!json.contains("stretched_meal_suggestions"));
        assert!(!json.contains("\"tags\""));
    }

    #[test]
    fn test_recipe_serialization_round_trip() {
        let recipe = Recipe::new("r1", "Soup", 6).with_ingredients(vec![Ingredient {
            name: "Carrots".to_string(),
            quantity: 3.0,
            unit: "whole".to_string(),
            category: Some("produce".to_string()),
            notes: None,
        }]);

        let json = serde_json::to_string(&recipe).unwrap();
        let parsed: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.title, "Soup");
        assert_eq!(parsed.ingredients.len(), 1);
        assert_eq!(parsed.ingredients[0].category, Some("produce".to_string()));
    }
}
