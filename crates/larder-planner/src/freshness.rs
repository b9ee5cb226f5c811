//! Pantry freshness evaluation.
//!
//! Classifies a stored food item by days until expiration and, for items
//! in the use-soon window, proposes quick ways to use them up before
//! they spoil.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use larder_core::defaults::USE_SOON_WINDOW_DAYS;
use larder_core::{FreshnessStatus, StoredFood};

/// Milliseconds per calendar day, for the ceiling division below.
const MS_PER_DAY: f64 = 86_400_000.0;

/// Freshness assessment for a single pantry item.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FoodFreshness {
    /// Calendar days left before expiration. Partial days round up, so
    /// an item expiring in 36 hours reports 2 days. Zero or negative
    /// means expired.
    pub days_until_expiration: i64,
    pub status: FreshnessStatus,
    /// Quick-use ideas; populated only for `use-soon` items.
    pub recommended_uses: Vec<String>,
}

/// Evaluate a pantry item's freshness against the real clock.
///
/// Prefer [`calculate_freshness_at`] when assessing a batch of items so
/// a day boundary cannot shift classifications mid-batch.
pub fn calculate_freshness(food: &StoredFood) -> FoodFreshness {
    calculate_freshness_at(food, Utc::now())
}

/// Evaluate a pantry item's freshness against an explicit reference
/// instant.
pub fn calculate_freshness_at(food: &StoredFood, now: DateTime<Utc>) -> FoodFreshness {
    let remaining_ms = (food.expiration_date - now).num_milliseconds();
    let days_until_expiration = (remaining_ms as f64 / MS_PER_DAY).ceil() as i64;

    let (status, recommended_uses) = if days_until_expiration <= 0 {
        (FreshnessStatus::Expired, Vec::new())
    } else if days_until_expiration <= USE_SOON_WINDOW_DAYS {
        (FreshnessStatus::UseSoon, quick_use_suggestions(food))
    } else {
        (FreshnessStatus::Fresh, Vec::new())
    };

    FoodFreshness {
        days_until_expiration,
        status,
        recommended_uses,
    }
}

/// Category-keyed quick-use ideas for an item that should be eaten soon.
///
/// Matching is case-insensitive; absent or unrecognized categories fall
/// back to a generic suggestion.
pub fn quick_use_suggestions(food: &StoredFood) -> Vec<String> {
    let category = food
        .category
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    let uses: &[&str] = match category.as_str() {
        "produce" => &["Add to stir-fry", "Make smoothie", "Add to soup"],
        "dairy" => &["Make cheese sauce", "Add to casserole", "Make creamy pasta"],
        "meat" => &["Make sandwich filling", "Add to fried rice", "Make quick curry"],
        _ => &["Add to next meal"],
    };

    uses.iter().map(|s| s.to_string()).collect()
}
