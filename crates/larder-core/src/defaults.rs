//! Centralized default constants for the larder system.
//!
//! **This module is the single source of truth** for all shared policy
//! values. The planner crate and the consuming application should
//! reference these constants instead of defining their own magic numbers.
//!
//! Organized by domain area. When adding new constants, place them in the
//! appropriate section and document the rationale for the chosen value.

// =============================================================================
// LEFTOVERS
// =============================================================================

/// Fraction of a cooked meal reserved as leftovers, expressed as a
/// divisor: half of the original servings, rounded down. A 1-serving
/// meal therefore reserves nothing.
pub const LEFTOVER_PORTION_DIVISOR: u32 = 2;

/// Shelf life assumed for leftovers when the recipe's storage text is
/// absent or names no day count.
pub const DEFAULT_LEFTOVER_SHELF_DAYS: i64 = 3;

/// Synthesized leftover meals are scheduled this many days after the
/// original meal.
pub const LEFTOVER_DATE_OFFSET_DAYS: i64 = 1;

/// Suffix appended to the original meal id to form a leftover meal id.
pub const LEFTOVER_MEAL_ID_SUFFIX: &str = "-leftover";

// =============================================================================
// FRESHNESS
// =============================================================================

/// Upper bound (inclusive, in days until expiration) of the `use-soon`
/// classification. At or below zero days an item is `expired`; above
/// this window it is `fresh`.
pub const USE_SOON_WINDOW_DAYS: i64 = 2;

// =============================================================================
// EFFICIENCY SCORING
// =============================================================================

/// Minimum fraction of ingredient occurrences shared across meals before
/// the "share more common ingredients" recommendation stops firing.
pub const SHARED_INGREDIENT_TARGET: f64 = 0.5;

/// Minimum fraction of leftover meals in an augmented plan before the
/// "plan more leftover meals" recommendation stops firing.
pub const LEFTOVER_UTILIZATION_TARGET: f64 = 0.3;

/// Minimum fraction of expiring pantry items covered by the plan before
/// the "ingredients will expire soon" recommendation stops firing.
pub const EXPIRING_COVERAGE_TARGET: f64 = 0.7;

/// Usage target for divisible ingredients (by weight or volume) when
/// scoring per-ingredient efficiency. Whole-unit items are expected to
/// be used completely; divisible items only to 80%.
pub const DIVISIBLE_USE_TARGET: f64 = 0.8;

/// Unit string marking an ingredient as counted in whole items rather
/// than a divisible measure.
pub const WHOLE_UNIT: &str = "whole";

// =============================================================================
// SHOPPING
// =============================================================================

/// Category assigned to aggregated shopping items whose contributing
/// ingredients declare no category.
pub const UNCATEGORIZED: &str = "uncategorized";
