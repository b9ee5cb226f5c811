//! Core traits for larder abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable strategies and testability.

// =============================================================================
// UNIT RECONCILIATION
// =============================================================================

/// Strategy for merging ingredient quantities during shopping-list
/// aggregation.
///
/// The default aggregation sums quantities for same-named ingredients
/// without unit conversion. This seam lets a stricter implementation
/// (conversion tables, unit rejection) be swapped in without changing
/// the aggregator's contract.
pub trait UnitReconciler {
    /// Merge `added` (in `added_unit`) into the running `total` (in
    /// `unit`), returning the new total and the unit to track for it.
    fn reconcile(&self, total: f64, unit: &str, added: f64, added_unit: &str) -> (f64, String);
}

/// Default reconciler: raw numeric sum, last-seen unit wins.
///
/// Grams and pounds of the same ingredient are added together as-is;
/// callers needing real conversion supply their own implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawUnitSum;

impl UnitReconciler for RawUnitSum {
    fn reconcile(&self, total: f64, _unit: &str, added: f64, added_unit: &str) -> (f64, String) {
        (total + added, added_unit.to_string())
    }
}
