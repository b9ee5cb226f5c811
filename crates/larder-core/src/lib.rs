//! # larder-core
//!
//! Core types, traits, and defaults for the larder library.
//!
//! This crate provides the foundational data structures, policy
//! constants, and boundary validation that the planner crate and the
//! consuming application depend on.

pub mod defaults;
pub mod error;
pub mod models;
pub mod traits;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::{RawUnitSum, UnitReconciler};
pub use validate::{validate_meal_plan, validate_recipe};
