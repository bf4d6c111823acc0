//! Taxonomy validation for products
//!
//! This module provides soft validation for standard categories and
//! materials. Non-standard values are flagged with a warning, never
//! rejected; the admin UI surfaces the hint.

mod types;

pub use types::{validate_category, validate_material, STANDARD_CATEGORIES, STANDARD_MATERIALS};
