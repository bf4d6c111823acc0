//! Standard categories and materials with validation

use crate::search::normalize;

/// Standard storefront categories
pub const STANDARD_CATEGORIES: &[&str] = &[
    "Kolye", "Küpe", "Bileklik", "Yüzük", "Set", "Halhal", "Broş",
];

/// Standard materials
pub const STANDARD_MATERIALS: &[&str] = &[
    "Altın", "Gümüş", "Gold", "Silver", "Çelik", "Pirinç", "Doğal Taş",
];

/// Check if a category is standard, return a warning if not
///
/// Comparison is diacritic-insensitive, so "kupe" counts as "Küpe". An
/// empty category is allowed.
pub fn validate_category(category: &str) -> Option<String> {
    if category.is_empty()
        || STANDARD_CATEGORIES
            .iter()
            .any(|&c| normalize(c) == normalize(category))
    {
        None
    } else {
        Some(format!(
            "Non-standard category '{}'. Recommended: {:?}",
            category, STANDARD_CATEGORIES
        ))
    }
}

/// Check if a material is standard, return a warning if not
pub fn validate_material(material: &str) -> Option<String> {
    if material.is_empty()
        || STANDARD_MATERIALS
            .iter()
            .any(|&m| normalize(m) == normalize(material))
    {
        None
    } else {
        Some(format!(
            "Non-standard material '{}'. Recommended: {:?}",
            material, STANDARD_MATERIALS
        ))
    }
}
