//! Built-in seed catalog
//!
//! The storefront launched with a static product list; the persisted
//! catalog overrides these by id.

use crate::types::Product;

fn seed(
    id: &str,
    name: &str,
    price: f64,
    category: &str,
    color: Option<&str>,
    material: Option<&str>,
) -> Product {
    let mut product = Product::new(
        id.to_string(),
        name.to_string(),
        price,
        category.to_string(),
        format!("/images/{}.jpg", id),
    );
    product.color = color.map(str::to_string);
    product.material = material.map(str::to_string);
    product
}

/// The built-in launch products
pub fn seed_products() -> Vec<Product> {
    vec![
        seed(
            "seed-1",
            "Altın Minimalist Kolye",
            1450.0,
            "Kolye",
            Some("sarı"),
            Some("altın"),
        ),
        seed(
            "seed-2",
            "Gümüş Zincir Bileklik",
            420.0,
            "Bileklik",
            Some("gri"),
            Some("gümüş"),
        ),
        seed(
            "seed-3",
            "İnci Küpe",
            380.0,
            "Küpe",
            Some("beyaz"),
            Some("gümüş"),
        ),
        seed(
            "seed-4",
            "Zarif Tektaş Yüzük",
            990.0,
            "Yüzük",
            Some("sarı"),
            Some("altın"),
        ),
        seed(
            "seed-5",
            "Gold Halka Küpe",
            540.0,
            "Küpe",
            Some("sarı"),
            Some("gold"),
        ),
        seed(
            "seed-6",
            "Doğal Taş Kolye Ucu",
            310.0,
            "Kolye",
            Some("yeşil"),
            Some("doğal taş"),
        ),
        seed(
            "seed-7",
            "Gümüş Takım Set",
            1250.0,
            "Set",
            Some("gri"),
            Some("gümüş"),
        ),
        seed(
            "seed-8",
            "Şık Zirkon Halhal",
            290.0,
            "Halhal",
            Some("gümüş"),
            Some("çelik"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let products = seed_products();
        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_products_have_no_timestamp() {
        // Seed entries predate the store and must count as legacy arrivals
        assert!(seed_products().iter().all(|p| p.created_at == 0));
    }
}
