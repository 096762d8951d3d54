//! The fixed demonstration catalog.

use shopsmart_core::{DomainResult, ProductId};

use crate::catalog::Catalog;
use crate::product::Product;

/// Raw seed rows: (id, name, description, price in cents, category).
const SEED: &[(u32, &str, &str, u64, &str)] = &[
    (
        1,
        "Premium Headphones",
        "High-quality noise-canceling headphones with 20-hour battery life.",
        19999,
        "electronics",
    ),
    (
        2,
        "Fitness Tracker",
        "Track your steps, sleep, and heart rate with our latest smart wearable.",
        8999,
        "fitness",
    ),
    (
        3,
        "Smart Home Hub",
        "Control all your smart devices with voice commands and automation.",
        12999,
        "electronics",
    ),
    (
        4,
        "Wireless Charger",
        "Fast charging for compatible devices.",
        4999,
        "electronics",
    ),
    (
        5,
        "Bluetooth Speaker",
        "Portable speaker with rich sound.",
        7999,
        "electronics",
    ),
    (
        6,
        "Designer T-Shirt",
        "Comfortable cotton t-shirt with modern design.",
        2999,
        "clothing",
    ),
    (
        7,
        "Running Shoes",
        "Lightweight shoes for runners.",
        11999,
        "clothing",
    ),
    (
        8,
        "Denim Jeans",
        "Classic jeans with perfect fit.",
        5999,
        "clothing",
    ),
    (
        9,
        "Winter Jacket",
        "Warm jacket for cold weather.",
        14999,
        "clothing",
    ),
    (
        10,
        "Sunglasses",
        "UV protection stylish sunglasses.",
        8999,
        "accessories",
    ),
    (
        11,
        "Coffee Maker",
        "Automatic coffee machine for perfect brew.",
        19999,
        "home",
    ),
    (
        12,
        "Non-stick Pan",
        "High-quality kitchen cookware.",
        3999,
        "home",
    ),
    (
        13,
        "Blender",
        "Powerful blender for smoothies and more.",
        6999,
        "home",
    ),
    (
        14,
        "Cutlery Set",
        "Stainless steel premium cutlery.",
        12999,
        "home",
    ),
    (
        15,
        "Yoga Mat",
        "Non-slip exercise mat for yoga.",
        2599,
        "fitness",
    ),
];

/// Build the 15-product demonstration catalog, in canonical order.
pub fn seed_catalog() -> DomainResult<Catalog> {
    let mut products = Vec::with_capacity(SEED.len());
    for &(id, name, description, price_cents, category) in SEED {
        products.push(Product::new(
            ProductId::new(id)?,
            name,
            description,
            price_cents,
            category,
        )?);
    }
    Catalog::new(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_fifteen_products() {
        let catalog = seed_catalog().unwrap();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.products()[0].name(), "Premium Headphones");
        assert_eq!(catalog.products()[14].name(), "Yoga Mat");
    }

    #[test]
    fn seed_catalog_covers_all_categories() {
        let catalog = seed_catalog().unwrap();
        assert_eq!(
            catalog.categories(),
            vec!["electronics", "fitness", "clothing", "accessories", "home"]
        );
    }

    #[test]
    fn seed_prices_display_as_in_the_storefront() {
        let catalog = seed_catalog().unwrap();
        let shoes = catalog.get(ProductId::new(7).unwrap()).unwrap();
        assert_eq!(shoes.price_display(), "$119.99");
    }
}
