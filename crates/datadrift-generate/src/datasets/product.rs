use rand::{Rng, RngCore};

use super::{DatasetDefinition, DatasetRegistry, pick, round_cents};
use crate::faker_rs::FakerProvider;
use crate::value::{GeneratedValue, Row};

const CATEGORIES: &[&str] = &["Electronics", "Clothing", "Food", "Books", "Furniture"];

pub const DEFINITION: DatasetDefinition = DatasetDefinition {
    name: "product",
    canonical_fields: &[
        "Product ID",
        "Product Name",
        "Category",
        "Price",
        "Stock Quantity",
    ],
    aliases: &[],
    protected_fields: &["Product ID"],
    row_rule: generate_row,
};

pub fn register(registry: &mut DatasetRegistry) {
    registry.register(DEFINITION);
}

fn generate_row(index: u64, rng: &mut dyn RngCore) -> Row {
    let name = capitalize(&FakerProvider::word(rng));
    let category = pick(CATEGORIES, rng);
    let price = round_cents(rng.random_range(5.0..500.0));
    let stock = rng.random_range(0..=1000_i64);
    [
        ("Product ID", GeneratedValue::Text(format!("PROD{index:05}"))),
        ("Product Name", GeneratedValue::Text(name)),
        ("Category", GeneratedValue::text(category)),
        ("Price", GeneratedValue::Float(price)),
        ("Stock Quantity", GeneratedValue::Int(stock)),
    ]
    .into_iter()
    .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
