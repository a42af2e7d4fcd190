use rand::{Rng, RngCore};

use super::{DatasetDefinition, DatasetRegistry, pick};
use crate::faker_rs::FakerProvider;
use crate::value::{GeneratedValue, Row};

const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"];

pub const DEFINITION: DatasetDefinition = DatasetDefinition {
    name: "healthcare",
    canonical_fields: &[
        "Patient ID",
        "Full Name",
        "Age",
        "Blood Type",
        "Doctor",
        "Last Visit",
    ],
    aliases: &[],
    protected_fields: &["Patient ID"],
    row_rule: generate_row,
};

pub fn register(registry: &mut DatasetRegistry) {
    registry.register(DEFINITION);
}

fn generate_row(index: u64, rng: &mut dyn RngCore) -> Row {
    let name = FakerProvider::name(rng);
    let age = rng.random_range(18..=90_i64);
    let blood_type = pick(BLOOD_TYPES, rng);
    let doctor = format!("Dr. {}", FakerProvider::last_name(rng));
    [
        ("Patient ID", GeneratedValue::Text(format!("PAT{index:06}"))),
        ("Full Name", GeneratedValue::Text(name)),
        ("Age", GeneratedValue::Int(age)),
        ("Blood Type", GeneratedValue::text(blood_type)),
        ("Doctor", GeneratedValue::Text(doctor)),
        (
            "Last Visit",
            GeneratedValue::date(FakerProvider::date_within_years(2, rng)),
        ),
    ]
    .into_iter()
    .collect()
}
