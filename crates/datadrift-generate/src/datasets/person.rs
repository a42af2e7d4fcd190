use rand::RngCore;

use super::{DatasetDefinition, DatasetRegistry};
use crate::faker_rs::FakerProvider;
use crate::value::{GeneratedValue, Row};

pub const DEFINITION: DatasetDefinition = DatasetDefinition {
    name: "person",
    canonical_fields: &[
        "ID",
        "Name",
        "Email",
        "Phone Number",
        "Address",
        "Company",
        "Job Title",
        "Date of Birth",
    ],
    aliases: &[],
    protected_fields: &["ID"],
    row_rule: generate_row,
};

pub fn register(registry: &mut DatasetRegistry) {
    registry.register(DEFINITION);
}

// The identifier is the bare row index, kept numeric.
fn generate_row(index: u64, rng: &mut dyn RngCore) -> Row {
    let id = i64::try_from(index).unwrap_or(i64::MAX);
    [
        ("ID", GeneratedValue::Int(id)),
        ("Name", GeneratedValue::Text(FakerProvider::name(rng))),
        ("Email", GeneratedValue::Text(FakerProvider::email(rng))),
        (
            "Phone Number",
            GeneratedValue::Text(FakerProvider::phone_number(rng)),
        ),
        ("Address", GeneratedValue::Text(FakerProvider::address(rng))),
        ("Company", GeneratedValue::Text(FakerProvider::company(rng))),
        ("Job Title", GeneratedValue::Text(FakerProvider::job_title(rng))),
        (
            "Date of Birth",
            GeneratedValue::date(FakerProvider::date_of_birth(18, 75, rng)),
        ),
    ]
    .into_iter()
    .collect()
}
