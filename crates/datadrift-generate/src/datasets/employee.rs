use rand::{Rng, RngCore};

use super::{DatasetDefinition, DatasetRegistry, pick, round_cents};
use crate::faker_rs::FakerProvider;
use crate::value::{GeneratedValue, Row};

const DEPARTMENTS: &[&str] = &["HR", "IT", "Finance", "Marketing", "Operations"];

pub const DEFINITION: DatasetDefinition = DatasetDefinition {
    name: "employee",
    canonical_fields: &[
        "Employee ID",
        "Full Name",
        "Department",
        "Salary",
        "Hire Date",
        "Email",
    ],
    aliases: &[
        ("Full Name", &["Full_Name", "fullName", "FullName"]),
        ("Email", &["email", "Email_Address", "EmailAddress"]),
        ("Department", &["Dept", "Team", "Division"]),
        ("Salary", &["Annual_Salary", "BasePay"]),
    ],
    protected_fields: &["Employee ID"],
    row_rule: generate_row,
};

pub fn register(registry: &mut DatasetRegistry) {
    registry.register(DEFINITION);
}

fn generate_row(index: u64, rng: &mut dyn RngCore) -> Row {
    let salary = round_cents(rng.random_range(40_000.0..120_000.0));
    [
        ("Employee ID", GeneratedValue::Text(format!("EMP{index:05}"))),
        ("Full Name", GeneratedValue::Text(FakerProvider::name(rng))),
        ("Department", GeneratedValue::text(pick(DEPARTMENTS, rng))),
        ("Salary", GeneratedValue::Float(salary)),
        (
            "Hire Date",
            GeneratedValue::date(FakerProvider::date_within_years(10, rng)),
        ),
        ("Email", GeneratedValue::Text(FakerProvider::company_email(rng))),
    ]
    .into_iter()
    .collect()
}
