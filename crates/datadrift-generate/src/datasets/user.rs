use rand::RngCore;

use super::{DatasetDefinition, DatasetRegistry, pick};
use crate::faker_rs::FakerProvider;
use crate::value::{GeneratedValue, Row};

const ACCOUNT_STATUSES: &[&str] = &["Active", "Inactive", "Suspended"];

pub const DEFINITION: DatasetDefinition = DatasetDefinition {
    name: "user",
    canonical_fields: &[
        "User ID",
        "Username",
        "Email",
        "Signup Date",
        "Last Login",
        "Account Status",
    ],
    aliases: &[],
    protected_fields: &["User ID"],
    row_rule: generate_row,
};

pub fn register(registry: &mut DatasetRegistry) {
    registry.register(DEFINITION);
}

fn generate_row(index: u64, rng: &mut dyn RngCore) -> Row {
    [
        ("User ID", GeneratedValue::Text(format!("USR{index:05}"))),
        ("Username", GeneratedValue::Text(FakerProvider::user_name(rng))),
        ("Email", GeneratedValue::Text(FakerProvider::email(rng))),
        (
            "Signup Date",
            GeneratedValue::date(FakerProvider::date_within_years(5, rng)),
        ),
        (
            "Last Login",
            GeneratedValue::timestamp(FakerProvider::date_time_this_year(rng)),
        ),
        ("Account Status", GeneratedValue::text(pick(ACCOUNT_STATUSES, rng))),
    ]
    .into_iter()
    .collect()
}
