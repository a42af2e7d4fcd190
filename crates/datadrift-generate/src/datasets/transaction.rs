use rand::{Rng, RngCore};

use super::{DatasetDefinition, DatasetRegistry, pick, round_cents};
use crate::faker_rs::FakerProvider;
use crate::value::{GeneratedValue, Row};

const TRANSACTION_TYPES: &[&str] = &["Credit", "Debit", "Refund", "Withdrawal"];

pub const DEFINITION: DatasetDefinition = DatasetDefinition {
    name: "transaction",
    canonical_fields: &[
        "Transaction ID",
        "User ID",
        "Amount",
        "Transaction Type",
        "Timestamp",
    ],
    aliases: &[
        ("Transaction ID", &["Txn_ID", "TransactionID"]),
        ("User ID", &["User_ID", "CustomerID"]),
        ("Amount", &["TotalAmount", "TransactionAmount"]),
        ("Transaction Type", &["Type", "TxnType"]),
    ],
    protected_fields: &["Transaction ID"],
    row_rule: generate_row,
};

pub fn register(registry: &mut DatasetRegistry) {
    registry.register(DEFINITION);
}

fn generate_row(index: u64, rng: &mut dyn RngCore) -> Row {
    let user = rng.random_range(1000..=9999);
    let amount = round_cents(rng.random_range(10.0..5000.0));
    [
        ("Transaction ID", GeneratedValue::Text(format!("TXN{index:06}"))),
        ("User ID", GeneratedValue::Text(format!("USR{user}"))),
        ("Amount", GeneratedValue::Float(amount)),
        ("Transaction Type", GeneratedValue::text(pick(TRANSACTION_TYPES, rng))),
        (
            "Timestamp",
            GeneratedValue::timestamp(FakerProvider::date_time_this_year(rng)),
        ),
    ]
    .into_iter()
    .collect()
}
