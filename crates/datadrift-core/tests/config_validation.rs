use datadrift_core::{ConfigField, ConfigValidator, Configuration};
use serde_json::{Value, json};

fn validate(
    num_rows: Value,
    num_duplicates: Value,
    null_probability: Value,
) -> Result<Configuration, ConfigField> {
    ConfigValidator::validate(&num_rows, &num_duplicates, &null_probability)
        .map_err(|err| err.field)
}

#[test]
fn valid_values_build_configuration() {
    let config = validate(json!(10), json!(4), json!(0.25)).expect("valid config");
    assert_eq!(config.row_count(), 10);
    assert_eq!(config.duplicate_count(), 4);
    assert_eq!(config.null_probability(), 0.25);
    assert_eq!(config.total_rows(), 14);
}

#[test]
fn total_rows_saturates_at_max() {
    let config = Configuration::new(u64::MAX, u64::MAX, 0.0).expect("valid config");
    assert_eq!(config.total_rows(), u64::MAX);
}

#[test]
fn row_count_must_be_positive_integer() {
    for raw in [json!(0), json!(-3), json!(2.5), json!(10.0), json!("10"), json!(null)] {
        assert_eq!(
            validate(raw.clone(), json!(0), json!(0.1)),
            Err(ConfigField::NumRows),
            "{raw}"
        );
    }
}

#[test]
fn duplicate_count_must_not_exceed_row_count() {
    assert_eq!(validate(json!(5), json!(6), json!(0.1)), Err(ConfigField::NumDuplicates));
    assert_eq!(validate(json!(5), json!(-1), json!(0.1)), Err(ConfigField::NumDuplicates));
    assert_eq!(validate(json!(5), json!("2"), json!(0.1)), Err(ConfigField::NumDuplicates));
    assert!(validate(json!(5), json!(5), json!(0.1)).is_ok());
    assert!(validate(json!(5), json!(0), json!(0.1)).is_ok());
}

#[test]
fn null_probability_must_be_in_unit_interval() {
    assert_eq!(validate(json!(5), json!(0), json!(1.01)), Err(ConfigField::NullProbability));
    assert_eq!(validate(json!(5), json!(0), json!(-0.1)), Err(ConfigField::NullProbability));
    assert_eq!(validate(json!(5), json!(0), json!("0.5")), Err(ConfigField::NullProbability));
    assert!(validate(json!(5), json!(0), json!(0.0)).is_ok());
    assert!(validate(json!(5), json!(0), json!(1.0)).is_ok());
}

#[test]
fn typed_constructor_applies_same_rules() {
    assert!(Configuration::new(0, 0, 0.0).is_err());
    assert!(Configuration::new(3, 4, 0.0).is_err());
    assert!(Configuration::new(3, 3, 0.0).is_ok());
}

#[test]
fn error_message_names_field() {
    let err = ConfigValidator::validate(&json!(2), &json!(3), &json!(0.1)).unwrap_err();
    assert!(err.to_string().contains("num_duplicates"));
}
