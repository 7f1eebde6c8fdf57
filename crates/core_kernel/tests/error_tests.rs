//! Unit tests for core error types

use core_kernel::{CoreError, MoneyError, TemporalError};
use chrono::NaiveDate;

#[test]
fn test_money_error_converts() {
    let err: CoreError = MoneyError::InvalidAmount("-1".to_string()).into();
    assert!(matches!(err, CoreError::Money(_)));
    assert!(err.to_string().contains("Invalid amount"));
}

#[test]
fn test_temporal_error_converts() {
    let start = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let err: CoreError = TemporalError::InvalidWindow { start, end }.into();
    assert!(matches!(err, CoreError::Temporal(_)));
}

#[test]
fn test_validation_helper() {
    let err = CoreError::validation("name is required");
    assert_eq!(err.to_string(), "Validation error: name is required");
}
