//! Tests for the store error taxonomy

use settlement_kernel::StoreError;

#[test]
fn test_not_found_message_names_entity_and_id() {
    let error = StoreError::not_found("DriverFeePolicy", "DFP-123");
    assert!(error.is_not_found());
    assert!(error.to_string().contains("DriverFeePolicy"));
    assert!(error.to_string().contains("DFP-123"));
}

#[test]
fn test_validation_with_field() {
    let error = StoreError::validation_field("delivery_fee must not be negative", "delivery_fee");
    assert!(error.is_validation());
    match error {
        StoreError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("delivery_fee")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_classification_predicates_are_exclusive() {
    let validation = StoreError::validation("bad input");
    let not_found = StoreError::not_found("PlatformFeePolicy", 9);
    let storage = StoreError::storage("connection refused");

    assert!(validation.is_validation() && !validation.is_not_found() && !validation.is_storage());
    assert!(not_found.is_not_found() && !not_found.is_validation() && !not_found.is_storage());
    assert!(storage.is_storage() && !storage.is_validation() && !storage.is_not_found());
}

#[test]
fn test_storage_error_preserves_source() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let error = StoreError::storage_with_source("insert failed", io);

    let source = std::error::Error::source(&error);
    assert!(source.is_some());
}
