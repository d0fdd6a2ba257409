//! Tests for strongly-typed policy identifiers

use settlement_kernel::{DriverFeePolicyId, PlatformFeePolicyId, PricePolicyId};

#[test]
fn test_display_uses_per_table_prefix() {
    assert_eq!(DriverFeePolicyId::new(1).to_string(), "DFP-1");
    assert_eq!(PlatformFeePolicyId::new(2).to_string(), "PFP-2");
    assert_eq!(PricePolicyId::new(3).to_string(), "SPP-3");
}

#[test]
fn test_parse_accepts_prefixed_and_bare_forms() {
    let prefixed: DriverFeePolicyId = "DFP-42".parse().unwrap();
    let bare: DriverFeePolicyId = "42".parse().unwrap();
    assert_eq!(prefixed, bare);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!("DFP-abc".parse::<DriverFeePolicyId>().is_err());
}

#[test]
fn test_i64_conversion_round_trip() {
    let id = PricePolicyId::from(99);
    let raw: i64 = id.into();
    assert_eq!(raw, 99);
}

#[test]
fn test_ids_order_by_value() {
    let mut ids = vec![
        PlatformFeePolicyId::new(3),
        PlatformFeePolicyId::new(1),
        PlatformFeePolicyId::new(2),
    ];
    ids.sort();
    assert_eq!(
        ids.iter().map(|id| id.value()).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}
