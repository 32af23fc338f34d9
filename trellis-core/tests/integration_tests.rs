use std::collections::BTreeMap;
use trellis_core::*;

#[test]
fn test_network_name_validation() {
    // Valid names
    assert!(NetworkName::new("mnet").is_ok());
    assert!(NetworkName::new("net-1").is_ok());
    assert!(NetworkName::new("net_2").is_ok());
    assert!(NetworkName::new("a").is_ok());
    assert!(NetworkName::new("podman1.internal").is_ok());

    // Invalid names - empty
    assert!(NetworkName::new("").is_err());

    // Invalid names - too long
    assert!(NetworkName::new("a".repeat(129)).is_err());

    // Invalid names - bad characters
    assert!(NetworkName::new("net@1").is_err());
    assert!(NetworkName::new("net space").is_err());
    assert!(NetworkName::new("net/path").is_err());
    assert!(NetworkName::new("net:colon").is_err());
}

#[test]
fn test_network_name_serialization() {
    let name = NetworkName::new("backend").unwrap();

    let json = serde_json::to_string(&name).unwrap();
    assert_eq!(json, "\"backend\"");

    let deserialized: NetworkName = serde_json::from_str(&json).unwrap();
    assert_eq!(name, deserialized);
}

#[test]
fn test_ensure_rejects_anything_outside_closed_set() {
    assert!("present".parse::<Ensure>().is_ok());
    assert!("absent".parse::<Ensure>().is_ok());

    let err = "running".parse::<Ensure>().unwrap_err();
    assert!(matches!(err, Error::InvalidSpec { .. }));
    assert!(err.to_string().contains("running"));
}

#[test]
fn test_spec_wire_format_roundtrip() {
    let mut labels = BTreeMap::new();
    labels.insert("tier".to_string(), LabelValue::from("web"));
    labels.insert(
        "dns".to_string(),
        LabelValue::from(vec!["10.0.0.2".to_string()]),
    );

    let mut spec = NetworkSpec::new(NetworkName::new("backend").unwrap());
    spec.driver = Driver::Macvlan;
    spec.subnet = Some("10.90.0.0/24".to_string());
    spec.labels = labels;
    spec.user = Some("alice".to_string());

    let json = serde_json::to_string(&spec).unwrap();
    let back: NetworkSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(spec, back);
}

#[test]
fn test_spec_example_from_docs() {
    // The documented minimal example: internal bridge network
    let spec: NetworkSpec = serde_json::from_str(
        r#"{"name": "mnet", "ensure": "present", "driver": "bridge", "internal": true}"#,
    )
    .unwrap();

    let args = spec.create_args();
    assert!(args.contains(&"--driver".to_string()));
    assert!(args.contains(&"bridge".to_string()));
    assert!(args.contains(&"--internal".to_string()));
    assert!(!args.contains(&"--gateway".to_string()));
    assert!(!args.contains(&"--subnet".to_string()));
    assert_eq!(args.last().map(String::as_str), Some("mnet"));
}

#[test]
fn test_identical_specs_render_identical_tokens() {
    let build = || {
        let mut spec = NetworkSpec::new(NetworkName::new("mnet").unwrap());
        spec.opts = vec!["mtu=9000".to_string(), "vlan=8".to_string()];
        spec.labels
            .insert("env".to_string(), LabelValue::from("prod"));
        spec.ipv6 = true;
        spec
    };

    assert_eq!(build().create_args(), build().create_args());
}

#[test]
fn test_outcome_display() {
    assert_eq!(ReconcileOutcome::Applied.to_string(), "applied");
    assert_eq!(ReconcileOutcome::Skipped.to_string(), "skipped");
}
