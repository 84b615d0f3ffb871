use refind_core::config::*;
use refind_core::errors::RefindError;
use refind_core::DescriptorType;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = RefindConfig::from_toml("").unwrap();

    // Index defaults
    assert!(config.index.indexed_types.is_empty());
    assert_eq!(config.index.normalization, Normalization::None);

    // Retrieval defaults
    assert_eq!(config.retrieval.result_count, 20);

    // Feedback defaults
    assert_eq!(config.feedback.max_iterations, 4);
    assert_eq!(config.feedback.rocchio_query, 1.0);
    assert_eq!(config.feedback.rocchio_positives, 0.75);
    assert_eq!(config.feedback.rocchio_negatives, 0.15);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[index]
indexed_types = ["merged", "cedd"]
normalization = "gaussian_unit"
normalized_types = ["cedd"]

[feedback]
max_iterations = 10
"#;
    let config = RefindConfig::from_toml(toml).unwrap();
    assert_eq!(
        config.index.indexed_types,
        vec![DescriptorType::Merged, DescriptorType::Cedd]
    );
    assert_eq!(config.index.normalization, Normalization::GaussianUnit);
    assert_eq!(config.index.normalized_types, vec![DescriptorType::Cedd]);
    assert_eq!(config.feedback.max_iterations, 10);
    // Non-overridden fields keep defaults
    assert_eq!(config.feedback.rocchio_positives, 0.75);
    assert_eq!(config.retrieval.result_count, 20);
}

#[test]
fn config_serde_roundtrip() {
    let config = RefindConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = RefindConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.retrieval.result_count,
        config.retrieval.result_count
    );
    assert_eq!(
        roundtripped.feedback.max_iterations,
        config.feedback.max_iterations
    );
}

#[test]
fn zero_result_count_is_rejected() {
    let err = RefindConfig::from_toml("[retrieval]\nresult_count = 0\n").unwrap_err();
    assert!(matches!(err, RefindError::InvalidConfig { .. }));
    assert!(err.to_string().contains("result_count"));
}

#[test]
fn non_finite_rocchio_weight_is_rejected() {
    let err = RefindConfig::from_toml("[feedback]\nrocchio_negatives = nan\n").unwrap_err();
    assert!(err.to_string().contains("rocchio_negatives"));
}

#[test]
fn unknown_descriptor_type_is_a_config_error() {
    let err = RefindConfig::from_toml("[index]\nindexed_types = [\"sift\"]\n").unwrap_err();
    assert!(matches!(err, RefindError::InvalidConfig { .. }));
}
