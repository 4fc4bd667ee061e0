//! Tests for finder configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        ambiguity = "lowest_index"
        unresolved = "zero_index"
        median_fallback = true
        parallel = false
    "#;

    let config = FinderConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.ambiguity, AmbiguityPolicy::LowestIndex);
    assert_eq!(config.unresolved, UnresolvedPolicy::ZeroIndex);
    assert!(config.median_fallback);
    assert!(!config.parallel);
    assert_eq!(config.threads, None);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        ambiguity: reject
        threads: 2
    "#;

    let config = FinderConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.ambiguity, AmbiguityPolicy::Reject);
    assert_eq!(config.threads, Some(2));
    assert!(config.parallel);
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config = FinderConfig::from_toml_str("").unwrap();
    assert_eq!(config, FinderConfig::default());
}

#[test]
fn test_zero_threads_rejected() {
    let err = FinderConfig::from_toml_str("threads = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_policy_rejected() {
    let err = FinderConfig::from_toml_str(r#"ambiguity = "random""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_builder() {
    let config = FinderConfig::new()
        .with_ambiguity(AmbiguityPolicy::LowestIndex)
        .with_median_fallback(true)
        .with_threads(8);

    assert_eq!(config.ambiguity, AmbiguityPolicy::LowestIndex);
    assert!(config.median_fallback);
    assert_eq!(config.threads, Some(8));
    assert_eq!(config.unresolved, UnresolvedPolicy::Report);
}

#[test]
fn test_missing_file() {
    let err = FinderConfig::load("/nonexistent/landmarks.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
