//! Tests for GeneratorConfig

use xorshift_random_core_rs::{ConfigError, GeneratorConfig, RandomSource, XorShift128};

#[test]
fn test_config_with_seed_builds_seeded_generator() {
    let config = GeneratorConfig::from_json(r#"{ "seed": 12345 }"#).unwrap();
    assert_eq!(config.seed, Some(12345));
    assert_eq!(config.build(), XorShift128::with_seed(12345));
}

#[test]
fn test_config_accepts_full_u64_seed() {
    let config = GeneratorConfig::from_json(r#"{ "seed": 18446744073709551615 }"#).unwrap();
    assert_eq!(config.seed, Some(u64::MAX));
}

#[test]
fn test_config_null_seed_uses_seed_source() {
    let config = GeneratorConfig::from_json(r#"{ "seed": null }"#).unwrap();
    let mut rng = config.build_with(&mut || 12345u64);
    assert_eq!(rng.next_u32(), 353_605_593);
}

#[test]
fn test_configured_seed_ignores_seed_source() {
    let config = GeneratorConfig::with_seed(7);
    let mut consulted = false;
    let rng = config.build_with(&mut || {
        consulted = true;
        0
    });
    assert!(!consulted);
    assert_eq!(rng, XorShift128::with_seed(7));
}

#[test]
fn test_config_rejects_negative_seed() {
    let result = GeneratorConfig::from_json(r#"{ "seed": -1 }"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_rejects_malformed_json() {
    let err = GeneratorConfig::from_json("{ seed: 1 ").unwrap_err();
    assert!(err.to_string().starts_with("Invalid generator config:"));
}
