use crate::RemainderPolicy;
use crate::config::Config;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults_when_unset() {
    let config = Config::from_lookup(lookup(&[]));

    assert_eq!(config.log_level, "info");
    assert_eq!(config.currency, "INR");
    assert_eq!(config.equal_split_remainder, RemainderPolicy::Drop);
}

#[test]
fn test_values_from_environment() {
    let config = Config::from_lookup(lookup(&[
        ("LOG_LEVEL", "debug"),
        ("CURRENCY", " usd "),
        ("EQUAL_SPLIT_REMAINDER", "distribute"),
    ]));

    assert_eq!(config.log_level, "debug");
    assert_eq!(config.currency, "USD");
    assert_eq!(config.equal_split_remainder, RemainderPolicy::DistributeToFirst);
}

#[test]
fn test_unknown_remainder_falls_back() {
    let config = Config::from_lookup(lookup(&[("EQUAL_SPLIT_REMAINDER", "banker")]));

    assert_eq!(config.equal_split_remainder, RemainderPolicy::Drop);
}

#[test]
fn test_calculator_follows_config() {
    crate::config::init_logging();
    let config = Config {
        equal_split_remainder: RemainderPolicy::DistributeToFirst,
        ..Config::default()
    };

    let calculator = crate::SplitCalculator::from_config(&config);

    assert_eq!(calculator.remainder_policy(), RemainderPolicy::DistributeToFirst);
    assert!(!crate::config::CONFIG.currency.is_empty());
}
