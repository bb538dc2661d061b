use stockprompt_core::config::*;
use stockprompt_core::errors::StockpromptError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = StockpromptConfig::from_toml("").unwrap();

    assert_eq!(config.generation.max_remote_attempts, 50);
    assert_eq!(config.generation.max_fallback_attempts, 1000);
    assert_eq!(config.generation.recent_history_window, 5);

    assert_eq!(config.preference.like_weight, 2);
    assert_eq!(config.preference.dislike_weight, 1);
    assert_eq!(config.preference.signal_floor, 1);
    assert_eq!(config.preference.min_score, 0);
    assert_eq!(config.preference.exclusion_reset_margin, 0);

    assert_eq!(config.history.capacity, 50);
    assert_eq!(config.history.db_path, "stockprompt.db");

    assert!(config.remote.proposer_url.is_none());
    assert!(config.remote.enrichment_url.is_none());
    assert_eq!(config.remote.timeout_secs, 20);
    assert_eq!(config.remote.api_key_env, "STOCKPROMPT_API_KEY");

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[generation]
max_remote_attempts = 10

[remote]
proposer_url = "http://localhost:8080/propose"
timeout_secs = 15
"#;
    let config = StockpromptConfig::from_toml(toml).unwrap();
    assert_eq!(config.generation.max_remote_attempts, 10);
    assert_eq!(config.generation.max_fallback_attempts, 1000); // default
    assert_eq!(
        config.remote.proposer_url.as_deref(),
        Some("http://localhost:8080/propose")
    );
    assert_eq!(config.remote.timeout().as_secs(), 15);
}

#[test]
fn config_rejects_zero_capacity() {
    let err = StockpromptConfig::from_toml("[history]\ncapacity = 0\n").unwrap_err();
    assert!(matches!(err, StockpromptError::Config(_)));
}

#[test]
fn config_rejects_out_of_range_timeout() {
    assert!(StockpromptConfig::from_toml("[remote]\ntimeout_secs = 0\n").is_err());
    assert!(StockpromptConfig::from_toml("[remote]\ntimeout_secs = 600\n").is_err());
}

#[test]
fn config_rejects_garbage() {
    let err = StockpromptConfig::from_toml("[generation\n").unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[test]
fn config_serde_roundtrip() {
    let config = StockpromptConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = StockpromptConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.history.capacity, config.history.capacity);
    assert_eq!(
        roundtripped.generation.max_remote_attempts,
        config.generation.max_remote_attempts
    );
}

#[test]
fn config_rejects_history_window_above_five() {
    let err = StockpromptConfig::from_toml("[generation]\nrecent_history_window = 6\n").unwrap_err();
    assert!(err.to_string().contains("at most 5"));
    assert!(StockpromptConfig::from_toml("[generation]\nrecent_history_window = 5\n").is_ok());
}
