//! washer.toml deserialization (`cargo test -p lavabo-core --features serde`)

#![cfg(feature = "serde")]

use lavabo_core::config::WasherConfig;

#[test]
fn missing_keys_take_defaults() {
    let config: WasherConfig = toml::from_str("trigger_distance_mm = 120\n").unwrap();
    assert_eq!(config.trigger_distance_mm, 120);
    assert_eq!(config.countdown_from, WasherConfig::DEFAULT.countdown_from);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn misspelled_key_is_rejected() {
    let result = toml::from_str::<WasherConfig>("trigger_distance = 100\n");
    assert!(result.is_err());
}
