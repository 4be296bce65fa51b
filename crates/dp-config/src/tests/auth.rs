use crate::AuthConfig;

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};

#[test]
fn given_default_auth_config_when_validate_then_ok() {
    let config = AuthConfig::default();

    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.latency(), eq(Duration::from_millis(1000)));
}

#[test]
fn given_zero_latency_when_validate_then_ok() {
    let config = AuthConfig { latency_ms: 0 };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_excessive_latency_when_validate_then_error() {
    let config = AuthConfig { latency_ms: 60_001 };

    assert!(config.validate().is_err());
}
