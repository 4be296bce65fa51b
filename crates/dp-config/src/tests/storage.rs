use crate::StorageConfig;

use googletest::assert_that;
use googletest::prelude::{anything, ok};

#[test]
fn given_default_storage_config_when_validate_then_ok() {
    assert_that!(StorageConfig::default().validate(), ok(anything()));
}

#[test]
fn given_absolute_session_file_when_validate_then_error() {
    let config = StorageConfig {
        session_file: String::from("/etc/session.json"),
    };

    assert!(config.validate().is_err());
}

#[test]
fn given_parent_traversal_when_validate_then_error() {
    let config = StorageConfig {
        session_file: String::from("../session.json"),
    };

    assert!(config.validate().is_err());
}

#[test]
fn given_empty_session_file_when_validate_then_error() {
    let config = StorageConfig {
        session_file: String::new(),
    };

    assert!(config.validate().is_err());
}
