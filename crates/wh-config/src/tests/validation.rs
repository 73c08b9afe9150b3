use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};
use crate::auth_config::MAX_LOGIN_DELAY_MS;
use crate::validation_config::{MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

const BELOW_MIN_PASSWORD: usize = MIN_PASSWORD_LENGTH - 1;
const ABOVE_MAX_PASSWORD: usize = MAX_PASSWORD_LENGTH + 1;
const ABOVE_MAX_USERNAME: usize = MAX_USERNAME_LENGTH + 1;
const ABOVE_MAX_DELAY: u64 = MAX_LOGIN_DELAY_MS + 1;

// =========================================================================
// Validation Tests - Validation Config
// =========================================================================

#[test]
#[serial]
fn given_min_password_length_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set("WH_MIN_PASSWORD_LENGTH", &BELOW_MIN_PASSWORD.to_string());

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_password_length_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set("WH_MAX_PASSWORD_LENGTH", &ABOVE_MAX_PASSWORD.to_string());

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_password_below_min_password_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _min = EnvGuard::set("WH_MIN_PASSWORD_LENGTH", "10");
    let _max = EnvGuard::set("WH_MAX_PASSWORD_LENGTH", "5");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_username_length_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set("WH_MAX_USERNAME_LENGTH", &ABOVE_MAX_USERNAME.to_string());

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_login_delay_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _delay = EnvGuard::set("WH_LOGIN_DELAY_MS", &ABOVE_MAX_DELAY.to_string());

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_limits_at_bounds_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _min = EnvGuard::set("WH_MIN_PASSWORD_LENGTH", &MIN_PASSWORD_LENGTH.to_string());
    let _max = EnvGuard::set("WH_MAX_PASSWORD_LENGTH", &MAX_PASSWORD_LENGTH.to_string());
    let _user = EnvGuard::set("WH_MAX_USERNAME_LENGTH", &MAX_USERNAME_LENGTH.to_string());

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_log_file_with_directory_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("WH_LOG_FILE", "logs/app.log");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_plain_log_file_name_when_validate_then_ok() {
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("WH_LOG_FILE", "washoku.log");

    let result = Config::load().unwrap().validate();

    assert_that!(result, ok(anything()));
}
