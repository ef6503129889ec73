//! Structural validation rules for Sensu events
//!
//! Names follow the Sensu resource naming rule: non-empty, ASCII word
//! characters, dots and dashes only.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use validator::ValidationError;

use super::event_types::Check;

const NAME_PATTERN: &str = r"^[A-Za-z0-9_.\-]+$";

/// Minimum TTL accepted by the Sensu backend (seconds)
pub const MIN_CHECK_TTL: i64 = 5;

static NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn name_regex() -> &'static Regex {
    NAME_REGEX.get_or_init(|| Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"))
}

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Required resource name
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(error("name_empty", "name cannot be empty"));
    }
    if !name_regex().is_match(name) {
        return Err(error(
            "name_invalid",
            format!("name must match {NAME_PATTERN}"),
        ));
    }
    Ok(())
}

/// Optional resource name; empty means "not set"
pub fn validate_optional_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Ok(());
    }
    validate_name(name)
}

/// Cross-field rules on check scheduling and flap detection
pub fn validate_check_schedule(check: &Check) -> Result<(), ValidationError> {
    if check.ttl > 0 {
        if check.ttl <= i64::from(check.interval) {
            return Err(error(
                "ttl_interval",
                "ttl must be greater than check interval",
            ));
        }
        if check.ttl < MIN_CHECK_TTL {
            return Err(error(
                "ttl_minimum",
                format!("minimum ttl is {MIN_CHECK_TTL} seconds"),
            ));
        }
    }

    if check.low_flap_threshold != 0
        && check.high_flap_threshold != 0
        && check.low_flap_threshold >= check.high_flap_threshold
    {
        return Err(error(
            "flap_thresholds",
            "invalid flap thresholds",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_sensu_style_names() {
        assert!(validate_name("web-01").is_ok());
        assert!(validate_name("check_disk.usage").is_ok());
        assert!(validate_name("A1").is_ok());
    }

    #[test]
    fn should_reject_empty_name() {
        // Arrange & Act
        let result = validate_name("");

        // Assert
        let err = result.unwrap_err();
        assert_eq!(err.code, "name_empty");
        assert_eq!(err.message.as_deref(), Some("name cannot be empty"));
    }

    #[test]
    fn should_reject_names_with_invalid_characters() {
        for name in ["web 01", "web/01", "naïve", "a:b", "x\n"] {
            let err = validate_name(name).unwrap_err();
            assert_eq!(err.code, "name_invalid", "name {name:?}");
        }
    }

    #[test]
    fn should_accept_missing_optional_name() {
        assert!(validate_optional_name("").is_ok());
        assert!(validate_optional_name("agent").is_ok());
        assert!(validate_optional_name("bad name").is_err());
    }

    #[test]
    fn should_reject_ttl_not_greater_than_interval() {
        // Arrange
        let check = Check {
            interval: 60,
            ttl: 60,
            ..Check::new("disk")
        };

        // Act
        let err = validate_check_schedule(&check).unwrap_err();

        // Assert
        assert_eq!(err.code, "ttl_interval");
    }

    #[test]
    fn should_reject_ttl_below_minimum() {
        let check = Check {
            interval: 0,
            ttl: 3,
            ..Check::new("disk")
        };

        let err = validate_check_schedule(&check).unwrap_err();

        assert_eq!(err.code, "ttl_minimum");
    }

    #[test]
    fn should_reject_inverted_flap_thresholds() {
        let check = Check {
            low_flap_threshold: 40,
            high_flap_threshold: 20,
            ..Check::new("disk")
        };

        let err = validate_check_schedule(&check).unwrap_err();

        assert_eq!(err.code, "flap_thresholds");
    }

    #[test]
    fn should_accept_default_schedule() {
        assert!(validate_check_schedule(&Check::new("disk")).is_ok());

        let check = Check {
            interval: 30,
            ttl: 90,
            low_flap_threshold: 10,
            high_flap_threshold: 30,
            ..Check::new("disk")
        };
        assert!(validate_check_schedule(&check).is_ok());
    }
}
