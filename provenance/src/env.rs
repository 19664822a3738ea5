//! Boolean flags read from environment variables.
//!
//! ```no_run
//! use provenance::env::bool_env;
//!
//! let debug = bool_env("DEBUG", false);
//! let cache = bool_env("USE_CACHE", "true");
//! ```

use std::env;

/// Values that read as `false`. Anything else non-empty is `true`.
const FALSE_VALUES: &[&str] = &["False", "false", "0", ""];

/// Fallback used by [`bool_env`] when the variable is not set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagDefault {
    Bool(bool),
    Text(String),
}

impl FlagDefault {
    pub fn resolve(&self) -> bool {
        match self {
            FlagDefault::Bool(value) => *value,
            FlagDefault::Text(text) => parse_bool(text),
        }
    }
}

impl Default for FlagDefault {
    fn default() -> Self {
        FlagDefault::Bool(false)
    }
}

impl From<bool> for FlagDefault {
    fn from(value: bool) -> Self {
        FlagDefault::Bool(value)
    }
}

impl From<&str> for FlagDefault {
    fn from(value: &str) -> Self {
        FlagDefault::Text(value.to_string())
    }
}

impl From<String> for FlagDefault {
    fn from(value: String) -> Self {
        FlagDefault::Text(value)
    }
}

/// Coerce a string to a boolean.
///
/// `"False"`, `"false"`, `"0"` and the empty string are `false`; every other
/// string is `true`. Matching is exact, so `"FALSE"` and `" 0"` are `true`.
pub fn parse_bool(value: &str) -> bool {
    !FALSE_VALUES.iter().any(|falsey| *falsey == value)
}

/// Read `var_name` from the environment as a boolean, falling back to
/// `default` when it is not set.
pub fn bool_env(var_name: &str, default: impl Into<FlagDefault>) -> bool {
    match env::var_os(var_name) {
        Some(value) => parse_bool(&value.to_string_lossy()),
        None => default.into().resolve(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VAR: &str = "PROVENANCE_TEST_FLAG";

    #[test]
    fn test_parse_bool_false_values() {
        assert!(!parse_bool("False"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn test_parse_bool_true_values() {
        for value in ["True", "true", "1", "yes", "no", "FALSE", " ", "0.0", "off"] {
            assert!(parse_bool(value), "{:?} should be true", value);
        }
    }

    #[test]
    fn test_flag_default_resolution() {
        assert!(!FlagDefault::default().resolve());
        assert!(FlagDefault::from(true).resolve());
        assert!(!FlagDefault::from(false).resolve());
        assert!(FlagDefault::from("on").resolve());
        assert!(!FlagDefault::from("false").resolve());
        assert!(!FlagDefault::from(String::new()).resolve());
    }

    #[test]
    #[serial]
    fn test_bool_env_set_values() {
        let cases = [
            ("False", false),
            ("false", false),
            ("0", false),
            ("", false),
            ("yes", true),
            ("True", true),
            ("1", true),
        ];

        for (value, expected) in cases {
            env::set_var(VAR, value);
            assert_eq!(bool_env(VAR, false), expected, "value {:?}", value);
            // A set variable always wins over the default.
            assert_eq!(bool_env(VAR, true), expected, "value {:?}", value);
        }

        env::remove_var(VAR);
    }

    #[test]
    #[serial]
    fn test_bool_env_unset_uses_default() {
        env::remove_var(VAR);

        assert!(bool_env(VAR, true));
        assert!(!bool_env(VAR, false));
        assert!(!bool_env(VAR, FlagDefault::default()));
        assert!(bool_env(VAR, "yes"));
        assert!(!bool_env(VAR, "0"));
        assert!(!bool_env(VAR, ""));
    }

    #[test]
    #[serial]
    fn test_bool_env_is_idempotent() {
        env::set_var(VAR, "0");
        let first = bool_env(VAR, true);
        let second = bool_env(VAR, true);
        assert_eq!(first, second);
        assert_eq!(env::var(VAR).unwrap(), "0");

        env::remove_var(VAR);
        assert_eq!(bool_env(VAR, true), bool_env(VAR, true));
    }
}
