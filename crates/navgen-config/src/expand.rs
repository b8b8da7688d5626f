//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(|cow| cow.into_owned())
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NAVGEN_TEST_VAR", "docs/api");
        }
        let result = expand_env("${NAVGEN_TEST_VAR}", "base_path").unwrap();
        assert_eq!(result, "docs/api");
        unsafe {
            std::env::remove_var("NAVGEN_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NAVGEN_UNSET_VAR");
        }
        let result = expand_env("${NAVGEN_UNSET_VAR:-docs}", "base_path").unwrap();
        assert_eq!(result, "docs");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NAVGEN_TEST_VERSION", "0.8.1");
        }
        let result = expand_env("docs/api/${NAVGEN_TEST_VERSION}", "base_path").unwrap();
        assert_eq!(result, "docs/api/0.8.1");
        unsafe {
            std::env::remove_var("NAVGEN_TEST_VERSION");
        }
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NAVGEN_MISSING_VAR");
        }
        let result = expand_env("${NAVGEN_MISSING_VAR}", "base_path");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("NAVGEN_MISSING_VAR"));
        assert!(err.to_string().contains("base_path"));
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("docs/api/0.8.1", "base_path").unwrap();
        assert_eq!(result, "docs/api/0.8.1");
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        // $VAR without braces should not be expanded
        let result = expand_env("docs/$VERSION", "base_path").unwrap();
        assert_eq!(result, "docs/$VERSION");
    }
}
