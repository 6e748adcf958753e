//! `${VAR}` expansion for string settings.
//!
//! - `${VAR}` is replaced by the value of VAR; an unset VAR is an error
//! - `${VAR:-default}` falls back to `default` when VAR is unset
//!
//! Bare `$VAR` is left alone so delimiters like `" $ "` survive.

use crate::ConfigError;

/// Expand `${VAR}` references in `value`.
///
/// `field` names the setting in error messages (e.g. `list.delimiter`).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(UnsetVar(var.to_owned())),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Expand an optional setting, keeping `None` as is.
pub(crate) fn expand_env_opt(
    value: Option<&str>,
    field: &str,
) -> Result<Option<String>, ConfigError> {
    value.map(|v| expand_env(v, field)).transpose()
}

/// Name of a variable that was referenced but not set.
struct UnsetVar(String);
