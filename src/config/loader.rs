//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CuraConfig;
use crate::domain::errors::CuraError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`CuraConfig`]
/// 4. Applies environment variable overrides (`CURA_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsing fails, a
/// referenced environment variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use cura::config::load_config;
///
/// let config = load_config("cura.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CuraConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CuraError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CuraError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: CuraConfig = toml::from_str(&contents)
        .map_err(|e| CuraError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        CuraError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static pattern");
    let mut missing_vars = Vec::new();

    let result = re.replace_all(input, |caps: &regex::Captures<'_>| {
        let name = &caps[1];
        match std::env::var(name) {
            Ok(value) => value,
            Err(_) => {
                missing_vars.push(name.to_string());
                String::new()
            }
        }
    });

    if !missing_vars.is_empty() {
        return Err(CuraError::Configuration(format!(
            "Environment variable(s) not set: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result.into_owned())
}

/// Applies `CURA_*` environment variable overrides to a parsed configuration
fn apply_env_overrides(config: &mut CuraConfig) {
    if let Ok(level) = std::env::var("CURA_APPLICATION_LOG_LEVEL") {
        config.application.log_level = level;
    }
    if let Ok(path) = std::env::var("CURA_DATA_PATIENTS_FILE") {
        config.data.patients_file = path;
    }
    if let Ok(path) = std::env::var("CURA_DATA_DOCTORS_FILE") {
        config.data.doctors_file = path;
    }
    if let Ok(path) = std::env::var("CURA_DATA_APPOINTMENTS_FILE") {
        config.data.appointments_file = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_env_vars_replaces_set_variable() {
        std::env::set_var("CURA_TEST_SUBST_VAR", "data/patients.csv");
        let out = substitute_env_vars("file = \"${CURA_TEST_SUBST_VAR}\"").unwrap();
        assert_eq!(out, "file = \"data/patients.csv\"");
        std::env::remove_var("CURA_TEST_SUBST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing_variable_fails() {
        let err = substitute_env_vars("file = \"${CURA_TEST_DEFINITELY_UNSET}\"").unwrap_err();
        assert!(err.to_string().contains("CURA_TEST_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_substitute_env_vars_passthrough() {
        let input = "name = \"cura\"";
        assert_eq!(substitute_env_vars(input).unwrap(), input);
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/cura.toml").unwrap_err();
        assert!(matches!(err, CuraError::Configuration(_)));
        assert!(err.to_string().contains("not found"));
    }
}
