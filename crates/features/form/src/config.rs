use crate::error::{ConfigError, ConfigErrorExt};
use config::{Config, Environment, File};
use fgate_domain::config::FormConfig;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

const ENV_PREFIX: &str = "FGATE";
const ENV_SEPARATOR: &str = "__";
const DEFAULT_CONFIG_STEM: &str = "form";

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// Layered strategy:
/// 1. **Base file**: settings from a file (e.g. `form.toml`). If no path is
///    provided, the `form` file in the current working directory is used.
/// 2. **Environment overrides**: values from variables prefixed with
///    `FGATE__`, nested keys separated by double underscores
///    (`FGATE__SUBMIT_DELAY_MS`, `FGATE__POLICY__MIN_NAME_LEN`).
///
/// # Errors
/// Returns [`ConfigError`] if the file cannot be found, an override is
/// malformed, or the content does not match the shape of `T`.
///
/// # Example
/// ```rust,no_run
/// use fgate_domain::config::FormConfig;
/// use fgate_form::config::load_config;
///
/// let config: FormConfig = load_config(Some("config/form.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_STEM), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(env_source());

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads a [`FormConfig`], treating the base file as optional.
///
/// Missing file plus empty environment yields the stock defaults, so an
/// embedding application can always start.
///
/// # Errors
/// Returns [`ConfigError`] if a present file or an override is malformed.
pub fn load_form_config(path: Option<impl AsRef<Path>>) -> Result<FormConfig, ConfigError> {
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_STEM), |p| p.as_ref().to_path_buf());

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(env_source())
        .build()
        .context("Failed to build form config")?
        .try_deserialize::<FormConfig>()
        .context("Failed to deserialize form config")?;

    Ok(config)
}

fn env_source() -> Environment {
    // try_parsing lets numeric overrides land in u64/usize fields.
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .convert_case(config::Case::Snake)
        .try_parsing(true)
}
