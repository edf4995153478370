use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base name probed when no explicit path is given (`featdeck.toml`, `featdeck.json`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "featdeck";

/// Prefix of environment overrides, e.g. `FEATDECK__PANEL__AUTO_MOUNT=false`.
pub const ENV_PREFIX: &str = "FEATDECK";

#[featdeck_derive::featdeck_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `FEATDECK__` environment variables.
///
/// Layers, lowest priority first:
/// 1. **File**: `path` when given (must exist), otherwise an optional
///    `featdeck.{toml,json,yaml,...}` in the working directory.
/// 2. **Environment**: `FEATDECK__SECTION__KEY` maps to `section.key`.
///
/// Fields missing from every layer fall back to `T`'s serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is
/// malformed, or the merged values do not fit `T`.
///
/// # Example
/// ```rust,no_run
/// use featdeck_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_NAME), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    if required {
        info!("Loading config from {}", effective_path.display());
    } else {
        debug!("Probing optional config {}", effective_path.display());
    }

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
