//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
const APP_DIR: &str = "fallible-flow";

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["flow.toml", ".flow.toml"];

/// Environment variable prefix; nested keys are separated by `__`
const ENV_PREFIX: &str = "FALLIBLE_FLOW_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `FALLIBLE_FLOW_ANIMAL__FAIL_WITH=...`
    /// 2. Explicit config path (if provided, must exist)
    /// 3. Project root: `./flow.toml` or `./.flow.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/fallible-flow/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Self::defaults();

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = Self::merge_file(figment, path)?;
        }

        Self::extract_with_env(figment)
    }

    /// Load defaults and environment only, skipping every file (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        Self::extract_with_env(Self::defaults())
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/fallible-flow/config.toml if set,
    /// otherwise falls back to the platform config directory
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     {}*", ENV_PREFIX);

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./flow.toml or ./.flow.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    fn extract_with_env(figment: Figment) -> Result<FileConfig, Box<figment::Error>> {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Merge an explicitly requested file, which unlike discovered files must exist
    fn merge_file(figment: Figment, path: &Path) -> Result<Figment, Box<figment::Error>> {
        if !path.is_file() {
            return Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }
        tracing::debug!("Loading config file {}", path.display());
        Ok(figment.merge(Toml::file(path)))
    }
}
