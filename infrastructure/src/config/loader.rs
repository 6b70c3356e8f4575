//! Configuration loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "image-studio";
const PROJECT_FILES: [&str; 2] = ["studio.toml", ".studio.toml"];
const ENV_PREFIX: &str = "STUDIO_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `STUDIO_SECTION__KEY`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./studio.toml` or `./.studio.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/image-studio/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut files = Vec::new();
        if let Some(global) = Self::global_config_path().filter(|p| p.exists()) {
            files.push(global);
        }
        if let Some(project) = Self::project_config_path() {
            files.push(project);
        }
        if let Some(path) = config_path {
            files.push(path.clone());
        }
        Self::figment(&files).extract().map_err(Box::new)
    }

    /// Defaults, then each file in order, then the environment
    pub fn figment(files: &[PathBuf]) -> Figment {
        let figment = files.iter().fold(
            Figment::new().merge(Serialized::defaults(FileConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        );
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// The project-level config file, if one exists
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [ env ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            println!("  [{}] Explicit: {}", mark(path), path.display());
        }

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND] Project: {}", path.display()),
            None => println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]),
        }

        if let Some(path) = Self::global_config_path() {
            println!("  [{}] Global:  {}", mark(&path), path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

fn mark(path: &Path) -> &'static str {
    if path.exists() { "FOUND" } else { "     " }
}
