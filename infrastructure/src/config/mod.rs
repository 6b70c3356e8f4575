//! Configuration file loading for image-studio
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `STUDIO_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./studio.toml` or `./.studio.toml`
//! 4. Global: `$XDG_CONFIG_HOME/image-studio/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBaseImage, FileConfig, FileLoggingConfig, FilePresetsConfig,
    FileServiceConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
