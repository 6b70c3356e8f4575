//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for image-studio
#[derive(Parser, Debug)]
#[command(name = "image-studio")]
#[command(author, version, about = "Generate and transform images from the terminal")]
#[command(long_about = r#"
image-studio sends prompts and images to a generation service and keeps a
history of the results.

Models:
  fastImage          Fast Image (LCM), prompt only
  stableDiffusionXL  Stable Diffusion XL, prompt only
  illusionDiffusion  Illusion Diffusion, prompt + preset base image
  removeBg           Remove Background, needs --attach
  upscale            Upscale, needs --attach

Configuration files are loaded from (in priority order):
1. STUDIO_* environment variables (e.g. STUDIO_SERVICE__BASE_URL)
2. --config <path>     Explicit config file
3. ./studio.toml       Project-level config
4. ~/.config/image-studio/config.toml   Global config

Example:
  image-studio "a lighthouse in a storm, oil painting"
  image-studio -m illusionDiffusion --base-image 2 "a medieval village"
  image-studio -m removeBg --attach ./portrait.png --save
  image-studio --interactive
"#)]
pub struct Cli {
    /// The prompt to submit (not required in interactive mode)
    pub prompt: Option<String>,

    /// Start the interactive session
    #[arg(short, long)]
    pub interactive: bool,

    /// Model to use (fastImage, stableDiffusionXL, illusionDiffusion, removeBg, upscale)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Image to upload with the request
    #[arg(short, long, value_name = "PATH")]
    pub attach: Option<String>,

    /// Preset base image index (illusionDiffusion)
    #[arg(short, long, value_name = "INDEX")]
    pub base_image: Option<usize>,

    /// Save the resulting image to the save directory
    #[arg(short, long)]
    pub save: bool,

    /// Override the save directory
    #[arg(long, value_name = "DIR")]
    pub save_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_one_shot_args() {
        let cli = Cli::parse_from([
            "image-studio",
            "-m",
            "removeBg",
            "--attach",
            "./me.png",
            "--save",
            "-vv",
        ]);
        assert!(cli.prompt.is_none());
        assert_eq!(cli.model.as_deref(), Some("removeBg"));
        assert_eq!(cli.attach.as_deref(), Some("./me.png"));
        assert!(cli.save);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.interactive);
    }

    #[test]
    fn test_prompt_and_base_image() {
        let cli = Cli::parse_from(["image-studio", "--base-image", "3", "a village"]);
        assert_eq!(cli.prompt.as_deref(), Some("a village"));
        assert_eq!(cli.base_image, Some(3));
    }
}
