use crate::error::{Result, SiteCopyError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILES: &[&str] = &["sitecopy.toml", ".sitecopy.toml"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory; relative paths resolve against the run root.
    pub directory: PathBuf,
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Extension of template files picked up by directory sources.
    pub template_extension: String,
    /// Candidates ending in `.<ext>` for any of these are dropped.
    pub image_extensions: Vec<String>,
    /// Template candidates containing this token are dropped.
    pub styling_marker: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("website_content"),
            extension: "md".to_string(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            template_extension: "tsx".to_string(),
            image_extensions: vec![
                "png".to_string(),
                "jpg".to_string(),
                "jpeg".to_string(),
                "webp".to_string(),
                "svg".to_string(),
            ],
            styling_marker: "className".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SiteCopyError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| SiteCopyError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| SiteCopyError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    /// Loads `config_path` if given, otherwise the first default config file
    /// found under `root`, otherwise the built-in defaults.
    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>, root: &Path) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                for default_path in DEFAULT_CONFIG_FILES {
                    let candidate = root.join(default_path);
                    if candidate.exists() {
                        return Self::load_from_file(candidate);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref output_dir) = cli_args.output_dir {
            self.output.directory = output_dir.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.directory.as_os_str().is_empty() {
            return Err(SiteCopyError::Config {
                message: "Output directory must not be empty".to_string(),
            });
        }

        validate_extension("Output extension", &self.output.extension)?;
        validate_extension("Template extension", &self.extraction.template_extension)?;

        for ext in &self.extraction.image_extensions {
            validate_extension("Image extension", ext)?;
        }

        if self.extraction.styling_marker.trim().is_empty() {
            return Err(SiteCopyError::Config {
                message: "Styling marker must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Output directory as seen from `root`.
    pub fn output_directory(&self, root: &Path) -> PathBuf {
        if self.output.directory.is_absolute() {
            self.output.directory.clone()
        } else {
            root.join(&self.output.directory)
        }
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

fn validate_extension(label: &str, ext: &str) -> Result<()> {
    if ext.trim().is_empty() {
        return Err(SiteCopyError::Config {
            message: format!("{} must not be empty", label),
        });
    }

    if ext.starts_with('.') {
        return Err(SiteCopyError::Config {
            message: format!("{} must be given without a leading dot: {}", label, ext),
        });
    }

    Ok(())
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub output_dir: Option<PathBuf>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }
}
