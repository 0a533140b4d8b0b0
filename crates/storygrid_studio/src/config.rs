//! Studio configuration.
//!
//! Sources, lowest to highest precedence:
//! 1. Bundled defaults (`storygrid.toml` shipped with the library)
//! 2. `~/.config/storygrid/storygrid.toml`
//! 3. `./storygrid.toml`
//!
//! User files are optional and skipped when absent. Every field has a
//! default, so a user file only needs the keys it changes:
//!
//! ```toml
//! [models]
//! image = "gemini-2.5-flash-image"
//!
//! [parser]
//! lead_ins = ["镜头", "scene", "shot"]
//! ```

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storygrid_core::{ImageConfig, LabelConfig};
use storygrid_error::{ConfigError, StoryGridError, StoryGridResult};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../storygrid.toml");

/// Which model serves which kind of request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelsConfig {
    /// Script, translation and refinement requests
    #[serde(default = "default_text_model")]
    pub text: String,
    /// Composite storyboard requests
    #[serde(default = "default_image_model")]
    pub image: String,
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            text: default_text_model(),
            image: default_image_model(),
        }
    }
}

/// Composite image options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageSettings {
    /// Canvas aspect ratio
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
}

fn default_aspect_ratio() -> String {
    "16:9".to_string()
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            aspect_ratio: default_aspect_ratio(),
        }
    }
}

/// Where exported storyboards go.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Export directory
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

/// Gemini endpoint overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct GeminiSettings {
    /// API root; the public endpoint when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Complete studio configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct StudioConfig {
    /// Model selection
    #[serde(default)]
    pub models: ModelsConfig,
    /// Composite image options
    #[serde(default)]
    pub image: ImageSettings,
    /// Script label recognition
    #[serde(default)]
    pub parser: LabelConfig,
    /// Export location
    #[serde(default)]
    pub output: OutputConfig,
    /// Endpoint overrides
    #[serde(default)]
    pub gemini: GeminiSettings,
}

impl StudioConfig {
    /// Load a single configuration file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file is missing or malformed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StoryGridResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StoryGridError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryGridError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the text is not valid TOML or has
    /// fields of the wrong type.
    pub fn from_toml_str(toml: &str) -> StoryGridResult<Self> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .map_err(|e| {
                StoryGridError::from(ConfigError::new(format!(
                    "Failed to read configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryGridError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: current dir > home dir > bundled.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use storygrid_studio::StudioConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = StudioConfig::load()?;
    /// println!("text model: {}", config.models.text);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> StoryGridResult<Self> {
        Self::load_from(dirs::home_dir().as_deref(), Path::new("."))
    }

    /// Layered load with explicit home and working directories.
    ///
    /// Reads `<home>/.config/storygrid/storygrid.toml` and
    /// `<working_dir>/storygrid.toml` over the bundled defaults. Later files
    /// replace earlier values key by key; arrays are replaced whole.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a present file cannot be parsed.
    #[instrument]
    pub fn load_from(home_dir: Option<&Path>, working_dir: &Path) -> StoryGridResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = home_dir {
            let home_config = home.join(".config/storygrid/storygrid.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        let local = working_dir.join("storygrid");
        builder = builder.add_source(File::with_name(&local.to_string_lossy()).required(false));

        builder
            .build()
            .map_err(|e| {
                StoryGridError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryGridError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// The bundled defaults, ignoring any user files.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file itself is broken.
    pub fn bundled() -> StoryGridResult<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Image options in request form.
    pub fn image_config(&self) -> ImageConfig {
        ImageConfig {
            aspect_ratio: self.image.aspect_ratio.clone(),
        }
    }
}
