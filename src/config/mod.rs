//! Configuration file support for sketchboard.
//!
//! Loads user settings from `~/.config/sketchboard/config.toml`: sketch
//! rendering style, freehand stroke size, text layout metrics, and zoom
//! behavior. If no config file exists, sensible defaults are used
//! automatically.

pub mod types;

pub use types::{FreehandConfig, SketchConfig, TextConfig, ZoomConfig};

use crate::scene::{FontSpec, SketchStyle};
use anyhow::{Context, Result, bail};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure containing all user settings.
///
/// All fields have defaults and may be omitted from the config file.
///
/// # Example TOML
/// ```toml
/// [sketch]
/// seed = 5
/// roughness = 0.2
/// stroke_width = 1.2
///
/// [freehand]
/// size = 3.0
///
/// [text]
/// font_family = "Noto Sans Thai Looped"
/// font_size = 16.0
/// line_height_factor = 1.65
///
/// [zoom]
/// step = 0.1
/// min = 0.1
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Sketch-rendering style for lines and rectangles
    #[serde(default)]
    pub sketch: SketchConfig,

    /// Freehand stroke settings
    #[serde(default)]
    pub freehand: FreehandConfig,

    /// Text layout settings
    #[serde(default)]
    pub text: TextConfig,

    /// Zoom behavior
    #[serde(default)]
    pub zoom: ZoomConfig,
}

impl Config {
    /// Loads configuration from the default path, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory available; using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file {} not found; using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Default config file location (`~/.config/sketchboard/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sketchboard").join("config.toml"))
    }

    /// Validates all settings against their documented ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=10.0).contains(&self.sketch.roughness) {
            bail!("sketch.roughness must be between 0.0 and 10.0");
        }
        if !(0.1..=20.0).contains(&self.sketch.stroke_width) {
            bail!("sketch.stroke_width must be between 0.1 and 20.0");
        }
        if !(0.5..=50.0).contains(&self.freehand.size) {
            bail!("freehand.size must be between 0.5 and 50.0");
        }
        if !(4.0..=200.0).contains(&self.text.font_size) {
            bail!("text.font_size must be between 4.0 and 200.0");
        }
        if !(0.5..=4.0).contains(&self.text.line_height_factor) {
            bail!("text.line_height_factor must be between 0.5 and 4.0");
        }
        if !(0.1..=2.0).contains(&self.text.advance_factor) {
            bail!("text.advance_factor must be between 0.1 and 2.0");
        }
        if !(0.01..=1.0).contains(&self.zoom.step) {
            bail!("zoom.step must be between 0.01 and 1.0");
        }
        if !(0.01..=1.0).contains(&self.zoom.min) {
            bail!("zoom.min must be between 0.01 and 1.0");
        }
        Ok(())
    }

    /// Builds the sketch style shared by every shape constructor call.
    pub fn sketch_style(&self) -> SketchStyle {
        SketchStyle {
            seed: self.sketch.seed,
            roughness: self.sketch.roughness,
            stroke_width: self.sketch.stroke_width,
        }
    }

    /// Builds the font spec handed to the text-measurement collaborator.
    pub fn font_spec(&self) -> FontSpec {
        FontSpec {
            family: self.text.font_family.clone(),
            size: self.text.font_size,
            line_height_factor: self.text.line_height_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_pass_validation() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.sketch.seed, 5);
        assert_eq!(config.zoom.step, 0.1);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[sketch]\nroughness = 1.5").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.sketch.roughness, 1.5);
        assert_eq!(config.sketch.stroke_width, 1.2);
        assert_eq!(config.text.font_size, 16.0);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let cases = [
            "[sketch]\nroughness = -1.0",
            "[sketch]\nstroke_width = 0.0",
            "[freehand]\nsize = 0.0",
            "[text]\nfont_size = 0.0",
            "[text]\nline_height_factor = 0.0",
            "[text]\nadvance_factor = 0.0",
            "[zoom]\nstep = 0.0",
            "[zoom]\nmin = 0.0",
        ];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        for snippet in cases {
            fs::write(&path, snippet).unwrap();
            assert!(
                Config::load_from(&path).is_err(),
                "accepted out-of-range config: {snippet}"
            );
        }
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "not toml at all [").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn sketch_style_mirrors_config() {
        let config = Config::default();
        let style = config.sketch_style();
        assert_eq!(style.seed, 5);
        assert_eq!(style.roughness, 0.2);
        assert_eq!(style.stroke_width, 1.2);
    }
}
