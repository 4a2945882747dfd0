use std::collections::BTreeMap;
use std::path::Path;

use cubestate::{FaceColor, Rgb};
use serde::Deserialize;

/// Settings file that is loaded if it exists and no other file is given.
const DEFAULT_SETTINGS_FILE: &str = "cubestate.yaml";
const SETTINGS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
/// Prefix for environment variables that override settings, such as
/// `CUBESTATE_SIZE`.
const ENV_PREFIX: &str = "CUBESTATE";

/// User settings, used when a command-line flag is omitted.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct Settings {
    /// Cube size for new cubes.
    pub size: i32,
    /// Number of twists in a scramble.
    pub scramble_length: u32,
    /// Whether to color the text layout of the faces.
    pub color_output: bool,
    /// Display colors that replace the built-in ones, such as
    /// `red: '#ff0000'`.
    pub palette: BTreeMap<FaceColor, Rgb>,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            size: cubestate::DEFAULT_SIZE.into(),
            scramble_length: 25,
            color_output: true,
            palette: BTreeMap::new(),
        }
    }
}
impl Settings {
    /// Returns the display color for `color`.
    pub fn rgb(&self, color: FaceColor) -> Rgb {
        self.palette.get(&color).copied().unwrap_or(color.rgb())
    }

    /// Loads settings from built-in defaults, then the settings file, then
    /// environment variables. If loading fails, the defaults are returned.
    ///
    /// If `path` is `None`, the default settings file is read only if it
    /// exists.
    pub fn load(path: Option<&Path>) -> Self {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(DEFAULT_SETTINGS_FILE)).required(false),
        };
        let env = config::Environment::with_prefix(ENV_PREFIX).try_parsing(true);

        Self::load_from_sources(file.format(SETTINGS_FILE_FORMAT), env).unwrap_or_else(|e| {
            log::warn!("Error loading settings: {e}");
            Self::default()
        })
    }

    fn load_from_sources(
        file: impl config::Source + Send + Sync + 'static,
        env: impl config::Source + Send + Sync + 'static,
    ) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("size", i64::from(defaults.size))?
            .set_default("scramble_length", i64::from(defaults.scramble_length))?
            .set_default("color_output", defaults.color_output)?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}
