use serde::Deserialize;
use std::path::Path;

/// Upper bound on non-blank lines per request.
pub const DEFAULT_MAX_COLORS: usize = 256;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Maximum number of colors accepted in one request
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,

    /// Default lightness factor for the CLI
    #[serde(default = "default_factor")]
    pub j_factor: f64,

    /// Default colorfulness factor for the CLI
    #[serde(default = "default_factor")]
    pub m_factor: f64,
}

fn default_max_colors() -> usize {
    DEFAULT_MAX_COLORS
}

fn default_factor() -> f64 {
    1.0
}

impl AppConfig {
    /// Load configuration from the file named by `CONFIG_FILE`, if set.
    pub fn from_env() -> Self {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_file(Path::new(&path)),
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a YAML file, falling back to defaults.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    let config = config.validated();
                    tracing::info!(
                        path = %path.display(),
                        max_colors = config.max_colors,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Raise a zero color limit to one.
    fn validated(mut self) -> Self {
        if self.max_colors == 0 {
            tracing::warn!("max_colors must be at least 1, using 1");
            self.max_colors = 1;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_colors: DEFAULT_MAX_COLORS,
            j_factor: 1.0,
            m_factor: 1.0,
        }
    }
}
