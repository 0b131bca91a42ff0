use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

pub const DEFAULT_FAVORITES_KEY: &str = "jobcanFavorites";
pub const DEFAULT_LAST_SELECTED_KEY: &str = "jobcanLastSelectedLocation";
pub const DEFAULT_FEATURE_FLAGS_KEY: &str = "jobcanFeatureFlags";

/// Storage key names used by the preference accessors.
///
/// Passed explicitly to every accessor so two stores (or two test fixtures)
/// can use disjoint key spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceKeys {
    pub favorites: String,
    pub last_selected: String,
    pub feature_flags: String,
}

impl Default for PreferenceKeys {
    fn default() -> Self {
        Self {
            favorites: DEFAULT_FAVORITES_KEY.to_string(),
            last_selected: DEFAULT_LAST_SELECTED_KEY.to_string(),
            feature_flags: DEFAULT_FEATURE_FLAGS_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// JSON file backing the preference store.
    pub state_path: PathBuf,
    /// Optional YAML category table replacing the built-in one.
    pub categories_path: Option<PathBuf>,
    pub keys: PreferenceKeys,
}
