//! Domain types and configuration for the Okaeri location selector.
//!
//! Holds the option catalog snapshot, the keyword category table and its
//! classifier, the feature-flag set, and env-driven application config.

pub mod app_config;
pub mod categories;
pub mod config;
pub mod error;
pub mod flags;
pub mod options;

pub use app_config::{AppConfig, Environment, PreferenceKeys};
pub use categories::{default_categories, load_categories, Category, CategoryTable};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use flags::{FeatureFlag, FeatureFlags, PageSurface, SelectorFeatures};
pub use options::{load_catalog, Catalog, LocationOption};
