//! Persistent preference storage for the location selector.
//!
//! [`PreferenceStore`] is the async key/value contract; [`MemoryStore`] and
//! [`JsonFileStore`] back it. [`Preferences`] layers the typed favorites,
//! last-selected and feature-flag accessors on top of any store.

pub mod error;
pub mod file;
pub mod memory;
pub mod preferences;
pub mod store;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use preferences::{toggle_in_place, Preferences};
pub use store::PreferenceStore;
