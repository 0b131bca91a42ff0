//! Location picker layered over a native selection control.
//!
//! The pure pieces ([`filter`], [`resolve`]) decide what is listed and which
//! entry starts selected. [`LocationSelector`] owns the transient view state,
//! talks to the preference store, and keeps the native control's value in
//! step with its own "currently selected" display.

pub mod control;
pub mod error;
pub mod filter;
pub mod resolve;
pub mod selector;
pub mod view;

pub use control::{NativeControl, SelectControl};
pub use error::SelectorError;
pub use filter::{filter_options, ActiveFilter, EmptyState, FilterInput};
pub use resolve::{resolve_initial, InitialSelection, SelectionSource};
pub use selector::{LocationSelector, SelectOutcome, SelectorConfig, SelectorState};
pub use view::{ListItem, ListView, SelectorView, Tab};
