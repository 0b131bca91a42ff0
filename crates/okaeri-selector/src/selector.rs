//! The stateful picker.
//!
//! Lifecycle is `Uninitialized -> LoadingPreferences -> Ready`. Construction
//! snapshots the native control into a [`Catalog`]; [`LocationSelector::initialize`]
//! loads favorites and the last selection, resolves the initial entry and
//! writes it back to the control. Interactions are accepted once `Ready`.

use std::sync::Arc;

use okaeri_core::{Catalog, CategoryTable, LocationOption, PageSurface, SelectorFeatures};
use okaeri_store::Preferences;

use crate::control::NativeControl;
use crate::error::SelectorError;
use crate::filter::{filter_options, ActiveFilter, EmptyState, FilterInput};
use crate::resolve::{resolve_initial, SelectionSource};
use crate::view::{ListItem, ListView, SelectorView, Tab};

const ALL_TAB_LABEL: &str = "すべて";
const FAVORITES_TAB_LABEL: &str = "⭐ お気に入り";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    Uninitialized,
    LoadingPreferences,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    /// The value is not in the catalog; nothing changed.
    NotFound,
}

/// Construction-time settings, fixed for the selector's lifetime.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    pub surface: PageSurface,
    pub features: SelectorFeatures,
    pub categories: Arc<CategoryTable>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            surface: PageSurface::Main,
            features: SelectorFeatures::default(),
            categories: Arc::new(CategoryTable::default()),
        }
    }
}

pub struct LocationSelector<C> {
    control: C,
    catalog: Catalog,
    preferences: Preferences,
    config: SelectorConfig,
    favorites: Vec<String>,
    active_filter: ActiveFilter,
    search_text: String,
    selected_label: Option<String>,
    state: SelectorState,
}

impl<C: NativeControl> LocationSelector<C> {
    /// Snapshot `control` and build an uninitialized selector.
    #[must_use]
    pub fn new(control: C, preferences: Preferences, config: SelectorConfig) -> Self {
        let catalog = Catalog::new(control.options());
        tracing::debug!(
            options = catalog.len(),
            surface = ?config.surface,
            "location catalog captured"
        );
        Self {
            control,
            catalog,
            preferences,
            config,
            favorites: Vec::new(),
            active_filter: ActiveFilter::All,
            search_text: String::new(),
            selected_label: None,
            state: SelectorState::Uninitialized,
        }
    }

    /// Build a selector for `surface` if the stored feature flags enable it
    /// there and the control is worth enhancing. Returns `None` otherwise and
    /// leaves the native control untouched.
    pub async fn attach(
        control: C,
        preferences: Preferences,
        surface: PageSurface,
        categories: Arc<CategoryTable>,
    ) -> Option<Self> {
        let flags = preferences.load_feature_flags().await;
        let Some(features) = flags.selector_features(surface) else {
            tracing::info!(?surface, "location selector disabled by feature flags");
            return None;
        };
        let option_count = control.options().len();
        if !surface.should_enhance(option_count) {
            tracing::debug!(?surface, option_count, "control has too few options; not enhancing");
            return None;
        }
        Some(Self::new(
            control,
            preferences,
            SelectorConfig {
                surface,
                features,
                categories,
            },
        ))
    }

    /// Load preferences and apply the initial selection. Runs once; later
    /// calls return `None` without touching anything.
    ///
    /// Returns where the initial selection came from, if any entry resolved.
    pub async fn initialize(&mut self) -> Option<SelectionSource> {
        if self.state != SelectorState::Uninitialized {
            tracing::debug!(state = ?self.state, "initialize called twice; ignoring");
            return None;
        }
        self.state = SelectorState::LoadingPreferences;

        let features = self.config.features;
        self.favorites = if features.favorites {
            self.preferences.load_favorites().await
        } else {
            Vec::new()
        };
        let last_selected = if features.remember_last_selection {
            self.preferences.load_last_selected().await
        } else {
            None
        };

        let resolved = resolve_initial(
            &self.catalog,
            last_selected.as_deref(),
            &self.favorites,
            features,
        )
        .map(|s| (s.option.clone(), s.source));

        let source = resolved.map(|(option, source)| {
            tracing::info!(value = %option.value, %source, "initial location resolved");
            self.apply_to_control(&option);
            source
        });

        self.state = SelectorState::Ready;
        source
    }

    /// Select the catalog entry with `value`, write it to the native control
    /// and remember it if that feature is on.
    ///
    /// The control and display are updated before the preference write, so a
    /// storage error leaves the selection applied but unremembered.
    ///
    /// # Errors
    ///
    /// [`SelectorError::NotReady`] before initialization;
    /// [`SelectorError::Store`] if remembering the selection fails.
    pub async fn select(&mut self, value: &str) -> Result<SelectOutcome, SelectorError> {
        self.ensure_ready()?;
        let Some(option) = self.catalog.find(value).cloned() else {
            tracing::debug!(value, "ignoring selection of unknown location");
            return Ok(SelectOutcome::NotFound);
        };

        self.apply_to_control(&option);

        if self.config.features.remember_last_selection {
            self.preferences.save_last_selected(&option.value).await?;
        }
        Ok(SelectOutcome::Selected)
    }

    /// Add or remove `value` from favorites. Returns `true` if it is now a favorite.
    ///
    /// The stored list is re-read first, so changes made by another selector
    /// sharing the store are kept.
    ///
    /// # Errors
    ///
    /// [`SelectorError::NotReady`] before initialization,
    /// [`SelectorError::FeatureDisabled`] if favorites are off, or
    /// [`SelectorError::Store`] if the write fails (in-memory favorites are
    /// then left unchanged).
    pub async fn toggle_favorite(&mut self, value: &str) -> Result<bool, SelectorError> {
        self.ensure_ready()?;
        if !self.config.features.favorites {
            return Err(SelectorError::FeatureDisabled("favorites"));
        }
        let updated = self.preferences.toggle_favorite(value).await?;
        let now_favorite = updated.iter().any(|f| f == value);
        self.favorites = updated;
        Ok(now_favorite)
    }

    /// Switch the active tab.
    ///
    /// # Errors
    ///
    /// [`SelectorError::FilterUnavailable`] if no rendered tab carries `filter`.
    pub fn switch_tab(&mut self, filter: ActiveFilter) -> Result<(), SelectorError> {
        if !self.offers(&filter) {
            return Err(SelectorError::FilterUnavailable(filter.token().to_string()));
        }
        self.active_filter = filter;
        Ok(())
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Options listed for the current search text and tab.
    #[must_use]
    pub fn visible_options(&self) -> Vec<&LocationOption> {
        filter_options(&self.filter_input())
    }

    #[must_use]
    pub fn render(&self) -> SelectorView {
        SelectorView {
            container_class: self.config.surface.container_class(),
            selected_label: self.selected_label.clone(),
            search_enabled: self.config.features.search,
            search_text: self.search_text.clone(),
            favorites_enabled: self.config.features.favorites,
            tabs: self.tabs(),
            list: self.list_view(),
        }
    }

    /// Tabs in display order: all, favorites, then each category.
    #[must_use]
    pub fn tabs(&self) -> Vec<Tab> {
        let mut tabs = vec![self.tab(ActiveFilter::All, ALL_TAB_LABEL)];
        if self.config.features.favorites {
            tabs.push(self.tab(ActiveFilter::Favorites, FAVORITES_TAB_LABEL));
        }
        if self.config.features.categories {
            for category in self.config.categories.categories() {
                tabs.push(self.tab(ActiveFilter::Category(category.key.clone()), &category.label));
            }
        }
        tabs
    }

    #[must_use]
    pub fn state(&self) -> SelectorState {
        self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    #[must_use]
    pub fn active_filter(&self) -> &ActiveFilter {
        &self.active_filter
    }

    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_label.as_deref()
    }

    #[must_use]
    pub fn control(&self) -> &C {
        &self.control
    }

    /// Host-page access to the control. Writes made here are not observed;
    /// the next render re-reads the control's value.
    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    fn ensure_ready(&self) -> Result<(), SelectorError> {
        if self.state == SelectorState::Ready {
            Ok(())
        } else {
            Err(SelectorError::NotReady)
        }
    }

    fn apply_to_control(&mut self, option: &LocationOption) {
        self.control.set_value(&option.value);
        self.control.dispatch_change();
        self.selected_label = Some(option.text.clone());
    }

    fn offers(&self, filter: &ActiveFilter) -> bool {
        match filter {
            ActiveFilter::All => true,
            ActiveFilter::Favorites => self.config.features.favorites,
            ActiveFilter::Category(key) => {
                self.config.features.categories && self.config.categories.get(key).is_some()
            }
        }
    }

    fn tab(&self, filter: ActiveFilter, label: &str) -> Tab {
        Tab {
            active: filter == self.active_filter,
            filter,
            label: label.to_string(),
        }
    }

    fn filter_input(&self) -> FilterInput<'_> {
        FilterInput {
            catalog: &self.catalog,
            favorites: &self.favorites,
            categories: &self.config.categories,
            features: self.config.features,
            active_filter: &self.active_filter,
            search_text: &self.search_text,
        }
    }

    fn list_view(&self) -> ListView {
        if self.state != SelectorState::Ready {
            return ListView::Loading;
        }
        let input = self.filter_input();
        let visible = filter_options(&input);
        if visible.is_empty() {
            return ListView::Empty(EmptyState::for_input(&input));
        }
        let current = self.control.value();
        let items = visible
            .into_iter()
            .map(|o| ListItem {
                value: o.value.clone(),
                text: o.text.clone(),
                favorite: self.favorites.iter().any(|f| *f == o.value),
                selected: o.value == current,
            })
            .collect();
        ListView::Items(items)
    }
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod tests;
