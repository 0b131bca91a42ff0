//! The list shown for a given search text and active tab.
//!
//! A non-empty search always scans the whole catalog; the active tab only
//! applies while the search box is empty (or search is disabled). Catalog
//! order is kept in every result.

use okaeri_core::{Catalog, CategoryTable, LocationOption, SelectorFeatures};

const NO_RESULTS_MESSAGE: &str = "該当する打刻場所がありません";

static ALL: ActiveFilter = ActiveFilter::All;

/// Tab scope used when no search text overrides it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    All,
    Favorites,
    /// A category key from the [`CategoryTable`].
    Category(String),
}

impl ActiveFilter {
    /// Tab token: `all`, `favorites`, or the category key.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            ActiveFilter::All => "all",
            ActiveFilter::Favorites => "favorites",
            ActiveFilter::Category(key) => key,
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "all" => ActiveFilter::All,
            "favorites" => ActiveFilter::Favorites,
            key => ActiveFilter::Category(key.to_string()),
        }
    }
}

impl std::fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Everything the filter reads. Borrowed so it can be evaluated on every
/// keystroke without cloning the catalog.
#[derive(Debug, Clone, Copy)]
pub struct FilterInput<'a> {
    pub catalog: &'a Catalog,
    pub favorites: &'a [String],
    pub categories: &'a CategoryTable,
    pub features: SelectorFeatures,
    pub active_filter: &'a ActiveFilter,
    pub search_text: &'a str,
}

impl<'a> FilterInput<'a> {
    /// The trimmed search text, if search is enabled and it is non-empty.
    #[must_use]
    pub fn active_search(&self) -> Option<&'a str> {
        if !self.features.search {
            return None;
        }
        let trimmed = self.search_text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// The tab actually applied. Tabs whose feature is off, and unknown
    /// categories, fall back to `All`.
    fn effective_filter(&self) -> &'a ActiveFilter {
        match self.active_filter {
            ActiveFilter::Favorites if !self.features.favorites => &ALL,
            ActiveFilter::Category(_) if !self.features.categories => &ALL,
            ActiveFilter::Category(key) if self.categories.get(key).is_none() => &ALL,
            other => other,
        }
    }
}

/// Compute the visible options.
#[must_use]
pub fn filter_options<'a>(input: &FilterInput<'a>) -> Vec<&'a LocationOption> {
    if let Some(query) = input.active_search() {
        let needle = query.to_lowercase();
        return input
            .catalog
            .iter()
            .filter(|o| o.text.to_lowercase().contains(&needle))
            .collect();
    }

    match input.effective_filter() {
        ActiveFilter::All => input.catalog.iter().collect(),
        ActiveFilter::Favorites => input
            .catalog
            .iter()
            .filter(|o| input.favorites.iter().any(|f| *f == o.value))
            .collect(),
        ActiveFilter::Category(key) => input
            .catalog
            .iter()
            .filter(|o| input.categories.classify(&o.text, key))
            .collect(),
    }
}

/// What to show instead of an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    /// A search produced nothing.
    NoMatch { query: String },
    /// A tab produced nothing (or the catalog is empty).
    NoResults,
}

impl EmptyState {
    #[must_use]
    pub fn for_input(input: &FilterInput<'_>) -> Self {
        match input.active_search() {
            Some(query) => EmptyState::NoMatch {
                query: query.to_string(),
            },
            None => EmptyState::NoResults,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            EmptyState::NoMatch { query } => format!("「{query}」に一致する打刻場所がありません"),
            EmptyState::NoResults => NO_RESULTS_MESSAGE.to_string(),
        }
    }
}
