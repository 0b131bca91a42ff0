//! Render model handed to whatever draws the picker.

use crate::filter::{ActiveFilter, EmptyState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    pub container_class: &'static str,
    /// Label of the "currently selected" display; `None` until something resolves.
    pub selected_label: Option<String>,
    pub search_enabled: bool,
    pub search_text: String,
    pub favorites_enabled: bool,
    pub tabs: Vec<Tab>,
    pub list: ListView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub filter: ActiveFilter,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Preferences are still loading; nothing is listed yet.
    Loading,
    Items(Vec<ListItem>),
    Empty(EmptyState),
}

impl ListView {
    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        match self {
            ListView::Items(items) => items,
            ListView::Loading | ListView::Empty(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub value: String,
    pub text: String,
    pub favorite: bool,
    pub selected: bool,
}

impl ListItem {
    /// Tooltip for the star button.
    #[must_use]
    pub fn favorite_title(&self) -> &'static str {
        if self.favorite {
            "お気に入りから削除"
        } else {
            "お気に入りに追加"
        }
    }
}
