//! Plain-text rendering of the selector view.

use std::fmt::Write as _;

use okaeri_core::CategoryTable;
use okaeri_selector::{ListItem, ListView, SelectorView};

const SELECTED_HEADING: &str = "現在選択中の打刻場所";

pub(crate) fn render_view(view: &SelectorView) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{SELECTED_HEADING}: {}",
        view.selected_label.as_deref().unwrap_or("-")
    );

    if view.search_enabled && !view.search_text.trim().is_empty() {
        let _ = writeln!(out, "検索: {}", view.search_text.trim());
    }

    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|t| {
            if t.active {
                format!("[{}]", t.label)
            } else {
                t.label.clone()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join("  "));

    match &view.list {
        ListView::Loading => {
            let _ = writeln!(out, "  …");
        }
        ListView::Empty(state) => {
            let _ = writeln!(out, "  {}", state.message());
        }
        ListView::Items(items) => {
            for item in items {
                let marker = if item.selected { '>' } else { ' ' };
                let star = match (view.favorites_enabled, item.favorite) {
                    (false, _) => "",
                    (true, true) => "★ ",
                    (true, false) => "☆ ",
                };
                let _ = writeln!(out, "{marker} {star}{} ({})", item.text, item.value);
            }
        }
    }

    out
}

/// One line confirming a star press on `item`, as it was listed before the press.
pub(crate) fn render_favorite_toggle(item: &ListItem, now_favorite: bool) -> String {
    let star = if now_favorite { '★' } else { '☆' };
    format!("{star} {}: {}", item.favorite_title(), item.text)
}

pub(crate) fn render_categories(table: &CategoryTable) -> String {
    let mut out = String::new();
    for category in table.categories() {
        let keywords = if category.is_catch_all() {
            "(everything else)".to_string()
        } else {
            category.keywords.join(", ")
        };
        let _ = writeln!(out, "{:<10} {}  {keywords}", category.key, category.label);
    }
    out
}

#[cfg(test)]
mod tests {
    use okaeri_selector::{ActiveFilter, EmptyState, Tab};

    use super::*;

    fn view(list: ListView) -> SelectorView {
        SelectorView {
            container_class: "jobcan-custom-selector",
            selected_label: Some("本社".to_string()),
            search_enabled: true,
            search_text: String::new(),
            favorites_enabled: true,
            tabs: vec![
                Tab {
                    filter: ActiveFilter::All,
                    label: "すべて".to_string(),
                    active: true,
                },
                Tab {
                    filter: ActiveFilter::Favorites,
                    label: "⭐ お気に入り".to_string(),
                    active: false,
                },
            ],
            list,
        }
    }

    #[test]
    fn renders_selection_tabs_and_items() {
        let out = render_view(&view(ListView::Items(vec![
            ListItem {
                value: "1".to_string(),
                text: "本社".to_string(),
                favorite: true,
                selected: true,
            },
            ListItem {
                value: "2".to_string(),
                text: "渋谷".to_string(),
                favorite: false,
                selected: false,
            },
        ])));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "現在選択中の打刻場所: 本社");
        assert_eq!(lines[1], "[すべて]  ⭐ お気に入り");
        assert_eq!(lines[2], "> ★ 本社 (1)");
        assert_eq!(lines[3], "  ☆ 渋谷 (2)");
    }

    #[test]
    fn renders_empty_search_message() {
        let mut v = view(ListView::Empty(EmptyState::NoMatch {
            query: "名古屋".to_string(),
        }));
        v.search_text = "名古屋".to_string();
        let out = render_view(&v);
        assert!(out.contains("検索: 名古屋"));
        assert!(out.contains("「名古屋」に一致する打刻場所がありません"));
    }

    #[test]
    fn favorite_toggle_line_uses_button_title() {
        let mut item = ListItem {
            value: "2".to_string(),
            text: "渋谷".to_string(),
            favorite: false,
            selected: false,
        };
        assert_eq!(render_favorite_toggle(&item, true), "★ お気に入りに追加: 渋谷");

        item.favorite = true;
        assert_eq!(
            render_favorite_toggle(&item, false),
            "☆ お気に入りから削除: 渋谷"
        );
    }

    #[test]
    fn categories_listing_marks_catch_all() {
        let out = render_categories(&CategoryTable::default());
        assert!(out.lines().next().unwrap().starts_with("camp"));
        assert!(out.contains("(everything else)"));
    }
}
