//! End-to-end selector behaviour over a shared in-memory preference store.

use std::sync::Arc;

use okaeri_core::{Catalog, CategoryTable, LocationOption, PreferenceKeys, SelectorFeatures};
use okaeri_selector::{
    filter_options, ActiveFilter, FilterInput, LocationSelector, NativeControl, SelectControl,
    SelectionSource, SelectorConfig,
};
use okaeri_store::{MemoryStore, PreferenceStore, Preferences};
use serde_json::json;

fn native_options() -> Vec<LocationOption> {
    vec![
        LocationOption::new("X", "DX推進室"),
        LocationOption::new("Y", "夏キャンプ 沖縄"),
        LocationOption::new("Z", "本社").selected(),
        LocationOption::new("W", "自主開催イベント 大阪"),
    ]
}

fn build(store: &Arc<dyn PreferenceStore>) -> LocationSelector<SelectControl> {
    LocationSelector::new(
        SelectControl::new(native_options()),
        Preferences::new(Arc::clone(store), PreferenceKeys::default()),
        SelectorConfig::default(),
    )
}

fn seeded(last: Option<&str>, favorites: &[&str]) -> Arc<dyn PreferenceStore> {
    let mut store = MemoryStore::new().with_entry("jobcanFavorites", json!(favorites));
    if let Some(last) = last {
        store = store.with_entry("jobcanLastSelectedLocation", json!(last));
    }
    Arc::new(store)
}

#[tokio::test]
async fn last_selected_has_highest_priority() {
    let store = seeded(Some("X"), &["Y"]);
    let mut selector = build(&store);
    assert_eq!(
        selector.initialize().await,
        Some(SelectionSource::LastSelected)
    );
    assert_eq!(selector.control().value(), "X");
    assert_eq!(selector.selected_label(), Some("DX推進室"));
}

#[tokio::test]
async fn first_favorite_beats_native_selection() {
    let store = seeded(None, &["Y", "X"]);
    let mut selector = build(&store);
    assert_eq!(
        selector.initialize().await,
        Some(SelectionSource::FirstFavorite)
    );
    assert_eq!(selector.control().value(), "Y");
}

#[tokio::test]
async fn native_selection_when_nothing_stored() {
    let store = seeded(None, &[]);
    let mut selector = build(&store);
    assert_eq!(
        selector.initialize().await,
        Some(SelectionSource::NativeSelected)
    );
    assert_eq!(selector.control().value(), "Z");
    assert_eq!(selector.selected_label(), Some("本社"));
}

#[tokio::test]
async fn selection_is_restored_by_the_next_selector() {
    let store = seeded(None, &[]);
    let mut first = build(&store);
    first.initialize().await;
    first.select("W").await.unwrap();

    let mut second = build(&store);
    assert_eq!(
        second.initialize().await,
        Some(SelectionSource::LastSelected)
    );
    assert_eq!(second.control().value(), "W");
}

#[tokio::test]
async fn toggling_twice_restores_original_favorites() {
    let store = seeded(None, &["W", "Y"]);
    let mut selector = build(&store);
    selector.initialize().await;

    selector.toggle_favorite("X").await.unwrap();
    selector.toggle_favorite("X").await.unwrap();

    assert_eq!(selector.favorites(), ["W", "Y"]);
    assert_eq!(
        store.get("jobcanFavorites").await.unwrap(),
        Some(json!(["W", "Y"]))
    );
}

#[tokio::test]
async fn toggle_rereads_store_between_selectors() {
    let store = seeded(None, &[]);
    let mut main = build(&store);
    let mut modify = build(&store);
    main.initialize().await;
    modify.initialize().await;

    main.toggle_favorite("X").await.unwrap();
    modify.toggle_favorite("Y").await.unwrap();

    // modify re-read the store, so it saw X before adding Y
    assert_eq!(modify.favorites(), ["X", "Y"]);
    // main's in-memory copy is stale until its next toggle
    assert_eq!(main.favorites(), ["X"]);
}

#[test]
fn search_result_is_independent_of_active_filter() {
    let catalog = Catalog::new(native_options());
    let categories = CategoryTable::default();
    let favorites = vec!["Z".to_string()];
    let mut filters = vec![ActiveFilter::All, ActiveFilter::Favorites];
    filters.extend(
        categories
            .categories()
            .iter()
            .map(|c| ActiveFilter::Category(c.key.clone())),
    );

    for search in ["dx", "大阪", "本", "nothing-matches"] {
        let run = |filter: &ActiveFilter| -> Vec<String> {
            filter_options(&FilterInput {
                catalog: &catalog,
                favorites: &favorites,
                categories: &categories,
                features: SelectorFeatures::default(),
                active_filter: filter,
                search_text: search,
            })
            .iter()
            .map(|o| o.value.clone())
            .collect()
        };
        let baseline = run(&ActiveFilter::All);
        for filter in &filters {
            assert_eq!(run(filter), baseline, "search '{search}' under {filter}");
        }
    }
}

#[test]
fn every_option_lands_in_some_category() {
    let catalog = Catalog::new(native_options());
    let categories = CategoryTable::default();
    for option in &catalog {
        assert!(
            categories
                .categories()
                .iter()
                .any(|c| categories.classify(&option.text, &c.key)),
            "{} is unclassified",
            option.text
        );
    }
}
