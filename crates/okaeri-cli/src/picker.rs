//! `list`, `select` and `favorite`: one selector per invocation over the
//! catalog file, with preferences carried between runs by the state file.

use std::path::Path;

use anyhow::Context as _;
use okaeri_core::PageSurface;
use okaeri_selector::{ActiveFilter, LocationSelector, SelectControl, SelectOutcome};

use crate::render::{render_favorite_toggle, render_view};
use crate::AppContext;

/// Load the catalog, attach and initialize a selector.
///
/// Returns `None` (after telling the user) when the selector is disabled
/// for `surface` or the control has too few entries.
async fn open_selector(
    ctx: &AppContext,
    catalog_path: &Path,
    surface: PageSurface,
) -> anyhow::Result<Option<LocationSelector<SelectControl>>> {
    let catalog = okaeri_core::load_catalog(catalog_path)
        .with_context(|| format!("loading catalog from {}", catalog_path.display()))?;
    let control = SelectControl::new(catalog.options().to_vec());

    let Some(mut selector) = LocationSelector::attach(
        control,
        ctx.preferences.clone(),
        surface,
        ctx.categories.clone(),
    )
    .await
    else {
        println!("location selector is not active on the {surface:?} page");
        return Ok(None);
    };

    if let Some(source) = selector.initialize().await {
        tracing::debug!(%source, "selector initialized");
    }
    Ok(Some(selector))
}

pub(crate) async fn run_list(
    ctx: &AppContext,
    catalog_path: &Path,
    surface: PageSurface,
    filter: &str,
    search: Option<&str>,
) -> anyhow::Result<()> {
    let Some(mut selector) = open_selector(ctx, catalog_path, surface).await? else {
        return Ok(());
    };

    selector
        .switch_tab(ActiveFilter::from_token(filter))
        .with_context(|| format!("cannot show tab '{filter}'"))?;
    if let Some(text) = search {
        selector.set_search(text);
    }

    print!("{}", render_view(&selector.render()));
    Ok(())
}

pub(crate) async fn run_select(
    ctx: &AppContext,
    catalog_path: &Path,
    surface: PageSurface,
    value: &str,
) -> anyhow::Result<()> {
    let Some(mut selector) = open_selector(ctx, catalog_path, surface).await? else {
        return Ok(());
    };

    match selector.select(value).await {
        Ok(SelectOutcome::Selected) => {
            println!(
                "selected: {}",
                selector.selected_label().unwrap_or_default()
            );
        }
        Ok(SelectOutcome::NotFound) => {
            println!("no location with value '{value}'; selection unchanged");
        }
        Err(e) => {
            // The control already carries the new value; only remembering it failed.
            tracing::warn!(value, error = %e, "selection applied but not remembered");
            println!(
                "selected: {} (not remembered)",
                selector.selected_label().unwrap_or_default()
            );
        }
    }
    Ok(())
}

pub(crate) async fn run_favorite(
    ctx: &AppContext,
    catalog_path: &Path,
    surface: PageSurface,
    value: &str,
) -> anyhow::Result<()> {
    let Some(mut selector) = open_selector(ctx, catalog_path, surface).await? else {
        return Ok(());
    };

    // Row as listed before the star is pressed; its title names the action.
    let pressed = selector
        .render()
        .list
        .items()
        .iter()
        .find(|item| item.value == value)
        .cloned();
    let now_favorite = selector
        .toggle_favorite(value)
        .await
        .with_context(|| format!("toggling favorite '{value}'"))?;

    match pressed {
        Some(item) => println!("{}", render_favorite_toggle(&item, now_favorite)),
        None => println!("'{value}' is not in the catalog; favorites updated anyway"),
    }
    Ok(())
}
