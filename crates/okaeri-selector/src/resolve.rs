//! Which entry the selector starts on.

use okaeri_core::{Catalog, LocationOption, SelectorFeatures};

/// Where the initial selection came from, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    LastSelected,
    FirstFavorite,
    NativeSelected,
}

impl std::fmt::Display for SelectionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionSource::LastSelected => write!(f, "last_selected"),
            SelectionSource::FirstFavorite => write!(f, "first_favorite"),
            SelectionSource::NativeSelected => write!(f, "native_selected"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialSelection<'a> {
    pub option: &'a LocationOption,
    pub source: SelectionSource,
}

/// Resolve the initial selection; first match wins:
///
/// 1. the remembered last selection, if it is still in the catalog
/// 2. the first favorite, if it is in the catalog
/// 3. the entry the native control had selected
///
/// Disabled features contribute nothing. Only the *first* favorite is
/// considered; a stale first favorite does not fall through to the second.
#[must_use]
pub fn resolve_initial<'a>(
    catalog: &'a Catalog,
    last_selected: Option<&str>,
    favorites: &[String],
    features: SelectorFeatures,
) -> Option<InitialSelection<'a>> {
    let remembered = last_selected
        .filter(|_| features.remember_last_selection)
        .and_then(|value| catalog.find(value))
        .map(|option| InitialSelection {
            option,
            source: SelectionSource::LastSelected,
        });

    let first_favorite = || {
        favorites
            .first()
            .filter(|_| features.favorites)
            .and_then(|value| catalog.find(value))
            .map(|option| InitialSelection {
                option,
                source: SelectionSource::FirstFavorite,
            })
    };

    let native = || {
        catalog.initially_selected().map(|option| InitialSelection {
            option,
            source: SelectionSource::NativeSelected,
        })
    };

    remembered.or_else(first_favorite).or_else(native)
}

#[cfg(test)]
mod tests {
    use okaeri_core::LocationOption;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            LocationOption::new("X", "X office"),
            LocationOption::new("Y", "Y office"),
            LocationOption::new("Z", "Z office").selected(),
        ])
    }

    fn favs(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn resolved(
        last: Option<&str>,
        favorites: &[&str],
        features: SelectorFeatures,
    ) -> Option<(String, SelectionSource)> {
        let catalog = catalog();
        resolve_initial(&catalog, last, &favs(favorites), features)
            .map(|s| (s.option.value.clone(), s.source))
    }

    #[test]
    fn last_selected_beats_everything() {
        assert_eq!(
            resolved(Some("X"), &["Y"], SelectorFeatures::default()),
            Some(("X".to_string(), SelectionSource::LastSelected))
        );
    }

    #[test]
    fn first_favorite_when_no_last_selected() {
        assert_eq!(
            resolved(None, &["Y", "X"], SelectorFeatures::default()),
            Some(("Y".to_string(), SelectionSource::FirstFavorite))
        );
    }

    #[test]
    fn native_selection_is_the_fallback() {
        assert_eq!(
            resolved(None, &[], SelectorFeatures::default()),
            Some(("Z".to_string(), SelectionSource::NativeSelected))
        );
    }

    #[test]
    fn stale_last_selected_falls_through() {
        assert_eq!(
            resolved(Some("gone"), &["Y"], SelectorFeatures::default()),
            Some(("Y".to_string(), SelectionSource::FirstFavorite))
        );
    }

    #[test]
    fn stale_first_favorite_skips_to_native() {
        assert_eq!(
            resolved(None, &["gone", "X"], SelectorFeatures::default()),
            Some(("Z".to_string(), SelectionSource::NativeSelected))
        );
    }

    #[test]
    fn disabled_features_are_skipped() {
        let features = SelectorFeatures {
            favorites: false,
            remember_last_selection: false,
            ..SelectorFeatures::default()
        };
        assert_eq!(
            resolved(Some("X"), &["Y"], features),
            Some(("Z".to_string(), SelectionSource::NativeSelected))
        );
    }

    #[test]
    fn empty_catalog_resolves_nothing() {
        let catalog = Catalog::default();
        assert!(resolve_initial(&catalog, Some("X"), &favs(&["Y"]), SelectorFeatures::default())
            .is_none());
    }
}
