//! Feature toggles and the page surfaces they gate.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The full toggle set persisted by the settings popup.
///
/// Stored objects may be partial; missing fields take their default (`true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FeatureFlags {
    pub location_selector_main: bool,
    pub location_selector_search: bool,
    pub location_selector_categories: bool,
    pub location_selector_favorites: bool,
    pub location_selector_remember_selection: bool,
    pub work_status_button: bool,
    pub modify_location_selector: bool,
    pub modify_edit_mode_ui: bool,
    pub modify_date_picker: bool,
    pub modify_time_inputs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            location_selector_main: true,
            location_selector_search: true,
            location_selector_categories: true,
            location_selector_favorites: true,
            location_selector_remember_selection: true,
            work_status_button: true,
            modify_location_selector: true,
            modify_edit_mode_ui: true,
            modify_date_picker: true,
            modify_time_inputs: true,
        }
    }
}

impl FeatureFlags {
    #[must_use]
    pub fn get(&self, flag: FeatureFlag) -> bool {
        match flag {
            FeatureFlag::LocationSelectorMain => self.location_selector_main,
            FeatureFlag::LocationSelectorSearch => self.location_selector_search,
            FeatureFlag::LocationSelectorCategories => self.location_selector_categories,
            FeatureFlag::LocationSelectorFavorites => self.location_selector_favorites,
            FeatureFlag::LocationSelectorRememberSelection => {
                self.location_selector_remember_selection
            }
            FeatureFlag::WorkStatusButton => self.work_status_button,
            FeatureFlag::ModifyLocationSelector => self.modify_location_selector,
            FeatureFlag::ModifyEditModeUi => self.modify_edit_mode_ui,
            FeatureFlag::ModifyDatePicker => self.modify_date_picker,
            FeatureFlag::ModifyTimeInputs => self.modify_time_inputs,
        }
    }

    pub fn set(&mut self, flag: FeatureFlag, enabled: bool) {
        let slot = match flag {
            FeatureFlag::LocationSelectorMain => &mut self.location_selector_main,
            FeatureFlag::LocationSelectorSearch => &mut self.location_selector_search,
            FeatureFlag::LocationSelectorCategories => &mut self.location_selector_categories,
            FeatureFlag::LocationSelectorFavorites => &mut self.location_selector_favorites,
            FeatureFlag::LocationSelectorRememberSelection => {
                &mut self.location_selector_remember_selection
            }
            FeatureFlag::WorkStatusButton => &mut self.work_status_button,
            FeatureFlag::ModifyLocationSelector => &mut self.modify_location_selector,
            FeatureFlag::ModifyEditModeUi => &mut self.modify_edit_mode_ui,
            FeatureFlag::ModifyDatePicker => &mut self.modify_date_picker,
            FeatureFlag::ModifyTimeInputs => &mut self.modify_time_inputs,
        };
        *slot = enabled;
    }

    /// Selector capabilities for `surface`, or `None` if the selector is
    /// switched off there.
    #[must_use]
    pub fn selector_features(&self, surface: PageSurface) -> Option<SelectorFeatures> {
        let mounted = match surface {
            PageSurface::Main => self.location_selector_main,
            PageSurface::Modify => self.modify_location_selector,
        };
        mounted.then_some(SelectorFeatures {
            search: self.location_selector_search,
            categories: self.location_selector_categories,
            favorites: self.location_selector_favorites,
            remember_last_selection: self.location_selector_remember_selection,
        })
    }
}

/// Names of the individual toggles, using their stored camelCase spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureFlag {
    LocationSelectorMain,
    LocationSelectorSearch,
    LocationSelectorCategories,
    LocationSelectorFavorites,
    LocationSelectorRememberSelection,
    WorkStatusButton,
    ModifyLocationSelector,
    ModifyEditModeUi,
    ModifyDatePicker,
    ModifyTimeInputs,
}

impl FeatureFlag {
    pub const ALL: [FeatureFlag; 10] = [
        FeatureFlag::LocationSelectorMain,
        FeatureFlag::LocationSelectorSearch,
        FeatureFlag::LocationSelectorCategories,
        FeatureFlag::LocationSelectorFavorites,
        FeatureFlag::LocationSelectorRememberSelection,
        FeatureFlag::WorkStatusButton,
        FeatureFlag::ModifyLocationSelector,
        FeatureFlag::ModifyEditModeUi,
        FeatureFlag::ModifyDatePicker,
        FeatureFlag::ModifyTimeInputs,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureFlag::LocationSelectorMain => "locationSelectorMain",
            FeatureFlag::LocationSelectorSearch => "locationSelectorSearch",
            FeatureFlag::LocationSelectorCategories => "locationSelectorCategories",
            FeatureFlag::LocationSelectorFavorites => "locationSelectorFavorites",
            FeatureFlag::LocationSelectorRememberSelection => "locationSelectorRememberSelection",
            FeatureFlag::WorkStatusButton => "workStatusButton",
            FeatureFlag::ModifyLocationSelector => "modifyLocationSelector",
            FeatureFlag::ModifyEditModeUi => "modifyEditModeUi",
            FeatureFlag::ModifyDatePicker => "modifyDatePicker",
            FeatureFlag::ModifyTimeInputs => "modifyTimeInputs",
        }
    }

    /// Settings-screen label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FeatureFlag::LocationSelectorMain => "カスタム打刻場所セレクター",
            FeatureFlag::LocationSelectorSearch => "検索ボックス",
            FeatureFlag::LocationSelectorCategories => "カテゴリータブ",
            FeatureFlag::LocationSelectorFavorites => "お気に入り管理",
            FeatureFlag::LocationSelectorRememberSelection => "最後の選択を記憶",
            FeatureFlag::WorkStatusButton => "出退勤ボタン改善",
            FeatureFlag::ModifyLocationSelector => "打刻場所セレクター強化",
            FeatureFlag::ModifyEditModeUi => "編集モードの視覚表示",
            FeatureFlag::ModifyDatePicker => "日付ピッカー改善",
            FeatureFlag::ModifyTimeInputs => "時間入力フィールド改善",
        }
    }
}

impl std::fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FeatureFlag {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureFlag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownFlag(s.to_string()))
    }
}

/// The four toggles the location selector consults, resolved once per
/// selector construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SelectorFeatures {
    pub search: bool,
    pub categories: bool,
    pub favorites: bool,
    pub remember_last_selection: bool,
}

impl Default for SelectorFeatures {
    fn default() -> Self {
        Self {
            search: true,
            categories: true,
            favorites: true,
            remember_last_selection: true,
        }
    }
}

/// Host page the selector is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSurface {
    /// Clock-in page.
    #[default]
    Main,
    /// Clock-correction page.
    Modify,
}

impl PageSurface {
    #[must_use]
    pub fn container_class(self) -> &'static str {
        match self {
            PageSurface::Main => "jobcan-custom-selector",
            PageSurface::Modify => "jobcan-custom-selector jce-location-selector",
        }
    }

    /// Correction-page controls with a single placeholder entry are left alone.
    #[must_use]
    pub fn should_enhance(self, option_count: usize) -> bool {
        match self {
            PageSurface::Main => true,
            PageSurface::Modify => option_count > 1,
        }
    }
}

impl std::str::FromStr for PageSurface {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(PageSurface::Main),
            "modify" => Ok(PageSurface::Modify),
            other => Err(ConfigError::Validation(format!(
                "unknown page surface '{other}'; expected 'main' or 'modify'"
            ))),
        }
    }
}
