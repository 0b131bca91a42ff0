//! Keyword-based classification of location labels.
//!
//! Each [`Category`] owns a set of case-insensitive substring keywords. One
//! category in a table has no keywords; it is the catch-all and matches
//! exactly the labels no other category claims.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Tab tokens that a category key may not shadow.
const RESERVED_KEYS: &[&str] = &["all", "favorites"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Category {
    #[must_use]
    pub fn new(key: &str, label: &str, keywords: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        self.keywords.is_empty()
    }

    /// `lowered` must already be lower-cased.
    fn matches_lowered(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| lowered.contains(k.to_lowercase().as_str()))
    }
}

/// Validated, ordered category configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    /// Build a table, rejecting configurations that would break totality.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for empty or duplicate keys, keys
    /// that collide with the `all` / `favorites` tab tokens, blank keywords,
    /// or a table without exactly one catch-all category.
    pub fn new(categories: Vec<Category>) -> Result<Self, ConfigError> {
        validate_categories(&categories)?;
        Ok(Self { categories })
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Returns `true` if `text` belongs to the category named `key`.
    ///
    /// Unknown keys classify nothing.
    #[must_use]
    pub fn classify(&self, text: &str, key: &str) -> bool {
        let Some(category) = self.get(key) else {
            return false;
        };
        let lowered = text.to_lowercase();
        if category.is_catch_all() {
            !self.matches_any_keyword(&lowered)
        } else {
            category.matches_lowered(&lowered)
        }
    }

    /// Every category `text` belongs to, in table order.
    #[must_use]
    pub fn categories_of(&self, text: &str) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| self.classify(text, &c.key))
            .collect()
    }

    fn matches_any_keyword(&self, lowered: &str) -> bool {
        self.categories
            .iter()
            .filter(|c| !c.is_catch_all())
            .any(|c| c.matches_lowered(lowered))
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

/// The built-in category table, in tab order.
#[must_use]
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("camp", "キャンプ", &["サマーキャンプ", "夏キャンプ", "camp"]),
        Category::new(
            "school",
            "スクール",
            &["ライフイズテックスクール", "スクール名古屋", "school"],
        ),
        Category::new("dx", "DX", &["DX", "dx"]),
        Category::new(
            "event",
            "イベント",
            &[
                "アプリ甲子園",
                "自主開催イベント",
                "イベント",
                "event",
                "1Day",
                "2DAY",
            ],
        ),
        Category::new("leaders", "リーダーズ", &["Leaders", "リーダーズ"]),
        Category::new(
            "corporate",
            "コーポレート",
            &["コーポレート", "セキュリティ研修"],
        ),
        Category::new("other", "その他", &[]),
    ]
}

#[derive(Debug, Deserialize)]
struct CategoriesFile {
    categories: Vec<Category>,
}

/// Load and validate a category table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_categories(path: &Path) -> Result<CategoryTable, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    let file: CategoriesFile =
        serde_yaml::from_str(&content).map_err(|e| ConfigError::FileParse {
            path: path.display().to_string(),
            source: e,
        })?;
    CategoryTable::new(file.categories)
}

fn validate_categories(categories: &[Category]) -> Result<(), ConfigError> {
    let mut seen_keys = HashSet::new();

    for category in categories {
        if category.key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category key must be non-empty".to_string(),
            ));
        }
        if category.label.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "category '{}' must have a non-empty label",
                category.key
            )));
        }
        if RESERVED_KEYS.contains(&category.key.as_str()) {
            return Err(ConfigError::Validation(format!(
                "category key '{}' is reserved",
                category.key
            )));
        }
        if !seen_keys.insert(category.key.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category key: '{}'",
                category.key
            )));
        }
        if category.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "category '{}' has a blank keyword",
                category.key
            )));
        }
    }

    let catch_all = categories.iter().filter(|c| c.is_catch_all()).count();
    if catch_all != 1 {
        return Err(ConfigError::Validation(format!(
            "exactly one catch-all category (no keywords) is required, found {catch_all}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_match_is_case_insensitive() {
        let table = CategoryTable::default();
        assert!(table.classify("Summer CAMP 2024", "camp"));
        assert!(table.classify("leaders meetup", "leaders"));
        assert!(!table.classify("本社", "camp"));
    }

    #[test]
    fn japanese_keywords_match_as_substrings() {
        let table = CategoryTable::default();
        assert!(table.classify("【夏キャンプ】渋谷会場", "camp"));
        assert!(table.classify("セキュリティ研修 4月", "corporate"));
    }

    #[test]
    fn catch_all_is_negation_of_other_categories() {
        let table = CategoryTable::default();
        assert!(table.classify("本社オフィス", "other"));
        assert!(!table.classify("ライフイズテックスクール 渋谷", "other"));
    }

    #[test]
    fn label_can_belong_to_several_keyword_categories() {
        let table = CategoryTable::default();
        let keys: Vec<&str> = table
            .categories_of("DX Camp 1Day")
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(keys, vec!["camp", "dx", "event"]);
    }

    #[test]
    fn classification_is_total() {
        let table = CategoryTable::default();
        for text in ["本社", "school tokyo", "アプリ甲子園 決勝", "", "リモート"] {
            assert!(
                !table.categories_of(text).is_empty(),
                "'{text}' classified into no category"
            );
        }
    }

    #[test]
    fn unknown_key_classifies_nothing() {
        assert!(!CategoryTable::default().classify("camp", "nope"));
    }

    #[test]
    fn validate_requires_exactly_one_catch_all() {
        let err = CategoryTable::new(vec![Category::new("camp", "Camp", &["camp"])]).unwrap_err();
        assert!(err.to_string().contains("exactly one catch-all"));

        let err = CategoryTable::new(vec![
            Category::new("a", "A", &[]),
            Category::new("b", "B", &[]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn validate_rejects_reserved_and_duplicate_keys() {
        let err = CategoryTable::new(vec![
            Category::new("favorites", "Fav", &["x"]),
            Category::new("other", "Other", &[]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("reserved"));

        let err = CategoryTable::new(vec![
            Category::new("camp", "Camp", &["camp"]),
            Category::new("camp", "Camp 2", &["kamp"]),
            Category::new("other", "Other", &[]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate category key"));
    }

    #[test]
    fn validate_rejects_blank_keyword() {
        let err = CategoryTable::new(vec![
            Category::new("camp", "Camp", &["camp", " "]),
            Category::new("other", "Other", &[]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("blank keyword"));
    }

    #[test]
    fn default_table_passes_validation() {
        assert!(CategoryTable::new(default_categories()).is_ok());
    }

    #[test]
    fn shipped_yaml_matches_built_in_table() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("categories.yaml");
        let table = load_categories(&path).expect("config/categories.yaml should load");
        assert_eq!(table, CategoryTable::default());
    }
}
