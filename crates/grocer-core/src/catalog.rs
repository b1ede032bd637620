//! The grocery item catalog.
//!
//! A [`Catalog`] is a read-only value built once at startup, either from the
//! built-in table below or from a YAML file (see `config/catalog.yaml`).
//! Callers receive it by reference so tests can inject alternate catalogs.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::filter::{filter_items, ALL_CATEGORIES};
use crate::ConfigError;

/// A purchasable grocery item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Seed for deterministic placeholder imagery; carries no other meaning.
    pub image_seed: u32,
}

impl Item {
    /// Placeholder image URL derived from the item's seed.
    #[must_use]
    pub fn image_url(&self, width: u32, height: u32) -> String {
        format!(
            "https://picsum.photos/seed/{}/{width}/{height}",
            self.image_seed
        )
    }
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub categories: Vec<String>,
    pub items: Vec<Item>,
}

/// Validated, immutable set of items and the category labels they use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<String>,
    items: Vec<Item>,
}

/// Categories of the built-in catalog, in display order.
const BUILTIN_CATEGORIES: &[&str] = &[
    "Grains",
    "Spices",
    "Dals & Pulses",
    "Oils & Ghee",
    "Snacks",
    "Beverages",
    "Dairy",
];

/// Built-in items: `(id, name, category, image_seed)`.
const BUILTIN_ITEMS: &[(&str, &str, &str, u32)] = &[
    ("1", "Idli Rice", "Grains", 101),
    ("2", "Ponni Raw Rice", "Grains", 102),
    ("3", "Basmati Rice", "Grains", 103),
    ("4", "Rava (Sooji)", "Grains", 104),
    ("5", "Sambar Powder", "Spices", 201),
    ("6", "Rasam Powder", "Spices", 202),
    ("7", "Turmeric Powder", "Spices", 203),
    ("8", "Red Chilli Powder", "Spices", 204),
    ("9", "Mustard Seeds", "Spices", 205),
    ("10", "Toor Dal", "Dals & Pulses", 301),
    ("11", "Urad Dal", "Dals & Pulses", 302),
    ("12", "Moong Dal", "Dals & Pulses", 303),
    ("13", "Chana Dal", "Dals & Pulses", 304),
    ("14", "Gingelly Oil", "Oils & Ghee", 401),
    ("15", "Groundnut Oil", "Oils & Ghee", 402),
    ("16", "Coconut Oil", "Oils & Ghee", 403),
    ("17", "Cow Ghee", "Oils & Ghee", 404),
    ("18", "Murukku", "Snacks", 501),
    ("19", "Mixture", "Snacks", 502),
    ("20", "Filter Coffee Powder", "Beverages", 601),
    ("21", "Tea Dust", "Beverages", 602),
    ("22", "Curd", "Dairy", 701),
    ("23", "Paneer", "Dairy", 702),
];

impl Catalog {
    /// Builds a catalog after validating its contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if categories or items break the
    /// catalog rules (see [`validate_catalog`]).
    pub fn new(categories: Vec<String>, items: Vec<Item>) -> Result<Self, ConfigError> {
        let catalog = Self { categories, items };
        validate_catalog(&catalog)?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = BUILTIN_CATEGORIES
            .iter()
            .map(|c| (*c).to_string())
            .collect();
        let items = BUILTIN_ITEMS
            .iter()
            .map(|&(id, name, category, image_seed)| Item {
                id: id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                image_seed,
            })
            .collect();
        Self { categories, items }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Category labels offered to the user: `"All"` first, then the
    /// declared categories in order.
    #[must_use]
    pub fn category_labels(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.categories.iter().map(String::as_str))
            .collect()
    }

    /// Returns `true` for `"All"` and every declared category.
    #[must_use]
    pub fn is_known_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.categories.iter().any(|c| c == category)
    }

    /// Items matching `search_term` and `category`, in catalog order.
    #[must_use]
    pub fn filter(&self, search_term: &str, category: &str) -> Vec<&Item> {
        filter_items(&self.items, search_term, category)
    }

    /// Resolves an item by exact id, falling back to a case-insensitive
    /// exact name match.
    #[must_use]
    pub fn find(&self, query: &str) -> Option<&Item> {
        let query = query.trim();
        self.items.iter().find(|item| item.id == query).or_else(|| {
            self.items
                .iter()
                .find(|item| item.name.eq_ignore_ascii_case(query))
        })
    }
}

/// Load and validate a catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CatalogFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)?;

    Catalog::new(file.categories, file.items)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), ConfigError> {
    let mut seen_categories = HashSet::new();
    for category in &catalog.categories {
        if category.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category labels must be non-empty".to_string(),
            ));
        }
        if category == ALL_CATEGORIES {
            return Err(ConfigError::Validation(format!(
                "'{ALL_CATEGORIES}' is reserved and cannot be declared as a category"
            )));
        }
        if !seen_categories.insert(category.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category: '{category}'"
            )));
        }
    }

    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    for item in &catalog.items {
        if item.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "item '{}' has an empty id",
                item.name
            )));
        }
        if item.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "item '{}' has an empty name",
                item.id
            )));
        }
        if !seen_ids.insert(item.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate item id: '{}'",
                item.id
            )));
        }
        if !seen_names.insert(item.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate item name: '{}'",
                item.name
            )));
        }
        if !seen_categories.contains(item.category.as_str()) {
            return Err(ConfigError::Validation(format!(
                "item '{}' uses undeclared category '{}'",
                item.name, item.category
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
