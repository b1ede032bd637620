//! Catalog browsing commands.

use grocer_core::{Catalog, FilterSummary};

use crate::render;

/// Print the items matching `search` and `category`.
pub(crate) fn run_items(catalog: &Catalog, search: &str, category: &str) {
    let category = resolve_category(catalog, category);
    if !catalog.is_known_category(&category) {
        tracing::warn!(%category, "unknown category; no items will match");
    }
    let items = catalog.filter(search, &category);
    let summary = FilterSummary::new(search, &category, items.len());
    print!("{}", render::item_listing(&summary, &items));
}

/// Print every category label, `All` first.
pub(crate) fn run_categories(catalog: &Catalog) {
    for label in catalog.category_labels() {
        println!("{label}");
    }
}

/// Maps user input onto a catalog category label, ignoring case.
///
/// Input that matches no label is returned unchanged; filtering on it
/// simply yields no items.
pub(crate) fn resolve_category(catalog: &Catalog, input: &str) -> String {
    let input = input.trim();
    catalog
        .category_labels()
        .into_iter()
        .find(|label| label.eq_ignore_ascii_case(input))
        .unwrap_or(input)
        .to_string()
}
