//! Search-text and category filtering over catalog items.

use crate::catalog::Item;

/// Category sentinel that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Returns the items whose name contains `search_term` (case-insensitive)
/// and whose category equals `category`, or every category when `category`
/// is [`ALL_CATEGORIES`].
///
/// Order follows `items`. An empty search term matches every name.
#[must_use]
pub fn filter_items<'a>(items: &'a [Item], search_term: &str, category: &str) -> Vec<&'a Item> {
    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_search(item, &needle) && matches_category(item, category))
        .collect()
}

fn matches_search(item: &Item, needle_lower: &str) -> bool {
    item.name.to_lowercase().contains(needle_lower)
}

fn matches_category(item: &Item, category: &str) -> bool {
    category == ALL_CATEGORIES || item.category == category
}

/// Header text describing a filtered item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub heading: String,
    pub count: usize,
}

impl FilterSummary {
    #[must_use]
    pub fn new(search_term: &str, category: &str, count: usize) -> Self {
        let heading = if search_term.is_empty() {
            format!("{category} Items")
        } else {
            format!("Results for \"{search_term}\"")
        };
        Self { heading, count }
    }

    #[must_use]
    pub fn count_label(&self) -> String {
        format!("{} items found", self.count)
    }
}

impl std::fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.heading, self.count_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, category: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            image_seed: 0,
        }
    }

    fn scenario() -> Vec<Item> {
        vec![
            item("1", "Idli Rice", "Grains"),
            item("2", "Sambar Powder", "Spices"),
        ]
    }

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        let items = scenario();
        assert_eq!(names(&filter_items(&items, "idli", "All")), ["Idli Rice"]);
        assert_eq!(names(&filter_items(&items, "IDLI", "All")), ["Idli Rice"]);
    }

    #[test]
    fn category_only_filter() {
        let items = scenario();
        assert_eq!(
            names(&filter_items(&items, "", "Spices")),
            ["Sambar Powder"]
        );
    }

    #[test]
    fn empty_filters_are_identity() {
        let items = scenario();
        let all: Vec<Item> = filter_items(&items, "", ALL_CATEGORIES)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(all, items);
    }

    #[test]
    fn category_match_is_exact() {
        let items = scenario();
        assert!(filter_items(&items, "", "spices").is_empty());
        assert!(filter_items(&items, "", "Spice").is_empty());
    }

    #[test]
    fn search_and_category_must_both_match() {
        let items = scenario();
        assert!(filter_items(&items, "idli", "Spices").is_empty());
        assert_eq!(
            names(&filter_items(&items, "powder", "Spices")),
            ["Sambar Powder"]
        );
    }

    #[test]
    fn substring_matches_inside_words() {
        let items = scenario();
        assert_eq!(
            names(&filter_items(&items, "r pow", "All")),
            ["Sambar Powder"]
        );
    }

    #[test]
    fn unmatched_search_returns_empty() {
        let items = scenario();
        assert!(filter_items(&items, "paneer", "All").is_empty());
    }

    #[test]
    fn results_preserve_catalog_order_and_are_a_subset() {
        let items = vec![
            item("1", "Toor Dal", "Dals"),
            item("2", "Idli Rice", "Grains"),
            item("3", "Urad Dal", "Dals"),
            item("4", "Moong Dal", "Dals"),
        ];
        let result = filter_items(&items, "dal", "All");
        assert_eq!(names(&result), ["Toor Dal", "Urad Dal", "Moong Dal"]);
        for found in &result {
            assert!(items.iter().any(|i| std::ptr::eq(i, *found)));
            assert!(found.name.to_lowercase().contains("dal"));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = crate::Catalog::builtin().items().to_vec();
        for (search, category) in [("a", "All"), ("dal", "Dals & Pulses"), ("", "Spices")] {
            let once: Vec<Item> = filter_items(&items, search, category)
                .into_iter()
                .cloned()
                .collect();
            let twice: Vec<Item> = filter_items(&once, search, category)
                .into_iter()
                .cloned()
                .collect();
            assert_eq!(once, twice, "search={search:?} category={category:?}");
        }
    }

    #[test]
    fn summary_heading_uses_search_term_when_present() {
        let summary = FilterSummary::new("idli", "All", 1);
        assert_eq!(summary.heading, "Results for \"idli\"");
        assert_eq!(summary.count_label(), "1 items found");
    }

    #[test]
    fn summary_heading_uses_category_when_search_empty() {
        let summary = FilterSummary::new("", "Spices", 5);
        assert_eq!(summary.heading, "Spices Items");
        assert_eq!(summary.to_string(), "Spices Items (5 items found)");
    }
}
