//! Shell state and transitions.
//!
//! The item panel is a tagged enum, so "loading with no selected item" or
//! "shops shown for an item that is no longer selected" cannot be
//! represented. The location picker is tracked separately because it can be
//! open regardless of the panel.

use chrono::{DateTime, Utc};
use grocer_core::{Catalog, FilterSummary, Item, ALL_CATEGORIES};
use grocer_lookup::{LookupError, Shop};

/// Identifies one lookup request. Tickets increase monotonically per shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupTicket(u64);

impl std::fmt::Display for LookupTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shops returned for one item at one location.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub item: Item,
    pub location: String,
    pub shops: Vec<Shop>,
    pub fetched_at: DateTime<Utc>,
}

/// The shop-results panel for the selected item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemPanel {
    /// No item selected.
    Closed,
    /// A lookup for `item` is in flight; no shops are shown.
    Loading {
        item: Item,
        location: String,
        ticket: LookupTicket,
    },
    /// The lookup finished. `failed` is set when the shop list is empty
    /// because the lookup errored rather than because nothing was found.
    Loaded { result: SearchResult, failed: bool },
}

/// Coarse view of the panel, for status lines and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPhase {
    Idle,
    ItemLoading,
    ItemLoaded,
}

impl std::fmt::Display for ShellPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellPhase::Idle => write!(f, "idle"),
            ShellPhase::ItemLoading => write!(f, "loading"),
            ShellPhase::ItemLoaded => write!(f, "loaded"),
        }
    }
}

/// User input the shell reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    SetSearch(String),
    SetCategory(String),
    /// Reset search text and category to their initial values.
    ClearFilters,
    SelectItem(Item),
    CloseItemPanel,
    OpenLocationPicker,
    SelectLocation(String),
    CloseLocationPicker,
}

/// A lookup the front end must run and report back via
/// [`Shell::complete_lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub ticket: LookupTicket,
    pub item_name: String,
    pub location: String,
}

/// What [`Shell::complete_lookup`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Shops were stored on the open panel.
    Applied { shops: usize },
    /// The lookup failed; the panel now shows an empty list.
    Fallback,
    /// The ticket no longer matches the open panel; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct Shell {
    search_term: String,
    category: String,
    location: String,
    panel: ItemPanel,
    location_picker_open: bool,
    next_ticket: u64,
}

impl Shell {
    /// Initial state: nothing selected, no filters, pickers closed.
    #[must_use]
    pub fn new(default_location: impl Into<String>) -> Self {
        Self {
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
            location: default_location.into(),
            panel: ItemPanel::Closed,
            location_picker_open: false,
            next_ticket: 1,
        }
    }

    /// Applies `event`. Returns a lookup to run when the event selects an item.
    pub fn dispatch(&mut self, event: ShellEvent) -> Option<LookupRequest> {
        match event {
            ShellEvent::SetSearch(term) => {
                self.search_term = term;
                None
            }
            ShellEvent::SetCategory(category) => {
                self.category = category;
                None
            }
            ShellEvent::ClearFilters => {
                self.search_term.clear();
                self.category = ALL_CATEGORIES.to_string();
                None
            }
            ShellEvent::SelectItem(item) => Some(self.select_item(item)),
            ShellEvent::CloseItemPanel => {
                if let ItemPanel::Loading { ticket, .. } = &self.panel {
                    tracing::debug!(%ticket, "panel closed while lookup in flight");
                }
                self.panel = ItemPanel::Closed;
                None
            }
            ShellEvent::OpenLocationPicker => {
                self.location_picker_open = true;
                None
            }
            ShellEvent::SelectLocation(location) => {
                let location = location.trim();
                if location.is_empty() {
                    tracing::warn!("ignoring blank location");
                } else {
                    tracing::info!(location, "location changed");
                    self.location = location.to_string();
                    self.location_picker_open = false;
                }
                None
            }
            ShellEvent::CloseLocationPicker => {
                self.location_picker_open = false;
                None
            }
        }
    }

    fn select_item(&mut self, item: Item) -> LookupRequest {
        let ticket = LookupTicket(self.next_ticket);
        self.next_ticket += 1;

        tracing::info!(item = %item.name, location = %self.location, %ticket, "item selected");

        let request = LookupRequest {
            ticket,
            item_name: item.name.clone(),
            location: self.location.clone(),
        };
        self.panel = ItemPanel::Loading {
            item,
            location: self.location.clone(),
            ticket,
        };
        request
    }

    /// Records the outcome of the lookup identified by `ticket`.
    ///
    /// Errors are logged and replaced by an empty shop list; they never
    /// propagate out of the shell.
    pub fn complete_lookup(
        &mut self,
        ticket: LookupTicket,
        result: Result<Vec<Shop>, LookupError>,
    ) -> Completion {
        let (item, location) = match std::mem::replace(&mut self.panel, ItemPanel::Closed) {
            ItemPanel::Loading {
                item,
                location,
                ticket: current,
            } if current == ticket => (item, location),
            other => {
                self.panel = other;
                tracing::debug!(%ticket, "discarding stale lookup result");
                return Completion::Stale;
            }
        };

        let (shops, failed, completion) = match result {
            Ok(shops) => {
                let count = shops.len();
                (shops, false, Completion::Applied { shops: count })
            }
            Err(error) => {
                tracing::error!(item = %item.name, %location, %ticket, %error, "shop lookup failed");
                (Vec::new(), true, Completion::Fallback)
            }
        };

        self.panel = ItemPanel::Loaded {
            result: SearchResult {
                item,
                location,
                shops,
                fetched_at: Utc::now(),
            },
            failed,
        };
        completion
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Location used for the next lookup.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Short form of the location: everything before the first comma.
    #[must_use]
    pub fn location_label(&self) -> &str {
        self.location
            .split(',')
            .next()
            .map_or(self.location.as_str(), str::trim)
    }

    #[must_use]
    pub fn panel(&self) -> &ItemPanel {
        &self.panel
    }

    #[must_use]
    pub fn phase(&self) -> ShellPhase {
        match self.panel {
            ItemPanel::Closed => ShellPhase::Idle,
            ItemPanel::Loading { .. } => ShellPhase::ItemLoading,
            ItemPanel::Loaded { .. } => ShellPhase::ItemLoaded,
        }
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        match &self.panel {
            ItemPanel::Closed => None,
            ItemPanel::Loading { item, .. } => Some(item),
            ItemPanel::Loaded { result, .. } => Some(&result.item),
        }
    }

    /// Shops for the selected item; empty unless a lookup has completed.
    #[must_use]
    pub fn shops(&self) -> &[Shop] {
        match &self.panel {
            ItemPanel::Loaded { result, .. } => &result.shops,
            ItemPanel::Closed | ItemPanel::Loading { .. } => &[],
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.panel, ItemPanel::Loading { .. })
    }

    #[must_use]
    pub fn is_location_picker_open(&self) -> bool {
        self.location_picker_open
    }

    /// Catalog items matching the current search text and category.
    #[must_use]
    pub fn visible_items<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Item> {
        catalog.filter(&self.search_term, &self.category)
    }

    #[must_use]
    pub fn filter_summary(&self, catalog: &Catalog) -> FilterSummary {
        FilterSummary::new(
            &self.search_term,
            &self.category,
            self.visible_items(catalog).len(),
        )
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
