//! Application shell for the grocer storefront.
//!
//! Owns the UI state (search text, category, location, item panel, location
//! picker) as an explicit state machine. Front ends feed it [`ShellEvent`]s,
//! execute the [`LookupRequest`]s it hands back, and report results through
//! [`Shell::complete_lookup`]. Each request carries a [`LookupTicket`]; a
//! completion whose ticket no longer matches the open panel is discarded.

pub mod locations;
pub mod runtime;
pub mod state;

pub use locations::{resolve_location_choice, PRESET_LOCATIONS};
pub use runtime::{run_lookup, LookupCompletion};
pub use state::{
    Completion, ItemPanel, LookupRequest, LookupTicket, SearchResult, Shell, ShellEvent,
    ShellPhase,
};
