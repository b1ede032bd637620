//! Price lookup client for the grocer storefront.
//!
//! Asks a Gemini text-generation model for a list of nearby shops selling a
//! grocery item, and validates the generated JSON against the [`Shop`]
//! schema. One request per lookup: no retries, no caching.

pub mod client;
pub mod error;
pub mod prompt;
pub mod response;
pub mod types;

use std::future::Future;

pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::LookupError;
pub use prompt::build_prompt;
pub use response::parse_generate_content;
pub use types::{lowest_priced, Shop};

/// Source of shop price listings for an item near a location.
///
/// Implemented by [`GeminiClient`]; front ends and tests depend on the trait
/// so the network can be swapped out.
pub trait PriceLookup {
    /// Looks up shops selling `item_name` near `location`.
    ///
    /// An empty list is a successful result.
    fn lookup_shops(
        &self,
        item_name: &str,
        location: &str,
    ) -> impl Future<Output = Result<Vec<Shop>, LookupError>> + Send;
}
