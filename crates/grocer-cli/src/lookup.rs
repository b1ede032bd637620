//! One-shot price lookup command.

use anyhow::Context;
use grocer_core::{AppConfig, Catalog};
use grocer_lookup::GeminiClient;

use crate::render;

/// Build the Gemini client from configuration.
///
/// # Errors
///
/// Returns an error if `GEMINI_API_KEY` is unset or the client cannot be
/// constructed from the configured base URL and model.
pub(crate) fn build_client(config: &AppConfig) -> anyhow::Result<GeminiClient> {
    let api_key = config.require_gemini_api_key()?;
    GeminiClient::with_base_url(
        api_key,
        &config.gemini_model,
        config.lookup_timeout_secs,
        &config.user_agent,
        &config.gemini_base_url,
    )
    .context("failed to build Gemini client")
}

/// Look up shops for one catalog item and print them.
///
/// Unlike the interactive shell, failures are reported and returned so the
/// process exits non-zero.
///
/// # Errors
///
/// Returns an error if the item is not in the catalog or the lookup fails.
pub(crate) async fn run_lookup_once(
    client: &GeminiClient,
    catalog: &Catalog,
    query: &str,
    location: &str,
) -> anyhow::Result<()> {
    let item = catalog.find(query).ok_or_else(|| {
        anyhow::anyhow!(
            "item '{query}' not found in catalog; run `grocer-cli items --search \"{query}\"`"
        )
    })?;

    println!("Finding shops selling {} near {location}...", item.name);
    let shops = client
        .lookup_shops(&item.name, location)
        .await
        .with_context(|| format!("price lookup for '{}' failed", item.name))?;

    print!("{}", render::shop_listing(&item.name, location, &shops));
    Ok(())
}
