//! Plain-text rendering of catalog listings, shop results, and shell state.
//!
//! Every function returns a `String` ending in a newline so callers can
//! `print!` it and tests can assert on it.

use grocer_core::{FilterSummary, Item};
use grocer_lookup::{lowest_priced, Shop};
use grocer_shell::{ItemPanel, Shell, PRESET_LOCATIONS};

pub(crate) fn item_listing(summary: &FilterSummary, items: &[&Item]) -> String {
    let mut out = format!("{}  [{}]\n", summary.heading, summary.count_label());
    if items.is_empty() {
        out.push_str("No items found. Try adjusting your search or category filter.\n");
        return out;
    }
    for item in items {
        out.push_str(&format!("{:>4}  {:<24}{}\n", item.id, item.name, item.category));
    }
    out
}

pub(crate) fn category_bar(labels: &[&str], current: &str) -> String {
    let parts: Vec<String> = labels
        .iter()
        .map(|label| {
            if *label == current {
                format!("[{label}]")
            } else {
                (*label).to_string()
            }
        })
        .collect();
    format!("{}\n", parts.join("  "))
}

pub(crate) fn shop_listing(item_name: &str, location: &str, shops: &[Shop]) -> String {
    if shops.is_empty() {
        return format!("No shops found for {item_name} near {location}.\n");
    }

    let mut out = format!("{} shops selling {item_name} near {location}:\n", shops.len());
    for shop in shops {
        let status = if shop.is_open { "open" } else { "closed" };
        let badge = if shop.is_lowest_price {
            "  LOWEST PRICE"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {:<28}{:>10}  {:<9}{:>4.1}*  {status}{badge}\n",
            shop.name,
            format_price(shop.price),
            shop.distance,
            shop.rating,
        ));
        out.push_str(&format!("      {}\n", shop.address));
        if !shop.description.is_empty() {
            out.push_str(&format!("      {}\n", shop.description));
        }
    }
    if let Some(cheapest) = lowest_priced(shops) {
        out.push_str(&format!(
            "Cheapest: {} at {}\n",
            cheapest.name,
            format_price(cheapest.price)
        ));
    }
    out
}

pub(crate) fn format_price(price: f64) -> String {
    format!("Rs {price:.2}")
}

pub(crate) fn panel(shell: &Shell) -> String {
    match shell.panel() {
        ItemPanel::Closed => "No item selected.\n".to_string(),
        ItemPanel::Loading { item, location, .. } => {
            format!("Finding shops selling {} near {location}...\n", item.name)
        }
        ItemPanel::Loaded { result, .. } => {
            let mut out = shop_listing(&result.item.name, &result.location, &result.shops);
            out.push_str(&format!(
                "(updated {})\n",
                result.fetched_at.format("%H:%M:%S UTC")
            ));
            out
        }
    }
}

pub(crate) fn location_picker(current: &str) -> String {
    let mut out = String::from("Choose a location (number or free text, `cancel` to close):\n");
    for (idx, preset) in PRESET_LOCATIONS.iter().enumerate() {
        let marker = if *preset == current { "*" } else { " " };
        out.push_str(&format!(" {marker}{:>2}. {preset}\n", idx + 1));
    }
    out
}

pub(crate) fn status(shell: &Shell) -> String {
    let mut out = format!(
        "location: {} | search: {:?} | category: {} | panel: {}",
        shell.location_label(),
        shell.search_term(),
        shell.category(),
        shell.phase(),
    );
    if let Some(item) = shell.selected_item() {
        out.push_str(&format!(" ({})", item.name));
    }
    if shell.is_location_picker_open() {
        out.push_str(" | picking location");
    }
    out.push('\n');
    out
}

pub(crate) fn help() -> &'static str {
    "Commands:\n\
     \x20 search <text>       filter items by name (empty clears)\n\
     \x20 category <name>     filter items by category (`All` for every category)\n\
     \x20 clear               reset search and category\n\
     \x20 items               list the visible items\n\
     \x20 select <id|name>    look up shop prices for an item\n\
     \x20 close               close the shop results\n\
     \x20 location [choice]   open the location picker, or pick a location directly\n\
     \x20 cancel              close the location picker\n\
     \x20 status              show the current state\n\
     \x20 help                show this help\n\
     \x20 quit                exit\n"
}
