//! Prompt text sent to the generative model.

/// Builds the instruction asking the model for shops selling `item_name`
/// near `location`.
///
/// The "exactly one lowest price" requirement lives only here; the client
/// does not check it on the way back.
#[must_use]
pub fn build_prompt(item_name: &str, location: &str) -> String {
    format!(
        "You are a local grocery price comparison assistant.\n\
         List 4 to 6 realistic grocery shops, supermarkets, or provision stores \
         near \"{location}\" that sell \"{item_name}\".\n\
         For each shop provide:\n\
         - id: a short unique string\n\
         - name: the shop name\n\
         - price: the price of {item_name} as a number in Indian Rupees (no currency symbol)\n\
         - distance: distance from {location}, e.g. \"1.2 km\"\n\
         - address: a plausible street address in the area\n\
         - rating: a number between 1 and 5\n\
         - isOpen: whether the shop is open right now\n\
         - isLowestPrice: true for exactly one shop, the one with the lowest price; false for all others\n\
         - description: one short sentence about the shop\n\
         Respond with only a JSON array of these objects and no other text."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_item_and_location() {
        let prompt = build_prompt("Idli Rice", "T. Nagar, Chennai");
        assert!(prompt.contains("\"Idli Rice\""));
        assert!(prompt.contains("\"T. Nagar, Chennai\""));
    }

    #[test]
    fn prompt_names_every_shop_field() {
        let prompt = build_prompt("Toor Dal", "Adyar");
        for field in [
            "id:",
            "name:",
            "price:",
            "distance:",
            "address:",
            "rating:",
            "isOpen:",
            "isLowestPrice:",
            "description:",
        ] {
            assert!(prompt.contains(field), "prompt missing {field}");
        }
    }

    #[test]
    fn prompt_requests_single_lowest_price_and_json_only() {
        let prompt = build_prompt("Curd", "Velachery");
        assert!(prompt.contains("exactly one shop"));
        assert!(prompt.contains("only a JSON array"));
    }
}
