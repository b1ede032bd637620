//! Preset locations offered by the location picker.

/// Neighbourhoods listed in the picker, in display order.
pub const PRESET_LOCATIONS: &[&str] = &[
    "T. Nagar, Chennai",
    "Adyar, Chennai",
    "Anna Nagar, Chennai",
    "Mylapore, Chennai",
    "Velachery, Chennai",
    "Tambaram, Chennai",
    "Porur, Chennai",
    "Besant Nagar, Chennai",
];

/// Interprets picker input: a 1-based preset number selects that preset,
/// anything else non-blank is taken as a free-text location.
#[must_use]
pub fn resolve_location_choice(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|idx| PRESET_LOCATIONS.get(idx))
            .map(|loc| (*loc).to_string());
    }
    Some(input.to_string())
}
