//! Shop listing type and the Gemini `generateContent` wire types.
//!
//! The model is asked to answer with `responseMimeType: application/json`
//! and a response schema mirroring [`Shop`], so the generated text is
//! normally a bare JSON array. Field names on the wire are camelCase
//! (`isOpen`, `isLowestPrice`).

use serde::{Deserialize, Serialize};

/// A shop offering the looked-up item, as generated by the model.
///
/// Every field is required; a missing or mistyped field fails the whole
/// response rather than producing a partial listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: String,
    pub name: String,
    /// Price in local currency (INR for the default prompt).
    pub price: f64,
    /// Human-readable distance, e.g. `"1.2 km"`.
    pub distance: String,
    pub address: String,
    /// Rating on a 1–5 scale.
    pub rating: f64,
    pub is_open: bool,
    /// Requested of the model for exactly one shop; not verified.
    pub is_lowest_price: bool,
    pub description: String,
}

/// Returns the cheapest shop by `price`, ignoring the `is_lowest_price` flag.
#[must_use]
pub fn lowest_priced(shops: &[Shop]) -> Option<&Shop> {
    shops.iter().min_by(|a, b| a.price.total_cmp(&b.price))
}

// ---------------------------------------------------------------------------
// generateContent request
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content<'a> {
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: serde_json::Value,
}

impl<'a> GenerateContentRequest<'a> {
    pub(crate) fn for_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: shop_list_schema(),
            },
        }
    }
}

/// Gemini response schema for an array of [`Shop`] objects.
pub(crate) fn shop_list_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "name": { "type": "STRING" },
                "price": { "type": "NUMBER" },
                "distance": { "type": "STRING" },
                "address": { "type": "STRING" },
                "rating": { "type": "NUMBER" },
                "isOpen": { "type": "BOOLEAN" },
                "isLowestPrice": { "type": "BOOLEAN" },
                "description": { "type": "STRING" }
            },
            "required": [
                "id", "name", "price", "distance", "address",
                "rating", "isOpen", "isLowestPrice", "description"
            ]
        }
    })
}

// ---------------------------------------------------------------------------
// generateContent response
// ---------------------------------------------------------------------------

/// Top-level `generateContent` response. Only the fields we read are modeled.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}
