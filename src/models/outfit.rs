use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutfitCategory {
    Casual,
    Business,
    #[serde(rename = "Night Out")]
    NightOut,
}

impl OutfitCategory {
    /// The fixed set of categories the analysis call is asked for, in order.
    pub const ALL: [OutfitCategory; 3] = [
        OutfitCategory::Casual,
        OutfitCategory::Business,
        OutfitCategory::NightOut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutfitCategory::Casual => "Casual",
            OutfitCategory::Business => "Business",
            OutfitCategory::NightOut => "Night Out",
        }
    }
}

impl fmt::Display for OutfitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A textual outfit recommendation prior to image rendering. Immutable once
/// parsed from the analysis response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSuggestion {
    pub category: OutfitCategory,
    pub description: String,
    pub items: Vec<String>,
    pub styling_tips: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAnalysis {
    pub original_item_description: String,
    pub suggestions: Vec<OutfitSuggestion>,
}

/// One outfit card: a suggestion paired with its rendered image. The image
/// reference is replaced in place when an edit succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedOutfit {
    pub category: OutfitCategory,
    pub image_uri: String,
    pub suggestion: OutfitSuggestion,
}

#[derive(Debug, Clone)]
pub struct AnalyzeItemRequest {
    pub image_base64: String,
    pub media_type: String,
}

#[derive(Debug, Clone)]
pub struct OutfitImageRequest {
    pub item_description: String,
    pub suggestion: OutfitSuggestion,
}

#[derive(Debug, Clone)]
pub struct ImageEditRequest {
    /// Current card image, either a data URI or raw base64.
    pub image: String,
    pub instruction: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&OutfitCategory::NightOut).unwrap();
        assert_eq!(json, "\"Night Out\"");

        let parsed: OutfitCategory = serde_json::from_str("\"Business\"").unwrap();
        assert_eq!(parsed, OutfitCategory::Business);
    }

    #[test]
    fn test_suggestion_parses_camel_case() {
        let json = r#"{
            "category": "Casual",
            "description": "Relaxed weekend look",
            "items": ["White sneakers", "Light-wash jeans"],
            "stylingTips": "Roll the sleeves once."
        }"#;
        let suggestion: OutfitSuggestion = serde_json::from_str(json).unwrap();
        assert_eq!(suggestion.category, OutfitCategory::Casual);
        assert_eq!(suggestion.items.len(), 2);
        assert_eq!(suggestion.styling_tips, "Roll the sleeves once.");
    }

    #[test]
    fn test_analysis_rejects_unknown_category() {
        let json = r#"{
            "originalItemDescription": "Navy blazer",
            "suggestions": [{
                "category": "Loungewear",
                "description": "",
                "items": [],
                "stylingTips": ""
            }]
        }"#;
        assert!(serde_json::from_str::<ItemAnalysis>(json).is_err());
    }
}
