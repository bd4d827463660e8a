//! Fixed prompt templates and the structured-output contract for the
//! analysis call.

use serde_json::{json, Value};

pub const ANALYSIS_PROMPT: &str = "\
Analyze this clothing item in the image.
1. Provide a concise description of the item (color, pattern, material, style).
2. Suggest 3 distinct outfits featuring this exact item for the following categories: Casual, Business, and Night Out.
3. For each outfit, list the complementary pieces (e.g., 'White silk blouse', 'Gold hoop earrings', 'Black leather boots') and provide a brief styling tip.";

/// JSON schema the analysis model is constrained to. Field names must match
/// the serde names on `ItemAnalysis` and `OutfitSuggestion`.
pub fn analysis_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "originalItemDescription": { "type": "STRING" },
            "suggestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "category": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "items": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "stylingTips": { "type": "STRING" }
                    },
                    "required": ["category", "description", "items", "stylingTips"]
                }
            }
        },
        "required": ["originalItemDescription", "suggestions"]
    })
}

pub fn rendering_prompt(item_description: &str, items: &[String]) -> String {
    format!(
        "A professional high-fashion flat-lay photograph of an outfit on a clean minimalist \
         light grey background. The outfit includes: {} as the central piece, paired with {}. \
         Arranged neatly like a magazine spread. Sharp focus, studio lighting, no people.",
        item_description,
        items.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering_prompt_embeds_pieces() {
        let prompt = rendering_prompt(
            "Solid navy blazer",
            &["White silk blouse".to_string(), "Gold hoop earrings".to_string()],
        );
        assert!(prompt.contains("Solid navy blazer as the central piece"));
        assert!(prompt.contains("White silk blouse, Gold hoop earrings"));
    }

    #[test]
    fn test_schema_names_match_models() {
        let schema = analysis_response_schema();
        let suggestion_props = &schema["properties"]["suggestions"]["items"]["properties"];
        assert!(suggestion_props.get("stylingTips").is_some());
        assert!(schema["properties"].get("originalItemDescription").is_some());
    }
}
