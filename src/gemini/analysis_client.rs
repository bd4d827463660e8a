use crate::{
    config::GeminiConfig,
    error::{Result, StylistError},
    gemini::{post_generate_content, prompts},
    models::{AnalyzeItemRequest, ItemAnalysis},
};
use reqwest::Client;
use serde_json::json;

#[derive(Clone)]
pub struct AnalysisClient {
    http: Client,
    config: GeminiConfig,
    api_key: String,
}

impl AnalysisClient {
    pub fn new(http: Client, config: GeminiConfig, api_key: String) -> Self {
        Self {
            http,
            config,
            api_key,
        }
    }

    /// Analyzes the uploaded item and returns a description plus one outfit
    /// suggestion per category.
    pub async fn analyze(&self, request: AnalyzeItemRequest) -> Result<ItemAnalysis> {
        let payload = json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": request.media_type, "data": request.image_base64 } },
                    { "text": prompts::ANALYSIS_PROMPT }
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": prompts::analysis_response_schema()
            }
        });

        log::info!("Analyzing item with model: {}", self.config.analysis_model);

        let response = post_generate_content(
            &self.http,
            &self.config,
            &self.api_key,
            &self.config.analysis_model,
            payload,
        )
        .await?;

        let text = response.first_text().ok_or_else(|| {
            StylistError::ParseError("no text payload in analysis response".into())
        })?;

        let analysis: ItemAnalysis = serde_json::from_str(text).map_err(|e| {
            StylistError::ParseError(format!("analysis payload did not match schema: {}", e))
        })?;

        if analysis.suggestions.is_empty() {
            return Err(StylistError::ParseError(
                "analysis returned no outfit suggestions".into(),
            ));
        }

        log::debug!(
            "Item described as '{}' with {} suggestions",
            analysis.original_item_description,
            analysis.suggestions.len()
        );

        Ok(analysis)
    }
}
