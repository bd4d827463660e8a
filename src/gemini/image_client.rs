use crate::{
    config::GeminiConfig,
    error::{Result, StylistError},
    gemini::{post_generate_content, prompts},
    models::{strip_data_uri, to_data_uri, ImageEditRequest, OutfitImageRequest},
};
use reqwest::Client;
use serde_json::json;

#[derive(Clone)]
pub struct ImageClient {
    http: Client,
    config: GeminiConfig,
    api_key: String,
}

impl ImageClient {
    pub fn new(http: Client, config: GeminiConfig, api_key: String) -> Self {
        Self {
            http,
            config,
            api_key,
        }
    }

    /// Renders a square flat-lay image for one suggestion. Returns the image
    /// as a self-contained data URI.
    pub async fn generate(&self, request: OutfitImageRequest) -> Result<String> {
        let prompt =
            prompts::rendering_prompt(&request.item_description, &request.suggestion.items);

        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "imageConfig": { "aspectRatio": "1:1" }
            }
        });

        log::info!(
            "Rendering {} outfit with model: {}",
            request.suggestion.category,
            self.config.image_model
        );

        let response = post_generate_content(
            &self.http,
            &self.config,
            &self.api_key,
            &self.config.image_model,
            payload,
        )
        .await?;

        Self::extract_image(&response)
    }

    /// Reworks an existing image from a free-text instruction. The current
    /// image may be a data URI or raw base64; any prefix is stripped before
    /// resubmission.
    pub async fn edit(&self, request: ImageEditRequest) -> Result<String> {
        let clean_base64 = strip_data_uri(&request.image);

        let payload = json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": "image/png", "data": clean_base64 } },
                    { "text": request.instruction }
                ]
            }],
            "generationConfig": {
                "imageConfig": { "aspectRatio": "1:1" }
            }
        });

        log::info!(
            "Editing outfit image with model: {}",
            self.config.image_model
        );

        let response = post_generate_content(
            &self.http,
            &self.config,
            &self.api_key,
            &self.config.image_model,
            payload,
        )
        .await?;

        Self::extract_image(&response)
    }

    fn extract_image(response: &crate::models::GenerateContentResponse) -> Result<String> {
        let inline = response
            .first_inline_image()
            .ok_or_else(|| StylistError::GenerationError("no image returned".into()))?;
        let mime = inline.mime_type.as_deref().unwrap_or("image/png");
        Ok(to_data_uri(mime, &inline.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenerateContentResponse;

    #[test]
    fn test_extract_image_builds_data_uri() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": { "parts": [
                { "inlineData": { "mimeType": "image/png", "data": "aGVsbG8=" } }
            ] } }]
        }))
        .unwrap();
        assert_eq!(
            ImageClient::extract_image(&response).unwrap(),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_text_only_response_is_generation_error() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "sorry, no can do" }] } }]
        }))
        .unwrap();
        assert!(matches!(
            ImageClient::extract_image(&response),
            Err(StylistError::GenerationError(_))
        ));
    }
}
