pub mod analysis_client;
pub mod image_client;
pub mod prompts;
pub mod traits;

use crate::{
    config::GeminiConfig,
    error::{Result, StylistError},
    models::{
        AnalyzeItemRequest, GenerateContentResponse, ImageEditRequest, ItemAnalysis,
        OutfitImageRequest,
    },
};
use async_trait::async_trait;
use serde_json::Value;

pub use analysis_client::AnalysisClient;
pub use image_client::ImageClient;
pub use traits::GenerationBackend;

/// Facade over the two sub-clients, sharing one HTTP connection pool and the
/// resolved API credential.
#[derive(Clone)]
pub struct GeminiClient {
    analysis_client: AnalysisClient,
    image_client: ImageClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| StylistError::ConfigError("Gemini API key is required".into()))?;

        let http = reqwest::Client::new();

        Ok(Self {
            analysis_client: AnalysisClient::new(http.clone(), config.clone(), api_key.clone()),
            image_client: ImageClient::new(http, config, api_key),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env())
    }

    pub fn analysis(&self) -> &AnalysisClient {
        &self.analysis_client
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn analyze_item(&self, request: AnalyzeItemRequest) -> Result<ItemAnalysis> {
        self.analysis_client.analyze(request).await
    }

    async fn generate_outfit_image(&self, request: OutfitImageRequest) -> Result<String> {
        self.image_client.generate(request).await
    }

    async fn edit_outfit_image(&self, request: ImageEditRequest) -> Result<String> {
        self.image_client.edit(request).await
    }
}

/// Single POST to `{base_url}/models/{model}:generateContent`. Network and
/// non-2xx failures map to `TransportError`; an unreadable envelope maps to
/// `ParseError`.
pub(crate) async fn post_generate_content(
    http: &reqwest::Client,
    config: &GeminiConfig,
    api_key: &str,
    model: &str,
    payload: Value,
) -> Result<GenerateContentResponse> {
    let url = format!("{}/models/{}:generateContent", config.base_url, model);

    let response = http
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| StylistError::TransportError(format!("generateContent failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(StylistError::TransportError(format!(
            "generateContent returned {}: {}",
            status, error_text
        )));
    }

    response
        .json::<GenerateContentResponse>()
        .await
        .map_err(|e| StylistError::ParseError(format!("malformed generateContent body: {}", e)))
}
