use crate::{
    error::Result,
    models::{AnalyzeItemRequest, ImageEditRequest, ItemAnalysis, OutfitImageRequest},
};
use async_trait::async_trait;

/// The three remote operations the stylist pipeline depends on. Sessions
/// consume this trait so tests can substitute a scripted backend.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Describes the uploaded item and suggests one outfit per category.
    async fn analyze_item(&self, request: AnalyzeItemRequest) -> Result<ItemAnalysis>;

    /// Renders a flat-lay image for one suggestion; returns a data URI.
    async fn generate_outfit_image(&self, request: OutfitImageRequest) -> Result<String>;

    /// Reworks an existing image from a text instruction; returns a data URI.
    async fn edit_outfit_image(&self, request: ImageEditRequest) -> Result<String>;
}
