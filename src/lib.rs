pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod session;

pub use config::GeminiConfig;
pub use error::{Result, StylistError};
pub use gemini::{AnalysisClient, GeminiClient, GenerationBackend, ImageClient};
pub use models::{
    AnalyzeItemRequest, GeneratedOutfit, ImageEditRequest, Item, ItemAnalysis, OutfitCategory,
    OutfitImageRequest, OutfitSuggestion,
};
pub use session::{EditOutcome, RunOutcome, RunPhase, StylistSession};
