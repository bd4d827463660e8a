pub mod state;

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::{
    config::GeminiConfig,
    error::{Result, StylistError},
    gemini::{GeminiClient, GenerationBackend},
    models::{AnalyzeItemRequest, GeneratedOutfit, ImageEditRequest, Item, OutfitImageRequest},
};

pub use state::{transition, RunEvent, RunPhase};

pub const ANALYZING_MESSAGE: &str = "Analyzing your style pieces...";

pub fn visualizing_message(category: impl std::fmt::Display) -> String {
    format!("Visualizing {} outfit...", category)
}

/// How a main run ended. A run superseded by a newer upload stops quietly
/// without touching session state.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(Vec<GeneratedOutfit>),
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    Applied(String),
    Superseded,
}

struct SessionState {
    phase: RunPhase,
    progress: Option<String>,
    selected_item: Option<Item>,
    outfits: Vec<GeneratedOutfit>,
    current_run: Option<Uuid>,
}

impl SessionState {
    fn apply(&mut self, event: RunEvent) {
        if let RunEvent::Progress(message) = &event {
            self.progress = Some(message.clone());
        }
        self.phase = transition(self.phase, &event);
    }
}

/// Drives the upload -> analyze -> generate pipeline and the per-card edit
/// sub-cycle. Cloning shares the underlying state, so a presentation layer
/// can observe progress from another task while a run is in flight.
#[derive(Clone)]
pub struct StylistSession {
    backend: Arc<dyn GenerationBackend>,
    state: Arc<Mutex<SessionState>>,
}

impl StylistSession {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(SessionState {
                phase: RunPhase::Idle,
                progress: None,
                selected_item: None,
                outfits: Vec::new(),
                current_run: None,
            })),
        }
    }

    /// Convenience constructor wiring up a real Gemini client.
    pub fn with_client(config: GeminiConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(GeminiClient::new(config)?)))
    }

    /// Runs the full pipeline for a newly uploaded item: analyze, then
    /// render one image per suggestion, strictly in order. Results are
    /// published only once every image has completed; any failure aborts the
    /// whole run with no partial results. A run started afterwards
    /// supersedes this one, in which case late responses are discarded.
    pub async fn process_item(&self, item: Item) -> Result<RunOutcome> {
        let run_id = Uuid::new_v4();

        let request = AnalyzeItemRequest {
            image_base64: item.data.clone(),
            media_type: item.media_type.clone(),
        };

        {
            let mut state = self.state.lock().unwrap();
            state.current_run = Some(run_id);
            state.outfits.clear();
            state.selected_item = Some(item);
            state.apply(RunEvent::ItemSelected);
            state.apply(RunEvent::Progress(ANALYZING_MESSAGE.to_string()));
        }

        log::info!("Starting styling run {}", run_id);

        let analysis = match self.backend.analyze_item(request).await {
            Ok(analysis) => analysis,
            Err(e) => return self.abort_run(run_id, e),
        };
        if !self.is_current(run_id) {
            log::debug!("Run {} superseded during analysis", run_id);
            return Ok(RunOutcome::Superseded);
        }

        let mut generated = Vec::with_capacity(analysis.suggestions.len());
        for suggestion in &analysis.suggestions {
            self.set_progress(run_id, visualizing_message(suggestion.category));

            let request = OutfitImageRequest {
                item_description: analysis.original_item_description.clone(),
                suggestion: suggestion.clone(),
            };
            let image_uri = match self.backend.generate_outfit_image(request).await {
                Ok(uri) => uri,
                Err(e) => return self.abort_run(run_id, e),
            };
            if !self.is_current(run_id) {
                log::debug!("Run {} superseded during image generation", run_id);
                return Ok(RunOutcome::Superseded);
            }

            generated.push(GeneratedOutfit {
                category: suggestion.category,
                image_uri,
                suggestion: suggestion.clone(),
            });
        }

        let mut state = self.state.lock().unwrap();
        if state.current_run != Some(run_id) {
            return Ok(RunOutcome::Superseded);
        }
        state.outfits = generated.clone();
        state.progress = None;
        state.apply(RunEvent::Completed);

        log::info!("Run {} completed with {} outfits", run_id, generated.len());
        Ok(RunOutcome::Completed(generated))
    }

    /// Per-card edit sub-cycle, independent of the main run. On success only
    /// the targeted card's image is replaced; on failure the card is left
    /// exactly as it was. A run started while the edit was in flight makes
    /// the result stale, and it is dropped.
    pub async fn edit_outfit(&self, index: usize, instruction: &str) -> Result<EditOutcome> {
        let instruction = instruction.trim();
        if instruction.is_empty() {
            return Err(StylistError::RequestError(
                "edit instruction is empty".into(),
            ));
        }

        let (run_id, current_image) = {
            let state = self.state.lock().unwrap();
            let outfit = state.outfits.get(index).ok_or_else(|| {
                StylistError::RequestError(format!("no outfit card at index {}", index))
            })?;
            (state.current_run, outfit.image_uri.clone())
        };

        log::info!("Editing outfit card {}: {}", index, instruction);

        let request = ImageEditRequest {
            image: current_image,
            instruction: instruction.to_string(),
        };
        let new_image = self.backend.edit_outfit_image(request).await?;

        let mut state = self.state.lock().unwrap();
        if state.current_run != run_id || index >= state.outfits.len() {
            log::debug!("Dropping stale edit result for card {}", index);
            return Ok(EditOutcome::Superseded);
        }
        state.outfits[index].image_uri = new_image.clone();
        Ok(EditOutcome::Applied(new_image))
    }

    /// Clears the session back to its initial state, discarding results. Any
    /// in-flight run becomes stale.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        state.current_run = None;
        state.progress = None;
        state.selected_item = None;
        state.outfits.clear();
        state.apply(RunEvent::Reset);
    }

    pub fn phase(&self) -> RunPhase {
        self.state.lock().unwrap().phase
    }

    pub fn is_processing(&self) -> bool {
        self.phase().is_processing()
    }

    pub fn progress_message(&self) -> Option<String> {
        self.state.lock().unwrap().progress.clone()
    }

    pub fn selected_item(&self) -> Option<Item> {
        self.state.lock().unwrap().selected_item.clone()
    }

    /// Snapshot of the current outfit cards.
    pub fn outfits(&self) -> Vec<GeneratedOutfit> {
        self.state.lock().unwrap().outfits.clone()
    }

    fn is_current(&self, run_id: Uuid) -> bool {
        self.state.lock().unwrap().current_run == Some(run_id)
    }

    fn set_progress(&self, run_id: Uuid, message: String) {
        let mut state = self.state.lock().unwrap();
        if state.current_run == Some(run_id) {
            state.apply(RunEvent::Progress(message));
        }
    }

    /// Aborts the run: processing cleared, message cleared, no partial
    /// results. The error propagates so the caller can raise one notice.
    fn abort_run(&self, run_id: Uuid, error: StylistError) -> Result<RunOutcome> {
        log::error!("Styling run {} failed: {}", run_id, error);
        let mut state = self.state.lock().unwrap();
        if state.current_run != Some(run_id) {
            return Ok(RunOutcome::Superseded);
        }
        state.outfits.clear();
        state.progress = None;
        state.apply(RunEvent::Failed);
        drop(state);
        Err(error)
    }
}
