//! Run lifecycle as an explicit state machine with a single transition
//! function, so abort-on-failure and reset-on-new-upload semantics stay
//! unambiguous.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// No item uploaded, or a prior run was cleared.
    Idle,
    /// Analysis or image generation in flight.
    Processing,
    /// All images generated, results published.
    Ready,
    /// The run aborted; no partial results are held. Idle-equivalent for
    /// rendering, but lets the presentation layer raise a failure notice.
    Failed,
}

impl RunPhase {
    pub fn is_processing(&self) -> bool {
        matches!(self, RunPhase::Processing)
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunPhase::Idle => "idle",
            RunPhase::Processing => "processing",
            RunPhase::Ready => "ready",
            RunPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// A new upload was accepted; always starts a fresh run.
    ItemSelected,
    /// Progress label updated before a network operation.
    Progress(String),
    /// Every image generated; results published.
    Completed,
    /// Analysis or any image generation failed; the whole run aborts.
    Failed,
    /// Session cleared back to its initial state.
    Reset,
}

/// Total transition function. Events that make no sense in the current
/// phase leave it unchanged.
pub fn transition(phase: RunPhase, event: &RunEvent) -> RunPhase {
    match (phase, event) {
        (_, RunEvent::ItemSelected) => RunPhase::Processing,
        (RunPhase::Processing, RunEvent::Progress(_)) => RunPhase::Processing,
        (RunPhase::Processing, RunEvent::Completed) => RunPhase::Ready,
        (RunPhase::Processing, RunEvent::Failed) => RunPhase::Failed,
        (_, RunEvent::Reset) => RunPhase::Idle,
        (unchanged, _) => unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut phase = RunPhase::Idle;
        phase = transition(phase, &RunEvent::ItemSelected);
        assert_eq!(phase, RunPhase::Processing);
        phase = transition(phase, &RunEvent::Progress("Visualizing Casual outfit...".into()));
        assert_eq!(phase, RunPhase::Processing);
        phase = transition(phase, &RunEvent::Completed);
        assert_eq!(phase, RunPhase::Ready);
    }

    #[test]
    fn test_failure_aborts_run() {
        let phase = transition(RunPhase::Processing, &RunEvent::Failed);
        assert_eq!(phase, RunPhase::Failed);
        assert!(!phase.is_processing());
    }

    #[test]
    fn test_new_upload_supersedes_any_phase() {
        for phase in [
            RunPhase::Idle,
            RunPhase::Processing,
            RunPhase::Ready,
            RunPhase::Failed,
        ] {
            assert_eq!(
                transition(phase, &RunEvent::ItemSelected),
                RunPhase::Processing
            );
        }
    }

    #[test]
    fn test_illegal_events_are_ignored() {
        assert_eq!(
            transition(RunPhase::Idle, &RunEvent::Completed),
            RunPhase::Idle
        );
        assert_eq!(
            transition(RunPhase::Ready, &RunEvent::Failed),
            RunPhase::Ready
        );
        assert_eq!(
            transition(RunPhase::Idle, &RunEvent::Progress("x".into())),
            RunPhase::Idle
        );
    }

    #[test]
    fn test_reset_returns_to_idle() {
        assert_eq!(transition(RunPhase::Failed, &RunEvent::Reset), RunPhase::Idle);
        assert_eq!(transition(RunPhase::Ready, &RunEvent::Reset), RunPhase::Idle);
    }
}
