//! Per-panel load state with request generations.
//!
//! Each panel owns one [`PanelSlot`]. Starting a request bumps the slot's
//! generation and hands out a [`LoadTicket`]; a response only lands if its
//! ticket still carries the current generation, so a late answer for a
//! superseded idea can never overwrite newer data.

use crate::error::FetchError;
use log::debug;
use serde_json::Value;

/// What a panel renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState {
    #[default]
    Loading,
    Loaded(Value),
    Failed(FetchError),
}

/// Proof of a started request. Hand it back to [`PanelSlot::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    idea: String,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn idea(&self) -> &str {
        &self.idea
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelSlot {
    generation: u64,
    idea: Option<String>,
    state: PanelState,
}

impl PanelSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot already populated with bundled data.
    pub fn with_sample(sample: Value) -> Self {
        let mut slot = Self::new();
        slot.load_sample(sample);
        slot
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn idea(&self) -> Option<&str> {
        self.idea.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PanelState::Loading)
    }

    pub fn data(&self) -> Option<&Value> {
        match &self.state {
            PanelState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.state {
            PanelState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Populated from bundled data rather than a request.
    pub fn is_sample(&self) -> bool {
        self.idea.is_none() && self.data().is_some()
    }

    /// Populate from bundled data. Any request still in flight becomes stale.
    pub fn load_sample(&mut self, sample: Value) {
        self.generation += 1;
        self.idea = None;
        self.state = PanelState::Loaded(sample);
    }

    /// Start loading `idea`.
    ///
    /// Returns `None` when a request for the same idea was already started, so
    /// re-running an effect with unchanged inputs does not fetch twice.
    pub fn begin(&mut self, idea: &str) -> Option<LoadTicket> {
        if self.idea.as_deref() == Some(idea) {
            return None;
        }
        self.idea = Some(idea.to_string());
        Some(self.next_ticket(idea.to_string()))
    }

    /// Start a new request for the current idea after a failure.
    pub fn retry(&mut self) -> Option<LoadTicket> {
        if self.error().is_none() {
            return None;
        }
        let idea = self.idea.clone()?;
        Some(self.next_ticket(idea))
    }

    fn next_ticket(&mut self, idea: String) -> LoadTicket {
        self.generation += 1;
        self.state = PanelState::Loading;
        LoadTicket {
            generation: self.generation,
            idea,
        }
    }

    /// Store the outcome of a request. Returns `false` if the ticket is stale
    /// and the outcome was dropped.
    pub fn resolve(&mut self, ticket: &LoadTicket, outcome: Result<Value, FetchError>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "dropping stale response for '{}' (generation {} < {})",
                ticket.idea, ticket.generation, self.generation
            );
            return false;
        }
        self.state = match outcome {
            Ok(value) => PanelState::Loaded(value),
            Err(err) => PanelState::Failed(err),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_starts_loading() {
        let slot = PanelSlot::new();
        assert!(slot.is_loading());
        assert!(slot.data().is_none());
    }

    #[test]
    fn test_sample_is_loaded_immediately() {
        let slot = PanelSlot::with_sample(json!({"tagline": "Sweet Buzz"}));
        assert_eq!(slot.data().unwrap()["tagline"], "Sweet Buzz");
        assert!(slot.is_sample());

        let mut fetched = PanelSlot::new();
        let ticket = fetched.begin("idea").unwrap();
        fetched.resolve(&ticket, Ok(json!(1)));
        assert!(!fetched.is_sample());
    }

    #[test]
    fn test_begin_then_resolve() {
        let mut slot = PanelSlot::new();
        let ticket = slot.begin("honey coffee").unwrap();
        assert!(slot.is_loading());
        assert!(slot.resolve(&ticket, Ok(json!({"ok": true}))));
        assert_eq!(slot.data(), Some(&json!({"ok": true})));
    }

    #[test]
    fn test_same_idea_does_not_refetch() {
        let mut slot = PanelSlot::new();
        assert!(slot.begin("honey coffee").is_some());
        assert!(slot.begin("honey coffee").is_none());
        assert!(slot.begin("tea house").is_some());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut slot = PanelSlot::new();
        let old = slot.begin("first").unwrap();
        let new = slot.begin("second").unwrap();

        assert!(slot.resolve(&new, Ok(json!("second"))));
        assert!(!slot.resolve(&old, Ok(json!("first"))));
        assert_eq!(slot.data(), Some(&json!("second")));
    }

    #[test]
    fn test_stale_failure_does_not_mask_newer_load() {
        let mut slot = PanelSlot::new();
        let old = slot.begin("first").unwrap();
        let new = slot.begin("second").unwrap();

        assert!(!slot.resolve(&old, Err(FetchError::Status(500))));
        assert!(slot.is_loading());
        assert!(slot.resolve(&new, Ok(json!(1))));
    }

    #[test]
    fn test_failure_is_distinct_from_loading() {
        let mut slot = PanelSlot::new();
        let ticket = slot.begin("idea").unwrap();
        slot.resolve(&ticket, Err(FetchError::Network("refused".into())));
        assert!(!slot.is_loading());
        assert_eq!(slot.error(), Some(&FetchError::Network("refused".into())));
    }

    #[test]
    fn test_retry_after_failure() {
        let mut slot = PanelSlot::new();
        assert!(slot.retry().is_none());

        let first = slot.begin("idea").unwrap();
        assert!(slot.retry().is_none(), "no retry while loading");
        slot.resolve(&first, Err(FetchError::Status(503)));

        let second = slot.retry().unwrap();
        assert_eq!(second.idea(), "idea");
        assert!(second.generation() > first.generation());
        assert!(slot.is_loading());
        assert!(!slot.resolve(&first, Ok(json!("late"))));
        assert!(slot.resolve(&second, Ok(json!("fresh"))));
    }

    #[test]
    fn test_sample_supersedes_inflight_request() {
        let mut slot = PanelSlot::new();
        let ticket = slot.begin("idea").unwrap();
        slot.load_sample(json!("sample"));
        assert!(!slot.resolve(&ticket, Ok(json!("network"))));
        assert_eq!(slot.data(), Some(&json!("sample")));
    }
}
