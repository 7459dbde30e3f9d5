// Rust guideline compliant 2026-10-14

//! Report session state.
//!
//! A session owns the current view state. Commands never mutate that state in
//! place: each one builds a new `SessionState`, swaps it in and hands it to
//! every subscriber in subscription order.

use crate::interactor::{EpicReportInteractor, EpicReportRequest, LoadedReport};
use crate::response::ErrorEnvelope;
use crate::source::EpicSource;
use epicast_core::{GrowthFactor, SprintWindow};
use std::sync::Arc;

/// Immutable snapshot of what a front end shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Selected epics.
    pub epic_keys: Vec<String>,
    /// Selected velocity window.
    pub sprint_window: SprintWindow,
    /// Selected growth factor.
    pub growth_factor: GrowthFactor,
    /// Report for the current selection, if it loaded.
    pub report: Option<LoadedReport>,
    /// Failure of the last load, if it failed.
    pub error: Option<ErrorEnvelope>,
}

/// A user intent handled by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the selected epics and reload.
    SelectEpics(Vec<String>),
    /// Change the velocity window and reload.
    SelectWindow(SprintWindow),
    /// Change the growth factor and reload.
    SelectGrowthFactor(GrowthFactor),
    /// Reload with the current selection.
    Refresh,
}

/// Identifies a subscription for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Subscriber = Box<dyn Fn(&SessionState) + Send + Sync>;

/// Orchestrates report loading for an interactive front end.
pub struct ReportSession<S> {
    interactor: EpicReportInteractor<S>,
    state: Arc<SessionState>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: usize,
}

impl<S: EpicSource> ReportSession<S> {
    /// Creates a session with an empty selection.
    pub fn new(interactor: EpicReportInteractor<S>, initial: SessionState) -> Self {
        Self {
            interactor,
            state: Arc::new(initial),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> Arc<SessionState> {
        Arc::clone(&self.state)
    }

    /// Registers a callback invoked after every handled command.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Handles a command and returns the resulting state.
    pub fn dispatch(&mut self, command: Command) -> Arc<SessionState> {
        tracing::debug!(?command, "Handling session command");

        let mut next = SessionState {
            report: None,
            error: None,
            ..(*self.state).clone()
        };
        match command {
            Command::SelectEpics(keys) => next.epic_keys = keys,
            Command::SelectWindow(window) => next.sprint_window = window,
            Command::SelectGrowthFactor(growth) => next.growth_factor = growth,
            Command::Refresh => {}
        }

        if !next.epic_keys.is_empty() {
            let request = EpicReportRequest {
                epic_keys: next.epic_keys.clone(),
                sprint_window: next.sprint_window,
                growth_factor: next.growth_factor,
            };
            match self.interactor.run(&request) {
                Ok(loaded) => next.report = Some(loaded),
                Err(err) => next.error = Some(ErrorEnvelope::from_error(&err)),
            }
        }

        self.state = Arc::new(next);
        for (_, subscriber) in &self.subscribers {
            subscriber(self.state.as_ref());
        }
        self.state()
    }
}
