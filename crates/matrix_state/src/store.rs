//! Single-writer state container.

use std::sync::Arc;

use shared::{domain::Highlight, error::StateError};

use crate::{action::Action, reducer::reduce, selectors::HighlightSelector, state::MatrixState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Arc<MatrixState>)>;

/// Holds the current snapshot and runs every dispatch to completion before
/// returning. Owned by the composition root and passed to whoever dispatches.
pub struct Store {
    state: Arc<MatrixState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    highlight: HighlightSelector,
}

impl Store {
    pub fn new(initial: MatrixState) -> Self {
        Self {
            state: Arc::new(initial),
            listeners: Vec::new(),
            next_subscription: 0,
            highlight: HighlightSelector::new(),
        }
    }

    pub fn state(&self) -> Arc<MatrixState> {
        Arc::clone(&self.state)
    }

    pub fn dispatch(&mut self, action: Action) {
        let next = reduce(&self.state, &action);
        let changed = !Arc::ptr_eq(&next, &self.state);
        tracing::debug!(action = action.kind(), changed, "dispatched action");

        self.state = next;
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    /// Registers `listener` to run after every dispatch with the new snapshot.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&Arc<MatrixState>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Highlight for the current snapshot, memoised across calls.
    pub fn highlight(&mut self) -> Result<Option<Highlight>, StateError> {
        self.highlight.select(&self.state)
    }

    pub fn highlight_recompute_count(&self) -> u64 {
        self.highlight.recompute_count()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(MatrixState::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
