//! Reference in-memory state handler.
//!
//! Queues updates per component key in submission order and replays them
//! against a component generation on demand. Real schedulers batch, coalesce
//! and thread-hop; this one only keeps the ordering contract.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::component::Component;
use crate::context::{ComponentKey, DispatchMode, StateUpdateDispatcher};
use crate::error::StateError;
use crate::update::StateUpdate;

struct PendingUpdate {
    mode: DispatchMode,
    update: Box<dyn StateUpdate>,
}

/// Per-component queues of pending updates.
#[derive(Default)]
pub struct StateHandler {
    pending: Mutex<HashMap<ComponentKey, Vec<PendingUpdate>>>,
}

impl StateHandler {
    /// Creates an empty handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn queues(&self) -> MutexGuard<'_, HashMap<ComponentKey, Vec<PendingUpdate>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the number of updates queued for `key`.
    #[must_use]
    pub fn pending_count(&self, key: &ComponentKey) -> usize {
        self.queues().get(key).map_or(0, Vec::len)
    }

    /// Returns the modes of the updates queued for `key`, in order.
    #[must_use]
    pub fn pending_modes(&self, key: &ComponentKey) -> Vec<DispatchMode> {
        self.queues()
            .get(key)
            .map(|queue| queue.iter().map(|p| p.mode).collect())
            .unwrap_or_default()
    }

    /// Returns true if a non-lazy update is queued for `key`. Lazy updates
    /// alone never request a re-render.
    #[must_use]
    pub fn needs_render(&self, key: &ComponentKey) -> bool {
        self.queues()
            .get(key)
            .is_some_and(|queue| queue.iter().any(|p| p.mode != DispatchMode::Lazy))
    }

    /// Replays every update queued for `key` against `component`, in
    /// submission order, and returns how many were applied.
    ///
    /// Each update reads a snapshot of the container as left by the previous
    /// one. `component` must already hold state transferred from its
    /// predecessor.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::MissingStateContainer`] if `component` owns no
    /// state, or the first error raised by an update. Updates not yet applied
    /// stay queued.
    pub fn apply_pending(
        &self,
        key: &ComponentKey,
        component: &mut dyn Component,
    ) -> Result<usize, StateError> {
        let updates = self.queues().remove(key).unwrap_or_default();
        let total = updates.len();
        let mut updates = updates.into_iter();

        let mut applied = 0;
        while let Some(pending) = updates.next() {
            let snapshot = match component.state_container() {
                Some(container) => container.clone_box(),
                None => {
                    self.requeue(key, std::iter::once(pending).chain(updates));
                    return Err(StateError::MissingStateContainer);
                }
            };
            // The update is consumed even when it fails.
            if let Err(e) = pending.update.update_state(snapshot.as_ref(), component) {
                tracing::warn!(key = %key, error = %e, "state update failed");
                self.requeue(key, updates);
                return Err(e);
            }
            applied += 1;
        }

        tracing::debug!(key = %key, applied, total, "applied pending state updates");
        Ok(applied)
    }

    fn requeue(&self, key: &ComponentKey, rest: impl Iterator<Item = PendingUpdate>) {
        let mut queues = self.queues();
        let queue = queues.entry(key.clone()).or_default();
        let newer = std::mem::take(queue);
        queue.extend(rest);
        queue.extend(newer);
    }
}

impl StateUpdateDispatcher for StateHandler {
    fn dispatch(&self, key: &ComponentKey, mode: DispatchMode, update: Box<dyn StateUpdate>) {
        self.queues()
            .entry(key.clone())
            .or_default()
            .push(PendingUpdate { mode, update });
    }
}
