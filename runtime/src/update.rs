//! The update-command capability.

use crate::component::{Component, StateContainer};
use crate::error::StateError;

/// A deferred state mutation.
///
/// Created on the caller's thread when an update is requested, owned by the
/// queue that accepts it, and consumed by exactly one call to
/// [`update_state`](StateUpdate::update_state).
pub trait StateUpdate: Send {
    /// Replays the mutation: reads from `state_container` (the state current
    /// at apply time) and writes into `new_component`'s container.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the container or component is not of the
    /// concrete type the update was generated for.
    fn update_state(
        self: Box<Self>,
        state_container: &dyn StateContainer,
        new_component: &mut dyn Component,
    ) -> Result<(), StateError>;
}

/// An inline update built from a closure; used for lazy single-field writes.
pub struct LazyStateUpdate<F> {
    apply: F,
}

impl<F> LazyStateUpdate<F>
where
    F: FnOnce(&dyn StateContainer, &mut dyn Component) -> Result<(), StateError> + Send,
{
    /// Wraps `apply`.
    pub fn new(apply: F) -> Self {
        Self { apply }
    }
}

impl<F> StateUpdate for LazyStateUpdate<F>
where
    F: FnOnce(&dyn StateContainer, &mut dyn Component) -> Result<(), StateError> + Send,
{
    fn update_state(
        self: Box<Self>,
        state_container: &dyn StateContainer,
        new_component: &mut dyn Component,
    ) -> Result<(), StateError> {
        (self.apply)(state_container, new_component)
    }
}
