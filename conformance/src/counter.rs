//! Counter: one `i32` state value driven by a captured delta.

use stately_runtime::{Component, StateValue};

/// Update methods of [`Counter`].
pub struct CounterSpec;

impl CounterSpec {
    fn increment(delta: i32, count: &mut StateValue<i32>) {
        let current = count.get().copied().unwrap_or_default();
        count.set(current.wrapping_add(delta));
    }

    fn reset(count: &mut StateValue<i32>) {
        count.set(0);
    }
}

/// A counter component.
pub struct Counter {
    state_container: CounterStateContainer,
}

impl Counter {
    /// Creates a counter generation holding `count`.
    #[must_use]
    pub fn new(count: i32) -> Self {
        Self {
            state_container: CounterStateContainer { count },
        }
    }

    /// Returns the current count.
    #[must_use]
    pub fn count(&self) -> i32 {
        self.state_container.count
    }
}

impl Component for Counter {}

include!(concat!(env!("OUT_DIR"), "/counter_state.rs"));
