//! Stately runtime contracts.
//!
//! Code emitted by `stately-codegen` is written against the types in this
//! crate: the [`StateValue`] box handed to user update methods, the
//! [`StateUpdate`] capability every generated command implements, the
//! [`ComponentContext`] entry points resolve their scope from, and the
//! [`Component`]/[`ComponentState`]/[`StateContainer`] traits generated
//! components implement.
//!
//! [`StateHandler`] is a minimal in-memory queue implementing
//! [`StateUpdateDispatcher`]; it keeps the ordering contract and nothing else.
//!
//! ```
//! use stately_runtime::StateValue;
//!
//! let mut count = StateValue::from(5);
//! count.set(count.get().copied().unwrap_or_default() + 3);
//! assert_eq!(count.into_inner(), Some(8));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod component;
pub mod context;
pub mod error;
pub mod handler;
pub mod state_value;
pub mod update;

pub use component::{
    carry_forward, downcast_component, downcast_component_mut, downcast_container, AsAny,
    Component, ComponentState, StateContainer,
};
pub use context::{ComponentContext, ComponentKey, DispatchMode, StateUpdateDispatcher};
pub use error::StateError;
pub use handler::StateHandler;
pub use state_value::StateValue;
pub use update::{LazyStateUpdate, StateUpdate};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[derive(Clone)]
    struct TallyState {
        total: u32,
    }

    impl StateContainer for TallyState {
        fn clone_box(&self) -> Box<dyn StateContainer> {
            Box::new(self.clone())
        }
    }

    struct Tally {
        state_container: TallyState,
    }

    impl ComponentState for Tally {
        fn has_state(&self) -> bool {
            true
        }

        fn state_container(&self) -> Option<&dyn StateContainer> {
            Some(&self.state_container)
        }

        fn transfer_state(
            &mut self,
            _context: &ComponentContext,
            prev_state_container: &dyn StateContainer,
        ) -> Result<(), StateError> {
            let prev = downcast_container::<TallyState>(prev_state_container)?;
            self.state_container.total = prev.total;
            Ok(())
        }
    }

    impl Component for Tally {}

    struct Stateless;

    impl ComponentState for Stateless {}

    impl Component for Stateless {}

    fn add(amount: u32) -> Box<dyn StateUpdate> {
        Box::new(LazyStateUpdate::new(
            move |state_container: &dyn StateContainer, new_component: &mut dyn Component| {
                let old = downcast_container::<TallyState>(state_container)?;
                let total = old.total + amount;
                downcast_component_mut::<Tally>(new_component)?.state_container.total = total;
                Ok(())
            },
        ))
    }

    fn tally(total: u32) -> Tally {
        Tally {
            state_container: TallyState { total },
        }
    }

    #[test]
    fn detached_context_drops_updates() {
        let handler = Arc::new(StateHandler::new());
        let context = ComponentContext::new(handler.clone());
        assert!(context.component_scope().is_none());
        context.update_state(add(1));
        assert_eq!(handler.pending_count(&"tally".into()), 0);
        ComponentContext::detached().update_state_async(add(1));
    }

    #[test]
    fn scoped_context_queues_in_order() {
        let handler = Arc::new(StateHandler::new());
        let context =
            ComponentContext::new(handler.clone()).with_scope("tally", Arc::new(tally(0)));
        let key = ComponentKey::from("tally");

        context.update_state_lazy(add(1));
        assert!(!handler.needs_render(&key));
        context.update_state(add(10));
        context.update_state_async(add(100));

        assert_eq!(
            handler.pending_modes(&key),
            [DispatchMode::Lazy, DispatchMode::Sync, DispatchMode::Async]
        );
        assert!(handler.needs_render(&key));

        let mut next = tally(0);
        assert_eq!(handler.apply_pending(&key, &mut next), Ok(3));
        assert_eq!(next.state_container.total, 111);
        assert_eq!(handler.pending_count(&key), 0);
    }

    #[test]
    fn failed_update_keeps_the_rest_queued() {
        let handler = StateHandler::new();
        let key = ComponentKey::from("tally");
        handler.dispatch(&key, DispatchMode::Sync, add(1));
        handler.dispatch(&key, DispatchMode::Sync, add(2));

        let mut wrong = Stateless;
        assert_eq!(
            handler.apply_pending(&key, &mut wrong),
            Err(StateError::MissingStateContainer)
        );
        assert_eq!(handler.pending_count(&key), 2);

        let mut right = tally(0);
        assert_eq!(handler.apply_pending(&key, &mut right), Ok(2));
        assert_eq!(right.state_container.total, 3);
    }

    #[test]
    fn carry_forward_copies_state() {
        let context = ComponentContext::detached();
        let prev = tally(7);
        let mut next = tally(0);
        assert_eq!(carry_forward(&context, &prev, &mut next), Ok(true));
        assert_eq!(next.state_container.total, 7);

        let mut stateless = Stateless;
        assert_eq!(carry_forward(&context, &prev, &mut stateless), Ok(false));
    }

    #[test]
    fn downcast_mismatch_names_the_type() {
        let mut stateless = Stateless;
        let err = downcast_component_mut::<Tally>(&mut stateless)
            .err()
            .unwrap();
        assert!(err.to_string().contains("Tally"));
        assert!(downcast_component::<Tally>(&Stateless).is_none());
    }
}
