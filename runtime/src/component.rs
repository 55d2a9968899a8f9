//! Type-erased component and state container contracts.
//!
//! Components are immutable values recreated on every render; their state
//! lives in a separate container that is carried from one generation to the
//! next by [`ComponentState::transfer_state`].

use std::any::Any;

use crate::context::ComponentContext;
use crate::error::StateError;

/// Access to `dyn Any` for downcasting trait objects.
///
/// Implemented for every `'static` type; never implement it by hand.
pub trait AsAny: Any {
    /// Returns `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
    /// Returns `self` as `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The mutable record holding one component generation's state values.
pub trait StateContainer: AsAny + Send + Sync {
    /// Copies the container into a fresh box.
    fn clone_box(&self) -> Box<dyn StateContainer>;
}

/// State hooks of a component. Generated code overrides these.
///
/// The defaults describe a stateless component: absence of an override is
/// the "no state" answer.
pub trait ComponentState {
    /// Returns true if the component owns mutable state.
    fn has_state(&self) -> bool {
        false
    }

    /// Returns the component's current state container.
    fn state_container(&self) -> Option<&dyn StateContainer> {
        None
    }

    /// Copies every state value from `prev_state_container` into this
    /// (newly created) component's container.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::ContainerMismatch`] if the previous container
    /// belongs to another component type.
    fn transfer_state(
        &mut self,
        _context: &ComponentContext,
        _prev_state_container: &dyn StateContainer,
    ) -> Result<(), StateError> {
        Ok(())
    }
}

/// A component instance.
pub trait Component: ComponentState + AsAny + Send + Sync {}

/// Downcasts a state container to its concrete type.
///
/// # Errors
///
/// Returns [`StateError::ContainerMismatch`] if `container` is not a `T`.
pub fn downcast_container<T: StateContainer>(
    container: &dyn StateContainer,
) -> Result<&T, StateError> {
    container
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(StateError::container_mismatch::<T>)
}

/// Downcasts a component to its concrete type. Returns `None` on mismatch.
#[must_use]
pub fn downcast_component<T: Component>(component: &dyn Component) -> Option<&T> {
    component.as_any().downcast_ref::<T>()
}

/// Downcasts a component mutably to its concrete type.
///
/// # Errors
///
/// Returns [`StateError::ComponentMismatch`] if `component` is not a `T`.
pub fn downcast_component_mut<T: Component>(
    component: &mut dyn Component,
) -> Result<&mut T, StateError> {
    component
        .as_any_mut()
        .downcast_mut::<T>()
        .ok_or_else(StateError::component_mismatch::<T>)
}

/// Carries state from the component generation `prev` to its replacement
/// `next`. Returns `false` if `next` is stateless and nothing was copied.
///
/// Must run before any queued update for `next` is applied.
///
/// # Errors
///
/// Returns [`StateError::MissingStateContainer`] if `next` has state but
/// `prev` exposes no container, or any error from
/// [`ComponentState::transfer_state`].
pub fn carry_forward(
    context: &ComponentContext,
    prev: &dyn Component,
    next: &mut dyn Component,
) -> Result<bool, StateError> {
    if !next.has_state() {
        return Ok(false);
    }
    let prev_state_container = prev
        .state_container()
        .ok_or(StateError::MissingStateContainer)?;
    next.transfer_state(context, prev_state_container)?;
    tracing::trace!("transferred state to new component generation");
    Ok(true)
}
