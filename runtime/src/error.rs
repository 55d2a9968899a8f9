//! Error types for applying state updates.

use thiserror::Error;

/// Errors raised while replaying an update or transferring state.
///
/// All of them indicate a scheduler bug (an update routed to the wrong
/// component generation), never a user-visible condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The state container passed in is not of the expected concrete type.
    #[error("state container is not a `{expected}`")]
    ContainerMismatch {
        /// Concrete container type the update was generated for.
        expected: &'static str,
    },

    /// The component passed in is not of the expected concrete type.
    #[error("component is not a `{expected}`")]
    ComponentMismatch {
        /// Concrete component type the update was generated for.
        expected: &'static str,
    },

    /// A state operation was requested on a component that owns no state.
    #[error("component has no state container")]
    MissingStateContainer,
}

impl StateError {
    /// Creates a container mismatch error naming `T`.
    #[must_use]
    pub fn container_mismatch<T: ?Sized>() -> Self {
        StateError::ContainerMismatch {
            expected: std::any::type_name::<T>(),
        }
    }

    /// Creates a component mismatch error naming `T`.
    #[must_use]
    pub fn component_mismatch<T: ?Sized>() -> Self {
        StateError::ComponentMismatch {
            expected: std::any::type_name::<T>(),
        }
    }
}
