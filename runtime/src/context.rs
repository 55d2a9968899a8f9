//! Component context: scope resolution and update dispatch.

use std::fmt;
use std::sync::Arc;

use crate::component::Component;
use crate::update::StateUpdate;

/// Stable identity of a component across its generations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentKey(String);

impl ComponentKey {
    /// Creates a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Queue discipline an update is submitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchMode {
    /// Apply and re-render before returning control to the caller's frame.
    Sync,
    /// Apply on a later turn.
    Async,
    /// Single-field overwrite; never triggers a re-render on its own and may
    /// be reordered against other lazy updates.
    Lazy,
}

impl DispatchMode {
    /// Returns the lowercase name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchMode::Sync => "sync",
            DispatchMode::Async => "async",
            DispatchMode::Lazy => "lazy",
        }
    }
}

/// Receives update commands for a component. Implemented by the scheduler.
pub trait StateUpdateDispatcher: Send + Sync {
    /// Accepts ownership of `update`, to be applied later to the component
    /// identified by `key`.
    fn dispatch(&self, key: &ComponentKey, mode: DispatchMode, update: Box<dyn StateUpdate>);
}

#[derive(Clone)]
struct Scope {
    key: ComponentKey,
    component: Arc<dyn Component>,
}

/// The context handed to generated entry points.
///
/// A context without a scope is detached (its component has been unmounted);
/// updates submitted through it are dropped.
#[derive(Clone, Default)]
pub struct ComponentContext {
    scope: Option<Scope>,
    dispatcher: Option<Arc<dyn StateUpdateDispatcher>>,
}

impl ComponentContext {
    /// Creates a context with no scope that routes updates to `dispatcher`.
    pub fn new(dispatcher: Arc<dyn StateUpdateDispatcher>) -> Self {
        Self {
            scope: None,
            dispatcher: Some(dispatcher),
        }
    }

    /// Creates a detached context.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Returns a copy of this context scoped to `component`.
    #[must_use]
    pub fn with_scope(&self, key: impl Into<ComponentKey>, component: Arc<dyn Component>) -> Self {
        Self {
            scope: Some(Scope {
                key: key.into(),
                component,
            }),
            dispatcher: self.dispatcher.clone(),
        }
    }

    /// Returns the component this context is scoped to, if still attached.
    #[must_use]
    pub fn component_scope(&self) -> Option<&dyn Component> {
        self.scope.as_ref().map(|scope| scope.component.as_ref())
    }

    /// Returns the key of the scoped component.
    #[must_use]
    pub fn scope_key(&self) -> Option<&ComponentKey> {
        self.scope.as_ref().map(|scope| &scope.key)
    }

    /// Submits an update to be applied synchronously.
    pub fn update_state(&self, update: Box<dyn StateUpdate>) {
        self.dispatch(DispatchMode::Sync, update);
    }

    /// Submits an update to be applied asynchronously.
    pub fn update_state_async(&self, update: Box<dyn StateUpdate>) {
        self.dispatch(DispatchMode::Async, update);
    }

    /// Submits a lazy single-field update.
    pub fn update_state_lazy(&self, update: Box<dyn StateUpdate>) {
        self.dispatch(DispatchMode::Lazy, update);
    }

    fn dispatch(&self, mode: DispatchMode, update: Box<dyn StateUpdate>) {
        match (&self.scope, &self.dispatcher) {
            (Some(scope), Some(dispatcher)) => {
                tracing::debug!(key = %scope.key, mode = mode.as_str(), "dispatching state update");
                dispatcher.dispatch(&scope.key, mode, update);
            }
            _ => {
                tracing::debug!(mode = mode.as_str(), "dropping state update on detached context");
            }
        }
    }
}

impl fmt::Debug for ComponentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentContext")
            .field("scope", &self.scope_key())
            .field("has_dispatcher", &self.dispatcher.is_some())
            .finish()
    }
}
