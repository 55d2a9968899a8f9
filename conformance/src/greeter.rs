//! Greeter: update methods that read the component's own spec instance.

use std::sync::Arc;

use stately_runtime::{Component, StateValue};

/// Update methods of [`Greeter`], bound to a configured salutation.
#[derive(Debug)]
pub struct GreeterSpec {
    salutation: String,
}

impl GreeterSpec {
    /// Creates a spec greeting with `salutation`.
    pub fn new(salutation: impl Into<String>) -> Self {
        Self {
            salutation: salutation.into(),
        }
    }

    fn greet(&self, name: String, greeting: &mut StateValue<String>) {
        greeting.set(format!("{}, {name}!", self.salutation));
    }
}

/// A greeter component.
pub struct Greeter {
    spec: Arc<GreeterSpec>,
    state_container: GreeterStateContainer,
}

impl Greeter {
    /// Creates a greeter generation bound to `spec`.
    #[must_use]
    pub fn new(spec: Arc<GreeterSpec>) -> Self {
        Self {
            spec,
            state_container: GreeterStateContainer {
                greeting: String::new(),
            },
        }
    }

    /// Returns the last greeting.
    #[must_use]
    pub fn greeting(&self) -> &str {
        &self.state_container.greeting
    }
}

impl Component for Greeter {}

include!(concat!(env!("OUT_DIR"), "/greeter_state.rs"));
