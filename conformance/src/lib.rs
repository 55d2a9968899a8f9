//! Stately conformance suite.
//!
//! Fixture components whose state machinery is generated at build time from
//! the spec models in `specs/`. Each module pairs a hand-written component
//! and spec with the state module `stately-codegen` emits for it; the
//! integration tests drive the generated entry points through a
//! [`stately_runtime::StateHandler`] and check the resulting state.
//!
//! | Fixture | Covers |
//! |---------|--------|
//! | [`counter::Counter`] | captured delta, read-modify-write slot, slot-only method |
//! | [`label::Label`] | lazy updater next to a regular update method |
//! | [`title::Title`] | interleaved captured and slot parameters, argument-less method |
//! | [`greeter::Greeter`] | instance-scoped spec with injected dependencies |
//! | [`badge::Badge`] | stateless component |
//!
//! ```
//! use std::sync::Arc;
//! use stately_conformance::counter::Counter;
//! use stately_runtime::{carry_forward, ComponentContext, ComponentKey, StateHandler};
//!
//! let handler = Arc::new(StateHandler::new());
//! let current = Arc::new(Counter::new(5));
//! let context = ComponentContext::new(handler.clone()).with_scope("counter", current.clone());
//!
//! Counter::increment(&context, 3);
//!
//! let mut next = Counter::new(0);
//! carry_forward(&context, current.as_ref(), &mut next).unwrap();
//! handler.apply_pending(&ComponentKey::from("counter"), &mut next).unwrap();
//! assert_eq!(next.count(), 8);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod badge;
pub mod counter;
pub mod greeter;
pub mod label;
pub mod title;
