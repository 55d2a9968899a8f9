//! End-to-end behaviour of generated state modules.
//!
//! Each test mounts a component generation in a scoped context, requests
//! updates through the generated entry points, re-creates the component,
//! carries its state forward and replays the queue against it.

use std::sync::Arc;

use stately_conformance::badge::Badge;
use stately_conformance::counter::Counter;
use stately_conformance::greeter::{Greeter, GreeterSpec};
use stately_conformance::label::Label;
use stately_conformance::title::Title;
use stately_runtime::{
    carry_forward, Component, ComponentContext, ComponentKey, ComponentState, DispatchMode,
    StateHandler,
};

/// Mounts `current` under `key` and returns the handler and scoped context.
fn mount(key: &str, current: Arc<dyn Component>) -> (Arc<StateHandler>, ComponentContext) {
    let handler = Arc::new(StateHandler::new());
    let context = ComponentContext::new(handler.clone()).with_scope(key, current);
    (handler, context)
}

/// Carries state from `current` into `next` and applies everything queued.
fn rerender<C: Component>(
    handler: &StateHandler,
    context: &ComponentContext,
    key: &str,
    current: &dyn Component,
    mut next: C,
) -> C {
    carry_forward(context, current, &mut next).unwrap();
    handler.apply_pending(&ComponentKey::from(key), &mut next).unwrap();
    next
}

// =============================================================================
// Counter
// =============================================================================

#[test]
fn counter_increment_reaches_eight() {
    let current = Arc::new(Counter::new(5));
    let (handler, context) = mount("counter", current.clone());

    Counter::increment(&context, 3);
    assert_eq!(handler.pending_modes(&"counter".into()), [DispatchMode::Sync]);
    // Nothing happens until the queue is drained.
    assert_eq!(current.count(), 5);

    let next = rerender(&handler, &context, "counter", current.as_ref(), Counter::new(0));
    assert_eq!(next.count(), 8);
}

#[test]
fn async_entry_point_uses_the_async_queue() {
    let current = Arc::new(Counter::new(1));
    let (handler, context) = mount("counter", current.clone());

    Counter::increment_async(&context, 2);
    Counter::increment(&context, 4);
    assert_eq!(
        handler.pending_modes(&"counter".into()),
        [DispatchMode::Async, DispatchMode::Sync]
    );

    let next = rerender(&handler, &context, "counter", current.as_ref(), Counter::new(0));
    assert_eq!(next.count(), 7);
}

#[test]
fn queued_updates_each_see_the_previous_result() {
    let current = Arc::new(Counter::new(10));
    let (handler, context) = mount("counter", current.clone());

    Counter::increment(&context, 5);
    Counter::reset(&context);
    Counter::increment(&context, 2);

    let next = rerender(&handler, &context, "counter", current.as_ref(), Counter::new(0));
    assert_eq!(next.count(), 2);
}

#[test]
fn detached_context_is_a_no_op() {
    let handler = Arc::new(StateHandler::new());
    let unscoped = ComponentContext::new(handler.clone());

    Counter::increment(&unscoped, 3);
    Counter::increment_async(&ComponentContext::detached(), 3);
    Label::lazy_update_text(&unscoped, "ignored".to_string());

    assert_eq!(handler.pending_count(&"counter".into()), 0);
}

#[test]
fn scope_of_another_component_type_is_ignored() {
    let (handler, context) = mount("counter", Arc::new(Badge));
    Counter::increment(&context, 3);
    assert_eq!(handler.pending_count(&"counter".into()), 0);
}

#[test]
fn update_applied_to_the_wrong_component_fails_and_the_rest_stays_queued() {
    let current = Arc::new(Counter::new(1));
    let (handler, context) = mount("counter", current.clone());
    Counter::increment(&context, 1);
    Counter::increment(&context, 2);

    let key = ComponentKey::from("counter");
    let mut wrong = Title::new("x");
    assert!(handler.apply_pending(&key, &mut wrong).is_err());
    assert_eq!(handler.pending_count(&key), 1);

    let mut next = Counter::new(1);
    assert_eq!(handler.apply_pending(&key, &mut next), Ok(1));
    assert_eq!(next.count(), 3);
}

// =============================================================================
// State transfer
// =============================================================================

#[test]
fn transfer_copies_every_field() {
    let (handler, context) = mount("title", Arc::new(Title::new("draft")));
    Title::wrap(&context, "<".to_string(), ">".to_string());

    let mut prev = Title::new("draft");
    handler.apply_pending(&"title".into(), &mut prev).unwrap();
    assert_eq!(prev.title(), "<draft>");

    let mut next = Title::new("");
    assert!(carry_forward(&context, &prev, &mut next).unwrap());
    assert_eq!(next.title(), "<draft>");
    assert_eq!(next.history(), ["draft"]);
}

#[test]
fn has_state_reflects_the_model() {
    assert!(Counter::new(0).has_state());
    assert!(Counter::new(0).state_container().is_some());
    assert!(!Badge.has_state());
    assert!(Badge.state_container().is_none());

    let mut next = Badge;
    assert!(!carry_forward(&ComponentContext::detached(), &Counter::new(3), &mut next).unwrap());
}

#[test]
fn transfer_rejects_a_foreign_container() {
    let context = ComponentContext::detached();
    let mut next = Counter::new(0);
    assert!(carry_forward(&context, &Title::new("x"), &mut next).is_err());
}

// =============================================================================
// Argument order
// =============================================================================

#[test]
fn interleaved_arguments_keep_their_declared_order() {
    let current = Arc::new(Title::new("title"));
    let (handler, context) = mount("title", current.clone());

    Title::wrap(&context, "[".to_string(), "]".to_string());
    Title::touch(&context);
    Title::wrap(&context, "(".to_string(), ")".to_string());

    let next = rerender(&handler, &context, "title", current.as_ref(), Title::new(""));
    assert_eq!(next.title(), "([title])");
    assert_eq!(next.history(), ["title", "[title]"]);
}

#[test]
fn generic_captured_arguments_keep_their_type() {
    let current = Arc::new(Title::new("x"));
    let (handler, context) = mount("title", current.clone());

    Title::push_display(&context, 42u32);
    Title::push_display_async(&context, '!');
    Title::push_display(&context, 1.5f64);

    let next = rerender(&handler, &context, "title", current.as_ref(), Title::new(""));
    assert_eq!(next.title(), "x42!1.5");
    assert!(next.history().is_empty());
}

#[test]
fn captured_arguments_are_frozen_at_request_time() {
    let current = Arc::new(Label::new("hello", 0));
    let (handler, context) = mount("label", current.clone());

    let mut suffix = String::from(", world");
    Label::append(&context, suffix.clone());
    suffix.push_str("!!!");

    let next = rerender(&handler, &context, "label", current.as_ref(), Label::new("", 0));
    assert_eq!(next.text(), "hello, world");
    assert_eq!(next.edits(), 1);
}

// =============================================================================
// Lazy updates
// =============================================================================

#[test]
fn lazy_update_overwrites_without_running_update_methods() {
    let current = Arc::new(Label::new("bye", 4));
    let (handler, context) = mount("label", current.clone());

    Label::lazy_update_text(&context, "hi".to_string());
    let key = ComponentKey::from("label");
    assert_eq!(handler.pending_modes(&key), [DispatchMode::Lazy]);
    assert!(!handler.needs_render(&key));

    let next = rerender(&handler, &context, "label", current.as_ref(), Label::new("", 0));
    assert_eq!(next.text(), "hi");
    // `append` never ran.
    assert_eq!(next.edits(), 4);
}

#[test]
fn lazy_and_regular_updates_share_one_queue() {
    let current = Arc::new(Label::new("a", 0));
    let (handler, context) = mount("label", current.clone());

    Label::append(&context, "b".to_string());
    Label::lazy_update_text(&context, "x".to_string());
    Label::append_async(&context, "y".to_string());
    assert!(handler.needs_render(&"label".into()));

    let next = rerender(&handler, &context, "label", current.as_ref(), Label::new("", 0));
    assert_eq!(next.text(), "xy");
    assert_eq!(next.edits(), 2);
}

// =============================================================================
// Injected dependencies
// =============================================================================

#[test]
fn instance_scoped_spec_is_carried_by_the_command() {
    let spec = Arc::new(GreeterSpec::new("Hello"));
    let current = Arc::new(Greeter::new(spec.clone()));
    let (handler, context) = mount("greeter", current.clone());

    Greeter::greet(&context, "Ada".to_string());
    assert_eq!(Arc::strong_count(&spec), 3);

    let next = rerender(
        &handler,
        &context,
        "greeter",
        current.as_ref(),
        Greeter::new(Arc::new(GreeterSpec::new("Goodbye"))),
    );
    assert_eq!(next.greeting(), "Hello, Ada!");
    // The applied command released its handle.
    assert_eq!(Arc::strong_count(&spec), 2);
}
