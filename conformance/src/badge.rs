//! Badge: a component without state. Its model declares an update method,
//! which generates nothing, so no `BadgeSpec` exists.

use stately_runtime::Component;

/// A stateless badge component.
#[derive(Debug, Default)]
pub struct Badge;

impl Component for Badge {}

include!(concat!(env!("OUT_DIR"), "/badge_state.rs"));
