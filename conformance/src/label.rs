//! Label: a lazily updatable text and an edit counter.

use stately_runtime::{Component, StateValue};

/// Update methods of [`Label`].
pub struct LabelSpec;

impl LabelSpec {
    fn append(text: &mut StateValue<String>, suffix: String, edits: &mut StateValue<u32>) {
        if let Some(text) = text.get_mut() {
            text.push_str(&suffix);
        }
        let current = edits.get().copied().unwrap_or_default();
        edits.set(current + 1);
    }
}

/// A label component.
pub struct Label {
    state_container: LabelStateContainer,
}

impl Label {
    /// Creates a label generation.
    #[must_use]
    pub fn new(text: impl Into<String>, edits: u32) -> Self {
        Self {
            state_container: LabelStateContainer {
                text: text.into(),
                edits,
            },
        }
    }

    /// Returns the label text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.state_container.text
    }

    /// Returns how many edits were applied.
    #[must_use]
    pub fn edits(&self) -> u32 {
        self.state_container.edits
    }
}

impl Component for Label {}

include!(concat!(env!("OUT_DIR"), "/label_state.rs"));
