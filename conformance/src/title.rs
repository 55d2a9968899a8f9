//! Title: a string wrapped by captured affixes, with its previous values kept.

use stately_runtime::{Component, StateValue};

/// Update methods of [`Title`].
pub struct TitleSpec;

impl TitleSpec {
    fn wrap(
        prefix: String,
        title: &mut StateValue<String>,
        suffix: String,
        history: &mut StateValue<Vec<String>>,
    ) {
        let old = title.take().unwrap_or_default();
        title.set(format!("{prefix}{old}{suffix}"));
        if let Some(history) = history.get_mut() {
            history.push(old);
        }
    }

    fn touch() {}

    fn push_display<T: std::fmt::Display>(value: T, title: &mut StateValue<String>) {
        if let Some(title) = title.get_mut() {
            title.push_str(&value.to_string());
        }
    }
}

/// A title component.
pub struct Title {
    state_container: TitleStateContainer,
}

impl Title {
    /// Creates a title generation with an empty history.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            state_container: TitleStateContainer {
                title: title.into(),
                history: Vec::new(),
            },
        }
    }

    /// Returns the current title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.state_container.title
    }

    /// Returns previous titles, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.state_container.history
    }
}

impl Component for Title {}

include!(concat!(env!("OUT_DIR"), "/title_state.rs"));
