//! One-slot mutable holder passed to user update methods.

/// A state-value box.
///
/// Generated update commands seed a box from the current state container,
/// hand `&mut StateValue<T>` to the user-written update method, then write
/// whatever the box holds into the new component's container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateValue<T> {
    value: Option<T>,
}

impl<T> StateValue<T> {
    /// Creates an empty box.
    #[must_use]
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Replaces the held value.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Returns the held value, if any.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns the held value mutably, if any.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Removes and returns the held value, leaving the box empty.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Returns true if the box holds a value.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Consumes the box, returning the held value.
    #[must_use]
    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for StateValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for StateValue<T> {
    fn from(value: T) -> Self {
        Self { value: Some(value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut count = StateValue::new();
        assert!(!count.is_set());
        count.set(5);
        assert_eq!(count.get(), Some(&5));
        if let Some(v) = count.get_mut() {
            *v += 3;
        }
        assert_eq!(count.into_inner(), Some(8));
    }

    #[test]
    fn take_empties_the_box() {
        let mut label = StateValue::from("bye".to_string());
        assert_eq!(label.take().as_deref(), Some("bye"));
        assert_eq!(label.get(), None);
    }
}
