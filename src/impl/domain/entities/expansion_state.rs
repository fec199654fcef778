use std::collections::HashSet;

/// Set of row keys whose children are currently shown.
///
/// Membership of a leaf key is allowed but has no observable effect on
/// projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    pub fn expand(&mut self, key: impl Into<String>) {
        self.expanded.insert(key.into());
    }

    pub fn collapse(&mut self, key: &str) {
        self.expanded.remove(key);
    }

    /// Symmetric difference with `{key}`.
    pub fn toggle(&mut self, key: &str) {
        if !self.expanded.remove(key) {
            self.expanded.insert(key.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExpansionState {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            expanded: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut state = ExpansionState::new();
        state.toggle("rev");
        assert!(state.is_expanded("rev"));
        state.toggle("rev");
        assert!(!state.is_expanded("rev"));
        assert!(state.is_empty());
    }

    #[test]
    fn collect_from_keys() {
        let state: ExpansionState = ["a", "b", "a"].into_iter().collect();
        assert_eq!(state.len(), 2);
        assert!(state.is_expanded("a"));
        assert!(state.is_expanded("b"));
        assert!(!state.is_expanded("c"));
    }
}
