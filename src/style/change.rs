//! Change detection for rendered literals.

use std::collections::HashMap;

use super::SymbolizerLiteral;

/// Remembers the last literal rendered for each feature.
///
/// Callers evaluate a symbolizer, pass the result to [`ChangeTracker::update`]
/// and only re-render when it reports a change.
#[derive(Debug, Clone)]
pub struct ChangeTracker<L> {
    last: HashMap<String, L>,
}

impl<L> Default for ChangeTracker<L> {
    fn default() -> Self {
        Self {
            last: HashMap::new(),
        }
    }
}

impl<L: SymbolizerLiteral> ChangeTracker<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a literal for a feature.
    ///
    /// Returns `true` if the feature is new or its literal differs from the
    /// stored one.
    pub fn update(&mut self, feature_id: &str, literal: L) -> bool {
        match self.last.get_mut(feature_id) {
            Some(previous) if previous.equals(&literal) => false,
            Some(previous) => {
                *previous = literal;
                true
            }
            None => {
                self.last.insert(feature_id.to_string(), literal);
                true
            }
        }
    }

    /// Get the last literal stored for a feature.
    pub fn get(&self, feature_id: &str) -> Option<&L> {
        self.last.get(feature_id)
    }

    /// Drop a feature, e.g. when it leaves the view.
    pub fn forget(&mut self, feature_id: &str) -> Option<L> {
        self.last.remove(feature_id)
    }

    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PolygonLiteral;

    fn fill(colour: &str) -> PolygonLiteral {
        PolygonLiteral::new(Some(colour.to_string()), None, None, 0.75).unwrap()
    }

    #[test]
    fn test_first_update_is_change() {
        let mut tracker = ChangeTracker::new();
        assert!(tracker.update("a", fill("#fff")));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_same_literal_is_not_change() {
        let mut tracker = ChangeTracker::new();
        tracker.update("a", fill("#fff"));
        assert!(!tracker.update("a", fill("#fff")));
    }

    #[test]
    fn test_different_literal_replaces() {
        let mut tracker = ChangeTracker::new();
        tracker.update("a", fill("#fff"));
        assert!(tracker.update("a", fill("#000")));
        assert_eq!(tracker.get("a"), Some(&fill("#000")));
    }

    #[test]
    fn test_forget() {
        let mut tracker = ChangeTracker::new();
        tracker.update("a", fill("#fff"));
        assert!(tracker.forget("a").is_some());
        assert!(tracker.is_empty());
        assert!(tracker.update("a", fill("#fff")));
    }
}
