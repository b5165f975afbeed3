//! Favorites Registry
//!
//! The explicit owner of the favorites relation: event ids the current
//! session has marked. Owned by the central app state and read by the
//! dashboard and favorites views directly, instead of threading a
//! value/setter pair through navigation parameters.
//!
//! Membership is the whole story: absence means "not favorited", so no
//! false entries ever persist. Favorites are deliberately volatile; the
//! registry starts empty on every launch and is cleared on logout.

use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
pub struct FavoritesRegistry {
    favorites: HashSet<String>,
}

impl FavoritesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// O(1) membership test; false for any id never toggled.
    pub fn contains(&self, event_id: &str) -> bool {
        self.favorites.contains(event_id)
    }

    /// Mark an event as favorited. A no-op if it already is.
    pub fn toggle(&mut self, event_id: &str) {
        self.favorites.insert(event_id.to_string());
    }

    /// Remove an event from the favorites. Removing an absent id is a
    /// no-op. Callers must have obtained user confirmation first.
    pub fn remove(&mut self, event_id: &str) {
        self.favorites.remove(event_id);
    }

    /// Drop every favorite (logout).
    pub fn clear(&mut self) {
        self.favorites.clear();
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ids_are_not_favorites() {
        let registry = FavoritesRegistry::new();
        assert!(!registry.contains("e1"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_toggle_then_remove_round_trip() {
        let mut registry = FavoritesRegistry::new();
        registry.toggle("e1");
        assert!(registry.contains("e1"));

        registry.remove("e1");
        assert!(!registry.contains("e1"));
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut registry = FavoritesRegistry::new();
        registry.toggle("e1");
        registry.toggle("e1");
        assert!(registry.contains("e1"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut registry = FavoritesRegistry::new();
        registry.remove("never-added");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear_empties_registry() {
        let mut registry = FavoritesRegistry::new();
        registry.toggle("e1");
        registry.toggle("e2");
        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.contains("e1"));
    }
}
