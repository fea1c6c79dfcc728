use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The learner's accumulated progress.
///
/// Entries are scoped ids such as `3d-sphere` or `concept-ray`, so the
/// same set covers every study domain without collisions. Sets are
/// ordered so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSet {
    pub learned: BTreeSet<String>,
    pub favorites: BTreeSet<String>,
}

impl ProgressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the learned mark for an id. Returns the new state.
    pub fn toggle_learned(&mut self, id: &str) -> bool {
        if self.learned.remove(id) {
            false
        } else {
            self.learned.insert(id.to_string());
            true
        }
    }

    /// Flip the favorite mark for an id. Returns the new state.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        }
    }

    pub fn is_learned(&self, id: &str) -> bool {
        self.learned.contains(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn learned_count(&self) -> usize {
        self.learned.len()
    }

    pub fn favorites_count(&self) -> usize {
        self.favorites.len()
    }

    /// Learned entries as a whole-number percentage of `total`,
    /// rounded to nearest. Zero when `total` is zero.
    pub fn completion_percentage(&self, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        (self.learned.len() as f64 / total as f64 * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_learned_flips_membership() {
        let mut p = ProgressSet::new();
        assert!(p.toggle_learned("3d-cube"));
        assert!(p.is_learned("3d-cube"));
        assert_eq!(p.learned_count(), 1);
        assert!(!p.toggle_learned("3d-cube"));
        assert!(!p.is_learned("3d-cube"));
        assert_eq!(p.learned_count(), 0);
    }

    #[test]
    fn learned_and_favorites_are_independent() {
        let mut p = ProgressSet::new();
        p.toggle_favorite("2d-circle");
        assert!(p.is_favorite("2d-circle"));
        assert!(!p.is_learned("2d-circle"));
        p.toggle_learned("2d-circle");
        assert!(p.is_favorite("2d-circle"));
        assert!(p.is_learned("2d-circle"));
    }

    #[test]
    fn completion_percentage_rounds_to_nearest() {
        let mut p = ProgressSet::new();
        assert_eq!(p.completion_percentage(0), 0);
        assert_eq!(p.completion_percentage(87), 0);
        p.toggle_learned("a");
        // 1/87 = 1.149% rounds to 1
        assert_eq!(p.completion_percentage(87), 1);
        p.toggle_learned("b");
        // 2/3 = 66.7% rounds to 67
        assert_eq!(p.completion_percentage(3), 67);
    }
}
