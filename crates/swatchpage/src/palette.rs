//! Name-to-hex mapping extracted from a stylesheet.

use std::collections::HashMap;

/// Custom property names mapped to their hex values.
///
/// Names are unique. Iteration follows first-seen order; re-inserting a
/// name replaces its value in place, so the last declaration wins without
/// moving the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteMapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl PaletteMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `name`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, hex: impl Into<String>) -> Option<String> {
        let name = name.into();
        let hex = hex.into();

        if let Some(&slot) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[slot].1, hex));
        }

        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, hex));
        None
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, hex)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, hex)| (name.as_str(), hex.as_str()))
    }
}

impl<N: Into<String>, H: Into<String>> FromIterator<(N, H)> for PaletteMapping {
    fn from_iter<I: IntoIterator<Item = (N, H)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (name, hex) in iter {
            mapping.insert(name, hex);
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut mapping = PaletteMapping::new();
        assert!(mapping.is_empty());
        assert_eq!(mapping.insert("--pry-bg", "#111"), None);
        assert_eq!(mapping.get("--pry-bg"), Some("#111"));
        assert_eq!(mapping.get("--txt"), None);
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_last_value_wins_in_first_position() {
        let mut mapping = PaletteMapping::new();
        mapping.insert("--a", "#111");
        mapping.insert("--b", "#222");
        assert_eq!(mapping.insert("--a", "#333"), Some("#111".to_string()));

        let entries: Vec<_> = mapping.iter().collect();
        assert_eq!(entries, vec![("--a", "#333"), ("--b", "#222")]);
    }

    #[test]
    fn test_from_iterator_preserves_order() {
        let mapping: PaletteMapping = [("--z", "#000"), ("--y", "#fff"), ("--x", "#abc")]
            .into_iter()
            .collect();
        let names: Vec<_> = mapping.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["--z", "--y", "--x"]);
    }
}
