//! Host introspection collectors
//!
//! Each collector produces an `InfoRecord`: an ordered label/value list the
//! renderer turns into one table row per entry. Records are built fresh for
//! every request and dropped with the response; nothing is cached or shared.

pub mod path;
pub mod system;

/// Ordered label→value mapping
///
/// Insertion order is display order. Labels are fixed per collector, so the
/// same collector always yields the same labels in the same order.
#[derive(Debug, Clone, Default)]
pub struct InfoRecord {
    entries: Vec<(&'static str, String)>,
}

impl InfoRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry, preserving insertion order
    pub fn push(&mut self, label: &'static str, value: impl Into<String>) {
        self.entries.push((label, value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(label, value)| (*label, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by label (linear scan; records hold a handful of entries)
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, value)| value.as_str())
    }
}
