//! Accumulated validation output.

use std::fmt;

use serde::Serialize;

/// A single reported validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Defect {
    /// Synthetic location: document path, entry index and optional field.
    pub location: String,
    /// Human-readable description.
    pub message: String,
}

impl Defect {
    /// Create a defect at `location`.
    pub fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Ordered, append-only list of defects.
///
/// Validators take `&mut DefectLog` and keep going after every push, so a
/// single run reports every problem in the data rather than the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DefectLog {
    defects: Vec<Defect>,
}

impl DefectLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a defect.
    pub fn push(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.defects.push(Defect::new(location, message));
    }

    /// Number of recorded defects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defects.len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defects.is_empty()
    }

    /// Iterate over defects in the order they were recorded.
    pub fn iter(&self) -> std::slice::Iter<'_, Defect> {
        self.defects.iter()
    }

    /// Append every defect from `other`.
    pub fn extend(&mut self, other: DefectLog) {
        self.defects.extend(other.defects);
    }

    /// Consume the log and return the inner list.
    #[must_use]
    pub fn into_inner(self) -> Vec<Defect> {
        self.defects
    }
}

impl<'a> IntoIterator for &'a DefectLog {
    type Item = &'a Defect;
    type IntoIter = std::slice::Iter<'a, Defect>;

    fn into_iter(self) -> Self::IntoIter {
        self.defects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defect_display() {
        let defect = Defect::new("data/items.json#items[2]", "missing 'desc'");
        assert_eq!(
            defect.to_string(),
            "data/items.json#items[2]: missing 'desc'"
        );
    }

    #[test]
    fn test_log_keeps_insertion_order() {
        let mut log = DefectLog::new();
        log.push("b", "second");
        log.push("a", "first");

        let messages: Vec<_> = log.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
    }

    #[test]
    fn test_extend_appends() {
        let mut log = DefectLog::new();
        log.push("x", "one");
        let mut other = DefectLog::new();
        other.push("y", "two");

        log.extend(other);
        assert_eq!(log.len(), 2);
        assert_eq!(log.into_inner()[1].location, "y");
    }
}
