// Extracted keyword span type

/// A single keyword occurrence reported by a scan.
///
/// `start` and `end` are zero-based half-open character offsets into the
/// scanned text (after case folding, when the automaton is
/// case-insensitive), so `text[start..end]` spells `keyword`. Offsets count
/// `char`s, not bytes: on character-segmented scripts one offset step is one
/// code point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeywordMatch {
    /// Offset of the first character of the occurrence.
    pub start: usize,

    /// Offset one past the last character of the occurrence.
    pub end: usize,

    /// The matched vocabulary keyword (in its stored, case-folded form).
    pub keyword: String,

    /// The label attached to the keyword.
    pub label: String,
}

impl KeywordMatch {
    /// Create a new match.
    pub fn new(
        start: usize,
        end: usize,
        keyword: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            keyword: keyword.into(),
            label: label.into(),
        }
    }

    /// Length of the occurrence in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty. Scans never produce empty spans.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_match() {
        let m = KeywordMatch::new(4, 7, "gps", "\u{8BBE}\u{5907}");
        assert_eq!(m.start, 4);
        assert_eq!(m.end, 7);
        assert_eq!(m.keyword, "gps");
        assert_eq!(m.label, "\u{8BBE}\u{5907}");
    }

    #[test]
    fn len_counts_characters() {
        let m = KeywordMatch::new(7, 9, "\u{8BBE}\u{5907}", "\u{8BBE}\u{5907}");
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());
    }

    #[test]
    fn clone_and_eq() {
        let m = KeywordMatch::new(0, 3, "gps", "device");
        let cloned = m.clone();
        assert_eq!(m, cloned);
    }
}
