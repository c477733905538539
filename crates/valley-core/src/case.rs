// Case folding for keywords and scanned text

/// Lowercase a string using full Unicode case mapping.
///
/// Every keyword stored in a case-insensitive automaton, and every text
/// scanned through one, passes through this fold so that lookups and scans
/// agree on a single canonical form. Characters whose lowercase form expands
/// to several characters (e.g. `İ`) expand here too; reported offsets refer
/// to the folded sequence.
pub fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Split text into the character sequence the automaton operates on.
///
/// Folds case first unless `case_sensitive` is set.
pub fn chars_of(text: &str, case_sensitive: bool) -> Vec<char> {
    if case_sensitive {
        text.chars().collect()
    } else {
        text.chars().flat_map(char::to_lowercase).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string(cs: &[char]) -> String {
        cs.iter().collect()
    }

    #[test]
    fn fold_ascii() {
        assert_eq!(fold("GPS"), "gps");
        assert_eq!(fold("MiXeD"), "mixed");
    }

    #[test]
    fn fold_leaves_unicased_scripts_alone() {
        assert_eq!(fold("\u{6211}\u{6709}gps"), "\u{6211}\u{6709}gps");
    }

    #[test]
    fn fold_can_expand() {
        // U+0130 LATIN CAPITAL LETTER I WITH DOT ABOVE lowercases to two
        // characters; offsets are defined over the folded sequence.
        assert_eq!(fold("\u{0130}").chars().count(), 2);
    }

    #[test]
    fn chars_of_sensitive_keeps_case() {
        let cs = chars_of("GPS", true);
        assert_eq!(to_string(&cs), "GPS");
    }

    #[test]
    fn chars_of_insensitive_folds() {
        let cs = chars_of("GPS\u{8BBE}\u{5907}", false);
        assert_eq!(to_string(&cs), "gps\u{8BBE}\u{5907}");
    }

    #[test]
    fn chars_of_empty() {
        assert!(chars_of("", false).is_empty());
        assert!(chars_of("", true).is_empty());
    }
}
