// Vocabulary input shapes and boundary validation

/// Error type for malformed vocabulary input.
///
/// Raised synchronously at the input boundary, before any automaton state
/// changes. Absence of a keyword is never an error anywhere in the
/// workspace; this enum only covers input that has the wrong shape.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// The input was neither of the two accepted shapes.
    #[error("a list of keywords or a mapping from label to keyword lists")]
    InvalidShape,
}

/// A vocabulary of keywords to load into an automaton.
///
/// Two shapes are accepted, mirroring the two inputs the extraction API
/// takes in the wild:
///
/// - [`Sequence`](Vocabulary::Sequence): a flat list of keywords sharing one
///   optional label. Keywords with no label (or an empty one) end up labeled
///   with their own text.
/// - [`LabeledGroups`](Vocabulary::LabeledGroups): label to keyword-list
///   groups, e.g. `{"设备": ["GPS", "设备"], "动作": ["检测"]}`.
///
/// Groups are an ordered list of pairs rather than a hash map so that a
/// keyword listed under several labels deterministically keeps the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vocabulary {
    /// A flat keyword list with one shared label.
    Sequence {
        keywords: Vec<String>,
        /// Label applied to every keyword; `None` (or empty) means each
        /// keyword labels itself.
        label: Option<String>,
    },

    /// Label to keywords groups, in input order.
    LabeledGroups(Vec<(String, Vec<String>)>),
}

impl Vocabulary {
    /// A keyword list where each keyword labels itself.
    pub fn sequence(keywords: Vec<String>) -> Self {
        Self::Sequence {
            keywords,
            label: None,
        }
    }

    /// A keyword list sharing a single label.
    pub fn sequence_with_label(keywords: Vec<String>, label: impl Into<String>) -> Self {
        Self::Sequence {
            keywords,
            label: Some(label.into()),
        }
    }

    /// Label to keywords groups.
    pub fn labeled_groups(groups: Vec<(String, Vec<String>)>) -> Self {
        Self::LabeledGroups(groups)
    }

    /// Flatten into an ordered `(keyword, label)` stream.
    ///
    /// An empty label string means "label the keyword with its own text";
    /// the substitution happens at insert time so that case folding is
    /// applied to the keyword first.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        match self {
            Vocabulary::Sequence { keywords, label } => {
                let label = label.unwrap_or_default();
                keywords
                    .into_iter()
                    .map(|keyword| (keyword, label.clone()))
                    .collect()
            }
            Vocabulary::LabeledGroups(groups) => {
                let mut pairs = Vec::new();
                for (label, keywords) in groups {
                    for keyword in keywords {
                        pairs.push((keyword, label.clone()));
                    }
                }
                pairs
            }
        }
    }

    /// Number of keyword entries (before deduplication by the automaton).
    pub fn entry_count(&self) -> usize {
        match self {
            Vocabulary::Sequence { keywords, .. } => keywords.len(),
            Vocabulary::LabeledGroups(groups) => groups.iter().map(|(_, kws)| kws.len()).sum(),
        }
    }
}

// ---------------------------------------------------------------------------
// Deserialization boundary
//
// Exactly two JSON shapes are accepted: an array of strings, or an object
// mapping label to an array of strings. Anything else is rejected with
// `VocabularyError::InvalidShape` before any automaton state changes.
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Vocabulary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ShapeVisitor;

        impl<'de> serde::de::Visitor<'de> for ShapeVisitor {
            type Value = Vocabulary;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", VocabularyError::InvalidShape)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut keywords = Vec::new();
                while let Some(keyword) = seq.next_element::<String>()? {
                    keywords.push(keyword);
                }
                Ok(Vocabulary::sequence(keywords))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut groups = Vec::new();
                while let Some((label, keywords)) = map.next_entry::<String, Vec<String>>()? {
                    groups.push((label, keywords));
                }
                Ok(Vocabulary::labeled_groups(groups))
            }
        }

        deserializer.deserialize_any(ShapeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_pairs_use_empty_label() {
        let vocab = Vocabulary::sequence(vec!["gps".to_string(), "radar".to_string()]);
        let pairs = vocab.into_pairs();
        assert_eq!(
            pairs,
            vec![
                ("gps".to_string(), String::new()),
                ("radar".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn sequence_with_shared_label() {
        let vocab =
            Vocabulary::sequence_with_label(vec!["gps".to_string(), "radar".to_string()], "device");
        let pairs = vocab.into_pairs();
        assert_eq!(pairs[0], ("gps".to_string(), "device".to_string()));
        assert_eq!(pairs[1], ("radar".to_string(), "device".to_string()));
    }

    #[test]
    fn labeled_groups_flatten_in_order() {
        let vocab = Vocabulary::labeled_groups(vec![
            (
                "\u{8BBE}\u{5907}".to_string(),
                vec!["GPS".to_string(), "\u{8BBE}\u{5907}".to_string()],
            ),
            ("\u{52A8}\u{4F5C}".to_string(), vec!["\u{68C0}\u{6D4B}".to_string()]),
        ]);
        assert_eq!(vocab.entry_count(), 3);
        let pairs = vocab.into_pairs();
        assert_eq!(pairs[0].1, "\u{8BBE}\u{5907}");
        assert_eq!(pairs[2], ("\u{68C0}\u{6D4B}".to_string(), "\u{52A8}\u{4F5C}".to_string()));
    }

    #[test]
    fn entry_count_empty() {
        assert_eq!(Vocabulary::sequence(vec![]).entry_count(), 0);
        assert_eq!(Vocabulary::labeled_groups(vec![]).entry_count(), 0);
    }

    #[cfg(feature = "serde")]
    mod de {
        use super::*;

        #[test]
        fn array_shape() {
            let vocab: Vocabulary = serde_json::from_str(r#"["gps", "radar"]"#).unwrap();
            assert_eq!(
                vocab,
                Vocabulary::sequence(vec!["gps".to_string(), "radar".to_string()])
            );
        }

        #[test]
        fn mapping_shape() {
            let vocab: Vocabulary =
                serde_json::from_str(r#"{"device": ["GPS"], "action": ["scan", "test"]}"#).unwrap();
            assert_eq!(
                vocab,
                Vocabulary::labeled_groups(vec![
                    ("device".to_string(), vec!["GPS".to_string()]),
                    (
                        "action".to_string(),
                        vec!["scan".to_string(), "test".to_string()]
                    ),
                ])
            );
        }

        #[test]
        fn scalar_is_rejected() {
            let err = serde_json::from_str::<Vocabulary>("42").unwrap_err();
            assert!(err.to_string().contains("mapping from label"));
        }

        #[test]
        fn string_is_rejected() {
            assert!(serde_json::from_str::<Vocabulary>(r#""gps""#).is_err());
        }

        #[test]
        fn nested_wrong_shape_is_rejected() {
            // Mapping values must be keyword lists, not scalars.
            assert!(serde_json::from_str::<Vocabulary>(r#"{"device": "gps"}"#).is_err());
        }
    }
}
