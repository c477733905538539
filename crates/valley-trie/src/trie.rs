// KeywordTrie: the public facade owning the automaton.

use std::borrow::Cow;

use valley_core::{case, KeywordMatch, Vocabulary};

use crate::arena::{NodeArena, NodeId};
use crate::{builder, scanner};

/// A keyword trie with failure links, scanned position by position.
///
/// Owns the node arena and coordinates mutation, rebuilding and scanning.
/// Every mutation rebuilds the failure links synchronously before
/// returning, so a scan always sees a fully built automaton; callers
/// needing cross-thread sharing serialize access the usual way (`&mut`
/// aliasing rules already forbid scanning a trie mid-mutation).
///
/// ```
/// use valley_trie::KeywordTrie;
/// use valley_core::Vocabulary;
///
/// let vocab = Vocabulary::labeled_groups(vec![(
///     "设备".to_string(),
///     vec!["GPS".to_string(), "设备".to_string()],
/// )]);
/// let trie = KeywordTrie::from_vocabulary(vocab, false);
///
/// let matches = trie.scan("我有一台gps设备", true);
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[0].keyword, "gps");
/// ```
pub struct KeywordTrie {
    arena: NodeArena,
    keyword_count: usize,
    case_sensitive: bool,
    built: bool,
}

impl KeywordTrie {
    /// Create an empty automaton. An empty trie is trivially built.
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            arena: NodeArena::new(),
            keyword_count: 0,
            case_sensitive,
            built: true,
        }
    }

    /// Build an automaton from a vocabulary, rebuilding failure links once
    /// after all keywords are in.
    pub fn from_vocabulary(vocabulary: Vocabulary, case_sensitive: bool) -> Self {
        let mut trie = Self::new(case_sensitive);
        for (keyword, label) in vocabulary.into_pairs() {
            trie.insert_pair(&keyword, &label);
        }
        trie.rebuild();
        trie
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert a keyword with a label, then rebuild.
    ///
    /// An empty label gets replaced by the keyword's own (case-folded)
    /// text. Re-inserting an existing keyword overwrites its label without
    /// changing [`len`](Self::len). Returns whether the keyword was newly
    /// added. Inserting the empty string is a no-op.
    pub fn insert(&mut self, keyword: &str, label: &str) -> bool {
        let newly_added = self.insert_pair(keyword, label);
        self.rebuild();
        newly_added
    }

    /// Insert without rebuilding; bulk construction rebuilds once at the end.
    fn insert_pair(&mut self, keyword: &str, label: &str) -> bool {
        let keyword = self.folded(keyword).into_owned();
        if keyword.is_empty() {
            return false;
        }

        let mut node = NodeId::ROOT;
        for ch in keyword.chars() {
            node = self.arena.child_or_insert(node, ch);
        }

        let label = if label.is_empty() {
            keyword.clone()
        } else {
            label.to_string()
        };
        let newly_added = self.arena.node_mut(node).add_match(keyword, label);
        if newly_added {
            self.keyword_count += 1;
        }
        newly_added
    }

    /// Remove a keyword, compacting the branch it leaves behind.
    ///
    /// Removing an absent keyword is a successful no-op: state, counts and
    /// failure links are untouched. Returns whether the keyword was
    /// present. After removal, the terminal node is detached when nothing
    /// else needs it, and so is every ancestor left with no children and no
    /// terminal matches of its own.
    pub fn remove(&mut self, keyword: &str) -> bool {
        let keyword = self.folded(keyword);

        // Walk the path, remembering each node's parent and edge character.
        let mut path: Vec<(NodeId, char)> = Vec::new();
        let mut node = NodeId::ROOT;
        for ch in keyword.chars() {
            match self.arena.node(node).child(ch) {
                Some(next) => {
                    path.push((node, ch));
                    node = next;
                }
                None => return false,
            }
        }

        if !self.arena.node_mut(node).remove_match(&keyword) {
            // The path exists as a prefix of other keywords, but this exact
            // keyword was never terminal here.
            return false;
        }

        // Compact bottom-up: detach the terminal node if nothing hangs off
        // it, then every ancestor (root excluded) left empty, stopping at
        // the first survivor.
        let mut current = node;
        for &(parent, ch) in path.iter().rev() {
            let n = self.arena.node(current);
            if n.has_children() || n.has_own_matches() {
                break;
            }
            self.arena.node_mut(parent).remove_child(ch);
            self.arena.release(current);
            current = parent;
        }

        self.keyword_count -= 1;
        self.rebuild();
        true
    }

    fn rebuild(&mut self) {
        self.built = false;
        builder::rebuild(&mut self.arena);
        self.built = true;
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Whether exactly this keyword was inserted (and not since removed).
    pub fn contains(&self, keyword: &str) -> bool {
        let keyword = self.folded(keyword);
        match self.node_at(&keyword) {
            Some(node) => self.arena.node(node).contains_match(&keyword),
            None => false,
        }
    }

    /// The label attached to a keyword, or `None` when absent.
    pub fn label_of(&self, keyword: &str) -> Option<&str> {
        let keyword = self.folded(keyword);
        let node = self.node_at(&keyword)?;
        self.arena.node(node).own_label(&keyword)
    }

    /// Number of keyword-to-label pairs explicitly inserted. Entries
    /// propagated along failure links are never counted.
    pub fn len(&self) -> usize {
        self.keyword_count
    }

    pub fn is_empty(&self) -> bool {
        self.keyword_count == 0
    }

    /// Whether keywords and text are matched without case folding.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Number of live trie nodes, root included. Deletion compaction keeps
    /// this from growing past what the surviving keywords need.
    pub fn node_count(&self) -> usize {
        self.arena.live_nodes()
    }

    // =========================================================================
    // Scanning
    // =========================================================================

    /// Extract every labeled keyword occurrence from `text`, in
    /// non-decreasing end-offset order.
    ///
    /// Offsets count characters into the case-folded text. With
    /// `allow_overlaps` unset, shorter matches are suppressed in favor of a
    /// longer match continuing at the same position, on a best-effort
    /// lookahead heuristic (see [`scanner::scan`]).
    pub fn scan(&self, text: &str, allow_overlaps: bool) -> Vec<KeywordMatch> {
        debug_assert!(self.built, "scan on an unbuilt automaton");
        let chars = case::chars_of(text, self.case_sensitive);
        scanner::scan(&self.arena, &chars, allow_overlaps)
    }

    // -- helpers --

    fn folded<'a>(&self, keyword: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(keyword)
        } else {
            Cow::Owned(case::fold(keyword))
        }
    }

    /// Walk the edge path for a (already folded) keyword.
    fn node_at(&self, keyword: &str) -> Option<NodeId> {
        let mut node = NodeId::ROOT;
        for ch in keyword.chars() {
            node = self.arena.node(node).child(ch)?;
        }
        Some(node)
    }
}
