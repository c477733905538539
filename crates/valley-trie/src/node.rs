// Trie node: child edges, terminal matches, failure link.

use hashbrown::HashMap;

use crate::arena::NodeId;

/// A single state in the keyword trie.
///
/// Everything here is plain data manipulation; nothing on a node triggers a
/// rebuild or a scan. The node keeps two keyword maps:
///
/// - `own_matches` holds the pairs explicitly inserted ending at this node
///   (at most one in practice, since a keyword spells its own path). This
///   is what membership lookups consult.
/// - `emits` is the propagated terminal set the scanner consults: the union
///   of `own_matches` with the `emits` of the failure-link target, i.e.
///   every vocabulary keyword that is a suffix of this node's path. It is
///   recomputed from scratch on every rebuild, so deleted keywords never
///   linger in it.
pub struct TrieNode {
    depth: u32,
    children: HashMap<char, NodeId>,
    own_matches: HashMap<String, String>,
    emits: HashMap<String, String>,
    fail: NodeId,
}

impl TrieNode {
    /// Create an empty node at the given depth, failure link parked on the
    /// root (the root's own link is the depth-0 self-loop sentinel).
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            children: HashMap::new(),
            own_matches: HashMap::new(),
            emits: HashMap::new(),
            fail: NodeId::ROOT,
        }
    }

    /// Distance from the root. A child is always one deeper than its parent.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    // -- child edges --

    /// Follow a single edge, or report absence.
    pub fn child(&self, ch: char) -> Option<NodeId> {
        self.children.get(&ch).copied()
    }

    pub fn insert_child(&mut self, ch: char, child: NodeId) {
        self.children.insert(ch, child);
    }

    pub fn remove_child(&mut self, ch: char) {
        self.children.remove(&ch);
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Current child edges as `(character, target)` pairs.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&ch, &id)| (ch, id))
    }

    // -- terminal matches --

    /// Record a keyword ending at this node. Returns `true` when the
    /// keyword was not already terminal here; re-recording overwrites the
    /// label.
    pub fn add_match(&mut self, keyword: impl Into<String>, label: impl Into<String>) -> bool {
        self.own_matches.insert(keyword.into(), label.into()).is_none()
    }

    /// Remove a keyword from the terminal set. Returns whether it was
    /// present.
    pub fn remove_match(&mut self, keyword: &str) -> bool {
        self.own_matches.remove(keyword).is_some()
    }

    pub fn has_own_matches(&self) -> bool {
        !self.own_matches.is_empty()
    }

    /// Whether exactly this keyword string is terminal at this node.
    pub fn contains_match(&self, keyword: &str) -> bool {
        self.own_matches.contains_key(keyword)
    }

    /// Label of a keyword terminal at this node.
    pub fn own_label(&self, keyword: &str) -> Option<&str> {
        self.own_matches.get(keyword).map(String::as_str)
    }

    // -- propagated terminal set --

    /// Reset the propagated set to just this node's own matches. Called at
    /// the start of every rebuild.
    pub fn reset_emits(&mut self) {
        self.emits = self.own_matches.clone();
    }

    /// Merge an external keyword-to-label mapping into the propagated set.
    /// Used by the builder to pull in the failure-link target's set.
    pub fn extend_emits(&mut self, matches: HashMap<String, String>) {
        self.emits.extend(matches);
    }

    /// The propagated terminal set, cloned for merging into a deeper node.
    pub fn emits_snapshot(&self) -> HashMap<String, String> {
        self.emits.clone()
    }

    /// Iterate the propagated terminal set.
    pub fn emits(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.emits.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn has_emits(&self) -> bool {
        !self.emits.is_empty()
    }

    // -- failure link --

    /// Non-owning back-reference to the longest proper suffix of this
    /// node's path that is also a path in the trie.
    pub fn fail(&self) -> NodeId {
        self.fail
    }

    pub fn set_fail(&mut self, fail: NodeId) {
        self.fail = fail;
    }

    /// Wipe the node for slot reuse.
    pub fn clear(&mut self) {
        self.depth = 0;
        self.children.clear();
        self.own_matches.clear();
        self.emits.clear();
        self.fail = NodeId::ROOT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_match_reports_novelty() {
        let mut node = TrieNode::new(2);
        assert!(node.add_match("gps", "device"));
        assert!(!node.add_match("gps", "sensor"));
        assert_eq!(node.own_label("gps"), Some("sensor"));
    }

    #[test]
    fn remove_match_reports_presence() {
        let mut node = TrieNode::new(1);
        node.add_match("gps", "device");
        assert!(node.remove_match("gps"));
        assert!(!node.remove_match("gps"));
        assert!(!node.has_own_matches());
    }

    #[test]
    fn reset_emits_copies_own_matches() {
        let mut node = TrieNode::new(3);
        node.add_match("gps", "device");

        let mut inherited = HashMap::new();
        inherited.insert("ps".to_string(), "suffix".to_string());
        node.reset_emits();
        node.extend_emits(inherited);
        assert_eq!(node.emits().count(), 2);

        // A fresh reset drops inherited entries again.
        node.reset_emits();
        assert_eq!(node.emits().count(), 1);
        assert!(node.has_emits());
    }

    #[test]
    fn child_edges() {
        let mut node = TrieNode::new(0);
        node.insert_child('a', NodeId::ROOT);
        assert!(node.has_children());
        assert_eq!(node.child('a'), Some(NodeId::ROOT));
        assert_eq!(node.child('b'), None);

        node.remove_child('a');
        assert!(!node.has_children());
    }
}
