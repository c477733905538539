// Overlap-aware extraction walk over a built automaton.

use valley_core::KeywordMatch;

use crate::arena::{NodeArena, NodeId};

/// Advance one character: follow the direct edge from `state`, falling back
/// via failure links until an edge for `ch` turns up or the walk reaches
/// the root. `None` means not even the root has an edge for `ch`.
fn next_state(arena: &NodeArena, mut state: NodeId, ch: char) -> Option<NodeId> {
    let mut found = arena.node(state).child(ch);
    while found.is_none() && arena.node(state).depth() != 0 {
        state = arena.node(state).fail();
        found = arena.node(state).child(ch);
    }
    found
}

/// Scan `text` through the automaton and collect labeled spans.
///
/// Positions advance one character at a time, so matches come out in
/// non-decreasing order of their end offset. With `allow_overlaps` set,
/// every position emits. Without it, a position is suppressed when the
/// current state has a direct child edge for the next character, favoring a
/// longer match continuing here; the last character always emits. The
/// suppression is a one-character lookahead heuristic, not a strict
/// non-overlap guarantee: overlapping spans can still occur.
pub fn scan(arena: &NodeArena, text: &[char], allow_overlaps: bool) -> Vec<KeywordMatch> {
    let mut matches = Vec::new();
    let mut state = NodeId::ROOT;

    for (i, &ch) in text.iter().enumerate() {
        let pos = i + 1;
        state = next_state(arena, state, ch).unwrap_or(NodeId::ROOT);

        if allow_overlaps || pos == text.len() {
            emit(arena, state, pos, &mut matches);
        } else if arena.node(state).child(text[pos]).is_none() {
            emit(arena, state, pos, &mut matches);
        }
    }

    matches
}

/// Append the best keyword ending at `pos`, if any: the longest entry in
/// the state's propagated terminal set, equal lengths broken toward the
/// lexicographically smallest keyword so the choice is deterministic.
fn emit(arena: &NodeArena, state: NodeId, pos: usize, matches: &mut Vec<KeywordMatch>) {
    let node = arena.node(state);

    let mut best: Option<(&str, &str, usize)> = None;
    for (keyword, label) in node.emits() {
        let len = keyword.chars().count();
        let better = match best {
            None => true,
            Some((best_keyword, _, best_len)) => {
                len > best_len || (len == best_len && keyword < best_keyword)
            }
        };
        if better {
            best = Some((keyword, label, len));
        }
    }

    if let Some((keyword, label, len)) = best {
        matches.push(KeywordMatch::new(pos - len, pos, keyword, label));
    }
}
