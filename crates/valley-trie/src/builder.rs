// Failure-link construction: breadth-first rebuild of the automaton.

use std::collections::VecDeque;

use crate::arena::{NodeArena, NodeId};

/// Rebuild every failure link and propagated terminal set in the trie.
///
/// Runs in two passes over the reachable nodes:
///
/// 1. Reset: every node gets `fail = ROOT` and its propagated set restored
///    to a copy of its own matches. Starting from a clean slate is what
///    keeps deleted keywords from surviving inside deeper nodes' sets.
/// 2. BFS: the root's direct children seed a FIFO queue (their failure
///    link stays on the root). For each dequeued node and each child edge
///    `(ch, target)`, a trace pointer walks up failure links from the
///    node's own link until it finds a state with an edge for `ch` or
///    reaches the root. The edge's destination (or the root) becomes
///    `target`'s failure link, and the destination's propagated set is
///    merged into `target`'s.
///
/// Strict breadth-first order guarantees the destination is strictly
/// shallower than `target` and therefore already finalized when consulted.
/// Cost is proportional to the number of trie edges; the facade re-runs
/// this in full after every insertion or deletion.
pub fn rebuild(arena: &mut NodeArena) {
    // Pass 1: reset reachable nodes.
    let mut stack = vec![NodeId::ROOT];
    while let Some(id) = stack.pop() {
        stack.extend(arena.node(id).children().map(|(_, child)| child));
        let node = arena.node_mut(id);
        node.set_fail(NodeId::ROOT);
        node.reset_emits();
    }

    // Pass 2: breadth-first failure-link computation.
    let mut queue: VecDeque<NodeId> =
        arena.node(NodeId::ROOT).children().map(|(_, child)| child).collect();

    while let Some(current) = queue.pop_front() {
        let edges: Vec<(char, NodeId)> = arena.node(current).children().collect();
        let current_fail = arena.node(current).fail();

        for (ch, target) in edges {
            queue.push_back(target);

            // Walk failure links until a state with an edge for `ch` turns
            // up, or the walk bottoms out at the root.
            let mut trace = current_fail;
            while arena.node(trace).child(ch).is_none() && arena.node(trace).depth() != 0 {
                trace = arena.node(trace).fail();
            }

            match arena.node(trace).child(ch) {
                Some(dest) => {
                    let inherited = arena.node(dest).emits_snapshot();
                    let target_node = arena.node_mut(target);
                    target_node.set_fail(dest);
                    target_node.extend_emits(inherited);
                }
                None => {
                    arena.node_mut(target).set_fail(NodeId::ROOT);
                }
            }
        }
    }
}
