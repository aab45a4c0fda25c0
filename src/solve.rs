use tracing::debug;

use crate::{Color, Move, Puzzle, Robots};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

/// Shortest path bringing the `target` robot onto its chip, using at most
/// `max_depth` moves of any robot.
pub fn shortest_path(puzzle: &Puzzle, target: Color, max_depth: usize) -> Option<Vec<Move>> {
    bfs(puzzle, target, max_depth, || {})
}

/// Breadth-first search over the joint positions of all robots.
///
/// Successors are generated for every robot, in color order then direction
/// order, so the returned path is the first minimal one in that order.
/// `on_step` is called once per expanded state.
pub fn bfs(
    puzzle: &Puzzle,
    target: Color,
    max_depth: usize,
    mut on_step: impl FnMut(),
) -> Option<Vec<Move>> {
    let goal = puzzle.chips()[target];
    if puzzle.robots()[target] == goal {
        return Some(Vec::new());
    }

    // Visited states in discovery order, with the edge each was reached by.
    // Entries at and after `cursor` form the FIFO queue.
    let mut state_parent: IndexMap<Robots, Option<(usize, Move)>> = IndexMap::default();
    state_parent.insert(*puzzle.robots(), None); // Root.

    let mut cursor = 0;
    let mut depth = 0;
    let final_idx = 'bfs: loop {
        #[cfg(feature = "coz")]
        coz::scope!("Layer");

        let layer_end = state_parent.len();
        if depth >= max_depth || cursor >= layer_end {
            debug!(color = %target, max_depth, visited = state_parent.len(), "No solution");
            return None;
        }

        while cursor < layer_end {
            on_step();

            #[cfg(feature = "coz")]
            coz::progress!("Expand");

            let (&robots, _) = state_parent.get_index(cursor)?;
            for (mv, next) in robots.successors(puzzle.walls()) {
                if state_parent.contains_key(&next) {
                    continue;
                }
                let (idx, _) = state_parent.insert_full(next, Some((cursor, mv)));
                if next[target] == goal {
                    break 'bfs idx;
                }
            }
            cursor += 1;
        }
        depth += 1;
    };

    let mut path = std::iter::successors(state_parent[final_idx], |&(parent, _)| {
        state_parent[parent]
    })
    .map(|(_, mv)| mv)
    .collect::<Vec<_>>();
    path.reverse();

    debug!(color = %target, depth = path.len(), visited = state_parent.len(), "Solved");
    Some(path)
}
