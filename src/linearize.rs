//! Stroke ordering for continuous pen motion.
//!
//! A glyph is authored as a bag of independent strokes. For plotting (or for
//! animating the glyph being written) we want as few pen lifts as possible,
//! e.g. an 'S' built from three curves should come out as one trail from one
//! tip to the other, not three fragments in whatever order they were drawn.
//!
//! The pipeline:
//!
//! 1. Build a [`StrokeGraph`] over the endpoints.
//! 2. For each edge not yet used, in stroke order, grow the longest trail
//!    outward from both of its endpoints ([`walk_longest`]) and commit it.
//! 3. Map the edge order back to strokes.
//! 4. Flip strokes greedily so each one starts where the previous one ended
//!    ([`fix_orientation`]).
//!
//! Step 2 is a heuristic: it is not a longest-path solver and its result
//! depends on stroke order and incidence order. That determinism is relied on
//! downstream, so don't swap it for something "better".

use crate::defaults::DEFAULT_SEARCH_BUDGET;
use crate::graph::{EdgeId, NodeId, StrokeGraph};
use crate::log::{debug, warn};
use crate::types::{Shape, Stroke};

/// Knobs for [`linearize_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearizeOptions {
    /// Maximum edge-steps a single [`walk_longest`] call may take. When it
    /// runs out, the walk returns the longest trail found so far.
    pub search_budget: usize,
}

impl Default for LinearizeOptions {
    fn default() -> Self {
        Self {
            search_budget: DEFAULT_SEARCH_BUDGET,
        }
    }
}

/// Reorder and reorient `shape` into continuous trails using default options.
///
/// The result has exactly the strokes of `shape`, each once, some of them
/// flipped.
pub fn linearize(shape: &Shape) -> Shape {
    linearize_with(shape, &LinearizeOptions::default())
}

pub fn linearize_with(shape: &Shape, options: &LinearizeOptions) -> Shape {
    let graph = StrokeGraph::build(shape);
    let order = trail_order(&graph, options);

    let mut ordered: Vec<Stroke> = order
        .iter()
        .map(|&edge| shape.strokes[graph.edges[edge].stroke])
        .collect();
    fix_orientation(&mut ordered);

    Shape::from(ordered)
}

/// Edge order covering every edge once: a concatenation of maximal trails,
/// one started at each edge that no earlier trail used.
pub fn trail_order(graph: &StrokeGraph, options: &LinearizeOptions) -> Vec<EdgeId> {
    let mut visited = vec![false; graph.edges.len()];
    let mut order = Vec::with_capacity(graph.edges.len());

    for (id, edge) in graph.edges.iter().enumerate() {
        if visited[id] {
            continue;
        }
        visited[id] = true;

        // Commit the first half before searching the second so the two
        // halves can never share an edge.
        let before = walk_longest(graph, edge.a, &mut visited, options.search_budget);
        for &e in &before {
            visited[e] = true;
        }
        let after = walk_longest(graph, edge.b, &mut visited, options.search_budget);
        for &e in &after {
            visited[e] = true;
        }

        debug!(
            edge = id,
            before = before.len(),
            after = after.len(),
            "committed trail"
        );

        order.extend(before.iter().rev());
        order.push(id);
        order.extend(after);
    }

    order
}

/// One level of the depth-first search: a node and the next incidence slot
/// to try.
struct Frame {
    node: NodeId,
    next: usize,
}

/// Longest trail (no edge repeated) starting at `start` over edges not
/// marked in `visited`.
///
/// Ties go to the trail found first, trying incident edges in incidence
/// order. `visited` is used as scratch space and is restored before
/// returning. At most `budget` edges are traversed.
pub fn walk_longest(
    graph: &StrokeGraph,
    start: NodeId,
    visited: &mut [bool],
    budget: usize,
) -> Vec<EdgeId> {
    let mut best: Vec<EdgeId> = Vec::new();
    let mut path: Vec<EdgeId> = Vec::new();
    let mut stack = vec![Frame {
        node: start,
        next: 0,
    }];
    let mut steps = 0usize;

    while let Some(frame) = stack.last_mut() {
        let incident = &graph.nodes[frame.node].edges;
        if frame.next == incident.len() {
            stack.pop();
            // every frame but the root was entered through the last path edge
            if let Some(edge) = path.pop() {
                visited[edge] = false;
            }
            continue;
        }

        let edge = incident[frame.next];
        frame.next += 1;
        if visited[edge] {
            continue;
        }

        if steps == budget {
            warn!(
                start,
                budget,
                best = best.len(),
                "longest-walk search budget exhausted"
            );
            break;
        }
        steps += 1;

        let node = graph.edges[edge].other(frame.node);
        visited[edge] = true;
        path.push(edge);
        if path.len() > best.len() {
            best.clone_from(&path);
        }
        stack.push(Frame { node, next: 0 });
    }

    for edge in path {
        visited[edge] = false;
    }
    best
}

/// Greedy single-pass orientation fix-up.
///
/// Walks adjacent pairs left to right and flips strokes so that each one
/// starts where the previous one ends, when the endpoints allow it. A stroke
/// that was just flipped to fit its left neighbour is not flipped again to
/// fit its right one. Pairs that can't be joined (gaps between trails) are
/// left alone.
pub fn fix_orientation(strokes: &mut [Stroke]) {
    let mut prev_was_flipped = false;
    for i in 1..strokes.len() {
        let (head, tail) = strokes.split_at_mut(i);
        let (_, next_flipped) =
            flip_to_fit(&mut head[i - 1], &mut tail[0], !prev_was_flipped, true);
        prev_was_flipped = next_flipped;
    }
}

/// Make `prev.end() == next.start()` if one of the allowed flips achieves it.
///
/// Candidates are tried in a fixed order: no flip, flip `next`, flip `prev`,
/// flip both. Returns which strokes were flipped.
fn flip_to_fit(
    prev: &mut Stroke,
    next: &mut Stroke,
    may_flip_prev: bool,
    may_flip_next: bool,
) -> (bool, bool) {
    if prev.end() == next.start() {
        (false, false)
    } else if may_flip_next && prev.end() == next.end() {
        next.flip();
        debug!(?next, "flipped next stroke");
        (false, true)
    } else if may_flip_prev && prev.start() == next.start() {
        prev.flip();
        debug!(?prev, "flipped previous stroke");
        (true, false)
    } else if may_flip_prev && may_flip_next && prev.start() == next.end() {
        prev.flip();
        next.flip();
        debug!(?prev, ?next, "flipped both strokes");
        (true, true)
    } else {
        (false, false)
    }
}
