//! Shortest paths over any `GraphView`.
//!
//! Dijkstra with a binary heap keyed by `(distance, VertexId)`. A vertex's
//! predecessor only changes on a strict improvement, so among equal-cost
//! routes the predecessor settled first (smaller distance, then smaller id)
//! wins. Weights must be non-negative, which the builder enforces; sums
//! saturate at `Weight::MAX`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{VertexId, Weight};

use super::path::Path;
use super::view::GraphView;

/// Distances and predecessors from one Dijkstra run.
#[derive(Clone, Debug, Default)]
pub struct ShortestPathTree {
    pub source: Option<VertexId>,
    pub dist: FxHashMap<VertexId, Weight>,
    pub parent: FxHashMap<VertexId, VertexId>,
}

impl ShortestPathTree {
    /// Walk predecessors back from `target` to the source.
    #[must_use]
    pub fn path_to(&self, target: VertexId) -> Option<Path> {
        let source = self.source?;
        if target == source {
            return Some(Path::trivial(source));
        }
        if !self.parent.contains_key(&target) {
            return None;
        }

        let mut reversed = vec![target];
        let mut current = target;
        while current != source {
            current = *self.parent.get(&current)?;
            reversed.push(current);
        }
        reversed.reverse();

        let mut path = Path::trivial(source);
        for pair in reversed.windows(2) {
            let step = self.dist.get(&pair[1])? - self.dist.get(&pair[0])?;
            path.push(pair[1], step);
        }
        Some(path)
    }
}

/// Run Dijkstra from `source`. Stops early once `target` is settled.
pub fn dijkstra<G: GraphView + ?Sized>(
    graph: &G,
    source: VertexId,
    target: Option<VertexId>,
) -> ShortestPathTree {
    let mut tree = ShortestPathTree::default();
    if !graph.contains_vertex(source) {
        return tree;
    }
    tree.source = Some(source);
    tree.dist.insert(source, 0);

    let mut settled: FxHashSet<VertexId> = FxHashSet::default();
    let mut heap: BinaryHeap<Reverse<(Weight, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((dist, u))) = heap.pop() {
        if !settled.insert(u) {
            continue;
        }
        if Some(u) == target {
            break;
        }

        let ShortestPathTree { dist: best, parent, .. } = &mut tree;
        graph.visit_neighbors(u, &mut |_, v, props| {
            if settled.contains(&v) {
                return;
            }
            let candidate = dist.saturating_add(props.weight);
            if best.get(&v).map_or(true, |&known| candidate < known) {
                best.insert(v, candidate);
                parent.insert(v, u);
                heap.push(Reverse((candidate, v)));
            }
        });
    }

    tree
}

/// Minimum-weight path from `source` to `target`.
pub fn shortest_path<G: GraphView + ?Sized>(
    graph: &G,
    source: VertexId,
    target: VertexId,
) -> Option<Path> {
    if !graph.contains_vertex(target) {
        return None;
    }
    dijkstra(graph, source, Some(target)).path_to(target)
}

/// Weight of the minimum-weight path from `source` to `target`.
pub fn distance<G: GraphView + ?Sized>(
    graph: &G,
    source: VertexId,
    target: VertexId,
) -> Option<Weight> {
    if !graph.contains_vertex(target) {
        return None;
    }
    let tree = dijkstra(graph, source, Some(target));
    if tree.source == Some(target) {
        return Some(0);
    }
    if !tree.parent.contains_key(&target) {
        return None;
    }
    tree.dist.get(&target).copied()
}
