//! Connectivity graph over a shape's stroke endpoints.
//!
//! Each distinct endpoint becomes a [`Node`]; each stroke becomes an [`Edge`]
//! between the nodes of its start and end. Endpoints are merged only when
//! they compare equal with `==` on both coordinates. Points that differ in
//! the last bit stay separate nodes, so a path the user drew as connected
//! can come apart here if its endpoints drifted.

use crate::log::debug;
use crate::types::{Point, Shape};

/// Index into [`StrokeGraph::nodes`]
pub type NodeId = usize;

/// Index into [`StrokeGraph::edges`]; also the index of the stroke in the
/// source shape
pub type EdgeId = usize;

/// A distinct endpoint position
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub pos: Point,
    /// Incident edges in the order they were first seen. A self-loop (a dot,
    /// or a closed curve) appears once.
    pub edges: Vec<EdgeId>,
}

/// One stroke, seen as a connection between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Index of the stroke in the source shape
    pub stroke: usize,
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    /// The endpoint across the edge from `from`. For a self-loop this is
    /// `from` itself.
    pub fn other(&self, from: NodeId) -> NodeId {
        if from == self.a { self.b } else { self.a }
    }

    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl StrokeGraph {
    /// Build the graph for `shape`, one edge per stroke in input order.
    pub fn build(shape: &Shape) -> Self {
        let mut graph = StrokeGraph::default();

        for (index, stroke) in shape.iter().enumerate() {
            let a = graph.node_for(stroke.start());
            let b = graph.node_for(stroke.end());
            let id = graph.edges.len();
            graph.edges.push(Edge { stroke: index, a, b });

            graph.nodes[a].edges.push(id);
            if b != a {
                graph.nodes[b].edges.push(id);
            }
        }

        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "built stroke graph"
        );
        graph
    }

    /// Look up the node at `pos`, creating it if no existing node matches.
    fn node_for(&mut self, pos: Point) -> NodeId {
        if let Some(id) = self.nodes.iter().position(|node| node.pos == pos) {
            return id;
        }
        self.nodes.push(Node {
            pos,
            edges: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Number of incident edges at `node`
    pub fn degree(&self, node: NodeId) -> usize {
        self.nodes[node].edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stroke;
    use glam::dvec2;

    #[test]
    fn shared_endpoints_become_one_node() {
        let shape = Shape::from(vec![
            Stroke::Line(dvec2(0.0, 0.0), dvec2(0.5, 0.5)),
            Stroke::Line(dvec2(1.0, 0.0), dvec2(0.5, 0.5)),
        ]);
        let graph = StrokeGraph::build(&shape);

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges.len(), 2);
        let middle = graph.edges[0].b;
        assert_eq!(graph.edges[1].b, middle);
        assert_eq!(graph.nodes[middle].edges, vec![0, 1]);
    }

    #[test]
    fn dot_is_registered_once() {
        let shape = Shape::from(vec![Stroke::Dot(dvec2(0.2, 0.2))]);
        let graph = StrokeGraph::build(&shape);

        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges[0].is_loop());
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.edges[0].other(0), 0);
    }

    #[test]
    fn closed_curve_is_a_loop() {
        let shape = Shape::from(vec![Stroke::Curve(
            dvec2(0.5, 0.5),
            dvec2(0.9, 0.1),
            dvec2(0.5, 0.5),
        )]);
        let graph = StrokeGraph::build(&shape);
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].edges, vec![0]);
    }

    #[test]
    fn near_coincident_points_stay_apart() {
        let drift = 0.3 + f64::EPSILON;
        let shape = Shape::from(vec![
            Stroke::Line(dvec2(0.0, 0.0), dvec2(0.3, 0.3)),
            Stroke::Line(dvec2(drift, 0.3), dvec2(1.0, 1.0)),
        ]);
        let graph = StrokeGraph::build(&shape);
        assert_eq!(graph.nodes.len(), 4);
    }

    #[test]
    fn signed_zero_matches() {
        let shape = Shape::from(vec![
            Stroke::Line(dvec2(0.0, 0.5), dvec2(1.0, 0.5)),
            Stroke::Line(dvec2(-0.0, 0.5), dvec2(0.0, 1.0)),
        ]);
        let graph = StrokeGraph::build(&shape);
        assert_eq!(graph.edges[0].a, graph.edges[1].a);
    }

    #[test]
    fn other_endpoint() {
        let edge = Edge { stroke: 0, a: 3, b: 7 };
        assert_eq!(edge.other(3), 7);
        assert_eq!(edge.other(7), 3);
    }
}
