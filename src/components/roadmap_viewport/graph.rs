use std::collections::{BTreeMap, HashMap};

use super::error::ViewportError;
use super::types::{Difficulty, NodeId, NodeKind, RoadmapDocument, RoadmapEdge, RoadmapNode};

/// Read-only node and edge set for one loaded roadmap.
#[derive(Clone, Debug, Default)]
pub struct RoadmapGraph {
	title: String,
	difficulty: Difficulty,
	nodes: Vec<RoadmapNode>,
	edges: Vec<RoadmapEdge>,
	index: HashMap<NodeId, usize>,
}

impl RoadmapGraph {
	/// Builds the graph in one step so no consumer ever sees a partial one.
	pub fn from_document(doc: RoadmapDocument) -> Result<Self, ViewportError> {
		let mut index = HashMap::with_capacity(doc.nodes.len());
		for (i, node) in doc.nodes.iter().enumerate() {
			if !node.position.is_finite() {
				return Err(ViewportError::NonFinitePosition(node.id));
			}
			if index.insert(node.id, i).is_some() {
				return Err(ViewportError::DuplicateNodeId(node.id));
			}
		}

		Ok(Self {
			title: doc.title,
			difficulty: doc.difficulty,
			nodes: doc.nodes,
			edges: doc.edges,
			index,
		})
	}

	/// Roadmap title.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Roadmap difficulty.
	pub fn difficulty(&self) -> Difficulty {
		self.difficulty
	}

	/// Nodes in document order.
	pub fn nodes(&self) -> &[RoadmapNode] {
		&self.nodes
	}

	/// Edges in document order, dangling ones included.
	pub fn edges(&self) -> &[RoadmapEdge] {
		&self.edges
	}

	/// No nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Node by id.
	pub fn node(&self, id: NodeId) -> Option<&RoadmapNode> {
		self.index.get(&id).map(|&i| &self.nodes[i])
	}

	/// Whether `id` names a node of this graph.
	pub fn contains(&self, id: NodeId) -> bool {
		self.index.contains_key(&id)
	}

	/// Both endpoints of `edge`, or `None` if either is missing.
	pub fn endpoints(&self, edge: &RoadmapEdge) -> Option<(&RoadmapNode, &RoadmapNode)> {
		Some((self.node(edge.source)?, self.node(edge.target)?))
	}

	/// Edges with at least one missing endpoint.
	pub fn dangling_edge_count(&self) -> usize {
		self.edges
			.iter()
			.filter(|e| self.endpoints(e).is_none())
			.count()
	}

	/// Node count per kind; kinds with no nodes are left out.
	pub fn kind_counts(&self) -> BTreeMap<NodeKind, usize> {
		let mut counts = BTreeMap::new();
		for node in &self.nodes {
			*counts.entry(node.kind).or_insert(0) += 1;
		}
		counts
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::components::roadmap_viewport::types::{NodeData, Point};

	pub(crate) fn node(id: NodeId, x: f64, y: f64) -> RoadmapNode {
		RoadmapNode {
			id,
			kind: NodeKind::Topic,
			position: Point::new(x, y),
			data: NodeData {
				label: format!("Node {}", id),
				description: String::new(),
			},
		}
	}

	pub(crate) fn edge(id: i64, source: NodeId, target: NodeId) -> RoadmapEdge {
		RoadmapEdge { id, source, target }
	}

	pub(crate) fn graph(nodes: Vec<RoadmapNode>, edges: Vec<RoadmapEdge>) -> RoadmapGraph {
		RoadmapGraph::from_document(RoadmapDocument {
			title: "test".into(),
			nodes,
			edges,
			difficulty: Difficulty::Easy,
		})
		.unwrap()
	}

	#[test]
	fn rejects_duplicate_ids() {
		let err = RoadmapGraph::from_document(RoadmapDocument {
			nodes: vec![node(1, 0.0, 0.0), node(1, 5.0, 5.0)],
			..Default::default()
		})
		.unwrap_err();
		assert_eq!(err, ViewportError::DuplicateNodeId(1));
	}

	#[test]
	fn rejects_non_finite_positions() {
		let err = RoadmapGraph::from_document(RoadmapDocument {
			nodes: vec![node(3, f64::NAN, 0.0)],
			..Default::default()
		})
		.unwrap_err();
		assert_eq!(err, ViewportError::NonFinitePosition(3));
	}

	#[test]
	fn looks_up_nodes_and_counts_dangling_edges() {
		let g = graph(
			vec![node(1, 0.0, 0.0), node(2, 10.0, 0.0)],
			vec![edge(1, 1, 2), edge(2, 2, 99), edge(3, 42, 1)],
		);
		assert_eq!(g.node(2).map(|n| n.position.x), Some(10.0));
		assert!(g.node(99).is_none());
		assert!(g.endpoints(&g.edges()[0]).is_some());
		assert_eq!(g.dangling_edge_count(), 2);
	}

	#[test]
	fn counts_kinds() {
		let mut start = node(1, 0.0, 0.0);
		start.kind = NodeKind::Start;
		let g = graph(vec![start, node(2, 1.0, 0.0), node(3, 2.0, 0.0)], vec![]);
		let counts = g.kind_counts();
		assert_eq!(counts.get(&NodeKind::Start), Some(&1));
		assert_eq!(counts.get(&NodeKind::Topic), Some(&2));
		assert!(!counts.contains_key(&NodeKind::Quiz));
	}
}
