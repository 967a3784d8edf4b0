use std::collections::HashSet;

use super::error::ViewportError;
use super::graph::RoadmapGraph;
use super::types::{NodeId, RoadmapEdge};

/// Holds the single selected node, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionTracker {
	selected: Option<NodeId>,
}

impl SelectionTracker {
	/// The selected id.
	pub fn selected(&self) -> Option<NodeId> {
		self.selected
	}

	/// Selects `id`, or clears the selection if `id` is already selected.
	/// Unknown ids leave the selection untouched.
	pub fn select_node(&mut self, graph: &RoadmapGraph, id: NodeId) -> Result<Option<NodeId>, ViewportError> {
		if !graph.contains(id) {
			return Err(ViewportError::UnknownNode(id));
		}
		self.selected = if self.selected == Some(id) { None } else { Some(id) };
		Ok(self.selected)
	}

	/// Drops the selection.
	pub fn clear(&mut self) {
		self.selected = None;
	}

	/// Whether `id` is the selected node.
	pub fn is_selected(&self, id: NodeId) -> bool {
		self.selected == Some(id)
	}

	/// An edge is highlighted when either end is the selected node.
	pub fn highlights_edge(&self, edge: &RoadmapEdge) -> bool {
		self.selected.is_some_and(|id| edge.touches(id))
	}
}

/// Nodes sharing an edge with `selected`, ignoring edge direction.
///
/// The selected node itself and unresolved endpoints are never included.
pub fn connected_node_ids(graph: &RoadmapGraph, selected: NodeId) -> HashSet<NodeId> {
	graph
		.edges()
		.iter()
		.filter_map(|edge| edge.other_end(selected))
		.filter(|&other| other != selected && graph.contains(other))
		.collect()
}
