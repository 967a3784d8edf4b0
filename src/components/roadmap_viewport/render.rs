use std::collections::HashSet;

use super::config::ViewportConfig;
use super::graph::RoadmapGraph;
use super::projection::{CanvasExtent, canvas_anchor, world_position};
use super::selection::{SelectionTracker, connected_node_ids};
use super::types::{EdgeId, NodeId, NodeKind, Point};

/// How strongly a card is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Emphasis {
	/// The selected node.
	Selected,
	/// A neighbour of the selected node.
	Connected,
	/// Everything else.
	Normal,
}

/// A node card; `offset` is its world position relative to the canvas center.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeCard {
	/// Node id.
	pub id: NodeId,
	/// Node kind, picks the style.
	pub kind: NodeKind,
	/// Card title.
	pub label: String,
	/// Card body.
	pub description: String,
	/// Card center relative to the canvas center.
	pub offset: Point,
	/// Selection state.
	pub emphasis: Emphasis,
}

/// A connector line in canvas (SVG) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeLine {
	/// Edge id.
	pub id: EdgeId,
	/// Source anchor.
	pub from: Point,
	/// Target anchor.
	pub to: Point,
	/// Touches the selected node.
	pub highlighted: bool,
}

/// Everything the view draws for one graph and selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	/// Canvas size the lines are laid out in.
	pub extent: CanvasExtent,
	/// One card per node, in document order.
	pub cards: Vec<NodeCard>,
	/// One line per edge whose endpoints both resolve.
	pub lines: Vec<EdgeLine>,
	/// Edges dropped for a missing endpoint.
	pub skipped_edges: usize,
}

/// Lays out cards and lines for `graph` under `selection`.
pub fn build_scene(
	graph: &RoadmapGraph,
	extent: CanvasExtent,
	selection: &SelectionTracker,
	config: &ViewportConfig,
) -> Scene {
	let spacing = config.spacing_multiplier;
	let connected = selection
		.selected()
		.map(|id| connected_node_ids(graph, id))
		.unwrap_or_else(HashSet::new);

	let cards = graph
		.nodes()
		.iter()
		.map(|node| {
			let emphasis = if selection.is_selected(node.id) {
				Emphasis::Selected
			} else if connected.contains(&node.id) {
				Emphasis::Connected
			} else {
				Emphasis::Normal
			};
			NodeCard {
				id: node.id,
				kind: node.kind,
				label: node.data.label.clone(),
				description: node.data.description.clone(),
				offset: world_position(node, spacing),
				emphasis,
			}
		})
		.collect();

	let mut skipped_edges = 0;
	let mut lines = Vec::with_capacity(graph.edges().len());
	for edge in graph.edges() {
		let Some((source, target)) = graph.endpoints(edge) else {
			skipped_edges += 1;
			continue;
		};
		lines.push(EdgeLine {
			id: edge.id,
			from: canvas_anchor(source, spacing, &extent),
			to: canvas_anchor(target, spacing, &extent),
			highlighted: selection.highlights_edge(edge),
		});
	}

	Scene {
		extent,
		cards,
		lines,
		skipped_edges,
	}
}
