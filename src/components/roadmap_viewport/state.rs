use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info, warn};

use super::config::ViewportConfig;
use super::error::ViewportError;
use super::graph::RoadmapGraph;
use super::projection::{CanvasExtent, ExtentCache, canvas_extent};
use super::render::{Scene, build_scene};
use super::selection::{SelectionTracker, connected_node_ids};
use super::types::{GenerateCourseRequest, NodeId, RoadmapDocument, RoadmapNode};
use super::viewport::{InputEvent, ViewTransform, ViewportController};

/// One viewport session: the loaded graph plus the view and selection state
/// drawn on top of it.
///
/// Each slice has a single writer. Viewport state only changes through
/// [`ViewportController`], selection only through [`SelectionTracker`].
#[derive(Clone, Debug)]
pub struct RoadmapViewState {
	graph: Arc<RoadmapGraph>,
	roadmap_id: String,
	extent: ExtentCache,
	viewport: ViewportController,
	selection: SelectionTracker,
	config: ViewportConfig,
	generation: u64,
	/// Whether the viewer covers the whole window.
	pub fullscreen: bool,
}

impl Default for RoadmapViewState {
	fn default() -> Self {
		Self::with_valid_config(ViewportConfig::default())
	}
}

impl RoadmapViewState {
	/// Empty session; fails if `config` does not validate.
	pub fn new(config: ViewportConfig) -> Result<Self, ViewportError> {
		config.validate()?;
		Ok(Self::with_valid_config(config))
	}

	fn with_valid_config(config: ViewportConfig) -> Self {
		let graph = Arc::new(RoadmapGraph::default());
		let mut extent = ExtentCache::default();
		extent.get_or_compute(&graph, &config);
		Self {
			graph,
			roadmap_id: String::new(),
			extent,
			viewport: ViewportController::new(config),
			selection: SelectionTracker::default(),
			config,
			generation: 0,
			fullscreen: false,
		}
	}

	/// Loads the document for `roadmap_id`.
	///
	/// Always resets the session, even when the document is unchanged and
	/// only the id moved. A document that fails validation loads as an empty
	/// graph and the error is returned for display.
	pub fn load_roadmap(&mut self, roadmap_id: &str, doc: RoadmapDocument) -> Result<(), ViewportError> {
		let (graph, result) = match RoadmapGraph::from_document(doc) {
			Ok(graph) => (graph, Ok(())),
			Err(e) => {
				warn!("roadmap {:?} rejected: {}", roadmap_id, e);
				(RoadmapGraph::default(), Err(e))
			}
		};
		self.roadmap_id = roadmap_id.to_string();
		self.load_graph(Arc::new(graph));
		result
	}

	/// Swaps in a new graph and resets view and selection in the same step.
	pub fn load_graph(&mut self, graph: Arc<RoadmapGraph>) {
		info!(
			"loaded roadmap {:?}: {} nodes, {} edges",
			graph.title(),
			graph.nodes().len(),
			graph.edges().len()
		);
		let dangling = graph.dangling_edge_count();
		if dangling > 0 {
			warn!("{} edge(s) reference missing nodes and will not be drawn", dangling);
		}

		self.extent.get_or_compute(&graph, &self.config);
		self.graph = graph;
		self.viewport.reset();
		self.selection.clear();
		self.fullscreen = false;
		self.generation += 1;
	}

	/// The loaded graph.
	pub fn graph(&self) -> &Arc<RoadmapGraph> {
		&self.graph
	}

	/// Id passed to the last [`load_roadmap`](Self::load_roadmap).
	pub fn roadmap_id(&self) -> &str {
		&self.roadmap_id
	}

	/// Tunables this session was built with.
	pub fn config(&self) -> &ViewportConfig {
		&self.config
	}

	/// Bumped on every [`load_graph`](Self::load_graph).
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Canvas size for the loaded graph.
	pub fn canvas_extent(&self) -> CanvasExtent {
		self.extent
			.cached()
			.unwrap_or_else(|| canvas_extent(self.graph.nodes(), &self.config))
	}

	/// Current pan and zoom.
	pub fn transform(&self) -> ViewTransform {
		self.viewport.transform()
	}

	/// Whether a pan gesture is active.
	pub fn is_panning(&self) -> bool {
		self.viewport.is_panning()
	}

	/// Forwards an input event to the viewport; rejected events change nothing.
	pub fn handle_input(&mut self, event: InputEvent) -> Result<(), ViewportError> {
		self.viewport.apply(event).inspect_err(|e| debug!("ignored input: {}", e))
	}

	/// Default pan and zoom, no selection.
	pub fn reset_view(&mut self) {
		self.viewport.reset();
		self.selection.clear();
	}

	/// Toggles selection of `id`; unknown ids are rejected.
	pub fn select_node(&mut self, id: NodeId) -> Result<Option<NodeId>, ViewportError> {
		self.selection
			.select_node(&self.graph, id)
			.inspect_err(|e| debug!("ignored selection: {}", e))
	}

	/// Drops the selection.
	pub fn clear_selection(&mut self) {
		self.selection.clear();
	}

	/// Selection slice.
	pub fn selection(&self) -> &SelectionTracker {
		&self.selection
	}

	/// The selected node, if any.
	pub fn selected_node(&self) -> Option<&RoadmapNode> {
		self.selection.selected().and_then(|id| self.graph.node(id))
	}

	/// Neighbours of the selected node.
	pub fn connected_node_ids(&self) -> HashSet<NodeId> {
		self.selection
			.selected()
			.map(|id| connected_node_ids(&self.graph, id))
			.unwrap_or_default()
	}

	/// Cards and lines for the current graph and selection.
	pub fn scene(&self) -> Scene {
		build_scene(&self.graph, self.canvas_extent(), &self.selection, &self.config)
	}

	/// Course-generation request for the selected node, if any.
	pub fn generate_course_request(&self) -> Option<GenerateCourseRequest> {
		self.selected_node().map(|node| GenerateCourseRequest {
			selected_node: node.clone(),
			roadmap_title: self.graph.title().to_string(),
			roadmap_id: self.roadmap_id.clone(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::roadmap_viewport::graph::tests::{edge, graph, node};
	use crate::components::roadmap_viewport::types::Point;

	fn loaded() -> RoadmapViewState {
		let mut state = RoadmapViewState::default();
		state.load_graph(Arc::new(graph(
			vec![node(1, 0.0, 0.0), node(2, 500.0, 0.0)],
			vec![edge(1, 1, 2)],
		)));
		state
	}

	fn pan(state: &mut RoadmapViewState, to: Point) {
		state
			.handle_input(InputEvent::PointerDown {
				pos: Point::ORIGIN,
				button: 0,
			})
			.unwrap();
		state.handle_input(InputEvent::PointerMove { pos: to }).unwrap();
		state.handle_input(InputEvent::PointerUp).unwrap();
	}

	#[test]
	fn rejects_invalid_config() {
		let config = ViewportConfig {
			default_scale: 3.0,
			..ViewportConfig::default()
		};
		assert!(RoadmapViewState::new(config).is_err());
	}

	#[test]
	fn reset_view_restores_defaults_and_clears_selection() {
		let mut state = loaded();
		pan(&mut state, Point::new(120.0, -40.0));
		for _ in 0..6 {
			state.handle_input(InputEvent::Wheel { delta_y: -1.0 }).unwrap();
		}
		state.select_node(2).unwrap();
		assert!((state.transform().k - 1.4).abs() < 1e-9);

		state.reset_view();
		assert_eq!(state.transform().pan(), Point::ORIGIN);
		assert_eq!(state.transform().k, 0.8);
		assert_eq!(state.selection().selected(), None);
	}

	#[test]
	fn loading_resets_everything() {
		let mut state = loaded();
		pan(&mut state, Point::new(5.0, 5.0));
		state.select_node(1).unwrap();
		state.fullscreen = true;
		let generation = state.generation();

		state.load_graph(Arc::new(graph(vec![node(7, 1.0, 1.0)], vec![])));
		assert_eq!(state.generation(), generation + 1);
		assert_eq!(state.transform().pan(), Point::ORIGIN);
		assert_eq!(state.selection().selected(), None);
		assert!(!state.fullscreen);
		assert_eq!(state.canvas_extent().width, 1200.0);
	}

	#[test]
	fn selection_does_not_touch_viewport() {
		let mut state = loaded();
		pan(&mut state, Point::new(30.0, 30.0));
		let before = state.transform();
		state.select_node(1).unwrap();
		assert_eq!(state.transform(), before);
		assert_eq!(state.connected_node_ids(), HashSet::from([2]));
	}

	#[test]
	fn unknown_selection_is_ignored() {
		let mut state = loaded();
		state.select_node(1).unwrap();
		assert!(state.select_node(99).is_err());
		assert_eq!(state.selected_node().map(|n| n.id), Some(1));
	}

	fn two_nodes() -> RoadmapDocument {
		RoadmapDocument {
			title: "test".into(),
			nodes: vec![node(1, 0.0, 0.0), node(2, 500.0, 0.0)],
			edges: vec![edge(1, 1, 2)],
			..Default::default()
		}
	}

	#[test]
	fn new_roadmap_id_resets_even_with_same_document() {
		let mut state = RoadmapViewState::default();
		state.load_roadmap("a", two_nodes()).unwrap();
		pan(&mut state, Point::new(70.0, 20.0));
		state.handle_input(InputEvent::ZoomIn).unwrap();
		state.select_node(2).unwrap();
		state.fullscreen = true;
		let generation = state.generation();

		state.load_roadmap("b", two_nodes()).unwrap();
		assert_eq!(state.roadmap_id(), "b");
		assert_eq!(state.generation(), generation + 1);
		assert_eq!(state.transform().pan(), Point::ORIGIN);
		assert_eq!(state.transform().k, 0.8);
		assert_eq!(state.selection().selected(), None);
		assert!(!state.fullscreen);
	}

	#[test]
	fn invalid_roadmap_loads_empty_graph() {
		let mut state = RoadmapViewState::default();
		state.load_roadmap("a", two_nodes()).unwrap();
		state.select_node(1).unwrap();

		let mut doc = two_nodes();
		doc.nodes.push(node(1, 9.0, 9.0));
		let err = state.load_roadmap("dup", doc).unwrap_err();
		assert_eq!(err, ViewportError::DuplicateNodeId(1));
		assert!(state.graph().is_empty());
		assert_eq!(state.selection().selected(), None);
	}

	#[test]
	fn builds_course_request_for_selection() {
		let mut state = RoadmapViewState::default();
		state.load_roadmap("rm-1", two_nodes()).unwrap();
		assert!(state.generate_course_request().is_none());
		state.select_node(2).unwrap();
		let request = state.generate_course_request().unwrap();
		assert_eq!(request.selected_node.id, 2);
		assert_eq!(request.roadmap_title, "test");
		assert_eq!(request.roadmap_id, "rm-1");
	}
}
