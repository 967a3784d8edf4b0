use std::collections::HashSet;
use std::sync::Arc;

use roadmap_viewport::{
	InputEvent, NodeData, NodeKind, Point, RoadmapDocument, RoadmapEdge, RoadmapGraph,
	RoadmapNode, RoadmapViewState, ViewportConfig, canvas_extent, world_position,
};

fn node(id: i64, x: f64, y: f64) -> RoadmapNode {
	RoadmapNode {
		id,
		kind: NodeKind::Step,
		position: Point::new(x, y),
		data: NodeData {
			label: format!("step {}", id),
			description: String::new(),
		},
	}
}

fn edge(id: i64, source: i64, target: i64) -> RoadmapEdge {
	RoadmapEdge { id, source, target }
}

fn load(nodes: Vec<RoadmapNode>, edges: Vec<RoadmapEdge>) -> RoadmapViewState {
	let graph = RoadmapGraph::from_document(RoadmapDocument {
		title: "Integration".into(),
		nodes,
		edges,
		..Default::default()
	})
	.expect("graph should be valid");
	let mut state = RoadmapViewState::default();
	state.load_graph(Arc::new(graph));
	state
}

fn drag(state: &mut RoadmapViewState, from: Point, to: Point) {
	state
		.handle_input(InputEvent::PointerDown { pos: from, button: 0 })
		.unwrap();
	state.handle_input(InputEvent::PointerMove { pos: to }).unwrap();
	state.handle_input(InputEvent::PointerUp).unwrap();
}

#[test]
fn projection_is_deterministic() {
	let config = ViewportConfig::default();
	let nodes = vec![node(1, 13.5, -7.25), node(2, -400.0, 220.0)];
	assert_eq!(canvas_extent(&nodes, &config), canvas_extent(&nodes, &config));
	assert_eq!(world_position(&nodes[1], 2.0), world_position(&nodes[1], 2.0));
}

#[test]
fn every_card_fits_inside_the_canvas() {
	let config = ViewportConfig::default();
	let nodes: Vec<_> = (0..40)
		.map(|i| {
			let f = i as f64;
			node(i, (f * 37.0) % 900.0 - 450.0, (f * 53.0) % 1300.0 - 650.0)
		})
		.collect();
	let extent = canvas_extent(&nodes, &config);

	for n in &nodes {
		let world = world_position(n, config.spacing_multiplier);
		let right = world.x.abs() + config.node_half_width();
		let bottom = world.y.abs() + config.node_half_height();
		assert!(right + config.padding <= extent.width / 2.0);
		assert!(bottom + config.padding <= extent.height / 2.0);
	}
}

#[test]
fn two_node_scenario_contains_both() {
	let state = load(vec![node(1, 0.0, 0.0), node(2, 500.0, 0.0)], vec![edge(1, 1, 2)]);
	let extent = state.canvas_extent();
	assert!(extent.width >= 1912.0);

	let scene = state.scene();
	for card in &scene.cards {
		assert!(extent.contains(card.offset));
	}
	assert_eq!(scene.lines.len(), 1);
}

#[test]
fn pan_follows_pointer_one_to_one_at_any_zoom() {
	let mut state = load(vec![node(1, 0.0, 0.0)], vec![]);
	for _ in 0..7 {
		state.handle_input(InputEvent::Wheel { delta_y: -100.0 }).unwrap();
	}
	let initial = state.transform().pan();
	drag(&mut state, Point::new(200.0, 150.0), Point::new(260.0, 90.0));
	assert_eq!(state.transform().pan(), initial + Point::new(60.0, -60.0));
}

#[test]
fn zoom_never_leaves_limits() {
	let mut state = load(vec![], vec![]);
	let deltas = [-1.0, -1.0, 4.0, -2.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, -3.0];
	for round in 0..30 {
		for (i, delta) in deltas.iter().enumerate() {
			let sign = if (round + i) % 3 == 0 { -1.0 } else { 1.0 };
			state
				.handle_input(InputEvent::Wheel { delta_y: delta * sign })
				.unwrap();
			let k = state.transform().k;
			assert!((0.2..=2.0).contains(&k), "scale {} escaped limits", k);
		}
	}
}

#[test]
fn double_select_clears_selection() {
	let mut state = load(vec![node(1, 0.0, 0.0), node(2, 1.0, 1.0)], vec![edge(1, 1, 2)]);
	state.select_node(2).unwrap();
	state.select_node(2).unwrap();
	assert_eq!(state.selection().selected(), None);
	assert!(state.connected_node_ids().is_empty());
}

#[test]
fn dangling_edge_is_omitted_without_panicking() {
	let state = load(
		vec![node(1, 0.0, 0.0), node(2, 100.0, 0.0)],
		vec![edge(1, 1, 2), edge(2, 2, 999)],
	);
	let scene = state.scene();
	let ids: Vec<_> = scene.lines.iter().map(|l| l.id).collect();
	assert_eq!(ids, vec![1]);
	assert_eq!(scene.skipped_edges, 1);
}

#[test]
fn reset_view_after_pan_and_zoom() {
	let mut state = load(vec![node(1, 0.0, 0.0), node(2, 50.0, 0.0)], vec![edge(1, 1, 2)]);
	drag(&mut state, Point::ORIGIN, Point::new(120.0, -40.0));
	for _ in 0..6 {
		state.handle_input(InputEvent::Wheel { delta_y: -1.0 }).unwrap();
	}
	state.select_node(1).unwrap();
	assert_eq!(state.transform().pan(), Point::new(120.0, -40.0));
	assert!((state.transform().k - 1.4).abs() < 1e-9);

	state.reset_view();
	assert_eq!(state.transform().pan(), Point::ORIGIN);
	assert_eq!(state.transform().k, 0.8);
	assert!(state.selection().selected().is_none());
}

#[test]
fn neighbors_come_only_from_touching_edges() {
	// A=1, B=2, C=3, D=4
	let mut state = load(
		vec![node(1, 0.0, 0.0), node(2, 1.0, 0.0), node(3, 2.0, 0.0), node(4, 3.0, 0.0)],
		vec![edge(1, 1, 2), edge(2, 3, 4)],
	);
	state.select_node(1).unwrap();
	assert_eq!(state.connected_node_ids(), HashSet::from([2]));
}

#[test]
fn document_json_feeds_the_viewer() {
	let doc = RoadmapDocument::from_json(
		r#"{"title": "Web", "difficulty": "Hard",
			"nodes": [
				{"id": 1, "type": "start", "position": {"x": 0, "y": 0}, "data": {"label": "HTML", "description": ""}},
				{"id": 2, "type": "end", "position": {"x": 100, "y": 50}, "data": {"label": "Deploy", "description": ""}}
			],
			"edges": [{"id": 1, "source": 1, "target": 2}]}"#,
	)
	.unwrap();
	let mut state = RoadmapViewState::default();
	state.load_roadmap("web-101", doc).unwrap();
	state.select_node(2).unwrap();

	let request = state.generate_course_request().unwrap();
	assert_eq!(request.roadmap_id, "web-101");
	assert_eq!(request.roadmap_title, "Web");
	assert_eq!(request.selected_node.data.label, "Deploy");
}

#[test]
fn switching_roadmap_id_starts_a_fresh_view() {
	let doc = || RoadmapDocument {
		title: "Same".into(),
		nodes: vec![node(1, 0.0, 0.0), node(2, 100.0, 0.0)],
		edges: vec![edge(1, 1, 2)],
		..Default::default()
	};
	let mut state = RoadmapViewState::default();
	state.load_roadmap("first", doc()).unwrap();
	drag(&mut state, Point::ORIGIN, Point::new(40.0, 40.0));
	state.handle_input(InputEvent::ZoomIn).unwrap();
	state.select_node(1).unwrap();

	state.load_roadmap("second", doc()).unwrap();
	assert_eq!(state.transform().pan(), Point::ORIGIN);
	assert_eq!(state.transform().k, 0.8);
	assert!(state.selection().selected().is_none());
	assert_eq!(state.roadmap_id(), "second");
}
