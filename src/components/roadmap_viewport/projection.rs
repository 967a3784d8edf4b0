//! Logical → world coordinate mapping and canvas sizing.
//!
//! Node cards and edge lines both go through [`world_position`], so a line
//! always ends exactly on the card anchor whatever the pan and zoom are.

use std::sync::Arc;

use super::config::ViewportConfig;
use super::graph::RoadmapGraph;
use super::types::{Point, RoadmapNode};

/// Size of the world canvas, centered on the logical origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasExtent {
	/// Full width in world pixels.
	pub width: f64,
	/// Full height in world pixels.
	pub height: f64,
}

impl CanvasExtent {
	/// Offset from the canvas' top-left corner to its center.
	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}

	/// Whether a world-space point (relative to the canvas center) lies
	/// strictly inside the canvas.
	pub fn contains(&self, world: Point) -> bool {
		world.x.abs() < self.width / 2.0 && world.y.abs() < self.height / 2.0
	}
}

/// World-space position of a node, relative to the canvas center.
pub fn world_position(node: &RoadmapNode, spacing_multiplier: f64) -> Point {
	Point::new(
		node.position.x * spacing_multiplier,
		node.position.y * spacing_multiplier,
	)
}

/// Node anchor in canvas (SVG) coordinates, origin at the top-left corner.
pub fn canvas_anchor(node: &RoadmapNode, spacing_multiplier: f64, extent: &CanvasExtent) -> Point {
	world_position(node, spacing_multiplier) + extent.center()
}

/// Smallest canvas that holds every node card plus padding on each side.
///
/// The extent is symmetric around the center and built from the most extreme
/// coordinate on each axis, so every card and every straight edge between two
/// anchors lies inside it.
pub fn canvas_extent(nodes: &[RoadmapNode], config: &ViewportConfig) -> CanvasExtent {
	if nodes.is_empty() {
		return CanvasExtent {
			width: config.min_canvas_width,
			height: config.min_canvas_height,
		};
	}

	let (max_abs_x, max_abs_y) = nodes.iter().fold((0.0f64, 0.0f64), |(mx, my), n| {
		(mx.max(n.position.x.abs()), my.max(n.position.y.abs()))
	});

	let half_x = max_abs_x * config.spacing_multiplier + config.node_half_width();
	let half_y = max_abs_y * config.spacing_multiplier + config.node_half_height();

	CanvasExtent {
		width: (half_x * 2.0 + config.padding * 2.0).max(config.min_canvas_width),
		height: (half_y * 2.0 + config.padding * 2.0).max(config.min_canvas_height),
	}
}

/// Caches [`canvas_extent`] per graph instance.
///
/// Re-renders caused by pan or selection changes reuse the cached value; only
/// a different graph (by pointer identity) or config triggers the O(N) scan.
#[derive(Clone, Debug, Default)]
pub struct ExtentCache {
	entry: Option<(Arc<RoadmapGraph>, ViewportConfig, CanvasExtent)>,
}

impl ExtentCache {
	pub fn get_or_compute(&mut self, graph: &Arc<RoadmapGraph>, config: &ViewportConfig) -> CanvasExtent {
		if let Some((cached, cached_config, extent)) = &self.entry {
			if Arc::ptr_eq(cached, graph) && cached_config == config {
				return *extent;
			}
		}
		let extent = canvas_extent(graph.nodes(), config);
		self.entry = Some((graph.clone(), *config, extent));
		extent
	}

	pub fn cached(&self) -> Option<CanvasExtent> {
		self.entry.as_ref().map(|(_, _, extent)| *extent)
	}
}
