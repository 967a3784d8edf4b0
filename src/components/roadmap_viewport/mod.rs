mod component;
mod config;
mod error;
mod graph;
mod projection;
mod render;
mod selection;
mod state;
mod style;
mod types;
mod viewport;

pub use component::RoadmapViewport;
pub use config::ViewportConfig;
pub use error::ViewportError;
pub use graph::RoadmapGraph;
pub use projection::{CanvasExtent, canvas_anchor, canvas_extent, world_position};
pub use render::{EdgeLine, Emphasis, NodeCard, Scene};
pub use selection::{SelectionTracker, connected_node_ids};
pub use state::RoadmapViewState;
pub use types::{
	Difficulty, EdgeId, GenerateCourseRequest, NodeData, NodeId, NodeKind, Point, RoadmapDocument,
	RoadmapEdge, RoadmapNode,
};
pub use viewport::{Gesture, InputEvent, ViewTransform, ViewportController};
