use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::error::ViewportError;

/// Node identifier, unique within a document.
pub type NodeId = i64;
/// Edge identifier.
pub type EdgeId = i64;

/// A 2D coordinate or offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	/// Horizontal component.
	pub x: f64,
	/// Vertical component, growing downwards.
	pub y: f64,
}

impl Point {
	/// `(0, 0)`.
	pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

	/// Point at `(x, y)`.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Neither component is NaN or infinite.
	pub fn is_finite(&self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

/// Node category; drives card color and legend entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum NodeKind {
	Start,
	Course,
	Milestone,
	Project,
	Concept,
	Topic,
	Step,
	Quiz,
	End,
	/// Any type string this viewer does not know about.
	#[serde(other)]
	Other,
}

impl NodeKind {
	/// Lowercase wire name, also used as a CSS-friendly label.
	pub fn as_str(&self) -> &'static str {
		match self {
			NodeKind::Start => "start",
			NodeKind::Course => "course",
			NodeKind::Milestone => "milestone",
			NodeKind::Project => "project",
			NodeKind::Concept => "concept",
			NodeKind::Topic => "topic",
			NodeKind::Step => "step",
			NodeKind::Quiz => "quiz",
			NodeKind::End => "end",
			NodeKind::Other => "other",
		}
	}
}

/// Text shown on a node card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
	/// Card title.
	pub label: String,
	/// Longer text for the card body and detail panel.
	#[serde(default)]
	pub description: String,
}

/// One step of a roadmap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadmapNode {
	/// Unique id.
	pub id: NodeId,
	/// Category, serialized as `type`.
	#[serde(rename = "type")]
	pub kind: NodeKind,
	/// Author-supplied logical coordinate, not pixels.
	pub position: Point,
	/// Card text.
	pub data: NodeData,
}

/// A connection between two nodes. Direction is only kept for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapEdge {
	/// Edge id.
	pub id: EdgeId,
	/// Start node; may not exist in the document.
	pub source: NodeId,
	/// End node; may not exist in the document.
	pub target: NodeId,
}

impl RoadmapEdge {
	/// Either endpoint is `id`.
	pub fn touches(&self, id: NodeId) -> bool {
		self.source == id || self.target == id
	}

	/// The endpoint opposite `id`, if the edge touches it.
	pub fn other_end(&self, id: NodeId) -> Option<NodeId> {
		if self.source == id {
			Some(self.target)
		} else if self.target == id {
			Some(self.source)
		} else {
			None
		}
	}
}

/// Author-assigned difficulty of a whole roadmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Difficulty {
	Easy,
	#[default]
	Medium,
	Hard,
}

impl Difficulty {
	/// Display name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Difficulty::Easy => "Easy",
			Difficulty::Medium => "Medium",
			Difficulty::Hard => "Hard",
		}
	}
}

/// A roadmap as handed over by the persistence layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapDocument {
	/// Roadmap title.
	#[serde(default)]
	pub title: String,
	/// Nodes in author order.
	#[serde(default)]
	pub nodes: Vec<RoadmapNode>,
	/// Edges in author order.
	#[serde(default)]
	pub edges: Vec<RoadmapEdge>,
	/// Defaults to [`Difficulty::Medium`].
	#[serde(default)]
	pub difficulty: Difficulty,
}

impl RoadmapDocument {
	/// Parses a document; missing fields fall back to their defaults.
	pub fn from_json(json: &str) -> Result<Self, ViewportError> {
		Ok(serde_json::from_str(json)?)
	}
}

/// Emitted when the user asks for a course built around the selected node.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCourseRequest {
	/// The node the course is built around.
	pub selected_node: RoadmapNode,
	/// Title of the containing roadmap.
	pub roadmap_title: String,
	/// Id of the containing roadmap.
	pub roadmap_id: String,
}
