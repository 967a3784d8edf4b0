use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::components::roadmap_viewport::{
	Difficulty, GenerateCourseRequest, NodeData, NodeKind, Point, RoadmapDocument, RoadmapEdge,
	RoadmapNode, RoadmapViewport,
};

/// Built-in roadmap shown when the page carries no document of its own.
fn sample_roadmap() -> RoadmapDocument {
	let steps = [
		(NodeKind::Start, "Getting Started", "Install the toolchain and write hello world", 0.0, -300.0),
		(NodeKind::Concept, "Ownership", "Moves, copies and drops", -200.0, -150.0),
		(NodeKind::Concept, "Borrowing", "Shared and mutable references", 200.0, -150.0),
		(NodeKind::Topic, "Traits", "Shared behaviour and generics", 0.0, 0.0),
		(NodeKind::Quiz, "Lifetimes Quiz", "Check your understanding of lifetimes", -200.0, 150.0),
		(NodeKind::Project, "CLI Tool", "Build a small command-line program", 200.0, 150.0),
		(NodeKind::Milestone, "Async Basics", "Futures, executors and tasks", 0.0, 300.0),
		(NodeKind::End, "Ship It", "Publish a crate", 0.0, 450.0),
	];
	let nodes = steps
		.iter()
		.enumerate()
		.map(|(i, &(kind, label, description, x, y))| RoadmapNode {
			id: i as i64 + 1,
			kind,
			position: Point::new(x, y),
			data: NodeData {
				label: label.into(),
				description: description.into(),
			},
		})
		.collect();

	let links = [(1, 2), (1, 3), (2, 4), (3, 4), (4, 5), (4, 6), (5, 7), (6, 7), (7, 8)];
	let edges = links
		.iter()
		.enumerate()
		.map(|(i, &(source, target))| RoadmapEdge {
			id: i as i64 + 1,
			source,
			target,
		})
		.collect();

	RoadmapDocument {
		title: "Rust Fundamentals".into(),
		nodes,
		edges,
		difficulty: Difficulty::Medium,
	}
}

/// Load the roadmap from a script element with id="roadmap-data".
fn load_roadmap_document() -> Option<RoadmapDocument> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("roadmap-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match RoadmapDocument::from_json(&json_text) {
		Ok(doc) => {
			info!(
				"loaded roadmap {:?}: {} nodes, {} edges",
				doc.title,
				doc.nodes.len(),
				doc.edges.len()
			);
			Some(doc)
		}
		Err(e) => {
			warn!("failed to read roadmap data: {}", e);
			None
		}
	}
}

/// Hands the request to the course generator; here it is only logged.
fn course_handler() -> Callback<GenerateCourseRequest> {
	Callback::new(|request: GenerateCourseRequest| match serde_json::to_string(&request) {
		Ok(json) => info!("generate course: {}", json),
		Err(e) => warn!("could not encode course request: {}", e),
	})
}

#[component]
fn RoadmapScreen(#[prop(into)] roadmap_id: Signal<String>) -> impl IntoView {
	let roadmap = load_roadmap_document().unwrap_or_else(sample_roadmap);
	let document = Signal::derive(move || roadmap.clone());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<RoadmapViewport document=document roadmap_id=roadmap_id on_generate_course=course_handler() />
		</ErrorBoundary>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! { <RoadmapScreen roadmap_id="sample".to_string() /> }
}

/// Roadmap addressed by `/roadmap/:id`.
#[component]
pub fn RoadmapPage() -> impl IntoView {
	let params = use_params_map();
	let roadmap_id = Signal::derive(move || params.with(|p| p.get("id")).unwrap_or_default());

	view! { <RoadmapScreen roadmap_id=roadmap_id /> }
}
