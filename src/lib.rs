//! Leptos client-side roadmap viewer: a pan/zoom canvas over a roadmap graph.
//!
//! The engine ([`RoadmapViewState`] and the types re-exported here) is plain
//! Rust and can be driven headlessly; the components only forward browser
//! events into it.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod pages;

pub use components::roadmap_viewport::{
	CanvasExtent, Difficulty, EdgeId, EdgeLine, Emphasis, GenerateCourseRequest, Gesture,
	InputEvent, NodeCard, NodeData, NodeId, NodeKind, Point, RoadmapDocument, RoadmapEdge,
	RoadmapGraph, RoadmapNode, RoadmapViewState, Scene, SelectionTracker, ViewTransform,
	ViewportConfig, ViewportController, ViewportError, canvas_anchor, canvas_extent,
	connected_node_ids, world_position,
};

// Top-Level pages
use crate::pages::home::{Home, RoadmapPage};
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the roadmap viewer and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Roadmap Viewer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/roadmap/:id") view=RoadmapPage />
			</Routes>
		</Router>
	}
}
