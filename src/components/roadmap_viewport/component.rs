use leptos::prelude::*;
use log::info;
use web_sys::{MouseEvent, TouchEvent, WheelEvent};

use super::render::{Emphasis, NodeCard};
use super::state::RoadmapViewState;
use super::style::node_style;
use super::types::{GenerateCourseRequest, NodeKind, Point, RoadmapDocument, RoadmapNode};
use super::viewport::InputEvent;

/// Header and legend data; only changes when a new graph is loaded.
#[derive(Clone, Debug, PartialEq)]
struct Summary {
	title: String,
	difficulty: &'static str,
	nodes: usize,
	edges: usize,
	legend: Vec<(NodeKind, usize)>,
}

fn client_point(ev: &MouseEvent) -> Point {
	Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn touch_points(ev: &TouchEvent) -> Vec<Point> {
	let list = ev.touches();
	(0..list.length())
		.filter_map(|i| list.item(i))
		.map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
		.collect()
}

/// Pan/zoom viewer for one roadmap document.
#[component]
pub fn RoadmapViewport(
	#[prop(into)] document: Signal<RoadmapDocument>,
	#[prop(into)] roadmap_id: Signal<String>,
	#[prop(optional)] on_generate_course: Option<Callback<GenerateCourseRequest>>,
) -> impl IntoView {
	let state = RwSignal::new(RoadmapViewState::default());
	let load_error = RwSignal::new(None::<String>);

	// Re-runs for a new document or a new roadmap id; either resets the view.
	Effect::new(move |_| {
		let id = roadmap_id.get();
		let doc = document.get();
		let mut result = Ok(());
		state.update(|s| result = s.load_roadmap(&id, doc));
		load_error.set(result.err().map(|e| e.to_string()));
	});

	let generation = Memo::new(move |_| state.with(|s| s.generation()));
	let selected = Memo::new(move |_| state.with(|s| s.selection().selected()));
	let transform = Memo::new(move |_| state.with(|s| s.transform()));
	let panning = Memo::new(move |_| state.with(|s| s.is_panning()));
	let fullscreen = Memo::new(move |_| state.with(|s| s.fullscreen));
	// Pan and zoom never rebuild the scene.
	let scene = Memo::new(move |_| {
		generation.track();
		selected.track();
		state.with_untracked(|s| s.scene())
	});
	let summary = Memo::new(move |_| {
		generation.track();
		state.with_untracked(|s| {
			let graph = s.graph();
			Summary {
				title: graph.title().to_string(),
				difficulty: graph.difficulty().as_str(),
				nodes: graph.nodes().len(),
				edges: graph.edges().len(),
				legend: graph.kind_counts().into_iter().collect(),
			}
		})
	});
	let card_width = state.with_untracked(|s| s.config().node_width);

	let send = move |event: InputEvent| {
		state.update(|s| {
			let _ = s.handle_input(event);
		});
	};

	let on_mousedown = move |ev: MouseEvent| {
		ev.prevent_default();
		send(InputEvent::PointerDown {
			pos: client_point(&ev),
			button: ev.button(),
		});
	};
	let on_mousemove = move |ev: MouseEvent| {
		if panning.get_untracked() {
			ev.prevent_default();
			send(InputEvent::PointerMove {
				pos: client_point(&ev),
			});
		}
	};
	let on_touchstart = move |ev: TouchEvent| {
		send(InputEvent::TouchStart {
			touches: touch_points(&ev),
		});
	};
	let on_touchmove = move |ev: TouchEvent| {
		if panning.get_untracked() {
			send(InputEvent::TouchMove {
				touches: touch_points(&ev),
			});
		}
	};
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		send(InputEvent::Wheel {
			delta_y: ev.delta_y(),
		});
	};

	let generate_course = move |_: MouseEvent| {
		let Some(request) = state.with_untracked(|s| s.generate_course_request()) else {
			return;
		};
		match on_generate_course {
			Some(cb) => cb.run(request),
			None => info!(
				"course generation requested for node #{} with no handler attached",
				request.selected_node.id
			),
		}
	};

	let detail_panel = move || {
		let node: RoadmapNode =
			selected.get().and_then(|id| state.with_untracked(|s| s.graph().node(id).cloned()))?;
		let style = node_style(node.kind);
		Some(view! {
			<aside class="roadmap-details">
				<div class="roadmap-details-header">
					<h3>"Node Details"</h3>
					<button class="ghost" on:click=move |_| state.update(|s| s.clear_selection())>
						"×"
					</button>
				</div>
				<div class="roadmap-details-title">
					<span class="roadmap-icon" style=format!("background: {};", style.accent)></span>
					<div>
						<h4>{node.data.label.clone()}</h4>
						<span class="roadmap-badge">{node.kind.as_str()}</span>
					</div>
				</div>
				<h5>"Description"</h5>
				<p>{node.data.description.clone()}</p>
				<h5>"Type Information"</h5>
				<p>{style.description}</p>
				<button class="primary" on:click=generate_course>
					"Generate Course"
				</button>
				<div class="roadmap-details-footer">{format!("Node ID: #{}", node.id)}</div>
			</aside>
		})
	};

	view! {
		<div class=move || {
			if fullscreen.get() { "roadmap-viewer fullscreen" } else { "roadmap-viewer" }
		}>
			<header class="roadmap-header">
				<div class="roadmap-summary">
					<h1>{move || summary.with(|s| s.title.clone())}</h1>
					<span class="roadmap-badge">
						{move || summary.with(|s| format!("{} steps", s.nodes))}
					</span>
					<span>{move || summary.with(|s| format!("{} Nodes", s.nodes))}</span>
					<span>{move || summary.with(|s| format!("{} connections", s.edges))}</span>
					<span class="difficulty">{move || summary.with(|s| s.difficulty)}</span>
				</div>
				<div class="roadmap-controls">
					<span class="hint">"Drag to pan • Scroll to zoom • Click nodes for details"</span>
					<button title="Zoom Out" on:click=move |_| send(InputEvent::ZoomOut)>"−"</button>
					<span class="zoom">{move || format!("{}%", transform.get().zoom_percent())}</span>
					<button title="Zoom In" on:click=move |_| send(InputEvent::ZoomIn)>"+"</button>
					<button title="Reset View" on:click=move |_| state.update(|s| s.reset_view())>
						"⟲"
					</button>
					<button
						title=move || if fullscreen.get() { "Exit Fullscreen" } else { "Fullscreen" }
						on:click=move |_| state.update(|s| s.fullscreen = !s.fullscreen)
					>
						"⛶"
					</button>
				</div>
			</header>

			{move || load_error.get().map(|e| view! { <div class="roadmap-error">{e}</div> })}

			<div class="roadmap-body">
				<div
					class="roadmap-canvas"
					on:mousedown=on_mousedown
					on:mousemove=on_mousemove
					on:mouseup=move |_: MouseEvent| send(InputEvent::PointerUp)
					on:mouseleave=move |_: MouseEvent| send(InputEvent::PointerLeave)
					on:touchstart=on_touchstart
					on:touchmove=on_touchmove
					on:touchend=move |_: TouchEvent| send(InputEvent::TouchEnd)
					on:wheel=on_wheel
					style="touch-action: none;"
				>
					<div
						class=move || if panning.get() { "roadmap-world grabbing" } else { "roadmap-world" }
						style=move || {
							format!(
								"transform: {}; transform-origin: center center; transition: {};",
								transform.get().to_css(),
								if panning.get() { "none" } else { "transform 0.2s ease-out" },
							)
						}
					>
						<div
							class="roadmap-grid"
							style=move || {
								let t = transform.get();
								format!(
									"background-size: {0}px {0}px; background-position: {1}px {2}px;",
									40.0 * t.k,
									t.x,
									t.y,
								)
							}
						></div>
						<svg
							class="roadmap-edges"
							style=move || {
								let e = scene.with(|s| s.extent);
								format!(
									"position: absolute; pointer-events: none; left: 50%; top: 50%; width: {}px; height: {}px; transform: translate(-50%, -50%);",
									e.width,
									e.height,
								)
							}
							viewBox=move || {
								let e = scene.with(|s| s.extent);
								format!("0 0 {} {}", e.width, e.height)
							}
							preserveAspectRatio="xMidYMid meet"
						>
							<defs>
								<marker
									id="arrowhead"
									markerWidth="10"
									markerHeight="7"
									refX="9"
									refY="3.5"
									orient="auto"
									markerUnits="strokeWidth"
								>
									<polygon points="0 0, 10 3.5, 0 7" fill="#64748b"></polygon>
								</marker>
							</defs>
							{move || {
								scene
									.with(|s| s.lines.clone())
									.into_iter()
									.map(|line| {
										view! {
											<line
												x1=line.from.x.to_string()
												y1=line.from.y.to_string()
												x2=line.to.x.to_string()
												y2=line.to.y.to_string()
												stroke=if line.highlighted { "#3b82f6" } else { "#64748b" }
												stroke-width=if line.highlighted { "3" } else { "2" }
												marker-end="url(#arrowhead)"
											></line>
										}
									})
									.collect_view()
							}}
						</svg>
						{move || {
							scene
								.with(|s| s.cards.clone())
								.into_iter()
								.map(|card| node_card(card, card_width, state))
								.collect_view()
						}}
					</div>
				</div>
				{detail_panel}
			</div>

			<footer class="roadmap-legend">
				{move || {
					summary
						.with(|s| s.legend.clone())
						.into_iter()
						.map(|(kind, count)| {
							let style = node_style(kind);
							view! {
								<div class="roadmap-legend-item" title=style.description>
									<span
										class="roadmap-icon"
										style=format!("background: {};", style.accent)
									></span>
									<span class="kind">{kind.as_str()}</span>
									<span class="count">{format!("({})", count)}</span>
								</div>
							}
						})
						.collect_view()
				}}
			</footer>
		</div>
	}
}

fn node_card(card: NodeCard, width: f64, state: RwSignal<RoadmapViewState>) -> impl IntoView {
	let style = node_style(card.kind);
	let id = card.id;
	let (class, background, border, text) = match card.emphasis {
		Emphasis::Selected => ("roadmap-card selected", style.background, style.border, style.text),
		Emphasis::Connected => ("roadmap-card connected", style.background, style.border, style.text),
		Emphasis::Normal => ("roadmap-card", "#ffffff", "#e5e7eb", "#111827"),
	};

	view! {
		<div
			class="roadmap-card-anchor"
			style=format!(
				"position: absolute; left: calc(50% + {}px); top: calc(50% + {}px); transform: translate(-50%, -50%);",
				card.offset.x,
				card.offset.y,
			)
		>
			<div
				class=class
				style=format!(
					"width: {}px; background: {}; border-color: {};",
					width,
					background,
					border,
				)
				on:click=move |_| {
					state.update(|s| {
						let _ = s.select_node(id);
					});
				}
			>
				<div class="roadmap-card-header">
					<span class="roadmap-icon" style=format!("background: {};", style.accent)></span>
					<div>
						<h3 style=format!("color: {};", text)>{card.label}</h3>
						<p>{card.description}</p>
					</div>
				</div>
				<div class="roadmap-card-footer">
					<span class="roadmap-badge">{card.kind.as_str()}</span>
					<span class="roadmap-card-id">{format!("#{}", card.id)}</span>
				</div>
			</div>
		</div>
	}
}
