//! Pan and zoom state, driven by raw input events.

use super::config::ViewportConfig;
use super::error::ViewportError;
use super::types::Point;

/// `translate(x, y) scale(k)` about the canvas center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	/// Horizontal pan in screen pixels.
	pub x: f64,
	/// Vertical pan in screen pixels.
	pub y: f64,
	/// Zoom scale.
	pub k: f64,
}

impl ViewTransform {
	/// Pan offset as a point.
	pub fn pan(&self) -> Point {
		Point::new(self.x, self.y)
	}

	/// Maps a center-relative world point to a center-relative screen point.
	pub fn world_to_screen(&self, world: Point) -> Point {
		Point::new(world.x * self.k + self.x, world.y * self.k + self.y)
	}

	/// Inverse of [`world_to_screen`](Self::world_to_screen).
	pub fn screen_to_world(&self, screen: Point) -> Point {
		Point::new((screen.x - self.x) / self.k, (screen.y - self.y) / self.k)
	}

	/// Scale as a rounded percentage, for the zoom readout.
	pub fn zoom_percent(&self) -> u32 {
		(self.k * 100.0).round() as u32
	}

	/// CSS `transform` value.
	pub fn to_css(&self) -> String {
		format!("translate({}px, {}px) scale({})", self.x, self.y, self.k)
	}
}

/// Pointer gesture in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
	/// No pan in progress.
	#[default]
	Idle,
	/// `anchor` is the pointer position minus the pan offset at gesture start.
	Panning {
		/// Pointer position minus pan offset.
		anchor: Point,
	},
}

/// Raw input, already reduced to client coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
	/// Mouse button pressed; `button` uses DOM numbering (0 = primary).
	PointerDown {
		/// Client position.
		pos: Point,
		/// DOM button index.
		button: i16,
	},
	/// Pointer moved.
	PointerMove {
		/// Client position.
		pos: Point,
	},
	/// Mouse button released.
	PointerUp,
	/// Pointer left the canvas.
	PointerLeave,
	/// Touch started with the given active touches.
	TouchStart {
		/// Client positions of every active touch.
		touches: Vec<Point>,
	},
	/// Touches moved.
	TouchMove {
		/// Client positions of every active touch.
		touches: Vec<Point>,
	},
	/// Touch ended.
	TouchEnd,
	/// Wheel scrolled.
	Wheel {
		/// Vertical scroll delta.
		delta_y: f64,
	},
	/// Zoom-in button.
	ZoomIn,
	/// Zoom-out button.
	ZoomOut,
}

const PRIMARY_BUTTON: i16 = 0;

/// Owns the view transform and the pan gesture.
#[derive(Clone, Debug)]
pub struct ViewportController {
	transform: ViewTransform,
	gesture: Gesture,
	config: ViewportConfig,
}

impl ViewportController {
	/// Idle controller at zero pan and the default scale.
	pub fn new(config: ViewportConfig) -> Self {
		Self {
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: config.default_scale,
			},
			gesture: Gesture::Idle,
			config,
		}
	}

	/// Current transform.
	pub fn transform(&self) -> ViewTransform {
		self.transform
	}

	/// Current gesture.
	pub fn gesture(&self) -> Gesture {
		self.gesture
	}

	/// Whether a pan gesture is active.
	pub fn is_panning(&self) -> bool {
		matches!(self.gesture, Gesture::Panning { .. })
	}

	/// Applies one event. On `Err` nothing has changed.
	pub fn apply(&mut self, event: InputEvent) -> Result<(), ViewportError> {
		match event {
			InputEvent::PointerDown { pos, button } => {
				if button == PRIMARY_BUTTON {
					self.begin_pan(pos)?;
				}
			}
			InputEvent::PointerMove { pos } => self.pan_to(pos)?,
			InputEvent::PointerUp | InputEvent::PointerLeave | InputEvent::TouchEnd => {
				self.end_pan()
			}
			// Only single-finger panning is supported; pinches are dropped.
			InputEvent::TouchStart { touches } => {
				if let [touch] = touches.as_slice() {
					self.begin_pan(*touch)?;
				}
			}
			InputEvent::TouchMove { touches } => {
				if let [touch] = touches.as_slice() {
					self.pan_to(*touch)?;
				}
			}
			InputEvent::Wheel { delta_y } => self.wheel(delta_y)?,
			InputEvent::ZoomIn => self.zoom_by(self.config.button_step),
			InputEvent::ZoomOut => self.zoom_by(-self.config.button_step),
		}
		Ok(())
	}

	/// Starts (or re-anchors) a pan at `pos`.
	pub fn begin_pan(&mut self, pos: Point) -> Result<(), ViewportError> {
		check_finite(pos)?;
		let anchor = pos - self.transform.pan();
		check_finite(anchor)?;
		self.gesture = Gesture::Panning { anchor };
		Ok(())
	}

	/// Pan offset follows the absolute pointer position, so dropped move
	/// events never leave the canvas out of sync with the pointer.
	pub fn pan_to(&mut self, pos: Point) -> Result<(), ViewportError> {
		check_finite(pos)?;
		if let Gesture::Panning { anchor } = self.gesture {
			let pan = pos - anchor;
			check_finite(pan)?;
			self.transform.x = pan.x;
			self.transform.y = pan.y;
		}
		Ok(())
	}

	/// Ends any pan gesture.
	pub fn end_pan(&mut self) {
		self.gesture = Gesture::Idle;
	}

	/// Scrolling down (positive delta) zooms out by one step, up zooms in.
	///
	/// A zero delta leaves the scale alone instead of counting as a zoom-in
	/// tick, so trackpads emitting horizontal-only scrolls don't zoom.
	pub fn wheel(&mut self, delta_y: f64) -> Result<(), ViewportError> {
		if !delta_y.is_finite() {
			return Err(ViewportError::NonFiniteWheel(delta_y));
		}
		if delta_y > 0.0 {
			self.zoom_by(-self.config.wheel_step);
		} else if delta_y < 0.0 {
			self.zoom_by(self.config.wheel_step);
		}
		Ok(())
	}

	/// Center-anchored: the pan offset is left as is.
	pub fn zoom_by(&mut self, step: f64) {
		self.transform.k = self.config.clamp_scale(self.transform.k + step);
	}

	/// Back to zero pan, default scale, no gesture.
	pub fn reset(&mut self) {
		*self = Self::new(self.config);
	}
}

fn check_finite(pos: Point) -> Result<(), ViewportError> {
	if pos.is_finite() {
		Ok(())
	} else {
		Err(ViewportError::NonFiniteInput { x: pos.x, y: pos.y })
	}
}
