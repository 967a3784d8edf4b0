use super::error::ViewportError;

/// Logical-to-world coordinate multiplier.
pub const SPACING_MULTIPLIER: f64 = 2.0;
/// Node card footprint in pixels (`w-56`).
pub const NODE_WIDTH: f64 = 224.0;
pub const NODE_HEIGHT: f64 = 128.0;

pub const MIN_SCALE: f64 = 0.2;
pub const MAX_SCALE: f64 = 2.0;
pub const DEFAULT_SCALE: f64 = 0.8;
/// Scale change per wheel tick.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;
/// Scale change per zoom button press.
pub const BUTTON_ZOOM_STEP: f64 = 0.2;

/// Padding added on every side of the graph content.
pub const CANVAS_PADDING: f64 = 300.0;
pub const MIN_CANVAS_WIDTH: f64 = 1200.0;
pub const MIN_CANVAS_HEIGHT: f64 = 800.0;

/// Tunables shared by the projection, viewport and renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
	/// Multiplies logical node positions into world pixels.
	pub spacing_multiplier: f64,
	/// Card width in world pixels.
	pub node_width: f64,
	/// Card height in world pixels.
	pub node_height: f64,
	/// Lowest zoom factor.
	pub min_scale: f64,
	/// Highest zoom factor.
	pub max_scale: f64,
	/// Zoom factor after load and reset.
	pub default_scale: f64,
	/// Scale change per wheel tick.
	pub wheel_step: f64,
	/// Scale change per zoom button press.
	pub button_step: f64,
	/// Empty margin around the content on every side.
	pub padding: f64,
	/// Canvas width floor.
	pub min_canvas_width: f64,
	/// Canvas height floor.
	pub min_canvas_height: f64,
}

impl Default for ViewportConfig {
	fn default() -> Self {
		Self {
			spacing_multiplier: SPACING_MULTIPLIER,
			node_width: NODE_WIDTH,
			node_height: NODE_HEIGHT,
			min_scale: MIN_SCALE,
			max_scale: MAX_SCALE,
			default_scale: DEFAULT_SCALE,
			wheel_step: WHEEL_ZOOM_STEP,
			button_step: BUTTON_ZOOM_STEP,
			padding: CANVAS_PADDING,
			min_canvas_width: MIN_CANVAS_WIDTH,
			min_canvas_height: MIN_CANVAS_HEIGHT,
		}
	}
}

impl ViewportConfig {
	/// Half of [`node_width`](Self::node_width).
	pub fn node_half_width(&self) -> f64 {
		self.node_width / 2.0
	}

	/// Half of [`node_height`](Self::node_height).
	pub fn node_half_height(&self) -> f64 {
		self.node_height / 2.0
	}

	/// Clamps `scale` into `[min_scale, max_scale]`.
	pub fn clamp_scale(&self, scale: f64) -> f64 {
		scale.clamp(self.min_scale, self.max_scale)
	}

	/// Checks the preconditions every consumer of the config relies on.
	pub fn validate(&self) -> Result<(), ViewportError> {
		let positive = |v: f64| v.is_finite() && v > 0.0;

		if !positive(self.spacing_multiplier) {
			return Err(ViewportError::InvalidConfig(
				"spacing multiplier must be a positive finite number",
			));
		}
		if !positive(self.node_width) || !positive(self.node_height) {
			return Err(ViewportError::InvalidConfig(
				"node footprint must be positive",
			));
		}
		if !positive(self.min_canvas_width) || !positive(self.min_canvas_height) {
			return Err(ViewportError::InvalidConfig(
				"minimum canvas size must be positive",
			));
		}
		if !self.padding.is_finite() || self.padding < 0.0 {
			return Err(ViewportError::InvalidConfig("padding must be non-negative"));
		}
		if !positive(self.min_scale)
			|| !self.max_scale.is_finite()
			|| !(self.min_scale <= self.default_scale && self.default_scale <= self.max_scale)
		{
			return Err(ViewportError::InvalidConfig(
				"scale limits must satisfy 0 < min <= default <= max",
			));
		}
		if !positive(self.wheel_step) || !positive(self.button_step) {
			return Err(ViewportError::InvalidConfig("zoom steps must be positive"));
		}
		Ok(())
	}
}
