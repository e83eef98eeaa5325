//! Shared per-frame environment: surface size, pointer position, frame clock.
//!
//! One `Environment` value is owned by the frame driver and passed by
//! reference into every update and draw call. Event handlers (pointer move,
//! resize) mutate only this record, never particle state, so their effects
//! apply atomically from the next frame's perspective.

/// Pointer position before the first movement event, far off-surface so no
/// accidental interaction happens at startup.
const OFFSCREEN_POINTER: (f64, f64) = (-1000.0, -1000.0);

/// Surface dimensions, camera parameters, pointer state, and the frame clock
/// read by every particle each frame.
#[derive(Clone, Debug)]
pub struct Environment {
	/// Drawing-surface width in pixels.
	pub width: f64,
	/// Drawing-surface height in pixels.
	pub height: f64,
	/// Camera field of view, derived from `min(width, height)` and
	/// recomputed whenever the surface is resized.
	pub field_of_view: f64,
	/// Last observed absolute pointer position in surface coordinates.
	pub pointer: (f64, f64),
	/// Pointer position mapped to `[-1, 1]` per axis relative to the
	/// surface center. Used as a direction/intensity signal by 3D themes.
	pub normalized_pointer: (f64, f64),
	/// Monotonic frame counter, incremented once per rendered frame. Drives
	/// all periodic motion; never resets during a session.
	pub frame: u64,
}

impl Environment {
	/// Create an environment for a surface of the given size.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			field_of_view: width.min(height),
			pointer: OFFSCREEN_POINTER,
			normalized_pointer: (0.0, 0.0),
			frame: 0,
		}
	}

	/// Record a surface resize. The field of view and all boundary checks
	/// derived from the dimensions take effect on the next frame.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.field_of_view = width.min(height);
	}

	/// Record a pointer movement in surface coordinates.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer = (x, y);
		self.normalized_pointer = (
			(x - self.width / 2.0) / (self.width / 2.0),
			(y - self.height / 2.0) / (self.height / 2.0),
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn field_of_view_is_min_dimension() {
		assert_eq!(Environment::new(800.0, 600.0).field_of_view, 600.0);
		assert_eq!(Environment::new(300.0, 900.0).field_of_view, 300.0);
	}

	#[test]
	fn pointer_starts_off_surface() {
		let env = Environment::new(800.0, 600.0);
		assert_eq!(env.pointer, (-1000.0, -1000.0));
		assert_eq!(env.normalized_pointer, (0.0, 0.0));
	}

	#[test]
	fn pointer_normalizes_relative_to_center() {
		let mut env = Environment::new(800.0, 600.0);

		env.pointer_moved(400.0, 300.0);
		assert_eq!(env.normalized_pointer, (0.0, 0.0));

		env.pointer_moved(800.0, 0.0);
		assert_eq!(env.normalized_pointer, (1.0, -1.0));

		env.pointer_moved(0.0, 600.0);
		assert_eq!(env.normalized_pointer, (-1.0, 1.0));
	}

	#[test]
	fn resize_recomputes_field_of_view() {
		let mut env = Environment::new(800.0, 600.0);
		env.resize(400.0, 1000.0);
		assert_eq!(env.width, 400.0);
		assert_eq!(env.height, 1000.0);
		assert_eq!(env.field_of_view, 400.0);
	}
}
