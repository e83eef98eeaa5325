//! Perspective projection and rotation math.
//!
//! A deliberately minimal camera: a perspective divide plus recentering,
//! not a full projection matrix. The camera sits on the z axis looking at
//! the origin of a surface-sized box.

/// Distance from the camera to the z = 0 plane, in world units.
pub const VIEW_DISTANCE: f64 = 200.0;

/// A camera-space point mapped to screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	/// Horizontal screen coordinate in pixels.
	pub x: f64,
	/// Vertical screen coordinate in pixels.
	pub y: f64,
	/// Depth-derived scale factor. A value `<= 0` means the point is at or
	/// behind the camera plane and must not be drawn.
	pub scale: f64,
}

/// Project a camera-space point onto the drawing surface.
///
/// `field_of_view` controls perspective strength and is derived from the
/// surface size (see [`Environment`](super::env::Environment)).
pub fn project(
	x3d: f64,
	y3d: f64,
	z3d: f64,
	field_of_view: f64,
	width: f64,
	height: f64,
) -> Projected {
	let scale = field_of_view / (field_of_view + z3d + VIEW_DISTANCE);
	Projected {
		x: x3d * scale + width / 2.0,
		y: y3d * scale + height / 2.0,
		scale,
	}
}

/// Rotate a point around the Y axis (yaw), then the X axis (pitch).
///
/// The yaw-then-pitch order is fixed; swapping it produces a different
/// composite rotation. There is no roll.
pub fn rotate(x: f64, y: f64, z: f64, rot_x: f64, rot_y: f64) -> (f64, f64, f64) {
	let (cos_x, sin_x) = (rot_x.cos(), rot_x.sin());
	let (cos_y, sin_y) = (rot_y.cos(), rot_y.sin());

	let x1 = x * cos_y - z * sin_y;
	let z1 = z * cos_y + x * sin_y;

	let y1 = y * cos_x - z1 * sin_x;
	let z2 = z1 * cos_x + y * sin_x;

	(x1, y1, z2)
}
