//! A single simulated particle and its per-theme motion rules.
//!
//! Each particle carries both 2D and 3D kinematic state; the active theme
//! decides which half is read. Unused state is simply never touched, not
//! kept meaningful. All rules are functions of (particle, environment) with
//! the snow reset additionally drawing from the field RNG.

use rand::Rng;
use rand::rngs::SmallRng;

use super::env::Environment;
use super::projection;

/// Pointer repulsion radius for the default theme, in pixels.
const REPULSION_RADIUS: f64 = 150.0;
/// Pointer tilt factor applied to the net rotation angles.
const NET_TILT: f64 = 0.01;
/// Per-axis oscillation amplitude for fireflies.
const DRIFT_AMPLITUDE: f64 = 0.5;
/// Snow fall rate per frame, in world units.
const FALL_RATE: f64 = 2.0;
/// Horizontal/depth swirl amplitude for snow.
const SWIRL_AMPLITUDE: f64 = 2.0;

/// One simulated point of the field.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// 2D position in surface pixels (default theme only).
	pub x: f64,
	/// 2D position in surface pixels (default theme only).
	pub y: f64,
	/// 2D velocity.
	pub vx: f64,
	/// 2D velocity.
	pub vy: f64,
	/// 3D position in camera space, spread proportional to the surface.
	pub x3d: f64,
	/// 3D position in camera space.
	pub y3d: f64,
	/// 3D position in camera space; depth is proportional to the width.
	pub z3d: f64,
	/// 3D velocity.
	pub vx3d: f64,
	/// 3D velocity.
	pub vy3d: f64,
	/// 3D velocity.
	pub vz3d: f64,
	/// Base radius in pixels, before projection scaling.
	pub size: f64,
	/// Base opacity (default theme only; 3D themes derive it from depth).
	pub alpha: f64,
}

impl Particle {
	/// Spawn a particle with randomized state spread across the surface.
	pub fn spawn<R: Rng>(rng: &mut R, env: &Environment) -> Self {
		let mut unit = || rng.gen_range(0.0..1.0);
		Self {
			x: unit() * env.width,
			y: unit() * env.height,
			vx: (unit() - 0.5) * 0.5,
			vy: (unit() - 0.5) * 0.5,
			x3d: (unit() - 0.5) * env.width,
			y3d: (unit() - 0.5) * env.height,
			z3d: (unit() - 0.5) * env.width,
			vx3d: (unit() - 0.5) * 2.0,
			vy3d: (unit() - 0.5) * 2.0,
			vz3d: (unit() - 0.5) * 2.0,
			size: unit() * 2.0,
			alpha: unit() * 0.5 + 0.1,
		}
	}

	/// Default theme: drift, wrap at the surface edges, flee the pointer.
	///
	/// Wrap-around is re-applied after the repulsion push so the post-update
	/// position always lies within `[0, width] x [0, height]`.
	pub fn update_default(&mut self, env: &Environment, _rng: &mut SmallRng) {
		self.x += self.vx;
		self.y += self.vy;
		self.wrap_2d(env);

		let dx = env.pointer.0 - self.x;
		let dy = env.pointer.1 - self.y;
		let distance = (dx * dx + dy * dy).sqrt();
		if distance > 0.0 && distance < REPULSION_RADIUS {
			let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
			self.x -= dx / distance * force * 2.0;
			self.y -= dy / distance * force * 2.0;
			self.wrap_2d(env);
		}
	}

	/// Net theme: straight-line motion bouncing inside the surface-sized
	/// box, with the whole cloud tilted gently toward the pointer.
	pub fn update_net(&mut self, env: &Environment, _rng: &mut SmallRng) {
		self.x3d += self.vx3d;
		self.y3d += self.vy3d;
		self.z3d += self.vz3d;

		let (limit_x, limit_y, limit_z) = half_extents(env);
		if self.x3d.abs() > limit_x {
			self.vx3d = -self.vx3d;
		}
		if self.y3d.abs() > limit_y {
			self.vy3d = -self.vy3d;
		}
		if self.z3d.abs() > limit_z {
			self.vz3d = -self.vz3d;
		}

		let rot_x = env.normalized_pointer.1 * NET_TILT;
		let rot_y = env.normalized_pointer.0 * NET_TILT;
		let (x, y, z) = projection::rotate(self.x3d, self.y3d, self.z3d, rot_x, rot_y);
		self.x3d = x;
		self.y3d = y;
		self.z3d = z;
	}

	/// Fireflies theme: oscillatory drift keyed to the frame clock and the
	/// particle's own position, pointer parallax, and teleport-wrap at the
	/// box faces.
	pub fn update_fireflies(&mut self, env: &Environment, _rng: &mut SmallRng) {
		let t = env.frame as f64;
		self.x3d += (t * 0.01 + self.y3d).sin() * DRIFT_AMPLITUDE;
		self.y3d += (t * 0.01 + self.x3d).cos() * DRIFT_AMPLITUDE;
		self.z3d += (t * 0.02 + self.z3d).sin() * DRIFT_AMPLITUDE;

		self.x3d += env.normalized_pointer.0 * 3.0;
		self.y3d += env.normalized_pointer.1 * 3.0;

		let (limit_x, limit_y, limit_z) = half_extents(env);
		self.x3d = wrap_axis(self.x3d, limit_x);
		self.y3d = wrap_axis(self.y3d, limit_y);
		self.z3d = wrap_axis(self.z3d, limit_z);
	}

	/// Snow theme: constant fall, sine swirl in x/z, reset to the top with
	/// fresh horizontal placement once past the bottom face, pointer wind.
	pub fn update_snow(&mut self, env: &Environment, rng: &mut SmallRng) {
		let t = env.frame as f64;
		self.y3d += FALL_RATE;
		self.x3d += (t * 0.05 + self.z3d * 0.01).sin() * SWIRL_AMPLITUDE;
		self.z3d += (t * 0.05 + self.x3d * 0.01).cos() * SWIRL_AMPLITUDE;

		if self.y3d > env.height / 2.0 {
			self.y3d = -env.height / 2.0;
			self.x3d = (rng.gen_range(0.0..1.0) - 0.5) * env.width;
			self.z3d = (rng.gen_range(0.0..1.0) - 0.5) * env.width;
		}

		self.x3d += env.normalized_pointer.0 * 5.0;
		self.z3d += env.normalized_pointer.1 * 5.0;
	}

	fn wrap_2d(&mut self, env: &Environment) {
		if self.x < 0.0 {
			self.x = env.width;
		} else if self.x > env.width {
			self.x = 0.0;
		}
		if self.y < 0.0 {
			self.y = env.height;
		} else if self.y > env.height {
			self.y = 0.0;
		}
	}
}

/// Box half-extents for the 3D themes, derived from the current surface
/// size so boundary behavior adapts immediately to resizes. Depth shares
/// the width extent.
fn half_extents(env: &Environment) -> (f64, f64, f64) {
	(env.width / 2.0, env.height / 2.0, env.width / 2.0)
}

/// Teleport-wrap a coordinate at `±limit`: exiting one face reenters at
/// the opposite one on the same frame.
fn wrap_axis(value: f64, limit: f64) -> f64 {
	if value > limit {
		-limit
	} else if value < -limit {
		limit
	} else {
		value
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;

	fn env() -> Environment {
		Environment::new(800.0, 600.0)
	}

	fn rng() -> SmallRng {
		SmallRng::seed_from_u64(42)
	}

	fn still_particle() -> Particle {
		Particle {
			x: 400.0,
			y: 300.0,
			vx: 0.0,
			vy: 0.0,
			x3d: 0.0,
			y3d: 0.0,
			z3d: 0.0,
			vx3d: 0.0,
			vy3d: 0.0,
			vz3d: 0.0,
			size: 1.0,
			alpha: 0.3,
		}
	}

	#[test]
	fn spawn_respects_initial_ranges() {
		let env = env();
		let mut rng = rng();
		for _ in 0..200 {
			let p = Particle::spawn(&mut rng, &env);
			assert!((0.0..env.width).contains(&p.x));
			assert!((0.0..env.height).contains(&p.y));
			assert!(p.vx.abs() < 0.25 && p.vy.abs() < 0.25);
			assert!(p.x3d.abs() <= env.width / 2.0);
			assert!(p.y3d.abs() <= env.height / 2.0);
			assert!(p.z3d.abs() <= env.width / 2.0);
			assert!((0.0..2.0).contains(&p.size));
			assert!((0.1..0.6).contains(&p.alpha));
		}
	}

	#[test]
	fn default_wraps_across_both_edges() {
		let env = env();
		let mut rng = rng();

		let mut p = still_particle();
		p.x = 799.9;
		p.vx = 0.5;
		p.update_default(&env, &mut rng);
		assert_eq!(p.x, 0.0);

		p.x = 0.1;
		p.vx = -0.5;
		p.update_default(&env, &mut rng);
		assert_eq!(p.x, 800.0);

		p = still_particle();
		p.y = 599.9;
		p.vy = 0.5;
		p.update_default(&env, &mut rng);
		assert_eq!(p.y, 0.0);
	}

	#[test]
	fn default_never_leaves_bounds() {
		let mut env = env();
		let mut rng = rng();
		// Pointer parked right at a corner so repulsion keeps shoving
		// particles toward the edges.
		env.pointer_moved(2.0, 2.0);

		let mut p = still_particle();
		p.x = 5.0;
		p.y = 5.0;
		p.vx = -0.2;
		p.vy = -0.2;
		for _ in 0..500 {
			p.update_default(&env, &mut rng);
			assert!((0.0..=env.width).contains(&p.x), "x = {}", p.x);
			assert!((0.0..=env.height).contains(&p.y), "y = {}", p.y);
		}
	}

	#[test]
	fn default_repulsion_pushes_away_from_pointer() {
		let mut env = env();
		let mut rng = rng();
		env.pointer_moved(410.0, 300.0);

		let mut p = still_particle();
		p.update_default(&env, &mut rng);
		assert!(p.x < 400.0, "particle should flee left of the pointer");
		assert_eq!(p.y, 300.0);
	}

	#[test]
	fn default_ignores_distant_pointer() {
		let mut env = env();
		let mut rng = rng();
		env.pointer_moved(400.0 + REPULSION_RADIUS + 1.0, 300.0);

		let mut p = still_particle();
		p.update_default(&env, &mut rng);
		assert_eq!((p.x, p.y), (400.0, 300.0));
	}

	#[test]
	fn net_reverses_velocity_within_one_frame_of_a_bound() {
		let env = env();
		let mut rng = rng();

		let mut p = still_particle();
		p.x3d = 399.5;
		p.vx3d = 1.0;
		p.update_net(&env, &mut rng);
		// 400.5 exceeds the 400 half-extent: velocity must flip now.
		assert_eq!(p.vx3d, -1.0);

		p = still_particle();
		p.y3d = -299.5;
		p.vy3d = -1.0;
		p.update_net(&env, &mut rng);
		assert_eq!(p.vy3d, 1.0);
	}

	#[test]
	fn net_tilts_with_the_pointer() {
		let mut env = env();
		let mut rng = rng();
		env.pointer_moved(800.0, 300.0); // normalized (1, 0)

		let mut p = still_particle();
		p.x3d = 100.0;
		p.z3d = 50.0;
		let expected = projection::rotate(100.0, 0.0, 50.0, 0.0, NET_TILT);
		p.update_net(&env, &mut rng);
		assert_eq!((p.x3d, p.y3d, p.z3d), expected);
	}

	#[test]
	fn fireflies_teleport_wrap_is_same_frame() {
		let env = env();
		let mut rng = rng();

		let mut p = still_particle();
		p.x3d = 401.0; // past the +x face before drift even applies
		p.update_fireflies(&env, &mut rng);
		assert_eq!(p.x3d, -400.0);

		p = still_particle();
		p.z3d = -401.0;
		// Drift moves at most 0.5 per axis, so the particle is still past
		// the -z face and must reappear at the opposite one.
		p.update_fireflies(&env, &mut rng);
		assert_eq!(p.z3d, 400.0);
	}

	#[test]
	fn snow_falls_at_constant_rate() {
		let env = env();
		let mut rng = rng();

		let mut p = still_particle();
		p.y3d = 0.0;
		p.update_snow(&env, &mut rng);
		assert_eq!(p.y3d, 2.0);
	}

	#[test]
	fn snow_resets_to_top_with_fresh_horizontal_placement() {
		let env = env();
		let mut rng = rng();

		let mut p = still_particle();
		p.y3d = 299.0; // next fall step crosses the bottom face
		p.update_snow(&env, &mut rng);
		assert_eq!(p.y3d, -300.0);
		assert!(p.x3d.abs() <= 400.0);
		assert!(p.z3d.abs() <= 400.0);
	}

	#[test]
	fn shrunken_bounds_apply_on_the_next_update() {
		let mut env = env();
		let mut rng = rng();

		// Fireflies: a particle stranded outside the new box wraps back in.
		let mut p = still_particle();
		p.x3d = 350.0;
		env.resize(400.0, 600.0); // half-extent drops to 200
		p.update_fireflies(&env, &mut rng);
		assert!(p.x3d.abs() <= 200.0);

		// Net: the same situation reverses the velocity instead.
		let mut p = still_particle();
		p.x3d = 350.0;
		p.vx3d = 0.5;
		p.update_net(&env, &mut rng);
		assert_eq!(p.vx3d, -0.5);

		// Default: 2D positions past the new right edge wrap to the left.
		let mut p = still_particle();
		p.x = 500.0;
		p.update_default(&env, &mut rng);
		assert_eq!(p.x, 0.0);

		// Snow: the bottom face moved up with the height, so a flake above
		// the old face but below the new one resets to the new top.
		env.resize(400.0, 200.0); // half-height drops to 100
		let mut p = still_particle();
		p.y3d = 150.0;
		p.update_snow(&env, &mut rng);
		assert_eq!(p.y3d, -100.0);
		assert!(p.x3d.abs() <= 200.0);
		assert!(p.z3d.abs() <= 200.0);
	}
}
