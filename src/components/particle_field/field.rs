//! Per-frame orchestration: update, depth sort, draw, proximity links.
//!
//! One [`ParticleField::frame`] call runs exactly one simulation-and-render
//! step. Drawing interleaves with updating the way the effect was designed:
//! particle `i` is updated and drawn, then linked against every particle
//! from `i` forward, so each unordered pair is considered exactly once and
//! links mix already-updated endpoints with not-yet-updated ones.

use std::cmp::Ordering;

use rand::rngs::SmallRng;

use super::env::Environment;
use super::particle::Particle;
use super::projection;
use super::surface::Surface;
use super::theme::ThemeKind;

/// 2D proximity-link cutoff for the default theme, in pixels.
const LINK_RADIUS_2D: f64 = 100.0;
/// 3D link cutoff for the net theme, in world units.
const LINK_RADIUS_3D: f64 = 150.0;
/// Stroke width for all connection lines.
const LINK_WIDTH: f64 = 0.5;

/// The fixed-size particle pool plus the session theme and RNG.
///
/// The theme never changes within a session; relaxing that later only means
/// re-running the per-frame dispatch on a theme-changed event.
pub struct ParticleField {
	/// Session-wide visual/motion mode.
	pub theme: ThemeKind,
	/// The particle pool. Count is constant for the session.
	pub particles: Vec<Particle>,
	rng: SmallRng,
}

impl ParticleField {
	/// Build the pool with randomized initial state drawn from `rng`, which
	/// the field keeps for per-frame randomness (snow resets).
	pub fn new(theme: ThemeKind, count: usize, env: &Environment, mut rng: SmallRng) -> Self {
		let particles = (0..count).map(|_| Particle::spawn(&mut rng, env)).collect();
		Self {
			theme,
			particles,
			rng,
		}
	}

	/// Run one simulation-and-render step.
	pub fn frame<S: Surface>(&mut self, env: &mut Environment, surface: &mut S) {
		surface.clear(env.width, env.height);
		env.frame += 1;

		if self.theme.uses_depth() {
			// Painter's algorithm: farthest first so nearer particles draw
			// on top. Stable, so equal depths keep their order.
			self.particles
				.sort_by(|a, b| b.z3d.partial_cmp(&a.z3d).unwrap_or(Ordering::Equal));
		}

		// The theme is fixed for the session, so the update rule is picked
		// once per frame rather than tag-checked per particle.
		let update: fn(&mut Particle, &Environment, &mut SmallRng) = match self.theme {
			ThemeKind::Default => Particle::update_default,
			ThemeKind::Net => Particle::update_net,
			ThemeKind::Fireflies => Particle::update_fireflies,
			ThemeKind::Snow => Particle::update_snow,
		};

		for i in 0..self.particles.len() {
			update(&mut self.particles[i], env, &mut self.rng);
			self.draw_particle(i, env, surface);
			match self.theme {
				ThemeKind::Default => self.link_2d(i, surface),
				ThemeKind::Net => self.link_3d(i, env, surface),
				ThemeKind::Fireflies | ThemeKind::Snow => {}
			}
		}
	}

	fn draw_particle<S: Surface>(&self, i: usize, env: &Environment, surface: &mut S) {
		let p = &self.particles[i];
		let color = self.theme.particle_color();

		if self.theme == ThemeKind::Default {
			surface.fill_circle(p.x, p.y, p.size, color, p.alpha);
			return;
		}

		let proj = projection::project(p.x3d, p.y3d, p.z3d, env.field_of_view, env.width, env.height);
		if proj.scale <= 0.0 {
			// At or behind the camera plane: not visible this frame.
			return;
		}

		let mut alpha = (proj.scale * 0.8).clamp(0.0, 1.0);
		if self.theme == ThemeKind::Fireflies {
			// Pulse phase comes from the particle's own position, so the
			// blinking desynchronizes across the field.
			alpha *= 0.5 + 0.5 * (env.frame as f64 * 0.05 + p.x3d).sin();
		}

		surface.fill_circle(proj.x, proj.y, (p.size * proj.scale).max(0.0), color, alpha);
	}

	fn link_2d<S: Surface>(&self, i: usize, surface: &mut S) {
		let Some(color) = self.theme.connection_color() else {
			return;
		};
		let a = &self.particles[i];
		for b in &self.particles[i..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance < LINK_RADIUS_2D {
				let alpha = 0.1 * (1.0 - distance / LINK_RADIUS_2D);
				surface.stroke_line(a.x, a.y, b.x, b.y, LINK_WIDTH, color, alpha);
			}
		}
	}

	fn link_3d<S: Surface>(&self, i: usize, env: &Environment, surface: &mut S) {
		let Some(color) = self.theme.connection_color() else {
			return;
		};
		let a = &self.particles[i];
		for b in &self.particles[i..] {
			let (dx, dy, dz) = (a.x3d - b.x3d, a.y3d - b.y3d, a.z3d - b.z3d);
			let distance = (dx * dx + dy * dy + dz * dz).sqrt();
			if distance < LINK_RADIUS_3D {
				let pa = projection::project(a.x3d, a.y3d, a.z3d, env.field_of_view, env.width, env.height);
				let pb = projection::project(b.x3d, b.y3d, b.z3d, env.field_of_view, env.width, env.height);
				// Both endpoints must be in front of the camera.
				if pa.scale > 0.0 && pb.scale > 0.0 {
					let alpha = (1.0 - distance / LINK_RADIUS_3D) * 0.2;
					surface.stroke_line(pa.x, pa.y, pb.x, pb.y, LINK_WIDTH, color, alpha);
				}
			}
		}
	}
}
