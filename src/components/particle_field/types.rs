//! Runtime configuration for the particle field.

use rand::Rng;
use serde::Deserialize;

use super::theme::ThemeKind;

/// Size of the particle pool when the host supplies no override.
pub const DEFAULT_PARTICLE_COUNT: usize = 150;

/// Startup configuration, optionally supplied by the host page as JSON.
///
/// Every field has a sensible default, so an empty object (or no config
/// element at all) yields the stock effect: 150 particles, random theme,
/// time-derived seed.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles in the pool, fixed for the session.
	pub particles: usize,
	/// Force a specific theme instead of the uniform-random pick.
	pub theme: Option<ThemeKind>,
	/// Seed for the simulation RNG. Fixing it makes the whole session
	/// deterministic (given an identical event sequence).
	pub seed: Option<u64>,
}

impl FieldConfig {
	/// Theme for the session: the configured override when set, otherwise a
	/// uniform-random pick from `rng`.
	pub fn resolve_theme<R: Rng>(&self, rng: &mut R) -> ThemeKind {
		self.theme.unwrap_or_else(|| ThemeKind::choose(rng))
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particles: DEFAULT_PARTICLE_COUNT,
			theme: None,
			seed: None,
		}
	}
}
