//! Visual themes for the particle field.
//!
//! A theme is a field-wide mode fixed for the whole session: it selects the
//! motion rule every particle follows, the particle color, and whether
//! proximity connections are drawn. The choice is uniform-random at startup
//! (reproducible under an injected RNG) unless overridden by configuration.

use rand::Rng;
use serde::Deserialize;

/// RGB color with a CSS `rgba()` formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Construct from channel values.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Format as a CSS `rgba()` string with the given opacity.
	pub fn to_css(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
	}
}

const WHITE: Color = Color::rgb(255, 255, 255);
const NET_BLUE: Color = Color::rgb(56, 189, 248);
const FIREFLY_GREEN: Color = Color::rgb(200, 255, 50);
const SNOW_BLUE: Color = Color::rgb(200, 230, 255);

/// One of the four mutually exclusive visual/motion modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
	/// Flat drifting dots with pointer repulsion and proximity links.
	Default,
	/// Rotating 3D net of connected nodes, tilted by the pointer.
	Net,
	/// Floating glow-pulsing fireflies with pointer parallax.
	Fireflies,
	/// Falling swirling snow with pointer-driven wind.
	Snow,
}

impl ThemeKind {
	/// All variants, in selection order.
	pub const ALL: [ThemeKind; 4] = [
		ThemeKind::Default,
		ThemeKind::Net,
		ThemeKind::Fireflies,
		ThemeKind::Snow,
	];

	/// Pick a theme uniformly at random.
	pub fn choose<R: Rng>(rng: &mut R) -> Self {
		Self::ALL[rng.gen_range(0..Self::ALL.len())]
	}

	/// The fixed particle color for this theme.
	pub fn particle_color(self) -> Color {
		match self {
			ThemeKind::Default => WHITE,
			ThemeKind::Net => NET_BLUE,
			ThemeKind::Fireflies => FIREFLY_GREEN,
			ThemeKind::Snow => SNOW_BLUE,
		}
	}

	/// Connection-line color, for the themes that draw proximity links.
	pub fn connection_color(self) -> Option<Color> {
		match self {
			ThemeKind::Default => Some(WHITE),
			ThemeKind::Net => Some(NET_BLUE),
			ThemeKind::Fireflies | ThemeKind::Snow => None,
		}
	}

	/// Whether particles live in the 3D box and need depth sorting.
	pub fn uses_depth(self) -> bool {
		!matches!(self, ThemeKind::Default)
	}

	/// Stable lowercase name, matching the configuration spelling.
	pub fn name(self) -> &'static str {
		match self {
			ThemeKind::Default => "default",
			ThemeKind::Net => "net",
			ThemeKind::Fireflies => "fireflies",
			ThemeKind::Snow => "snow",
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn choose_is_reproducible_under_a_seed() {
		let a = ThemeKind::choose(&mut SmallRng::seed_from_u64(7));
		let b = ThemeKind::choose(&mut SmallRng::seed_from_u64(7));
		assert_eq!(a, b);
	}

	#[test]
	fn choose_reaches_every_variant() {
		let mut rng = SmallRng::seed_from_u64(1);
		let mut seen = [false; 4];
		for _ in 0..1000 {
			let theme = ThemeKind::choose(&mut rng);
			seen[ThemeKind::ALL.iter().position(|t| *t == theme).unwrap()] = true;
		}
		assert_eq!(seen, [true; 4]);
	}

	#[test]
	fn deserializes_lowercase_names() {
		for theme in ThemeKind::ALL {
			let json = format!("\"{}\"", theme.name());
			let parsed: ThemeKind = serde_json::from_str(&json).unwrap();
			assert_eq!(parsed, theme);
		}
		assert!(serde_json::from_str::<ThemeKind>("\"plasma\"").is_err());
	}

	#[test]
	fn css_formatting() {
		assert_eq!(NET_BLUE.to_css(0.25), "rgba(56, 189, 248, 0.25)");
		assert_eq!(WHITE.to_css(1.0), "rgba(255, 255, 255, 1)");
	}

	#[test]
	fn only_linked_themes_have_connection_colors() {
		assert_eq!(ThemeKind::Default.connection_color(), Some(WHITE));
		assert_eq!(ThemeKind::Net.connection_color(), Some(NET_BLUE));
		assert_eq!(ThemeKind::Fireflies.connection_color(), None);
		assert_eq!(ThemeKind::Snow.connection_color(), None);
	}
}
