//! particle-field: animated decorative particle backdrop for web pages.
//!
//! This crate provides a WASM-based canvas component that renders a fixed
//! pool of particles under one of four visual themes (drifting dots, 3D
//! net, fireflies, snow), with perspective projection, depth sorting, and
//! proximity connections.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	Color, Environment, FieldConfig, Particle, ParticleField, ParticleFieldCanvas, Surface,
	ThemeKind,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load field configuration from a script element with id="field-config".
/// Expected format: JSON with optional { particles, theme, seed }.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!(
				"particle-field: loaded config ({} particles)",
				config.particles
			);
			Some(config)
		}
		Err(e) => {
			warn!("particle-field: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads optional configuration from the DOM and renders the field
/// fullscreen behind the page content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Particle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas config=config_signal fullscreen=true />
	}
}
