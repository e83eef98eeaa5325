//! Leptos component wrapping the particle field canvas.
//!
//! The component creates an HTML canvas element and wires up the pointer
//! handler the themes react to. An animation loop runs via
//! `requestAnimationFrame`, driving one field frame per invocation; a
//! `running` flag cleared on component teardown stops re-scheduling without
//! interrupting an in-flight frame.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::env::Environment;
use super::field::ParticleField;
use super::surface::CanvasSurface;
use super::types::FieldConfig;

/// Bundles the simulation with its environment and drawing surface.
struct FieldContext {
	env: Environment,
	field: ParticleField,
	surface: CanvasSurface,
}

/// Renders an animated ambient particle field on a canvas element.
///
/// Pass startup options via the reactive `config` signal. The component
/// sizes itself to its parent container by default; set `fullscreen = true`
/// to fill the viewport and resize automatically with the window. Explicit
/// `width`/`height` override automatic sizing.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(into)] config: Signal<FieldConfig>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	// `on_cleanup` takes a `Send + Sync` closure, so this flag cannot be an
	// `Rc<Cell<bool>>` like the rest of the component state.
	let running: Arc<AtomicBool> = Arc::new(AtomicBool::new(true));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());
	let running_init = running.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let cfg = config.get();
		let seed = cfg.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
		let mut rng = SmallRng::seed_from_u64(seed);
		let theme = cfg.resolve_theme(&mut rng);
		log::info!(
			"particle-field: {} particles, theme '{}'",
			cfg.particles,
			theme.name()
		);

		let env = Environment::new(w, h);
		let field = ParticleField::new(theme, cfg.particles, &env, rng);
		*context_init.borrow_mut() = Some(FieldContext {
			env,
			field,
			surface: CanvasSurface::new(ctx),
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.env.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		let running_anim = running_init.clone();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !running_anim.load(Ordering::Relaxed) {
				return;
			}
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.field.frame(&mut c.env, &mut c.surface);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let running_cleanup = running.clone();
	on_cleanup(move || {
		running_cleanup.store(false, Ordering::Relaxed);
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		// Event handlers only ever touch the environment; particles pick
		// the new pointer up on the next frame.
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.env.pointer_moved(x, y);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			on:mousemove=on_mousemove
			style="display: block;"
		/>
	}
}
