//! Leptos component wrapping the ambient canvas.
//!
//! The component creates a full-viewport canvas that ignores pointer events
//! and listens on the window instead, so the page underneath stays
//! interactive. Input handlers feed [`AmbientState`]; a 16 ms interval ticks
//! the particles and a `requestAnimationFrame` loop advances the rest and
//! repaints. All of it is released when the component is torn down.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};

use super::input::{FrameLoop, IntervalTimer, Subscriptions};
use super::render;
use super::scene;
use super::scroll::scroll_progress;
use super::state::AmbientState;
use super::theme::Theme;
use super::types::AmbientConfig;

/// Bundles simulation state with its visual theme.
struct AmbientContext {
	state: AmbientState,
	theme: Theme,
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
	};
	(dim(window.inner_width()), dim(window.inner_height()))
}

fn page_scroll_progress(window: &Window) -> f64 {
	let scroll_y = window.scroll_y().unwrap_or(0.0);
	let document_height = window
		.document()
		.and_then(|d| d.document_element())
		.map(|e| e.scroll_height() as f64)
		.unwrap_or(0.0);
	let (_, viewport_height) = viewport_size(window);
	scroll_progress(scroll_y, document_height, viewport_height)
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

fn mouse_position(ev: &Event) -> Option<(f64, f64, f64)> {
	let ev = ev.dyn_ref::<MouseEvent>()?;
	Some((ev.client_x() as f64, ev.client_y() as f64, ev.time_stamp()))
}

/// Renders the ambient animation layer behind the page content.
///
/// Pass configuration via the reactive `config` signal; changing it tears the
/// layer down and rebuilds it. A config that fails validation is logged and
/// replaced by the defaults.
#[component]
pub fn AmbientLayer(#[prop(into)] config: Signal<AmbientConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("ambient: 2d canvas context unavailable");
			return;
		};

		let config = config.get();
		let seed = config.seed.unwrap_or_else(random_seed);
		let theme = Theme::default();
		info!("ambient: mounting {}x{} with theme {}, seed {}", w, h, theme.name, seed);

		let built = AmbientState::new(config, w, h, &theme, seed).or_else(|e| {
			warn!("ambient: invalid config ({}), using defaults", e);
			AmbientState::new(AmbientConfig::default(), w, h, &theme, seed)
		});
		let mut state = match built {
			Ok(state) => state,
			Err(e) => {
				warn!("ambient: default config rejected: {}", e);
				return;
			}
		};
		let tick_ms = state.config.particles.tick_interval_ms;
		let splash_ms = state.config.splash.duration_ms;
		state.set_scroll_progress(page_scroll_progress(&window));
		let context = Rc::new(RefCell::new(AmbientContext { state, theme }));
		let mut subs = Subscriptions::default();

		let c = context.clone();
		subs.listen("mousemove", move |ev| {
			if let Some((x, y, now)) = mouse_position(&ev) {
				c.borrow_mut().state.on_pointer_move(x, y, now);
			}
		});

		let c = context.clone();
		subs.listen("mouseout", move |ev| {
			// Leaving the document, not just crossing between elements
			let left_window = ev
				.dyn_ref::<MouseEvent>()
				.is_some_and(|m| m.related_target().is_none());
			if left_window {
				c.borrow_mut().state.on_pointer_leave();
			}
		});

		let c = context.clone();
		subs.listen("mousedown", move |_| c.borrow_mut().state.set_pressed(true));
		let c = context.clone();
		subs.listen("mouseup", move |_| c.borrow_mut().state.set_pressed(false));

		let (c, timeouts) = (context.clone(), subs.timeouts.clone());
		subs.listen("click", move |ev| {
			let Some((x, y, now)) = mouse_position(&ev) else {
				return;
			};
			let Some(id) = c.borrow_mut().state.on_click(x, y, now) else {
				return;
			};
			let c = c.clone();
			timeouts.schedule(id, splash_ms, move || {
				c.borrow_mut().state.remove_splash(id);
			});
		});

		let c = context.clone();
		subs.listen("scroll", move |_| {
			if let Some(window) = web_sys::window() {
				c.borrow_mut()
					.state
					.set_scroll_progress(page_scroll_progress(&window));
			}
		});

		let (c, canvas_resize) = (context.clone(), canvas.clone());
		subs.listen("resize", move |_| {
			let Some(window) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&window);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			let mut c = c.borrow_mut();
			c.state.resize(nw, nh);
			c.state.set_scroll_progress(page_scroll_progress(&window));
		});

		let c = context.clone();
		subs.interval = IntervalTimer::start(tick_ms, move || {
			c.borrow_mut().state.tick_particles();
		});

		let c = context.clone();
		subs.frame_loop = FrameLoop::start(move |timestamp| {
			let mut c = c.borrow_mut();
			c.state.frame(timestamp);
			let primitives = scene::build(&c.state, &c.theme);
			render::paint(&ctx, &primitives, c.state.width, c.state.height);
		});

		let subs = StoredValue::new_local(subs);
		on_cleanup(move || {
			info!("ambient: tearing down");
			subs.dispose();
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="ambient-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; display: block; pointer-events: none;"
		/>
	}
}
