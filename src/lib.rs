//! portfolio-ambient: procedural background animation for a portfolio site.
//!
//! This crate provides a WASM canvas layer that sits behind page content and
//! reacts to the pointer, clicks and scrolling with particles, a drifting
//! constellation, splash effects and scroll-driven decorations.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::ambient::{AmbientConfig, AmbientLayer, ConfigError};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-ambient: logging initialized");
}

/// Parses and validates a JSON configuration. Missing fields take their
/// defaults.
pub fn parse_config(json: &str) -> Result<AmbientConfig, ConfigError> {
	let config: AmbientConfig =
		serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
	config.validate()?;
	Ok(config)
}

/// Load configuration from a script element with id="ambient-config".
fn load_config() -> Option<AmbientConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("ambient-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_config(&json_text) {
		Ok(config) => {
			info!(
				"portfolio-ambient: loaded config, particle capacity {}",
				config.particles.capacity
			);
			Some(config)
		}
		Err(e) => {
			warn!("portfolio-ambient: ignoring ambient config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads configuration from the DOM and mounts the ambient layer.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<AmbientLayer config=config_signal />
	}
}
