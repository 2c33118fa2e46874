//! Procedural ambient animation layer.
//!
//! Draws a decorative, input-reactive background on a single fixed canvas:
//! - Pointer particles that spawn on movement and fade out
//! - A drifting constellation of nodes joined to their nearest neighbours
//! - Click splashes and a short pointer trail
//! - Scroll-driven gradient mesh, grid, morphing blobs, floating shapes,
//!   helix, star field and drift trail
//! - A field of dots that brighten near the pointer
//! - A spring-following cursor dot
//!
//! The simulation modules are plain data and math so they can be driven and
//! tested without a browser; only the component, input and render modules
//! touch the DOM.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_ambient::{AmbientConfig, AmbientLayer};
//!
//! let config = AmbientConfig::default();
//! view! { <AmbientLayer config=config /> }
//! ```

pub mod blob;
mod component;
pub mod field;
pub mod input;
pub mod keyframes;
pub mod motion;
pub mod network;
pub mod particles;
mod render;
pub mod scene;
pub mod scroll;
pub mod splash;
pub mod spring;
pub mod state;
pub mod theme;
mod types;

pub use component::AmbientLayer;
pub use state::AmbientState;
pub use theme::Theme;
pub use types::{
	AmbientConfig, ConfigError, EffectToggles, FieldConfig, NetworkConfig, ParticleConfig,
	SplashConfig,
};
