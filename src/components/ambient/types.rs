//! Configuration input for the ambient layer.
//!
//! Every section deserializes with defaults, so a page only has to spell out
//! the values it wants to change.

use serde::Deserialize;
use thiserror::Error;

/// Reasons a configuration is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
	/// The JSON could not be parsed.
	#[error("invalid config JSON: {0}")]
	Parse(String),
	/// A probability outside `[0, 1]`.
	#[error("{field} must be within [0, 1], got {value}")]
	Probability {
		/// Dotted path of the offending setting.
		field: &'static str,
		/// Value that was supplied.
		value: f64,
	},
	/// A buffer or list capacity of zero.
	#[error("{0} must be at least 1")]
	ZeroCapacity(&'static str),
	/// `min_nodes` greater than `max_nodes`.
	#[error("node bounds inverted: min {min} > max {max}")]
	NodeBounds {
		/// Configured `min_nodes`.
		min: usize,
		/// Configured `max_nodes`.
		max: usize,
	},
	/// A duration, interval or divisor that must be strictly positive.
	#[error("{field} must be positive, got {value}")]
	NonPositive {
		/// Dotted path of the offending setting.
		field: &'static str,
		/// Value that was supplied.
		value: f64,
	},
}

/// Pointer particle engine settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
	/// Maximum number of live particles. Oldest are evicted first.
	pub capacity: usize,
	/// Chance that a single pointer-move event spawns a particle.
	pub spawn_probability: f64,
	/// Velocity multiplier applied every tick.
	pub damping: f64,
	/// Fixed tick cadence in milliseconds.
	pub tick_interval_ms: u32,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			capacity: 50,
			spawn_probability: 0.3,
			damping: 0.99,
			tick_interval_ms: 16,
		}
	}
}

/// Constellation network sizing.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
	/// Lower bound on the node count, whatever the viewport area.
	pub min_nodes: usize,
	/// Upper bound on the node count.
	pub max_nodes: usize,
	/// Viewport area (px²) that accounts for one node.
	pub area_per_node: f64,
	/// Viewports narrower than this use the mobile distance and degree.
	pub mobile_breakpoint: f64,
	/// Longest drawable edge on narrow viewports, in pixels.
	pub mobile_max_distance: f64,
	/// Nearest candidates each node considers on narrow viewports.
	pub mobile_max_degree: usize,
	/// Longest drawable edge on wide viewports, in pixels.
	pub desktop_max_distance: f64,
	/// Nearest candidates each node considers on wide viewports.
	pub desktop_max_degree: usize,
	/// Chance that an in-range candidate edge is actually drawn.
	pub connect_probability: f64,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			min_nodes: 15,
			max_nodes: 30,
			area_per_node: 50_000.0,
			mobile_breakpoint: 768.0,
			mobile_max_distance: 150.0,
			mobile_max_degree: 3,
			desktop_max_distance: 250.0,
			desktop_max_degree: 4,
			connect_probability: 0.8,
		}
	}
}

/// Click splash and pointer trail timing.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SplashConfig {
	/// Lifetime of a click splash in milliseconds.
	pub duration_ms: f64,
	/// Number of recent pointer positions kept in the trail.
	pub trail_capacity: usize,
	/// Fade time of a single trail point in milliseconds.
	pub trail_fade_ms: f64,
}

impl Default for SplashConfig {
	fn default() -> Self {
		Self {
			duration_ms: 1200.0,
			trail_capacity: 5,
			trail_fade_ms: 600.0,
		}
	}
}

/// Pointer-reactive particle field settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of floating particles scattered at mount.
	pub count: usize,
	/// Pointer distance in pixels at which a particle stops reacting.
	pub influence_radius: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 50,
			influence_radius: 200.0,
		}
	}
}

/// Toggles for each effect group.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EffectToggles {
	/// Pointer particles.
	pub particles: bool,
	/// Drifting node network.
	pub constellation: bool,
	/// Click splashes and the pointer trail.
	pub splash: bool,
	/// Spring-following cursor dot.
	pub cursor: bool,
	/// Scroll-driven mesh, grid, blobs, shapes, helix, stars and drift.
	pub scroll_shapes: bool,
	/// Floating particle field that brightens near the pointer.
	pub field: bool,
}

impl Default for EffectToggles {
	fn default() -> Self {
		Self {
			particles: true,
			constellation: true,
			splash: true,
			cursor: true,
			scroll_shapes: true,
			field: true,
		}
	}
}

/// Complete ambient layer configuration.
///
/// Usually read from a `<script id="ambient-config" type="application/json">`
/// element; see [`crate::parse_config`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AmbientConfig {
	/// Pointer particle engine.
	pub particles: ParticleConfig,
	/// Constellation network.
	pub network: NetworkConfig,
	/// Splashes and pointer trail.
	pub splash: SplashConfig,
	/// Pointer-reactive particle field.
	pub field: FieldConfig,
	/// Which effect groups are drawn.
	pub effects: EffectToggles,
	/// Fixed RNG seed. When absent a fresh seed is drawn at mount time.
	pub seed: Option<u64>,
}

impl AmbientConfig {
	/// Checks the values the simulations rely on.
	pub fn validate(&self) -> Result<(), ConfigError> {
		probability("particles.spawn_probability", self.particles.spawn_probability)?;
		probability("particles.damping", self.particles.damping)?;
		probability("network.connect_probability", self.network.connect_probability)?;

		if self.particles.capacity == 0 {
			return Err(ConfigError::ZeroCapacity("particles.capacity"));
		}
		if self.splash.trail_capacity == 0 {
			return Err(ConfigError::ZeroCapacity("splash.trail_capacity"));
		}
		if self.network.min_nodes > self.network.max_nodes {
			return Err(ConfigError::NodeBounds {
				min: self.network.min_nodes,
				max: self.network.max_nodes,
			});
		}

		positive(
			"particles.tick_interval_ms",
			self.particles.tick_interval_ms as f64,
		)?;
		positive("network.area_per_node", self.network.area_per_node)?;
		positive("splash.duration_ms", self.splash.duration_ms)?;
		positive("splash.trail_fade_ms", self.splash.trail_fade_ms)?;
		positive("field.influence_radius", self.field.influence_radius)?;
		Ok(())
	}
}

fn probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
	if (0.0..=1.0).contains(&value) {
		Ok(())
	} else {
		Err(ConfigError::Probability { field, value })
	}
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
	if value > 0.0 {
		Ok(())
	} else {
		Err(ConfigError::NonPositive { field, value })
	}
}
