//! Ambient layer state and input handling.
//!
//! [`AmbientState`] owns every simulation: particle buffer, constellation
//! network, splashes, trail, pointer field, blobs and springs. Input handlers and step functions
//! mutate it; the scene builder only ever reads a settled state between
//! steps.

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::blob::MorphingBlob;
use super::field::ParticleField;
use super::motion;
use super::network::{Network, NetworkParams, build_network};
use super::particles::{Particle, ParticleEngine};
use super::scroll::{ScrollMapper, ScrollPose};
use super::splash::{PointerTrail, SplashAnimation, SplashId, SplashSpawner};
use super::spring::{Spring2, SpringConfig};
use super::theme::Theme;
use super::types::{AmbientConfig, ConfigError};

/// Fraction of the pointer's offset from the viewport center applied to
/// the floating shapes.
const PARALLAX_FACTOR: f64 = 0.02;

/// Core state of the ambient layer.
///
/// Created once when the component mounts, then mutated by event handlers,
/// the particle interval and the animation-frame loop.
pub struct AmbientState {
	/// Validated configuration the state was built from.
	pub config: AmbientConfig,
	/// Viewport width in pixels.
	pub width: f64,
	/// Viewport height in pixels.
	pub height: f64,
	rng: SmallRng,
	particles: ParticleEngine,
	network: Network,
	network_params: NetworkParams,
	splashes: SplashSpawner,
	splash_animation: SplashAnimation,
	trail: PointerTrail,
	field: ParticleField,
	blobs: [MorphingBlob; 2],
	cursor: Spring2,
	parallax: Spring2,
	pointer: Option<(f64, f64)>,
	pressed: bool,
	scroll: ScrollMapper,
	scroll_progress: f64,
	now_ms: f64,
	last_frame_ms: Option<f64>,
}

impl AmbientState {
	/// Builds the state for a `width × height` viewport.
	///
	/// Fails if `config` does not pass [`AmbientConfig::validate`].
	pub fn new(
		config: AmbientConfig,
		width: f64,
		height: f64,
		theme: &Theme,
		seed: u64,
	) -> Result<Self, ConfigError> {
		config.validate()?;
		let mut rng = SmallRng::seed_from_u64(seed);
		let network_params = NetworkParams::for_viewport(width, height, &config.network);
		let network = if config.effects.constellation {
			build_network(width, height, &network_params, &mut rng)
		} else {
			Network::default()
		};
		debug!(
			"ambient: built network with {} nodes, {} connections",
			network.nodes.len(),
			network.connections.len()
		);
		let field = if config.effects.field {
			ParticleField::new(&config.field, width, height, &mut rng)
		} else {
			ParticleField::default()
		};

		Ok(Self {
			particles: ParticleEngine::new(&config.particles, theme.palette.clone()),
			splashes: SplashSpawner::new(config.splash.duration_ms),
			splash_animation: SplashAnimation::new(
				config.splash.duration_ms,
				theme.splash.ring_hue,
				theme.splash.burst_hue,
				theme.splash.secondary_hue,
			),
			trail: PointerTrail::new(config.splash.trail_capacity, config.splash.trail_fade_ms),
			field,
			blobs: [MorphingBlob::top_left(), MorphingBlob::bottom_right()],
			cursor: Spring2::new(SpringConfig::CURSOR, width / 2.0, height / 2.0),
			parallax: Spring2::new(SpringConfig::PARALLAX, 0.0, 0.0),
			pointer: None,
			pressed: false,
			scroll: ScrollMapper::standard(),
			scroll_progress: 0.0,
			now_ms: 0.0,
			last_frame_ms: None,
			rng,
			network,
			network_params,
			config,
			width,
			height,
		})
	}

	/// Pointer moved to `(x, y)` (viewport pixels).
	pub fn on_pointer_move(&mut self, x: f64, y: f64, now_ms: f64) {
		if self.pointer.is_none() {
			self.cursor.snap(x, y);
		}
		self.pointer = Some((x, y));
		self.cursor.set_target(x, y);
		self.parallax.set_target(
			(x - self.width / 2.0) * PARALLAX_FACTOR,
			(y - self.height / 2.0) * PARALLAX_FACTOR,
		);

		if self.config.effects.particles {
			self.particles.on_pointer_move(x, y, &mut self.rng);
		}
		if self.config.effects.splash {
			self.trail.on_mouse_move(x, y, now_ms);
		}
	}

	/// Pointer left the window.
	pub fn on_pointer_leave(&mut self) {
		self.pointer = None;
		self.pressed = false;
		self.parallax.set_target(0.0, 0.0);
	}

	/// Primary button went down or up.
	pub fn set_pressed(&mut self, pressed: bool) {
		self.pressed = pressed;
	}

	/// Spawns a splash at `(x, y)`. The caller owns the removal timer.
	pub fn on_click(&mut self, x: f64, y: f64, now_ms: f64) -> Option<SplashId> {
		if !self.config.effects.splash {
			return None;
		}
		Some(self.splashes.on_click(x, y, now_ms))
	}

	/// Removes a splash whose duration has elapsed. Returns `false` if it was
	/// already removed.
	pub fn remove_splash(&mut self, id: SplashId) -> bool {
		self.splashes.remove(id).is_some()
	}

	/// Stores page scroll progress, clamped to `[0, 1]`.
	pub fn set_scroll_progress(&mut self, progress: f64) {
		self.scroll_progress = if progress.is_finite() {
			progress.clamp(0.0, 1.0)
		} else {
			0.0
		};
	}

	/// Applies a new viewport size. Rebuilds nodes and connections together
	/// when the derived network parameters change; returns whether it did.
	pub fn resize(&mut self, width: f64, height: f64) -> bool {
		self.width = width;
		self.height = height;

		let params = NetworkParams::for_viewport(width, height, &self.config.network);
		if params == self.network_params || !self.config.effects.constellation {
			return false;
		}

		self.network = build_network(width, height, &params, &mut self.rng);
		self.network_params = params;
		if self.now_ms > 0.0 {
			motion::advance(&mut self.network.nodes, self.now_ms);
		}
		debug!(
			"ambient: rebuilt network for {}x{}: {} nodes, {} connections",
			width,
			height,
			self.network.nodes.len(),
			self.network.connections.len()
		);
		true
	}

	/// Fixed-cadence particle step.
	pub fn tick_particles(&mut self) {
		self.particles.tick();
	}

	/// Per-frame step: node drift, springs, trail and splash expiry.
	///
	/// Splashes are normally removed by their own timer; expiring them here
	/// as well keeps a dropped timer from leaking one.
	pub fn frame(&mut self, now_ms: f64) {
		let dt = self
			.last_frame_ms
			.map(|last| ((now_ms - last) / 1000.0).clamp(0.0, 0.1))
			.unwrap_or(0.0);
		self.last_frame_ms = Some(now_ms);
		self.now_ms = now_ms;

		motion::advance(&mut self.network.nodes, now_ms);
		self.cursor.step(dt);
		self.parallax.step(dt);
		self.field.step(dt);
		self.trail.prune(now_ms);
		self.splashes.expire(now_ms);
	}

	/// Live pointer particles, oldest first.
	pub fn particles(&self) -> impl ExactSizeIterator<Item = &Particle> {
		self.particles.particles()
	}

	/// Constellation nodes and connections.
	pub fn network(&self) -> &Network {
		&self.network
	}

	/// Parameters the current network was built with.
	pub fn network_params(&self) -> &NetworkParams {
		&self.network_params
	}

	/// Click splashes not yet removed.
	pub fn splashes(&self) -> &SplashSpawner {
		&self.splashes
	}

	/// Shared timeline every splash is drawn with.
	pub fn splash_animation(&self) -> &SplashAnimation {
		&self.splash_animation
	}

	/// Recent pointer positions.
	pub fn trail(&self) -> &PointerTrail {
		&self.trail
	}

	/// Pointer-reactive dots.
	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	/// Top-left and bottom-right morphing blobs.
	pub fn blobs(&self) -> &[MorphingBlob; 2] {
		&self.blobs
	}

	/// Raw pointer position, `None` while the pointer is outside the window.
	pub fn pointer(&self) -> Option<(f64, f64)> {
		self.pointer
	}

	/// Spring-smoothed cursor position, `None` while the pointer is outside.
	pub fn cursor(&self) -> Option<(f64, f64)> {
		self.pointer.map(|_| self.cursor.position())
	}

	/// Whether the primary button is held.
	pub fn is_pressed(&self) -> bool {
		self.pressed
	}

	/// Spring-smoothed parallax offset of the floating shapes.
	pub fn parallax(&self) -> (f64, f64) {
		self.parallax.position()
	}

	/// Page scroll progress in `[0, 1]`.
	pub fn scroll_progress(&self) -> f64 {
		self.scroll_progress
	}

	/// Every scroll channel sampled at the current progress.
	pub fn scroll_pose(&self) -> ScrollPose {
		self.scroll.pose(self.scroll_progress)
	}

	/// Timestamp of the latest frame.
	pub fn now_ms(&self) -> f64 {
		self.now_ms
	}
}
