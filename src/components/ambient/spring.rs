//! Damped spring followers.
//!
//! Used where a value should chase a moving target smoothly instead of
//! jumping to it: the custom cursor dot and the mouse parallax of the
//! floating shapes.

/// Largest integration step, in seconds. Longer frames are sub-stepped so
/// stiff springs stay stable after a tab regains focus.
const MAX_STEP: f64 = 1.0 / 120.0;
/// Distance and speed below which a spring is considered settled.
const REST_EPSILON: f64 = 0.01;

/// Spring stiffness and damping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
	/// Stiffness pulling the value toward its target.
	pub tension: f64,
	/// Damping against velocity.
	pub friction: f64,
	/// Inertia; presets use 1.
	pub mass: f64,
}

impl SpringConfig {
	/// Unit-mass spring.
	pub const fn new(tension: f64, friction: f64) -> Self {
		Self {
			tension,
			friction,
			mass: 1.0,
		}
	}

	/// Snappy follower for the cursor dot.
	pub const CURSOR: SpringConfig = SpringConfig::new(300.0, 30.0);
	/// Heavier damping for background parallax.
	pub const PARALLAX: SpringConfig = SpringConfig::new(300.0, 50.0);
}

impl Default for SpringConfig {
	fn default() -> Self {
		Self::CURSOR
	}
}

/// A single scalar chasing a target.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
	/// Stiffness and damping.
	pub config: SpringConfig,
	/// Current value.
	pub value: f64,
	/// Units per second.
	pub velocity: f64,
	/// Value being chased.
	pub target: f64,
}

impl Spring {
	/// Spring resting at `value`.
	pub fn new(config: SpringConfig, value: f64) -> Self {
		Self {
			config,
			value,
			velocity: 0.0,
			target: value,
		}
	}

	/// Starts chasing `target` from the current value and velocity.
	pub fn set_target(&mut self, target: f64) {
		self.target = target;
	}

	/// Jumps straight to `value` and stops.
	pub fn snap(&mut self, value: f64) {
		self.value = value;
		self.target = value;
		self.velocity = 0.0;
	}

	/// Whether the value has settled on its target.
	pub fn is_at_rest(&self) -> bool {
		(self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
	}

	/// Integrates `dt` seconds with semi-implicit Euler.
	pub fn step(&mut self, dt: f64) {
		if dt <= 0.0 || !dt.is_finite() {
			return;
		}
		if self.is_at_rest() {
			self.value = self.target;
			self.velocity = 0.0;
			return;
		}

		let steps = (dt / MAX_STEP).ceil().max(1.0) as usize;
		let h = dt / steps as f64;
		let SpringConfig {
			tension,
			friction,
			mass,
		} = self.config;

		for _ in 0..steps {
			let force = -tension * (self.value - self.target) - friction * self.velocity;
			self.velocity += force / mass * h;
			self.value += self.velocity * h;
		}
	}
}

/// Two springs moving a point.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring2 {
	/// Horizontal axis.
	pub x: Spring,
	/// Vertical axis.
	pub y: Spring,
}

impl Spring2 {
	/// Point resting at `(x, y)`.
	pub fn new(config: SpringConfig, x: f64, y: f64) -> Self {
		Self {
			x: Spring::new(config, x),
			y: Spring::new(config, y),
		}
	}

	/// Starts chasing `(x, y)`.
	pub fn set_target(&mut self, x: f64, y: f64) {
		self.x.set_target(x);
		self.y.set_target(y);
	}

	/// Jumps to `(x, y)` and stops.
	pub fn snap(&mut self, x: f64, y: f64) {
		self.x.snap(x);
		self.y.snap(y);
	}

	/// Integrates both axes by `dt` seconds.
	pub fn step(&mut self, dt: f64) {
		self.x.step(dt);
		self.y.step(dt);
	}

	/// Current point.
	pub fn position(&self) -> (f64, f64) {
		(self.x.value, self.y.value)
	}
}
