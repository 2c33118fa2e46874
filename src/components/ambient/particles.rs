//! Pointer-driven particle effects.
//!
//! Pointer movement occasionally drops a particle that drifts, slows down
//! and fades out. The engine owns the only copy of the live set; renderers
//! read it between ticks through [`ParticleEngine::particles`].

use std::collections::VecDeque;

use rand::Rng;

use super::network::probability;
use super::theme::{Color, ParticlePalette};
use super::types::ParticleConfig;

/// A single short-lived particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Position in viewport pixels.
	pub x: f64,
	/// Position in viewport pixels.
	pub y: f64,
	/// Velocity in pixels per tick.
	pub vx: f64,
	/// Velocity in pixels per tick.
	pub vy: f64,
	/// Diameter in pixels.
	pub size: f64,
	/// Palette color drawn at `life` opacity.
	pub color: Color,
	/// Remaining life, 1.0 at spawn and removed once it reaches 0.0.
	pub life: f64,
	/// Number of ticks the particle lives for.
	pub max_life: f64,
}

impl Particle {
	/// Creates a particle at `(x, y)` with randomized motion, size, color and lifetime.
	pub fn spawn(x: f64, y: f64, palette: &ParticlePalette, rng: &mut impl Rng) -> Self {
		let color = if palette.is_empty() {
			Color::rgb(255, 255, 255)
		} else {
			palette.get(rng.gen_range(0..palette.len()))
		};
		Self {
			x,
			y,
			vx: rng.gen_range(-1.0..1.0),
			vy: rng.gen_range(-1.0..1.0),
			size: rng.gen_range(1.0..5.0),
			color,
			life: 1.0,
			max_life: rng.gen_range(30.0..90.0),
		}
	}

	/// Advances one tick. Returns `false` once the particle has expired.
	fn step(&mut self, damping: f64) -> bool {
		self.x += self.vx;
		self.y += self.vy;
		self.vx *= damping;
		self.vy *= damping;
		self.life -= 1.0 / self.max_life;
		self.life > 0.0
	}
}

/// Owns the live particle buffer.
pub struct ParticleEngine {
	particles: VecDeque<Particle>,
	palette: ParticlePalette,
	capacity: usize,
	spawn_probability: f64,
	damping: f64,
}

impl ParticleEngine {
	/// Empty engine. Out-of-range probabilities are clamped and NaN reads as 0.
	pub fn new(config: &ParticleConfig, palette: ParticlePalette) -> Self {
		let capacity = config.capacity.max(1);
		Self {
			particles: VecDeque::with_capacity(capacity),
			palette,
			capacity,
			spawn_probability: probability(config.spawn_probability),
			damping: if config.damping.is_finite() {
				config.damping
			} else {
				0.0
			},
		}
	}

	/// Called for every pointer-move event. Only a fraction of events spawn.
	///
	/// Returns `true` if a particle was added.
	pub fn on_pointer_move(&mut self, x: f64, y: f64, rng: &mut impl Rng) -> bool {
		if !rng.gen_bool(self.spawn_probability) {
			return false;
		}
		let particle = Particle::spawn(x, y, &self.palette, rng);
		self.push(particle);
		true
	}

	/// Appends a particle, evicting the oldest one when the buffer is full.
	pub fn push(&mut self, particle: Particle) {
		while self.particles.len() >= self.capacity {
			self.particles.pop_front();
		}
		self.particles.push_back(particle);
	}

	/// Moves, damps and ages every particle, dropping the expired ones.
	pub fn tick(&mut self) {
		let damping = self.damping;
		self.particles.retain_mut(|p| p.step(damping));
	}

	/// Live particles, oldest first.
	pub fn particles(&self) -> impl ExactSizeIterator<Item = &Particle> {
		self.particles.iter()
	}

	/// Number of live particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether no particle is alive.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Buffer size at which the oldest particle is evicted.
	pub fn capacity(&self) -> usize {
		self.capacity
	}
}
