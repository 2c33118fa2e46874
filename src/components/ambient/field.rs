//! Pointer-reactive particle field.
//!
//! A fixed set of soft dots is scattered over the viewport at mount. They
//! spring in one after another, then brighten, grow and blur a little while
//! the pointer is near. Positions never change after mount.

use rand::Rng;

use super::spring::{Spring, SpringConfig};
use super::types::FieldConfig;

/// Opacity boost at full influence.
const OPACITY_BOOST: f64 = 0.3;
/// Scale boost at full influence.
const SCALE_BOOST: f64 = 0.2;
/// Blur in pixels at full influence.
const MAX_BLUR: f64 = 1.5;
/// Dimming applied to every dot.
const BASE_OPACITY: f64 = 0.3;

/// A floating dot.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParticle {
	/// Position in viewport pixels.
	pub x: f64,
	/// Position in viewport pixels.
	pub y: f64,
	/// Base size; the drawn diameter is three times this.
	pub size: f64,
	/// Resting opacity before the field-wide dimming.
	pub opacity: f64,
}

impl FieldParticle {
	/// Random position within the viewport, size in `[1, 5)` and opacity in
	/// `[0.1, 0.6)`.
	pub fn random(width: f64, height: f64, rng: &mut impl Rng) -> Self {
		Self {
			x: rng.gen_range(0.0..1.0) * width,
			y: rng.gen_range(0.0..1.0) * height,
			size: rng.gen_range(1.0..5.0),
			opacity: rng.gen_range(0.1..0.6),
		}
	}
}

/// How strongly the pointer affects a dot `distance` pixels away: 1 on top
/// of it, falling linearly to 0 at `radius` and beyond.
pub fn influence(distance: f64, radius: f64) -> f64 {
	if radius <= 0.0 || !distance.is_finite() {
		return 0.0;
	}
	(1.0 - distance / radius).max(0.0)
}

/// How a dot is drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldAppearance {
	/// Circle radius in pixels.
	pub radius: f64,
	/// Final opacity.
	pub opacity: f64,
	/// Blur in pixels.
	pub blur: f64,
}

/// The dots and their staggered entrance springs.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	particles: Vec<FieldParticle>,
	/// `entrance[0]` chases 1.0 and every later spring chases the one before
	/// it, so the dots appear in a wave.
	entrance: Vec<Spring>,
	influence_radius: f64,
}

impl ParticleField {
	/// Scatters `config.count` dots over a `width × height` viewport.
	pub fn new(config: &FieldConfig, width: f64, height: f64, rng: &mut impl Rng) -> Self {
		let particles: Vec<FieldParticle> = (0..config.count)
			.map(|_| FieldParticle::random(width, height, rng))
			.collect();
		let entrance = vec![Spring::new(SpringConfig::CURSOR, 0.0); particles.len()];
		Self {
			particles,
			entrance,
			influence_radius: config.influence_radius,
		}
	}

	/// Advances the entrance springs by `dt` seconds.
	pub fn step(&mut self, dt: f64) {
		let mut leader = 1.0;
		for spring in &mut self.entrance {
			spring.set_target(leader);
			spring.step(dt);
			leader = spring.value;
		}
	}

	/// Entrance progress of dot `index`, 0 before it appears and 1 once settled.
	pub fn entrance(&self, index: usize) -> f64 {
		self.entrance.get(index).map_or(0.0, |s| s.value.max(0.0))
	}

	/// Every dot with its appearance for a pointer at `pointer`, if any.
	pub fn appearances(
		&self,
		pointer: Option<(f64, f64)>,
	) -> impl Iterator<Item = (&FieldParticle, FieldAppearance)> {
		self.particles.iter().enumerate().map(move |(i, p)| {
			let near = pointer.map_or(0.0, |(px, py)| {
				let (dx, dy) = (p.x - px, p.y - py);
				influence((dx * dx + dy * dy).sqrt(), self.influence_radius)
			});
			let shown = self.entrance(i);
			let appearance = FieldAppearance {
				radius: p.size * 1.5 * shown * (1.0 + near * SCALE_BOOST),
				opacity: (shown * p.opacity * BASE_OPACITY * (1.0 + near * OPACITY_BOOST))
					.clamp(0.0, 1.0),
				blur: near * MAX_BLUR,
			};
			(p, appearance)
		})
	}

	/// Number of dots.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the field has no dots.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn degenerate_radius_has_no_influence() {
		assert_eq!(influence(0.0, 0.0), 0.0);
		assert_eq!(influence(f64::NAN, 200.0), 0.0);
	}
}
