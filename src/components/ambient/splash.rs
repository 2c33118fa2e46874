//! Click splashes and the pointer trail.
//!
//! A splash lives for a fixed duration and is then removed by id, so
//! overlapping splashes never interfere with each other's teardown. The trail
//! keeps only the last few pointer positions, each fading on its own clock.

use std::collections::VecDeque;

use super::keyframes::{Easing, Keyframes, Tween};

/// Unique, monotonically increasing splash identifier.
pub type SplashId = u64;

/// Lifecycle stage of a transient effect at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectPhase {
	/// Spawned but the clock has not reached its timestamp yet.
	Created,
	/// Playing back; cannot be interrupted.
	Animating,
	/// Past its duration.
	Expired,
}

/// A click splash.
#[derive(Clone, Debug, PartialEq)]
pub struct SplashEvent {
	/// Key used to remove this splash.
	pub id: SplashId,
	/// Click position in viewport pixels.
	pub x: f64,
	/// Click position in viewport pixels.
	pub y: f64,
	/// Spawn time in milliseconds.
	pub timestamp: f64,
}

impl SplashEvent {
	/// Where the splash is in its lifecycle at `now_ms`.
	pub fn phase(&self, now_ms: f64, duration_ms: f64) -> EffectPhase {
		if now_ms < self.timestamp {
			EffectPhase::Created
		} else if now_ms < self.timestamp + duration_ms {
			EffectPhase::Animating
		} else {
			EffectPhase::Expired
		}
	}

	/// Milliseconds since the click, never negative.
	pub fn elapsed(&self, now_ms: f64) -> f64 {
		(now_ms - self.timestamp).max(0.0)
	}
}

/// Owns the set of active splashes.
pub struct SplashSpawner {
	active: Vec<SplashEvent>,
	duration_ms: f64,
	next_id: SplashId,
}

impl SplashSpawner {
	/// Spawner whose splashes last `duration_ms`.
	pub fn new(duration_ms: f64) -> Self {
		Self {
			active: Vec::new(),
			duration_ms,
			next_id: 1,
		}
	}

	/// Creates a splash at `(x, y)`. The caller schedules [`Self::remove`]
	/// for the returned id `duration_ms` later.
	pub fn on_click(&mut self, x: f64, y: f64, now_ms: f64) -> SplashId {
		let id = self.next_id;
		self.next_id += 1;
		self.active.push(SplashEvent {
			id,
			x,
			y,
			timestamp: now_ms,
		});
		id
	}

	/// Removes a splash by id. Returns `None` if it is already gone, so a
	/// second removal is a no-op.
	pub fn remove(&mut self, id: SplashId) -> Option<SplashEvent> {
		let pos = self.active.iter().position(|s| s.id == id)?;
		Some(self.active.remove(pos))
	}

	/// Removes every splash whose duration has run out at `now_ms`.
	pub fn expire(&mut self, now_ms: f64) -> Vec<SplashId> {
		let duration = self.duration_ms;
		let mut expired = Vec::new();
		self.active.retain(|s| {
			let keep = s.phase(now_ms, duration) != EffectPhase::Expired;
			if !keep {
				expired.push(s.id);
			}
			keep
		});
		expired
	}

	/// Every splash not yet removed, oldest first.
	pub fn active(&self) -> &[SplashEvent] {
		&self.active
	}

	/// Splashes visible at `now_ms`, i.e. within `[timestamp, timestamp + duration)`.
	pub fn active_at(&self, now_ms: f64) -> impl Iterator<Item = &SplashEvent> {
		let duration = self.duration_ms;
		self.active
			.iter()
			.filter(move |s| s.phase(now_ms, duration) == EffectPhase::Animating)
	}

	/// Number of splashes not yet removed.
	pub fn len(&self) -> usize {
		self.active.len()
	}

	/// Whether no splash is pending removal.
	pub fn is_empty(&self) -> bool {
		self.active.is_empty()
	}
}

/// A recent pointer position.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailPoint {
	/// Monotonic key.
	pub id: u64,
	/// Pointer position in viewport pixels.
	pub x: f64,
	/// Pointer position in viewport pixels.
	pub y: f64,
	/// When the pointer was here.
	pub born_ms: f64,
}

/// Short list of recent pointer positions.
pub struct PointerTrail {
	points: VecDeque<TrailPoint>,
	capacity: usize,
	fade_ms: f64,
	scale: Keyframes,
	opacity: Keyframes,
	next_id: u64,
}

impl PointerTrail {
	/// Trail keeping at most `capacity` points, each fading over `fade_ms`.
	pub fn new(capacity: usize, fade_ms: f64) -> Self {
		Self {
			points: VecDeque::with_capacity(capacity.max(1)),
			capacity: capacity.max(1),
			fade_ms,
			scale: curve(&[0.0, 0.5, 0.0]),
			opacity: curve(&[0.0, 0.8, 0.0]),
			next_id: 0,
		}
	}

	/// Appends a point, dropping the oldest when full.
	pub fn on_mouse_move(&mut self, x: f64, y: f64, now_ms: f64) {
		while self.points.len() >= self.capacity {
			self.points.pop_front();
		}
		self.points.push_back(TrailPoint {
			id: self.next_id,
			x,
			y,
			born_ms: now_ms,
		});
		self.next_id += 1;
	}

	/// Drops points whose fade has finished.
	pub fn prune(&mut self, now_ms: f64) {
		let fade = self.fade_ms;
		self.points.retain(|p| now_ms - p.born_ms < fade);
	}

	/// Points oldest first.
	pub fn points(&self) -> impl ExactSizeIterator<Item = &TrailPoint> {
		self.points.iter()
	}

	/// Number of points.
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// Whether the trail has no points.
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// `(scale, opacity)` of a point at `now_ms`.
	pub fn appearance(&self, point: &TrailPoint, now_ms: f64) -> (f64, f64) {
		let t = if self.fade_ms > 0.0 {
			((now_ms - point.born_ms) / self.fade_ms).clamp(0.0, 1.0)
		} else {
			1.0
		};
		(
			self.scale.sample_eased(t, Easing::EASE_OUT),
			self.opacity.sample_eased(t, Easing::EASE_OUT),
		)
	}

	/// Hue drifts with time and steps 45° per trail slot.
	pub fn hue(index: usize, now_ms: f64) -> f64 {
		(index as f64 * 45.0 + now_ms * 0.01) % 360.0
	}
}

fn curve(values: &[f64]) -> Keyframes {
	Keyframes::evenly(values).unwrap_or_else(|_| Keyframes::linear(0.0, 0.0))
}

fn timed(times: &[f64], values: &[f64]) -> Keyframes {
	Keyframes::new(times, values).unwrap_or_else(|_| curve(values))
}

/// One expanding ripple ring.
#[derive(Clone, Debug)]
struct RingTrack {
	diameter: f64,
	border: f64,
	hue: f64,
	scale: Tween,
	opacity: Tween,
}

/// One particle of a radial burst.
#[derive(Clone, Debug)]
struct BurstTrack {
	angle: f64,
	distance: f64,
	radius: f64,
	hue: f64,
	saturation: f64,
	lightness: f64,
	travel: Tween,
	scale: Tween,
	opacity: Tween,
}

/// Ring state at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct RingFrame {
	/// Outer radius in pixels.
	pub radius: f64,
	/// Stroke width in pixels.
	pub border: f64,
	/// Stroke hue in degrees.
	pub hue: f64,
	/// Stroke opacity.
	pub opacity: f64,
}

/// Burst particle state at one instant, relative to the splash center.
#[derive(Clone, Debug, PartialEq)]
pub struct BurstFrame {
	/// Horizontal offset from the click.
	pub dx: f64,
	/// Vertical offset from the click.
	pub dy: f64,
	/// Dot radius in pixels.
	pub radius: f64,
	/// Hue in degrees.
	pub hue: f64,
	/// HSL saturation.
	pub saturation: f64,
	/// HSL lightness.
	pub lightness: f64,
	/// Dot opacity.
	pub opacity: f64,
}

/// Every layer of a splash sampled at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct SplashFrame {
	/// Scale applied to the whole splash.
	pub envelope: f64,
	/// Radius of the gradient splash, envelope applied.
	pub fluid_radius: f64,
	/// Opacity of the gradient splash.
	pub fluid_opacity: f64,
	/// Radius of the white core, envelope applied.
	pub core_radius: f64,
	/// Opacity of the white core.
	pub core_opacity: f64,
	/// Ripple rings, innermost first.
	pub rings: Vec<RingFrame>,
	/// Primary burst followed by the secondary burst.
	pub bursts: Vec<BurstFrame>,
}

/// Timeline of a splash: core flash, fluid splash, ripple rings and two
/// radial particle bursts.
#[derive(Clone, Debug)]
pub struct SplashAnimation {
	envelope: Tween,
	fluid_scale: Tween,
	fluid_opacity: Tween,
	core_scale: Tween,
	core_opacity: Tween,
	rings: Vec<RingTrack>,
	bursts: Vec<BurstTrack>,
}

/// Radius of the fluid splash at scale 1.
const FLUID_RADIUS: f64 = 40.0;
/// Radius of the white core at scale 1.
const CORE_RADIUS: f64 = 12.0;
const RING_COUNT: usize = 3;
const PRIMARY_BURST: usize = 12;
const SECONDARY_BURST: usize = 8;

impl SplashAnimation {
	/// Timeline for splashes lasting `duration_ms`, with ring, burst and
	/// secondary burst base hues in degrees.
	pub fn new(duration_ms: f64, ring_hue: f64, burst_hue: f64, secondary_hue: f64) -> Self {
		let ease = Easing::SPLASH;

		let rings = (0..RING_COUNT)
			.map(|i| {
				let i_f = i as f64;
				RingTrack {
					diameter: 32.0 + i_f * 16.0,
					border: 2.0 - i_f * 0.5,
					hue: ring_hue + i_f * 30.0,
					scale: Tween::new(Keyframes::linear(0.0, 2.5 + i_f * 0.5), 900.0 + i_f * 100.0)
						.delay(i_f * 50.0)
						.ease(ease),
					opacity: Tween::new(curve(&[0.0, 0.8 - i_f * 0.2, 0.0]), 900.0 + i_f * 100.0)
						.delay(i_f * 50.0)
						.ease(ease),
				}
			})
			.collect();

		let primary = (0..PRIMARY_BURST).map(|i| {
			let i_f = i as f64;
			BurstTrack {
				angle: (i_f * 30.0).to_radians(),
				distance: 40.0 + i_f * 3.0,
				radius: 6.0,
				hue: (i_f * 30.0 + burst_hue) % 360.0,
				saturation: 0.8,
				lightness: 0.65,
				travel: Tween::new(Keyframes::linear(0.0, 1.0), 800.0)
					.delay(i_f * 30.0)
					.ease(ease),
				scale: Tween::new(curve(&[0.0, 1.2, 0.0]), 800.0)
					.delay(i_f * 30.0)
					.ease(ease),
				opacity: Tween::new(curve(&[0.0, 1.0, 0.0]), 800.0)
					.delay(i_f * 30.0)
					.ease(ease),
			}
		});
		let secondary = (0..SECONDARY_BURST).map(|i| {
			let i_f = i as f64;
			let delay = 100.0 + i_f * 40.0;
			BurstTrack {
				angle: (i_f * 45.0 + 22.5).to_radians(),
				distance: 60.0 + i_f * 4.0,
				radius: 4.0,
				hue: (i_f * 45.0 + secondary_hue) % 360.0,
				saturation: 0.9,
				lightness: 0.7,
				travel: Tween::new(Keyframes::linear(0.0, 1.0), 900.0)
					.delay(delay)
					.ease(ease),
				scale: Tween::new(curve(&[0.0, 1.0, 0.0]), 900.0)
					.delay(delay)
					.ease(ease),
				opacity: Tween::new(curve(&[0.0, 0.8, 0.0]), 900.0)
					.delay(delay)
					.ease(ease),
			}
		});

		Self {
			envelope: Tween::new(Keyframes::linear(0.0, 1.0), duration_ms).ease(ease),
			fluid_scale: Tween::new(timed(&[0.0, 0.3, 1.0], &[0.0, 2.0, 3.5]), 1000.0).ease(ease),
			fluid_opacity: Tween::new(timed(&[0.0, 0.3, 1.0], &[0.0, 0.9, 0.0]), 1000.0)
				.ease(ease),
			core_scale: Tween::new(timed(&[0.0, 0.4, 1.0], &[0.0, 1.5, 0.0]), 500.0).ease(ease),
			core_opacity: Tween::new(timed(&[0.0, 0.4, 1.0], &[0.0, 1.0, 0.0]), 500.0).ease(ease),
			rings,
			bursts: primary.chain(secondary).collect(),
		}
	}

	/// Samples every layer `elapsed_ms` after the click.
	pub fn frame(&self, elapsed_ms: f64) -> SplashFrame {
		let envelope = self.envelope.sample(elapsed_ms);

		let rings = self
			.rings
			.iter()
			.map(|r| RingFrame {
				radius: r.diameter / 2.0 * r.scale.sample(elapsed_ms) * envelope,
				border: r.border,
				hue: r.hue,
				opacity: r.opacity.sample(elapsed_ms),
			})
			.collect();

		let bursts = self
			.bursts
			.iter()
			.map(|b| {
				let reach = b.distance * b.travel.sample(elapsed_ms) * envelope;
				BurstFrame {
					dx: b.angle.cos() * reach,
					dy: b.angle.sin() * reach,
					radius: b.radius * b.scale.sample(elapsed_ms) * envelope,
					hue: b.hue,
					saturation: b.saturation,
					lightness: b.lightness,
					opacity: b.opacity.sample(elapsed_ms),
				}
			})
			.collect();

		SplashFrame {
			envelope,
			fluid_radius: FLUID_RADIUS * self.fluid_scale.sample(elapsed_ms) * envelope,
			fluid_opacity: self.fluid_opacity.sample(elapsed_ms),
			core_radius: CORE_RADIUS * self.core_scale.sample(elapsed_ms) * envelope,
			core_opacity: self.core_opacity.sample(elapsed_ms),
			rings,
			bursts,
		}
	}
}
