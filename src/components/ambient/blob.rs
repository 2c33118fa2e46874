//! Morphing blobs.
//!
//! Two soft shapes sit in opposite corners of the viewport. Their outline is
//! a rounded rectangle with CSS-style elliptical corner radii, and those radii
//! loop through a short keyframe sequence so the shape slowly wobbles. Scroll
//! rotates, scales and lifts them.

use std::f64::consts::{FRAC_PI_2, PI};

use super::keyframes::{Easing, Keyframes};

/// Points sampled along each corner arc.
const ARC_SEGMENTS: usize = 8;

/// Corner radii in percent of the box, clockwise from top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerRadii {
	/// Horizontal radii as a percentage of the width.
	pub horizontal: [f64; 4],
	/// Vertical radii as a percentage of the height.
	pub vertical: [f64; 4],
}

impl CornerRadii {
	/// Shrinks all radii by one factor when adjacent radii overlap, the way
	/// browsers resolve an oversized `border-radius`.
	pub fn fitted(self) -> Self {
		let [tl_h, tr_h, br_h, bl_h] = self.horizontal;
		let [tl_v, tr_v, br_v, bl_v] = self.vertical;
		let widest = [tl_h + tr_h, bl_h + br_h, tl_v + bl_v, tr_v + br_v]
			.into_iter()
			.fold(0.0, f64::max);
		if widest <= 100.0 {
			return self;
		}
		let f = 100.0 / widest;
		Self {
			horizontal: self.horizontal.map(|r| r * f),
			vertical: self.vertical.map(|r| r * f),
		}
	}
}

/// Viewport corner a blob is pinned to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
	/// Offsets from the top and left edges.
	TopLeft {
		/// Pixels from the top edge.
		top: f64,
		/// Pixels from the left edge.
		left: f64,
	},
	/// Offsets from the bottom and right edges.
	BottomRight {
		/// Pixels from the bottom edge.
		bottom: f64,
		/// Pixels from the right edge.
		right: f64,
	},
}

/// One wobbling blob.
#[derive(Clone, Debug)]
pub struct MorphingBlob {
	/// Side length of the bounding box in pixels.
	pub size: f64,
	/// Where the box sits in the viewport.
	pub anchor: Anchor,
	/// Length of one morph loop.
	pub duration_ms: f64,
	/// Time before the first loop starts.
	pub delay_ms: f64,
	/// One curve per radius: four horizontal, then four vertical.
	morph: Vec<Keyframes>,
}

impl MorphingBlob {
	/// Builds a blob looping through `shapes`. The first shape should be
	/// repeated last so the loop closes.
	pub fn new(
		size: f64,
		anchor: Anchor,
		duration_ms: f64,
		delay_ms: f64,
		shapes: &[CornerRadii],
	) -> Self {
		let morph = (0..8)
			.filter_map(|k| {
				let values: Vec<f64> = shapes
					.iter()
					.map(|s| if k < 4 { s.horizontal[k] } else { s.vertical[k - 4] })
					.collect();
				Keyframes::evenly(&values).ok()
			})
			.collect();
		Self {
			size,
			anchor,
			duration_ms,
			delay_ms,
			morph,
		}
	}

	/// Large blob near the top-left corner.
	pub fn top_left() -> Self {
		Self::new(
			288.0,
			Anchor::TopLeft { top: 80.0, left: 40.0 },
			8000.0,
			0.0,
			&[
				radii([60.0, 40.0, 30.0, 70.0], [60.0, 30.0, 70.0, 40.0]),
				radii([30.0, 60.0, 70.0, 40.0], [50.0, 60.0, 30.0, 60.0]),
				radii([50.0, 60.0, 30.0, 60.0], [60.0, 30.0, 60.0, 40.0]),
				radii([60.0, 40.0, 30.0, 70.0], [60.0, 30.0, 70.0, 40.0]),
			],
		)
	}

	/// Smaller blob near the bottom-right corner, starting a second later.
	pub fn bottom_right() -> Self {
		Self::new(
			192.0,
			Anchor::BottomRight {
				bottom: 80.0,
				right: 80.0,
			},
			6000.0,
			1000.0,
			&[
				radii([30.0, 70.0, 70.0, 30.0], [30.0, 30.0, 70.0, 70.0]),
				radii([70.0, 30.0, 30.0, 70.0], [70.0, 70.0, 30.0, 30.0]),
				radii([50.0, 50.0, 50.0, 50.0], [60.0, 40.0, 60.0, 40.0]),
				radii([30.0, 70.0, 70.0, 30.0], [30.0, 30.0, 70.0, 70.0]),
			],
		)
	}

	/// Position in the morph loop at `now_ms`, in `[0, 1)`. Held at 0 until
	/// the delay has passed.
	pub fn phase(&self, now_ms: f64) -> f64 {
		if self.duration_ms <= 0.0 || now_ms <= self.delay_ms {
			return 0.0;
		}
		((now_ms - self.delay_ms) / self.duration_ms).rem_euclid(1.0)
	}

	/// Corner radii at `now_ms`.
	pub fn radii_at(&self, now_ms: f64) -> CornerRadii {
		let t = self.phase(now_ms);
		let mut values = [0.0; 8];
		for (v, curve) in values.iter_mut().zip(&self.morph) {
			*v = curve.sample_eased(t, Easing::EASE_IN_OUT);
		}
		CornerRadii {
			horizontal: [values[0], values[1], values[2], values[3]],
			vertical: [values[4], values[5], values[6], values[7]],
		}
	}

	/// Top-left corner of the bounding box in a `width × height` viewport.
	pub fn origin(&self, width: f64, height: f64) -> (f64, f64) {
		match self.anchor {
			Anchor::TopLeft { top, left } => (left, top),
			Anchor::BottomRight { bottom, right } => {
				(width - right - self.size, height - bottom - self.size)
			}
		}
	}

	/// Outline at `now_ms`, rotated by `degrees` and scaled by `scale` about
	/// its center, then lifted by `dy`.
	pub fn outline(
		&self,
		width: f64,
		height: f64,
		now_ms: f64,
		degrees: f64,
		scale: f64,
		dy: f64,
	) -> Vec<(f64, f64)> {
		let (left, top) = self.origin(width, height);
		let (cx, cy) = (left + self.size / 2.0, top + self.size / 2.0);
		let (s, c) = degrees.to_radians().sin_cos();

		rounded_outline(left, top, self.size, self.size, &self.radii_at(now_ms))
			.into_iter()
			.map(|(x, y)| {
				let (ox, oy) = ((x - cx) * scale, (y - cy) * scale);
				(cx + ox * c - oy * s, cy + ox * s + oy * c + dy)
			})
			.collect()
	}
}

const fn radii(horizontal: [f64; 4], vertical: [f64; 4]) -> CornerRadii {
	CornerRadii {
		horizontal,
		vertical,
	}
}

/// Clockwise outline of a `width × height` box at `(left, top)` whose
/// corners are quarter ellipses.
pub fn rounded_outline(
	left: f64,
	top: f64,
	width: f64,
	height: f64,
	radii: &CornerRadii,
) -> Vec<(f64, f64)> {
	let r = radii.fitted();
	let h = r.horizontal.map(|p| p / 100.0 * width);
	let v = r.vertical.map(|p| p / 100.0 * height);
	let (right, bottom) = (left + width, top + height);

	// Center and start angle of each corner, clockwise from top-left
	let corners = [
		(left + h[0], top + v[0], PI),
		(right - h[1], top + v[1], PI + FRAC_PI_2),
		(right - h[2], bottom - v[2], 0.0),
		(left + h[3], bottom - v[3], FRAC_PI_2),
	];

	let mut points = Vec::with_capacity(4 * (ARC_SEGMENTS + 1));
	for (k, (cx, cy, start)) in corners.into_iter().enumerate() {
		for i in 0..=ARC_SEGMENTS {
			let angle = start + FRAC_PI_2 * i as f64 / ARC_SEGMENTS as f64;
			points.push((cx + h[k] * angle.cos(), cy + v[k] * angle.sin()));
		}
	}
	points
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn oversized_radii_shrink_together() {
		let fitted = radii([30.0, 60.0, 70.0, 40.0], [50.0, 60.0, 30.0, 60.0]).fitted();
		let f = 100.0 / 110.0;
		assert!((fitted.horizontal[2] - 70.0 * f).abs() < 1e-9);
		assert!((fitted.vertical[0] - 50.0 * f).abs() < 1e-9);
	}

	#[test]
	fn square_corners_hit_box_edges() {
		let flat = radii([0.0; 4], [0.0; 4]);
		let points = rounded_outline(10.0, 20.0, 100.0, 50.0, &flat);
		assert!(points.contains(&(10.0, 20.0)));
		assert!(points.iter().all(|&(x, y)| (10.0..=110.0).contains(&x) && (20.0..=70.0).contains(&y)));
	}
}
