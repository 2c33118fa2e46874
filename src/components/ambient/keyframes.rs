//! Keyframe curves and easing.
//!
//! A [`Keyframes`] value maps an input (scroll progress, or normalized time)
//! through a list of stops. Inputs before the first stop or after the last
//! clamp to the end values. [`Tween`] adds a duration, delay and easing so
//! a curve can be sampled by elapsed milliseconds.

use std::cmp::Ordering;

use thiserror::Error;

/// Reasons a keyframe list is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum KeyframeError {
	/// Fewer than two stops.
	#[error("keyframes need at least two stops, got {0}")]
	TooFewStops(usize),
	/// Input and output lists differ in length.
	#[error("input has {inputs} stops but output has {outputs}")]
	LengthMismatch {
		/// Number of input stops.
		inputs: usize,
		/// Number of output stops.
		outputs: usize,
	},
	/// An input stop is not above the one before it.
	#[error("input stops must be strictly increasing (index {0})")]
	NotIncreasing(usize),
}

/// Easing applied to each segment between two stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
	/// No easing.
	Linear,
	/// CSS-style cubic bezier with control points `(x1, y1)` and `(x2, y2)`.
	CubicBezier(f64, f64, f64, f64),
}

impl Easing {
	/// Strong ease-out used by every splash layer.
	pub const SPLASH: Easing = Easing::CubicBezier(0.23, 1.0, 0.32, 1.0);
	/// CSS `ease-out`.
	pub const EASE_OUT: Easing = Easing::CubicBezier(0.0, 0.0, 0.58, 1.0);
	/// CSS `ease-in-out`.
	pub const EASE_IN_OUT: Easing = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);

	/// Maps `t` in `[0, 1]` to eased progress.
	pub fn apply(&self, t: f64) -> f64 {
		let t = t.clamp(0.0, 1.0);
		match *self {
			Easing::Linear => t,
			Easing::CubicBezier(x1, y1, x2, y2) => {
				if t == 0.0 || t == 1.0 {
					return t;
				}
				let s = solve_bezier_x(t, x1, x2);
				bezier(s, y1, y2)
			}
		}
	}
}

/// One-dimensional cubic bezier through 0 and 1 with control values `p1`, `p2`.
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
	let inv = 1.0 - s;
	3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
	let inv = 1.0 - s;
	3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Finds the curve parameter whose x equals `x`.
/// Newton first, bisection when the slope flattens out.
fn solve_bezier_x(x: f64, x1: f64, x2: f64) -> f64 {
	let mut s = x;
	for _ in 0..8 {
		let err = bezier(s, x1, x2) - x;
		if err.abs() < 1e-7 {
			return s;
		}
		let slope = bezier_slope(s, x1, x2);
		if slope.abs() < 1e-6 {
			break;
		}
		s -= err / slope;
	}

	let (mut lo, mut hi) = (0.0, 1.0);
	s = x;
	for _ in 0..40 {
		let v = bezier(s, x1, x2);
		if (v - x).abs() < 1e-7 {
			break;
		}
		if v < x {
			lo = s;
		} else {
			hi = s;
		}
		s = (lo + hi) / 2.0;
	}
	s
}

/// Piecewise interpolation through a list of `(input, output)` stops.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
	input: Vec<f64>,
	output: Vec<f64>,
}

impl Keyframes {
	/// Curve through `(input[i], output[i])`. Inputs must be strictly
	/// increasing.
	pub fn new(input: &[f64], output: &[f64]) -> Result<Self, KeyframeError> {
		if input.len() != output.len() {
			return Err(KeyframeError::LengthMismatch {
				inputs: input.len(),
				outputs: output.len(),
			});
		}
		if input.len() < 2 {
			return Err(KeyframeError::TooFewStops(input.len()));
		}
		if let Some(i) = input
			.windows(2)
			.position(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Less))
		{
			return Err(KeyframeError::NotIncreasing(i + 1));
		}
		Ok(Self {
			input: input.to_vec(),
			output: output.to_vec(),
		})
	}

	/// Output values evenly spread over `[0, 1]`.
	pub fn evenly(output: &[f64]) -> Result<Self, KeyframeError> {
		let n = output.len();
		if n < 2 {
			return Err(KeyframeError::TooFewStops(n));
		}
		let input: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
		Self::new(&input, output)
	}

	/// Straight line from `(0, from)` to `(1, to)`.
	pub fn linear(from: f64, to: f64) -> Self {
		Self {
			input: vec![0.0, 1.0],
			output: vec![from, to],
		}
	}

	/// Linear interpolation at `x`.
	pub fn sample(&self, x: f64) -> f64 {
		self.sample_eased(x, Easing::Linear)
	}

	/// Samples with `easing` applied inside whichever segment `x` falls in.
	pub fn sample_eased(&self, x: f64, easing: Easing) -> f64 {
		let last = self.input.len() - 1;
		if x.is_nan() || x <= self.input[0] {
			return self.output[0];
		}
		if x >= self.input[last] {
			return self.output[last];
		}

		let seg = self
			.input
			.windows(2)
			.position(|w| x < w[1])
			.unwrap_or(last - 1);
		let (x0, x1) = (self.input[seg], self.input[seg + 1]);
		let (y0, y1) = (self.output[seg], self.output[seg + 1]);
		let t = easing.apply((x - x0) / (x1 - x0));
		y0 + (y1 - y0) * t
	}
}

/// A keyframe curve played over time.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
	/// Values over normalized time.
	pub curve: Keyframes,
	/// Time to play the whole curve.
	pub duration_ms: f64,
	/// Time held at the first value.
	pub delay_ms: f64,
	/// Applied per segment.
	pub easing: Easing,
}

impl Tween {
	/// Linear tween with no delay.
	pub fn new(curve: Keyframes, duration_ms: f64) -> Self {
		Self {
			curve,
			duration_ms,
			delay_ms: 0.0,
			easing: Easing::Linear,
		}
	}

	/// Sets the start delay.
	pub fn delay(mut self, delay_ms: f64) -> Self {
		self.delay_ms = delay_ms;
		self
	}

	/// Sets the easing.
	pub fn ease(mut self, easing: Easing) -> Self {
		self.easing = easing;
		self
	}

	/// Normalized progress at `elapsed_ms` after the tween was started.
	pub fn progress(&self, elapsed_ms: f64) -> f64 {
		if self.duration_ms <= 0.0 {
			return 1.0;
		}
		((elapsed_ms - self.delay_ms) / self.duration_ms).clamp(0.0, 1.0)
	}

	/// Value at `elapsed_ms` after the tween was started.
	pub fn sample(&self, elapsed_ms: f64) -> f64 {
		self.curve
			.sample_eased(self.progress(elapsed_ms), self.easing)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bezier_endpoints_and_monotonic() {
		let e = Easing::SPLASH;
		assert_eq!(e.apply(0.0), 0.0);
		assert_eq!(e.apply(1.0), 1.0);
		let mut prev = 0.0;
		for i in 1..=20 {
			let v = e.apply(i as f64 / 20.0);
			assert!(v >= prev - 1e-9);
			prev = v;
		}
	}

	#[test]
	fn ease_out_front_loads_progress() {
		assert!(Easing::SPLASH.apply(0.25) > 0.5);
	}

	#[test]
	fn linear_bezier_is_identity() {
		let e = Easing::CubicBezier(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
		for i in 0..=10 {
			let t = i as f64 / 10.0;
			assert!((e.apply(t) - t).abs() < 1e-5);
		}
	}
}
