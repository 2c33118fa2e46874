//! Scroll-progress driven transforms.
//!
//! A single progress scalar (0 at the top of the page, 1 at the bottom) is
//! fed through independent named keyframe channels. Different channels move
//! at different rates, which is what fakes the parallax depth of the
//! decorative shapes. Channels hold no state, so sampling is pure.

use std::collections::HashMap;

use super::keyframes::{KeyframeError, Keyframes};

/// Channel names of the standard set.
pub mod channel {
	/// Gradient mesh vertical offset.
	pub const MESH_Y: &str = "mesh.y";
	/// Gradient mesh opacity.
	pub const MESH_OPACITY: &str = "mesh.opacity";
	/// Grid vertical offset.
	pub const GRID_Y: &str = "grid.y";
	/// Vertical offset of the top-left and bottom-right blobs.
	pub const BLOB_Y: [&str; 2] = ["blob.top_left.y", "blob.bottom_right.y"];
	/// Rotation of the top-left and bottom-right blobs, in degrees.
	pub const BLOB_ROTATE: [&str; 2] = ["blob.top_left.rotate", "blob.bottom_right.rotate"];
	/// Scale shared by both blobs.
	pub const BLOB_SCALE: &str = "blob.scale";
	/// Large orb vertical offset.
	pub const ORB_Y: &str = "shapes.orb.y";
	/// Large orb rotation, in degrees.
	pub const ORB_ROTATE: &str = "shapes.orb.rotate";
	/// Large orb scale.
	pub const ORB_SCALE: &str = "shapes.orb.scale";
	/// Triangle vertical offset.
	pub const TRIANGLE_Y: &str = "shapes.triangle.y";
	/// Triangle rotation, in degrees.
	pub const TRIANGLE_ROTATE: &str = "shapes.triangle.rotate";
	/// Triangle opacity.
	pub const TRIANGLE_OPACITY: &str = "shapes.triangle.opacity";
	/// Vertical offset of each small square.
	pub const SQUARE_Y: [&str; 6] = [
		"shapes.square.0.y",
		"shapes.square.1.y",
		"shapes.square.2.y",
		"shapes.square.3.y",
		"shapes.square.4.y",
		"shapes.square.5.y",
	];
	/// Rotation of even-indexed squares, in degrees.
	pub const SQUARE_ROTATE_EVEN: &str = "shapes.square.rotate.even";
	/// Rotation of odd-indexed squares, in degrees.
	pub const SQUARE_ROTATE_ODD: &str = "shapes.square.rotate.odd";
	/// Opacity of every square.
	pub const SQUARE_OPACITY: &str = "shapes.square.opacity";
	/// Helix vertical offset.
	pub const HELIX_Y: &str = "helix.y";
	/// Helix rotation, in degrees.
	pub const HELIX_ROTATE: &str = "helix.rotate";
	/// Helix scale.
	pub const HELIX_SCALE: &str = "helix.scale";
	/// Star field vertical offset.
	pub const STARS_Y: &str = "stars.y";
	/// Star field opacity.
	pub const STARS_OPACITY: &str = "stars.opacity";
	/// Drift trail layer offset.
	pub const DRIFT_LAYER_Y: &str = "drift.layer.y";
	/// Per-particle drift offset.
	pub const DRIFT_Y: [&str; 6] = [
		"drift.particle.0.y",
		"drift.particle.1.y",
		"drift.particle.2.y",
		"drift.particle.3.y",
		"drift.particle.4.y",
		"drift.particle.5.y",
	];
	/// Drift trail opacity.
	pub const DRIFT_OPACITY: &str = "drift.opacity";
}

/// Converts a scroll offset into progress in `[0, 1]`.
///
/// Pages that cannot scroll report 0.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
	let scrollable = document_height - viewport_height;
	if scrollable <= 0.0 || !scroll_y.is_finite() {
		return 0.0;
	}
	(scroll_y / scrollable).clamp(0.0, 1.0)
}

/// A set of named, independent keyframe channels.
#[derive(Clone, Debug, Default)]
pub struct ScrollMapper {
	channels: HashMap<&'static str, Keyframes>,
}

impl ScrollMapper {
	/// A mapper with no channels.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a channel.
	pub fn insert(&mut self, name: &'static str, curve: Keyframes) -> &mut Self {
		self.channels.insert(name, curve);
		self
	}

	/// Adds a channel from raw stops.
	pub fn insert_stops(
		&mut self,
		name: &'static str,
		input: &[f64],
		output: &[f64],
	) -> Result<&mut Self, KeyframeError> {
		let curve = Keyframes::new(input, output)?;
		Ok(self.insert(name, curve))
	}

	/// Samples channel `name`, or `None` if it was never added.
	pub fn sample(&self, name: &str, progress: f64) -> Option<f64> {
		self.channels.get(name).map(|c| c.sample(progress))
	}

	/// Channels for the gradient mesh, grid, blobs, floating shapes, helix,
	/// star field and drift trail.
	pub fn standard() -> Self {
		use channel::*;

		let mut mapper = Self::new();
		mapper
			.insert(MESH_Y, Keyframes::linear(0.0, -200.0))
			.insert(GRID_Y, Keyframes::linear(0.0, -400.0))
			.insert(BLOB_Y[0], Keyframes::linear(0.0, -200.0))
			.insert(BLOB_Y[1], Keyframes::linear(0.0, -100.0))
			.insert(BLOB_ROTATE[0], Keyframes::linear(0.0, 360.0))
			.insert(BLOB_ROTATE[1], Keyframes::linear(0.0, -180.0))
			.insert(ORB_Y, Keyframes::linear(0.0, -400.0))
			.insert(TRIANGLE_Y, Keyframes::linear(0.0, -100.0))
			.insert(ORB_ROTATE, Keyframes::linear(0.0, 360.0))
			.insert(TRIANGLE_ROTATE, Keyframes::linear(0.0, -180.0))
			.insert(SQUARE_ROTATE_EVEN, Keyframes::linear(0.0, -180.0))
			.insert(SQUARE_ROTATE_ODD, Keyframes::linear(0.0, 180.0))
			.insert(HELIX_Y, Keyframes::linear(0.0, -300.0))
			.insert(HELIX_ROTATE, Keyframes::linear(0.0, 720.0))
			.insert(STARS_Y, Keyframes::linear(0.0, -150.0))
			.insert(DRIFT_LAYER_Y, Keyframes::linear(0.0, -200.0));

		for (k, name) in SQUARE_Y.into_iter().enumerate() {
			mapper.insert(name, Keyframes::linear(0.0, -50.0 * (k as f64 + 1.0)));
		}
		for (k, name) in DRIFT_Y.into_iter().enumerate() {
			mapper.insert(name, Keyframes::linear(0.0, -(100.0 + 10.0 * k as f64)));
		}

		let half = [0.0, 0.5, 1.0];
		let quarters = [0.0, 0.3, 0.7, 1.0];
		let curved: [(&'static str, &[f64], &[f64]); 8] = [
			(MESH_OPACITY, &half, &[0.8, 0.4, 0.1]),
			(BLOB_SCALE, &half, &[1.0, 1.2, 0.8]),
			(ORB_SCALE, &half, &[1.0, 1.2, 0.8]),
			(TRIANGLE_OPACITY, &half, &[0.8, 0.4, 0.1]),
			(SQUARE_OPACITY, &half, &[0.6, 0.3, 0.0]),
			(HELIX_SCALE, &half, &[1.0, 1.2, 0.8]),
			(STARS_OPACITY, &quarters, &[0.8, 0.6, 0.4, 0.2]),
			(DRIFT_OPACITY, &quarters, &[0.0, 1.0, 0.5, 0.0]),
		];
		for (name, input, output) in curved {
			if let Ok(curve) = Keyframes::new(input, output) {
				mapper.insert(name, curve);
			}
		}

		mapper
	}

	/// Samples every standard channel at `progress`.
	///
	/// Channels missing from this mapper read as 0.
	pub fn pose(&self, progress: f64) -> ScrollPose {
		use channel::*;

		let at = |name: &str| self.sample(name, progress).unwrap_or_default();
		ScrollPose {
			progress,
			mesh_y: at(MESH_Y),
			mesh_opacity: at(MESH_OPACITY),
			grid_y: at(GRID_Y),
			blob_y: BLOB_Y.map(at),
			blob_rotate: BLOB_ROTATE.map(at),
			blob_scale: at(BLOB_SCALE),
			orb_y: at(ORB_Y),
			orb_rotate: at(ORB_ROTATE),
			orb_scale: at(ORB_SCALE),
			triangle_y: at(TRIANGLE_Y),
			triangle_rotate: at(TRIANGLE_ROTATE),
			triangle_opacity: at(TRIANGLE_OPACITY),
			square_y: SQUARE_Y.map(at),
			square_rotate_even: at(SQUARE_ROTATE_EVEN),
			square_rotate_odd: at(SQUARE_ROTATE_ODD),
			square_opacity: at(SQUARE_OPACITY),
			helix_y: at(HELIX_Y),
			helix_rotate: at(HELIX_ROTATE),
			helix_scale: at(HELIX_SCALE),
			stars_y: at(STARS_Y),
			stars_opacity: at(STARS_OPACITY),
			drift_layer_y: at(DRIFT_LAYER_Y),
			drift_y: DRIFT_Y.map(at),
			drift_opacity: at(DRIFT_OPACITY),
		}
	}
}

/// Every standard channel sampled at one progress value.
///
/// Offsets are in pixels and rotations in degrees.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollPose {
	/// The progress this pose was sampled at.
	pub progress: f64,
	/// Gradient mesh offset.
	pub mesh_y: f64,
	/// Gradient mesh opacity.
	pub mesh_opacity: f64,
	/// Grid offset.
	pub grid_y: f64,
	/// Top-left then bottom-right.
	pub blob_y: [f64; 2],
	/// Top-left then bottom-right.
	pub blob_rotate: [f64; 2],
	/// Scale shared by both blobs.
	pub blob_scale: f64,
	/// Large orb offset.
	pub orb_y: f64,
	/// Large orb rotation.
	pub orb_rotate: f64,
	/// Large orb scale.
	pub orb_scale: f64,
	/// Triangle offset.
	pub triangle_y: f64,
	/// Triangle rotation.
	pub triangle_rotate: f64,
	/// Triangle opacity.
	pub triangle_opacity: f64,
	/// One offset per small square.
	pub square_y: [f64; 6],
	/// Rotation of even-indexed squares.
	pub square_rotate_even: f64,
	/// Rotation of odd-indexed squares.
	pub square_rotate_odd: f64,
	/// Square opacity.
	pub square_opacity: f64,
	/// Helix offset.
	pub helix_y: f64,
	/// Helix rotation.
	pub helix_rotate: f64,
	/// Helix scale.
	pub helix_scale: f64,
	/// Star field offset.
	pub stars_y: f64,
	/// Star field opacity.
	pub stars_opacity: f64,
	/// Drift trail layer offset.
	pub drift_layer_y: f64,
	/// One offset per drift particle.
	pub drift_y: [f64; 6],
	/// Drift trail opacity.
	pub drift_opacity: f64,
}
