// Host-side tests for the morphing corner blobs.

#![allow(unused_crate_dependencies)]

use portfolio_ambient::components::ambient::blob::{Anchor, MorphingBlob};

#[test]
fn morph_loops_back_to_start() {
	for blob in [MorphingBlob::top_left(), MorphingBlob::bottom_right()] {
		let start = blob.radii_at(blob.delay_ms);
		let looped = blob.radii_at(blob.delay_ms + blob.duration_ms);
		assert_eq!(start, looped);
		assert_ne!(start, blob.radii_at(blob.delay_ms + blob.duration_ms / 3.0));
	}
}

#[test]
fn delayed_blob_holds_first_shape() {
	let blob = MorphingBlob::bottom_right();
	assert_eq!(blob.phase(0.0), 0.0);
	assert_eq!(blob.phase(999.0), 0.0);
	assert_eq!(blob.radii_at(500.0), blob.radii_at(0.0));
	assert!((blob.phase(4_000.0) - 0.5).abs() < 1e-12);
}

#[test]
fn outline_stays_near_anchor() {
	let blob = MorphingBlob::bottom_right();
	assert_eq!(
		blob.anchor,
		Anchor::BottomRight {
			bottom: 80.0,
			right: 80.0
		}
	);
	assert_eq!(blob.origin(1024.0, 768.0), (752.0, 496.0));

	for now in [0.0, 1_700.0, 3_300.0, 6_100.0] {
		let points = blob.outline(1024.0, 768.0, now, 0.0, 1.0, 0.0);
		assert_eq!(points.len(), 36);
		for (x, y) in points {
			assert!(x.is_finite() && y.is_finite());
			assert!((752.0 - 1e-9..=944.0 + 1e-9).contains(&x));
			assert!((496.0 - 1e-9..=688.0 + 1e-9).contains(&y));
		}
	}
}

#[test]
fn scroll_transform_lifts_scales_and_turns() {
	let blob = MorphingBlob::top_left();
	let (cx, cy) = (40.0 + 144.0, 80.0 + 144.0);
	let plain = blob.outline(1024.0, 768.0, 0.0, 0.0, 1.0, 0.0);
	let lifted = blob.outline(1024.0, 768.0, 0.0, 0.0, 1.0, -200.0);
	for (a, b) in plain.iter().zip(&lifted) {
		assert!((b.1 - (a.1 - 200.0)).abs() < 1e-9);
	}

	let grown = blob.outline(1024.0, 768.0, 0.0, 0.0, 1.2, 0.0);
	let turned = blob.outline(1024.0, 768.0, 0.0, 180.0, 1.0, 0.0);
	for ((a, g), t) in plain.iter().zip(&grown).zip(&turned) {
		assert!((g.0 - (cx + (a.0 - cx) * 1.2)).abs() < 1e-9);
		assert!((t.0 - (2.0 * cx - a.0)).abs() < 1e-9);
		assert!((t.1 - (2.0 * cy - a.1)).abs() < 1e-9);
	}
}
