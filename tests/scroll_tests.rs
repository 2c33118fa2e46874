// Host-side tests for keyframe curves and scroll-driven channels.

#![allow(unused_crate_dependencies)]

use portfolio_ambient::components::ambient::keyframes::{Easing, KeyframeError, Keyframes, Tween};
use portfolio_ambient::components::ambient::scroll::{ScrollMapper, channel, scroll_progress};

fn close(a: f64, b: f64) -> bool {
	(a - b).abs() < 1e-9
}

#[test]
fn progress_from_scroll_offset() {
	assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
	assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
	assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
	assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
	assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
}

#[test]
fn unscrollable_page_reports_zero() {
	assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
	assert_eq!(scroll_progress(100.0, 600.0, 800.0), 0.0);
	assert_eq!(scroll_progress(f64::NAN, 3000.0, 800.0), 0.0);
}

#[test]
fn keyframes_interpolate_and_clamp() {
	let k = Keyframes::new(&[0.0, 0.3, 0.7, 1.0], &[0.8, 0.6, 0.4, 0.2]).unwrap();
	assert!(close(k.sample(0.0), 0.8));
	assert!(close(k.sample(0.15), 0.7));
	assert!(close(k.sample(0.5), 0.5));
	assert!(close(k.sample(1.0), 0.2));
	assert!(close(k.sample(-3.0), 0.8));
	assert!(close(k.sample(7.0), 0.2));
	assert!(close(k.sample(f64::NAN), 0.8));
}

#[test]
fn invalid_keyframes_are_rejected() {
	assert_eq!(
		Keyframes::new(&[0.0], &[1.0]),
		Err(KeyframeError::TooFewStops(1))
	);
	assert_eq!(
		Keyframes::new(&[0.0, 1.0], &[1.0]),
		Err(KeyframeError::LengthMismatch {
			inputs: 2,
			outputs: 1
		})
	);
	assert_eq!(
		Keyframes::new(&[0.0, 0.5, 0.5], &[1.0, 2.0, 3.0]),
		Err(KeyframeError::NotIncreasing(2))
	);
	assert_eq!(
		Keyframes::new(&[0.0, f64::NAN], &[1.0, 2.0]),
		Err(KeyframeError::NotIncreasing(1))
	);
}

#[test]
fn eased_segments_keep_their_endpoints() {
	let k = Keyframes::evenly(&[0.0, 10.0, 0.0]).unwrap();
	assert!(close(k.sample_eased(0.5, Easing::SPLASH), 10.0));
	assert!(k.sample_eased(0.25, Easing::SPLASH) > k.sample(0.25));
}

#[test]
fn tween_respects_delay() {
	let tween = Tween::new(Keyframes::linear(0.0, 100.0), 1000.0).delay(200.0);
	assert_eq!(tween.sample(0.0), 0.0);
	assert_eq!(tween.sample(200.0), 0.0);
	assert!(close(tween.sample(700.0), 50.0));
	assert_eq!(tween.sample(5000.0), 100.0);
}

#[test]
fn channels_are_pure() {
	let mapper = ScrollMapper::standard();
	for i in 0..=100 {
		let p = i as f64 / 100.0;
		assert_eq!(mapper.pose(p), mapper.pose(p));
		assert_eq!(
			mapper.sample(channel::HELIX_ROTATE, p),
			ScrollMapper::standard().sample(channel::HELIX_ROTATE, p)
		);
	}
}

#[test]
fn standard_channels_hit_their_stops() {
	let mapper = ScrollMapper::standard();

	let top = mapper.pose(0.0);
	assert_eq!(top.orb_y, 0.0);
	assert_eq!(top.orb_scale, 1.0);
	assert_eq!(top.triangle_opacity, 0.8);
	assert_eq!(top.drift_opacity, 0.0);

	let bottom = mapper.pose(1.0);
	assert_eq!(bottom.orb_y, -400.0);
	assert_eq!(bottom.orb_rotate, 360.0);
	assert_eq!(bottom.helix_rotate, 720.0);
	assert_eq!(bottom.square_opacity, 0.0);
	assert_eq!(bottom.stars_opacity, 0.2);
	assert_eq!(bottom.square_y, [-50.0, -100.0, -150.0, -200.0, -250.0, -300.0]);
	assert_eq!(bottom.drift_y[5], -150.0);

	let middle = mapper.pose(0.5);
	assert!(close(middle.orb_scale, 1.2));
	assert!(close(middle.triangle_rotate, -90.0));
	assert!(close(mapper.pose(0.3).drift_opacity, 1.0));
}

#[test]
fn unknown_channel_is_none() {
	let mut mapper = ScrollMapper::new();
	assert_eq!(mapper.sample("missing", 0.5), None);

	mapper
		.insert_stops("custom", &[0.0, 1.0], &[10.0, 20.0])
		.unwrap();
	assert_eq!(mapper.sample("custom", 0.5), Some(15.0));
	assert!(mapper.insert_stops("bad", &[1.0, 0.0], &[0.0, 1.0]).is_err());
}

#[test]
fn background_layers_follow_scroll() {
	let mapper = ScrollMapper::standard();

	let top = mapper.pose(0.0);
	assert_eq!(top.mesh_y, 0.0);
	assert_eq!(top.mesh_opacity, 0.8);
	assert_eq!(top.grid_y, 0.0);
	assert_eq!(top.blob_scale, 1.0);

	let middle = mapper.pose(0.5);
	assert!(close(middle.mesh_opacity, 0.4));
	assert!(close(middle.blob_scale, 1.2));
	assert!(close(middle.grid_y, -200.0));

	let bottom = mapper.pose(1.0);
	assert_eq!(bottom.mesh_y, -200.0);
	assert!(close(bottom.mesh_opacity, 0.1));
	assert_eq!(bottom.grid_y, -400.0);
	assert_eq!(bottom.blob_y, [-200.0, -100.0]);
	assert_eq!(bottom.blob_rotate, [360.0, -180.0]);
	assert!(close(bottom.blob_scale, 0.8));
}
