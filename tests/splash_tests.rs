// Host-side tests for click splashes and the pointer trail.

#![allow(unused_crate_dependencies)]

use portfolio_ambient::components::ambient::splash::{
	EffectPhase, PointerTrail, SplashAnimation, SplashSpawner,
};

#[test]
fn splash_visible_for_exactly_its_duration() {
	let mut spawner = SplashSpawner::new(1200.0);
	let t = 5_000.0;
	let id = spawner.on_click(50.0, 50.0, t);

	assert_eq!(spawner.active_at(t - 1.0).count(), 0);
	assert_eq!(spawner.active_at(t).count(), 1);
	assert_eq!(spawner.active_at(t + 1199.9).count(), 1);
	assert_eq!(spawner.active_at(t + 1200.0).count(), 0);

	let splash = &spawner.active()[0];
	assert_eq!(splash.id, id);
	assert_eq!(splash.phase(t - 1.0, 1200.0), EffectPhase::Created);
	assert_eq!(splash.phase(t + 600.0, 1200.0), EffectPhase::Animating);
	assert_eq!(splash.phase(t + 1200.0, 1200.0), EffectPhase::Expired);
}

#[test]
fn ids_are_unique_and_increasing() {
	let mut spawner = SplashSpawner::new(1200.0);
	let ids: Vec<_> = (0..5)
		.map(|i| spawner.on_click(i as f64, 0.0, 100.0))
		.collect();
	assert!(ids.windows(2).all(|w| w[0] < w[1]));
	assert_eq!(spawner.len(), 5);
}

#[test]
fn removal_by_id_is_idempotent() {
	let mut spawner = SplashSpawner::new(1200.0);
	let first = spawner.on_click(50.0, 50.0, 0.0);
	let second = spawner.on_click(80.0, 80.0, 300.0);

	let removed = spawner.remove(first).unwrap();
	assert_eq!((removed.x, removed.y), (50.0, 50.0));
	assert!(spawner.remove(first).is_none());
	assert_eq!(spawner.len(), 1);
	assert_eq!(spawner.active()[0].id, second);
}

#[test]
fn expire_removes_only_finished_splashes() {
	let mut spawner = SplashSpawner::new(1200.0);
	let early = spawner.on_click(0.0, 0.0, 0.0);
	let late = spawner.on_click(0.0, 0.0, 1000.0);

	assert!(spawner.expire(1199.0).is_empty());
	assert_eq!(spawner.expire(1200.0), vec![early]);
	assert_eq!(spawner.expire(2200.0), vec![late]);
	assert!(spawner.is_empty());
}

#[test]
fn trail_keeps_last_five_points() {
	let mut trail = PointerTrail::new(5, 600.0);
	for i in 0..8 {
		trail.on_mouse_move(i as f64, 0.0, i as f64 * 10.0);
	}
	assert_eq!(trail.len(), 5);
	let xs: Vec<f64> = trail.points().map(|p| p.x).collect();
	assert_eq!(xs, vec![3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn trail_points_fade_out_after_600ms() {
	let mut trail = PointerTrail::new(5, 600.0);
	trail.on_mouse_move(1.0, 1.0, 0.0);
	trail.on_mouse_move(2.0, 2.0, 300.0);

	trail.prune(599.0);
	assert_eq!(trail.len(), 2);
	trail.prune(600.0);
	assert_eq!(trail.len(), 1);
	trail.prune(900.0);
	assert!(trail.is_empty());
}

#[test]
fn trail_appearance_peaks_then_vanishes() {
	let mut trail = PointerTrail::new(5, 600.0);
	trail.on_mouse_move(0.0, 0.0, 0.0);
	let point = trail.points().next().cloned().unwrap();

	assert_eq!(trail.appearance(&point, 0.0), (0.0, 0.0));
	let (scale, opacity) = trail.appearance(&point, 300.0);
	assert!((scale - 0.5).abs() < 1e-9);
	assert!((opacity - 0.8).abs() < 1e-9);
	assert_eq!(trail.appearance(&point, 600.0), (0.0, 0.0));
}

#[test]
fn splash_animation_layers() {
	let animation = SplashAnimation::new(1200.0, 220.0, 180.0, 270.0);

	let start = animation.frame(0.0);
	assert_eq!(start.rings.len(), 3);
	assert_eq!(start.bursts.len(), 20);
	assert_eq!(start.envelope, 0.0);
	assert_eq!(start.core_opacity, 0.0);

	let mid = animation.frame(400.0);
	assert!(mid.envelope > 0.0 && mid.envelope < 1.0);
	assert!(mid.fluid_radius > 0.0);
	assert!(mid.bursts.iter().any(|b| b.dx.abs() > 1.0 || b.dy.abs() > 1.0));

	// The last secondary particle starts at 380 ms and runs 900 ms
	let end = animation.frame(1280.0);
	assert_eq!(end.envelope, 1.0);
	assert_eq!(end.fluid_opacity, 0.0);
	assert!(end.rings.iter().all(|r| r.opacity == 0.0));
	assert!(end.bursts.iter().all(|b| b.opacity == 0.0));
}

#[test]
fn primary_burst_points_along_thirty_degree_spokes() {
	let animation = SplashAnimation::new(1200.0, 220.0, 180.0, 270.0);
	let frame = animation.frame(1200.0);
	let third = &frame.bursts[3];
	// 90 degrees, fully travelled: (40 + 3 * 3) straight down the y axis
	assert!(third.dx.abs() < 1e-9);
	assert!((third.dy - 49.0).abs() < 1e-9);
	assert_eq!(third.hue, 270.0);
}
