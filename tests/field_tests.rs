// Host-side tests for the pointer-reactive particle field.

#![allow(unused_crate_dependencies)]

use portfolio_ambient::components::ambient::FieldConfig;
use portfolio_ambient::components::ambient::field::{ParticleField, influence};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn settled_field() -> ParticleField {
	let mut rng = SmallRng::seed_from_u64(11);
	let mut field = ParticleField::new(&FieldConfig::default(), 1024.0, 768.0, &mut rng);
	for _ in 0..200 {
		field.step(0.1);
	}
	field
}

#[test]
fn influence_falls_off_linearly() {
	assert_eq!(influence(0.0, 200.0), 1.0);
	assert_eq!(influence(100.0, 200.0), 0.5);
	assert_eq!(influence(200.0, 200.0), 0.0);
	assert_eq!(influence(300.0, 200.0), 0.0);
}

#[test]
fn dots_are_scattered_inside_viewport() {
	let mut rng = SmallRng::seed_from_u64(5);
	let field = ParticleField::new(&FieldConfig::default(), 800.0, 600.0, &mut rng);
	assert_eq!(field.len(), 50);
	for (dot, _) in field.appearances(None) {
		assert!((0.0..800.0).contains(&dot.x));
		assert!((0.0..600.0).contains(&dot.y));
		assert!((1.0..5.0).contains(&dot.size));
		assert!((0.1..0.6).contains(&dot.opacity));
	}
}

#[test]
fn entrance_staggers_then_settles() {
	let mut rng = SmallRng::seed_from_u64(5);
	let mut field = ParticleField::new(&FieldConfig::default(), 800.0, 600.0, &mut rng);
	for (_, look) in field.appearances(None) {
		assert_eq!(look.radius, 0.0);
		assert_eq!(look.opacity, 0.0);
	}

	for _ in 0..10 {
		field.step(1.0 / 60.0);
	}
	assert!(field.entrance(0) > field.entrance(10));

	let field = settled_field();
	for i in 0..field.len() {
		assert!((field.entrance(i) - 1.0).abs() < 0.02);
	}
}

#[test]
fn pointer_boosts_only_nearby_dots() {
	let field = settled_field();
	let (first, _) = field.appearances(None).next().unwrap();
	let pointer = Some((first.x, first.y));

	let resting: Vec<_> = field.appearances(None).map(|(_, look)| look).collect();
	for (i, (dot, look)) in field.appearances(pointer).enumerate() {
		let distance = (dot.x - first.x).hypot(dot.y - first.y);
		if distance >= 200.0 {
			assert_eq!(look, resting[i]);
		} else {
			assert!(look.radius >= resting[i].radius);
			assert!(look.opacity >= resting[i].opacity);
		}
	}

	let (_, near) = field.appearances(pointer).next().unwrap();
	assert!((near.blur - 1.5).abs() < 1e-9);
	assert!((near.radius / resting[0].radius - 1.2).abs() < 1e-9);
	assert!((near.opacity / resting[0].opacity - 1.3).abs() < 1e-9);
}
