// Host-side tests for the combined ambient state and scene assembly.

#![allow(unused_crate_dependencies)]

use portfolio_ambient::components::ambient::scene::{self, Primitive};
use portfolio_ambient::components::ambient::{
	AmbientConfig, AmbientState, ConfigError, EffectToggles, Theme,
};

fn state_with(config: AmbientConfig) -> AmbientState {
	AmbientState::new(config, 1024.0, 768.0, &Theme::default(), 7).unwrap()
}

fn eager_config() -> AmbientConfig {
	let mut config = AmbientConfig::default();
	config.particles.spawn_probability = 1.0;
	config
}

#[test]
fn mount_builds_network_for_viewport() {
	let state = state_with(AmbientConfig::default());
	assert_eq!(state.network().nodes.len(), 15);
	assert_eq!(state.network_params().max_degree, 4);
	assert!(state.particles().len() == 0);
	assert!(state.splashes().is_empty());
	assert_eq!(state.cursor(), None);
}

#[test]
fn same_seed_same_network() {
	let a = state_with(AmbientConfig::default());
	let b = state_with(AmbientConfig::default());
	assert_eq!(a.network(), b.network());
}

#[test]
fn constellation_toggle_skips_network() {
	let mut config = AmbientConfig::default();
	config.effects.constellation = false;
	let mut state = state_with(config);
	assert!(state.network().is_empty());
	assert!(!state.resize(375.0, 812.0));
	assert!(state.network().is_empty());
}

#[test]
fn pointer_move_feeds_particles_trail_and_cursor() {
	let mut state = state_with(eager_config());
	state.on_pointer_move(100.0, 200.0, 16.0);
	state.on_pointer_move(110.0, 205.0, 32.0);

	assert_eq!(state.particles().len(), 2);
	assert_eq!(state.trail().len(), 2);
	assert_eq!(state.cursor(), Some((100.0, 200.0)));

	for i in 0..100 {
		state.on_pointer_move(i as f64, 0.0, 48.0 + i as f64);
	}
	assert_eq!(state.particles().len(), 50);
	assert_eq!(state.trail().len(), 5);
}

#[test]
fn click_splash_lifecycle() {
	let mut state = state_with(AmbientConfig::default());
	let before = state.splashes().len();

	let id = state.on_click(50.0, 50.0, 1_000.0).unwrap();
	assert_eq!(state.splashes().len(), before + 1);
	assert_eq!(state.splashes().active_at(2_199.0).count(), 1);
	assert_eq!(state.splashes().active_at(2_200.0).count(), 0);

	assert!(state.remove_splash(id));
	assert_eq!(state.splashes().len(), before);
	assert!(!state.remove_splash(id));
}

#[test]
fn disabled_splash_ignores_clicks() {
	let mut config = AmbientConfig::default();
	config.effects.splash = false;
	let mut state = state_with(config);
	assert_eq!(state.on_click(10.0, 10.0, 0.0), None);
	state.on_pointer_move(10.0, 10.0, 0.0);
	assert!(state.trail().is_empty());
}

#[test]
fn resize_rebuilds_only_when_params_change() {
	let mut state = state_with(AmbientConfig::default());
	let built = state.network().clone();

	assert!(!state.resize(1030.0, 768.0));
	assert_eq!(state.network(), &built);
	assert_eq!(state.width, 1030.0);

	assert!(state.resize(500.0, 800.0));
	assert_eq!(state.network_params().max_degree, 3);
	assert_eq!(state.network_params().max_distance, 150.0);
	assert_eq!(state.network().nodes.len(), 15);
	assert!(state.network().connections.iter().all(|c| c.j < 15));
}

#[test]
fn particles_age_out_on_ticks() {
	let mut state = state_with(eager_config());
	state.on_pointer_move(100.0, 100.0, 0.0);
	assert_eq!(state.particles().len(), 1);
	for _ in 0..90 {
		state.tick_particles();
	}
	assert_eq!(state.particles().len(), 0);
}

#[test]
fn frame_advances_nodes_and_trail() {
	let mut state = state_with(AmbientConfig::default());
	state.on_pointer_move(300.0, 300.0, 0.0);
	state.on_pointer_move(600.0, 400.0, 0.0);

	let before: Vec<(f64, f64)> = state.network().nodes.iter().map(|n| (n.x, n.y)).collect();
	for i in 1..=60 {
		state.frame(i as f64 * 16.0);
	}
	let after: Vec<(f64, f64)> = state.network().nodes.iter().map(|n| (n.x, n.y)).collect();
	assert_ne!(before, after);
	assert_eq!(state.now_ms(), 960.0);
	assert!(state.trail().is_empty());

	let (cx, cy) = state.cursor().unwrap();
	assert!((cx - 600.0).abs() < 1.0 && (cy - 400.0).abs() < 1.0);
}

#[test]
fn scroll_progress_is_clamped() {
	let mut state = state_with(AmbientConfig::default());
	state.set_scroll_progress(1.7);
	assert_eq!(state.scroll_progress(), 1.0);
	state.set_scroll_progress(f64::NAN);
	assert_eq!(state.scroll_progress(), 0.0);
	state.set_scroll_progress(0.5);
	assert_eq!(state.scroll_pose().orb_y, -200.0);
}

#[test]
fn scene_respects_effect_toggles() {
	let mut config = eager_config();
	config.effects = EffectToggles {
		particles: false,
		constellation: false,
		splash: false,
		cursor: false,
		scroll_shapes: false,
		field: false,
	};
	let mut state = state_with(config);
	state.on_pointer_move(10.0, 10.0, 0.0);
	state.frame(16.0);
	assert!(scene::build(&state, &Theme::default()).is_empty());
}

#[test]
fn scene_draws_every_layer() {
	let theme = Theme::default();
	let mut state = state_with(eager_config());
	state.on_pointer_move(400.0, 300.0, 100.0);
	state.on_click(400.0, 300.0, 100.0);
	state.frame(300.0);

	let primitives = scene::build(&state, &theme);
	assert!(primitives.iter().all(Primitive::is_visible));
	assert!(primitives.iter().any(|p| matches!(p, Primitive::Ring { .. })));
	assert!(primitives.iter().any(|p| matches!(p, Primitive::Polygon { .. })));
	assert!(primitives.iter().any(|p| matches!(p, Primitive::Glow { .. })));

	let cursor = primitives.last().unwrap();
	assert!(matches!(cursor, Primitive::Circle { radius, .. } if *radius == 6.0));
}

#[test]
fn invalid_config_is_rejected_at_mount() {
	let mut config = AmbientConfig::default();
	config.network.min_nodes = 40;
	config.network.max_nodes = 20;
	let built = AmbientState::new(config, 1024.0, 768.0, &Theme::default(), 7);
	assert_eq!(
		built.err(),
		Some(ConfigError::NodeBounds { min: 40, max: 20 })
	);

	let mut config = AmbientConfig::default();
	config.particles.spawn_probability = f64::NAN;
	let built = AmbientState::new(config, 1024.0, 768.0, &Theme::default(), 7);
	assert!(matches!(built, Err(ConfigError::Probability { .. })));
}

#[test]
fn frame_expires_splashes_without_timer() {
	let mut state = state_with(AmbientConfig::default());
	state.on_click(50.0, 50.0, 1_000.0).unwrap();
	state.frame(2_199.0);
	assert_eq!(state.splashes().len(), 1);
	state.frame(2_200.0);
	assert!(state.splashes().is_empty());
}

#[test]
fn field_springs_in_and_reacts_to_pointer() {
	let theme = Theme::default();
	let mut state = state_with(AmbientConfig::default());
	assert_eq!(state.field().len(), 50);
	assert_eq!(state.field().entrance(0), 0.0);

	// Each dot chases the one before it, so the last settles seconds later
	for i in 0..=200 {
		state.frame(i as f64 * 100.0);
	}
	assert!((state.field().entrance(0) - 1.0).abs() < 0.02);
	assert!((state.field().entrance(49) - 1.0).abs() < 0.02);

	let dots = |state: &AmbientState| {
		scene::build(state, &theme)
			.into_iter()
			.filter(|p| matches!(p, Primitive::Circle { blur, .. } if *blur > 0.0))
			.count()
	};
	assert_eq!(dots(&state), 0);

	let (x, y) = {
		let (dot, _) = state.field().appearances(None).next().unwrap();
		(dot.x, dot.y)
	};
	state.on_pointer_move(x, y, 20_100.0);
	assert!(dots(&state) >= 1);
}

#[test]
fn field_toggle_skips_dots() {
	let mut config = AmbientConfig::default();
	config.effects.field = false;
	let state = state_with(config);
	assert!(state.field().is_empty());
}

#[test]
fn backdrop_layers_drawn_with_scroll_shapes() {
	let theme = Theme::default();
	let mut config = AmbientConfig::default();
	config.effects = EffectToggles {
		particles: false,
		constellation: false,
		splash: false,
		cursor: false,
		scroll_shapes: true,
		field: false,
	};
	let mut state = state_with(config);
	state.frame(16.0);

	let primitives = scene::build(&state, &theme);
	let horizontal = primitives
		.iter()
		.filter(|p| matches!(p, Primitive::Line { y1, y2, .. } if y1 == y2))
		.count();
	let vertical = primitives
		.iter()
		.filter(|p| matches!(p, Primitive::Line { x1, x2, .. } if x1 == x2))
		.count();
	// 768 / 50 and 1024 / 50, both ends inclusive
	assert_eq!(horizontal, 16);
	assert_eq!(vertical, 21);
	// Three mesh gradients come first
	assert!(primitives[..3].iter().all(|p| matches!(p, Primitive::Glow { .. })));

	state.set_scroll_progress(1.0);
	let scrolled = scene::build(&state, &theme);
	let Primitive::Glow { y, .. } = &scrolled[0] else {
		panic!("mesh gradient missing");
	};
	assert_eq!(*y, 768.0 * 0.5 - 200.0);
}
