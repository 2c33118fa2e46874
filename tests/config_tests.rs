// Host-side tests for configuration parsing and validation.

#![allow(unused_crate_dependencies)]

use portfolio_ambient::components::ambient::{AmbientConfig, EffectToggles};
use portfolio_ambient::{ConfigError, parse_config};

#[test]
fn empty_object_uses_defaults() {
	let config = parse_config("{}").unwrap();
	assert_eq!(config, AmbientConfig::default());
	assert_eq!(config.particles.capacity, 50);
	assert_eq!(config.particles.spawn_probability, 0.3);
	assert_eq!(config.particles.damping, 0.99);
	assert_eq!(config.particles.tick_interval_ms, 16);
	assert_eq!(config.splash.duration_ms, 1200.0);
	assert_eq!(config.splash.trail_capacity, 5);
	assert_eq!(config.splash.trail_fade_ms, 600.0);
	assert_eq!(config.effects, EffectToggles::default());
	assert_eq!(config.seed, None);
}

#[test]
fn partial_sections_keep_other_defaults() {
	let config = parse_config(
		r#"{
			"particles": { "capacity": 80 },
			"network": { "max_nodes": 40 },
			"effects": { "splash": false },
			"seed": 1234
		}"#,
	)
	.unwrap();
	assert_eq!(config.particles.capacity, 80);
	assert_eq!(config.particles.spawn_probability, 0.3);
	assert_eq!(config.network.max_nodes, 40);
	assert_eq!(config.network.min_nodes, 15);
	assert!(!config.effects.splash);
	assert!(config.effects.particles);
	assert_eq!(config.seed, Some(1234));
}

#[test]
fn malformed_json_is_a_parse_error() {
	assert!(matches!(
		parse_config("{ particles: "),
		Err(ConfigError::Parse(_))
	));
	assert!(matches!(
		parse_config(r#"{ "particles": { "capacity": "many" } }"#),
		Err(ConfigError::Parse(_))
	));
}

#[test]
fn out_of_range_values_are_rejected() {
	assert_eq!(
		parse_config(r#"{ "particles": { "spawn_probability": 1.5 } }"#),
		Err(ConfigError::Probability {
			field: "particles.spawn_probability",
			value: 1.5
		})
	);
	assert_eq!(
		parse_config(r#"{ "particles": { "capacity": 0 } }"#),
		Err(ConfigError::ZeroCapacity("particles.capacity"))
	);
	assert_eq!(
		parse_config(r#"{ "network": { "min_nodes": 40, "max_nodes": 20 } }"#),
		Err(ConfigError::NodeBounds { min: 40, max: 20 })
	);
	assert_eq!(
		parse_config(r#"{ "splash": { "duration_ms": 0 } }"#),
		Err(ConfigError::NonPositive {
			field: "splash.duration_ms",
			value: 0.0
		})
	);
}

#[test]
fn error_messages_name_the_field() {
	let err = parse_config(r#"{ "network": { "connect_probability": -0.1 } }"#).unwrap_err();
	assert_eq!(
		err.to_string(),
		"network.connect_probability must be within [0, 1], got -0.1"
	);
}

#[test]
fn field_section_parses_and_validates() {
	let config =
		parse_config(r#"{ "field": { "count": 12 }, "effects": { "field": false } }"#).unwrap();
	assert_eq!(config.field.count, 12);
	assert_eq!(config.field.influence_radius, 200.0);
	assert!(!config.effects.field);

	assert_eq!(
		parse_config(r#"{ "field": { "influence_radius": 0 } }"#),
		Err(ConfigError::NonPositive {
			field: "field.influence_radius",
			value: 0.0
		})
	);
}
