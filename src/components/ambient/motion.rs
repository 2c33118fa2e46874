//! Slow organic drift of constellation nodes.
//!
//! Each node sways around its base position along two superposed sine waves
//! per axis. Sampling is O(n) and never looks at connections.

use super::network::ConstellationNode;

/// Position of `node` at `now_ms` milliseconds.
pub fn sample(node: &ConstellationNode, now_ms: f64) -> (f64, f64) {
	let t = now_ms * node.speed;
	let phase = node.phase;

	let wave_x = (t + phase).sin() * 0.6 + (t * 0.7 + phase * 1.3).sin() * 0.4;
	let wave_y = (t * 0.5 + phase * 0.8).cos() * 0.3 + (t * 1.1 + phase * 0.6).cos() * 0.3;

	(
		node.base_x + wave_x * node.radius_x,
		node.base_y + wave_y * node.radius_y,
	)
}

/// Rewrites every node's current position for `now_ms`.
pub fn advance(nodes: &mut [ConstellationNode], now_ms: f64) {
	for node in nodes {
		let (x, y) = sample(node, now_ms);
		node.x = x;
		node.y = y;
	}
}
