//! Constellation network construction.
//!
//! Nodes are scattered at random over the viewport and each one is linked
//! to a few of its nearest neighbours. The graph is built once per viewport
//! size and never touched by the frame loop, which only moves node
//! coordinates (see [`super::motion`]).

use std::f64::consts::TAU;

use rand::Rng;

use super::types::NetworkConfig;

/// A constellation point. Base parameters are fixed for the node's lifetime;
/// `x`/`y` are rewritten every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstellationNode {
	/// Index in the node table.
	pub id: usize,
	/// Center of the sway, in viewport pixels.
	pub base_x: f64,
	/// Center of the sway, in viewport pixels.
	pub base_y: f64,
	/// Phase offset in `[0, 2π)`.
	pub phase: f64,
	/// Horizontal sway amplitude in pixels.
	pub radius_x: f64,
	/// Vertical sway amplitude in pixels.
	pub radius_y: f64,
	/// Angular speed per millisecond.
	pub speed: f64,
	/// Current position.
	pub x: f64,
	/// Current position.
	pub y: f64,
}

impl ConstellationNode {
	/// Creates a node with random base position and motion parameters.
	pub fn random(id: usize, width: f64, height: f64, rng: &mut impl Rng) -> Self {
		let base_x = rng.gen_range(0.0..1.0) * width;
		let base_y = rng.gen_range(0.0..1.0) * height;
		let phase = rng.gen_range(0.0..TAU);
		let radius_x = rng.gen_range(15.0..40.0);
		let radius_y = rng.gen_range(15.0..40.0);
		let speed = rng.gen_range(0.00008..0.00058);

		Self {
			id,
			base_x,
			base_y,
			phase,
			radius_x,
			radius_y,
			speed,
			x: base_x + phase.sin() * radius_x,
			y: base_y + (phase * 0.7).cos() * radius_y,
		}
	}

	/// Euclidean distance between current positions.
	pub fn distance_to(&self, other: &ConstellationNode) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// An undirected edge between nodes `i < j`.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	/// Lower node index.
	pub i: usize,
	/// Higher node index.
	pub j: usize,
	/// Decided once at build time so the drawn edges stay stable.
	pub should_connect: bool,
	/// Opacity of the wide glow stroke.
	pub glow_opacity: f64,
	/// Opacity of the thin main stroke.
	pub line_opacity: f64,
}

/// Viewport-derived sizing of the network.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkParams {
	/// Number of nodes to scatter.
	pub node_count: usize,
	/// Candidates at or beyond this distance are never drawn.
	pub max_distance: f64,
	/// Nearest candidates each node considers.
	pub max_degree: usize,
	/// Chance that an in-range candidate is drawn, within `[0, 1]`.
	pub connect_probability: f64,
}

impl NetworkParams {
	/// `count = clamp(floor(area / area_per_node), min, max)`, with distance and
	/// degree switching at the mobile breakpoint.
	pub fn for_viewport(width: f64, height: f64, config: &NetworkConfig) -> Self {
		let area = (width * height).max(0.0);
		let by_area = (area / config.area_per_node).floor() as usize;
		// Inverted bounds collapse to `max_nodes`
		let min_nodes = config.min_nodes.min(config.max_nodes);
		let node_count = by_area.clamp(min_nodes, config.max_nodes);

		let (max_distance, max_degree) = if width < config.mobile_breakpoint {
			(config.mobile_max_distance, config.mobile_max_degree)
		} else {
			(config.desktop_max_distance, config.desktop_max_degree)
		};

		Self {
			node_count,
			max_distance,
			max_degree,
			connect_probability: probability(config.connect_probability),
		}
	}
}

/// Nodes and their connections, always built and replaced together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Network {
	/// Node table, indexed by `ConstellationNode::id`.
	pub nodes: Vec<ConstellationNode>,
	/// Edges over `nodes`.
	pub connections: Vec<Connection>,
}

impl Network {
	/// Connections that are actually drawn.
	pub fn visible_connections(&self) -> impl Iterator<Item = &Connection> {
		self.connections.iter().filter(|c| c.should_connect)
	}

	/// Whether there are no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

/// Clamps to `[0, 1]`, reading NaN as 0.
pub(crate) fn probability(p: f64) -> f64 {
	if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Scatters `params.node_count` nodes over the viewport and links neighbours.
pub fn build_network(
	width: f64,
	height: f64,
	params: &NetworkParams,
	rng: &mut impl Rng,
) -> Network {
	let nodes: Vec<ConstellationNode> = (0..params.node_count)
		.map(|id| ConstellationNode::random(id, width, height, rng))
		.collect();
	let connections = connect_nearest(&nodes, params, rng);
	Network { nodes, connections }
}

/// Approximate k-nearest-neighbour linking.
///
/// Each node considers its `max_degree` closest nodes (ties keep index order).
/// Only the lower-indexed end emits the edge, so `(i, j)` never reappears as
/// `(j, i)`; in-range edges are then kept with `connect_probability`.
pub fn connect_nearest(
	nodes: &[ConstellationNode],
	params: &NetworkParams,
	rng: &mut impl Rng,
) -> Vec<Connection> {
	let mut connections = Vec::new();
	let mut candidates: Vec<(usize, f64)> = Vec::with_capacity(nodes.len());

	for (i, node) in nodes.iter().enumerate() {
		candidates.clear();
		candidates.extend(
			nodes
				.iter()
				.enumerate()
				.filter(|&(j, _)| j != i)
				.map(|(j, other)| (j, node.distance_to(other))),
		);
		candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

		for &(j, distance) in candidates.iter().take(params.max_degree) {
			if i >= j {
				continue;
			}
			let should_connect =
				distance < params.max_distance && rng.gen_bool(params.connect_probability);
			connections.push(Connection {
				i,
				j,
				should_connect,
				glow_opacity: rng.gen_range(0.1..0.3),
				line_opacity: rng.gen_range(0.2..0.5),
			});
		}
	}

	connections
}
