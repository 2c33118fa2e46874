//! Scene assembly.
//!
//! Turns a settled [`AmbientState`] into a flat list of drawable primitives,
//! back to front:
//! 1. Scroll backdrop (gradient mesh, grid, morphing blobs)
//! 2. Pointer field dots
//! 3. Scroll decorations (floating shapes, helix, star field, drift trail)
//! 4. Constellation glows, lines, then nodes
//! 5. Pointer particles and the pointer trail
//! 6. Click splashes, then the cursor dot on top
//!
//! The list is surface-agnostic; [`super::render`] paints it on a canvas.

use std::f64::consts::PI;

use super::keyframes::{Easing, Keyframes};
use super::scroll::ScrollPose;
use super::splash::PointerTrail;
use super::state::AmbientState;
use super::theme::{Color, Theme};

/// A single draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
	/// Filled circle, optionally blurred (blur in pixels).
	Circle {
		/// Center.
		x: f64,
		/// Center.
		y: f64,
		/// Radius in pixels.
		radius: f64,
		/// Fill color.
		fill: Color,
		/// Gaussian blur in pixels, 0 for none.
		blur: f64,
	},
	/// Stroked circle outline.
	Ring {
		/// Center.
		x: f64,
		/// Center.
		y: f64,
		/// Radius in pixels.
		radius: f64,
		/// Stroke width.
		width: f64,
		/// Stroke color.
		stroke: Color,
	},
	/// Straight stroke from `(x1, y1)` to `(x2, y2)`.
	Line {
		/// Start point.
		x1: f64,
		/// Start point.
		y1: f64,
		/// End point.
		x2: f64,
		/// End point.
		y2: f64,
		/// Stroke width.
		width: f64,
		/// Stroke color.
		stroke: Color,
	},
	/// Filled closed polygon.
	Polygon {
		/// Vertices in drawing order.
		points: Vec<(f64, f64)>,
		/// Fill color.
		fill: Color,
	},
	/// Circle filled with a radial gradient whose inner focus sits at `focus`.
	Glow {
		/// Center of the outer circle.
		x: f64,
		/// Center of the outer circle.
		y: f64,
		/// Outer radius.
		radius: f64,
		/// Center of the zero-radius inner circle.
		focus: (f64, f64),
		/// `(offset, color)` pairs with offsets in `[0, 1]`.
		stops: Vec<(f64, Color)>,
	},
}

impl Primitive {
	/// Whether drawing this primitive would have any visible effect.
	pub fn is_visible(&self) -> bool {
		match self {
			Primitive::Circle { radius, fill, .. } => *radius > 0.0 && fill.a > 0.001,
			Primitive::Ring { radius, stroke, .. } => *radius > 0.0 && stroke.a > 0.001,
			Primitive::Line { stroke, .. } => stroke.a > 0.001,
			Primitive::Polygon { points, fill } => points.len() >= 3 && fill.a > 0.001,
			Primitive::Glow { radius, stops, .. } => {
				*radius > 0.0 && stops.iter().any(|(_, c)| c.a > 0.001)
			}
		}
	}
}

/// Builds the full primitive list for the current state.
pub fn build(state: &AmbientState, theme: &Theme) -> Vec<Primitive> {
	let mut out = Vec::new();
	let effects = &state.config.effects;
	let pose = state.scroll_pose();

	if effects.scroll_shapes {
		push_gradient_mesh(state, &pose, theme, &mut out);
		push_grid(state, &pose, theme, &mut out);
		push_blobs(state, &pose, theme, &mut out);
	}
	if effects.field {
		push_field(state, theme, &mut out);
	}
	if effects.scroll_shapes {
		push_floating_shapes(state, &pose, theme, &mut out);
		push_helix(state, &pose, theme, &mut out);
		push_star_field(state, &pose, theme, &mut out);
		push_drift_trail(state, &pose, theme, &mut out);
	}
	if effects.constellation {
		push_constellation(state, theme, &mut out);
	}
	if effects.particles {
		push_particles(state, theme, &mut out);
	}
	if effects.splash {
		push_trail(state, &mut out);
		push_splashes(state, theme, &mut out);
	}
	if effects.cursor {
		push_cursor(state, theme, &mut out);
	}

	out.retain(Primitive::is_visible);
	out
}

/// Rotates `(x, y)` by `degrees` around `(cx, cy)`.
fn rotate(x: f64, y: f64, cx: f64, cy: f64, degrees: f64) -> (f64, f64) {
	let (s, c) = degrees.to_radians().sin_cos();
	let (dx, dy) = (x - cx, y - cy);
	(cx + dx * c - dy * s, cy + dx * s + dy * c)
}

/// Axis-aligned square of side `size` centered at `(cx, cy)`, rotated.
fn square(cx: f64, cy: f64, size: f64, degrees: f64) -> Vec<(f64, f64)> {
	let h = size / 2.0;
	[(-h, -h), (h, -h), (h, h), (-h, h)]
		.into_iter()
		.map(|(dx, dy)| rotate(cx + dx, cy + dy, cx, cy, degrees))
		.collect()
}

/// Value of a repeating `a → b → a` pulse at `now_ms`.
fn pulse(from: f64, peak: f64, period_ms: f64, now_ms: f64) -> f64 {
	let t = (now_ms / period_ms).rem_euclid(1.0);
	Keyframes::evenly(&[from, peak, from])
		.map(|k| k.sample_eased(t, Easing::EASE_IN_OUT))
		.unwrap_or(from)
}

/// Spacing of the backdrop grid in pixels.
const GRID_SPACING: f64 = 50.0;

fn push_gradient_mesh(
	state: &AmbientState,
	pose: &ScrollPose,
	theme: &Theme,
	out: &mut Vec<Primitive>,
) {
	let (w, h) = (state.width, state.height);
	for ((fx, fy), color) in theme.shapes.mesh {
		let (x, y) = (w * fx, h * fy + pose.mesh_y);
		// Gradient reaches the farthest viewport corner, fading out halfway
		let reach = (w * fx.max(1.0 - fx)).hypot(h * fy.max(1.0 - fy));
		out.push(Primitive::Glow {
			x,
			y,
			radius: reach,
			focus: (x, y),
			stops: vec![
				(0.0, color.fade(pose.mesh_opacity)),
				(0.5, color.with_alpha(0.0)),
			],
		});
	}
}

fn push_grid(state: &AmbientState, pose: &ScrollPose, theme: &Theme, out: &mut Vec<Primitive>) {
	let (w, h) = (state.width, state.height);
	if w <= 0.0 || h <= 0.0 {
		return;
	}
	let stroke = theme.shapes.grid;

	let mut x = 0.0;
	while x <= w {
		out.push(Primitive::Line {
			x1: x,
			y1: 0.0,
			x2: x,
			y2: h,
			width: 1.0,
			stroke,
		});
		x += GRID_SPACING;
	}

	// The grid repeats every spacing, so only the remainder of the offset shows
	let mut y = pose.grid_y.rem_euclid(GRID_SPACING);
	while y <= h {
		out.push(Primitive::Line {
			x1: 0.0,
			y1: y,
			x2: w,
			y2: y,
			width: 1.0,
			stroke,
		});
		y += GRID_SPACING;
	}
}

fn push_blobs(state: &AmbientState, pose: &ScrollPose, theme: &Theme, out: &mut Vec<Primitive>) {
	let style = &theme.shapes;
	for (k, blob) in state.blobs().iter().enumerate() {
		let (from, to) = style.blobs[k];
		out.push(Primitive::Polygon {
			points: blob.outline(
				state.width,
				state.height,
				state.now_ms(),
				pose.blob_rotate[k],
				pose.blob_scale,
				pose.blob_y[k],
			),
			fill: from.lerp(to, 0.5).fade(style.blob_alpha),
		});
	}
}

fn push_field(state: &AmbientState, theme: &Theme, out: &mut Vec<Primitive>) {
	let (from, to) = theme.shapes.field;
	let fill = from.lerp(to, 0.5);
	for (dot, look) in state.field().appearances(state.pointer()) {
		out.push(Primitive::Circle {
			x: dot.x,
			y: dot.y,
			radius: look.radius,
			fill: fill.fade(look.opacity),
			blur: look.blur,
		});
	}
}

fn push_floating_shapes(
	state: &AmbientState,
	pose: &ScrollPose,
	theme: &Theme,
	out: &mut Vec<Primitive>,
) {
	let (px, py) = state.parallax();
	let (w, h) = (state.width, state.height);
	let style = &theme.shapes;

	// Blurred orb anchored at the top-left quarter
	let (ox, oy) = (w * 0.25 + 128.0 + px, h * 0.25 + 128.0 + pose.orb_y + py);
	let radius = 128.0 * pose.orb_scale;
	let focus = rotate(ox + radius * 0.25, oy, ox, oy, pose.orb_rotate);
	out.push(Primitive::Glow {
		x: ox,
		y: oy,
		radius,
		focus,
		stops: vec![
			(0.0, style.orb),
			(0.6, style.orb.fade(0.5)),
			(1.0, style.orb.with_alpha(0.0)),
		],
	});

	// Triangle right of center
	let (tx, ty) = (w * (2.0 / 3.0) - 64.0 + px, h * 0.5 + 64.0 + pose.triangle_y + py);
	let points = [(0.0, -64.0), (-64.0, 64.0), (64.0, 64.0)]
		.into_iter()
		.map(|(dx, dy)| rotate(tx + dx, ty + dy, tx, ty, pose.triangle_rotate))
		.collect();
	out.push(Primitive::Polygon {
		points,
		fill: style.triangle.fade(pose.triangle_opacity),
	});

	for (i, offset) in pose.square_y.iter().enumerate() {
		let cx = w * (0.20 + 0.15 * i as f64) + 8.0 + px;
		let cy = h * (0.30 + 0.40 * (i % 2) as f64) + 8.0 + offset + py;
		let angle = if i % 2 == 0 {
			pose.square_rotate_even
		} else {
			pose.square_rotate_odd
		};
		out.push(Primitive::Polygon {
			points: square(cx, cy, 16.0, angle),
			fill: style.square.fade(pose.square_opacity),
		});
	}
}

const HELIX_STRANDS: usize = 15;
const HELIX_WIDTH: f64 = 96.0;
const HELIX_HEIGHT: f64 = 288.0;
const HELIX_CYCLE_MS: f64 = 3000.0;

fn push_helix(state: &AmbientState, pose: &ScrollPose, theme: &Theme, out: &mut Vec<Primitive>) {
	let style = &theme.shapes;
	let left = state.width - 10.0 - HELIX_WIDTH;
	let top = state.height * 0.25 + pose.helix_y;
	let (cx, cy) = (left + HELIX_WIDTH / 2.0, top + HELIX_HEIGHT / 2.0);

	for i in 0..HELIX_STRANDS {
		let progress = i as f64 / HELIX_STRANDS as f64;
		let y = top + progress * 280.0;
		// Each strand sweeps out to its target x once per cycle, staggered
		let sweep = ((state.now_ms() - i as f64 * 50.0) / HELIX_CYCLE_MS).rem_euclid(1.0);
		let angle = progress * PI * 4.0;

		for (phase, color) in [(0.0, style.helix_left), (PI, style.helix_right)] {
			let x = left + ((angle + phase).sin() * 20.0 + 15.0) * sweep;
			let (rx, ry) = rotate(x, y, cx, cy, pose.helix_rotate);
			let (sx, sy) = (
				cx + (rx - cx) * pose.helix_scale,
				cy + (ry - cy) * pose.helix_scale,
			);
			out.push(Primitive::Circle {
				x: sx,
				y: sy,
				radius: 4.0 * pose.helix_scale,
				fill: color.fade(style.helix_alpha),
				blur: 0.0,
			});
		}
	}
}

const STAR_COUNT: usize = 12;

fn push_star_field(
	state: &AmbientState,
	pose: &ScrollPose,
	theme: &Theme,
	out: &mut Vec<Primitive>,
) {
	if state.width <= 0.0 || state.height <= 0.0 {
		return;
	}
	let now = state.now_ms();

	for i in 0..STAR_COUNT {
		let i_f = i as f64;
		let period = 2000.0 + i_f * 200.0;
		let x = (i_f * 100.0 + 50.0) % state.width;
		let y = (i_f * 150.0 + 100.0) % state.height + pose.stars_y;
		out.push(Primitive::Circle {
			x,
			y,
			radius: 2.0 * pulse(0.5, 1.0, period, now),
			fill: theme
				.shapes
				.star
				.fade(pulse(0.3, 0.8, period, now) * pose.stars_opacity),
			blur: 0.0,
		});
	}
}

const DRIFT_POSITIONS: [(f64, f64); 6] = [
	(0.15, 0.20),
	(0.65, 0.35),
	(0.25, 0.60),
	(0.80, 0.70),
	(0.45, 0.15),
	(0.70, 0.85),
];

fn push_drift_trail(
	state: &AmbientState,
	pose: &ScrollPose,
	theme: &Theme,
	out: &mut Vec<Primitive>,
) {
	let now = state.now_ms();

	for (i, ((fx, fy), offset)) in DRIFT_POSITIONS.iter().zip(pose.drift_y).enumerate() {
		let period = 2000.0 + i as f64 * 100.0;
		out.push(Primitive::Circle {
			x: state.width * fx,
			y: state.height * fy + pose.drift_layer_y + offset,
			radius: 2.0 * pulse(0.5, 1.0, period, now),
			fill: theme
				.shapes
				.drift
				.fade(pulse(0.2, 0.8, period, now) * pose.drift_opacity),
			blur: 0.0,
		});
	}
}

fn push_constellation(state: &AmbientState, theme: &Theme, out: &mut Vec<Primitive>) {
	let network = state.network();
	let style = &theme.constellation;

	for conn in network.visible_connections() {
		// A node set shrunk by a rebuild can leave stale indices; skip them
		let (Some(a), Some(b)) = (network.nodes.get(conn.i), network.nodes.get(conn.j)) else {
			continue;
		};
		out.push(Primitive::Line {
			x1: a.x,
			y1: a.y,
			x2: b.x,
			y2: b.y,
			width: style.glow_width,
			stroke: style.glow_color.fade(conn.glow_opacity * style.glow_alpha),
		});
		out.push(Primitive::Line {
			x1: a.x,
			y1: a.y,
			x2: b.x,
			y2: b.y,
			width: style.line_width,
			stroke: style.line_color.fade(conn.line_opacity * style.line_alpha),
		});
	}

	for node in &network.nodes {
		for (radius, fill) in [style.halo, style.body, style.core] {
			out.push(Primitive::Circle {
				x: node.x,
				y: node.y,
				radius,
				fill,
				blur: 0.0,
			});
		}
	}
}

fn push_particles(state: &AmbientState, theme: &Theme, out: &mut Vec<Primitive>) {
	for p in state.particles() {
		let life = p.life.clamp(0.0, 1.0);
		out.push(Primitive::Circle {
			x: p.x,
			y: p.y,
			radius: p.size / 2.0,
			fill: p.color.fade(life * theme.particle_opacity),
			blur: (1.0 - life) * 2.0,
		});
	}
}

fn push_trail(state: &AmbientState, out: &mut Vec<Primitive>) {
	let trail = state.trail();
	let now = state.now_ms();

	for (index, point) in trail.points().enumerate() {
		let (scale, opacity) = trail.appearance(point, now);
		let hue = TrailHue(PointerTrail::hue(index, now));
		out.push(Primitive::Glow {
			x: point.x,
			y: point.y,
			radius: 16.0 * scale,
			focus: (point.x, point.y),
			stops: vec![
				(0.0, hue.inner().fade(opacity)),
				(0.5, hue.outer().fade(opacity)),
				(0.8, hue.inner().with_alpha(0.0)),
			],
		});
	}
}

/// Two-tone trail coloring around a base hue.
struct TrailHue(f64);

impl TrailHue {
	fn inner(&self) -> Color {
		Color::hsl(self.0, 0.7, 0.6)
	}

	fn outer(&self) -> Color {
		Color::hsl(self.0 + 60.0, 0.8, 0.7)
	}
}

fn push_splashes(state: &AmbientState, theme: &Theme, out: &mut Vec<Primitive>) {
	let now = state.now_ms();
	let animation = state.splash_animation();
	let style = &theme.splash;

	for splash in state.splashes().active_at(now) {
		let frame = animation.frame(splash.elapsed(now));
		let (x, y) = (splash.x, splash.y);

		let [a, b, c] = style.fluid;
		out.push(Primitive::Glow {
			x,
			y,
			radius: frame.fluid_radius,
			focus: (x, y),
			stops: vec![
				(0.0, a.fade(frame.fluid_opacity)),
				(0.3, b.fade(frame.fluid_opacity)),
				(0.6, c.fade(frame.fluid_opacity)),
				(0.8, c.with_alpha(0.0)),
			],
		});

		for ring in &frame.rings {
			out.push(Primitive::Ring {
				x,
				y,
				radius: ring.radius,
				width: ring.border,
				stroke: Color::hsl(ring.hue, 0.7, 0.6).with_alpha(ring.opacity),
			});
		}

		out.push(Primitive::Circle {
			x,
			y,
			radius: frame.core_radius,
			fill: style.core.fade(frame.core_opacity),
			blur: 0.0,
		});

		for burst in &frame.bursts {
			out.push(Primitive::Circle {
				x: x + burst.dx,
				y: y + burst.dy,
				radius: burst.radius,
				fill: Color::hsl(burst.hue, burst.saturation, burst.lightness)
					.with_alpha(burst.opacity),
				blur: 0.0,
			});
		}
	}
}

fn push_cursor(state: &AmbientState, theme: &Theme, out: &mut Vec<Primitive>) {
	let Some((x, y)) = state.cursor() else {
		return;
	};
	let (radius, alpha) = if state.is_pressed() {
		(9.0, 1.0)
	} else {
		(6.0, theme.splash.cursor.a)
	};
	out.push(Primitive::Circle {
		x,
		y,
		radius,
		fill: theme.splash.cursor.with_alpha(alpha),
		blur: 0.0,
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rotate_quarter_turn() {
		let (x, y) = rotate(1.0, 0.0, 0.0, 0.0, 90.0);
		assert!(x.abs() < 1e-9);
		assert!((y - 1.0).abs() < 1e-9);
	}

	#[test]
	fn pulse_peaks_mid_period() {
		assert!((pulse(0.5, 1.0, 2000.0, 1000.0) - 1.0).abs() < 1e-9);
		assert!((pulse(0.5, 1.0, 2000.0, 0.0) - 0.5).abs() < 1e-9);
	}
}
