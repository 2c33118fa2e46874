//! Canvas rendering for the ambient layer.
//!
//! Paints a primitive list from [`super::scene`] onto a 2D context. The
//! canvas is transparent: each frame clears it and draws the list in order,
//! so z-ordering is entirely the scene builder's concern.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scene::Primitive;
use super::theme::Color;

/// Clears the canvas and paints `primitives` back to front.
pub fn paint(ctx: &CanvasRenderingContext2d, primitives: &[Primitive], width: f64, height: f64) {
	ctx.clear_rect(0.0, 0.0, width, height);

	for primitive in primitives {
		match primitive {
			Primitive::Circle {
				x,
				y,
				radius,
				fill,
				blur,
			} => draw_circle(ctx, *x, *y, *radius, *fill, *blur),
			Primitive::Ring {
				x,
				y,
				radius,
				width,
				stroke,
			} => {
				ctx.begin_path();
				let _ = ctx.arc(*x, *y, *radius, 0.0, 2.0 * PI);
				ctx.set_stroke_style_str(&stroke.to_css());
				ctx.set_line_width(*width);
				ctx.stroke();
			}
			Primitive::Line {
				x1,
				y1,
				x2,
				y2,
				width,
				stroke,
			} => {
				ctx.set_stroke_style_str(&stroke.to_css());
				ctx.set_line_width(*width);
				ctx.begin_path();
				ctx.move_to(*x1, *y1);
				ctx.line_to(*x2, *y2);
				ctx.stroke();
			}
			Primitive::Polygon { points, fill } => draw_polygon(ctx, points, *fill),
			Primitive::Glow {
				x,
				y,
				radius,
				focus,
				stops,
			} => draw_glow(ctx, *x, *y, *radius, *focus, stops),
		}
	}
}

fn draw_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, fill: Color, blur: f64) {
	if blur > 0.01 {
		ctx.set_filter(&format!("blur({:.2}px)", blur));
	}

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&fill.to_css());
	ctx.fill();

	if blur > 0.01 {
		ctx.set_filter("none");
	}
}

fn draw_polygon(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)], fill: Color) {
	let Some(((x0, y0), rest)) = points.split_first() else {
		return;
	};

	ctx.begin_path();
	ctx.move_to(*x0, *y0);
	for (x, y) in rest {
		ctx.line_to(*x, *y);
	}
	ctx.close_path();
	ctx.set_fill_style_str(&fill.to_css());
	ctx.fill();
}

fn draw_glow(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	radius: f64,
	focus: (f64, f64),
	stops: &[(f64, Color)],
) {
	let Ok(gradient) = ctx.create_radial_gradient(focus.0, focus.1, 0.0, x, y, radius) else {
		return;
	};
	for (offset, color) in stops {
		let _ = gradient.add_color_stop(offset.clamp(0.0, 1.0) as f32, &color.to_css());
	}

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}
