//! Visual theming for the ambient layer.
//!
//! Provides the color type, the particle palette, and per-effect style values.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Builds a color from hue (degrees), saturation and lightness (0..1).
	pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
		let h = hue.rem_euclid(360.0) / 60.0;
		let s = saturation.clamp(0.0, 1.0);
		let l = lightness.clamp(0.0, 1.0);

		let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
		let x = c * (1.0 - (h % 2.0 - 1.0).abs());
		let (r, g, b) = match h as u32 {
			0 => (c, x, 0.0),
			1 => (x, c, 0.0),
			2 => (0.0, c, x),
			3 => (0.0, x, c),
			4 => (x, 0.0, c),
			_ => (c, 0.0, x),
		};
		let m = l - c / 2.0;
		let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
		Self::rgb(channel(r), channel(g), channel(b))
	}

	/// Same color with alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Scales the existing alpha by `factor`.
	pub fn fade(self, factor: f64) -> Self {
		Self {
			a: (self.a * factor).clamp(0.0, 1.0),
			..self
		}
	}

	/// Linear interpolation between two colors. Used to flatten two-stop
	/// gradients into a single fill.
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	/// Hex for opaque colors, `rgba(…)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fixed palette particles draw their color from.
#[derive(Clone, Debug)]
pub struct ParticlePalette {
	/// Picked by index, wrapping.
	pub colors: Vec<Color>,
}

impl ParticlePalette {
	/// Tailwind 500 accents: blue, violet, pink, cyan, emerald.
	pub fn accents() -> Self {
		Self {
			colors: vec![
				Color::rgb(59, 130, 246),  // Blue
				Color::rgb(139, 92, 246),  // Violet
				Color::rgb(236, 72, 153),  // Pink
				Color::rgb(6, 182, 212),   // Cyan
				Color::rgb(16, 185, 129),  // Emerald
			],
		}
	}

	/// Number of colors.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Whether the palette has no colors.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Color at `index`, wrapping around the palette.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

impl Default for ParticlePalette {
	fn default() -> Self {
		Self::accents()
	}
}

/// Constellation lines and node dots.
#[derive(Clone, Debug)]
pub struct ConstellationStyle {
	/// Wide, faint stroke drawn under each connection
	pub glow_color: Color,
	/// Width of the glow stroke.
	pub glow_width: f64,
	/// Multiplier applied to the per-connection glow opacity
	pub glow_alpha: f64,
	/// Thin stroke drawn over the glow
	pub line_color: Color,
	/// Width of the thin stroke.
	pub line_width: f64,
	/// Multiplier applied to the per-connection line opacity
	pub line_alpha: f64,
	/// Node is drawn as three stacked circles: halo, body, core
	pub halo: (f64, Color),
	/// Radius and color of the middle circle.
	pub body: (f64, Color),
	/// Radius and color of the bright center.
	pub core: (f64, Color),
}

/// Click splash and trail colors.
#[derive(Clone, Debug)]
pub struct SplashStyle {
	/// Gradient stops of the main fluid splash, inside to outside
	pub fluid: [Color; 3],
	/// Bright dot at the click point.
	pub core: Color,
	/// Base hue of the first ripple ring; later rings shift by 30°
	pub ring_hue: f64,
	/// Hue offset of the primary particle burst
	pub burst_hue: f64,
	/// Hue offset of the secondary particle burst
	pub secondary_hue: f64,
	/// Spring-following cursor dot; alpha is its idle opacity.
	pub cursor: Color,
}

/// Scroll-driven decorations and the pointer field.
#[derive(Clone, Debug)]
pub struct ShapeStyle {
	/// Radial gradients of the background mesh, each fading out at half its
	/// radius. Positions are fractions of the viewport.
	pub mesh: [((f64, f64), Color); 3],
	/// Grid lines, already multiplied by the grid layer's opacity.
	pub grid: Color,
	/// Gradient end colors of the top-left and bottom-right blobs.
	pub blobs: [(Color, Color); 2],
	/// Opacity of the blob layer.
	pub blob_alpha: f64,
	/// Gradient end colors of the pointer field dots.
	pub field: (Color, Color),
	/// Blurred orb.
	pub orb: Color,
	/// Triangle fill.
	pub triangle: Color,
	/// Small square fill.
	pub square: Color,
	/// Left helix strand.
	pub helix_left: Color,
	/// Right helix strand.
	pub helix_right: Color,
	/// Twinkling stars.
	pub star: Color,
	/// Drift trail dots.
	pub drift: Color,
	/// Overall alpha of the helix group
	pub helix_alpha: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Preset name, for logging.
	pub name: &'static str,
	/// Constellation lines and nodes.
	pub constellation: ConstellationStyle,
	/// Splashes, trail and cursor.
	pub splash: SplashStyle,
	/// Scroll decorations and pointer field.
	pub shapes: ShapeStyle,
	/// Pointer particle colors.
	pub palette: ParticlePalette,
	/// Maximum particle opacity, reached at full life
	pub particle_opacity: f64,
}

impl Theme {
	/// Indigo constellation over blue/violet accents (default)
	pub fn indigo() -> Self {
		Self {
			name: "indigo",
			constellation: ConstellationStyle {
				glow_color: Color::rgba(99, 102, 241, 0.15),
				glow_width: 2.0,
				glow_alpha: 0.6,
				line_color: Color::rgba(99, 102, 241, 0.4),
				line_width: 1.2,
				line_alpha: 0.7,
				halo: (4.0, Color::rgba(99, 102, 241, 0.1)),
				body: (2.5, Color::rgba(99, 102, 241, 0.5)),
				core: (1.0, Color::rgba(147, 197, 253, 0.6)),
			},
			splash: SplashStyle {
				fluid: [
					Color::rgba(59, 130, 246, 0.8),
					Color::rgba(139, 92, 246, 0.6),
					Color::rgba(236, 72, 153, 0.4),
				],
				core: Color::rgb(255, 255, 255),
				ring_hue: 220.0,
				burst_hue: 180.0,
				secondary_hue: 270.0,
				cursor: Color::rgba(59, 130, 246, 0.9),
			},
			shapes: ShapeStyle {
				mesh: [
					((0.2, 0.5), Color::rgba(59, 130, 246, 0.15)),
					((0.8, 0.2), Color::rgba(139, 92, 246, 0.15)),
					((0.4, 0.8), Color::rgba(236, 72, 153, 0.1)),
				],
				grid: Color::rgba(59, 130, 246, 0.1 * 0.05),
				blobs: [
					(Color::rgba(59, 130, 246, 0.2), Color::rgba(139, 92, 246, 0.1)),
					(Color::rgba(236, 72, 153, 0.2), Color::rgba(59, 130, 246, 0.1)),
				],
				blob_alpha: 0.1,
				field: (Color::rgba(96, 165, 250, 0.2), Color::rgba(168, 85, 247, 0.2)),
				orb: Color::rgba(59, 130, 246, 0.1),
				triangle: Color::rgba(236, 72, 153, 0.1),
				square: Color::rgba(96, 165, 250, 0.1),
				helix_left: Color::rgb(96, 165, 250),
				helix_right: Color::rgb(192, 132, 252),
				star: Color::rgba(59, 130, 246, 0.6),
				drift: Color::rgba(96, 165, 250, 0.4),
				helix_alpha: 0.2,
			},
			palette: ParticlePalette::accents(),
			particle_opacity: 0.6,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::indigo()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hsl_primaries() {
		assert_eq!(Color::hsl(0.0, 1.0, 0.5), Color::rgb(255, 0, 0));
		assert_eq!(Color::hsl(120.0, 1.0, 0.5), Color::rgb(0, 255, 0));
		assert_eq!(Color::hsl(600.0, 1.0, 0.5), Color::rgb(0, 0, 255));
	}

	#[test]
	fn lerp_midpoint() {
		let mid = Color::rgba(0, 100, 200, 0.2).lerp(Color::rgba(100, 200, 0, 0.4), 0.5);
		assert_eq!((mid.r, mid.g, mid.b), (50, 150, 100));
		assert!((mid.a - 0.3).abs() < 1e-12);
	}

	#[test]
	fn css_output() {
		assert_eq!(Color::rgb(59, 130, 246).to_css(), "#3b82f6");
		assert_eq!(
			Color::rgba(99, 102, 241, 0.5).to_css(),
			"rgba(99, 102, 241, 0.5)"
		);
	}
}
