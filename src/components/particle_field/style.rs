//! Colours and visual style for the particle field.

use serde::Deserialize;

/// Opaque RGB colour. Transparency is applied per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}

	/// Parses `#rgb` or `#rrggbb` hex notation.
	pub fn from_hex(s: &str) -> Option<Self> {
		let hex = s.strip_prefix('#')?;
		let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
		match hex.len() {
			6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
			3 => {
				let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
				Some(Self::rgb(short(0)?, short(1)?, short(2)?))
			}
			_ => None,
		}
	}
}

impl TryFrom<String> for Color {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Color::from_hex(value.trim()).ok_or_else(|| format!("invalid hex color: {value:?}"))
	}
}

/// Particle effect configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Number of particles. Fixed for the lifetime of a field.
	pub count: usize,
	/// Fill colour for particles and connection lines.
	pub color: Color,
	/// Pairs closer than this (px) are connected.
	pub link_distance: f64,
	/// Alpha of a connection between coincident particles.
	pub link_alpha: f64,
	/// Stroke width of connection lines.
	pub link_width: f64,
	/// Bucket particles into a grid before the connection pass.
	pub spatial_index: bool,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 70,
			color: Color::rgb(0, 212, 255),
			link_distance: 120.0,
			link_alpha: 0.12,
			link_width: 0.6,
			spatial_index: false,
		}
	}
}
