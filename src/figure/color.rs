//! Marker colors for figure building.

use rand::Rng;

/// RGB color, carried into figures in CSS hex form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Construct from channel values.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Uniform random color. The figure builder draws one per community on
	/// every build, so the same community recolors across renders.
	pub fn random(rng: &mut impl Rng) -> Self {
		Self {
			r: rng.gen_range(0..=255),
			g: rng.gen_range(0..=255),
			b: rng.gen_range(0..=255),
		}
	}

	/// Six-hex-digit CSS form, e.g. `#5e81ac`.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_form_is_six_hex_digits() {
		assert_eq!(Color::rgb(94, 129, 172).to_css_rgb(), "#5e81ac");
		assert_eq!(Color::rgb(0, 0, 0).to_css_rgb(), "#000000");
		assert_eq!(Color::rgb(255, 255, 255).to_css_rgb(), "#ffffff");
	}

	#[test]
	fn random_color_round_trips_format() {
		let mut rng = rand::thread_rng();
		let css = Color::random(&mut rng).to_css_rgb();
		assert_eq!(css.len(), 7);
		assert!(css.starts_with('#'));
		assert!(css[1..].chars().all(|c| c.is_ascii_hexdigit()));
	}
}
