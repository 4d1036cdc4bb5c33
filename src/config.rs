//! Site configuration embedded in the page.
//!
//! The page may carry a `<script id="site-config" type="application/json">`
//! element. Every field is optional; anything left out keeps the default
//! below, so an absent element simply yields [`SiteConfig::default`].

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::components::particle_field::ParticleStyle;

/// Element id the configuration is read from.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Complete configuration for every interactive component on the page.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	pub particles: ParticleStyle,
	pub cursor: CursorConfig,
	pub navbar: NavbarConfig,
	pub typewriter: TypewriterConfig,
	pub reveal: RevealConfig,
	pub counter: CounterConfig,
	pub contact: ContactConfig,
}

/// Cursor follower tuning.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
	/// Fraction of the remaining distance the outline covers each frame.
	pub smoothing: f64,
}

impl Default for CursorConfig {
	fn default() -> Self {
		Self { smoothing: 0.15 }
	}
}

/// Scroll thresholds for the navigation bar.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
	/// Scroll offset (px) past which the bar turns compact.
	pub compact_after: f64,
	/// A section becomes active this many px before its top reaches the viewport top.
	pub section_offset: f64,
}

impl Default for NavbarConfig {
	fn default() -> Self {
		Self {
			compact_after: 50.0,
			section_offset: 200.0,
		}
	}
}

/// Phrases and timings for the hero typewriter.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
	pub phrases: Vec<String>,
	pub type_ms: u32,
	pub delete_ms: u32,
	/// Pause with the full phrase shown.
	pub hold_ms: u32,
	/// Pause with the empty string shown before the next phrase.
	pub gap_ms: u32,
}

impl Default for TypewriterConfig {
	fn default() -> Self {
		Self {
			phrases: [
				"Web Developer & Designer",
				"React Enthusiast",
				"UI/UX Craftsman",
				"Open to Opportunities",
			]
			.into_iter()
			.map(String::from)
			.collect(),
			type_ms: 90,
			delete_ms: 50,
			hold_ms: 2000,
			gap_ms: 400,
		}
	}
}

/// Intersection settings for reveal-on-scroll elements.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	pub threshold: f64,
	pub root_margin: String,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			threshold: 0.12,
			root_margin: "0px 0px -60px 0px".to_string(),
		}
	}
}

/// Count-up animation settings for stat counters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
	pub duration_ms: u32,
	pub threshold: f64,
}

impl Default for CounterConfig {
	fn default() -> Self {
		Self {
			duration_ms: 1200,
			threshold: 0.5,
		}
	}
}

/// Contact form endpoint and feedback text.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
	/// Form handler URL the message is POSTed to.
	pub endpoint: String,
	pub submit_label: String,
	pub sending_label: String,
	pub success_label: String,
	pub failure_message: String,
	/// How long the success label stays before the button resets.
	pub revert_ms: u32,
}

impl Default for ContactConfig {
	fn default() -> Self {
		Self {
			endpoint: "https://formspree.io/f/your-form-id".to_string(),
			submit_label: "Send Message".to_string(),
			sending_label: "Sending…".to_string(),
			success_label: "✓ Message Sent!".to_string(),
			failure_message: "Failed to send. Please try again or email directly.".to_string(),
			revert_ms: 3500,
		}
	}
}

impl SiteConfig {
	/// Parse configuration from JSON text. Unknown keys are ignored.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Load configuration from the page, falling back to defaults.
	pub fn load() -> Self {
		let Some(text) = read_config_element() else {
			return Self::default();
		};

		match Self::from_json(&text) {
			Ok(config) => {
				info!(
					"portfolio-fx: loaded site config ({} particles, {} phrases)",
					config.particles.count,
					config.typewriter.phrases.len()
				);
				config
			}
			Err(e) => {
				warn!("portfolio-fx: failed to parse site config: {}", e);
				Self::default()
			}
		}
	}
}

fn read_config_element() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_yields_defaults() {
		let config = SiteConfig::from_json("{}").unwrap();
		assert_eq!(config.particles.count, 70);
		assert_eq!(config.typewriter.phrases.len(), 4);
		assert_eq!(config.contact.revert_ms, 3500);
		assert_eq!(config.navbar.compact_after, 50.0);
	}

	#[test]
	fn partial_sections_keep_remaining_defaults() {
		let config = SiteConfig::from_json(
			r##"{
				"particles": { "count": 12, "color": "#ff0000" },
				"typewriter": { "phrases": ["A", "BB"] },
				"contact": { "endpoint": "https://example.test/f/abc" }
			}"##,
		)
		.unwrap();

		assert_eq!(config.particles.count, 12);
		assert_eq!(config.particles.color.r, 255);
		assert_eq!(config.particles.link_distance, 120.0);
		assert_eq!(config.typewriter.phrases, vec!["A", "BB"]);
		assert_eq!(config.typewriter.hold_ms, 2000);
		assert_eq!(config.contact.endpoint, "https://example.test/f/abc");
		assert_eq!(config.contact.sending_label, "Sending…");
	}

	#[test]
	fn malformed_color_is_rejected() {
		assert!(SiteConfig::from_json(r#"{ "particles": { "color": "blue-ish" } }"#).is_err());
	}
}
