//! Error types for component initialisation.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring a component to the page.
///
/// None of these are recoverable at runtime: the affected component logs the
/// error and stays inert, the rest of the page keeps working.
#[derive(Debug, Error)]
pub enum Error {
	/// A required element (window, document, canvas, ...) is not present.
	#[error("missing element: {0}")]
	MissingElement(&'static str),
	/// The canvas refused to hand out a 2D rendering context.
	#[error("canvas has no 2d drawing context")]
	NoDrawingContext,
	/// A DOM call threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Error::Js(
			value
				.as_string()
				.unwrap_or_else(|| format!("{value:?}")),
		)
	}
}

/// Convenience alias used by the DOM glue.
pub type Result<T> = std::result::Result<T, Error>;
