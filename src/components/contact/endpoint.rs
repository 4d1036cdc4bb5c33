//! Where contact form submissions go.

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, Response};

use super::form::FormFields;

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
	/// The request never got a response.
	#[error("network error: {0}")]
	Transport(String),
	/// The handler answered with a non-2xx status.
	#[error("form handler responded with HTTP {0}")]
	Status(u16),
}

impl From<JsValue> for SubmitError {
	fn from(value: JsValue) -> Self {
		SubmitError::Transport(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Accepts a filled-in form.
#[allow(async_fn_in_trait)]
pub trait Endpoint {
	async fn post(&self, fields: &FormFields) -> Result<(), SubmitError>;
}

/// Posts the form as `multipart/form-data` with `fetch`, asking for a JSON reply.
#[derive(Clone, Debug)]
pub struct FetchEndpoint {
	url: String,
}

impl FetchEndpoint {
	pub fn new(url: impl Into<String>) -> Self {
		Self { url: url.into() }
	}

	fn request(&self, fields: &FormFields) -> Result<Request, JsValue> {
		let body = FormData::new()?;
		for (name, value) in fields.iter() {
			body.append_with_str(name, value)?;
		}
		let headers = Headers::new()?;
		headers.set("Accept", "application/json")?;

		let init = RequestInit::new();
		init.set_method("POST");
		init.set_headers(&headers);
		init.set_body(&body);
		Request::new_with_str_and_init(&self.url, &init)
	}
}

impl Endpoint for FetchEndpoint {
	async fn post(&self, fields: &FormFields) -> Result<(), SubmitError> {
		let window = web_sys::window().ok_or_else(|| SubmitError::Transport("no window".into()))?;
		let request = self.request(fields)?;
		let response: Response = JsFuture::from(window.fetch_with_request(&request))
			.await?
			.dyn_into()?;
		if response.ok() {
			Ok(())
		} else {
			Err(SubmitError::Status(response.status()))
		}
	}
}
