//! Contact form state machine.
//!
//! ```text
//! Idle --begin--> Sending --complete(Ok)--> Sent --revert--> Idle
//!                    |
//!                    +--complete(Err)--> Idle (+ one failure notice)
//! ```
//!
//! The state never touches the network or the DOM. [`submit`] strings the
//! transitions around an [`Endpoint`] call, and the caller acts on the
//! returned [`Feedback`].

use std::cell::RefCell;

use log::{info, warn};

use super::endpoint::{Endpoint, SubmitError};
use crate::config::ContactConfig;

/// Named form values, in the order they were first set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
	pub fn set(&mut self, name: &str, value: impl Into<String>) {
		let value = value.into();
		match self.0.iter_mut().find(|(n, _)| n == name) {
			Some((_, v)) => *v = value,
			None => self.0.push((name.to_string(), value)),
		}
	}

	/// Value of `name`, empty if never set.
	pub fn get(&self, name: &str) -> &str {
		self.0
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
			.unwrap_or("")
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
	}

	/// Blank every value, like a form reset.
	pub fn clear(&mut self) {
		for (_, v) in &mut self.0 {
			v.clear();
		}
	}

	pub fn is_blank(&self) -> bool {
		self.0.iter().all(|(_, v)| v.is_empty())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Sending,
	Sent,
}

/// What the caller has to do after a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
	/// Call [`ContactForm::revert`] after this many milliseconds.
	RevertAfter(u32),
	/// Tell the user the message was not sent.
	Notify(String),
}

/// Submit-button label, enabled state and field values of the contact form.
#[derive(Clone, Debug)]
pub struct ContactForm {
	fields: FormFields,
	phase: Phase,
	config: ContactConfig,
}

impl ContactForm {
	pub fn new(config: &ContactConfig) -> Self {
		Self {
			fields: FormFields::default(),
			phase: Phase::Idle,
			config: config.clone(),
		}
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn fields(&self) -> &FormFields {
		&self.fields
	}

	pub fn field(&self, name: &str) -> &str {
		self.fields.get(name)
	}

	pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
		self.fields.set(name, value);
	}

	pub fn label(&self) -> &str {
		match self.phase {
			Phase::Idle => &self.config.submit_label,
			Phase::Sending => &self.config.sending_label,
			Phase::Sent => &self.config.success_label,
		}
	}

	/// The submit control is disabled while sending and while the success label shows.
	pub fn is_busy(&self) -> bool {
		self.phase != Phase::Idle
	}

	pub fn is_sent(&self) -> bool {
		self.phase == Phase::Sent
	}

	/// Start sending. Returns the values to post, or `None` if already busy.
	pub fn begin(&mut self) -> Option<FormFields> {
		if self.is_busy() {
			return None;
		}
		self.phase = Phase::Sending;
		Some(self.fields.clone())
	}

	/// Settle a submission started with [`begin`](Self::begin).
	pub fn complete(&mut self, result: Result<(), SubmitError>) -> Option<Feedback> {
		if self.phase != Phase::Sending {
			return None;
		}
		match result {
			Ok(()) => {
				info!("portfolio-fx: contact message sent");
				self.phase = Phase::Sent;
				self.fields.clear();
				Some(Feedback::RevertAfter(self.config.revert_ms))
			}
			Err(e) => {
				warn!("portfolio-fx: contact message failed: {}", e);
				self.phase = Phase::Idle;
				Some(Feedback::Notify(self.config.failure_message.clone()))
			}
		}
	}

	/// Back to idle after a success.
	pub fn revert(&mut self) {
		if self.phase == Phase::Sent {
			self.phase = Phase::Idle;
		}
	}
}

/// Shared, mutable access to a [`ContactForm`].
pub trait FormHandle {
	/// Run `f` on the form, or return `None` if it is gone.
	fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormHandle for RefCell<ContactForm> {
	fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
		Some(f(&mut self.borrow_mut()))
	}
}

/// Begin, post and complete one submission.
///
/// The form is only borrowed around each transition, never across the
/// network call. Returns `None` if a submission is already in flight.
pub async fn submit(form: &impl FormHandle, endpoint: &impl Endpoint) -> Option<Feedback> {
	let fields = form.with_form(ContactForm::begin).flatten()?;
	let result = endpoint.post(&fields).await;
	form.with_form(|f| f.complete(result)).flatten()
}

#[cfg(test)]
mod tests {
	use std::cell::{Cell, RefCell};

	use super::*;

	/// Answers every post with a fixed HTTP status, or a transport failure.
	struct MockEndpoint {
		status: Option<u16>,
		posts: Cell<usize>,
		last: RefCell<Option<FormFields>>,
	}

	impl MockEndpoint {
		fn status(status: u16) -> Self {
			Self {
				status: Some(status),
				posts: Cell::new(0),
				last: RefCell::new(None),
			}
		}

		fn offline() -> Self {
			Self {
				status: None,
				..Self::status(0)
			}
		}
	}

	impl Endpoint for MockEndpoint {
		async fn post(&self, fields: &FormFields) -> Result<(), SubmitError> {
			self.posts.set(self.posts.get() + 1);
			*self.last.borrow_mut() = Some(fields.clone());
			match self.status {
				Some(s) if (200..300).contains(&s) => Ok(()),
				Some(s) => Err(SubmitError::Status(s)),
				None => Err(SubmitError::Transport("connection refused".into())),
			}
		}
	}

	fn filled_form() -> RefCell<ContactForm> {
		let mut form = ContactForm::new(&ContactConfig::default());
		form.set_field("name", "Ada");
		form.set_field("email", "ada@example.com");
		form.set_field("message", "Hello!");
		RefCell::new(form)
	}

	#[test]
	fn fields_keep_insertion_order_and_overwrite_in_place() {
		let mut fields = FormFields::default();
		fields.set("name", "A");
		fields.set("email", "b@c");
		fields.set("name", "Ada");
		assert_eq!(fields.iter().collect::<Vec<_>>(), vec![("name", "Ada"), ("email", "b@c")]);
		assert_eq!(fields.get("missing"), "");
		fields.clear();
		assert!(fields.is_blank());
		assert_eq!(fields.iter().count(), 2);
	}

	#[test]
	fn successful_submit_shows_success_then_reverts() {
		let form = filled_form();
		let endpoint = MockEndpoint::status(200);

		let feedback = pollster::block_on(submit(&form, &endpoint));

		assert_eq!(feedback, Some(Feedback::RevertAfter(3500)));
		assert_eq!(endpoint.posts.get(), 1);
		let sent = endpoint.last.borrow().clone().unwrap();
		assert_eq!(sent.get("email"), "ada@example.com");

		let mut form = form.into_inner();
		assert_eq!(form.label(), "✓ Message Sent!");
		assert!(form.is_busy());
		assert!(form.fields().is_blank());

		form.revert();
		assert_eq!(form.label(), "Send Message");
		assert!(!form.is_busy());
	}

	#[test]
	fn server_error_restores_the_label_immediately_and_notifies_once() {
		let form = filled_form();
		let feedback = pollster::block_on(submit(&form, &MockEndpoint::status(500)));

		assert_eq!(
			feedback,
			Some(Feedback::Notify(
				"Failed to send. Please try again or email directly.".to_string()
			))
		);
		let form = form.into_inner();
		assert_eq!(form.label(), "Send Message");
		assert!(!form.is_busy());
		assert_eq!(form.field("message"), "Hello!");
	}

	#[test]
	fn network_failure_takes_the_same_path() {
		let form = filled_form();
		let feedback = pollster::block_on(submit(&form, &MockEndpoint::offline()));
		assert!(matches!(feedback, Some(Feedback::Notify(_))));
		assert_eq!(form.borrow().phase(), Phase::Idle);
	}

	#[test]
	fn second_submit_while_busy_is_ignored() {
		let form = filled_form();
		let endpoint = MockEndpoint::status(200);

		let fields = form.borrow_mut().begin();
		assert!(fields.is_some());
		assert_eq!(form.borrow().label(), "Sending…");
		assert!(form.borrow().is_busy());

		assert_eq!(pollster::block_on(submit(&form, &endpoint)), None);
		assert_eq!(endpoint.posts.get(), 0);
	}

	#[test]
	fn complete_without_begin_is_a_no_op() {
		let mut form = ContactForm::new(&ContactConfig::default());
		assert_eq!(form.complete(Ok(())), None);
		assert_eq!(form.phase(), Phase::Idle);
		form.revert();
		assert_eq!(form.phase(), Phase::Idle);
	}

	#[test]
	fn submit_error_messages() {
		assert_eq!(
			SubmitError::Status(503).to_string(),
			"form handler responded with HTTP 503"
		);
		assert_eq!(
			SubmitError::Transport("offline".into()).to_string(),
			"network error: offline"
		);
	}
}
