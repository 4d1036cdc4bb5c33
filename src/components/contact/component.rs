//! Leptos contact form bound to the [`ContactForm`] state machine.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen_futures::spawn_local;

use super::endpoint::FetchEndpoint;
use super::form::{ContactForm, Feedback, FormHandle, submit};
use crate::components::scheduler::run_after;
use crate::config::ContactConfig;

impl FormHandle for RwSignal<ContactForm> {
	fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
		self.try_update(f)
	}
}

fn notify(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}

/// Name / email / message form posting to the configured form handler.
#[component]
pub fn Contact(#[prop(optional)] config: ContactConfig) -> impl IntoView {
	let form = RwSignal::new(ContactForm::new(&config));
	let endpoint = FetchEndpoint::new(config.endpoint.clone());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let endpoint = endpoint.clone();
		spawn_local(async move {
			match submit(&form, &endpoint).await {
				Some(Feedback::RevertAfter(ms)) => {
					if let Err(e) = run_after(ms, move || form.update(ContactForm::revert)) {
						warn!("portfolio-fx: could not schedule form reset: {}", e);
						form.update(ContactForm::revert);
					}
				}
				Some(Feedback::Notify(message)) => notify(&message),
				None => {}
			}
		});
	};

	let value = move |name: &'static str| move || form.with(|f| f.field(name).to_string());

	view! {
		<form id="contact-form" class="contact-form" on:submit=on_submit>
			<div class="form-row">
				<input
					type="text"
					name="name"
					placeholder="Your name"
					required
					prop:value=value("name")
					on:input=move |ev| form.update(|f| f.set_field("name", event_target_value(&ev)))
				/>
				<input
					type="email"
					name="email"
					placeholder="Your email"
					required
					prop:value=value("email")
					on:input=move |ev| form.update(|f| f.set_field("email", event_target_value(&ev)))
				/>
			</div>
			<textarea
				name="message"
				rows="5"
				placeholder="Your message"
				required
				prop:value=value("message")
				on:input=move |ev| form.update(|f| f.set_field("message", event_target_value(&ev)))
			/>
			<button
				type="submit"
				class="submit-btn"
				class:sent=move || form.with(ContactForm::is_sent)
				disabled=move || form.with(ContactForm::is_busy)
			>
				<span>{move || form.with(|f| f.label().to_string())}</span>
			</button>
		</form>
	}
}
