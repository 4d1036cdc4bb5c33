//! Contact form submission.
//!
//! Submitting disables the button and posts the fields to a form handler.
//! On success the button shows a confirmation and the fields clear until a
//! fixed delay has passed. Any failure, network or HTTP, restores the button
//! at once and raises a single alert.

mod component;
mod endpoint;
mod form;

pub use component::Contact;
pub use endpoint::{Endpoint, FetchEndpoint, SubmitError};
pub use form::{ContactForm, Feedback, FormFields, FormHandle, Phase, submit};
