//! Browser schedulers that drive the component state machines.
//!
//! State machines in this crate never reschedule themselves. They expose a
//! step function, and the loops here call it: once per display refresh, or
//! after whatever delay the previous step asked for.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::error::{Error, Result};

type SharedCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn window() -> Result<Window> {
	web_sys::window().ok_or(Error::MissingElement("window"))
}

/// Call `frame` once per animation frame, for the life of the page.
pub fn start_frame_loop(mut frame: impl FnMut() + 'static) -> Result<()> {
	let animate: SharedCallback = Rc::new(RefCell::new(None));
	let animate_inner = animate.clone();

	*animate.borrow_mut() = Some(Closure::new(move || {
		frame();
		if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));

	if let Some(ref cb) = *animate.borrow() {
		window()?.request_animation_frame(cb.as_ref().unchecked_ref())?;
	}
	Ok(())
}

/// Call `step` after `first_delay_ms`, then again after each delay it
/// returns. Stops once it returns `None`.
pub fn start_timer_loop(first_delay_ms: u32, mut step: impl FnMut() -> Option<u32> + 'static) -> Result<()> {
	let tick: SharedCallback = Rc::new(RefCell::new(None));
	let tick_inner = tick.clone();

	*tick.borrow_mut() = Some(Closure::new(move || {
		let Some(delay) = step() else {
			return;
		};
		if let Some(cb) = &*tick_inner.borrow() {
			let _ = schedule(cb, delay);
		}
	}));

	if let Some(ref cb) = *tick.borrow() {
		schedule(cb, first_delay_ms)?;
	}
	Ok(())
}

fn schedule(cb: &Closure<dyn FnMut()>, delay_ms: u32) -> Result<()> {
	window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
		cb.as_ref().unchecked_ref(),
		delay_ms.min(i32::MAX as u32) as i32,
	)?;
	Ok(())
}

/// Run `f` once after `delay_ms`.
pub fn run_after(delay_ms: u32, f: impl FnOnce() + 'static) -> Result<()> {
	let cb = Closure::once_into_js(f);
	window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
		cb.unchecked_ref(),
		delay_ms.min(i32::MAX as u32) as i32,
	)?;
	Ok(())
}
