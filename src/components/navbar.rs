//! Navigation bar: compact-on-scroll, active section link, mobile menu and
//! smooth in-page scrolling.

use leptos::ev;
use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::NavbarConfig;
use crate::error::{Error, Result};

/// A page section as seen by the scroll tracker.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
	pub id: String,
	/// Offset of the section's top edge from the document top (px).
	pub top: f64,
}

/// Scroll-derived navigation state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
	compact: bool,
	active: Option<String>,
	compact_after: f64,
	section_offset: f64,
}

impl NavState {
	pub fn new(config: &NavbarConfig) -> Self {
		Self {
			compact_after: config.compact_after,
			section_offset: config.section_offset,
			..Self::default()
		}
	}

	/// Recompute from the current scroll offset. `sections` are in document order.
	pub fn on_scroll(&mut self, scroll_y: f64, sections: &[Section]) {
		self.compact = scroll_y > self.compact_after;
		self.active = sections
			.iter()
			.rev()
			.find(|s| scroll_y >= s.top - self.section_offset)
			.map(|s| s.id.clone());
	}

	pub fn compact(&self) -> bool {
		self.compact
	}

	pub fn active(&self) -> Option<&str> {
		self.active.as_deref()
	}

	pub fn is_active(&self, id: &str) -> bool {
		self.active() == Some(id)
	}
}

/// Mobile menu open/closed state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
	open: bool,
}

impl MenuState {
	pub fn toggle(&mut self) {
		self.open = !self.open;
	}

	pub fn close(&mut self) {
		self.open = false;
	}

	pub fn is_open(&self) -> bool {
		self.open
	}
}

/// The element id an in-page link points at, if it is one.
pub fn anchor_target(href: &str) -> Option<&str> {
	href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// A navigation entry linking to a page section.
#[derive(Clone, Debug)]
pub struct NavLink {
	pub section: &'static str,
	pub label: &'static str,
}

#[component]
pub fn Navbar(links: Vec<NavLink>, #[prop(optional)] config: NavbarConfig) -> impl IntoView {
	let nav = RwSignal::new(NavState::new(&config));
	let menu = RwSignal::new(MenuState::default());

	let _ = window_event_listener(ev::scroll, move |_| {
		let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
			return;
		};
		let sections = page_sections();
		nav.update(|n| n.on_scroll(scroll_y, &sections));
	});

	Effect::new(move |_| lock_body_scroll(menu.with(MenuState::is_open)));

	let items = links
		.into_iter()
		.map(|link| {
			let href = format!("#{}", link.section);
			view! {
				<li>
					<a
						class="nav-link"
						href=href
						class:active=move || nav.with(|n| n.is_active(link.section))
						on:click=move |_| menu.update(MenuState::close)
					>
						{link.label}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<nav id="navbar" class="navbar" class:scrolled=move || nav.with(NavState::compact)>
			<a class="nav-logo" href="#hero">"Portfolio"</a>
			<ul id="nav-menu" class="nav-menu" class:open=move || menu.with(MenuState::is_open)>
				{items}
			</ul>
			<button
				id="hamburger"
				class="hamburger"
				aria-label="Toggle menu"
				class:open=move || menu.with(MenuState::is_open)
				on:click=move |_| menu.update(MenuState::toggle)
			>
				<span />
				<span />
				<span />
			</button>
		</nav>
	}
}

fn page_document() -> Result<Document> {
	web_sys::window()
		.and_then(|w| w.document())
		.ok_or(Error::MissingElement("document"))
}

fn page_sections() -> Vec<Section> {
	let Ok(nodes) = page_document().and_then(|d| Ok(d.query_selector_all("section[id]")?)) else {
		return Vec::new();
	};
	(0..nodes.length())
		.filter_map(|i| nodes.item(i)?.dyn_into::<HtmlElement>().ok())
		.map(|el| Section {
			id: el.id(),
			top: el.offset_top() as f64,
		})
		.collect()
}

fn lock_body_scroll(locked: bool) {
	let Some(body) = page_document().ok().and_then(|d| d.body()) else {
		return;
	};
	let _ = body
		.style()
		.set_property("overflow", if locked { "hidden" } else { "" });
}

/// Make every in-page anchor scroll smoothly to its target.
///
/// Anchors whose target does not exist keep their default behaviour.
pub fn attach_smooth_scroll() -> Result<u32> {
	let anchors = page_document()?.query_selector_all("a[href^=\"#\"]")?;
	let mut attached = 0;
	for i in 0..anchors.length() {
		let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
			continue;
		};
		let href = anchor.get_attribute("href").unwrap_or_default();
		let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
			let target = anchor_target(&href).and_then(|id| page_document().ok()?.get_element_by_id(id));
			let Some(target) = target else {
				debug!("portfolio-fx: no scroll target for {:?}", href);
				return;
			};
			e.prevent_default();
			let options = ScrollIntoViewOptions::new();
			options.set_behavior(ScrollBehavior::Smooth);
			options.set_block(ScrollLogicalPosition::Start);
			target.scroll_into_view_with_scroll_into_view_options(&options);
		});
		anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
		on_click.forget();
		attached += 1;
	}
	info!("portfolio-fx: smooth scroll on {} anchors", attached);
	Ok(attached)
}
