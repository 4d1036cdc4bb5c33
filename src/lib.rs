//! portfolio-fx: the interactive layer of a personal portfolio site.
//!
//! This crate mounts the portfolio page as a WASM client-side app and drives
//! its effects: a particle background with proximity lines, a trailing custom
//! cursor, a scroll-aware navigation bar, a typewriter headline,
//! reveal-on-scroll blocks, count-up stats and a contact form.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};

pub mod components;
pub mod config;
pub mod error;

pub use components::contact::Contact;
pub use components::counter::StatCounter;
pub use components::cursor::Cursor;
pub use components::navbar::{NavLink, Navbar};
pub use components::particle_field::ParticleCanvas;
pub use components::reveal::{Reveal, RevealFrom};
pub use components::typewriter::TypewriterText;
pub use config::SiteConfig;
pub use error::Error;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Wire up behaviours that apply to elements anywhere on the page.
fn attach_page_behaviours(config: &SiteConfig) {
	if let Err(e) = components::navbar::attach_smooth_scroll() {
		warn!("portfolio-fx: smooth scroll unavailable: {}", e);
	}
	if let Err(e) = components::reveal::attach_reveals(&config.reveal) {
		warn!("portfolio-fx: reveal-on-scroll unavailable: {}", e);
	}
	if let Err(e) = components::counter::attach_counters(&config.counter) {
		warn!("portfolio-fx: stat counters unavailable: {}", e);
	}
}

fn nav_links() -> Vec<NavLink> {
	[
		("hero", "Home"),
		("about", "About"),
		("skills", "Skills"),
		("projects", "Projects"),
		("contact", "Contact"),
	]
	.into_iter()
	.map(|(section, label)| NavLink { section, label })
	.collect()
}

/// Main application component.
/// Loads the site configuration from the DOM and renders the portfolio page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = SiteConfig::load();
	let page_config = config.clone();
	Effect::new(move |_| attach_page_behaviours(&page_config));

	let skills = ["Rust", "TypeScript", "React", "WebAssembly", "CSS", "Figma"];

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleCanvas particles=config.particles />
		<Navbar links=nav_links() config=config.navbar />

		<main>
			<section id="hero" class="hero">
				<h1 class="hero-title">"Hi, I'm " <span class="accent">"Alex"</span></h1>
				<p class="hero-subtitle">
					<TypewriterText config=config.typewriter />
					<span class="caret">"|"</span>
				</p>
				<div class="hero-actions">
					<a class="btn btn-primary" href="#projects">"View Work"</a>
					<a class="btn btn-ghost" href="#contact">"Get in Touch"</a>
				</div>
			</section>

			<section id="about" class="about">
				<Reveal from=RevealFrom::Left>
					<h2 class="section-title">"About Me"</h2>
					<p>
						"I design and build fast, accessible interfaces, and I like sweating the details that make them feel alive."
					</p>
				</Reveal>
				<Reveal from=RevealFrom::Right delay_ms=150>
					<div class="stats">
						<StatCounter target=5 label="Years Experience" suffix="+" />
						<StatCounter target=40 label="Projects Shipped" suffix="+" />
						<StatCounter target=12 label="Happy Clients" />
					</div>
				</Reveal>
			</section>

			<section id="skills" class="skills">
				<Reveal>
					<h2 class="section-title">"Skills"</h2>
					<div class="skill-tags">
						{skills.into_iter().map(|s| view! { <span class="skill-tag">{s}</span> }).collect_view()}
					</div>
				</Reveal>
			</section>

			<section id="projects" class="projects">
				<Reveal>
					<h2 class="section-title">"Projects"</h2>
				</Reveal>
				<div class="project-grid">
					<Reveal delay_ms=0>
						<article class="project-card">
							<h3>"Particle Playground"</h3>
							<p>"Interactive canvas experiments compiled to WebAssembly."</p>
						</article>
					</Reveal>
					<Reveal delay_ms=120>
						<article class="project-card">
							<h3>"Design System"</h3>
							<p>"A themeable component library with accessible primitives."</p>
						</article>
					</Reveal>
					<Reveal delay_ms=240>
						<article class="project-card">
							<h3>"Storefront"</h3>
							<p>"Headless e-commerce front end with instant search."</p>
						</article>
					</Reveal>
				</div>
			</section>

			<section id="contact" class="contact">
				<Reveal>
					<h2 class="section-title">"Let's Talk"</h2>
					<Contact config=config.contact />
					<div class="socials">
						<a class="social-btn" href="https://github.com/" target="_blank" rel="noopener">"GitHub"</a>
						<a class="social-btn" href="https://www.linkedin.com/" target="_blank" rel="noopener">"LinkedIn"</a>
					</div>
				</Reveal>
			</section>
		</main>

		<footer class="footer">
			<p>"Built with Rust and Leptos."</p>
		</footer>

		<Cursor config=config.cursor />
	}
}
