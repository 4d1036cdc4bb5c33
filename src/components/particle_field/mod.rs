//! Animated particle background.
//!
//! A fixed population of particles drifts upward across a full-viewport
//! canvas, pulsing in opacity. Every frame, each pair closer than the link
//! distance is joined by a faint line whose alpha falls off with distance.
//!
//! The all-pairs connection pass is O(n²): about 2.4k pairs for the default
//! 70 particles. Set [`ParticleStyle::spatial_index`] for populations in the
//! hundreds or more.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::components::particle_field::{ParticleCanvas, ParticleStyle};
//!
//! view! { <ParticleCanvas particles=ParticleStyle { count: 120, ..Default::default() } /> }
//! ```

mod component;
mod particles;
mod spatial;
mod style;
mod surface;

pub use component::ParticleCanvas;
pub use particles::{Connection, Particle, ParticleField, connection_alpha};
pub use style::{Color, ParticleStyle};
pub use surface::{CanvasSurface, Surface};
