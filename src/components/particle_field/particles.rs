//! Drifting, pulsing background particles and their proximity graph.
//!
//! The population is fixed at construction. Particles rise from the bottom
//! of the surface; once one leaves past the top edge it is re-rolled just
//! below the bottom edge instead of being dropped, so nothing is allocated
//! after start-up.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::spatial::Grid;
use super::style::ParticleStyle;
use super::surface::Surface;

/// Particles above this y have left the surface.
const EXIT_Y: f64 = -10.0;
/// Respawned particles start this far below the bottom edge.
const RESPAWN_BELOW: f64 = 10.0;
const OPACITY_LOW: f64 = 0.05;
const OPACITY_HIGH: f64 = 0.65;

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub vx: f64,
	/// Always negative: particles only rise.
	pub vy: f64,
	pub opacity: f64,
	/// Signed opacity step per tick. Flips at the pulse bounds.
	pub fade: f64,
}

impl Particle {
	/// Roll a fresh particle at `(x, y)`.
	fn roll(rng: &mut impl Rng, x: f64, y: f64) -> Self {
		let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
		Self {
			x,
			y,
			radius: rng.gen_range(0.4..2.2),
			vx: rng.gen_range(-0.15..0.15),
			vy: -rng.gen_range(0.15..0.55),
			opacity: rng.gen_range(0.1..0.6),
			fade: rng.gen_range(0.001..0.005) * sign,
		}
	}

	/// A particle placed anywhere on a `width` x `height` surface.
	pub fn scattered(rng: &mut impl Rng, width: f64, height: f64) -> Self {
		let (x, y) = (uniform(rng, width), uniform(rng, height));
		Self::roll(rng, x, y)
	}

	/// Re-roll in place: random column, just below the bottom edge.
	pub fn respawn(&mut self, rng: &mut impl Rng, width: f64, height: f64) {
		let x = uniform(rng, width);
		*self = Self::roll(rng, x, height + RESPAWN_BELOW);
	}

	/// Advance one frame.
	pub fn update(&mut self, rng: &mut impl Rng, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;
		self.opacity += self.fade;
		if self.opacity <= OPACITY_LOW || self.opacity >= OPACITY_HIGH {
			self.fade = -self.fade;
		}
		if self.y < EXIT_Y {
			self.respawn(rng, width, height);
		}
	}
}

/// `[0, extent)`, or 0 for a collapsed surface.
fn uniform(rng: &mut impl Rng, extent: f64) -> f64 {
	if extent > 0.0 {
		rng.gen_range(0.0..extent)
	} else {
		0.0
	}
}

/// A line between two particles closer than the link distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub a: usize,
	pub b: usize,
	pub alpha: f64,
}

/// Alpha of the line joining `p` and `q`, or `None` if they are too far apart.
///
/// Fades linearly from `link_alpha` for coincident particles to zero at
/// `link_distance`.
pub fn connection_alpha(p: &Particle, q: &Particle, link_distance: f64, link_alpha: f64) -> Option<f64> {
	let (dx, dy) = (p.x - q.x, p.y - q.y);
	let dist = (dx * dx + dy * dy).sqrt();
	(dist < link_distance).then(|| ((1.0 - dist / link_distance) * link_alpha).max(0.0))
}

/// Owns the particle population and renders it each frame.
pub struct ParticleField {
	particles: Vec<Particle>,
	style: ParticleStyle,
	rng: SmallRng,
}

impl ParticleField {
	pub fn new(style: ParticleStyle, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = SmallRng::seed_from_u64(seed);
		let particles = (0..style.count)
			.map(|_| Particle::scattered(&mut rng, width, height))
			.collect();
		Self {
			particles,
			style,
			rng,
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	#[cfg(test)]
	pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Move every particle one frame on a surface of the given size.
	pub fn update(&mut self, width: f64, height: f64) {
		for p in &mut self.particles {
			p.update(&mut self.rng, width, height);
		}
	}

	/// All connected pairs at the current positions, ordered by `(a, b)`.
	pub fn connections(&self) -> Vec<Connection> {
		let (distance, alpha) = (self.style.link_distance, self.style.link_alpha);
		let connect = |a: usize, b: usize| {
			connection_alpha(&self.particles[a], &self.particles[b], distance, alpha)
				.map(|alpha| Connection { a, b, alpha })
		};

		// Nothing can be closer than a non-positive distance, and the grid
		// needs a positive cell size.
		if distance.is_nan() || distance <= 0.0 {
			return Vec::new();
		}

		if self.style.spatial_index {
			let grid = Grid::build(self.particles.iter().map(|p| (p.x, p.y)), distance);
			grid.candidate_pairs()
				.into_iter()
				.filter_map(|(a, b)| connect(a, b))
				.collect()
		} else {
			let n = self.particles.len();
			(0..n)
				.flat_map(|a| (a + 1..n).map(move |b| (a, b)))
				.filter_map(|(a, b)| connect(a, b))
				.collect()
		}
	}

	/// Draw particles, then connections, without moving anything.
	pub fn draw(&self, surface: &mut impl Surface) {
		let color = self.style.color;
		for p in &self.particles {
			surface.fill_circle(p.x, p.y, p.radius, color, p.opacity.max(0.0));
		}
		for c in self.connections() {
			let (p, q) = (&self.particles[c.a], &self.particles[c.b]);
			surface.stroke_line((p.x, p.y), (q.x, q.y), color, c.alpha, self.style.link_width);
		}
	}

	/// One animation frame: clear, move everything, then draw.
	pub fn tick(&mut self, surface: &mut impl Surface) {
		let (width, height) = (surface.width(), surface.height());
		surface.clear();
		self.update(width, height);
		self.draw(surface);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::style::Color;

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear,
		Circle { alpha: f64 },
		Line { alpha: f64, width: f64 },
	}

	struct Recorder {
		width: f64,
		height: f64,
		ops: Vec<Op>,
	}

	impl Recorder {
		fn new(width: f64, height: f64) -> Self {
			Self {
				width,
				height,
				ops: Vec::new(),
			}
		}
	}

	impl Surface for Recorder {
		fn width(&self) -> f64 {
			self.width
		}
		fn height(&self) -> f64 {
			self.height
		}
		fn clear(&mut self) {
			self.ops.push(Op::Clear);
		}
		fn fill_circle(&mut self, _: f64, _: f64, _: f64, _: Color, alpha: f64) {
			self.ops.push(Op::Circle { alpha });
		}
		fn stroke_line(&mut self, _: (f64, f64), _: (f64, f64), _: Color, alpha: f64, width: f64) {
			self.ops.push(Op::Line { alpha, width });
		}
	}

	fn particle_at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			radius: 1.0,
			vx: 0.0,
			vy: -0.2,
			opacity: 0.3,
			fade: 0.002,
		}
	}

	#[test]
	fn construction_respects_bounds() {
		let field = ParticleField::new(ParticleStyle::default(), 800.0, 600.0, 7);
		assert_eq!(field.len(), 70);
		for p in field.particles() {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((0.4..2.2).contains(&p.radius));
			assert!((-0.15..0.15).contains(&p.vx));
			assert!(p.vy < 0.0 && p.vy >= -0.55);
			assert!(p.opacity > 0.0 && p.opacity < 1.0);
			assert!((0.001..0.005).contains(&p.fade.abs()));
		}
	}

	#[test]
	fn population_is_constant_across_ticks() {
		let mut field = ParticleField::new(ParticleStyle::default(), 320.0, 200.0, 1);
		let mut surface = Recorder::new(320.0, 200.0);
		// Enough frames for every particle to cross the surface several times.
		for _ in 0..5_000 {
			field.tick(&mut surface);
			surface.ops.clear();
		}
		assert_eq!(field.len(), 70);
	}

	#[test]
	fn particle_leaving_the_top_respawns_below_the_bottom() {
		let mut field = ParticleField::new(ParticleStyle::default(), 400.0, 300.0, 3);
		field.particles_mut()[0].y = -10.5;
		field.update(400.0, 300.0);

		let p = &field.particles()[0];
		assert!(p.y >= 300.0 && p.y < 320.0, "y = {}", p.y);
		assert!((0.0..400.0).contains(&p.x), "x = {}", p.x);
		assert!(p.vy < 0.0);
	}

	#[test]
	fn horizontal_drift_is_never_wrapped() {
		let mut rng = SmallRng::seed_from_u64(0);
		let mut p = particle_at(-50.0, 100.0);
		p.vx = -0.1;
		p.update(&mut rng, 400.0, 300.0);
		assert!(p.x < -50.0);
		assert!((p.y - 99.8).abs() < 1e-9);
	}

	#[test]
	fn opacity_turns_around_at_the_upper_bound() {
		let mut rng = SmallRng::seed_from_u64(0);
		let mut p = particle_at(10.0, 100.0);
		p.opacity = 0.648;
		p.fade = 0.004;
		p.update(&mut rng, 400.0, 300.0);
		assert!(p.opacity >= 0.65);
		assert!(p.fade < 0.0);

		p.update(&mut rng, 400.0, 300.0);
		assert!(p.opacity < 0.65);
	}

	#[test]
	fn opacity_turns_around_at_the_lower_bound() {
		let mut rng = SmallRng::seed_from_u64(0);
		let mut p = particle_at(10.0, 100.0);
		p.opacity = 0.052;
		p.fade = -0.004;
		p.update(&mut rng, 400.0, 300.0);
		assert!(p.fade > 0.0);
	}

	#[test]
	fn connection_is_symmetric() {
		let p = particle_at(10.0, 20.0);
		let q = particle_at(70.0, 95.0);
		assert_eq!(
			connection_alpha(&p, &q, 120.0, 0.12),
			connection_alpha(&q, &p, 120.0, 0.12)
		);
	}

	#[test]
	fn connection_alpha_falls_off_linearly_to_the_threshold() {
		let origin = particle_at(0.0, 0.0);

		let near = particle_at(60.0, 0.0);
		let alpha = connection_alpha(&origin, &near, 120.0, 0.12).unwrap();
		assert!((alpha - 0.06).abs() < 1e-12);

		let coincident = particle_at(0.0, 0.0);
		assert_eq!(connection_alpha(&origin, &coincident, 120.0, 0.12), Some(0.12));

		let at_threshold = particle_at(120.0, 0.0);
		assert_eq!(connection_alpha(&origin, &at_threshold, 120.0, 0.12), None);

		let far = particle_at(90.0, 90.0);
		assert_eq!(connection_alpha(&origin, &far, 120.0, 0.12), None);
	}

	#[test]
	fn tick_clears_then_draws_particles_before_connections() {
		let style = ParticleStyle {
			count: 2,
			..ParticleStyle::default()
		};
		let mut field = ParticleField::new(style, 200.0, 200.0, 11);
		for (p, x) in field.particles_mut().iter_mut().zip([50.0, 60.0]) {
			*p = particle_at(x, 100.0);
		}

		let mut surface = Recorder::new(200.0, 200.0);
		field.tick(&mut surface);

		assert_eq!(surface.ops.len(), 4);
		assert_eq!(surface.ops[0], Op::Clear);
		assert!(matches!(surface.ops[1], Op::Circle { .. }));
		assert!(matches!(surface.ops[2], Op::Circle { .. }));
		let Op::Line { alpha, width } = surface.ops[3] else {
			panic!("expected a connection, got {:?}", surface.ops[3]);
		};
		// Connection uses post-update positions: both moved up by 0.2, still 10 apart.
		assert!((alpha - (1.0 - 10.0 / 120.0) * 0.12).abs() < 1e-12);
		assert_eq!(width, 0.6);
	}

	#[test]
	fn negative_opacity_is_drawn_transparent() {
		let style = ParticleStyle {
			count: 1,
			..ParticleStyle::default()
		};
		let mut field = ParticleField::new(style, 200.0, 200.0, 5);
		field.particles_mut()[0] = Particle {
			opacity: -0.01,
			..particle_at(10.0, 10.0)
		};
		let mut surface = Recorder::new(200.0, 200.0);
		field.draw(&mut surface);
		assert_eq!(surface.ops, vec![Op::Circle { alpha: 0.0 }]);
	}

	#[test]
	fn spatial_index_matches_all_pairs() {
		let style = ParticleStyle {
			count: 300,
			..ParticleStyle::default()
		};
		let brute = ParticleField::new(style.clone(), 900.0, 700.0, 42);
		let mut indexed = ParticleField::new(
			ParticleStyle {
				spatial_index: true,
				..style
			},
			900.0,
			700.0,
			42,
		);
		assert_eq!(brute.connections(), indexed.connections());

		indexed.update(900.0, 700.0);
		let mut brute = brute;
		brute.update(900.0, 700.0);
		assert_eq!(brute.connections(), indexed.connections());
	}

	#[test]
	fn non_positive_link_distance_connects_nothing() {
		for link_distance in [0.0, -5.0, f64::NAN] {
			for spatial_index in [false, true] {
				let style = ParticleStyle {
					count: 10,
					link_distance,
					spatial_index,
					..ParticleStyle::default()
				};
				let field = ParticleField::new(style, 800.0, 600.0, 3);
				assert!(field.connections().is_empty());
			}
		}
	}
}
