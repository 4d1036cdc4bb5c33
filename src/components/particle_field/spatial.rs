//! Uniform grid bucketing for the connection pass.
//!
//! With the cell size equal to the link distance, any pair closer than the
//! link distance lies in the same or an adjacent cell, so only those
//! buckets need comparing. Used instead of the all-pairs scan when the
//! population grows beyond a few hundred.

use std::collections::HashMap;

type Cell = (i64, i64);

/// Particle indices bucketed by grid cell.
pub struct Grid {
	buckets: HashMap<Cell, Vec<usize>>,
}

// Forward half of the 8-neighbourhood; the other half is covered from the
// neighbouring cell's side.
const FORWARD: [Cell; 4] = [(1, -1), (1, 0), (1, 1), (0, 1)];

impl Grid {
	/// `cell_size` must be positive.
	pub fn build(points: impl IntoIterator<Item = (f64, f64)>, cell_size: f64) -> Self {
		let mut buckets: HashMap<Cell, Vec<usize>> = HashMap::new();
		for (i, (x, y)) in points.into_iter().enumerate() {
			buckets
				.entry(Self::cell_of(x, y, cell_size))
				.or_default()
				.push(i);
		}
		Self { buckets }
	}

	fn cell_of(x: f64, y: f64, cell_size: f64) -> Cell {
		((x / cell_size).floor() as i64, (y / cell_size).floor() as i64)
	}

	/// Every unordered pair `(i, j)`, `i < j`, sharing or neighbouring a cell.
	/// Sorted, so iteration order does not depend on hashing.
	pub fn candidate_pairs(&self) -> Vec<(usize, usize)> {
		let mut pairs = Vec::new();
		for (&(cx, cy), members) in &self.buckets {
			for (a, &i) in members.iter().enumerate() {
				for &j in &members[a + 1..] {
					pairs.push((i.min(j), i.max(j)));
				}
			}
			for (dx, dy) in FORWARD {
				let (Some(nx), Some(ny)) = (cx.checked_add(dx), cy.checked_add(dy)) else {
					continue;
				};
				let Some(others) = self.buckets.get(&(nx, ny)) else {
					continue;
				};
				for &i in members {
					for &j in others {
						pairs.push((i.min(j), i.max(j)));
					}
				}
			}
		}
		pairs.sort_unstable();
		pairs
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn adjacent_cells_are_paired_once() {
		let grid = Grid::build([(5.0, 5.0), (15.0, 5.0), (5.0, 15.0), (15.0, 15.0)], 10.0);
		assert_eq!(
			grid.candidate_pairs(),
			vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
		);
	}

	#[test]
	fn distant_cells_are_skipped() {
		let grid = Grid::build([(5.0, 5.0), (35.0, 5.0), (6.0, 6.0)], 10.0);
		assert_eq!(grid.candidate_pairs(), vec![(0, 2)]);
	}

	#[test]
	fn negative_coordinates_bucket_below_zero() {
		// -1 and 1 straddle the origin and must still be neighbours.
		let grid = Grid::build([(-1.0, -1.0), (1.0, 1.0)], 10.0);
		assert_eq!(grid.candidate_pairs(), vec![(0, 1)]);
	}

	#[test]
	fn cells_at_the_coordinate_limit_do_not_overflow() {
		let grid = Grid::build([(f64::MAX, f64::MAX), (f64::MAX, f64::MAX)], 1.0);
		assert_eq!(grid.candidate_pairs(), vec![(0, 1)]);
	}
}
