//! Bucketed spatial index
//!
//! Points are hashed into square cells of `cell_size` so a radius query only
//! visits the cells its circle can touch instead of every tracked point.

use std::collections::HashMap;

use crate::models::constants::{DEFAULT_CELL_SIZE, GRID_REMOVE_TOLERANCE};
use crate::models::errors::{SpatialError, SpatialResult};
use crate::models::position::{distance_2d, positions_equal_2d, Position3};

/// Cell coordinates: `(floor(x / cell_size), floor(y / cell_size))`.
type CellKey = (i64, i64);

/// Uniform grid of tracked positions.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cells: HashMap<CellKey, Vec<Position3>>,
    cell_size: f64,
    count: usize,
}

impl SpatialGrid {
    /// Cell size must be positive and finite.
    pub fn new(cell_size: f64) -> SpatialResult<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(SpatialError::InvalidCellSize(cell_size));
        }
        Ok(Self {
            cells: HashMap::new(),
            cell_size,
            count: 0,
        })
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    fn cell_of(&self, x: f64, y: f64) -> CellKey {
        (
            (x / self.cell_size).floor() as i64,
            (y / self.cell_size).floor() as i64,
        )
    }

    pub fn insert(&mut self, pos: Position3) {
        let key = self.cell_of(pos.x, pos.y);
        self.cells.entry(key).or_default().push(pos);
        self.count += 1;
    }

    /// Remove the first tracked point within 0.01 of `pos` in the plane.
    ///
    /// Matching is by value, so callers can pass a freshly built position.
    /// Empty buckets are dropped. Returns whether anything was removed.
    pub fn remove(&mut self, pos: Position3) -> bool {
        let key = self.cell_of(pos.x, pos.y);
        let Some(bucket) = self.cells.get_mut(&key) else {
            return false;
        };
        let Some(index) = bucket
            .iter()
            .position(|p| positions_equal_2d(*p, pos, GRID_REMOVE_TOLERANCE))
        else {
            return false;
        };

        bucket.remove(index);
        if bucket.is_empty() {
            self.cells.remove(&key);
        }
        self.count -= 1;
        true
    }

    /// Every tracked point whose plane distance to `center` is at most `radius`.
    ///
    /// Visits `ceil(radius / cell_size)` rings of cells around the centre cell,
    /// which covers every cell the circle can reach. When that ring holds more
    /// cells than are occupied, the occupied buckets are scanned instead.
    /// A negative or non-finite radius matches nothing.
    pub fn find_in_radius(&self, center: Position3, radius: f64) -> Vec<Position3> {
        if !radius.is_finite() || radius < 0.0 || self.count == 0 {
            return Vec::new();
        }

        let within = |p: &&Position3| distance_2d(center, **p) <= radius;
        let cell_radius = (radius / self.cell_size).ceil() as i64;
        let span = 2 * cell_radius as u128 + 1;

        if span.saturating_mul(span) > self.cells.len() as u128 {
            return self.cells.values().flatten().filter(within).copied().collect();
        }

        let (cx, cy) = self.cell_of(center.x, center.y);
        let mut found = Vec::new();
        // Far coordinates saturate to the edge cells; the ring must not wrap past them
        for gx in cx.saturating_sub(cell_radius)..=cx.saturating_add(cell_radius) {
            for gy in cy.saturating_sub(cell_radius)..=cy.saturating_add(cell_radius) {
                if let Some(bucket) = self.cells.get(&(gx, gy)) {
                    found.extend(bucket.iter().filter(within).copied());
                }
            }
        }
        found
    }

    /// Total tracked points across all buckets.
    pub fn size(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of non-empty buckets.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.count = 0;
    }
}

impl Default for SpatialGrid {
    fn default() -> Self {
        Self {
            cells: HashMap::new(),
            cell_size: DEFAULT_CELL_SIZE,
            count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Position3 {
        Position3::new(x, y, 50.0)
    }

    #[test]
    fn rejects_degenerate_cell_size() {
        assert!(SpatialGrid::new(0.0).is_err());
        assert!(SpatialGrid::new(-10.0).is_err());
        assert!(SpatialGrid::new(f64::INFINITY).is_err());
    }

    #[test]
    fn default_cell_size_is_100() {
        assert_eq!(SpatialGrid::default().cell_size(), 100.0);
    }

    #[test]
    fn insert_and_size() {
        let mut grid = SpatialGrid::default();
        grid.insert(p(10.0, 10.0));
        grid.insert(p(10.0, 10.0));
        grid.insert(p(250.0, -40.0));
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.cell_count(), 2);
    }

    #[test]
    fn remove_uses_tolerance_not_identity() {
        let mut grid = SpatialGrid::default();
        grid.insert(p(10.0, 10.0));
        assert!(grid.remove(Position3::new(10.004, 9.996, 0.0)));
        assert!(grid.is_empty());
        assert_eq!(grid.cell_count(), 0, "empty bucket should be dropped");
    }

    #[test]
    fn remove_misses_outside_tolerance() {
        let mut grid = SpatialGrid::default();
        grid.insert(p(10.0, 10.0));
        assert!(!grid.remove(p(10.5, 10.0)));
        assert_eq!(grid.size(), 1);
    }

    #[test]
    fn remove_only_first_match() {
        let mut grid = SpatialGrid::default();
        grid.insert(p(5.0, 5.0));
        grid.insert(p(5.0, 5.0));
        assert!(grid.remove(p(5.0, 5.0)));
        assert_eq!(grid.size(), 1);
    }

    #[test]
    fn radius_query_filters_exactly() {
        let mut grid = SpatialGrid::default();
        grid.insert(p(0.0, 0.0));
        grid.insert(p(30.0, 40.0)); // distance 50
        grid.insert(p(31.0, 40.0));
        let found = grid.find_in_radius(p(0.0, 0.0), 50.0);
        assert_eq!(found.len(), 2);
        assert!(found.contains(&p(30.0, 40.0)));
    }

    #[test]
    fn radius_query_reaches_neighbouring_cells() {
        let mut grid = SpatialGrid::new(100.0).unwrap();
        // Centre near a cell edge, point two cells away but within radius
        grid.insert(p(-99.0, 0.0));
        grid.insert(p(199.0, 0.0));
        let found = grid.find_in_radius(p(50.0, 0.0), 150.0);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn ring_scan_matches_brute_force() {
        let mut grid = SpatialGrid::new(100.0).unwrap();
        let mut all = Vec::new();
        for i in 0..20 {
            for j in 0..20 {
                let pos = p(i as f64 * 97.0 + 3.0, j as f64 * 101.0 - 7.0);
                grid.insert(pos);
                all.push(pos);
            }
        }
        assert!(grid.cell_count() > 25);

        let center = p(1000.0, 950.0);
        let mut found = grid.find_in_radius(center, 150.0);
        let mut expected: Vec<Position3> = all
            .into_iter()
            .filter(|q| distance_2d(center, *q) <= 150.0)
            .collect();
        let order = |a: &Position3, b: &Position3| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y));
        found.sort_by(order);
        expected.sort_by(order);
        assert!(!expected.is_empty());
        assert_eq!(found, expected);
    }

    #[test]
    fn radius_query_ignores_layer() {
        let mut grid = SpatialGrid::default();
        grid.insert(Position3::new(1.0, 1.0, 0.0));
        let found = grid.find_in_radius(Position3::new(1.0, 1.0, 50.0), 0.0);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn huge_radius_scans_occupied_buckets() {
        let mut grid = SpatialGrid::new(1.0).unwrap();
        grid.insert(p(-500_000.0, 0.0));
        grid.insert(p(500_000.0, 0.0));
        assert_eq!(grid.find_in_radius(p(0.0, 0.0), 600_000.0).len(), 2);
    }

    #[test]
    fn query_at_saturated_cell_edge() {
        let mut grid = SpatialGrid::new(1.0).unwrap();
        for y in 0..9 {
            grid.insert(p(1e19, y as f64));
        }
        // Nine occupied cells keep the query on the ring path
        let found = grid.find_in_radius(p(1e19, 4.0), 1.0);
        assert_eq!(found.len(), 3);

        let mut grid = SpatialGrid::new(1.0).unwrap();
        for y in 0..9 {
            grid.insert(p(-1e19, -(y as f64)));
        }
        assert_eq!(grid.find_in_radius(p(-1e19, -4.0), 1.0).len(), 3);
    }

    #[test]
    fn bad_radius_matches_nothing() {
        let mut grid = SpatialGrid::default();
        grid.insert(p(0.0, 0.0));
        assert!(grid.find_in_radius(p(0.0, 0.0), -1.0).is_empty());
        assert!(grid.find_in_radius(p(0.0, 0.0), f64::NAN).is_empty());
    }

    #[test]
    fn clear_empties_grid() {
        let mut grid = SpatialGrid::default();
        grid.insert(p(0.0, 0.0));
        grid.clear();
        assert_eq!(grid.size(), 0);
        assert!(grid.find_in_radius(p(0.0, 0.0), 10.0).is_empty());
    }
}
