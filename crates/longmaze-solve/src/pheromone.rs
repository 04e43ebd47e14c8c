//! Pheromone trail storage for the ant colony.

use std::collections::HashMap;

use longmaze_core::Point;

/// Pheromone intensity per directed `(node, next)` pair.
///
/// Absent pairs read as zero; reading never inserts, so the map only grows
/// along corridors that a successful ant actually walked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PheromoneMap {
    trails: HashMap<(Point, Point), f64>,
}

impl PheromoneMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intensity on `from -> to`, zero when nothing was ever deposited.
    #[inline]
    pub fn get(&self, from: Point, to: Point) -> f64 {
        self.trails.get(&(from, to)).copied().unwrap_or(0.0)
    }

    /// Whether anything was ever deposited on `from -> to`.
    #[inline]
    pub fn contains(&self, from: Point, to: Point) -> bool {
        self.trails.contains_key(&(from, to))
    }

    /// Add `amount` to `from -> to`.
    pub fn deposit(&mut self, from: Point, to: Point, amount: f64) {
        *self.trails.entry((from, to)).or_insert(0.0) += amount;
    }

    /// Multiply every stored intensity by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for v in self.trails.values_mut() {
            *v *= factor;
        }
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.trails.len()
    }

    /// Whether no pair is stored.
    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    /// Drop every stored pair.
    pub fn clear(&mut self) {
        self.trails.clear();
    }

    /// Iterate over `((from, to), intensity)` in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = ((Point, Point), f64)> + '_ {
        self.trails.iter().map(|(&k, &v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_does_not_insert() {
        let m = PheromoneMap::new();
        assert_eq!(m.get(Point::new(0, 0), Point::new(1, 0)), 0.0);
        assert!(m.is_empty());
        assert!(!m.contains(Point::new(0, 0), Point::new(1, 0)));
    }

    #[test]
    fn deposit_and_scale() {
        let (a, b) = (Point::new(0, 0), Point::new(1, 0));
        let mut m = PheromoneMap::new();
        m.deposit(a, b, 2.0);
        m.deposit(a, b, 1.0);
        assert_eq!(m.get(a, b), 3.0);
        assert_eq!(m.get(b, a), 0.0);
        m.scale(0.5);
        assert_eq!(m.get(a, b), 1.5);
        assert_eq!(m.len(), 1);
        m.clear();
        assert!(m.is_empty());
    }
}
