//! Spaced random placement.
//!
//! Positions are drawn uniformly inside a rectangle and rejected while they
//! sit closer than `min_separation` to anything already placed. Retries are
//! capped; past the cap a deterministic grid scan picks the spot farthest
//! from its nearest neighbour.

use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Placement area `[0, width) x [0, height)`, in whatever unit the caller uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn square(side: f64) -> Self {
        Self { width: side, height: side }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    pub min_separation: f64,
    pub max_attempts: u32,
}

pub fn random_point<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Point {
    Point::new(
        rng.random::<f64>() * bounds.width.max(0.0),
        rng.random::<f64>() * bounds.height.max(0.0),
    )
}

fn clear_of(existing: &[Point], candidate: Point, min_separation: f64) -> bool {
    existing
        .iter()
        .all(|p| p.distance(candidate) >= min_separation)
}

fn nearest_distance(existing: &[Point], candidate: Point) -> f64 {
    existing
        .iter()
        .map(|p| p.distance(candidate))
        .fold(f64::INFINITY, f64::min)
}

/// Place one point at least `min_separation` away from every existing point.
pub fn place<R: Rng + ?Sized>(
    existing: &[Point],
    bounds: Bounds,
    spacing: Spacing,
    rng: &mut R,
) -> Point {
    for _ in 0..spacing.max_attempts {
        let candidate = random_point(bounds, rng);
        if clear_of(existing, candidate, spacing.min_separation) {
            return candidate;
        }
    }
    log::debug!(
        "placement gave up after {} attempts; snapping to grid",
        spacing.max_attempts
    );
    grid_fallback(existing, bounds, spacing.min_separation)
}

const GRID_MAX_CELLS: usize = 64;

/// Cell centre with the largest distance to its nearest existing point.
///
/// The grid pitch is `min_separation`, widened when needed so neither axis
/// has more than 64 cells. Ties resolve to the first cell in row-major order.
pub fn grid_fallback(existing: &[Point], bounds: Bounds, min_separation: f64) -> Point {
    let width = bounds.width.max(0.0);
    let height = bounds.height.max(0.0);
    let longest = width.max(height);
    let pitch = min_separation.max(longest / GRID_MAX_CELLS as f64);
    if !(pitch > 0.0) {
        return Point::default();
    }
    let cols = ((width / pitch).floor() as usize).clamp(1, GRID_MAX_CELLS);
    let rows = ((height / pitch).floor() as usize).clamp(1, GRID_MAX_CELLS);

    let mut best = Point::new(cell_centre(0, pitch, width), cell_centre(0, pitch, height));
    let mut best_gap = f64::NEG_INFINITY;
    for row in 0..rows {
        for col in 0..cols {
            let cell = Point::new(cell_centre(col, pitch, width), cell_centre(row, pitch, height));
            let gap = nearest_distance(existing, cell);
            if gap > best_gap {
                best_gap = gap;
                best = cell;
            }
        }
    }
    best
}

/// Centre of cell `index` along one axis; a single cell wider than the
/// extent is centred on it instead.
fn cell_centre(index: usize, pitch: f64, extent: f64) -> f64 {
    let centre = (index as f64 + 0.5) * pitch;
    if centre < extent { centre } else { extent / 2.0 }
}

/// Place `count` points one after another with [`place`].
pub fn scatter<R: Rng + ?Sized>(
    count: usize,
    bounds: Bounds,
    spacing: Spacing,
    rng: &mut R,
) -> Vec<Point> {
    let mut placed = Vec::with_capacity(count);
    for _ in 0..count {
        let p = place(&placed, bounds, spacing, rng);
        placed.push(p);
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const SPACING: Spacing = Spacing {
        min_separation: 15.0,
        max_attempts: 64,
    };

    #[test]
    fn distance_is_euclidean() {
        let d = Point::new(50.0, 50.0).distance(Point::new(55.0, 55.0));
        assert!((d - 7.0711).abs() < 1e-3);
    }

    #[test]
    fn points_stay_inside_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        for p in scatter(10, Bounds::square(90.0), SPACING, &mut rng) {
            assert!((0.0..90.0).contains(&p.x));
            assert!((0.0..90.0).contains(&p.y));
        }
    }

    #[test]
    fn zero_attempts_uses_grid_fallback() {
        let mut rng = Pcg32::seed_from_u64(1);
        let spacing = Spacing {
            min_separation: 15.0,
            max_attempts: 0,
        };
        let a = place(&[], Bounds::square(90.0), spacing, &mut rng);
        let b = place(&[], Bounds::square(90.0), spacing, &mut rng);
        // Deterministic: same answer regardless of rng state.
        assert_eq!(a, b);
    }

    #[test]
    fn grid_fallback_moves_away_from_crowd() {
        let crowd = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)];
        let p = grid_fallback(&crowd, Bounds::square(90.0), 15.0);
        assert!(nearest_distance(&crowd, p) >= 15.0);
        assert!(p.x > 45.0 && p.y > 45.0);
    }

    #[test]
    fn grid_fallback_pitch_is_min_separation() {
        let p = grid_fallback(&[], Bounds::square(90.0), 15.0);
        assert_eq!(p, Point::new(7.5, 7.5));

        // 6x6 cells of 15; the opposite corner cell is farthest from the origin.
        let p = grid_fallback(&[Point::new(0.0, 0.0)], Bounds::square(90.0), 15.0);
        assert_eq!(p, Point::new(82.5, 82.5));
    }

    #[test]
    fn grid_fallback_caps_cell_count() {
        // Pitch widens to 1000 / 64 so the scan stays at 64 cells per axis.
        let p = grid_fallback(&[], Bounds::square(1000.0), 1.0);
        assert_eq!(p, Point::new(7.8125, 7.8125));
    }

    #[test]
    fn oversized_separation_stays_in_bounds() {
        let p = grid_fallback(&[], Bounds::square(90.0), 500.0);
        assert_eq!(p, Point::new(45.0, 45.0));
    }

    #[test]
    fn grid_fallback_handles_empty_bounds() {
        let p = grid_fallback(&[], Bounds::square(0.0), 15.0);
        assert_eq!(p, Point::default());
    }

    #[test]
    fn unsatisfiable_spacing_terminates() {
        let mut rng = Pcg32::seed_from_u64(3);
        let spacing = Spacing {
            min_separation: 500.0,
            max_attempts: 16,
        };
        let points = scatter(10, Bounds::square(90.0), spacing, &mut rng);
        assert_eq!(points.len(), 10);
    }

    proptest! {
        #[test]
        fn ten_points_are_pairwise_separated(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let points = scatter(10, Bounds::square(90.0), SPACING, &mut rng);
            for (i, a) in points.iter().enumerate() {
                for b in &points[i + 1..] {
                    prop_assert!(a.distance(*b) >= SPACING.min_separation);
                }
            }
        }
    }
}
