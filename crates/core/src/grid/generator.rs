//! Random grid generation
//!
//! Used for randomized checks and for the CLI's `--random` option. Seed the
//! RNG (`StdRng::seed_from_u64`) to get reproducible grids.

use rand::Rng;

use super::{Cell, GridModel};

impl GridModel {
    /// Fill a `rows` x `cols` grid where each cell is land with probability `land_ratio`
    ///
    /// `land_ratio` is clamped to `[0, 1]`; NaN is treated as 0.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, land_ratio: f64, rng: &mut R) -> Self {
        let ratio = if land_ratio.is_nan() {
            0.0
        } else {
            land_ratio.clamp(0.0, 1.0)
        };

        GridModel::from_fn(rows, cols, |_, _| {
            if rng.random_bool(ratio) {
                Cell::Land
            } else {
                Cell::Water
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = GridModel::random(6, 9, 0.5, &mut rng);
        assert_eq!(grid.dimensions(), (6, 9));
        assert_eq!(grid.land_count() + grid.count_of(Cell::Water), 54);
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = GridModel::random(8, 8, 0.4, &mut StdRng::seed_from_u64(42));
        let b = GridModel::random(8, 8, 0.4, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_ratio_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(GridModel::random(3, 4, 1.0, &mut rng).land_count(), 12);
        assert_eq!(GridModel::random(3, 4, 0.0, &mut rng).land_count(), 0);
        assert_eq!(GridModel::random(3, 4, 2.5, &mut rng).land_count(), 12);
        assert_eq!(GridModel::random(3, 4, f64::NAN, &mut rng).land_count(), 0);
    }
}
