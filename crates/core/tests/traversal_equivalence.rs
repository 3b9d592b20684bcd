//! Traversal Equivalence Suite
//!
//! Checks the counter against an independent union-find on seeded random
//! grids, and checks that draining a traversal is equivalent to a direct
//! count for every flood order and marker setting.

use island_count_core::{Cell, CounterConfig, FloodOrder, GridModel, IslandCounter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of random grids per property
const RANDOM_GRIDS: u64 = 200;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Disjoint-set forest over flat cell indices
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}

/// Island count computed without flood-filling
fn union_find_islands(grid: &GridModel) -> usize {
    let (rows, cols) = grid.dimensions();
    let mut sets = UnionFind::new(rows * cols);
    let land = |r: usize, c: usize| grid.cell(r, c) == Some(Cell::Land);

    for r in 0..rows {
        for c in 0..cols {
            if !land(r, c) {
                continue;
            }
            if r + 1 < rows && land(r + 1, c) {
                sets.union(r * cols + c, (r + 1) * cols + c);
            }
            if c + 1 < cols && land(r, c + 1) {
                sets.union(r * cols + c, r * cols + c + 1);
            }
        }
    }

    let mut roots: Vec<usize> = grid
        .cells()
        .filter(|&(_, _, cell)| cell == Cell::Land)
        .map(|(r, c, _)| sets.find(r * cols + c))
        .collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

fn random_grid(rng: &mut StdRng) -> GridModel {
    let rows = rng.random_range(0..=24);
    let cols = rng.random_range(0..=24);
    let land_ratio = rng.random_range(0.2..0.8);
    GridModel::random(rows, cols, land_ratio, rng)
}

fn all_configs() -> Vec<CounterConfig> {
    let mut configs = Vec::new();
    for order in [FloodOrder::DepthFirst, FloodOrder::BreadthFirst] {
        for mark_in_progress in [true, false] {
            configs.push(CounterConfig {
                order,
                mark_in_progress,
            });
        }
    }
    configs
}

#[test]
fn test_count_matches_union_find() {
    let mut rng = StdRng::seed_from_u64(0x1515);

    for _ in 0..RANDOM_GRIDS {
        let grid = random_grid(&mut rng);
        let expected = union_find_islands(&grid);

        for config in all_configs() {
            let mut working = grid.clone();
            assert_eq!(
                IslandCounter::new(config).count(&mut working),
                expected,
                "config {config:?} on grid\n{grid}"
            );
            assert!(working.is_cleared());
        }
    }
}

#[test]
fn test_drained_traversal_equals_count() {
    let mut rng = StdRng::seed_from_u64(2026);

    for _ in 0..RANDOM_GRIDS {
        let original = random_grid(&mut rng);
        let land = original.land_count();

        for config in all_configs() {
            let counter = IslandCounter::new(config);

            let mut counted = original.clone();
            let expected = counter.count(&mut counted);

            let mut traversed = original.clone();
            let mut traversal = counter.traverse(&mut traversed);
            let steps: Vec<_> = traversal.by_ref().collect();
            let islands = traversal.islands_found();

            assert_eq!(islands, expected, "config {config:?}");
            assert_eq!(traversed, counted);
            assert!(traversed.is_cleared());

            let per_cell = if config.mark_in_progress { 2 } else { 1 };
            assert_eq!(steps.len(), per_cell * land);
            assert_eq!(steps.iter().filter(|s| s.starts_island).count(), expected);
        }
    }
}

#[test]
fn test_every_land_cell_sunk_exactly_once() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..RANDOM_GRIDS {
        let original = random_grid(&mut rng);
        let mut grid = original.clone();
        let steps: Vec<_> = IslandCounter::default().traverse(&mut grid).collect();

        let mut sunk: Vec<(usize, usize)> = steps
            .iter()
            .filter(|s| s.cell == Cell::Water)
            .map(|s| (s.row, s.col))
            .collect();
        sunk.sort_unstable();

        let mut land: Vec<(usize, usize)> = original
            .cells()
            .filter(|&(_, _, cell)| cell == Cell::Land)
            .map(|(r, c, _)| (r, c))
            .collect();
        land.sort_unstable();

        assert_eq!(sunk, land);
    }
}

#[test]
fn test_islands_discovered_in_row_major_order() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..RANDOM_GRIDS {
        let mut grid = random_grid(&mut rng);
        let starts: Vec<(usize, usize)> = IslandCounter::default()
            .traverse(&mut grid)
            .filter(|s| s.starts_island)
            .map(|s| (s.row, s.col))
            .collect();

        assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn test_partial_drain_leaves_later_islands_untouched() {
    let mut rng = StdRng::seed_from_u64(31);

    for _ in 0..RANDOM_GRIDS {
        let original = random_grid(&mut rng);
        let total_steps = 2 * original.land_count();
        if total_steps == 0 {
            continue;
        }
        let stop = rng.random_range(0..total_steps);

        let mut grid = original.clone();
        let mut traversal = IslandCounter::default().traverse(&mut grid);
        let taken: Vec<_> = traversal.by_ref().take(stop).collect();
        let current = traversal.islands_found();
        let snapshot = traversal.grid().clone();

        assert!(snapshot.count_of(Cell::InProgress) <= 1);

        // Finishing the drain still reaches the full count
        let expected = IslandCounter::default().count(&mut original.clone());
        assert_eq!(traversal.finish(), expected);

        // Islands after the current one have no steps yet and keep their land
        let touched: Vec<(usize, usize)> = taken.iter().map(|s| (s.row, s.col)).collect();
        let later_land = original
            .cells()
            .filter(|&(_, _, cell)| cell == Cell::Land)
            .filter(|&(r, c, _)| !touched.contains(&(r, c)))
            .all(|(r, c, _)| snapshot.cell(r, c) == Some(Cell::Land));
        assert!(later_land);
        assert!(current <= expected);
    }
}
