//! Multi-source shortest-distance field over the 8-connected grid.

use beeclust_core::code;
use beeclust_grid::{Grid, JobQueue};

/// Which fixture seeds the distance field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeatSource {
    /// Seed from heater cells (code 6).
    Heater,
    /// Seed from cooler cells (code 7).
    Cooler,
}

impl HeatSource {
    /// The packed cell code of this source.
    pub fn code(self) -> i8 {
        match self {
            Self::Heater => code::HEATER,
            Self::Cooler => code::COOLER,
        }
    }
}

/// Compute the per-cell step count to the nearest `source` cell.
///
/// Returns a flat row-major buffer matching the grid shape. Each entry is
/// the minimum number of 8-connected steps (Chebyshev metric: a diagonal
/// step costs 1) from any cell carrying the source code, traversing
/// non-wall cells, or `-1` where no source can reach.
///
/// Semantics:
///
/// - Source cells themselves are distance 0.
/// - Bees and the other fixture are transparent: heat passes through them.
/// - Walls block propagation and keep distance `-1` themselves.
/// - Two diagonally adjacent cells are one step apart even when both
///   orthogonal cells between them are walls.
///
/// The relaxation guard `D[n] < 0 || D[n] > d + 1` keeps the BFS monotone:
/// a cell is re-enqueued only for a strict improvement, so the queue sees
/// at most one enqueue per cell per improving neighbour. The queue is
/// sized at the safe bound of `8 * cells`.
///
/// O(cells) time and space.
pub fn distance_field(grid: &Grid, source: HeatSource) -> Vec<i32> {
    let cells = grid.cell_count();
    let source_code = source.code();
    let mut field = vec![-1i32; cells];
    let mut queue = JobQueue::new(cells * 8);

    for pos in grid.positions() {
        if grid.get(pos) == source_code {
            field[grid.rank(pos)] = 0;
            queue.put(pos, 0);
        }
    }

    while let Some(job) = queue.get() {
        let next = job.dist + 1;
        for nb in grid.neighbours8(job.pos) {
            if grid.get(nb) == code::WALL {
                continue;
            }
            let rank = grid.rank(nb);
            if field[rank] < 0 || field[rank] > next {
                field[rank] = next;
                queue.put(nb, next);
            }
        }
    }

    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeclust_test_utils::{filled, grid_from_ascii};

    #[test]
    fn single_heater_line() {
        let grid = grid_from_ascii("H....");
        assert_eq!(distance_field(&grid, HeatSource::Heater), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn cooler_is_transparent_to_heater_field() {
        // The cooler cell gets a heater distance of its own.
        let grid = grid_from_ascii("H...C");
        assert_eq!(distance_field(&grid, HeatSource::Heater), [0, 1, 2, 3, 4]);
        assert_eq!(distance_field(&grid, HeatSource::Cooler), [4, 3, 2, 1, 0]);
    }

    #[test]
    fn no_source_all_unreachable() {
        let grid = filled(2, 3, code::EMPTY);
        assert!(distance_field(&grid, HeatSource::Heater)
            .iter()
            .all(|&d| d == -1));
    }

    #[test]
    fn chebyshev_diagonals_cost_one() {
        let grid = grid_from_ascii(
            "H..\n\
             ...\n\
             ...",
        );
        let field = distance_field(&grid, HeatSource::Heater);
        // Chebyshev: max(|dr|, |dc|).
        assert_eq!(field, [0, 1, 2, 1, 1, 2, 2, 2, 2]);
    }

    #[test]
    fn wall_blocks_and_stays_unreachable() {
        let grid = grid_from_ascii(
            "H#.\n\
             .#.\n\
             .#.",
        );
        let field = distance_field(&grid, HeatSource::Heater);
        // Left column reachable, wall column -1, right column cut off.
        assert_eq!(field[0], 0);
        assert_eq!(field[3], 1);
        assert_eq!(field[6], 2);
        for rank in [1, 4, 7] {
            assert_eq!(field[rank], -1, "wall cell {rank} must stay -1");
        }
        for rank in [2, 5, 8] {
            assert_eq!(field[rank], -1, "cut-off cell {rank} must be -1");
        }
    }

    #[test]
    fn diagonal_gap_between_walls_is_passable() {
        // Heat slips between two diagonally touching walls: (1,1) is one
        // step from (0,0) even though (0,1) and (1,0) are walls.
        let grid = grid_from_ascii(
            "H#\n\
             #.",
        );
        let field = distance_field(&grid, HeatSource::Heater);
        assert_eq!(field, [0, -1, -1, 1]);
    }

    #[test]
    fn bees_do_not_block_heat() {
        let grid = grid_from_ascii("H^v.");
        assert_eq!(distance_field(&grid, HeatSource::Heater), [0, 1, 2, 3]);
    }

    #[test]
    fn multiple_sources_take_minimum() {
        let grid = grid_from_ascii("H...H");
        assert_eq!(distance_field(&grid, HeatSource::Heater), [0, 1, 2, 1, 0]);
    }

    #[test]
    fn all_sources_all_zero() {
        let grid = filled(4, 4, code::COOLER);
        assert!(distance_field(&grid, HeatSource::Cooler)
            .iter()
            .all(|&d| d == 0));
    }
}
