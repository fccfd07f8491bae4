//! The swarm kernel: 4-connected components over bee cells.

use beeclust_core::{code, Pos};
use beeclust_grid::{DoneMap, Grid, JobQueue};

/// Partition all bee cells into 4-connected components.
///
/// A bee cell is any active (codes 1–4) or waiting (negative) bee. Two bee
/// cells belong to the same swarm iff they are connected through bee cells
/// differing by one unit in row or column.
///
/// Pure read: scans the grid in row-major order and flood-fills from every
/// not-yet-visited bee. Swarms are emitted in order of their row-major seed
/// cell; cells inside a swarm follow BFS discovery order from that seed.
/// The result is deterministic for a given grid: every bee cell appears in
/// exactly one swarm and non-bee cells never appear.
///
/// The BFS queue is sized at `cells` — the done map admits each cell once.
pub fn swarms(grid: &Grid) -> Vec<Vec<Pos>> {
    let mut result = Vec::new();
    let mut done = DoneMap::new(grid.cell_count());
    let mut queue = JobQueue::new(grid.cell_count());

    for pos in grid.positions() {
        let rank = grid.rank(pos);
        if done.is_done(rank) || !code::is_bee(grid.get(pos)) {
            continue;
        }

        let mut swarm = vec![pos];
        done.mark(rank);
        queue.reset();
        queue.put(pos, 0);

        while let Some(job) = queue.get() {
            for nb in grid.neighbours4(job.pos) {
                if !code::is_bee(grid.get(nb)) {
                    continue;
                }
                let nb_rank = grid.rank(nb);
                if !done.is_done(nb_rank) {
                    done.mark(nb_rank);
                    swarm.push(nb);
                    queue.put(nb, 0);
                }
            }
        }

        result.push(swarm);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeclust_test_utils::{filled, grid_from_ascii};
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Sort cells within swarms and swarms against each other, so tests
    /// can compare against order-free expectations.
    fn sorted(mut swarms: Vec<Vec<Pos>>) -> Vec<Vec<Pos>> {
        for swarm in &mut swarms {
            swarm.sort();
        }
        swarms.sort();
        swarms
    }

    #[test]
    fn empty_map_no_swarms() {
        let grid = filled(2, 2, code::EMPTY);
        assert!(swarms(&grid).is_empty());
    }

    #[test]
    fn all_walls_no_swarms() {
        let grid = filled(3, 3, code::WALL);
        assert!(swarms(&grid).is_empty());
    }

    #[test]
    fn single_waiting_bee() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(Pos::new(1, 0), -3);
        assert_eq!(swarms(&grid), vec![vec![Pos::new(1, 0)]]);
    }

    #[test]
    fn one_by_one_grid_with_bee() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(Pos::new(0, 0), 2);
        assert_eq!(swarms(&grid), vec![vec![Pos::new(0, 0)]]);
    }

    #[test]
    fn diagonal_bees_are_separate() {
        // 4-neighbourhood: corner contact does not connect.
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(Pos::new(1, 0), -5);
        grid.set(Pos::new(0, 1), 4);
        assert_eq!(
            sorted(swarms(&grid)),
            vec![vec![Pos::new(0, 1)], vec![Pos::new(1, 0)]]
        );
    }

    #[test]
    fn adjacent_bees_join() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(Pos::new(1, 0), -5);
        grid.set(Pos::new(1, 1), 4);
        assert_eq!(
            sorted(swarms(&grid)),
            vec![vec![Pos::new(1, 0), Pos::new(1, 1)]]
        );
    }

    #[test]
    fn waiting_and_active_bees_mix() {
        let grid = grid_from_ascii(
            "^>v<\n\
             wwww\n\
             wwww",
        );
        let all = swarms(&grid);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].len(), 12);
    }

    #[test]
    fn wall_splits_swarms() {
        // A wall is not a bee: three isolated bees.
        let grid = grid_from_ascii(
            "^#^\n\
             .^.",
        );
        assert_eq!(
            sorted(swarms(&grid)),
            vec![
                vec![Pos::new(0, 0)],
                vec![Pos::new(0, 2)],
                vec![Pos::new(1, 1)],
            ]
        );
    }

    #[test]
    fn seed_order_is_row_major() {
        let grid = grid_from_ascii(
            ".>.\n\
             >.>",
        );
        let all = swarms(&grid);
        assert_eq!(all[0][0], Pos::new(0, 1));
        assert_eq!(all[1][0], Pos::new(1, 0));
        assert_eq!(all[2][0], Pos::new(1, 2));
    }

    #[test]
    fn is_pure_and_deterministic() {
        let grid = grid_from_ascii(
            "^^..w\n\
             ..>..\n\
             w...w",
        );
        let before = grid.clone();
        let a = swarms(&grid);
        let b = swarms(&grid);
        assert_eq!(a, b);
        assert_eq!(grid, before);
    }

    // ── Partition property ──────────────────────────────────────

    proptest! {
        #[test]
        fn swarms_partition_bee_cells(
            rows in 1u32..8,
            cols in 1u32..8,
            seed_codes in prop::collection::vec(-4i8..=7, 64),
        ) {
            let cells = (rows * cols) as usize;
            let grid = Grid::from_codes(
                rows,
                cols,
                seed_codes[..cells].to_vec(),
            ).unwrap();

            let all = swarms(&grid);
            let mut seen = HashSet::new();
            for swarm in &all {
                prop_assert!(!swarm.is_empty());
                for &pos in swarm {
                    prop_assert!(code::is_bee(grid.get(pos)), "non-bee {pos}");
                    prop_assert!(seen.insert(pos), "{pos} appears twice");
                }
            }
            let bee_count = grid
                .codes()
                .iter()
                .filter(|&&c| code::is_bee(c))
                .count();
            prop_assert_eq!(seen.len(), bee_count);
        }
    }
}
