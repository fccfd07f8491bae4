//! The tick kernel: one discrete step of the bee state machine.

use beeclust_core::{code, Direction, Pos, SimParams};
use beeclust_grid::{DoneMap, Grid, HeatMap};
use rand::Rng;

/// A waiting bee whose countdown expires this tick.
const EXPIRED: i8 = -1;

/// How an active bee's attempted step classifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Movement {
    /// Target is out of bounds, a wall, or a fixture.
    WallHit,
    /// Target holds another bee, active or waiting.
    BeeMeet,
    /// Target is empty; the bee moves in.
    Move,
}

/// Advance the simulation by one step. Returns the number of bees that
/// moved.
///
/// A single row-major sweep mutates the grid in place. The done map pins
/// each bee to one decision per tick: a bee that moves south or east lands
/// on a cell the sweep has not reached yet, and the mark on its target
/// keeps it from acting twice. Per cell:
///
/// - `-1`: the wait expires; the bee picks a uniform random heading.
/// - below `-1`: count up one tick toward expiry.
/// - active bee: with probability `p_changedir` redraw the heading, then
///   attempt one step and resolve against what is ahead — turn back or
///   stop at a wall (`p_wall`), stop or stand at another bee (`p_meet`),
///   or move into an empty cell.
/// - walls, fixtures, empty cells: untouched.
///
/// A stopping bee waits `max(min_wait, ⌊k_stay / (1 + |T − t_ideal|)⌋)`
/// ticks, where `T` is the heatmap temperature under the bee — the closer
/// the spot is to `t_ideal`, the longer it stays.
///
/// The RNG draw order per bee is fixed (heading roll, redraw, then exactly
/// one of the wall/meet rolls), so a seeded generator replays a tick
/// exactly.
pub fn tick<R: Rng>(grid: &mut Grid, heatmap: &HeatMap, params: &SimParams, rng: &mut R) -> usize {
    debug_assert_eq!(heatmap.cell_count(), grid.cell_count(), "shape mismatch");

    let mut done = DoneMap::new(grid.cell_count());
    let mut moved = 0;

    let rows = grid.rows() as i32;
    let cols = grid.cols() as i32;
    for row in 0..rows {
        for col in 0..cols {
            let pos = Pos::new(row, col);
            let rank = grid.rank(pos);
            if done.is_done(rank) {
                continue;
            }

            let value = grid.get(pos);
            if value == EXPIRED {
                grid.set(pos, rng.gen_range(1..=4));
            } else if let Some(heading) = Direction::from_code(value) {
                let mut dir = heading;
                if rng.gen::<f64>() < params.p_changedir {
                    dir = redraw_heading(dir, rng);
                    grid.set(pos, dir.code());
                }

                let target = pos.step(dir);
                match classify(grid, target) {
                    Movement::WallHit => {
                        if rng.gen::<f64>() < params.p_wall {
                            stop(grid, heatmap, params, pos);
                        } else {
                            grid.set(pos, dir.reverse().code());
                        }
                    }
                    Movement::BeeMeet => {
                        if rng.gen::<f64>() < params.p_meet {
                            stop(grid, heatmap, params, pos);
                        }
                    }
                    Movement::Move => {
                        grid.set(target, dir.code());
                        grid.set(pos, code::EMPTY);
                        moved += 1;
                        done.mark(grid.rank(target));
                    }
                }
            } else if value < 0 {
                grid.set(pos, value + 1);
            }

            done.mark(rank);
        }
    }

    moved
}

/// Classify what an active bee runs into at `target`.
fn classify(grid: &Grid, target: Pos) -> Movement {
    if !grid.in_bounds(target) {
        return Movement::WallHit;
    }
    let value = grid.get(target);
    if code::is_bee(value) {
        Movement::BeeMeet
    } else if value == code::EMPTY {
        Movement::Move
    } else {
        // Walls, heaters, and coolers are all obstacles to a bee.
        Movement::WallHit
    }
}

/// Redraw a heading after a direction-change roll.
///
/// Draws from {N, E, S}; a draw equal to the current heading remaps to W.
/// The result is never the current heading. The remap makes the choice
/// among the three alternatives deliberately non-uniform; do not "fix" it
/// to a uniform draw.
fn redraw_heading<R: Rng>(current: Direction, rng: &mut R) -> Direction {
    let draw = rng.gen_range(1i8..=3);
    if draw == current.code() {
        Direction::West
    } else {
        match draw {
            1 => Direction::North,
            2 => Direction::East,
            _ => Direction::South,
        }
    }
}

/// Stop the bee at `pos`: store its wait countdown as a negative code.
fn stop(grid: &mut Grid, heatmap: &HeatMap, params: &SimParams, pos: Pos) {
    let delta = (heatmap.get(pos) - params.t_ideal).abs();
    let wait = (params.k_stay / (1.0 + delta)) as i64;
    // Lower bound is the configured minimum; upper bound keeps the packed
    // i8 encoding valid for extreme k_stay configurations.
    let wait = wait.clamp(params.min_wait as i64, 127);
    grid.set(pos, -(wait as i8));
}
