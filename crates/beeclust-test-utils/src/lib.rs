//! Reusable grid fixtures for tests and benches.
//!
//! Three builders:
//!
//! - [`grid_from_ascii`] — draw a map as ASCII art, one character per cell.
//! - [`filled`] — a grid holding one code everywhere.
//! - [`random_map`] — the randomized cell mix used by the performance
//!   checks, generated from a caller-supplied RNG.
//!
//! These are test fixtures: malformed input panics with a message instead
//! of returning errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use beeclust_core::code;
use beeclust_grid::Grid;
use rand::Rng;

/// Build a grid from ASCII art, one line per row.
///
/// | Char | Cell |
/// |------|------|
/// | `.` | empty |
/// | `^` `>` `v` `<` | bee facing north / east / south / west |
/// | `w` | waiting bee (`-1`, expires next tick) |
/// | `#` | wall |
/// | `H` | heater |
/// | `C` | cooler |
///
/// # Panics
///
/// Panics on unknown characters, ragged rows, or an empty drawing.
///
/// # Examples
///
/// ```
/// use beeclust_test_utils::grid_from_ascii;
///
/// let grid = grid_from_ascii(
///     "H..\n\
///      .^#",
/// );
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// ```
pub fn grid_from_ascii(art: &str) -> Grid {
    let lines: Vec<&str> = art
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert!(!lines.is_empty(), "empty map drawing");

    let cols = lines[0].chars().count();
    let mut cells = Vec::with_capacity(lines.len() * cols);
    for (row, line) in lines.iter().enumerate() {
        assert_eq!(
            line.chars().count(),
            cols,
            "row {row} has a different width"
        );
        for ch in line.chars() {
            cells.push(match ch {
                '.' => code::EMPTY,
                '^' => code::BEE_NORTH,
                '>' => code::BEE_EAST,
                'v' => code::BEE_SOUTH,
                '<' => code::BEE_WEST,
                'w' => -1,
                '#' => code::WALL,
                'H' => code::HEATER,
                'C' => code::COOLER,
                other => panic!("unknown map character {other:?} in row {row}"),
            });
        }
    }

    match Grid::from_codes(lines.len() as u32, cols as u32, cells) {
        Ok(grid) => grid,
        Err(err) => panic!("bad map drawing: {err}"),
    }
}

/// A grid holding `value` in every cell.
///
/// # Panics
///
/// Panics on a zero dimension or an illegal code.
pub fn filled(rows: u32, cols: u32, value: i8) -> Grid {
    let cells = vec![value; rows as usize * cols as usize];
    match Grid::from_codes(rows, cols, cells) {
        Ok(grid) => grid,
        Err(err) => panic!("bad fill: {err}"),
    }
}

/// Cell-code weights of the randomized performance map: mostly empty,
/// a sprinkle of bees and walls, heavy heater/cooler presence.
const RANDOM_WEIGHTS: [(i8, f64); 8] = [
    (code::EMPTY, 0.35),
    (code::BEE_NORTH, 0.05),
    (code::BEE_EAST, 0.05),
    (code::BEE_SOUTH, 0.05),
    (code::BEE_WEST, 0.05),
    (code::WALL, 0.05),
    (code::HEATER, 0.20),
    (code::COOLER, 0.20),
];

/// A random map with the weighted cell mix of the performance checks.
pub fn random_map<R: Rng>(rows: u32, cols: u32, rng: &mut R) -> Grid {
    let cells = (0..rows as usize * cols as usize)
        .map(|_| {
            let mut roll: f64 = rng.gen();
            for &(value, weight) in &RANDOM_WEIGHTS {
                if roll < weight {
                    return value;
                }
                roll -= weight;
            }
            // Floating-point slack: the weights sum to 1 up to rounding.
            code::COOLER
        })
        .collect();
    match Grid::from_codes(rows, cols, cells) {
        Ok(grid) => grid,
        Err(err) => panic!("bad random map: {err}"),
    }
}
