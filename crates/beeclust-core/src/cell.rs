//! Packed cell codes, the typed [`Cell`] view, and grid coordinates.
//!
//! Kernels operate on the raw `i8` encoding for cache density; the typed
//! [`Cell`] sum type is the boundary representation for callers that build
//! or inspect maps. The two are convertible in both directions.

use std::fmt;

/// Raw `i8` cell codes as stored in the grid.
///
/// Negative values are not listed here: a cell holding `-k` (`k >= 1`) is a
/// waiting bee with `k` ticks remaining before it picks a fresh random
/// direction.
pub mod code {
    /// Empty, passable cell.
    pub const EMPTY: i8 = 0;
    /// Bee facing north (row − 1).
    pub const BEE_NORTH: i8 = 1;
    /// Bee facing east (col + 1).
    pub const BEE_EAST: i8 = 2;
    /// Bee facing south (row + 1).
    pub const BEE_SOUTH: i8 = 3;
    /// Bee facing west (col − 1).
    pub const BEE_WEST: i8 = 4;
    /// Wall: impassable and opaque to heat.
    pub const WALL: i8 = 5;
    /// Heater: heat source, impassable to bees.
    pub const HEATER: i8 = 6;
    /// Cooler: cold source, impassable to bees.
    pub const COOLER: i8 = 7;

    /// Largest legal non-negative code.
    pub const MAX: i8 = COOLER;

    /// Whether `value` encodes a bee, active or waiting.
    pub fn is_bee(value: i8) -> bool {
        value < 0 || (BEE_NORTH..=BEE_WEST).contains(&value)
    }

    /// Whether `value` is a legal cell code.
    pub fn is_legal(value: i8) -> bool {
        value <= MAX
    }
}

/// A cell coordinate: `(row, col)` with `0 <= row < rows`, `0 <= col < cols`.
///
/// Components are `i32` so that neighbour arithmetic can go one step out of
/// bounds without wrapping; bounds checks happen at the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Row index (0 at the top, grows southward).
    pub row: i32,
    /// Column index (0 at the left, grows eastward).
    pub col: i32,
}

impl Pos {
    /// Create a position from row and column.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position reached by applying `(dr, dc)`.
    pub fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The adjacent position one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.offset();
        self.offset(dr, dc)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Cardinal heading of an active bee.
///
/// Discriminants match the packed codes 1–4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Direction {
    /// Toward row − 1.
    North = 1,
    /// Toward col + 1.
    East = 2,
    /// Toward row + 1.
    South = 3,
    /// Toward col − 1.
    West = 4,
}

impl Direction {
    /// Decode a packed bee code. Returns `None` for anything outside 1–4.
    pub fn from_code(value: i8) -> Option<Self> {
        match value {
            code::BEE_NORTH => Some(Self::North),
            code::BEE_EAST => Some(Self::East),
            code::BEE_SOUTH => Some(Self::South),
            code::BEE_WEST => Some(Self::West),
            _ => None,
        }
    }

    /// The packed code for this heading.
    pub fn code(self) -> i8 {
        self as i8
    }

    /// The `(row_offset, col_offset)` of one step in this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }

    /// The heading after bouncing off a wall: `(code + 1) % 4 + 1` in the
    /// packed domain, i.e. N↔S and E↔W.
    pub fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        write!(f, "{name}")
    }
}

/// Typed view of one grid cell.
///
/// The packed grid stores `i8`; this enum is the boundary representation
/// for map construction and inspection. `Waiting(k)` holds the remaining
/// tick count, `1..=128`, and round-trips with code `-k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Nothing here; bees may move in.
    Empty,
    /// An active bee with a heading.
    Bee(Direction),
    /// A stopped bee; becomes active again after this many ticks.
    Waiting(u8),
    /// Impassable, heat-opaque wall.
    Wall,
    /// Heat source.
    Heater,
    /// Cold source.
    Cooler,
}

impl Cell {
    /// Decode a packed code. Returns `None` for codes above [`code::MAX`]
    /// and for `Waiting(0)` (which has no encoding).
    pub fn from_code(value: i8) -> Option<Self> {
        match value {
            code::EMPTY => Some(Self::Empty),
            code::WALL => Some(Self::Wall),
            code::HEATER => Some(Self::Heater),
            code::COOLER => Some(Self::Cooler),
            v if v < 0 => Some(Self::Waiting((-(v as i16)) as u8)),
            v => Direction::from_code(v).map(Self::Bee),
        }
    }

    /// Encode into the packed representation.
    ///
    /// `Waiting(k)` requires `1 <= k <= 128` so `-k` fits an `i8`; values
    /// outside that range are a construction bug.
    pub fn to_code(self) -> i8 {
        match self {
            Self::Empty => code::EMPTY,
            Self::Bee(dir) => dir.code(),
            Self::Waiting(k) => {
                debug_assert!((1..=128).contains(&(k as i16)), "waiting {k} out of range");
                (-(k as i16)) as i8
            }
            Self::Wall => code::WALL,
            Self::Heater => code::HEATER,
            Self::Cooler => code::COOLER,
        }
    }

    /// Whether this cell holds a bee, active or waiting.
    pub fn is_bee(self) -> bool {
        matches!(self, Self::Bee(_) | Self::Waiting(_))
    }
}
