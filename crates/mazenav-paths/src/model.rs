//! The maze as the search strategies see it: a wall/open terrain snapshot
//! plus the live collectible set.

use std::collections::HashSet;
use std::fmt;

use mazenav_core::{Cell, Grid, Point, Range};

/// Open floor the agent can walk on.
pub const OPEN: Cell = Cell::new(0);
/// Impassable wall.
pub const WALL: Cell = Cell::new(1);

/// A maze: terrain produced by the external generator, and the set of cells
/// currently carrying a collectible.
///
/// The terrain never changes during a search. The collectible set is
/// mutated *between* searches as the agent consumes cells
/// ([`Maze::collect`]) and is read-only within one call.
#[derive(Debug)]
pub struct Maze {
    terrain: Grid,
    collectibles: HashSet<Point>,
}

impl Maze {
    /// Wrap a generated terrain grid. The collectible set starts empty.
    pub fn new(terrain: Grid) -> Self {
        Self {
            terrain,
            collectibles: HashSet::new(),
        }
    }

    /// Parse a maze from its text form.
    ///
    /// `#` is a wall, `.` an open cell, `*` an open cell holding a
    /// collectible. All lines must have the same width.
    pub fn parse(s: &str) -> Result<Maze, ParseError> {
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let height = lines.len() as i32;
        let width = lines.first().map_or(0, |l| l.chars().count()) as i32;

        if lines.iter().any(|l| l.chars().count() as i32 != width) {
            return Err(ParseError::InconsistentSize(s.to_string()));
        }

        let mut terrain = Grid::new(width, height);
        let mut collectibles = HashSet::new();
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    '#' => terrain.set(p, WALL),
                    '.' => terrain.set(p, OPEN),
                    '*' => {
                        terrain.set(p, OPEN);
                        collectibles.insert(p);
                    }
                    _ => return Err(ParseError::InvalidRune { ch, pos: p }),
                }
            }
        }

        Ok(Maze {
            terrain,
            collectibles,
        })
    }

    /// The maze rectangle.
    pub fn bounds(&self) -> Range {
        self.terrain.bounds()
    }

    /// Whether `p` is a wall. Out-of-bounds cells count as walls.
    pub fn is_wall(&self, p: Point) -> bool {
        !self.terrain.at(p).is_some_and(|c| c == OPEN)
    }

    /// Whether `p` currently holds a collectible.
    pub fn is_collectible(&self, p: Point) -> bool {
        self.collectibles.contains(&p)
    }

    /// Remove the collectible at `p`. Returns whether one was present.
    ///
    /// Called by the agent between searches; never during one.
    pub fn collect(&mut self, p: Point) -> bool {
        self.collectibles.remove(&p)
    }

    /// Place a collectible on the open cell `p`. Returns whether it was
    /// placed (walls and out-of-bounds cells are rejected).
    pub fn place_collectible(&mut self, p: Point) -> bool {
        if self.is_wall(p) {
            return false;
        }
        self.collectibles.insert(p)
    }

    /// Number of collectibles still on the maze.
    pub fn collectible_count(&self) -> usize {
        self.collectibles.len()
    }

    /// Append the in-bounds, non-wall cardinal neighbours of `p` into
    /// `buf`, in fixed up, right, down, left order. The caller clears `buf`.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if !self.is_wall(n) {
                buf.push(n);
            }
        }
    }
}

/// Errors that can occur when parsing a maze from text.
#[derive(Debug, Clone)]
pub enum ParseError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character not in the allowed set was found.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "maze: inconsistent line widths:\n{s}"),
            Self::InvalidRune { ch, pos } => {
                write!(
                    f,
                    "maze contains invalid rune \u{201c}{ch}\u{201d} at ({}, {})",
                    pos.x, pos.y
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
