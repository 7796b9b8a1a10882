//! Day 6: guard patrol over an obstacle field.
//!
//! The guard starts at `^` facing up, walks forward until blocked by a `#`
//! (then turns right in place), and eventually leaves the field. Part 1
//! counts the distinct cells visited on the way out. Part 2 counts the
//! cells where one extra obstacle would trap the guard in a loop instead.

use std::collections::HashSet;

use anyhow::{Result, bail};

const OBSTACLE: u8 = b'#';
const START: u8 = b'^';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    fn turned_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }
}

/// Guard state. A value type: moves produce new positions, equality and
/// hashing cover row, column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Position {
    row: isize,
    col: isize,
    dir: Direction,
}

impl Position {
    fn forward(self) -> Position {
        let (row_step, col_step) = self.dir.delta();
        Position {
            row: self.row + row_step,
            col: self.col + col_step,
            ..self
        }
    }

    fn turned_right(self) -> Position {
        Position {
            dir: self.dir.turned_right(),
            ..self
        }
    }

    fn cell(self) -> (isize, isize) {
        (self.row, self.col)
    }
}

/// The character grid, immutable after parse. Rows may have unequal widths.
struct Field {
    rows: Vec<Vec<u8>>,
}

impl Field {
    fn parse(input: &str) -> Field {
        let rows = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.as_bytes().to_vec())
            .collect();
        Field { rows }
    }

    fn contains(&self, position: Position) -> bool {
        let (Ok(row), Ok(col)) = (
            usize::try_from(position.row),
            usize::try_from(position.col),
        ) else {
            return false;
        };
        row < self.rows.len() && col < self.rows[row].len()
    }

    /// Caller guarantees `position` is inside the field.
    fn is_obstacle(&self, position: Position) -> bool {
        self.rows[position.row as usize][position.col as usize] == OBSTACLE
    }

    fn start(&self) -> Result<Position> {
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == START {
                    return Ok(Position {
                        row: row as isize,
                        col: col as isize,
                        dir: Direction::Up,
                    });
                }
            }
        }
        bail!("no start marker '^' in field");
    }
}

/// Cells the guard visits before leaving the field.
fn patrol_cells(field: &Field, start: Position) -> HashSet<(isize, isize)> {
    let mut visited = HashSet::new();
    let mut current = start;
    loop {
        visited.insert(current.cell());
        let next = current.forward();
        if !field.contains(next) {
            return visited;
        }
        if field.is_obstacle(next) {
            current = current.turned_right();
        } else {
            current = next;
        }
    }
}

/// True if an extra obstacle at `extra` traps the guard in a cycle.
///
/// A repeated (row, column, direction) state implies the deterministic walk
/// can never make new progress. States are recorded on turns as well, so a
/// guard blocked on all four sides is also reported as looping.
fn is_loop(field: &Field, start: Position, extra: (isize, isize)) -> bool {
    let mut seen: HashSet<Position> = HashSet::new();
    let mut current = start;
    loop {
        if !seen.insert(current) {
            return true;
        }
        let next = current.forward();
        if !field.contains(next) {
            return false;
        }
        if field.is_obstacle(next) || next.cell() == extra {
            current = current.turned_right();
        } else {
            current = next;
        }
    }
}

/// Distinct cells visited before the guard exits the field.
pub fn part_one(input: &str) -> Result<u64> {
    let field = Field::parse(input);
    let start = field.start()?;
    Ok(patrol_cells(&field, start).len() as u64)
}

/// Obstacle placements on the original path that trap the guard in a loop.
///
/// Only cells on the unobstructed patrol path can change the walk, so those
/// are the only candidates; the start cell is excluded.
pub fn part_two(input: &str) -> Result<u64> {
    let field = Field::parse(input);
    let start = field.start()?;
    let mut count = 0;
    for cell in patrol_cells(&field, start) {
        if cell == start.cell() {
            continue;
        }
        if is_loop(&field, start, cell) {
            count += 1;
        }
    }
    Ok(count)
}
