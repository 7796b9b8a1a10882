//! Day 4: word search for `XMAS` and X-shaped `MAS` pairs.

use anyhow::Result;

const WORD: &[u8] = b"XMAS";
const ARM: &[u8] = b"MAS";

fn parse(input: &str) -> Vec<&[u8]> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::as_bytes)
        .collect()
}

/// True if `word` reads from (row, col) along (row_step, col_step).
///
/// Rows may have unequal widths; anything off the grid mismatches.
fn is_word(
    grid: &[&[u8]],
    word: &[u8],
    mut row: isize,
    mut col: isize,
    row_step: isize,
    col_step: isize,
) -> bool {
    for &letter in word {
        let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };
        if r >= grid.len() || c >= grid[r].len() || grid[r][c] != letter {
            return false;
        }
        row += row_step;
        col += col_step;
    }
    true
}

/// Count `XMAS` occurrences in all eight directions from every cell.
pub fn part_one(input: &str) -> Result<u64> {
    let grid = parse(input);
    let mut count = 0;
    for row in 0..grid.len() {
        for col in 0..grid[row].len() {
            for row_step in -1..=1isize {
                for col_step in -1..=1isize {
                    if (row_step, col_step) == (0, 0) {
                        continue;
                    }
                    if is_word(&grid, WORD, row as isize, col as isize, row_step, col_step) {
                        count += 1;
                    }
                }
            }
        }
    }
    Ok(count)
}

/// True if (row, col) is the shared `A` of two diagonal `MAS` strings.
fn is_x_mas_center(grid: &[&[u8]], row: isize, col: isize) -> bool {
    let mut arms = 0;
    for (row_step, col_step) in [(-1, -1), (-1, 1), (1, -1), (1, 1)] {
        if is_word(grid, ARM, row - row_step, col - col_step, row_step, col_step) {
            arms += 1;
        }
    }
    arms == 2
}

/// Count cells that center an X of two diagonal `MAS` strings.
pub fn part_two(input: &str) -> Result<u64> {
    let grid = parse(input);
    let mut count = 0;
    for row in 0..grid.len() {
        for col in 0..grid[row].len() {
            if is_x_mas_center(&grid, row as isize, col as isize) {
                count += 1;
            }
        }
    }
    Ok(count)
}
