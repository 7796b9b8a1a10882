//! Pure, deterministic puzzle solvers, one module per day.
//!
//! Day modules must be free of I/O side effects and independent of each
//! other. Each takes the raw input text and returns integer answers.

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;

use anyhow::{Result, bail};
use serde::Serialize;

/// Lowest implemented day.
pub const FIRST_DAY: u8 = 1;
/// Highest implemented day.
pub const LAST_DAY: u8 = 6;

/// Both part answers for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Answers {
    pub day: u8,
    pub part1: u64,
    pub part2: u64,
}

/// Solve both parts of `day` against `input`.
pub fn solve(day: u8, input: &str) -> Result<Answers> {
    let (part1, part2) = match day {
        1 => (day01::part_one(input)?, day01::part_two(input)?),
        2 => (day02::part_one(input)?, day02::part_two(input)?),
        3 => (day03::part_one(input)?, day03::part_two(input)?),
        4 => (day04::part_one(input)?, day04::part_two(input)?),
        5 => (day05::part_one(input)?, day05::part_two(input)?),
        6 => (day06::part_one(input)?, day06::part_two(input)?),
        _ => bail!("no solver for day {day} (implemented: {FIRST_DAY}..={LAST_DAY})"),
    };
    Ok(Answers { day, part1, part2 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_unknown_day_errors() {
        let err = solve(7, "").expect_err("day 7 is not implemented");
        assert!(err.to_string().contains("day 7"));
    }

    #[test]
    fn solve_dispatches_to_day_module() {
        let answers = solve(1, "1 2\n").expect("solve");
        assert_eq!(
            answers,
            Answers {
                day: 1,
                part1: 1,
                part2: 0,
            }
        );
    }
}
