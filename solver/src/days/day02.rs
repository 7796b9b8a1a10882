//! Day 2: counting safe level reports.

use anyhow::{Context, Result};

fn parse(input: &str) -> Result<Vec<Vec<i64>>> {
    let mut reports = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let levels = line
            .split_whitespace()
            .map(|field| {
                field
                    .parse::<i64>()
                    .with_context(|| format!("line {}: bad level {field:?}", index + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        reports.push(levels);
    }
    Ok(reports)
}

/// A report is safe iff strictly monotonic (direction fixed by the first
/// pair) and every adjacent gap is within 1..=3.
fn is_safe(levels: &[i64]) -> bool {
    if levels.len() < 2 {
        return true;
    }
    let increasing = levels[0] < levels[1];
    levels.windows(2).all(|pair| {
        let ordered = if increasing {
            pair[0] < pair[1]
        } else {
            pair[0] > pair[1]
        };
        ordered && (1..=3).contains(&(pair[1] - pair[0]).abs())
    })
}

/// True if removing at most one level makes the report safe.
///
/// Removing the first level of an already-safe report keeps it safe, so
/// trying every single removal also covers the no-removal case.
fn is_safe_with_dampener(levels: &[i64]) -> bool {
    (0..levels.len()).any(|skip| {
        let mut reduced = levels.to_vec();
        reduced.remove(skip);
        is_safe(&reduced)
    })
}

/// Number of safe reports.
pub fn part_one(input: &str) -> Result<u64> {
    let reports = parse(input)?;
    Ok(reports.iter().filter(|levels| is_safe(levels)).count() as u64)
}

/// Number of reports safe after removing at most one level.
pub fn part_two(input: &str) -> Result<u64> {
    let reports = parse(input)?;
    Ok(reports
        .iter()
        .filter(|levels| is_safe_with_dampener(levels))
        .count() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn part_one_counts_safe_reports() {
        assert_eq!(part_one(SAMPLE).expect("part one"), 2);
    }

    #[test]
    fn part_two_counts_dampened_reports() {
        assert_eq!(part_two(SAMPLE).expect("part two"), 4);
    }

    #[test]
    fn equal_adjacent_levels_are_unsafe() {
        assert!(!is_safe(&[4, 4, 5]));
    }

    #[test]
    fn gap_over_three_is_unsafe() {
        assert!(!is_safe(&[1, 5, 6]));
    }

    #[test]
    fn dampener_allows_one_direction_flip() {
        assert!(is_safe_with_dampener(&[1, 3, 2, 4, 5]));
    }

    #[test]
    fn non_numeric_level_is_an_error() {
        assert!(part_one("1 2 x\n").is_err());
    }
}
