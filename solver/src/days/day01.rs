//! Day 1: total distance and similarity score between two location lists.

use std::collections::HashMap;

use anyhow::{Context, Result, bail};

fn parse(input: &str) -> Result<(Vec<u64>, Vec<u64>)> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(first), Some(second)) = (fields.next(), fields.next()) else {
            bail!("line {}: expected two columns, got {line:?}", index + 1);
        };
        left.push(
            first
                .parse()
                .with_context(|| format!("line {}: bad integer {first:?}", index + 1))?,
        );
        right.push(
            second
                .parse()
                .with_context(|| format!("line {}: bad integer {second:?}", index + 1))?,
        );
    }
    Ok((left, right))
}

/// Sum of pairwise distances between the two lists, both sorted ascending.
pub fn part_one(input: &str) -> Result<u64> {
    let (mut left, mut right) = parse(input)?;
    left.sort_unstable();
    right.sort_unstable();
    Ok(left.iter().zip(&right).map(|(l, r)| l.abs_diff(*r)).sum())
}

/// Similarity score: each left value times its occurrence count on the right.
pub fn part_two(input: &str) -> Result<u64> {
    let (left, right) = parse(input)?;
    let mut counts: HashMap<u64, u64> = HashMap::new();
    for value in right {
        *counts.entry(value).or_default() += 1;
    }
    Ok(left
        .iter()
        .map(|value| value * counts.get(value).copied().unwrap_or(0))
        .sum())
}
