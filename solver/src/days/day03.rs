//! Day 3: summing `mul` instructions scanned out of corrupted memory.
//!
//! Valid instructions are `mul(X,Y)` with 1-3 digit operands, plus the
//! `do()` and `don't()` toggles honored by part two. Valid `mul` tokens
//! cannot overlap, so a single left-to-right scan finds them all.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

static INSTRUCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").unwrap());

fn scan(input: &str, honor_toggles: bool) -> Result<u64> {
    let mut enabled = true;
    let mut total = 0u64;
    for capture in INSTRUCTION_RE.captures_iter(input) {
        match &capture[0] {
            "do()" => enabled = true,
            "don't()" => enabled = false,
            _ => {
                if enabled || !honor_toggles {
                    let x: u64 = capture[1].parse().context("mul operand")?;
                    let y: u64 = capture[2].parse().context("mul operand")?;
                    total += x * y;
                }
            }
        }
    }
    Ok(total)
}

/// Sum of all `mul(X,Y)` products.
pub fn part_one(input: &str) -> Result<u64> {
    scan(input, false)
}

/// Sum of `mul(X,Y)` products, skipping those disabled by `don't()`.
///
/// The disabled state persists across lines until the next `do()`.
pub fn part_two(input: &str) -> Result<u64> {
    scan(input, true)
}
