//! Day 5: print-queue page ordering.
//!
//! Input is a block of `A|B` rules (page A must print before page B), a
//! blank separator line, then comma-separated update lists. Rules only
//! apply between pages that are both present in an update.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use anyhow::{Context, Result, bail};

/// Page number mapped to the pages required before it.
type Rules = HashMap<u32, Vec<u32>>;

fn parse(input: &str) -> Result<(Rules, Vec<Vec<u32>>)> {
    let mut lines = input.lines();
    let mut predecessors: Rules = HashMap::new();
    for line in lines.by_ref() {
        if line.trim().is_empty() {
            break;
        }
        let (before, after) = line
            .split_once('|')
            .with_context(|| format!("rule {line:?}: expected A|B"))?;
        let before: u32 = before
            .trim()
            .parse()
            .with_context(|| format!("rule {line:?}: bad page number"))?;
        let after: u32 = after
            .trim()
            .parse()
            .with_context(|| format!("rule {line:?}: bad page number"))?;
        predecessors.entry(after).or_default().push(before);
    }

    let mut updates = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let update = line
            .split(',')
            .map(|page| {
                page.trim()
                    .parse::<u32>()
                    .with_context(|| format!("update {line:?}: bad page number"))
            })
            .collect::<Result<Vec<_>>>()?;
        updates.push(update);
    }
    Ok((predecessors, updates))
}

/// True if no page appears after a page that requires it.
fn is_ordered(update: &[u32], predecessors: &Rules) -> bool {
    let mut required_before: HashSet<u32> = HashSet::new();
    for &page in update {
        if required_before.contains(&page) {
            return false;
        }
        if let Some(required) = predecessors.get(&page) {
            required_before.extend(required.iter().copied());
        }
    }
    true
}

/// Reorder `update` by Kahn's algorithm over the rules restricted to its
/// own pages. Ready pages are drawn smallest-first so ties are stable.
fn reorder(update: &[u32], predecessors: &Rules) -> Result<Vec<u32>> {
    let members: HashSet<u32> = update.iter().copied().collect();
    let mut remaining: HashMap<u32, usize> = HashMap::new();
    let mut dependents: HashMap<u32, Vec<u32>> = HashMap::new();
    for &page in &members {
        let required: Vec<u32> = predecessors
            .get(&page)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .copied()
            .filter(|required_page| members.contains(required_page))
            .collect();
        remaining.insert(page, required.len());
        for required_page in required {
            dependents.entry(required_page).or_default().push(page);
        }
    }

    let mut ready: BinaryHeap<Reverse<u32>> = remaining
        .iter()
        .filter(|&(_, &count)| count == 0)
        .map(|(&page, _)| Reverse(page))
        .collect();
    let mut ordered = Vec::with_capacity(members.len());
    while let Some(Reverse(page)) = ready.pop() {
        ordered.push(page);
        let Some(next) = dependents.get(&page) else {
            continue;
        };
        for &dependent in next {
            let count = remaining
                .get_mut(&dependent)
                .context("dependent page missing from update")?;
            *count -= 1;
            if *count == 0 {
                ready.push(Reverse(dependent));
            }
        }
    }
    if ordered.len() != members.len() {
        bail!("ordering rules form a cycle among pages {update:?}");
    }
    Ok(ordered)
}

/// Sum of middle pages over updates already consistent with the rules.
pub fn part_one(input: &str) -> Result<u64> {
    let (predecessors, updates) = parse(input)?;
    Ok(updates
        .iter()
        .filter(|update| is_ordered(update, &predecessors))
        .map(|update| u64::from(update[update.len() / 2]))
        .sum())
}

/// Sum of middle pages over inconsistent updates after reordering.
pub fn part_two(input: &str) -> Result<u64> {
    let (predecessors, updates) = parse(input)?;
    let mut total = 0;
    for update in &updates {
        if is_ordered(update, &predecessors) {
            continue;
        }
        let ordered = reorder(update, &predecessors)?;
        total += u64::from(ordered[ordered.len() / 2]);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn part_one_sums_middles_of_ordered_updates() {
        assert_eq!(part_one(SAMPLE).expect("part one"), 143);
    }

    #[test]
    fn part_two_sums_middles_after_reordering() {
        assert_eq!(part_two(SAMPLE).expect("part two"), 123);
    }

    #[test]
    fn reorder_respects_all_rules() {
        let (predecessors, _) = parse(SAMPLE).expect("parse");
        let ordered = reorder(&[97, 13, 75, 29, 47], &predecessors).expect("reorder");
        assert_eq!(ordered, vec![97, 75, 47, 29, 13]);
    }

    #[test]
    fn cyclic_rules_are_an_error() {
        let input = "1|2\n2|1\n\n1,2\n";
        assert!(part_two(input).is_err());
    }

    #[test]
    fn rule_without_separator_is_an_error() {
        assert!(part_one("47-53\n\n47,53\n").is_err());
    }
}
