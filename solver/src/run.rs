//! Orchestration for the `run` and `all` CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::days::{self, Answers, FIRST_DAY, LAST_DAY};
use crate::io::config::load_config;
use crate::io::input::{input_path, read_input};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "solver.toml";

/// Where `run` should read its input from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Explicit `--input` path.
    Explicit(PathBuf),
    /// `<inputs_dir>/day<NN>.txt` from configuration.
    Configured,
}

/// Outcome of solving one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Solved(Answers),
    /// The input file for the day does not exist.
    MissingInput,
}

/// Solve one day from `source`, reporting a missing input distinctly.
pub fn solve_day(root: &Path, day: u8, source: &InputSource) -> Result<RunOutcome> {
    let path = match source {
        InputSource::Explicit(path) => path.clone(),
        InputSource::Configured => {
            let config = load_config(&root.join(CONFIG_FILE))?;
            root.join(input_path(Path::new(&config.inputs_dir), day))
        }
    };
    debug!(day, path = %path.display(), "solving");
    let Some(input) = read_input(&path)? else {
        return Ok(RunOutcome::MissingInput);
    };
    let answers = days::solve(day, &input).with_context(|| format!("solve day {day}"))?;
    Ok(RunOutcome::Solved(answers))
}

/// Solve every day whose input file exists; missing inputs are skipped.
pub fn solve_all(root: &Path) -> Result<Vec<Answers>> {
    let config = load_config(&root.join(CONFIG_FILE))?;
    let mut results = Vec::new();
    for day in FIRST_DAY..=LAST_DAY {
        let path = root.join(input_path(Path::new(&config.inputs_dir), day));
        let Some(input) = read_input(&path)? else {
            warn!(day, path = %path.display(), "input missing, skipping");
            continue;
        };
        debug!(day, "solving");
        let answers = days::solve(day, &input).with_context(|| format!("solve day {day}"))?;
        results.push(answers);
    }
    Ok(results)
}

/// Render answers in the CLI's two-line text form.
pub fn render_text(answers: &Answers) -> String {
    format!("part1: {}\npart2: {}", answers.part1, answers.part2)
}

/// Render answers as a single-line JSON object.
pub fn render_json(answers: &Answers) -> Result<String> {
    serde_json::to_string(answers).context("serialize answers")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const DAY01_SAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn solve_day_with_explicit_input() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("day01.txt");
        fs::write(&input, DAY01_SAMPLE).expect("write input");

        let outcome = solve_day(temp.path(), 1, &InputSource::Explicit(input)).expect("solve");
        assert_eq!(
            outcome,
            RunOutcome::Solved(Answers {
                day: 1,
                part1: 11,
                part2: 31,
            })
        );
    }

    #[test]
    fn solve_day_reports_missing_configured_input() {
        let temp = tempfile::tempdir().expect("tempdir");
        let outcome = solve_day(temp.path(), 1, &InputSource::Configured).expect("solve");
        assert_eq!(outcome, RunOutcome::MissingInput);
    }

    #[test]
    fn solve_all_skips_days_without_inputs() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("inputs")).expect("mkdir");
        fs::write(temp.path().join("inputs/day01.txt"), DAY01_SAMPLE).expect("write input");

        let results = solve_all(temp.path()).expect("solve all");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].day, 1);
        assert_eq!(results[0].part1, 11);
    }

    #[test]
    fn solve_all_honors_configured_inputs_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join(CONFIG_FILE), "inputs_dir = \"puzzles\"\n").expect("write cfg");
        fs::create_dir(temp.path().join("puzzles")).expect("mkdir");
        fs::write(temp.path().join("puzzles/day01.txt"), DAY01_SAMPLE).expect("write input");

        let results = solve_all(temp.path()).expect("solve all");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn render_text_is_two_lines() {
        let answers = Answers {
            day: 6,
            part1: 41,
            part2: 6,
        };
        assert_eq!(render_text(&answers), "part1: 41\npart2: 6");
    }

    #[test]
    fn render_json_includes_day() {
        let answers = Answers {
            day: 6,
            part1: 41,
            part2: 6,
        };
        assert_eq!(
            render_json(&answers).expect("render"),
            "{\"day\":6,\"part1\":41,\"part2\":6}"
        );
    }
}
