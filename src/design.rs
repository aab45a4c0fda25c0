//! Acceptance checks for puzzle designs.
//!
//! A puzzle is accepted when every color can reach its chip and the shortest
//! path of each lies inside the configured window.

use std::fmt;
use std::ops::RangeInclusive;

use anyhow::{ensure, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::{solve, Color, ColorMap, Move, Puzzle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search depth limit. Deeper solutions are reported as not found.
    pub max_depth: usize,
    /// Accepted shortest path lengths, inclusive.
    pub accept: RangeInclusive<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 10,
            accept: 3..=8,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.accept.is_empty(),
            "Empty acceptance window {}..={}",
            self.accept.start(),
            self.accept.end(),
        );
        ensure!(
            *self.accept.end() <= self.max_depth,
            "Acceptance window ends at {} beyond the depth limit {}",
            self.accept.end(),
            self.max_depth,
        );
        Ok(())
    }
}

/// Per-color search results of one puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    config: Config,
    solutions: ColorMap<Option<Vec<Move>>>,
}

impl Report {
    pub fn solution(&self, color: Color) -> Option<&[Move]> {
        self.solutions[color].as_deref()
    }

    pub fn depth(&self, color: Color) -> Option<usize> {
        self.solutions[color].as_ref().map(Vec::len)
    }

    pub fn is_accepted(&self) -> bool {
        Color::ALL.into_iter().all(|color| {
            self.depth(color)
                .map_or(false, |depth| self.config.accept.contains(&depth))
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (color, solution) in self.solutions.iter() {
            write!(f, "[{color:<6}] ")?;
            let Some(path) = solution else {
                writeln!(f, "no solution within {} moves", self.config.max_depth)?;
                continue;
            };
            let status = if self.config.accept.contains(&path.len()) {
                "OK"
            } else {
                "out of range"
            };
            write!(f, "{} moves [{status}]", path.len())?;
            for (mv, i) in path.iter().zip(0..) {
                f.write_str(if i == 0 { ": " } else { " -> " })?;
                write!(f, "{mv}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn verify(puzzle: &Puzzle, config: &Config) -> Report {
    verify_with(puzzle, config, || {})
}

/// Search every color in parallel. `on_step` is shared by all searches.
pub fn verify_with(puzzle: &Puzzle, config: &Config, on_step: impl Fn() + Sync) -> Report {
    let results = Color::ALL
        .par_iter()
        .map(|&color| {
            let path = solve::bfs(puzzle, color, config.max_depth, &on_step);
            debug!(%color, depth = ?path.as_ref().map(Vec::len), "Searched");
            (color, path)
        })
        .collect::<Vec<_>>();

    let mut solutions = ColorMap::default();
    for (color, path) in results {
        solutions[color] = path;
    }
    Report {
        config: config.clone(),
        solutions,
    }
}

/// Verify candidate layouts in order and return the index and report of the
/// first accepted one.
pub fn first_accepted<'a>(
    candidates: impl IntoIterator<Item = &'a Puzzle>,
    config: &Config,
) -> Option<(usize, Report)> {
    candidates
        .into_iter()
        .enumerate()
        .find_map(|(idx, puzzle)| {
            let report = verify(puzzle, config);
            let accepted = report.is_accepted();
            info!(candidate = idx, accepted, "Tried layout");
            accepted.then_some((idx, report))
        })
}
