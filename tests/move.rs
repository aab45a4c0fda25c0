use std::fmt::Write;

use anyhow::{ensure, Context};
use common::*;

mod common;

fn main() {
    run_tests("move", |content| {
        let (input, actions, puzzle) = parse_input(content)?;
        ensure!(!actions.is_empty(), "No actions");

        let mut robots = *puzzle.robots();
        let mut got = format!("{input}\n\n{SEPARATOR}");
        for (action, i) in actions.split(',').zip(1..) {
            let (color, dir) =
                parse_action(action).with_context(|| format!("Failed to parse step {i}"))?;
            match robots.go(color, dir, puzzle.walls()) {
                Some(mv) => {
                    ensure!(robots[color] == mv.to, "Step {i} moved to the wrong cell");
                    writeln!(got, "{color} {dir}: {robots}").unwrap();
                }
                None => writeln!(got, "{color} {dir}: no-op").unwrap(),
            }
        }

        Ok(got)
    });
}
