use std::path::Path;

use anyhow::{Context, Result};
use hyper_robot_solver::{Color, Direction, Puzzle};

pub const SEPARATOR: &str = "================\n";
pub const TEST_DIR: &str = "tests";
pub const EXTENTION: &str = "txt";

/// Split a test file into its header line and the puzzle below it.
#[allow(unused)]
pub fn parse_input(content: &str) -> Result<(&str, &str, Puzzle)> {
    let input = content
        .split_once(SEPARATOR)
        .map_or(content, |(input, _)| input)
        .trim();
    let (header, map) = input.split_once('\n').context("No header line")?;
    let puzzle = map.parse::<Puzzle>().context("Invalid puzzle")?;
    Ok((input, header, puzzle))
}

/// Parse `"red right"`.
#[allow(unused)]
pub fn parse_action(action: &str) -> Result<(Color, Direction)> {
    let (color, dir) = action
        .trim()
        .split_once(' ')
        .with_context(|| format!("Invalid action: {action:?}"))?;
    Ok((color.parse()?, dir.parse()?))
}

/// Puzzle texts of all test files in `subdir`, in canonical form.
#[allow(unused)]
pub fn load_maps(subdir: &str) -> Vec<(String, String)> {
    list_tests(subdir)
        .into_iter()
        .map(|(name, path)| {
            let content = std::fs::read_to_string(&path).unwrap();
            let (input, _) = content.split_once(SEPARATOR).unwrap();
            let (_, map) = input.trim().split_once('\n').unwrap();
            (name, format!("{map}\n"))
        })
        .collect()
}

fn list_tests(subdir: &str) -> Vec<(String, std::path::PathBuf)> {
    let mut tests = std::fs::read_dir(Path::new(TEST_DIR).join(subdir))
        .unwrap()
        .filter_map(|ent| {
            let path = ent.unwrap().path();
            if path.extension().map_or(true, |ext| ext != EXTENTION) {
                return None;
            }
            let name = path.file_stem().unwrap().to_str().unwrap().to_owned();
            Some((name, path))
        })
        .collect::<Vec<_>>();
    tests.sort();
    tests
}

#[allow(unused)]
pub fn run_tests(subdir: &str, mut f: impl FnMut(&str) -> Result<String>) {
    let tests = list_tests(subdir);
    assert!(!tests.is_empty(), "No tests in {subdir}");

    let do_update_tests = std::env::var("UPDATE_EXPECT").map_or(false, |v| v == "1");

    let mut failed_cnt = 0;
    for (name, path) in &tests {
        eprint!("{name}: ");
        let content = std::fs::read_to_string(path).unwrap();
        match f(&content) {
            Ok(got) if got == content => eprintln!("\x1B[32mOK\x1B[0m"),
            Ok(got) if do_update_tests => {
                std::fs::write(path, got).unwrap();
                eprintln!("\x1B[33mUpdated\x1B[0m");
            }
            Ok(got) => {
                eprintln!("\x1B[31mFAILED\x1B[0m\n{got}");
                failed_cnt += 1;
            }
            Err(err) => {
                eprintln!("\x1B[31mFAILED\x1B[0m\n{:?}", err);
                failed_cnt += 1;
            }
        }
    }

    if failed_cnt != 0 {
        eprintln!("{failed_cnt}/{} tests failed", tests.len());
        std::process::exit(1);
    }
}
