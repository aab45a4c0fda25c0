use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

use crate::{Chips, Color, Direction, Pos, Puzzle, Robots, Walls, SIZE};

impl FromStr for Puzzle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(|line| line.trim_end()).zip(1..);

        let mut robots = Robots::default();
        let mut chips = Chips::default();
        for color in Color::ALL {
            let (line, lineno) = lines
                .next()
                .with_context(|| format!("Missing the line of the {color} robot"))?;
            let coords = line
                .split_whitespace()
                .map(|word| {
                    word.parse::<u8>()
                        .with_context(|| format!("Line {lineno}: invalid coordinate {word:?}"))
                })
                .collect::<Result<Vec<_>>>()?;
            ensure!(
                coords.len() == 4,
                "Line {lineno}: expecting 4 coordinates, got {}",
                coords.len(),
            );
            robots[color] = Pos(coords[0], coords[1]);
            chips[color] = Pos(coords[2], coords[3]);
        }

        let mut walls = Walls::default();
        for row in 0..SIZE as usize {
            let (line, lineno) = lines
                .next()
                .with_context(|| format!("Missing vertical walls of row {row}"))?;
            for (bit, col) in parse_bits(line, lineno)?.into_iter().zip(1..) {
                walls.vertical[row][col] = bit;
            }
        }
        for col in 0..SIZE as usize {
            let (line, lineno) = lines
                .next()
                .with_context(|| format!("Missing horizontal walls of column {col}"))?;
            for (bit, row) in parse_bits(line, lineno)?.into_iter().zip(1..) {
                walls.horizontal[row][col] = bit;
            }
        }

        if let Some((line, lineno)) = lines.find(|(line, _)| !line.is_empty()) {
            bail!("Line {lineno}: unexpected trailing content {line:?}");
        }

        Puzzle::new(robots, chips, walls)
    }
}

fn parse_bits(line: &str, lineno: usize) -> Result<Vec<bool>> {
    let width = SIZE as usize - 1;
    ensure!(
        line.chars().count() == width,
        "Line {lineno}: expecting {width} wall bits, got {:?}",
        line,
    );
    line.chars()
        .map(|ch| match ch {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => bail!("Line {lineno}: invalid wall bit {ch:?}"),
        })
        .collect()
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "red" | "r" => Self::Red,
            "blue" | "b" => Self::Blue,
            "yellow" | "y" => Self::Yellow,
            "green" | "g" => Self::Green,
            _ => bail!("Invalid color: {s:?}"),
        })
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "up" | "U" => Self::Up,
            "down" | "D" => Self::Down,
            "left" | "L" => Self::Left,
            "right" | "R" => Self::Right,
            _ => bail!("Invalid direction: {s:?}"),
        })
    }
}
