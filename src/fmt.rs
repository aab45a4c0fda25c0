use std::fmt::{self, Write};

use crate::{Color, Direction, Move, Pos, Puzzle, Robots, SIZE};

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in Color::ALL {
            let (Pos(row, col), Pos(chip_row, chip_col)) = (self.robots[color], self.chips[color]);
            writeln!(f, "{row} {col} {chip_row} {chip_col}")?;
        }
        for line in &self.walls.vertical {
            write_bits(f, line[1..].iter().copied())?;
        }
        for col in 0..SIZE as usize {
            write_bits(f, self.walls.horizontal[1..].iter().map(|line| line[col]))?;
        }
        Ok(())
    }
}

fn write_bits(f: &mut fmt::Formatter<'_>, bits: impl Iterator<Item = bool>) -> fmt::Result {
    for bit in bits {
        f.write_char(if bit { '1' } else { '0' })?;
    }
    f.write_char('\n')
}

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
        }
    }

    fn initial(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Green => 'G',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.dir)
    }
}

impl fmt::Display for Robots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (color, pos)) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{color} {pos}")?;
        }
        Ok(())
    }
}

/// ASCII picture of a board with robots placed on it.
///
/// Robots are upper-case initials, uncovered chips lower-case, the center
/// block `#`. Walls are drawn as `|` and `-` between cells.
pub struct Diagram<'a> {
    pub(crate) puzzle: &'a Puzzle,
    pub(crate) robots: &'a Robots,
}

impl Diagram<'_> {
    fn cell(&self, pos: Pos) -> char {
        if let Some((color, _)) = self.robots.iter().find(|&(_, &p)| p == pos) {
            color.initial()
        } else if let Some((color, _)) = self.puzzle.chips.iter().find(|&(_, &p)| p == pos) {
            color.initial().to_ascii_lowercase()
        } else if pos.is_center() {
            '#'
        } else {
            '.'
        }
    }
}

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let walls = &self.puzzle.walls;
        let border = "-".repeat(2 * SIZE as usize - 1);

        writeln!(f, "+{border}+")?;
        for row in 0..SIZE {
            if row != 0 {
                f.write_char('|')?;
                for col in 0..SIZE {
                    if col != 0 {
                        f.write_char(' ')?;
                    }
                    f.write_char(if walls.is_horizontal(row, col) { '-' } else { ' ' })?;
                }
                f.write_str("|\n")?;
            }
            f.write_char('|')?;
            for col in 0..SIZE {
                if col != 0 {
                    f.write_char(if walls.is_vertical(row, col) { '|' } else { ' ' })?;
                }
                f.write_char(self.cell(Pos(row, col)))?;
            }
            f.write_str("|\n")?;
        }
        writeln!(f, "+{border}+")
    }
}
