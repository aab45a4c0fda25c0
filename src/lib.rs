//! Move simulation and shortest-path search for sliding-robot puzzles.
//!
//! Four robots sit on a 16x16 board. A robot slides in a straight line until
//! a wall, the board edge, the 2x2 center block or another robot stops it.

use std::ops::{Index, IndexMut};

use anyhow::{bail, ensure, Result};
use arrayvec::ArrayVec;

pub mod design;
mod fmt;
mod parse;
pub mod solve;

pub use fmt::Diagram;

/// Side length of the board.
pub const SIZE: u8 = 16;

/// Cells no robot may ever enter.
pub const CENTER: [Pos; 4] = [Pos(7, 7), Pos(7, 8), Pos(8, 7), Pos(8, 8)];

/// A cell as `(row, column)`, both 0-indexed.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos(pub u8, pub u8);

impl Pos {
    pub fn row(self) -> u8 {
        self.0
    }

    pub fn col(self) -> u8 {
        self.1
    }

    pub fn is_center(self) -> bool {
        CENTER.contains(&self)
    }

    pub fn is_on_board(self) -> bool {
        self.0 < SIZE && self.1 < SIZE
    }

    /// The adjacent cell in `dir`, or `None` past the board edge.
    pub fn sibling(self, dir: Direction) -> Option<Pos> {
        const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let x = self.0.checked_add_signed(DIRECTIONS[dir as usize].0)?;
        let y = self.1.checked_add_signed(DIRECTIONS[dir as usize].1)?;
        if SIZE <= x || SIZE <= y {
            return None;
        }
        Some(Pos(x, y))
    }
}

/// Robot colors. The declaration order is the order robots are stored and
/// searched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red = 0,
    Blue,
    Yellow,
    Green,
}

impl Color {
    pub const ALL: [Self; 4] = [Self::Red, Self::Blue, Self::Yellow, Self::Green];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up = 0,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

/// One value per robot color.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorMap<T>(pub [T; 4]);

impl<T> ColorMap<T> {
    pub fn from_fn(f: impl FnMut(Color) -> T) -> Self {
        Self(Color::ALL.map(f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> + '_ {
        Color::ALL.into_iter().zip(&self.0)
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;
    fn index(&self, color: Color) -> &Self::Output {
        &self.0[color as usize]
    }
}
impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.0[color as usize]
    }
}

/// Robot positions. This is also the search state.
pub type Robots = ColorMap<Pos>;

/// Goal cell of each color.
pub type Chips = ColorMap<Pos>;

/// A single slide: `color` moved in `dir` and came to rest on `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub color: Color,
    pub dir: Direction,
    pub to: Pos,
}

impl Robots {
    fn is_occupied_by_other(&self, color: Color, pos: Pos) -> bool {
        self.iter().any(|(c, &p)| c != color && p == pos)
    }

    /// Where `color` stops when sliding in `dir`. Returns its current cell if
    /// it cannot move at all.
    pub fn destination(&self, color: Color, dir: Direction, walls: &Walls) -> Pos {
        let mut pos = self[color];
        while walls.can_step(pos, dir) {
            let Some(next) = pos.sibling(dir) else { break };
            if next.is_center() || self.is_occupied_by_other(color, next) {
                break;
            }
            pos = next;
        }
        pos
    }

    /// Slide `color` in `dir`. Returns `None` and leaves `self` untouched on a
    /// no-op move.
    pub fn go(&mut self, color: Color, dir: Direction, walls: &Walls) -> Option<Move> {
        let to = self.destination(color, dir, walls);
        if to == self[color] {
            return None;
        }
        self[color] = to;
        Some(Move { color, dir, to })
    }

    /// All states one non-trivial move away, ordered by color then direction.
    pub fn successors(&self, walls: &Walls) -> ArrayVec<(Move, Robots), 16> {
        let mut ret = ArrayVec::new();
        for color in Color::ALL {
            for dir in Direction::ALL {
                let mut next = *self;
                if let Some(mv) = next.go(color, dir, walls) {
                    ret.push((mv, next));
                }
            }
        }
        ret
    }
}

/// Static walls of a board.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Walls {
    /// `vertical[row][col]`: wall between columns `col - 1` and `col`. Column 0 is unused.
    vertical: [[bool; SIZE as usize]; SIZE as usize],
    /// `horizontal[row][col]`: wall between rows `row - 1` and `row`. Row 0 is unused.
    horizontal: [[bool; SIZE as usize]; SIZE as usize],
}

impl Walls {
    /// Whether a single step from `pos` in `dir` is allowed by walls and the
    /// board edge. Robots and the center block are not considered.
    pub fn can_step(&self, pos: Pos, dir: Direction) -> bool {
        let (row, col) = (pos.0 as usize, pos.1 as usize);
        let last = SIZE as usize - 1;
        match dir {
            Direction::Up => row != 0 && !self.horizontal[row][col],
            Direction::Down => row != last && !self.horizontal[row + 1][col],
            Direction::Left => col != 0 && !self.vertical[row][col],
            Direction::Right => col != last && !self.vertical[row][col + 1],
        }
    }

    pub fn is_vertical(&self, row: u8, col: u8) -> bool {
        Self::get(&self.vertical, row, col)
    }

    pub fn is_horizontal(&self, row: u8, col: u8) -> bool {
        Self::get(&self.horizontal, row, col)
    }

    /// Put a wall between `(row, col - 1)` and `(row, col)`.
    pub fn set_vertical(&mut self, row: u8, col: u8) -> Result<()> {
        ensure!(
            row < SIZE && (1..SIZE).contains(&col),
            "Vertical wall ({row}, {col}) out of range"
        );
        self.vertical[row as usize][col as usize] = true;
        Ok(())
    }

    /// Put a wall between `(row - 1, col)` and `(row, col)`.
    pub fn set_horizontal(&mut self, row: u8, col: u8) -> Result<()> {
        ensure!(
            (1..SIZE).contains(&row) && col < SIZE,
            "Horizontal wall ({row}, {col}) out of range"
        );
        self.horizontal[row as usize][col as usize] = true;
        Ok(())
    }

    fn get(grid: &[[bool; SIZE as usize]; SIZE as usize], row: u8, col: u8) -> bool {
        grid.get(row as usize)
            .and_then(|line| line.get(col as usize))
            .copied()
            .unwrap_or(false)
    }
}

/// A complete puzzle: start positions, chips and walls.
///
/// Construction validates that every coordinate is on the board, that robots
/// occupy distinct cells and that none starts in the center block. The search
/// relies on this and does not check again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    robots: Robots,
    chips: Chips,
    walls: Walls,
}

impl Puzzle {
    pub fn new(robots: Robots, chips: Chips, walls: Walls) -> Result<Self> {
        for (color, &pos) in robots.iter() {
            ensure!(pos.is_on_board(), "The {color} robot {pos} is off the board");
            ensure!(!pos.is_center(), "The {color} robot {pos} is in the center");
        }
        for (color, &pos) in chips.iter() {
            ensure!(pos.is_on_board(), "The {color} chip {pos} is off the board");
        }
        for (i, (color, &pos)) in robots.iter().enumerate() {
            if let Some((other, _)) = robots.iter().skip(i + 1).find(|&(_, &p)| p == pos) {
                bail!("The {color} and {other} robots share the cell {pos}");
            }
        }
        Ok(Self {
            robots,
            chips,
            walls,
        })
    }

    pub fn robots(&self) -> &Robots {
        &self.robots
    }

    pub fn chips(&self) -> &Chips {
        &self.chips
    }

    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    pub fn is_solved(&self, color: Color, robots: &Robots) -> bool {
        robots[color] == self.chips[color]
    }

    /// Re-apply `path` from the start positions, checking every recorded
    /// destination. Returns the final positions.
    pub fn replay(&self, path: &[Move]) -> Result<Robots> {
        let mut robots = self.robots;
        for (mv, i) in path.iter().zip(1..) {
            let got = robots.go(mv.color, mv.dir, &self.walls);
            ensure!(
                got == Some(*mv),
                "Step {i} ({} {}) does not land on {}",
                mv.color,
                mv.dir,
                mv.to,
            );
        }
        Ok(robots)
    }

    pub fn diagram<'a>(&'a self, robots: &'a Robots) -> Diagram<'a> {
        Diagram {
            puzzle: self,
            robots,
        }
    }
}
