//! Optimal move generation for the three-peg puzzle
//!
//! The solver uses the classic divide-and-conquer strategy: to move `n` disks
//! from peg A to peg C, first park the top `n - 1` disks on the spare peg B,
//! move the largest disk to C, then bring the `n - 1` disks from B onto it.
//!
//! ```text
//! solve(n, A → C) = solve(n-1, A → B) ++ [A → C] ++ solve(n-1, B → C)
//! ```
//!
//! This ordering never places a larger disk on a smaller one and produces the
//! minimum number of moves, `2^n - 1`.

use std::fmt;

/// A disk, identified by its size. Larger value = larger disk.
pub type Disk = u8;

/// One of the three pegs, ordered left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    Left,
    Middle,
    Right,
}

impl Peg {
    /// All pegs in positional order
    pub const ALL: [Peg; 3] = [Peg::Left, Peg::Middle, Peg::Right];

    /// Positional index (0, 1 or 2)
    pub fn index(self) -> usize {
        match self {
            Peg::Left => 0,
            Peg::Middle => 1,
            Peg::Right => 2,
        }
    }

    /// Peg at a positional index, if in range
    pub fn from_index(index: usize) -> Option<Peg> {
        Peg::ALL.get(index).copied()
    }

    /// The peg that is neither `self` nor `other`.
    ///
    /// When `self == other` there is no unique spare; the next peg to the
    /// right (wrapping) is returned.
    pub fn spare(self, other: Peg) -> Peg {
        // Indices sum to 3 across all pegs
        match 3usize.checked_sub(self.index() + other.index()) {
            Some(i) if self != other => Peg::ALL[i],
            _ => Peg::ALL[(self.index() + 1) % 3],
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Peg::Left => "left",
            Peg::Middle => "middle",
            Peg::Right => "right",
        };
        write!(f, "{}", name)
    }
}

/// Move the top disk of `from` onto `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    pub fn new(from: Peg, to: Peg) -> Self {
        Move { from, to }
    }

    /// Move as a pair of positional indices, `(from, to)`
    pub fn indices(self) -> (usize, usize) {
        (self.from.index(), self.to.index())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// Number of moves in an optimal solution for `n` disks, `2^n - 1`.
///
/// Saturates at `usize::MAX` for disk counts that cannot be represented.
pub fn move_count(n: u8) -> usize {
    1usize
        .checked_shl(u32::from(n))
        .map_or(usize::MAX, |total| total - 1)
}

/// Generate the optimal move sequence that transfers `n` disks from the left
/// peg to the right peg.
///
/// `n` is assumed to be validated by the caller (see
/// [`DiskCount`](crate::config::DiskCount)). `n == 0` yields no moves.
pub fn generate_moves(n: u8) -> Vec<Move> {
    solve(n, Peg::Left, Peg::Right)
}

/// Generate the optimal move sequence that transfers `n` disks from `from`
/// to `to`, using the remaining peg as the spare.
pub fn solve(n: u8, from: Peg, to: Peg) -> Vec<Move> {
    let mut moves = Vec::with_capacity(move_count(n).min(1 << 16));
    if from != to {
        solve_into(&mut moves, n, from, to, from.spare(to));
    }
    moves
}

fn solve_into(moves: &mut Vec<Move>, n: u8, from: Peg, to: Peg, via: Peg) {
    if n == 0 {
        return;
    }
    solve_into(moves, n - 1, from, via, to);
    moves.push(Move::new(from, to));
    solve_into(moves, n - 1, via, to, from);
}
