// Board snapshots and the solution history they form

use crate::solver::{generate_moves, Disk, Move, Peg};
use rustc_hash::FxHashSet;

/// Arrangement of every disk across the three pegs.
///
/// Each peg is stored base-to-top: the first element is the disk resting on
/// the base, the last is the disk that can be moved next.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pegs: [Vec<Disk>; 3],
}

impl Snapshot {
    /// Starting position: disks `n, n-1, ..., 1` on the left peg
    pub fn initial(n: u8) -> Self {
        Snapshot {
            pegs: [(1..=n).rev().collect(), Vec::new(), Vec::new()],
        }
    }

    /// Build a snapshot from explicit peg contents (base-to-top)
    pub fn from_pegs(left: Vec<Disk>, middle: Vec<Disk>, right: Vec<Disk>) -> Self {
        Snapshot {
            pegs: [left, middle, right],
        }
    }

    /// Disks on a peg, base-to-top
    pub fn peg(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }

    /// The disk that would be moved next from `peg`
    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.peg(peg).last().copied()
    }

    /// Snapshot after applying `mv`.
    ///
    /// Legality is not checked here; moving from an empty peg leaves the
    /// board unchanged.
    pub fn apply(&self, mv: Move) -> Snapshot {
        let mut next = self.clone();
        if let Some(disk) = next.pegs[mv.from.index()].pop() {
            next.pegs[mv.to.index()].push(disk);
        }
        next
    }

    /// Whether `mv` takes a disk from a non-empty peg and lands it on an
    /// empty peg or a larger disk
    pub fn allows(&self, mv: Move) -> bool {
        match (self.top(mv.from), self.top(mv.to)) {
            (Some(_), None) => true,
            (Some(moving), Some(resting)) => moving < resting,
            (None, _) => false,
        }
    }

    /// Every peg is strictly decreasing from base to top
    pub fn is_legal(&self) -> bool {
        self.pegs
            .iter()
            .all(|peg| peg.windows(2).all(|pair| pair[0] > pair[1]))
    }

    /// Every disk `1..=n` appears exactly once, and nothing else is on the board
    pub fn contains_exactly(&self, n: u8) -> bool {
        let mut seen: FxHashSet<Disk> = FxHashSet::default();
        for &disk in self.pegs.iter().flatten() {
            if disk == 0 || disk > n || !seen.insert(disk) {
                return false;
            }
        }
        seen.len() == usize::from(n)
    }

    /// All disks have been transferred to the right peg
    pub fn is_solved(&self) -> bool {
        self.pegs[0].is_empty() && self.pegs[1].is_empty()
    }
}

/// Fold `moves` over the initial position for `n` disks.
///
/// Returns one snapshot per move, prefixed by the starting snapshot, so the
/// result always has `moves.len() + 1` entries.
pub fn project(n: u8, moves: &[Move]) -> Vec<Snapshot> {
    let mut current = Snapshot::initial(n);
    let mut snapshots = Vec::with_capacity(moves.len() + 1);
    snapshots.push(current.clone());
    for &mv in moves {
        current = current.apply(mv);
        snapshots.push(current.clone());
    }
    snapshots
}

/// Full solution history for one disk count
#[derive(Debug, Clone)]
pub struct Solution {
    disks: u8,
    moves: Vec<Move>,
    snapshots: Vec<Snapshot>,
}

impl Solution {
    /// Generate the moves for `disks` and project them into snapshots
    pub fn new(disks: u8) -> Self {
        let moves = generate_moves(disks);
        let snapshots = project(disks, &moves);
        Solution {
            disks,
            moves,
            snapshots,
        }
    }

    /// Disk count this solution was generated for
    pub fn disks(&self) -> u8 {
        self.disks
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Number of snapshots (`2^n`)
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true for a generated solution; the starting snapshot is always present
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the solved snapshot
    pub fn last_index(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The move that produced snapshot `index` (`None` for the starting snapshot)
    pub fn move_into(&self, index: usize) -> Option<Move> {
        index
            .checked_sub(1)
            .and_then(|i| self.moves.get(i))
            .copied()
    }

    /// Check the board invariants on every snapshot.
    ///
    /// Returns the index of the first snapshot that breaks legality or disk
    /// conservation.
    pub fn first_invalid(&self) -> Option<usize> {
        self.snapshots
            .iter()
            .position(|s| !s.is_legal() || !s.contains_exactly(self.disks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot() {
        let snapshot = Snapshot::initial(3);
        assert_eq!(snapshot.peg(Peg::Left), &[3, 2, 1]);
        assert!(snapshot.peg(Peg::Middle).is_empty());
        assert!(snapshot.peg(Peg::Right).is_empty());
        assert_eq!(snapshot.top(Peg::Left), Some(1));
    }

    #[test]
    fn test_project_two_disks() {
        let snapshots = project(2, &generate_moves(2));
        assert_eq!(snapshots.len(), 4);
        assert_eq!(snapshots[0], Snapshot::from_pegs(vec![2, 1], vec![], vec![]));
        assert_eq!(snapshots[1], Snapshot::from_pegs(vec![2], vec![1], vec![]));
        assert_eq!(snapshots[2], Snapshot::from_pegs(vec![], vec![1], vec![2]));
        assert_eq!(snapshots[3], Snapshot::from_pegs(vec![], vec![], vec![2, 1]));
    }

    #[test]
    fn test_project_zero_disks() {
        let snapshots = project(0, &[]);
        assert_eq!(snapshots, vec![Snapshot::default()]);
        assert!(snapshots[0].is_solved());
    }

    #[test]
    fn test_apply_leaves_other_pegs() {
        let before = Snapshot::from_pegs(vec![3], vec![2], vec![1]);
        let after = before.apply(Move::new(Peg::Right, Peg::Middle));
        assert_eq!(after, Snapshot::from_pegs(vec![3], vec![2, 1], vec![]));
        // `before` is untouched
        assert_eq!(before.peg(Peg::Right), &[1]);
    }

    #[test]
    fn test_allows() {
        let snapshot = Snapshot::from_pegs(vec![3], vec![2], vec![]);
        assert!(snapshot.allows(Move::new(Peg::Middle, Peg::Left)));
        assert!(snapshot.allows(Move::new(Peg::Left, Peg::Right)));
        assert!(!snapshot.allows(Move::new(Peg::Left, Peg::Middle)));
        assert!(!snapshot.allows(Move::new(Peg::Right, Peg::Left)));
    }

    #[test]
    fn test_invariant_checks_reject_bad_boards() {
        let stacked_wrong = Snapshot::from_pegs(vec![1, 2], vec![], vec![]);
        assert!(!stacked_wrong.is_legal());

        let duplicate = Snapshot::from_pegs(vec![2], vec![2], vec![]);
        assert!(!duplicate.contains_exactly(2));

        let missing = Snapshot::from_pegs(vec![2], vec![], vec![]);
        assert!(!missing.contains_exactly(2));

        let extra = Snapshot::from_pegs(vec![3, 1], vec![2], vec![]);
        assert!(!extra.contains_exactly(2));
    }

    #[test]
    fn test_solution_accessors() {
        let solution = Solution::new(3);
        assert_eq!(solution.disks(), 3);
        assert_eq!(solution.len(), 8);
        assert_eq!(solution.last_index(), 7);
        assert_eq!(solution.moves().len(), 7);
        assert_eq!(solution.move_into(0), None);
        assert_eq!(
            solution.move_into(1),
            Some(Move::new(Peg::Left, Peg::Right))
        );
        assert!(solution.get(8).is_none());
        assert_eq!(solution.first_invalid(), None);
    }
}
