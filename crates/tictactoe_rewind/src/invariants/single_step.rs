//! Single-step invariant: adjacent snapshots differ by exactly one move.

use strum::IntoEnumIterator;

use super::Invariant;
use crate::position::Position;
use crate::timeline::Timeline;
use crate::types::Square;

/// Invariant: each snapshot adds exactly one mark to its predecessor.
///
/// The differing cell must go from empty to occupied; marks are never
/// moved, replaced, or erased.
pub struct SingleStepInvariant;

impl Invariant<Timeline> for SingleStepInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.snapshots().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let mut changed = 0;
            for pos in Position::iter() {
                if prev.get(pos) != next.get(pos) {
                    changed += 1;
                    if prev.get(pos) != Square::Empty || next.get(pos) == Square::Empty {
                        return false;
                    }
                }
            }
            changed == 1
        })
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ in exactly one cell, empty to mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Player};

    #[test]
    fn test_fresh_timeline_holds() {
        assert!(SingleStepInvariant::holds(&Timeline::new()));
    }

    #[test]
    fn test_legal_steps_hold() {
        let mut timeline = Timeline::new();
        let first = Board::new().place(Position::Center, Player::X);
        let second = first.place(Position::TopLeft, Player::O);
        timeline.push(first);
        timeline.push(second);
        assert!(SingleStepInvariant::holds(&timeline));
    }

    #[test]
    fn test_double_placement_violates() {
        let mut timeline = Timeline::new();
        let corrupt = Board::new()
            .place(Position::Center, Player::X)
            .place(Position::TopLeft, Player::O);
        timeline.push(corrupt);
        assert!(!SingleStepInvariant::holds(&timeline));
    }

    #[test]
    fn test_erased_mark_violates() {
        let mut timeline = Timeline::new();
        let first = Board::new().place(Position::Center, Player::X);
        timeline.push(first);

        let mut erased = first;
        erased.set(Position::Center, Square::Empty);
        let mut replaced = erased;
        replaced.set(Position::TopLeft, Square::Occupied(Player::O));
        timeline.push(replaced);
        assert!(!SingleStepInvariant::holds(&timeline));
    }

    #[test]
    fn test_identical_snapshots_violate() {
        let mut timeline = Timeline::new();
        timeline.push(Board::new());
        assert!(!SingleStepInvariant::holds(&timeline));
    }
}
