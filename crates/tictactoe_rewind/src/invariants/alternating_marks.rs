//! Alternating-marks invariant: X and O take turns, X first.

use strum::IntoEnumIterator;

use super::Invariant;
use crate::position::Position;
use crate::timeline::Timeline;
use crate::types::{Player, Square};

/// Invariant: the mark added at step i belongs to X for odd i, O for
/// even i (snapshot 1 is X's first move).
pub struct AlternatingMarksInvariant;

impl Invariant<Timeline> for AlternatingMarksInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let (prev, next) = (&pair[0], &pair[1]);
                let expected = if step % 2 == 0 { Player::X } else { Player::O };
                Position::iter()
                    .filter(|pos| prev.get(*pos) != next.get(*pos))
                    .all(|pos| next.get(pos) == Square::Occupied(expected))
            })
    }

    fn description() -> &'static str {
        "Marks alternate between X and O, starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    #[test]
    fn test_alternating_game_holds() {
        let mut timeline = Timeline::new();
        let first = Board::new().place(Position::Center, Player::X);
        let second = first.place(Position::TopLeft, Player::O);
        let third = second.place(Position::TopRight, Player::X);
        timeline.push(first);
        timeline.push(second);
        timeline.push(third);
        assert!(AlternatingMarksInvariant::holds(&timeline));
    }

    #[test]
    fn test_wrong_first_player_violates() {
        let mut timeline = Timeline::new();
        timeline.push(Board::new().place(Position::Center, Player::O));
        assert!(!AlternatingMarksInvariant::holds(&timeline));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut timeline = Timeline::new();
        let first = Board::new().place(Position::Center, Player::X);
        let second = first.place(Position::TopLeft, Player::X);
        timeline.push(first);
        timeline.push(second);
        assert!(!AlternatingMarksInvariant::holds(&timeline));
    }
}
