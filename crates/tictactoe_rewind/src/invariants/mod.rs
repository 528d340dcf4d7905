//! First-class invariants for the snapshot timeline.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as
//! documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// # Errors
    ///
    /// Returns the list of violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_marks;
pub mod cursor_in_range;
pub mod single_step;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_range::CursorInRangeInvariant;
pub use single_step::SingleStepInvariant;

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    SingleStepInvariant,
    AlternatingMarksInvariant,
    CursorInRangeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::position::Position;
    use crate::types::{Board, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(TimelineInvariants::check_all(game.timeline()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_along_a_game() {
        let mut game = Game::new();
        for pos in [
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
            Position::TopRight,
        ] {
            game.attempt_move(pos);
            assert!(TimelineInvariants::check_all(game.timeline()).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game = Game::new();
        game.attempt_move(Position::Center);
        game.attempt_move(Position::TopLeft);
        game.attempt_move(Position::BottomRight);
        game.jump_to(1).unwrap();
        game.attempt_move(Position::MiddleRight);
        assert!(TimelineInvariants::check_all(game.timeline()).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut timeline = crate::timeline::Timeline::new();
        // Two marks added in one step, both by X.
        let corrupt = Board::new()
            .place(Position::Center, Player::X)
            .place(Position::TopLeft, Player::X);
        timeline.push(corrupt);

        let violations = TimelineInvariants::check_all(&timeline).unwrap_err();
        assert!(!violations.is_empty());
    }
}
