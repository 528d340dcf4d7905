//! Cursor-range invariant: the cursor always points at a snapshot.

use super::Invariant;
use crate::timeline::Timeline;

/// Invariant: the cursor indexes a recorded snapshot.
///
/// Holds structurally for [`Timeline`] since jumps are bounds-checked
/// and pushes reset the cursor to the new last index; checking it
/// guards against future refactors of the truncation logic.
pub struct CursorInRangeInvariant;

impl Invariant<Timeline> for CursorInRangeInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.cursor() < timeline.len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}
