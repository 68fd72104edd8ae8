//! Maps a command slot to the playlist position it should activate.

use crate::random_pick::RandomIndexSource;
use crate::slot::Slot;

/// Playlist state a resolution is computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistSnapshot {
    pub item_count: usize,
    pub focused_index: Option<usize>,
}

/// Target position for `slot`, or `None` when the command does not apply.
///
/// Ordinal slots past the end of the playlist are not clamped.
pub fn resolve_target(
    slot: Slot,
    snapshot: PlaylistSnapshot,
    random: &RandomIndexSource,
) -> Option<usize> {
    if snapshot.item_count == 0 {
        return None;
    }

    match slot {
        Slot::Last => Some(snapshot.item_count - 1),
        Slot::Random => random.pick(snapshot.item_count),
        Slot::Focused => snapshot.focused_index,
        Slot::Ordinal(position) => {
            let position = position as usize;
            (position < snapshot.item_count).then_some(position)
        }
    }
}

/// Whether the menu should offer `slot` for the given playlist state.
pub fn is_applicable(slot: Slot, snapshot: PlaylistSnapshot) -> bool {
    if snapshot.item_count == 0 {
        return false;
    }

    match slot {
        Slot::Ordinal(position) => (position as usize) < snapshot.item_count,
        Slot::Focused => snapshot.focused_index.is_some(),
        Slot::Last | Slot::Random => true,
    }
}

/// Converts a 1-based position requested from outside into a 0-based index,
/// clamping it into the playlist.
pub fn clamp_requested_position(position: usize, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    Some(position.clamp(1, item_count) - 1)
}
