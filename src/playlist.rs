use std::path::PathBuf;
use std::sync::Mutex;

use log::debug;

/// Read access to the host's active playlist plus its "activate item" action.
pub trait PlaylistService: Send + Sync {
    fn item_count(&self) -> usize;

    /// Zero-based focused item, `None` when nothing is focused.
    fn focused_index(&self) -> Option<usize>;

    /// Triggers the default action (usually playback) for the item at `index`.
    fn execute_default_action(&self, index: usize);
}

pub struct Track {
    pub path: PathBuf,
}

#[derive(Default)]
struct PlaylistState {
    tracks: Vec<Track>,
    focused_index: Option<usize>,
    playing_track_index: Option<usize>,
    activation_history: Vec<usize>,
}

/// In-process stand-in for the host playlist, used by the host simulator.
pub struct Playlist {
    state: Mutex<PlaylistState>,
}

impl Playlist {
    pub fn new() -> Playlist {
        Playlist {
            state: Mutex::new(PlaylistState::default()),
        }
    }

    pub fn from_paths<I, P>(paths: I) -> Playlist
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let playlist = Playlist::new();
        for path in paths {
            playlist.add_track(Track { path: path.into() });
        }
        playlist
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PlaylistState> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn add_track(&self, track: Track) {
        self.lock().tracks.push(track);
    }

    pub fn num_tracks(&self) -> usize {
        self.lock().tracks.len()
    }

    pub fn track_path(&self, index: usize) -> Option<PathBuf> {
        self.lock().tracks.get(index).map(|track| track.path.clone())
    }

    /// Focus is dropped when `index` is past the end of the playlist.
    pub fn set_focused_index(&self, index: Option<usize>) {
        let mut state = self.lock();
        state.focused_index = index.filter(|&i| i < state.tracks.len());
    }

    pub fn get_playing_track_index(&self) -> Option<usize> {
        self.lock().playing_track_index
    }

    /// Every index the default action was executed on, oldest first.
    pub fn activation_history(&self) -> Vec<usize> {
        self.lock().activation_history.clone()
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistService for Playlist {
    fn item_count(&self) -> usize {
        self.num_tracks()
    }

    fn focused_index(&self) -> Option<usize> {
        self.lock().focused_index
    }

    fn execute_default_action(&self, index: usize) {
        let mut state = self.lock();
        if index >= state.tracks.len() {
            debug!("Playlist: ignoring default action for index {} past end", index);
            return;
        }
        debug!(
            "Playlist: default action on index {} ({})",
            index,
            state.tracks[index].path.display()
        );
        state.playing_track_index = Some(index);
        state.activation_history.push(index);
    }
}

#[cfg(test)]
mod tests {
    use super::{Playlist, PlaylistService, Track};
    use std::path::PathBuf;

    #[test]
    fn test_from_paths_keeps_order() {
        let playlist = Playlist::from_paths(["/music/a.flac", "/music/b.flac"]);
        assert_eq!(playlist.item_count(), 2);
        assert_eq!(playlist.track_path(1), Some(PathBuf::from("/music/b.flac")));
        assert_eq!(playlist.track_path(2), None);
    }

    #[test]
    fn test_focus_past_end_is_cleared() {
        let playlist = Playlist::from_paths(["/music/a.flac"]);
        playlist.set_focused_index(Some(0));
        assert_eq!(playlist.focused_index(), Some(0));
        playlist.set_focused_index(Some(3));
        assert_eq!(playlist.focused_index(), None);
    }

    #[test]
    fn test_default_action_records_playing_track() {
        let playlist = Playlist::new();
        playlist.add_track(Track {
            path: PathBuf::from("/music/a.flac"),
        });
        playlist.add_track(Track {
            path: PathBuf::from("/music/b.flac"),
        });

        playlist.execute_default_action(1);
        playlist.execute_default_action(5);

        assert_eq!(playlist.get_playing_track_index(), Some(1));
        assert_eq!(playlist.activation_history(), vec![1]);
    }
}
