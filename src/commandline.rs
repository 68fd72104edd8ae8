//! Command-line token handling: `/play_track:<n>` jumps to the n-th item.

use std::sync::Arc;

use log::{debug, info};

use crate::playlist::PlaylistService;
use crate::resolver::clamp_requested_position;

pub const PLAY_TRACK_PREFIX: &str = "/play_track:";

/// Outcome of offering a token to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenResult {
    /// The handler owns this token; stop dispatching.
    Processed,
    NotOurs,
}

pub trait CommandLineHandler: Send + Sync {
    fn on_token(&self, token: &str) -> TokenResult;
}

pub struct PlayTrackCommandLine {
    playlist: Arc<dyn PlaylistService>,
}

impl PlayTrackCommandLine {
    pub fn new(playlist: Arc<dyn PlaylistService>) -> Self {
        Self { playlist }
    }
}

/// Parses the token's 1-based position. Oversized numbers saturate.
fn parse_requested_position(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse::<usize>().unwrap_or(usize::MAX))
}

impl CommandLineHandler for PlayTrackCommandLine {
    fn on_token(&self, token: &str) -> TokenResult {
        let Some(digits) = token.strip_prefix(PLAY_TRACK_PREFIX) else {
            return TokenResult::NotOurs;
        };

        let item_count = self.playlist.item_count();
        if item_count == 0 {
            debug!("PlayTrackCommandLine: active playlist is empty, ignoring {}", token);
            return TokenResult::Processed;
        }

        let Some(position) = parse_requested_position(digits) else {
            debug!("PlayTrackCommandLine: non-numeric position in {}", token);
            return TokenResult::Processed;
        };

        if let Some(index) = clamp_requested_position(position, item_count) {
            info!(
                "PlayTrackCommandLine: playing index {} (requested {}, items {})",
                index, position, item_count
            );
            self.playlist.execute_default_action(index);
        }
        TokenResult::Processed
    }
}

/// Offers each token to the registered handlers in order until one claims it.
#[derive(Default)]
pub struct CommandLineDispatcher {
    handlers: Vec<Box<dyn CommandLineHandler>>,
}

impl CommandLineDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Box<dyn CommandLineHandler>) {
        self.handlers.push(handler);
    }

    pub fn dispatch(&self, token: &str) -> TokenResult {
        for handler in &self.handlers {
            if handler.on_token(token) == TokenResult::Processed {
                return TokenResult::Processed;
            }
        }
        TokenResult::NotOurs
    }

    /// Dispatches every token and returns the ones nobody claimed.
    pub fn dispatch_all<'a, I>(&self, tokens: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .filter(|token| self.dispatch(token) == TokenResult::NotOurs)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::Playlist;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn playlist_with(item_count: usize) -> Arc<Playlist> {
        Arc::new(Playlist::from_paths(
            (0..item_count).map(|i| format!("/music/{:02}.flac", i)),
        ))
    }

    fn handler(playlist: &Arc<Playlist>) -> PlayTrackCommandLine {
        PlayTrackCommandLine::new(playlist.clone())
    }

    struct CountingHandler {
        seen: Arc<AtomicUsize>,
        result: TokenResult,
    }

    impl CommandLineHandler for CountingHandler {
        fn on_token(&self, _token: &str) -> TokenResult {
            self.seen.fetch_add(1, Ordering::SeqCst);
            self.result
        }
    }

    #[test]
    fn test_position_in_range_plays_that_track() {
        let playlist = playlist_with(10);
        assert_eq!(handler(&playlist).on_token("/play_track:3"), TokenResult::Processed);
        assert_eq!(playlist.activation_history(), vec![2]);
    }

    #[test]
    fn test_position_past_end_clamps_to_last() {
        let playlist = playlist_with(10);
        handler(&playlist).on_token("/play_track:999");
        assert_eq!(playlist.activation_history(), vec![9]);
    }

    #[test]
    fn test_position_zero_clamps_to_first() {
        let playlist = playlist_with(10);
        handler(&playlist).on_token("/play_track:0");
        assert_eq!(playlist.activation_history(), vec![0]);
    }

    #[test]
    fn test_huge_position_clamps_to_last() {
        let playlist = playlist_with(4);
        handler(&playlist).on_token("/play_track:99999999999999999999999999");
        assert_eq!(playlist.activation_history(), vec![3]);
    }

    #[test]
    fn test_non_numeric_position_is_processed_without_action() {
        let playlist = playlist_with(10);
        let handler = handler(&playlist);
        assert_eq!(handler.on_token("/play_track:abc"), TokenResult::Processed);
        assert_eq!(handler.on_token("/play_track:"), TokenResult::Processed);
        assert_eq!(handler.on_token("/play_track:-1"), TokenResult::Processed);
        assert_eq!(handler.on_token("/play_track:+2"), TokenResult::Processed);
        assert!(playlist.activation_history().is_empty());
    }

    #[test]
    fn test_empty_playlist_still_processes_token() {
        let playlist = playlist_with(0);
        assert_eq!(handler(&playlist).on_token("/play_track:1"), TokenResult::Processed);
        assert!(playlist.activation_history().is_empty());
    }

    #[test]
    fn test_foreign_tokens_are_not_ours() {
        let playlist = playlist_with(10);
        let handler = handler(&playlist);
        assert_eq!(handler.on_token("/play"), TokenResult::NotOurs);
        assert_eq!(handler.on_token("/PLAY_TRACK:1"), TokenResult::NotOurs);
        assert_eq!(handler.on_token("play_track:1"), TokenResult::NotOurs);
        assert!(playlist.activation_history().is_empty());
    }

    #[test]
    fn test_dispatch_stops_at_first_claiming_handler() {
        let first_seen = Arc::new(AtomicUsize::new(0));
        let second_seen = Arc::new(AtomicUsize::new(0));
        let third_seen = Arc::new(AtomicUsize::new(0));

        let mut dispatcher = CommandLineDispatcher::new();
        dispatcher.register(Box::new(CountingHandler {
            seen: first_seen.clone(),
            result: TokenResult::NotOurs,
        }));
        dispatcher.register(Box::new(CountingHandler {
            seen: second_seen.clone(),
            result: TokenResult::Processed,
        }));
        dispatcher.register(Box::new(CountingHandler {
            seen: third_seen.clone(),
            result: TokenResult::Processed,
        }));

        assert_eq!(dispatcher.dispatch("/anything"), TokenResult::Processed);
        assert_eq!(first_seen.load(Ordering::SeqCst), 1);
        assert_eq!(second_seen.load(Ordering::SeqCst), 1);
        assert_eq!(third_seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_dispatch_all_returns_unclaimed_tokens() {
        let playlist = playlist_with(5);
        let mut dispatcher = CommandLineDispatcher::new();
        dispatcher.register(Box::new(handler(&playlist)));

        let unclaimed = dispatcher.dispatch_all(["/play_track:2", "/add", "/play_track:x"]);
        assert_eq!(unclaimed, vec!["/add"]);
        assert_eq!(playlist.activation_history(), vec![1]);
    }

    #[test]
    fn test_empty_dispatcher_claims_nothing() {
        assert_eq!(
            CommandLineDispatcher::new().dispatch("/play_track:1"),
            TokenResult::NotOurs
        );
    }
}
