//! Session store
//!
//! Maps opaque session identifiers to independent games. The map itself is a
//! `DashMap`, so lookups and inserts for different sessions never contend on
//! a single lock; each game sits behind its own mutex, so operations on one
//! session run one at a time.

use crate::game::{Game, GameConfig};
use crate::wordlists::WordList;
use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Opaque identifier of one player's game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

struct Session {
    game: Mutex<Game>,
    last_seen: Mutex<Instant>,
}

impl Session {
    fn new(game: Game) -> Self {
        Self {
            game: Mutex::new(game),
            last_seen: Mutex::new(Instant::now()),
        }
    }

    fn touch(&self) {
        *self.last_seen.lock() = Instant::now();
    }

    fn idle_for(&self) -> Duration {
        self.last_seen.lock().elapsed()
    }
}

/// Concurrent map from [`SessionId`] to [`Game`]
///
/// New games draw their answers from the shared word list and follow the
/// store's [`GameConfig`].
pub struct SessionStore {
    words: Arc<WordList>,
    config: GameConfig,
    sessions: DashMap<SessionId, Arc<Session>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(words: Arc<WordList>, config: GameConfig) -> Self {
        Self {
            words,
            config,
            sessions: DashMap::new(),
        }
    }

    /// Start a new game under a fresh identifier
    pub fn create(&self) -> SessionId {
        self.insert(Game::new(Arc::clone(&self.words), self.config))
    }

    /// Store an existing game under a fresh identifier
    pub fn insert(&self, game: Game) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, Arc::new(Session::new(game)));
        tracing::info!(session_id = %id, sessions = self.sessions.len(), "session created");
        id
    }

    /// Run `f` on the session's game, creating the game if the id is unknown
    ///
    /// The map entry is released before the game lock is taken, so a slow
    /// operation on one session never blocks lookups of another.
    pub fn with_game<R>(&self, id: SessionId, f: impl FnOnce(&mut Game) -> R) -> R {
        let session = self
            .sessions
            .entry(id)
            .or_insert_with(|| {
                tracing::info!(session_id = %id, "session created for unknown id");
                Arc::new(Session::new(Game::new(Arc::clone(&self.words), self.config)))
            })
            .value()
            .clone();

        session.touch();
        let mut game = session.game.lock();
        f(&mut game)
    }

    #[must_use]
    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    /// Drop a session; returns false if it did not exist
    pub fn remove(&self, id: SessionId) -> bool {
        let removed = self.sessions.remove(&id).is_some();
        if removed {
            tracing::info!(session_id = %id, "session removed");
        }
        removed
    }

    /// Drop every session untouched for at least `ttl`
    ///
    /// Returns the number of sessions removed.
    pub fn purge_idle(&self, ttl: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.idle_for() < ttl);
        let purged = before.saturating_sub(self.sessions.len());

        if purged > 0 {
            tracing::info!(purged, remaining = self.sessions.len(), "purged idle sessions");
        }
        purged
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub fn words(&self) -> &Arc<WordList> {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use crate::wordlists::loader::words_from_slice;
    use std::thread;

    fn store() -> SessionStore {
        let words = WordList::from_words(words_from_slice(&["bells", "shell", "crane"])).unwrap();
        SessionStore::new(Arc::new(words), GameConfig::default())
    }

    fn fixed_game(store: &SessionStore, answer: &str) -> Game {
        Game::with_answer(Arc::clone(store.words()), store.config(), answer).unwrap()
    }

    #[test]
    fn session_id_round_trips_through_string() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }

    #[test]
    fn created_sessions_are_independent() {
        let store = store();
        let a = store.insert(fixed_game(&store, "bells"));
        let b = store.insert(fixed_game(&store, "bells"));
        assert_ne!(a, b);

        store.with_game(a, |game| game.make_guess("shell").map(|_| ())).unwrap();

        assert_eq!(store.with_game(a, |game| game.guesses().len()), 1);
        assert_eq!(store.with_game(b, |game| game.guesses().len()), 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn unknown_id_gets_a_fresh_game() {
        let store = store();
        let id = SessionId::new();
        assert!(!store.contains(id));

        let status = store.with_game(id, |game| game.status());
        assert_eq!(status, GameStatus::Playing);
        assert!(store.contains(id));
    }

    #[test]
    fn create_starts_a_playing_game() {
        let store = store();
        let id = store.create();
        assert!(store.contains(id));
        assert_eq!(store.with_game(id, |game| game.remaining_guesses()), 6);
    }

    #[test]
    fn remove_and_purge() {
        let store = store();
        let a = store.create();
        let b = store.create();

        assert!(store.remove(a));
        assert!(!store.remove(a));
        assert_eq!(store.len(), 1);

        assert_eq!(store.purge_idle(Duration::from_secs(3600)), 0);
        assert!(store.contains(b));
        assert_eq!(store.purge_idle(Duration::ZERO), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_guesses_on_one_session_are_serialized() {
        let store = Arc::new(store());
        let id = store.insert(fixed_game(&store, "bells"));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.with_game(id, |game| game.make_guess("crane").is_ok())
                })
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|&ok| ok)
            .count();

        // Exactly the guess limit gets through, never more
        assert_eq!(accepted, 6);
        assert_eq!(store.with_game(id, |game| game.guesses().len()), 6);
        assert_eq!(
            store.with_game(id, |game| game.status()),
            GameStatus::Lost
        );
    }
}
