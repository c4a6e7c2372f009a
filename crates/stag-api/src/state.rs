//! Shared application state.

use std::sync::{Arc, Mutex, PoisonError};

use stag_engine::application::dispatcher::Game;

/// Application state shared across all request handlers and line sessions.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The one game every session plays in.
    pub game: Arc<Mutex<Game>>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }

    /// Runs `f` with exclusive access to the game.
    ///
    /// A poisoned lock is recovered. Commands mutate only after every check
    /// has passed.
    pub fn with_game<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut game = self.game.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("game lock was poisoned; recovering");
            PoisonError::into_inner(poisoned)
        });
        f(&mut game)
    }
}
