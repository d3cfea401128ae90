//! Shared browsing state: the fetched game list, the active criteria,
//! and the currently selected game.
//!
//! The store is an explicit, injectable container. All writes go
//! through named setters; reads derive the view list through the
//! memoized filter engine. Execution is single-threaded, so plain
//! `&mut self` setters are the whole synchronization story.

use crate::filter::{FilterCriteria, FilterEngine, SortKey};
use crate::model::Game;

/// State container backing the list and detail views.
#[derive(Debug, Default)]
pub struct CatalogStore {
    games: Vec<Game>,
    criteria: FilterCriteria,
    selected_game: Option<u64>,
    /// Bumped on every write to `games` so the memoized view stays
    /// keyed to the exact input tuple.
    generation: u64,
    engine: FilterEngine,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full fetched game list.
    pub fn set_games(&mut self, games: Vec<Game>) {
        self.games = games;
        self.generation += 1;
    }

    /// Append a freshly fetched page to the list.
    pub fn push_games(&mut self, mut page: Vec<Game>) {
        self.games.append(&mut page);
        self.generation += 1;
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_genre(&mut self, genre: Option<String>) {
        self.criteria.genre = genre;
    }

    pub fn set_platform(&mut self, platform: String) {
        self.criteria.platform = platform;
    }

    pub fn set_search(&mut self, search: String) {
        self.criteria.search = search;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.criteria.sort = sort;
    }

    /// The filtered, ordered view list for the current state.
    ///
    /// Recomputed only when the game list or a criterion changed since
    /// the last read; otherwise the memoized view is returned as-is.
    pub fn view(&mut self) -> &[Game] {
        self.engine.view(&self.games, self.generation, &self.criteria)
    }

    // ── Selection state ─────────────────────────────────────────────────

    /// Record the game the user selected before moving to the detail
    /// view. At most one selection exists at a time.
    pub fn select_game(&mut self, id: Option<u64>) {
        self.selected_game = id;
    }

    /// The id the detail view should fetch, if any.
    pub fn selected_game(&self) -> Option<u64> {
        self.selected_game
    }
}
