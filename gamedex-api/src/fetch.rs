//! Per-resource fetchers over [`CatalogClient`].
//!
//! Each fetcher owns the fetched data for its resource, applies a
//! freshness window before refetching, and de-duplicates requests by
//! resource and parameters (the feed by page number, the detail cache
//! by game id). A request whose ticket has been superseded is discarded
//! on completion instead of being applied to state.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use gamedex_catalog::{Game, GameDetail, Genre, Page};

use crate::client::CatalogClient;
use crate::error::ApiError;
use crate::pagination::next_page_number;

/// Freshness window for the games list.
pub const GAMES_TTL: Duration = Duration::from_secs(10);
/// Freshness window for per-game detail records.
pub const DETAIL_TTL: Duration = Duration::from_secs(2 * 60 * 60);
/// Freshness window for the genre directory.
pub const GENRES_TTL: Duration = Duration::from_secs(2 * 60 * 60);

// ── Staleness guard ─────────────────────────────────────────────────────────

/// Monotonic generation counter guarding in-flight requests.
///
/// A ticket issued by [`begin`](Self::begin) stays valid until the next
/// [`supersede`](Self::supersede); a fetcher applies a completed
/// response only while its ticket is current, so a response that raced
/// with a criteria change or a teardown never overwrites newer state.
#[derive(Debug, Default)]
pub struct RequestGuard {
    generation: u64,
}

/// Proof of when a request was started, checked at completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestGuard {
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.generation)
    }

    /// Invalidate every ticket issued so far.
    pub fn supersede(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }
}

// ── Freshness bookkeeping ───────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Cached<T> {
    value: T,
    fetched_at: Instant,
}

impl<T> Cached<T> {
    fn now(value: T) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

// ── Games feed ──────────────────────────────────────────────────────────────

/// Incrementally loaded games list.
///
/// Pages accumulate in arrival order. The next page number is parsed
/// out of each response's `next` link; a null link marks the feed
/// exhausted and further [`load_more`](Self::load_more) calls are
/// no-ops. A refresh inside the freshness window reuses the pages
/// already fetched.
pub struct GamesFeed {
    page_size: u32,
    pages: Vec<Page<Game>>,
    next_page: Option<u32>,
    fetched_at: Option<Instant>,
    guard: RequestGuard,
}

impl GamesFeed {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            pages: Vec::new(),
            next_page: None,
            fetched_at: None,
            guard: RequestGuard::default(),
        }
    }

    /// All games fetched so far, in arrival order.
    pub fn games(&self) -> Vec<Game> {
        self.pages
            .iter()
            .flat_map(|page| page.results.iter().cloned())
            .collect()
    }

    /// Total result count reported by the server, if anything was
    /// fetched yet.
    pub fn total_count(&self) -> Option<u64> {
        self.pages.first().map(|page| page.count)
    }

    /// Whether further pages exist. True before the first fetch.
    pub fn has_more(&self) -> bool {
        self.pages.is_empty() || self.next_page.is_some()
    }

    /// Page number the next request would ask for, or `None` when the
    /// feed is exhausted.
    pub fn pending_page(&self) -> Option<u32> {
        if self.pages.is_empty() {
            Some(1)
        } else {
            self.next_page
        }
    }

    /// Make sure the first page is loaded, reusing cached pages while
    /// they are inside the freshness window.
    pub async fn refresh(&mut self, client: &CatalogClient) -> Result<(), ApiError> {
        if let Some(fetched_at) = self.fetched_at {
            if !self.pages.is_empty() && fetched_at.elapsed() < GAMES_TTL {
                log::debug!("games feed fresh, skipping refetch");
                return Ok(());
            }
        }
        self.reset();
        self.load_more(client).await?;
        Ok(())
    }

    /// Fetch the next page, if one exists. Returns whether a page was
    /// appended; calling on an exhausted feed is a no-op.
    pub async fn load_more(&mut self, client: &CatalogClient) -> Result<bool, ApiError> {
        let Some(page_number) = self.pending_page() else {
            return Ok(false);
        };
        let ticket = self.begin_request();
        let page = client.list_games(page_number, self.page_size).await?;
        Ok(self.apply_page(ticket, page))
    }

    /// Discard all fetched pages and invalidate in-flight requests.
    /// Called when the consuming context is torn down or its dependency
    /// key changes.
    pub fn reset(&mut self) {
        self.pages.clear();
        self.next_page = None;
        self.fetched_at = None;
        self.guard.supersede();
    }

    /// Start a request against the feed's current generation.
    pub fn begin_request(&self) -> RequestTicket {
        self.guard.begin()
    }

    /// Apply a fetched page only if `ticket` is still current. A stale
    /// page is dropped and `false` returned.
    pub fn apply_page(&mut self, ticket: RequestTicket, page: Page<Game>) -> bool {
        if !self.guard.is_current(ticket) {
            log::debug!("discarding superseded games page");
            return false;
        }
        self.next_page = next_page_number(page.next.as_deref());
        if self.pages.is_empty() {
            self.fetched_at = Some(Instant::now());
        }
        self.pages.push(page);
        true
    }
}

// ── Game detail cache ───────────────────────────────────────────────────────

/// Per-id cache for game detail records.
#[derive(Default)]
pub struct GameCache {
    entries: HashMap<u64, Cached<GameDetail>>,
}

impl GameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a game's detail record, reusing a cached copy inside the
    /// freshness window.
    pub async fn get(&mut self, client: &CatalogClient, id: u64) -> Result<GameDetail, ApiError> {
        if let Some(entry) = self.entries.get(&id) {
            if entry.is_fresh(DETAIL_TTL) {
                log::debug!("game {id} served from cache");
                return Ok(entry.value.clone());
            }
        }

        let detail = client.game(id).await?;
        self.entries.insert(id, Cached::now(detail.clone()));
        Ok(detail)
    }
}

// ── Genre directory ─────────────────────────────────────────────────────────

/// Cached genre listing.
#[derive(Default)]
pub struct GenresDirectory {
    cached: Option<Cached<Vec<Genre>>>,
}

impl GenresDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the genre list, reusing a cached copy inside the freshness
    /// window.
    pub async fn get(&mut self, client: &CatalogClient) -> Result<Vec<Genre>, ApiError> {
        if let Some(cached) = &self.cached {
            if cached.is_fresh(GENRES_TTL) {
                log::debug!("genres served from cache");
                return Ok(cached.value.clone());
            }
        }

        let page = client.list_genres().await?;
        let genres = page.results;
        self.cached = Some(Cached::now(genres.clone()));
        Ok(genres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(names: &[&str], next: Option<&str>) -> Page<Game> {
        Page {
            count: names.len() as u64,
            next: next.map(str::to_string),
            previous: None,
            results: names
                .iter()
                .enumerate()
                .map(|(i, name)| Game {
                    id: i as u64 + 1,
                    slug: None,
                    name: name.to_string(),
                    released: None,
                    background_image: None,
                    metacritic: None,
                    platforms: Vec::new(),
                    genres: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut feed = GamesFeed::new(40);
        let ticket = feed.begin_request();

        // The dependency key changes while the request is in flight.
        feed.reset();

        let applied = feed.apply_page(ticket, page(&["Zelda"], None));
        assert!(!applied);
        assert!(feed.games().is_empty());

        // A request started after the reset applies normally.
        let ticket = feed.begin_request();
        assert!(feed.apply_page(ticket, page(&["Doom"], None)));
        assert_eq!(feed.games().len(), 1);
    }

    #[test]
    fn null_next_link_exhausts_the_feed() {
        let mut feed = GamesFeed::new(40);
        let ticket = feed.begin_request();
        feed.apply_page(
            ticket,
            page(&["Zelda"], Some("https://api.rawg.io/api/games?page=2")),
        );
        assert!(feed.has_more());
        assert_eq!(feed.pending_page(), Some(2));

        let ticket = feed.begin_request();
        feed.apply_page(ticket, page(&["Doom"], None));
        assert!(!feed.has_more());
        assert_eq!(feed.pending_page(), None);
        assert_eq!(feed.games().len(), 2);
    }

    #[tokio::test]
    async fn load_more_on_exhausted_feed_is_a_noop() {
        let mut feed = GamesFeed::new(40);
        let ticket = feed.begin_request();
        feed.apply_page(ticket, page(&["Zelda"], None));

        // The client is never contacted: pending_page() short-circuits.
        let client = CatalogClient::new(crate::credentials::ApiKey::new("test"))
            .unwrap()
            .with_base_url("http://127.0.0.1:1");
        let appended = feed.load_more(&client).await.unwrap();
        assert!(!appended);
        assert_eq!(feed.games().len(), 1);
    }

    #[test]
    fn pages_accumulate_in_arrival_order() {
        let mut feed = GamesFeed::new(40);
        let ticket = feed.begin_request();
        feed.apply_page(
            ticket,
            page(&["A", "B"], Some("https://api.rawg.io/api/games?page=2")),
        );
        let ticket = feed.begin_request();
        feed.apply_page(ticket, page(&["C"], None));

        let names: Vec<_> = feed.games().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn expired_entry_is_not_fresh() {
        let cached = Cached {
            value: (),
            fetched_at: Instant::now() - Duration::from_secs(11),
        };
        assert!(!cached.is_fresh(GAMES_TTL));
        assert!(cached.is_fresh(GENRES_TTL));
    }

    #[test]
    fn entry_inside_window_is_fresh() {
        let cached = Cached::now(());
        assert!(cached.is_fresh(GAMES_TTL));
    }
}
