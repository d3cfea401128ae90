//! Client-side filtering and sorting of fetched game lists.
//!
//! The view list is a pure function of (game list, criteria): filtering
//! is the conjunction of every active criterion, sorting is applied
//! regardless of filters, and an empty result is a valid "no matches"
//! outcome rather than an error.

use std::str::FromStr;

use crate::model::Game;

/// Ordering applied to the filtered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Keep the order the games arrived in.
    #[default]
    Unsorted,
    /// Descending by release date.
    Newest,
    /// Ascending by release date.
    Oldest,
    /// Descending by critic score.
    HighestScore,
    /// Ascending by critic score.
    LowestScore,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "unsorted" => Ok(Self::Unsorted),
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "highest-score" | "highest" => Ok(Self::HighestScore),
            "lowest-score" | "lowest" => Ok(Self::LowestScore),
            other => Err(format!(
                "unknown sort key '{other}' (expected newest, oldest, highest-score, lowest-score)"
            )),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsorted => write!(f, "unsorted"),
            Self::Newest => write!(f, "newest"),
            Self::Oldest => write!(f, "oldest"),
            Self::HighestScore => write!(f, "highest-score"),
            Self::LowestScore => write!(f, "lowest-score"),
        }
    }
}

/// User-selected view criteria. The defaults select everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    /// Genre display name. `None` means all genres.
    pub genre: Option<String>,
    /// Platform display name fragment. Empty means all platforms.
    pub platform: String,
    /// Free-text search against game names. Empty means all games.
    pub search: String,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// True when at least one filter criterion is set.
    pub fn is_filtering(&self) -> bool {
        self.genre.is_some() || !self.platform.is_empty() || !self.search.is_empty()
    }
}

/// Produce the filtered, ordered view list. Pure: the input slice is
/// never mutated.
///
/// Match rules, kept exactly as observed in the catalog UI this client
/// replaces:
/// - genre: any of the game's genre names equals the selection
///   (exact, case-sensitive)
/// - platform: any of the game's platform names contains the selection
///   as a substring (deliberately looser than the genre rule, so
///   "PlayStation" matches "PlayStation 5")
/// - search: the game name, lower-cased, contains the query lower-cased
pub fn filter_and_sort(games: &[Game], criteria: &FilterCriteria) -> Vec<Game> {
    let mut result: Vec<Game> = if criteria.is_filtering() {
        games
            .iter()
            .filter(|game| matches_criteria(game, criteria))
            .cloned()
            .collect()
    } else {
        games.to_vec()
    };

    match criteria.sort {
        SortKey::Unsorted => {}
        SortKey::Newest => result.sort_by(|a, b| b.release_date().cmp(&a.release_date())),
        SortKey::Oldest => result.sort_by(|a, b| a.release_date().cmp(&b.release_date())),
        SortKey::HighestScore => result.sort_by(|a, b| b.score().cmp(&a.score())),
        SortKey::LowestScore => result.sort_by(|a, b| a.score().cmp(&b.score())),
    }

    result
}

fn matches_criteria(game: &Game, criteria: &FilterCriteria) -> bool {
    let matches_genre = match &criteria.genre {
        Some(genre) => game.genre_names().any(|name| name == genre),
        None => true,
    };
    let matches_platform = criteria.platform.is_empty()
        || game
            .platform_names()
            .any(|name| name.contains(&criteria.platform));
    let matches_search = criteria.search.is_empty()
        || game
            .name
            .to_lowercase()
            .contains(&criteria.search.to_lowercase());

    matches_genre && matches_platform && matches_search
}

/// Memoizing wrapper around [`filter_and_sort`].
///
/// The view is recomputed only when the input tuple changes; the input
/// is identified by a caller-supplied generation number for the source
/// list plus the criteria value itself. Repeated reads with unchanged
/// inputs return the cached output without recomputation.
#[derive(Debug, Default)]
pub struct FilterEngine {
    memo: Option<Memo>,
}

#[derive(Debug)]
struct Memo {
    generation: u64,
    criteria: FilterCriteria,
    view: Vec<Game>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute (or reuse) the view for `games` at `generation` under
    /// `criteria`. The generation must change whenever `games` does.
    pub fn view(&mut self, games: &[Game], generation: u64, criteria: &FilterCriteria) -> &[Game] {
        let fresh = match &self.memo {
            Some(memo) => memo.generation == generation && memo.criteria == *criteria,
            None => false,
        };
        if !fresh {
            self.memo = Some(Memo {
                generation,
                criteria: criteria.clone(),
                view: filter_and_sort(games, criteria),
            });
        }
        &self.memo.as_ref().expect("memo populated above").view
    }

    /// Drop the cached view, forcing the next read to recompute.
    pub fn invalidate(&mut self) {
        self.memo = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str) -> Game {
        Game {
            id: 1,
            slug: None,
            name: name.to_string(),
            released: None,
            background_image: None,
            metacritic: None,
            platforms: Vec::new(),
            genres: Vec::new(),
        }
    }

    #[test]
    fn sort_key_parses_cli_forms() {
        assert_eq!("newest".parse::<SortKey>().unwrap(), SortKey::Newest);
        assert_eq!(
            "Highest-Score".parse::<SortKey>().unwrap(),
            SortKey::HighestScore
        );
        assert!("best".parse::<SortKey>().is_err());
    }

    #[test]
    fn default_criteria_select_everything() {
        let criteria = FilterCriteria::default();
        assert!(!criteria.is_filtering());
        let games = vec![game("A"), game("B")];
        assert_eq!(filter_and_sort(&games, &criteria), games);
    }
}
