use gamedex_catalog::{
    FilterCriteria, Game, GenreRef, PlatformAssociation, PlatformRef, SortKey, filter_and_sort,
};

fn game(
    id: u64,
    name: &str,
    released: Option<&str>,
    metacritic: Option<i32>,
    platforms: &[&str],
    genres: &[&str],
) -> Game {
    Game {
        id,
        slug: None,
        name: name.to_string(),
        released: released.map(str::to_string),
        background_image: None,
        metacritic,
        platforms: platforms
            .iter()
            .enumerate()
            .map(|(i, name)| PlatformAssociation {
                platform: PlatformRef {
                    id: i as u64 + 1,
                    name: name.to_string(),
                },
            })
            .collect(),
        genres: genres
            .iter()
            .enumerate()
            .map(|(i, name)| GenreRef {
                id: i as u64 + 1,
                name: name.to_string(),
            })
            .collect(),
    }
}

fn sample_games() -> Vec<Game> {
    vec![
        game(
            1,
            "Zelda",
            Some("2017-03-03"),
            Some(97),
            &["Nintendo Switch"],
            &["Adventure"],
        ),
        game(
            2,
            "Doom",
            Some("2016-05-13"),
            Some(85),
            &["PC", "PlayStation 4"],
            &["Shooter"],
        ),
        game(
            3,
            "Stardew Valley",
            Some("2016-02-26"),
            Some(89),
            &["PC", "Nintendo Switch"],
            &["Simulation", "RPG"],
        ),
    ]
}

#[test]
fn no_criteria_returns_input_unchanged() {
    let games = sample_games();
    let out = filter_and_sort(&games, &FilterCriteria::default());
    assert_eq!(out, games);
}

#[test]
fn input_is_not_mutated() {
    let games = sample_games();
    let criteria = FilterCriteria {
        sort: SortKey::Oldest,
        ..Default::default()
    };
    let _ = filter_and_sort(&games, &criteria);
    assert_eq!(games, sample_games());
}

#[test]
fn genre_match_is_exact_and_case_sensitive() {
    let games = sample_games();
    let criteria = FilterCriteria {
        genre: Some("Shooter".to_string()),
        ..Default::default()
    };
    let out = filter_and_sort(&games, &criteria);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Doom");

    let criteria = FilterCriteria {
        genre: Some("shooter".to_string()),
        ..Default::default()
    };
    assert!(filter_and_sort(&games, &criteria).is_empty());
}

#[test]
fn platform_match_is_substring() {
    let games = sample_games();
    let criteria = FilterCriteria {
        platform: "PlayStation".to_string(),
        ..Default::default()
    };
    let out = filter_and_sort(&games, &criteria);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Doom");
}

#[test]
fn search_is_case_insensitive_substring() {
    let games = sample_games();
    let criteria = FilterCriteria {
        search: "zel".to_string(),
        ..Default::default()
    };
    let out = filter_and_sort(&games, &criteria);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Zelda");
}

#[test]
fn criteria_are_conjunctive() {
    let games = sample_games();
    let criteria = FilterCriteria {
        genre: Some("RPG".to_string()),
        platform: "PC".to_string(),
        search: "stardew".to_string(),
        ..Default::default()
    };
    let out = filter_and_sort(&games, &criteria);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Stardew Valley");

    // Same genre and search, but a platform the game lacks.
    let criteria = FilterCriteria {
        genre: Some("RPG".to_string()),
        platform: "Xbox".to_string(),
        search: "stardew".to_string(),
        ..Default::default()
    };
    assert!(filter_and_sort(&games, &criteria).is_empty());
}

#[test]
fn newest_orders_by_release_descending() {
    let games = sample_games();
    let criteria = FilterCriteria {
        sort: SortKey::Newest,
        ..Default::default()
    };
    let names: Vec<_> = filter_and_sort(&games, &criteria)
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Zelda", "Doom", "Stardew Valley"]);
}

#[test]
fn missing_release_dates_sort_earliest() {
    let mut games = sample_games();
    games.push(game(4, "Unreleased", None, None, &[], &[]));
    let criteria = FilterCriteria {
        sort: SortKey::Newest,
        ..Default::default()
    };
    let out = filter_and_sort(&games, &criteria);
    assert_eq!(out.last().unwrap().name, "Unreleased");

    let criteria = FilterCriteria {
        sort: SortKey::Oldest,
        ..Default::default()
    };
    let out = filter_and_sort(&games, &criteria);
    assert_eq!(out.first().unwrap().name, "Unreleased");
}

#[test]
fn score_sorts_are_exact_reverses_when_all_scored() {
    let games = sample_games();
    let highest = filter_and_sort(
        &games,
        &FilterCriteria {
            sort: SortKey::HighestScore,
            ..Default::default()
        },
    );
    let mut lowest = filter_and_sort(
        &games,
        &FilterCriteria {
            sort: SortKey::LowestScore,
            ..Default::default()
        },
    );
    lowest.reverse();
    assert_eq!(highest, lowest);
}

#[test]
fn missing_score_sorts_as_zero() {
    let mut games = sample_games();
    games.push(game(4, "Obscure", Some("2020-01-01"), None, &[], &[]));
    let criteria = FilterCriteria {
        sort: SortKey::LowestScore,
        ..Default::default()
    };
    let out = filter_and_sort(&games, &criteria);
    assert_eq!(out.first().unwrap().name, "Obscure");
}

#[test]
fn empty_source_yields_empty_view() {
    let out = filter_and_sort(&[], &FilterCriteria::default());
    assert!(out.is_empty());
}

#[test]
fn fully_exclusionary_filter_yields_empty_view() {
    let games = sample_games();
    let criteria = FilterCriteria {
        search: "no such game".to_string(),
        ..Default::default()
    };
    assert!(filter_and_sort(&games, &criteria).is_empty());
}
