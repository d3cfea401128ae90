use gamedex_catalog::{CatalogStore, Game, SortKey};

fn game(id: u64, name: &str, released: &str, metacritic: i32) -> Game {
    Game {
        id,
        slug: None,
        name: name.to_string(),
        released: Some(released.to_string()),
        background_image: None,
        metacritic: Some(metacritic),
        platforms: Vec::new(),
        genres: Vec::new(),
    }
}

#[test]
fn view_reflects_criteria_changes() {
    let mut store = CatalogStore::new();
    store.set_games(vec![
        game(1, "Zelda", "2017-03-03", 97),
        game(2, "Doom", "2016-05-13", 85),
    ]);

    store.set_sort(SortKey::Newest);
    let names: Vec<_> = store.view().iter().map(|g| g.name.clone()).collect();
    assert_eq!(names, vec!["Zelda", "Doom"]);

    store.set_search("doom".to_string());
    let names: Vec<_> = store.view().iter().map(|g| g.name.clone()).collect();
    assert_eq!(names, vec!["Doom"]);
}

#[test]
fn repeated_reads_return_identical_memoized_view() {
    let mut store = CatalogStore::new();
    store.set_games(vec![
        game(1, "Zelda", "2017-03-03", 97),
        game(2, "Doom", "2016-05-13", 85),
    ]);
    store.set_sort(SortKey::HighestScore);

    let first = store.view().as_ptr();
    let second = store.view().as_ptr();
    // Unchanged inputs reuse the cached allocation, not a recompute.
    assert_eq!(first, second);
}

#[test]
fn appending_a_page_invalidates_the_view() {
    let mut store = CatalogStore::new();
    store.set_games(vec![game(1, "Zelda", "2017-03-03", 97)]);
    assert_eq!(store.view().len(), 1);

    store.push_games(vec![game(2, "Doom", "2016-05-13", 85)]);
    assert_eq!(store.view().len(), 2);
}

#[test]
fn selection_holds_at_most_one_game() {
    let mut store = CatalogStore::new();
    assert_eq!(store.selected_game(), None);

    store.select_game(Some(42));
    assert_eq!(store.selected_game(), Some(42));

    store.select_game(Some(7));
    assert_eq!(store.selected_game(), Some(7));

    store.select_game(None);
    assert_eq!(store.selected_game(), None);
}
