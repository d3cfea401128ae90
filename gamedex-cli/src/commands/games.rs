use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedex_api::{CatalogClient, GamesFeed};
use gamedex_catalog::{CatalogStore, FilterCriteria, Game};

use super::{load_api_key, runtime, spinner};
use crate::error::CliError;

/// Run the games listing: fetch up to `pages` pages, apply the
/// criteria through the store, and print the view.
pub(crate) fn run(criteria: FilterCriteria, pages: u32, page_size: u32) -> Result<(), CliError> {
    let key = load_api_key()?;
    let rt = runtime()?;

    rt.block_on(async {
        let client = CatalogClient::new(key)?;
        let mut feed = GamesFeed::new(page_size);

        let pb = spinner("Fetching games...");
        let fetched = fetch_pages(&client, &mut feed, pages).await;
        pb.finish_and_clear();
        fetched?;
        log::debug!("fetched {} games across {} page(s)", feed.games().len(), pages);

        let mut store = CatalogStore::new();
        store.set_games(feed.games());
        store.set_genre(criteria.genre.clone());
        store.set_platform(criteria.platform.clone());
        store.set_search(criteria.search.clone());
        store.set_sort(criteria.sort);

        let total = feed.total_count().unwrap_or(0);
        let has_more = feed.has_more();
        print_view(&mut store, total, has_more);
        Ok(())
    })
}

async fn fetch_pages(
    client: &CatalogClient,
    feed: &mut GamesFeed,
    pages: u32,
) -> Result<(), CliError> {
    feed.refresh(client).await?;
    for _ in 1..pages {
        if !feed.has_more() {
            break;
        }
        feed.load_more(client).await?;
    }
    Ok(())
}

fn print_view(store: &mut CatalogStore, total: u64, has_more: bool) {
    let criteria = store.criteria().clone();
    let view = store.view();

    if view.is_empty() {
        match &criteria.genre {
            Some(genre) => println!(
                "{}",
                format!("No games found for the genre '{genre}'.")
                    .if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => println!(
                "{}",
                "No games found.".if_supports_color(Stdout, |t| t.dimmed()),
            ),
        }
        return;
    }

    println!("{}", "Games".if_supports_color(Stdout, |t| t.bold()));
    println!();
    for game in view {
        print_game_row(game);
    }
    println!();

    let shown = store.view().len();
    let fetched = store.games().len();
    print!("{shown} shown of {fetched} fetched ({total} in catalog)");
    if has_more {
        print!(
            " {}",
            "— more pages available, use --pages".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!();
}

fn print_game_row(game: &Game) {
    let released = game.released.as_deref().unwrap_or("TBA");
    let score = match game.metacritic {
        Some(score) => format!("{score:>3}"),
        None => "  -".to_string(),
    };
    let platforms: Vec<&str> = game.platform_names().collect();

    println!(
        "  {} {} {}  {}",
        format!("[{score}]").if_supports_color(Stdout, |t| t.green()),
        released.if_supports_color(Stdout, |t| t.dimmed()),
        game.name.if_supports_color(Stdout, |t| t.bold()),
        format!("#{}", game.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    if !platforms.is_empty() {
        println!(
            "        {}",
            platforms
                .join(", ")
                .if_supports_color(Stdout, |t| t.cyan()),
        );
    }
}
