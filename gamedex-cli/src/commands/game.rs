use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedex_api::{CatalogClient, GameCache};
use gamedex_catalog::{GameDetail, strip_html_tags};

use super::{load_api_key, runtime, spinner};
use crate::error::CliError;

/// Show the detail page for a single game.
pub(crate) fn run(id: u64) -> Result<(), CliError> {
    let key = load_api_key()?;
    let rt = runtime()?;

    rt.block_on(async {
        let client = CatalogClient::new(key)?;
        let mut cache = GameCache::new();

        let pb = spinner("Fetching game...");
        let detail = cache.get(&client, id).await;
        pb.finish_and_clear();

        match detail {
            Ok(detail) => {
                print_detail(&detail);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                println!("{}", "Oops...".if_supports_color(Stdout, |t| t.bold()));
                println!("This game does not exist (id {id})");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    })
}

fn print_detail(detail: &GameDetail) {
    println!("{}", detail.name.if_supports_color(Stdout, |t| t.bold()));
    if let Some(released) = &detail.released {
        println!(
            "{} {}",
            "Released:".if_supports_color(Stdout, |t| t.cyan()),
            released,
        );
    }
    if let Some(score) = detail.metacritic {
        println!(
            "{} {}",
            "Metascore:".if_supports_color(Stdout, |t| t.cyan()),
            score.if_supports_color(Stdout, |t| t.green()),
        );
    }

    let description = strip_html_tags(detail.description.as_deref());
    if !description.is_empty() {
        println!();
        println!("{}", description.trim());
    }

    println!();
    print_names(
        "Platforms:",
        detail.platforms.iter().map(|p| p.platform.name.as_str()),
    );
    print_names("Genres:", detail.genres.iter().map(|g| g.name.as_str()));
    print_names(
        "Publishers:",
        detail.publishers.iter().map(|p| p.name.as_str()),
    );
}

fn print_names<'a>(label: &str, names: impl Iterator<Item = &'a str>) {
    let joined = names.collect::<Vec<_>>().join(", ");
    if !joined.is_empty() {
        println!(
            "{} {}",
            label.if_supports_color(Stdout, |t| t.cyan()),
            joined,
        );
    }
}
