use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedex_api::{CatalogClient, GenresDirectory};

use super::{load_api_key, runtime, spinner};
use crate::error::CliError;

/// List genres with their game counts.
pub(crate) fn run() -> Result<(), CliError> {
    let key = load_api_key()?;
    let rt = runtime()?;

    rt.block_on(async {
        let client = CatalogClient::new(key)?;
        let mut directory = GenresDirectory::new();

        let pb = spinner("Fetching genres...");
        let genres = directory.get(&client).await;
        pb.finish_and_clear();
        let genres = genres?;

        if genres.is_empty() {
            println!(
                "{}",
                "No genres found.".if_supports_color(Stdout, |t| t.dimmed()),
            );
            return Ok(());
        }

        println!("{}", "Genres".if_supports_color(Stdout, |t| t.bold()));
        println!();
        for genre in &genres {
            println!(
                "  {} {}",
                genre.name.if_supports_color(Stdout, |t| t.bold()),
                format!("({} games)", genre.games_count)
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        Ok(())
    })
}
