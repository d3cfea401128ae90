use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedex_api::{ApiKey, CatalogClient, config_path, credential_source};

use super::{runtime, spinner};
use crate::error::CliError;

/// Mask a secret, showing only the first 2 characters.
fn mask_value(s: &str) -> String {
    if s.len() <= 2 {
        "****".to_string()
    } else {
        format!("{}****", &s[..2])
    }
}

/// Show the current API key and its source.
pub(crate) fn run_show() -> Result<(), CliError> {
    let path = config_path();
    let source = credential_source();

    println!(
        "{}",
        "Catalog API Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();

    match &path {
        Some(p) if p.exists() => {
            println!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            println!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            println!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }

    let source_str = format!("({})", source);
    match ApiKey::load() {
        Ok(key) => println!(
            "  {} {} {}",
            "api_key:".if_supports_color(Stdout, |t| t.cyan()),
            mask_value(key.value()),
            source_str.if_supports_color(Stdout, |t| t.dimmed()),
        ),
        Err(_) => println!(
            "  {} {} {}",
            "api_key:".if_supports_color(Stdout, |t| t.cyan()),
            "not set".if_supports_color(Stdout, |t| t.yellow()),
            source_str.if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
    Ok(())
}

/// Interactively set up the API key.
pub(crate) fn run_setup() -> Result<(), CliError> {
    println!(
        "{}",
        "Catalog API Key Setup".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();

    let existing = ApiKey::load().ok();
    let key = loop {
        match existing.as_ref() {
            Some(key) => print!("  api_key [{}]: ", mask_value(key.value())),
            None => print!("  api_key: "),
        }
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        let trimmed = input.trim();

        if !trimmed.is_empty() {
            break ApiKey::new(trimmed);
        }
        if let Some(key) = existing.as_ref() {
            break key.clone();
        }
        println!(
            "    {}",
            "This field is required.".if_supports_color(Stdout, |t| t.yellow()),
        );
    };

    let path = gamedex_api::save_to_file(&key).map_err(|e| CliError::config(e.to_string()))?;
    println!();
    println!(
        "{} API key saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Test the API key against the catalog API.
pub(crate) fn run_test() -> Result<(), CliError> {
    let key = ApiKey::load().map_err(|e| {
        eprintln!("Run 'gamedex config setup' to configure the API key.");
        CliError::config(e.to_string())
    })?;

    println!("Testing API key against the catalog API...");
    let rt = runtime()?;

    rt.block_on(async {
        let pb = spinner("Connecting...");
        let client = CatalogClient::new(key)?;
        let result = client.list_genres().await;
        pb.finish_and_clear();

        match result {
            Ok(page) => {
                println!(
                    "{} API key is valid! ({} genres visible)",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    page.count,
                );
                Ok(())
            }
            Err(e) => Err(CliError::config(format!("API key validation failed: {e}"))),
        }
    })
}

/// Print the config file path.
pub(crate) fn run_path() -> Result<(), CliError> {
    match config_path() {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(CliError::config("Could not determine config directory")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_secrets_are_fully_masked() {
        assert_eq!(mask_value("ab"), "****");
        assert_eq!(mask_value(""), "****");
    }

    #[test]
    fn longer_secrets_keep_a_prefix() {
        assert_eq!(mask_value("abcdef"), "ab****");
    }
}
